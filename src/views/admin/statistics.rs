// ============================================================================
// ADMIN STATISTICS - Dashboard counters, percent meters and revenue circle
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{self, ElementBuilder};
use crate::models::{revenue_slices, NotificationKind, RevenueSlices, Statistics};
use crate::services::AdminBookingFilters;
use crate::state::AppContext;
use crate::utils::money;

const STATS_ID: &str = "admin-stats";

pub fn render(ctx: &AppContext) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?
        .id(STATS_ID)?
        .class("stats-grid")
        .text("Loading…")
        .build();

    let refresh = ElementBuilder::new("button")?
        .class("btn btn-outline")
        .attr("type", "button")?
        .text("Refresh")
        .build();
    {
        let ctx = ctx.clone();
        dom::on_click(&refresh, move |_| {
            let ctx = ctx.clone();
            spawn_local(async move { load(&ctx).await });
        })?;
    }

    {
        let ctx = ctx.clone();
        spawn_local(async move { load(&ctx).await });
    }

    Ok(ElementBuilder::new("div")?
        .class("page-admin-stats")
        .child(refresh)?
        .child(container)?
        .build())
}

async fn load(ctx: &AppContext) {
    let Some(container) = dom::get_element_by_id(STATS_ID) else {
        return;
    };
    dom::set_text_content(&container, "Loading…");

    let stats = match ctx.api.admin_statistics().await {
        Ok(stats) => stats,
        Err(e) => {
            dom::set_text_content(&container, "");
            ctx.notify(e.message, NotificationKind::Error);
            return;
        }
    };
    // The revenue split needs the full booking list; the counters endpoint
    // only reports the grand total.
    let slices = match ctx.api.admin_bookings(&AdminBookingFilters::default()).await {
        Ok(bookings) => revenue_slices(&bookings),
        Err(e) => {
            ctx.notify(e.message, NotificationKind::Warn);
            revenue_slices(&[])
        }
    };

    if let Err(e) = show(&container, &stats, &slices) {
        log::error!("failed to render statistics: {:?}", e);
    }
}

fn show(container: &Element, stats: &Statistics, slices: &RevenueSlices) -> Result<(), JsValue> {
    dom::set_inner_html(container, "");

    let counters = ElementBuilder::new("div")?
        .class("row stat-cards")
        .child(stat_card("Total bookings", &stats.total_bookings.to_string())?)?
        .child(stat_card("Confirmed", &stats.confirmed_bookings().to_string())?)?
        .child(stat_card("Cancelled", &stats.cancelled_bookings.to_string())?)?
        .child(stat_card("Total revenue", &money(stats.revenue))?)?
        .build();
    dom::append_child(container, &counters)?;

    let meters = ElementBuilder::new("section")?
        .class("card")
        .child(ElementBuilder::new("h3")?.text("Booking outcomes").build())?
        .child(meter("Confirmed", stats.confirmed_percent(), "meter-ok")?)?
        .child(meter("Cancelled", stats.cancelled_percent(), "meter-bad")?)?
        .build();
    dom::append_child(container, &meters)?;

    dom::append_child(container, &revenue_card(slices)?)
}

fn stat_card(label: &str, value: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?
        .class("card stat-card")
        .child(ElementBuilder::new("div")?.class("small muted").text(label).build())?
        .child(ElementBuilder::new("div")?.class("stat-value").text(value).build())?
        .build())
}

fn meter(label: &str, percent: u64, class: &str) -> Result<Element, JsValue> {
    let caption = ElementBuilder::new("div")?
        .class("small muted")
        .text(&format!("{label} · {percent}%"))
        .build();
    let fill = ElementBuilder::new("div")?
        .class(&format!("meter-fill {class}"))
        .attr("style", &format!("width:{percent}%"))?
        .build();
    let track = ElementBuilder::new("div")?
        .class("meter")
        .child(fill)?
        .build();
    Ok(ElementBuilder::new("div")?
        .class("meter-row")
        .child(caption)?
        .child(track)?
        .build())
}

/// Two-slice donut: each circle draws "<len> <circumference>" of stroke and
/// the cancelled slice is shifted past the confirmed one with a negative
/// dashoffset. The -90° rotation starts the first slice at 12 o'clock.
fn revenue_card(slices: &RevenueSlices) -> Result<Element, JsValue> {
    let svg = dom::create_svg_element("svg")?;
    dom::set_attribute(&svg, "viewBox", "0 0 80 80")?;
    dom::set_attribute(&svg, "class", "revenue-pie")?;

    for (class, len, offset) in [
        ("pie-confirmed", slices.confirmed_len, 0.0),
        ("pie-cancelled", slices.cancelled_len, -slices.confirmed_len),
    ] {
        let circle = dom::create_svg_element("circle")?;
        dom::set_attribute(&circle, "cx", "40")?;
        dom::set_attribute(&circle, "cy", "40")?;
        dom::set_attribute(&circle, "r", &slices.radius.to_string())?;
        dom::set_attribute(&circle, "fill", "none")?;
        dom::set_attribute(&circle, "class", class)?;
        dom::set_attribute(
            &circle,
            "stroke-dasharray",
            &format!("{len} {}", slices.circumference),
        )?;
        dom::set_attribute(&circle, "stroke-dashoffset", &offset.to_string())?;
        dom::set_attribute(&circle, "transform", "rotate(-90 40 40)")?;
        dom::append_child(&svg, &circle)?;
    }

    let legend = ElementBuilder::new("div")?
        .class("pie-legend small")
        .child(legend_line("pie-confirmed", "Confirmed", slices.confirmed_revenue)?)?
        .child(legend_line("pie-cancelled", "Cancelled", slices.cancelled_revenue)?)?
        .build();

    Ok(ElementBuilder::new("section")?
        .class("card")
        .child(ElementBuilder::new("h3")?.text("Revenue split").build())?
        .child(svg)?
        .child(legend)?
        .build())
}

fn legend_line(class: &str, label: &str, amount: f64) -> Result<Element, JsValue> {
    let dot = ElementBuilder::new("span")?
        .class(&format!("legend-dot {class}"))
        .build();
    Ok(ElementBuilder::new("div")?
        .class("legend-line")
        .child(dot)?
        .child(
            ElementBuilder::new("span")?
                .text(&format!("{label}: {}", money(amount)))
                .build(),
        )?
        .build())
}
