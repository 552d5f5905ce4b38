// ============================================================================
// MY BOOKINGS - Passenger booking history with cancel
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{self, ElementBuilder};
use crate::models::{Booking, NotificationKind};
use crate::state::AppContext;
use crate::utils::money;
use crate::utils::validate::BOOKING_ID_MAX_LENGTH;
use crate::views::muted_line;
use crate::views::search::{cell, table_head};

const FILTER_ID: &str = "my-bookings-filter";
const RESULTS_ID: &str = "my-bookings-results";

pub fn render(ctx: &AppContext) -> Result<Element, JsValue> {
    let title = ElementBuilder::new("h2")?.text("My bookings").build();

    let filter = ElementBuilder::new("input")?
        .id(FILTER_ID)?
        .class("input")
        .attr("type", "text")?
        .attr("placeholder", "Filter by booking ID")?
        .attr("maxlength", &BOOKING_ID_MAX_LENGTH.to_string())?
        .build();

    let search = ElementBuilder::new("button")?
        .class("btn btn-primary")
        .attr("type", "button")?
        .text("Search")
        .build();
    {
        let ctx = ctx.clone();
        dom::on_click(&search, move |_| {
            let ctx = ctx.clone();
            spawn_local(async move { load(&ctx, current_filter()).await });
        })?;
    }

    let clear = ElementBuilder::new("button")?
        .class("btn btn-outline")
        .attr("type", "button")?
        .text("Clear")
        .build();
    {
        let ctx = ctx.clone();
        dom::on_click(&clear, move |_| {
            if let Some(input) = dom::get_element_by_id(FILTER_ID) {
                dom::set_input_value(&input, "");
            }
            let ctx = ctx.clone();
            spawn_local(async move { load(&ctx, None).await });
        })?;
    }

    let controls = ElementBuilder::new("div")?
        .class("row")
        .child(filter)?
        .child(search)?
        .child(clear)?
        .build();

    let card = ElementBuilder::new("section")?
        .class("card")
        .child(title)?
        .child(controls)?
        .build();

    let results = ElementBuilder::new("div")?
        .id(RESULTS_ID)?
        .class("results")
        .build();

    {
        let ctx = ctx.clone();
        spawn_local(async move { load(&ctx, None).await });
    }

    Ok(ElementBuilder::new("div")?
        .class("page-my-bookings")
        .child(card)?
        .child(results)?
        .build())
}

fn current_filter() -> Option<String> {
    let value = dom::get_element_by_id(FILTER_ID)
        .map(|e| dom::input_value(&e))
        .unwrap_or_default();
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

async fn load(ctx: &AppContext, filter: Option<String>) {
    let Some(container) = dom::get_element_by_id(RESULTS_ID) else {
        return;
    };
    dom::set_text_content(&container, "Loading…");
    match ctx.api.my_bookings(filter.as_deref()).await {
        Ok(bookings) => {
            if let Err(e) = show_bookings(ctx, &container, &bookings) {
                log::error!("failed to render bookings: {:?}", e);
            }
        }
        Err(e) => {
            dom::set_text_content(&container, "");
            ctx.notify(e.message, NotificationKind::Error);
        }
    }
}

fn show_bookings(ctx: &AppContext, container: &Element, bookings: &[Booking]) -> Result<(), JsValue> {
    dom::set_inner_html(container, "");
    if bookings.is_empty() {
        dom::append_child(container, &muted_line("No bookings yet.")?)?;
        return Ok(());
    }

    let mut body = ElementBuilder::new("tbody")?;
    for booking in bookings {
        body = body.child(booking_row(ctx, booking)?)?;
    }
    let table = ElementBuilder::new("table")?
        .class("table")
        .child(table_head(&[
            "Booking ID",
            "Route",
            "Date",
            "Seats",
            "Total",
            "Status",
            "",
        ])?)?
        .child(body.build())?
        .build();
    let card = ElementBuilder::new("section")?
        .class("card")
        .child(table)?
        .build();
    dom::append_child(container, &card)
}

fn booking_row(ctx: &AppContext, booking: &Booking) -> Result<Element, JsValue> {
    let cancel = ElementBuilder::new("button")?
        .class("btn btn-outline btn-danger")
        .attr("type", "button")?
        .text("Cancel")
        .build();
    if booking.can_cancel() {
        let ctx = ctx.clone();
        let booking_id = booking.booking_id.clone();
        dom::on_click(&cancel, move |_| {
            if !dom::confirm(&format!("Cancel booking {booking_id}?")) {
                return;
            }
            let ctx = ctx.clone();
            let booking_id = booking_id.clone();
            spawn_local(async move {
                match ctx.api.cancel_booking(&booking_id).await {
                    Ok(message) => {
                        ctx.notify(message, NotificationKind::Success);
                        load(&ctx, current_filter()).await;
                    }
                    Err(e) => ctx.notify(e.message, NotificationKind::Error),
                }
            });
        })?;
    } else {
        dom::set_attribute(&cancel, "disabled", "true")?;
    }

    Ok(ElementBuilder::new("tr")?
        .child(cell(&booking.booking_id)?)?
        .child(cell(&format!("{} → {}", booking.source, booking.destination))?)?
        .child(cell(&booking.date_of_journey)?)?
        .child(cell(&booking.seat_numbers)?)?
        .child(cell(&money(booking.total_price))?)?
        .child(cell(booking.status.as_str())?)?
        .child(ElementBuilder::new("td")?.child(cancel)?.build())?
        .build())
}
