// ============================================================================
// ADMIN BOOKINGS - Full booking list with filters
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{self, ElementBuilder};
use crate::models::{Booking, NotificationKind};
use crate::services::AdminBookingFilters;
use crate::state::AppContext;
use crate::utils::validate::{sanitize_digits, BOOKING_ID_MAX_LENGTH, PASSENGER_ID_MAX_LENGTH};
use crate::utils::{money, time};
use crate::views::muted_line;
use crate::views::search::{cell, table_head};

const BOOKING_FILTER_ID: &str = "admin-filter-booking";
const DATE_FILTER_ID: &str = "admin-filter-date";
const PASSENGER_FILTER_ID: &str = "admin-filter-passenger";
const RESULTS_ID: &str = "admin-bookings-results";

pub fn render(ctx: &AppContext) -> Result<Element, JsValue> {
    let booking_filter = ElementBuilder::new("input")?
        .id(BOOKING_FILTER_ID)?
        .class("input")
        .attr("type", "text")?
        .attr("placeholder", "Booking ID")?
        .attr("maxlength", &BOOKING_ID_MAX_LENGTH.to_string())?
        .build();

    let date_filter = ElementBuilder::new("input")?
        .id(DATE_FILTER_ID)?
        .class("input")
        .attr("type", "date")?
        .attr("min", &time::today_ymd())?
        .build();

    let passenger_filter = ElementBuilder::new("input")?
        .id(PASSENGER_FILTER_ID)?
        .class("input")
        .attr("type", "text")?
        .attr("inputmode", "numeric")?
        .attr("placeholder", "Passenger ID")?
        .build();
    {
        let input_ref = passenger_filter.clone();
        dom::on_input(&passenger_filter, move |event| {
            let clean = sanitize_digits(&dom::event_target_value(&event), PASSENGER_ID_MAX_LENGTH);
            dom::set_input_value(&input_ref, &clean);
        })?;
    }

    let apply = ElementBuilder::new("button")?
        .class("btn btn-primary")
        .attr("type", "button")?
        .text("Apply")
        .build();
    {
        let ctx = ctx.clone();
        dom::on_click(&apply, move |_| {
            let filters = match read_filters() {
                Ok(filters) => filters,
                Err(message) => {
                    ctx.notify(message, NotificationKind::Warn);
                    return;
                }
            };
            let ctx = ctx.clone();
            spawn_local(async move { load(&ctx, filters).await });
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
            for id in [BOOKING_FILTER_ID, DATE_FILTER_ID, PASSENGER_FILTER_ID] {
                if let Some(input) = dom::get_element_by_id(id) {
                    dom::set_input_value(&input, "");
                }
            }
            let ctx = ctx.clone();
            spawn_local(async move { load(&ctx, AdminBookingFilters::default()).await });
        })?;
    }

    let controls = ElementBuilder::new("div")?
        .class("row")
        .child(booking_filter)?
        .child(date_filter)?
        .child(passenger_filter)?
        .child(apply)?
        .child(clear)?
        .build();

    let card = ElementBuilder::new("section")?
        .class("card")
        .child(controls)?
        .build();

    let results = ElementBuilder::new("div")?
        .id(RESULTS_ID)?
        .class("results")
        .build();

    {
        let ctx = ctx.clone();
        spawn_local(async move { load(&ctx, AdminBookingFilters::default()).await });
    }

    Ok(ElementBuilder::new("div")?
        .class("page-admin-bookings")
        .child(card)?
        .child(results)?
        .build())
}

fn read_filters() -> Result<AdminBookingFilters, String> {
    let value = |id: &str| {
        dom::get_element_by_id(id)
            .map(|e| dom::input_value(&e))
            .unwrap_or_default()
            .trim()
            .to_string()
    };

    let mut filters = AdminBookingFilters::default();

    let booking_id = value(BOOKING_FILTER_ID);
    if !booking_id.is_empty() {
        filters.booking_id = Some(booking_id);
    }

    let date = value(DATE_FILTER_ID);
    if !date.is_empty() {
        if date < time::today_ymd() {
            return Err("Journey date cannot be in the past".to_string());
        }
        filters.date = Some(date);
    }

    let passenger_id = value(PASSENGER_FILTER_ID);
    if !passenger_id.is_empty() {
        filters.passenger_id = passenger_id.parse().ok();
    }

    Ok(filters)
}

async fn load(ctx: &AppContext, filters: AdminBookingFilters) {
    let Some(container) = dom::get_element_by_id(RESULTS_ID) else {
        return;
    };
    dom::set_text_content(&container, "Loading…");
    match ctx.api.admin_bookings(&filters).await {
        Ok(bookings) => {
            ctx.notify("Bookings loaded", NotificationKind::Success);
            if let Err(e) = show(&container, &bookings) {
                log::error!("failed to render admin bookings: {:?}", e);
            }
        }
        Err(e) => {
            dom::set_text_content(&container, "");
            ctx.notify(e.message, NotificationKind::Error);
        }
    }
}

fn show(container: &Element, bookings: &[Booking]) -> Result<(), JsValue> {
    dom::set_inner_html(container, "");
    if bookings.is_empty() {
        dom::append_child(container, &muted_line("No bookings match these filters.")?)?;
        return Ok(());
    }

    let mut body = ElementBuilder::new("tbody")?;
    for booking in bookings {
        body = body.child(
            ElementBuilder::new("tr")?
                .child(cell(&booking.booking_id)?)?
                .child(cell(&booking.passenger_id.to_string())?)?
                .child(cell(&format!("{} → {}", booking.source, booking.destination))?)?
                .child(cell(&booking.date_of_journey)?)?
                .child(cell(&booking.seat_numbers)?)?
                .child(cell(&money(booking.total_price))?)?
                .child(cell(booking.status.as_str())?)?
                .build(),
        )?;
    }
    let table = ElementBuilder::new("table")?
        .class("table")
        .child(table_head(&[
            "Booking ID",
            "Passenger",
            "Route",
            "Date",
            "Seats",
            "Total",
            "Status",
        ])?)?
        .child(body.build())?
        .build();
    let card = ElementBuilder::new("section")?
        .class("card")
        .child(table)?
        .build();
    dom::append_child(container, &card)
}
