// ============================================================================
// ADMIN ADD ROUTE - Route creation form
// ============================================================================
// Times are edited through 12-hour hour/minute/AM-PM selectors and composed
// into the 24-hour "HH:MM" strings the backend expects.
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{self, ElementBuilder};
use crate::models::{NewRouteRequest, NotificationKind};
use crate::state::AppContext;
use crate::utils::time::{self, time_12_to_24, time_24_to_12, Period};
use crate::utils::validate::{
    is_letters_and_spaces, sanitize_digits, sanitize_place, PRICE_MAX_DIGITS, SEATS_MAX_DIGITS,
};
use crate::views::{labeled_field, register::sanitized_input};

const SOURCE_ID: &str = "route-source";
const DESTINATION_ID: &str = "route-destination";
const DATE_ID: &str = "route-date";
const SEATS_ID: &str = "route-seats";
const PRICE_ID: &str = "route-price";

const DEFAULT_DEPARTURE: &str = "09:00";
const DEFAULT_ARRIVAL: &str = "12:00";
const DEFAULT_SEATS: &str = "40";
const DEFAULT_PRICE: &str = "500";

/// The three selector ids making up one time group.
struct TimeGroup {
    hour: &'static str,
    minute: &'static str,
    period: &'static str,
}

const DEPARTURE: TimeGroup = TimeGroup {
    hour: "route-dep-hour",
    minute: "route-dep-minute",
    period: "route-dep-period",
};
const ARRIVAL: TimeGroup = TimeGroup {
    hour: "route-arr-hour",
    minute: "route-arr-minute",
    period: "route-arr-period",
};

pub fn render(ctx: &AppContext) -> Result<Element, JsValue> {
    let source = sanitized_input(SOURCE_ID, "Source city", sanitize_place)?;
    let destination = sanitized_input(DESTINATION_ID, "Destination city", sanitize_place)?;

    let today = time::today_ymd();
    let date = ElementBuilder::new("input")?
        .id(DATE_ID)?
        .class("input")
        .attr("type", "date")?
        .attr("min", &today)?
        .build();
    dom::set_input_value(&date, &today);

    let seats = digits_input(SEATS_ID, "Total seats", SEATS_MAX_DIGITS, DEFAULT_SEATS)?;
    let price = digits_input(PRICE_ID, "Price per seat", PRICE_MAX_DIGITS, DEFAULT_PRICE)?;

    let submit = ElementBuilder::new("button")?
        .class("btn btn-primary")
        .attr("type", "submit")?
        .text("Add route")
        .build();

    let form = ElementBuilder::new("form")?
        .class("form")
        .child(labeled_field("Source", source)?)?
        .child(labeled_field("Destination", destination)?)?
        .child(labeled_field("Journey date", date)?)?
        .child(labeled_field("Departure", time_selectors(&DEPARTURE, DEFAULT_DEPARTURE)?)?)?
        .child(labeled_field("Arrival", time_selectors(&ARRIVAL, DEFAULT_ARRIVAL)?)?)?
        .child(labeled_field("Total seats", seats)?)?
        .child(labeled_field("Price per seat (₹)", price)?)?
        .child(submit.clone())?
        .build();

    let loading = Rc::new(Cell::new(false));
    {
        let ctx = ctx.clone();
        let loading = loading.clone();
        dom::on_submit(&form, move |_| {
            if loading.get() {
                return;
            }
            let payload = match read_and_validate() {
                Ok(payload) => payload,
                Err(message) => {
                    ctx.notify(message, NotificationKind::Warn);
                    return;
                }
            };

            loading.set(true);
            dom::set_attribute(&submit, "disabled", "true").ok();
            let ctx = ctx.clone();
            let loading = loading.clone();
            let submit = submit.clone();
            spawn_local(async move {
                let result = ctx.api.add_route(&payload).await;
                loading.set(false);
                let _ = submit.remove_attribute("disabled");
                match result {
                    Ok(message) => {
                        ctx.notify(message, NotificationKind::Success);
                        reset_form();
                    }
                    Err(e) => ctx.notify(e.message, NotificationKind::Error),
                }
            });
        })?;
    }

    let card = ElementBuilder::new("section")?
        .class("card card-narrow")
        .child(form)?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("page-admin-add-route")
        .child(card)?
        .build())
}

fn digits_input(
    id: &str,
    placeholder: &str,
    max_digits: usize,
    default: &str,
) -> Result<Element, JsValue> {
    let input = ElementBuilder::new("input")?
        .id(id)?
        .class("input")
        .attr("type", "text")?
        .attr("inputmode", "numeric")?
        .attr("placeholder", placeholder)?
        .build();
    dom::set_input_value(&input, default);
    let input_ref = input.clone();
    dom::on_input(&input, move |event| {
        let clean = sanitize_digits(&dom::event_target_value(&event), max_digits);
        dom::set_input_value(&input_ref, &clean);
    })?;
    Ok(input)
}

fn time_selectors(group: &TimeGroup, default: &str) -> Result<Element, JsValue> {
    let parts = time_24_to_12(default);

    let mut hour = ElementBuilder::new("select")?.id(group.hour)?.class("input input-short");
    for h in 1..=12 {
        hour = hour.child(number_option(h, h == parts.hour)?)?;
    }

    let mut minute = ElementBuilder::new("select")?
        .id(group.minute)?
        .class("input input-short");
    for m in 0..60 {
        minute = minute.child(number_option(m, m == parts.minute)?)?;
    }

    let mut period = ElementBuilder::new("select")?
        .id(group.period)?
        .class("input input-short");
    for p in [Period::Am, Period::Pm] {
        let mut option = ElementBuilder::new("option")?
            .attr("value", p.as_str())?
            .text(p.as_str());
        if p == parts.period {
            option = option.attr("selected", "true")?;
        }
        period = period.child(option.build())?;
    }

    Ok(ElementBuilder::new("div")?
        .class("row time-group")
        .child(hour.build())?
        .child(minute.build())?
        .child(period.build())?
        .build())
}

fn number_option(value: u32, selected: bool) -> Result<Element, JsValue> {
    let mut option = ElementBuilder::new("option")?
        .attr("value", &value.to_string())?
        .text(&format!("{value:02}"));
    if selected {
        option = option.attr("selected", "true")?;
    }
    Ok(option.build())
}

/// Read one hour/minute/period selector group back into "HH:MM".
fn read_time(group: &TimeGroup) -> String {
    let select = |id: &str| {
        dom::get_element_by_id(id)
            .map(|e| dom::select_value(&e))
            .unwrap_or_default()
    };
    let hour = select(group.hour).parse().unwrap_or(9);
    let minute = select(group.minute).parse().unwrap_or(0);
    let period = if select(group.period) == "PM" {
        Period::Pm
    } else {
        Period::Am
    };
    time_12_to_24(hour, minute, period)
}

fn read_and_validate() -> Result<NewRouteRequest, String> {
    let value = |id: &str| {
        dom::get_element_by_id(id)
            .map(|e| dom::input_value(&e))
            .unwrap_or_default()
    };

    let source = value(SOURCE_ID).trim().to_string();
    if !is_letters_and_spaces(&source) {
        return Err("Please enter a source city".to_string());
    }
    let destination = value(DESTINATION_ID).trim().to_string();
    if !is_letters_and_spaces(&destination) {
        return Err("Please enter a destination city".to_string());
    }
    if source.eq_ignore_ascii_case(&destination) {
        return Err("Source and destination cannot be the same".to_string());
    }

    let date_of_journey = value(DATE_ID);
    if !time::is_valid_ymd(&date_of_journey) {
        return Err("Please pick a journey date".to_string());
    }
    if date_of_journey < time::today_ymd() {
        return Err("Journey date cannot be in the past".to_string());
    }

    let departure_time = read_time(&DEPARTURE);
    let arrival_time = read_time(&ARRIVAL);
    if !time::departure_before_arrival(&departure_time, &arrival_time) {
        return Err("Arrival time must be after departure time".to_string());
    }

    let total_seats: u32 = value(SEATS_ID)
        .parse()
        .map_err(|_| "Please enter total seats".to_string())?;
    if total_seats == 0 {
        return Err("Please enter total seats".to_string());
    }

    let price: f64 = value(PRICE_ID)
        .parse()
        .map_err(|_| "Please enter a valid price".to_string())?;
    if price <= 0.0 {
        return Err("Please enter a valid price".to_string());
    }

    Ok(NewRouteRequest {
        source,
        destination,
        departure_time,
        arrival_time,
        date_of_journey,
        total_seats,
        price,
    })
}

/// Back to the defaults after a successful submit.
fn reset_form() {
    let set = |id: &str, value: &str| {
        if let Some(input) = dom::get_element_by_id(id) {
            dom::set_input_value(&input, value);
        }
    };
    set(SOURCE_ID, "");
    set(DESTINATION_ID, "");
    set(DATE_ID, &time::today_ymd());
    set(SEATS_ID, DEFAULT_SEATS);
    set(PRICE_ID, DEFAULT_PRICE);

    for (group, default) in [(&DEPARTURE, DEFAULT_DEPARTURE), (&ARRIVAL, DEFAULT_ARRIVAL)] {
        let parts = time_24_to_12(default);
        let set_select = |id: &str, value: &str| {
            if let Some(select) = dom::get_element_by_id(id) {
                dom::set_select_value(&select, value);
            }
        };
        set_select(group.hour, &parts.hour.to_string());
        set_select(group.minute, &parts.minute.to_string());
        set_select(group.period, parts.period.as_str());
    }
}
