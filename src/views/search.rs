// ============================================================================
// SEARCH - Route search, open to guests and passengers
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{self, ElementBuilder};
use crate::models::{NotificationKind, Role, Route};
use crate::router::Page;
use crate::state::AppContext;
use crate::utils::validate::{is_letters_and_spaces, sanitize_place};
use crate::utils::{money, pretty_time, time};
use crate::views::{labeled_field, muted_line, register::sanitized_input};

const SOURCE_ID: &str = "search-source";
const DESTINATION_ID: &str = "search-destination";
const DATE_ID: &str = "search-date";
const RESULTS_ID: &str = "search-results";

pub fn render(ctx: &AppContext) -> Result<Element, JsValue> {
    let title = ElementBuilder::new("h2")?.text("Find a bus").build();

    let today = time::today_ymd();
    let source = sanitized_input(SOURCE_ID, "From", sanitize_place)?;
    let destination = sanitized_input(DESTINATION_ID, "To", sanitize_place)?;
    let date = ElementBuilder::new("input")?
        .id(DATE_ID)?
        .class("input")
        .attr("type", "date")?
        .attr("min", &today)?
        .build();
    dom::set_input_value(&date, &today);

    let submit = ElementBuilder::new("button")?
        .class("btn btn-primary")
        .attr("type", "submit")?
        .text("Search")
        .build();

    let row = ElementBuilder::new("div")?
        .class("row form-row")
        .child(labeled_field("From", source)?)?
        .child(labeled_field("To", destination)?)?
        .child(labeled_field("Journey date", date)?)?
        .child(submit.clone())?
        .build();

    let form = ElementBuilder::new("form")?
        .class("form")
        .child(row)?
        .build();

    let results = ElementBuilder::new("div")?
        .id(RESULTS_ID)?
        .class("results")
        .build();

    let loading = Rc::new(Cell::new(false));
    {
        let ctx = ctx.clone();
        let loading = loading.clone();
        dom::on_submit(&form, move |_| {
            if loading.get() {
                return;
            }
            let (source, destination, date) = match read_and_validate() {
                Ok(values) => values,
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
                run_search(&ctx, &source, &destination, &date).await;
                loading.set(false);
                let _ = submit.remove_attribute("disabled");
            });
        })?;
    }

    let card = ElementBuilder::new("section")?
        .class("card")
        .child(title)?
        .child(form)?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("page-search")
        .child(card)?
        .child(results)?
        .build())
}

fn read_and_validate() -> Result<(String, String, String), String> {
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

    let date = value(DATE_ID);
    if !time::is_valid_ymd(&date) {
        return Err("Please pick a journey date".to_string());
    }
    if date < time::today_ymd() {
        return Err("Journey date cannot be in the past".to_string());
    }
    Ok((source, destination, date))
}

async fn run_search(ctx: &AppContext, source: &str, destination: &str, date: &str) {
    let Some(container) = dom::get_element_by_id(RESULTS_ID) else {
        return;
    };
    dom::set_text_content(&container, "Searching…");

    // Passengers go through their scoped path; everyone else uses the
    // public one.
    let result = if ctx.session.role() == Role::Passenger {
        ctx.api.search_routes(source, destination, date).await
    } else {
        ctx.api.search_routes_public(source, destination, date).await
    };

    match result {
        Ok(routes) => {
            ctx.notify(
                format!("Found {} route(s)", routes.len()),
                NotificationKind::Success,
            );
            if let Err(e) = show_results(ctx, &container, &routes) {
                log::error!("failed to render search results: {:?}", e);
            }
        }
        Err(e) => {
            dom::set_text_content(&container, "");
            ctx.notify(e.message, NotificationKind::Error);
        }
    }
}

fn show_results(ctx: &AppContext, container: &Element, routes: &[Route]) -> Result<(), JsValue> {
    dom::set_inner_html(container, "");
    if routes.is_empty() {
        dom::append_child(container, &muted_line("No routes found for this search.")?)?;
        return Ok(());
    }

    let mut body = ElementBuilder::new("tbody")?;
    for route in routes {
        body = body.child(result_row(ctx, route)?)?;
    }
    let table = ElementBuilder::new("table")?
        .class("table")
        .child(table_head(&[
            "Route", "Date", "Departure", "Arrival", "Seats", "Price", "",
        ])?)?
        .child(body.build())?
        .build();

    let card = ElementBuilder::new("section")?
        .class("card")
        .child(table)?
        .build();
    dom::append_child(container, &card)
}

pub(crate) fn table_head(columns: &[&str]) -> Result<Element, JsValue> {
    let mut row = ElementBuilder::new("tr")?;
    for column in columns {
        row = row.child(ElementBuilder::new("th")?.text(column).build())?;
    }
    Ok(ElementBuilder::new("thead")?.child(row.build())?.build())
}

pub(crate) fn cell(text: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("td")?.text(text).build())
}

fn result_row(ctx: &AppContext, route: &Route) -> Result<Element, JsValue> {
    let action = ElementBuilder::new("td")?;
    let button = if route.sold_out() {
        ElementBuilder::new("button")?
            .class("btn btn-outline")
            .attr("type", "button")?
            .attr("disabled", "true")?
            .text("Sold out")
            .build()
    } else {
        let button = ElementBuilder::new("button")?
            .class("btn btn-primary")
            .attr("type", "button")?
            .text("Book")
            .build();
        let ctx = ctx.clone();
        let route = route.clone();
        dom::on_click(&button, move |_| {
            if ctx.session.role() != Role::Passenger {
                ctx.notify(
                    "Please login as a passenger to book seats",
                    NotificationKind::Warn,
                );
                ctx.navigate(Page::Login);
                return;
            }
            *ctx.carried_route.borrow_mut() = Some(route.clone());
            ctx.navigate(Page::Book {
                route_id: route.route_id,
            });
        })?;
        button
    };

    Ok(ElementBuilder::new("tr")?
        .child(cell(&format!("{} → {}", route.source, route.destination))?)?
        .child(cell(&route.date_of_journey)?)?
        .child(cell(&pretty_time(&route.departure_time))?)?
        .child(cell(&pretty_time(&route.arrival_time))?)?
        .child(cell(&format!(
            "{}/{}",
            route.available_seats, route.total_seats
        ))?)?
        .child(cell(&money(route.price))?)?
        .child(action.child(button)?.build())?
        .build())
}
