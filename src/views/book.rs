// ============================================================================
// BOOK - Seat booking form for one route
// ============================================================================
// The route object is carried in memory from the search page; it is not
// refetched by id. Landing here without it (deep link, reload) shows a
// pointer back to search instead of a half-filled form.
// ============================================================================

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{self, ElementBuilder};
use crate::models::{BookSeatsRequest, Gender, NotificationKind, PassengerInput, Route};
use crate::router::Page;
use crate::state::AppContext;
use crate::utils::validate::{is_letters_and_spaces, sanitize_age, sanitize_person_name};
use crate::utils::{money, pretty_time};
use crate::views::muted_line;

const ROWS_ID: &str = "book-rows";
const TOTAL_ID: &str = "book-total";

/// Form state for one passenger row. Age stays a string until submit so the
/// field can be empty while typing.
#[derive(Clone)]
struct RowState {
    name: String,
    age: String,
    gender: Gender,
}

impl Default for RowState {
    fn default() -> Self {
        Self {
            name: String::new(),
            age: String::new(),
            gender: Gender::Male,
        }
    }
}

pub fn render(ctx: &AppContext, route_id: i64) -> Result<Element, JsValue> {
    let carried = ctx.carried_route.borrow().clone();
    let route = match carried {
        Some(route) if route.route_id == route_id => route,
        _ => return render_missing(ctx),
    };

    let title = ElementBuilder::new("h2")?
        .text(&format!("{} → {}", route.source, route.destination))
        .build();
    let summary = ElementBuilder::new("p")?
        .class("small muted")
        .text(&format!(
            "{} · {} – {} · {} per seat · {} seat(s) left",
            route.date_of_journey,
            pretty_time(&route.departure_time),
            pretty_time(&route.arrival_time),
            money(route.price),
            route.available_seats
        ))
        .build();

    let rows_container = ElementBuilder::new("div")?.id(ROWS_ID)?.class("form").build();
    let total = ElementBuilder::new("div")?.id(TOTAL_ID)?.class("total-line").build();

    let rows: Rc<RefCell<Vec<RowState>>> = Rc::new(RefCell::new(vec![RowState::default()]));
    redraw_rows(&rows_container, &rows, &route, &total)?;

    let add = ElementBuilder::new("button")?
        .class("btn btn-outline")
        .attr("type", "button")?
        .text("Add passenger")
        .build();
    {
        let ctx = ctx.clone();
        let rows = rows.clone();
        let route = route.clone();
        let rows_container = rows_container.clone();
        let total = total.clone();
        dom::on_click(&add, move |_| {
            if rows.borrow().len() >= route.available_seats as usize {
                ctx.notify(
                    format!("Only {} seat(s) available on this bus", route.available_seats),
                    NotificationKind::Warn,
                );
                return;
            }
            rows.borrow_mut().push(RowState::default());
            if let Err(e) = redraw_rows(&rows_container, &rows, &route, &total) {
                log::error!("failed to redraw passenger rows: {:?}", e);
            }
        })?;
    }

    let reset = ElementBuilder::new("button")?
        .class("btn btn-ghost")
        .attr("type", "button")?
        .text("Reset")
        .build();
    {
        let rows = rows.clone();
        let route = route.clone();
        let rows_container = rows_container.clone();
        let total = total.clone();
        dom::on_click(&reset, move |_| {
            *rows.borrow_mut() = vec![RowState::default()];
            if let Err(e) = redraw_rows(&rows_container, &rows, &route, &total) {
                log::error!("failed to redraw passenger rows: {:?}", e);
            }
        })?;
    }

    let confirm = ElementBuilder::new("button")?
        .class("btn btn-primary")
        .attr("type", "button")?
        .text("Confirm booking")
        .build();
    let loading = Rc::new(Cell::new(false));
    {
        let ctx = ctx.clone();
        let rows = rows.clone();
        let loading = loading.clone();
        let confirm_ref = confirm.clone();
        dom::on_click(&confirm, move |_| {
            if loading.get() {
                return;
            }
            let payload = match collect_passengers(&rows.borrow()) {
                Ok(passengers) => BookSeatsRequest { passengers },
                Err(message) => {
                    ctx.notify(message, NotificationKind::Warn);
                    return;
                }
            };

            loading.set(true);
            dom::set_attribute(&confirm_ref, "disabled", "true").ok();
            let ctx = ctx.clone();
            let loading = loading.clone();
            let confirm_ref = confirm_ref.clone();
            spawn_local(async move {
                let result = ctx.api.book_route(route_id, &payload).await;
                loading.set(false);
                let _ = confirm_ref.remove_attribute("disabled");
                match result {
                    Ok(booking) => {
                        ctx.carried_route.borrow_mut().take();
                        ctx.notify(
                            format!("Booked! Booking ID: {}", booking.booking_id),
                            NotificationKind::Success,
                        );
                        ctx.navigate(Page::MyBookings);
                    }
                    Err(e) => ctx.notify(e.message, NotificationKind::Error),
                }
            });
        })?;
    }

    let actions = ElementBuilder::new("div")?
        .class("row")
        .child(add)?
        .child(reset)?
        .child(confirm)?
        .build();

    let card = ElementBuilder::new("section")?
        .class("card")
        .child(title)?
        .child(summary)?
        .child(rows_container)?
        .child(total)?
        .child(actions)?
        .build();

    Ok(ElementBuilder::new("div")?.class("page-book").child(card)?.build())
}

fn render_missing(ctx: &AppContext) -> Result<Element, JsValue> {
    let back = ElementBuilder::new("button")?
        .class("btn btn-primary")
        .attr("type", "button")?
        .text("Back to search")
        .build();
    let ctx = ctx.clone();
    dom::on_click(&back, move |_| ctx.navigate(Page::Search))?;

    let card = ElementBuilder::new("section")?
        .class("card card-narrow")
        .child(ElementBuilder::new("h2")?.text("Route details not found").build())?
        .child(muted_line(
            "Bookings start from a search result. Run your search again to pick this route.",
        )?)?
        .child(back)?
        .build();
    Ok(ElementBuilder::new("div")?.class("page-book").child(card)?.build())
}

/// Rebuild the passenger row editors from state. Called after every add or
/// remove; per-keystroke edits only touch the state, not the DOM.
fn redraw_rows(
    container: &Element,
    rows: &Rc<RefCell<Vec<RowState>>>,
    route: &Route,
    total: &Element,
) -> Result<(), JsValue> {
    dom::set_inner_html(container, "");
    let snapshot = rows.borrow().clone();
    let single = snapshot.len() == 1;
    for (index, row) in snapshot.iter().enumerate() {
        dom::append_child(
            container,
            &passenger_row(container, rows, route, total, index, row, single)?,
        )?;
    }
    update_total(total, snapshot.len(), route.price);
    Ok(())
}

fn passenger_row(
    container: &Element,
    rows: &Rc<RefCell<Vec<RowState>>>,
    route: &Route,
    total: &Element,
    index: usize,
    row: &RowState,
    single: bool,
) -> Result<Element, JsValue> {
    let name = ElementBuilder::new("input")?
        .class("input")
        .attr("type", "text")?
        .attr("placeholder", "Passenger name")?
        .build();
    dom::set_input_value(&name, &row.name);
    {
        let rows = rows.clone();
        let name_ref = name.clone();
        dom::on_input(&name, move |event| {
            let clean = sanitize_person_name(&dom::event_target_value(&event));
            dom::set_input_value(&name_ref, &clean);
            if let Some(state) = rows.borrow_mut().get_mut(index) {
                state.name = clean;
            }
        })?;
    }

    let age = ElementBuilder::new("input")?
        .class("input input-short")
        .attr("type", "text")?
        .attr("inputmode", "numeric")?
        .attr("placeholder", "Age")?
        .build();
    dom::set_input_value(&age, &row.age);
    {
        let rows = rows.clone();
        let age_ref = age.clone();
        dom::on_input(&age, move |event| {
            let clean = sanitize_age(&dom::event_target_value(&event));
            dom::set_input_value(&age_ref, &clean);
            if let Some(state) = rows.borrow_mut().get_mut(index) {
                state.age = clean;
            }
        })?;
    }

    let mut gender = ElementBuilder::new("select")?.class("input input-short");
    for option_gender in Gender::ALL {
        let mut option = ElementBuilder::new("option")?
            .attr("value", option_gender.as_str())?
            .text(option_gender.label());
        if option_gender == row.gender {
            option = option.attr("selected", "true")?;
        }
        gender = gender.child(option.build())?;
    }
    let gender = gender.build();
    {
        let rows = rows.clone();
        dom::on_change(&gender, move |event| {
            let value = dom::event_target_value(&event);
            if let Some(state) = rows.borrow_mut().get_mut(index) {
                state.gender = Gender::from_value(&value);
            }
        })?;
    }

    let remove = ElementBuilder::new("button")?
        .class("btn btn-ghost")
        .attr("type", "button")?
        .text("✕")
        .build();
    if single {
        dom::set_attribute(&remove, "disabled", "true")?;
    } else {
        let rows = rows.clone();
        let route = route.clone();
        let container = container.clone();
        let total = total.clone();
        dom::on_click(&remove, move |_| {
            {
                let mut rows = rows.borrow_mut();
                if index < rows.len() && rows.len() > 1 {
                    rows.remove(index);
                }
            }
            if let Err(e) = redraw_rows(&container, &rows, &route, &total) {
                log::error!("failed to redraw passenger rows: {:?}", e);
            }
        })?;
    }

    Ok(ElementBuilder::new("div")?
        .class("row passenger-row")
        .child(name)?
        .child(age)?
        .child(gender)?
        .child(remove)?
        .build())
}

fn update_total(total: &Element, seats: usize, price: f64) {
    dom::set_text_content(
        total,
        &format!("Total seats: {seats} | Total: {}", money(price * seats as f64)),
    );
}

/// Submit-time validation, one message per first failing row.
fn collect_passengers(rows: &[RowState]) -> Result<Vec<PassengerInput>, String> {
    let mut passengers = Vec::with_capacity(rows.len());
    for (index, row) in rows.iter().enumerate() {
        let name = row.name.trim();
        if !is_letters_and_spaces(name) {
            return Err(format!("Passenger {}: please enter a name", index + 1));
        }
        let age: u32 = row
            .age
            .parse()
            .map_err(|_| format!("Passenger {}: please enter a valid age", index + 1))?;
        if age == 0 {
            return Err(format!("Passenger {}: please enter a valid age", index + 1));
        }
        passengers.push(PassengerInput {
            name: name.to_string(),
            age,
            gender: row.gender,
        });
    }
    Ok(passengers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_valid_rows() {
        let rows = vec![
            RowState {
                name: "Asha Rao".to_string(),
                age: "34".to_string(),
                gender: Gender::Female,
            },
            RowState {
                name: "Dev".to_string(),
                age: "8".to_string(),
                gender: Gender::Male,
            },
        ];
        let passengers = collect_passengers(&rows).unwrap();
        assert_eq!(passengers.len(), 2);
        assert_eq!(passengers[0].name, "Asha Rao");
        assert_eq!(passengers[1].age, 8);
    }

    #[test]
    fn first_invalid_row_is_named_in_the_message() {
        let rows = vec![
            RowState {
                name: "Asha".to_string(),
                age: "34".to_string(),
                gender: Gender::Female,
            },
            RowState::default(),
        ];
        assert_eq!(
            collect_passengers(&rows).unwrap_err(),
            "Passenger 2: please enter a name"
        );
    }

    #[test]
    fn zero_or_empty_age_is_rejected() {
        let rows = vec![RowState {
            name: "Asha".to_string(),
            age: "0".to_string(),
            gender: Gender::Female,
        }];
        assert_eq!(
            collect_passengers(&rows).unwrap_err(),
            "Passenger 1: please enter a valid age"
        );
    }
}
