// ============================================================================
// MY TICKET - Printable view of the latest active booking
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{self, ElementBuilder};
use crate::models::{pick_ticket, Booking, NotificationKind};
use crate::state::AppContext;
use crate::utils::money;
use crate::views::muted_line;

const TICKET_ID: &str = "my-ticket";

pub fn render(ctx: &AppContext) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("div")?
        .id(TICKET_ID)?
        .class("page-my-ticket")
        .text("Loading…")
        .build();

    let ctx = ctx.clone();
    spawn_local(async move {
        let Some(container) = dom::get_element_by_id(TICKET_ID) else {
            return;
        };
        match ctx.api.my_bookings(None).await {
            Ok(bookings) => {
                let result = match pick_ticket(&bookings) {
                    Some(booking) => show_ticket(&container, booking),
                    None => {
                        dom::set_text_content(&container, "");
                        muted_line("No active bookings found.")
                            .and_then(|line| dom::append_child(&container, &line))
                    }
                };
                if let Err(e) = result {
                    log::error!("failed to render ticket: {:?}", e);
                }
            }
            Err(e) => {
                dom::set_text_content(&container, "");
                ctx.notify(e.message, NotificationKind::Error);
            }
        }
    });

    Ok(container)
}

fn show_ticket(container: &Element, booking: &Booking) -> Result<(), JsValue> {
    dom::set_text_content(container, "");

    let heading = ElementBuilder::new("h2")?.text("Your ticket").build();
    let status = ElementBuilder::new("div")?
        .class(if booking.can_cancel() {
            "badge badge-ok"
        } else {
            "badge badge-muted"
        })
        .text(booking.status.as_str())
        .build();

    let mut details = ElementBuilder::new("dl")?.class("ticket-details");
    for (label, value) in [
        ("Booking ID", booking.booking_id.clone()),
        (
            "Route",
            format!("{} → {}", booking.source, booking.destination),
        ),
        ("Journey date", booking.date_of_journey.clone()),
        ("Seats", booking.seat_numbers.clone()),
        ("Total paid", money(booking.total_price)),
    ] {
        details = details
            .child(ElementBuilder::new("dt")?.class("small muted").text(label).build())?
            .child(ElementBuilder::new("dd")?.text(&value).build())?;
    }

    let card = ElementBuilder::new("section")?
        .class("card ticket-card")
        .child(heading)?
        .child(status)?
        .child(details.build())?
        .build();
    dom::append_child(container, &card)
}
