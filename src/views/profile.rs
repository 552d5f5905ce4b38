// ============================================================================
// PROFILE - Account details and logout
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{self, ElementBuilder};
use crate::models::Role;
use crate::state::AppContext;
use crate::views::muted_line;

pub fn render(ctx: &AppContext) -> Result<Element, JsValue> {
    let title = ElementBuilder::new("h2")?.text("Profile").build();

    let mut card = ElementBuilder::new("section")?
        .class("card card-narrow")
        .child(title)?;

    match (ctx.session.role(), ctx.session.passenger()) {
        (Role::Passenger, Some(passenger)) => {
            card = card.child(detail("Name", &passenger.name)?)?;
            if let Some(email) = &passenger.email {
                card = card.child(detail("Email", email)?)?;
            }
            if let Some(phone) = passenger.phone {
                card = card.child(detail("Phone", &phone.to_string())?)?;
            }
        }
        (Role::Admin, _) => {
            card = card.child(muted_line("Administrator account.")?)?;
        }
        // The guard keeps guests out; a passenger without a profile means
        // the stored session went stale.
        _ => {
            card = card.child(muted_line("Profile details unavailable. Please login again.")?)?;
        }
    }

    let logout = ElementBuilder::new("button")?
        .class("btn btn-outline btn-danger")
        .attr("type", "button")?
        .text("Logout")
        .build();
    {
        let ctx = ctx.clone();
        dom::on_click(&logout, move |_| ctx.logout())?;
    }
    card = card.child(logout)?;

    Ok(ElementBuilder::new("div")?
        .class("page-profile")
        .child(card.build())?
        .build())
}

fn detail(label: &str, value: &str) -> Result<Element, JsValue> {
    let caption = ElementBuilder::new("div")?
        .class("small muted")
        .text(label)
        .build();
    let text = ElementBuilder::new("div")?.text(value).build();
    Ok(ElementBuilder::new("div")?
        .class("profile-detail")
        .child(caption)?
        .child(text)?
        .build())
}
