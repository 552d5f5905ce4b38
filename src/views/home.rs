// ============================================================================
// HOME - Public landing page
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{self, ElementBuilder};
use crate::models::Role;
use crate::router::Page;
use crate::state::AppContext;

pub fn render(ctx: &AppContext) -> Result<Element, JsValue> {
    let title = ElementBuilder::new("h1")?
        .class("hero-title")
        .text("Travel the easy way")
        .build();
    let subtitle = ElementBuilder::new("p")?
        .class("muted")
        .text("Search routes, pick your seats and book bus tickets in seconds.")
        .build();

    let actions = ElementBuilder::new("div")?.class("row hero-actions");
    let actions = actions.child(action_button(ctx, "Search buses", "btn btn-primary", Page::Search)?)?;
    let actions = if ctx.session.role() == Role::Guest {
        actions
            .child(action_button(ctx, "Login", "btn btn-outline", Page::Login)?)?
            .child(action_button(ctx, "Register", "btn btn-outline", Page::Register)?)?
    } else {
        actions.child(action_button(
            ctx,
            "My Bookings",
            "btn btn-outline",
            Page::MyBookings,
        )?)?
    };

    let hero = ElementBuilder::new("section")?
        .class("card hero")
        .child(title)?
        .child(subtitle)?
        .child(actions.build())?
        .build();

    Ok(ElementBuilder::new("div")?.class("page-home").child(hero)?.build())
}

fn action_button(
    ctx: &AppContext,
    label: &str,
    class: &str,
    target: Page,
) -> Result<Element, JsValue> {
    let button = ElementBuilder::new("button")?
        .class(class)
        .attr("type", "button")?
        .text(label)
        .build();
    let ctx = ctx.clone();
    dom::on_click(&button, move |_| ctx.navigate(target))?;
    Ok(button)
}
