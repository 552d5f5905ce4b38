// ============================================================================
// NAVBAR - Top navigation for passenger/guest pages
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{self, ElementBuilder};
use crate::models::Role;
use crate::router::Page;
use crate::state::{AppContext, Theme};

pub fn render(ctx: &AppContext) -> Result<Element, JsValue> {
    let current = dom::window()
        .and_then(|w| w.location().hash().ok())
        .map(|h| Page::from_hash(&h))
        .unwrap_or(Page::Home);

    let brand = ElementBuilder::new("a")?
        .class("brand")
        .attr("href", &Page::Home.hash())?
        .text("🚌 SwiftBus")
        .build();

    let links = ElementBuilder::new("nav")?.class("nav-links");
    let links = match ctx.session.role() {
        Role::Passenger => links
            .child(nav_link("Home", Page::Home, current)?)?
            .child(nav_link("Search", Page::Search, current)?)?
            .child(nav_link("My Bookings", Page::MyBookings, current)?)?
            .child(nav_link("My Ticket", Page::MyTicket, current)?)?
            .child(nav_link("Profile", Page::Profile, current)?)?,
        _ => links
            .child(nav_link("Home", Page::Home, current)?)?
            .child(nav_link("Search", Page::Search, current)?)?
            .child(nav_link("Login", Page::Login, current)?)?
            .child(nav_link("Register", Page::Register, current)?)?,
    };

    let actions = ElementBuilder::new("div")?.class("nav-actions");
    let actions = actions.child(theme_button(ctx)?)?;
    let actions = if ctx.session.role() == Role::Passenger {
        actions.child(logout_button(ctx)?)?
    } else {
        actions
    };

    Ok(ElementBuilder::new("header")?
        .class("navbar")
        .child(brand)?
        .child(links.build())?
        .child(actions.build())?
        .build())
}

fn nav_link(label: &str, target: Page, current: Page) -> Result<Element, JsValue> {
    let class = if target == current {
        "nav-link active"
    } else {
        "nav-link"
    };
    Ok(ElementBuilder::new("a")?
        .class(class)
        .attr("href", &target.hash())?
        .text(label)
        .build())
}

fn theme_icon(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "☀️",
        Theme::Light => "🌙",
    }
}

/// Toggles the theme in place; no page re-render needed, only the button
/// icon and the document attribute change.
pub(crate) fn theme_button(ctx: &AppContext) -> Result<Element, JsValue> {
    let button = ElementBuilder::new("button")?
        .class("btn btn-ghost")
        .attr("type", "button")?
        .attr("title", "Toggle theme")?
        .text(theme_icon(ctx.theme.current()))
        .build();

    let theme = ctx.theme.clone();
    let button_ref = button.clone();
    dom::on_click(&button, move |_| {
        theme.toggle();
        theme.apply();
        dom::set_text_content(&button_ref, theme_icon(theme.current()));
    })?;
    Ok(button)
}

fn logout_button(ctx: &AppContext) -> Result<Element, JsValue> {
    let button = ElementBuilder::new("button")?
        .class("btn btn-outline")
        .attr("type", "button")?
        .text("Logout")
        .build();
    let ctx = ctx.clone();
    dom::on_click(&button, move |_| ctx.logout())?;
    Ok(button)
}
