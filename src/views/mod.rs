// ============================================================================
// VIEWS - Page rendering (direct DOM, no framework)
// ============================================================================

pub mod admin;
pub mod book;
pub mod home;
pub mod login;
pub mod my_bookings;
pub mod my_ticket;
pub mod navbar;
pub mod profile;
pub mod register;
pub mod search;
pub mod toasts;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{self, ElementBuilder};
use crate::router::{self, Page, Resolution};
use crate::state::AppContext;

/// Render the whole application for the current location hash: guard the
/// requested page by role, then compose it into the passenger layout or the
/// admin shell.
pub fn render_app(ctx: &AppContext) -> Result<Element, JsValue> {
    let hash = dom::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default();
    let requested = Page::from_hash(&hash);

    let page = match router::resolve(requested, ctx.session.role()) {
        Resolution::Render(page) => page,
        Resolution::Redirect(target) => {
            log::info!("redirecting {:?} -> {:?}", requested, target);
            // Keep the address bar consistent with what is shown.
            if let Some(win) = dom::window() {
                let _ = win.location().set_hash(&target.hash());
            }
            target
        }
    };

    let content = render_page(ctx, page)?;

    if page.is_admin() {
        return admin::shell::render(ctx, page, content);
    }

    let container = ElementBuilder::new("div")?
        .class("container container-main")
        .child(content)?
        .build();

    Ok(ElementBuilder::new("div")?
        .class("app-layout")
        .child(navbar::render(ctx)?)?
        .child(container)?
        .child(render_footer()?)?
        .build())
}

fn render_page(ctx: &AppContext, page: Page) -> Result<Element, JsValue> {
    match page {
        Page::Home => home::render(ctx),
        Page::Login => login::render(ctx),
        Page::Register => register::render(ctx),
        Page::Search => search::render(ctx),
        Page::Book { route_id } => book::render(ctx, route_id),
        Page::MyBookings => my_bookings::render(ctx),
        Page::MyTicket => my_ticket::render(ctx),
        Page::Profile => profile::render(ctx),
        Page::AdminStats => admin::statistics::render(ctx),
        Page::AdminBookings => admin::bookings::render(ctx),
        Page::AdminAddRoute => admin::add_route::render(ctx),
    }
}

fn render_footer() -> Result<Element, JsValue> {
    let inner = ElementBuilder::new("div")?
        .class("small muted")
        .text("SwiftBus — book bus seats across the country")
        .build();
    Ok(ElementBuilder::new("footer")?
        .class("footer")
        .child(inner)?
        .build())
}

// ---- small shared form helpers ------------------------------------------

/// A column with a small muted label above a control.
pub(crate) fn labeled_field(label: &str, control: Element) -> Result<Element, JsValue> {
    let caption = ElementBuilder::new("div")?
        .class("small muted")
        .text(label)
        .build();
    Ok(ElementBuilder::new("div")?
        .class("col")
        .child(caption)?
        .child(control)?
        .build())
}

pub(crate) fn muted_line(text: &str) -> Result<Element, JsValue> {
    Ok(ElementBuilder::new("div")?.class("muted").text(text).build())
}
