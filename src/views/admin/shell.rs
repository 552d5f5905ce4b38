// ============================================================================
// ADMIN SHELL - Sidebar layout wrapping every admin page
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{self, ElementBuilder};
use crate::router::Page;
use crate::state::AppContext;
use crate::views::navbar::theme_button;

pub fn render(ctx: &AppContext, page: Page, content: Element) -> Result<Element, JsValue> {
    let heading = ElementBuilder::new("h3")?.text("Admin Menu").build();

    let links = ElementBuilder::new("nav")?
        .class("admin-links")
        .child(menu_link("Dashboard", Page::AdminStats, page)?)?
        .child(menu_link("Add Route", Page::AdminAddRoute, page)?)?
        .child(menu_link("View All Bookings", Page::AdminBookings, page)?)?
        .build();

    let logout = ElementBuilder::new("button")?
        .class("btn btn-outline btn-danger")
        .attr("type", "button")?
        .text("Logout")
        .build();
    {
        let ctx = ctx.clone();
        dom::on_click(&logout, move |_| ctx.logout())?;
    }

    let footer = ElementBuilder::new("div")?
        .class("admin-sidebar-footer")
        .child(theme_button(ctx)?)?
        .child(logout)?
        .build();

    let sidebar = ElementBuilder::new("aside")?
        .class("admin-sidebar")
        .child(heading)?
        .child(links)?
        .child(footer)?
        .build();

    let header = ElementBuilder::new("header")?
        .class("admin-header")
        .child(ElementBuilder::new("h2")?.text(page.admin_title()).build())?
        .build();

    let main = ElementBuilder::new("main")?
        .class("admin-content")
        .child(header)?
        .child(content)?
        .build();

    let layout = ElementBuilder::new("div")?
        .class("admin-layout")
        .child(sidebar)?
        .child(main)?
        .build();

    Ok(ElementBuilder::new("section")?
        .class("admin-dashboard")
        .child(layout)?
        .build())
}

fn menu_link(label: &str, target: Page, current: Page) -> Result<Element, JsValue> {
    let class = if target == current {
        "admin-link active"
    } else {
        "admin-link"
    };
    Ok(ElementBuilder::new("a")?
        .class(class)
        .attr("href", &target.hash())?
        .text(label)
        .build())
}
