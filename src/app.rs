// ============================================================================
// APP - Owns the shared context and the root element
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom;
use crate::state::AppContext;
use crate::views;

pub struct App {
    ctx: AppContext,
    root: Element,
}

impl App {
    pub fn new() -> Result<Self, JsValue> {
        let root = dom::get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("Missing #app mount point"))?;
        let ctx = AppContext::new();
        ctx.theme.apply();

        // State changes that don't go through the hash (login on the same
        // page, logout) request a render; defer it a tick so the requesting
        // handler finishes first.
        ctx.subscribe(|| {
            Timeout::new(0, crate::rerender_app).forget();
        });

        Ok(Self { ctx, root })
    }

    /// Full re-render: clear the root and rebuild the page for the current
    /// hash. Toasts live outside the root and survive this.
    pub fn render(&self) -> Result<(), JsValue> {
        dom::set_inner_html(&self.root, "");
        let view = views::render_app(&self.ctx)?;
        dom::append_child(&self.root, &view)
    }
}
