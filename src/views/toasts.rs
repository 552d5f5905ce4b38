// ============================================================================
// TOASTS - Transient status messages
// ============================================================================
// The toast layer is appended to <body> once and survives page re-renders;
// each toast removes itself (and its queue entry) on its own timer.
// ============================================================================

use gloo_timers::callback::Timeout;
use web_sys::Element;

use crate::config::CONFIG;
use crate::dom::{self, ElementBuilder};
use crate::models::Notification;
use crate::state::AppContext;

const LAYER_ID: &str = "toast-layer";

fn layer() -> Option<Element> {
    if let Some(existing) = dom::get_element_by_id(LAYER_ID) {
        return Some(existing);
    }
    let document = dom::document()?;
    let body = document.body()?;
    let layer = ElementBuilder::new("div")
        .ok()?
        .id(LAYER_ID)
        .ok()?
        .class("toast-layer")
        .build();
    body.append_child(&layer).ok()?;
    Some(layer)
}

/// Mount one toast card and arm its eviction timer.
pub fn show(ctx: &AppContext, toast: &Notification) {
    let Some(layer) = layer() else {
        log::warn!("toast layer unavailable: {}", toast.message);
        return;
    };

    let card = match build_card(toast) {
        Ok(card) => card,
        Err(e) => {
            log::error!("failed to build toast: {:?}", e);
            return;
        }
    };
    if layer.append_child(&card).is_err() {
        return;
    }

    let id = toast.id;
    let queue = ctx.notifications.clone();
    Timeout::new(CONFIG.toast_ttl_ms, move || {
        card.remove();
        queue.dismiss(id);
    })
    .forget();
}

fn build_card(toast: &Notification) -> Result<Element, wasm_bindgen::JsValue> {
    let heading = ElementBuilder::new("div")?
        .class("toast-heading")
        .text(toast.kind.heading())
        .build();
    let body = ElementBuilder::new("div")?
        .class("small muted")
        .text(&toast.message)
        .build();
    Ok(ElementBuilder::new("div")?
        .class(&format!("card toast {}", toast.kind.css_class()))
        .child(heading)?
        .child(body)?
        .build())
}
