// ============================================================================
// SWIFTBUS WEB - Browser client for the bus ticket booking backend
// ============================================================================
// Compiled to WebAssembly and mounted on #app. Pages are rebuilt wholesale
// from the location hash; there is no virtual DOM.
// ============================================================================

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

pub mod app;
pub mod config;
pub mod dom;
pub mod models;
pub mod router;
pub mod services;
pub mod state;
pub mod utils;
pub mod views;

use app::App;

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("🚌 SwiftBus client starting");

    let app = App::new()?;
    app.render()?;
    APP.with(|cell| *cell.borrow_mut() = Some(app));

    // Single global hashchange listener; pages never register their own.
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let on_hashchange = Closure::wrap(Box::new(move |_: web_sys::Event| {
        rerender_app();
    }) as Box<dyn FnMut(web_sys::Event)>);
    window.add_event_listener_with_callback("hashchange", on_hashchange.as_ref().unchecked_ref())?;
    on_hashchange.forget();

    Ok(())
}

/// Rebuild the whole view for the current hash.
pub fn rerender_app() {
    APP.with(|cell| match &*cell.borrow() {
        Some(app) => {
            if let Err(e) = app.render() {
                log::error!("render failed: {:?}", e);
            }
        }
        None => log::warn!("render requested before startup finished"),
    });
}
