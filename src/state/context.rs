// ============================================================================
// APP CONTEXT - Explicit shared state handed to every page
// ============================================================================
// No ambient globals: pages receive this one object and reach session,
// notifications, theme and the API client through it.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;

use crate::models::{Notification, NotificationKind, Role, Route};
use crate::router::Page;
use crate::services::{ApiClient, BrowserStorage, KeyValueStore};
use crate::state::{NotificationQueue, SessionStore, ThemeStore};

#[derive(Clone)]
pub struct AppContext {
    pub api: ApiClient,
    pub session: SessionStore,
    pub notifications: NotificationQueue,
    pub theme: ThemeStore,
    /// Route carried in memory from the search page to the booking page.
    /// Deliberately not refetched by id; see the booking view.
    pub carried_route: Rc<RefCell<Option<Route>>>,
    subscribers: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
}

impl AppContext {
    pub fn new() -> Self {
        Self::with_storage(Rc::new(BrowserStorage::new()))
    }

    /// Build against any key-value backend; tests pass MemoryStorage.
    pub fn with_storage(storage: Rc<dyn KeyValueStore>) -> Self {
        Self {
            api: ApiClient::new(),
            session: SessionStore::new(storage.clone()),
            notifications: NotificationQueue::new(),
            theme: ThemeStore::new(storage),
            carried_route: Rc::new(RefCell::new(None)),
            subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.subscribers.borrow_mut().push(Rc::new(callback));
    }

    /// Ask the app shell to re-render. Callbacks are cloned out first so a
    /// subscriber may push further changes without re-borrowing.
    pub fn request_render(&self) {
        let callbacks: Vec<Rc<dyn Fn()>> = self.subscribers.borrow().iter().cloned().collect();
        for callback in callbacks {
            callback();
        }
    }

    /// Show a toast. The toast layer lives outside the page root and evicts
    /// each toast on its own timer, so pushing one never re-renders the page.
    pub fn notify(&self, message: impl Into<String>, kind: NotificationKind) {
        let message = message.into();
        let id = self.notifications.push(message.clone(), kind);
        crate::views::toasts::show(self, &Notification { id, message, kind });
    }

    /// Change the page by updating the location hash; the hashchange
    /// listener installed at startup triggers the re-render.
    pub fn navigate(&self, page: Page) {
        if let Some(window) = web_sys::window() {
            if window.location().set_hash(&page.hash()).is_err() {
                log::error!("failed to navigate to {:?}", page);
            }
        }
    }

    /// Best-effort server logout, then always clear local state. A backend
    /// failure is only a warning; the local session converges to GUEST
    /// either way.
    pub fn logout(&self) {
        let ctx = self.clone();
        spawn_local(async move {
            if ctx.session.role() != Role::Guest {
                if let Err(e) = ctx.api.logout().await {
                    ctx.notify(e.message.clone(), NotificationKind::Warn);
                }
            }
            ctx.session.clear_auth();
            ctx.carried_route.borrow_mut().take();
            ctx.notify("Logged out", NotificationKind::Success);
            ctx.navigate(Page::Home);
            ctx.request_render();
        });
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}
