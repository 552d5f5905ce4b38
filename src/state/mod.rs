// ============================================================================
// STATE MODULE - Rc<RefCell> stores shared through the AppContext
// ============================================================================

pub mod context;
pub mod notifications;
pub mod session;
pub mod theme;

pub use context::AppContext;
pub use notifications::NotificationQueue;
pub use session::SessionStore;
pub use theme::{Theme, ThemeStore};
