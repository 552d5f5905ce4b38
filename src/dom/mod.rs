// ============================================================================
// DOM MODULE - Direct DOM helpers (no framework)
// ============================================================================

pub mod builder;
pub mod element;
pub mod events;

pub use builder::ElementBuilder;
pub use element::*;
pub use events::*;
