pub mod api_client;
pub mod storage;

pub use api_client::{AdminBookingFilters, ApiClient, ApiError};
pub use storage::{BrowserStorage, KeyValueStore, MemoryStorage};
