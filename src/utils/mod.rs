pub mod format;
pub mod time;
pub mod validate;

pub use format::money;
pub use time::{pretty_time, today_ymd};
