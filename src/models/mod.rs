pub mod auth;
pub mod booking;
pub mod notification;
pub mod passenger;
pub mod role;
pub mod route;
pub mod stats;

pub use auth::{AuthSession, LoginRequest, LoginResponse, RegisterRequest};
pub use booking::{pick_ticket, Booking, BookingStatus, BookSeatsRequest};
pub use notification::{Notification, NotificationKind};
pub use passenger::{Gender, Passenger, PassengerInput};
pub use role::Role;
pub use route::{NewRouteRequest, Route};
pub use stats::{revenue_slices, RevenueSlices, Statistics};
