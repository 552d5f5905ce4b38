pub mod add_route;
pub mod bookings;
pub mod shell;
pub mod statistics;
