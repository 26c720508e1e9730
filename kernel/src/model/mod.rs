pub mod auth;
pub mod booking;
pub mod booking_closure;
pub mod id;
pub mod role;
pub mod setting;
pub mod user;
