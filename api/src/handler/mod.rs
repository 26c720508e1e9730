pub mod auth;
pub mod booking;
pub mod booking_closure;
pub mod health;
pub mod setting;
