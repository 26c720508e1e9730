pub mod auth;
pub mod booking;
pub mod setting;
pub mod user;
