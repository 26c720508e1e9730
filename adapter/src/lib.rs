pub mod clock;
pub mod database;
pub mod http;
pub mod redis;
pub mod repository;
