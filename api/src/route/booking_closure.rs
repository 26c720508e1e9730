use axum::{
    routing::{get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::booking_closure::{close_bookings, reopen_bookings, show_booking_closure};

pub fn build_booking_closure_routers() -> Router<AppRegistry> {
    let closure_routers = Router::new()
        .route("/", get(show_booking_closure))
        .route("/close", post(close_bookings))
        .route("/reopen", post(reopen_bookings));

    Router::new().nest("/booking-closure", closure_routers)
}
