use super::{
    booking::build_booking_routers, booking_closure::build_booking_closure_routers,
    setting::build_setting_routers,
};
use axum::Router;
use registry::AppRegistry;

pub fn routes() -> Router<AppRegistry> {
    let router = Router::new()
        .merge(build_setting_routers())
        .merge(build_booking_closure_routers())
        .merge(build_booking_routers());
    Router::new().nest("/api/v1", router)
}
