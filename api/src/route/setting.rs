use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::setting::{show_setting, update_setting};

pub fn build_setting_routers() -> Router<AppRegistry> {
    let settings_routers = Router::new().route("/:key", get(show_setting).put(update_setting));

    Router::new().nest("/settings", settings_routers)
}
