use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use kernel::model::booking_closure::BOOKING_CLOSURE_KEY;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::AuthorizedUser,
    model::setting::{SettingResponse, UpdateSettingRequest, UpdateSettingRequestWithKey},
};

pub async fn show_setting(
    Path(key): Path<String>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<SettingResponse>> {
    registry
        .setting_repository()
        .find_by_key(&key)
        .await
        .and_then(|setting| match setting {
            Some(setting) => Ok(Json(setting.into())),
            None => Err(AppError::EntityNotFound(format!(
                "設定（{key}）が見つかりませんでした。"
            ))),
        })
}

pub async fn update_setting(
    user: AuthorizedUser,
    Path(key): Path<String>,
    State(registry): State<AppRegistry>,
    Json(req): Json<UpdateSettingRequest>,
) -> AppResult<StatusCode> {
    if !user.is_admin() {
        return Err(AppError::ForbiddenOperation);
    }

    let touches_closure = key == BOOKING_CLOSURE_KEY;
    registry
        .setting_repository()
        .upsert(UpdateSettingRequestWithKey::new(key, req).into())
        .await?;

    // 締め切りの値が直接書き換えられた場合は手元の状態も読み直す
    if touches_closure {
        registry.booking_closure().refresh().await;
    }

    Ok(StatusCode::OK)
}
