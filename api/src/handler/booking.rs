use axum::{extract::State, http::StatusCode, Json};
use garde::Validate;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::model::booking::{BookingResponse, CreateBookingRequest};

pub async fn create_booking(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateBookingRequest>,
) -> AppResult<(StatusCode, Json<BookingResponse>)> {
    req.validate(&())?;

    // 受付停止中かどうかは最新の設定で判断する
    let closure = registry.booking_closure();
    closure.refresh().await;
    let status = closure.status();
    if status.is_closed {
        return Err(AppError::BookingsClosed(
            status.remaining_time.unwrap_or_default(),
        ));
    }

    registry
        .booking_repository()
        .create(req.into())
        .await
        .map(|booking| (StatusCode::CREATED, Json(booking.into())))
}
