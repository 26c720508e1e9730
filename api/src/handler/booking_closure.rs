use std::num::NonZeroU32;

use axum::{extract::State, Json};
use garde::Validate;
use kernel::model::booking_closure::WriteOutcome;
use kernel::service::booking_closure::BookingClosureController;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::AuthorizedUser,
    model::booking_closure::{CloseBookingsRequest, ClosureStatusResponse},
};

pub async fn show_booking_closure(State(registry): State<AppRegistry>) -> Json<ClosureStatusResponse> {
    Json(registry.booking_closure().status().into())
}

pub async fn close_bookings(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    Json(req): Json<CloseBookingsRequest>,
) -> AppResult<Json<ClosureStatusResponse>> {
    if !user.is_admin() {
        return Err(AppError::ForbiddenOperation);
    }
    req.validate(&())?;

    let hours = NonZeroU32::new(req.hours)
        .ok_or_else(|| AppError::UnprocessableEntity("hours must be positive".into()))?;
    tracing::info!(user_id = %user.id(), hours = hours.get(), "closing bookings");

    let controller = registry.booking_closure();
    let outcome = controller.close(hours).await;
    respond(&controller, outcome)
}

pub async fn reopen_bookings(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<ClosureStatusResponse>> {
    if !user.is_admin() {
        return Err(AppError::ForbiddenOperation);
    }
    tracing::info!(user_id = %user.id(), "reopening bookings");

    let controller = registry.booking_closure();
    let outcome = controller.reopen().await;
    respond(&controller, outcome)
}

fn respond(
    controller: &BookingClosureController,
    outcome: WriteOutcome,
) -> AppResult<Json<ClosureStatusResponse>> {
    match outcome {
        WriteOutcome::Other(message) => Err(AppError::ExternalServiceError(message)),
        WriteOutcome::Ok | WriteOutcome::Unauthorized => Ok(Json(controller.status().into())),
    }
}
