use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::booking::{event::CreateBooking, Booking};

#[async_trait]
pub trait BookingRepository: Send + Sync {
    // 予約申込みを登録する
    async fn create(&self, event: CreateBooking) -> AppResult<Booking>;
}
