use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    booking::{event::CreateBooking, Booking},
    id::BookingId,
};
use kernel::repository::booking::BookingRepository;
use shared::error::{AppError, AppResult};

use crate::database::{model::booking::BookingRow, ConnectionPool};

#[derive(new)]
pub struct BookingRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl BookingRepository for BookingRepositoryImpl {
    async fn create(&self, event: CreateBooking) -> AppResult<Booking> {
        let booking_id = BookingId::new();
        sqlx::query_as::<_, BookingRow>(
            r#"
                INSERT INTO bookings
                (booking_id, customer_name, email, phone,
                service_name, scheduled_at, notes)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                RETURNING
                    booking_id,
                    customer_name,
                    email,
                    phone,
                    service_name,
                    scheduled_at,
                    notes,
                    created_at
            "#,
        )
        .bind(booking_id)
        .bind(event.customer_name)
        .bind(event.email)
        .bind(event.phone)
        .bind(event.service_name)
        .bind(event.scheduled_at)
        .bind(event.notes)
        .fetch_one(self.db.inner_ref())
        .await
        .map(Booking::from)
        .map_err(AppError::SpecificOperationError)
    }
}
