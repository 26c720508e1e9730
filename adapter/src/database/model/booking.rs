use kernel::model::{booking::Booking, id::BookingId};
use sqlx::types::chrono::{DateTime, Utc};

#[derive(sqlx::FromRow)]
pub struct BookingRow {
    pub booking_id: BookingId,
    pub customer_name: String,
    pub email: String,
    pub phone: String,
    pub service_name: String,
    pub scheduled_at: DateTime<Utc>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<BookingRow> for Booking {
    fn from(value: BookingRow) -> Self {
        let BookingRow {
            booking_id,
            customer_name,
            email,
            phone,
            service_name,
            scheduled_at,
            notes,
            created_at,
        } = value;
        Booking {
            booking_id,
            customer_name,
            email,
            phone,
            service_name,
            scheduled_at,
            notes,
            created_at,
        }
    }
}
