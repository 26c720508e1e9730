use crate::model::id::BookingId;
use chrono::{DateTime, Utc};

pub mod event;

#[derive(Debug)]
pub struct Booking {
    pub booking_id: BookingId,
    pub customer_name: String,
    pub email: String,
    pub phone: String,
    pub service_name: String,
    pub scheduled_at: DateTime<Utc>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}
