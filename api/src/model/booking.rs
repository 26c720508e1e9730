use chrono::{DateTime, Utc};
use garde::Validate;
use kernel::model::{
    booking::{event::CreateBooking, Booking},
    id::BookingId,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    #[garde(length(min = 1))]
    pub customer_name: String,
    #[garde(email)]
    pub email: String,
    #[garde(length(min = 1))]
    pub phone: String,
    #[garde(length(min = 1))]
    pub service_name: String,
    #[garde(skip)]
    pub scheduled_at: DateTime<Utc>,
    #[garde(skip)]
    pub notes: Option<String>,
}

impl From<CreateBookingRequest> for CreateBooking {
    fn from(value: CreateBookingRequest) -> Self {
        let CreateBookingRequest {
            customer_name,
            email,
            phone,
            service_name,
            scheduled_at,
            notes,
        } = value;
        CreateBooking {
            customer_name,
            email,
            phone,
            service_name,
            scheduled_at,
            // 空の備考は保存しない
            notes: notes.filter(|n| !n.trim().is_empty()),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub booking_id: BookingId,
    pub customer_name: String,
    pub email: String,
    pub phone: String,
    pub service_name: String,
    pub scheduled_at: DateTime<Utc>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Booking> for BookingResponse {
    fn from(value: Booking) -> Self {
        let Booking {
            booking_id,
            customer_name,
            email,
            phone,
            service_name,
            scheduled_at,
            notes,
            created_at,
        } = value;
        Self {
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
