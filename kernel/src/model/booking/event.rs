use chrono::{DateTime, Utc};
use derive_new::new;

#[derive(Debug, new)]
pub struct CreateBooking {
    pub customer_name: String,
    pub email: String,
    pub phone: String,
    pub service_name: String,
    pub scheduled_at: DateTime<Utc>,
    pub notes: Option<String>,
}
