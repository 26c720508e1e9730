use chrono::{DateTime, Utc};
use garde::Validate;
use kernel::model::booking_closure::ClosureStatus;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CloseBookingsRequest {
    // 最長 30 日まで
    #[garde(range(min = 1, max = 720))]
    pub hours: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClosureStatusResponse {
    pub is_closed: bool,
    pub remaining_time: Option<String>,
    pub closure_end_time: Option<DateTime<Utc>>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl From<ClosureStatus> for ClosureStatusResponse {
    fn from(value: ClosureStatus) -> Self {
        let ClosureStatus {
            is_closed,
            remaining_time,
            closure_end_time,
            is_loading,
            error,
        } = value;
        Self {
            is_closed,
            remaining_time,
            closure_end_time,
            is_loading,
            error,
        }
    }
}
