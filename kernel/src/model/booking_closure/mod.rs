//! 予約受付の一時停止（締め切り）に関するモデル
//!
//! 永続化される値は設定キー [`BOOKING_CLOSURE_KEY`] に
//! `{"isClosed": bool, "endTime": string | null}` として保存される。
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::error::AppResult;

mod remaining;

pub use remaining::format_remaining;

pub const BOOKING_CLOSURE_KEY: &str = "booking_closure";

/// 設定ストアに保存される締め切りレコード
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClosureRecord {
    pub is_closed: bool,
    pub end_time: Option<DateTime<Utc>>,
}

impl ClosureRecord {
    pub fn open() -> Self {
        Self::default()
    }

    pub fn closed_until(end_time: DateTime<Utc>) -> Self {
        Self {
            is_closed: true,
            end_time: Some(end_time),
        }
    }

    /// 保存値を解釈する。値はオブジェクトそのものか、
    /// オブジェクトを JSON 文字列にエンコードしたもののどちらでもよい
    pub fn from_value(value: &serde_json::Value) -> Result<Self, serde_json::Error> {
        match value {
            serde_json::Value::String(encoded) => serde_json::from_str(encoded),
            other => Self::deserialize(other),
        }
    }

    pub fn to_value(&self) -> serde_json::Value {
        serde_json::json!({
            "isClosed": self.is_closed,
            "endTime": self.end_time,
        })
    }

    /// `now` の時点で締め切りが有効か。終了時刻のない締め切りや
    /// 終了時刻を過ぎた締め切りは受付中とみなす
    pub fn is_in_effect_at(&self, now: DateTime<Utc>) -> bool {
        self.is_closed && self.end_time.is_some_and(|end| end > now)
    }
}

/// コントローラが手元に保持する状態
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClosureState {
    pub is_closed: bool,
    pub closure_end_time: Option<DateTime<Utc>>,
    pub is_loading: bool,
    pub last_error: Option<String>,
}

impl ClosureState {
    pub fn apply_record(&mut self, record: ClosureRecord, now: DateTime<Utc>) {
        if record.is_in_effect_at(now) {
            self.is_closed = true;
            self.closure_end_time = record.end_time;
        } else {
            self.reset();
        }
    }

    pub fn reset(&mut self) {
        self.is_closed = false;
        self.closure_end_time = None;
    }

    // 終了時刻を過ぎていれば受付中に戻し、true を返す
    pub fn expire_at(&mut self, now: DateTime<Utc>) -> bool {
        match self.closure_end_time {
            Some(end) if self.is_closed && end <= now => {
                self.reset();
                true
            }
            _ => false,
        }
    }

    pub fn is_closed_at(&self, now: DateTime<Utc>) -> bool {
        self.is_closed && self.closure_end_time.is_some_and(|end| end > now)
    }

    pub fn status_at(&self, now: DateTime<Utc>) -> ClosureStatus {
        let is_closed = self.is_closed_at(now);
        let remaining_time = self
            .closure_end_time
            .filter(|_| is_closed)
            .map(|end| format_remaining(end - now));
        ClosureStatus {
            is_closed,
            remaining_time,
            closure_end_time: self.closure_end_time.filter(|_| is_closed),
            is_loading: self.is_loading,
            error: self.last_error.clone(),
        }
    }
}

/// 予約フォームや管理画面が参照する読み取り用の状態
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClosureStatus {
    pub is_closed: bool,
    pub remaining_time: Option<String>,
    pub closure_end_time: Option<DateTime<Utc>>,
    pub is_loading: bool,
    pub error: Option<String>,
}

/// 設定ストアへの書き込み結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    Ok,
    Unauthorized,
    Other(String),
}

impl From<AppResult<()>> for WriteOutcome {
    fn from(value: AppResult<()>) -> Self {
        match value {
            Ok(()) => WriteOutcome::Ok,
            Err(e) if e.is_authorization_error() => WriteOutcome::Unauthorized,
            Err(e) => WriteOutcome::Other(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use shared::error::AppError;

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn parses_object_and_encoded_string() {
        let object = serde_json::json!({ "isClosed": true, "endTime": "2099-01-01T00:00:00Z" });
        let encoded = serde_json::Value::String(object.to_string());

        let expected = ClosureRecord::closed_until(at(2099, 1, 1));
        assert_eq!(ClosureRecord::from_value(&object).unwrap(), expected);
        assert_eq!(ClosureRecord::from_value(&encoded).unwrap(), expected);
    }

    #[test]
    fn rejects_garbage() {
        let garbage = serde_json::Value::String("{not json".into());
        assert!(ClosureRecord::from_value(&garbage).is_err());

        let bad_time = serde_json::json!({ "isClosed": true, "endTime": "tomorrow" });
        assert!(ClosureRecord::from_value(&bad_time).is_err());
    }

    #[test]
    fn value_uses_camel_case_and_null_end_time() {
        assert_eq!(
            ClosureRecord::open().to_value(),
            serde_json::json!({ "isClosed": false, "endTime": null })
        );
        assert_eq!(
            ClosureRecord::closed_until(at(2099, 1, 1)).to_value(),
            serde_json::json!({ "isClosed": true, "endTime": "2099-01-01T00:00:00Z" })
        );
    }

    #[test]
    fn closed_without_end_time_is_not_in_effect() {
        let record = ClosureRecord {
            is_closed: true,
            end_time: None,
        };
        assert!(!record.is_in_effect_at(at(2024, 1, 1)));
    }

    #[test]
    fn applying_expired_record_opens() {
        let mut state = ClosureState {
            is_closed: true,
            closure_end_time: Some(at(2099, 1, 1)),
            ..Default::default()
        };
        state.apply_record(ClosureRecord::closed_until(at(2000, 1, 1)), at(2024, 1, 1));
        assert!(!state.is_closed);
        assert_eq!(state.closure_end_time, None);
    }

    #[test]
    fn status_treats_reached_end_time_as_open() {
        let now = at(2024, 1, 1);
        let state = ClosureState {
            is_closed: true,
            closure_end_time: Some(now - Duration::seconds(1)),
            ..Default::default()
        };
        let status = state.status_at(now);
        assert!(!status.is_closed);
        assert_eq!(status.remaining_time, None);
        assert_eq!(status.closure_end_time, None);
    }

    #[test]
    fn write_outcome_splits_authorization_errors() {
        assert_eq!(WriteOutcome::from(Ok(())), WriteOutcome::Ok);
        assert_eq!(
            WriteOutcome::from(Err(AppError::ForbiddenOperation)),
            WriteOutcome::Unauthorized
        );
        assert_eq!(
            WriteOutcome::from(Err(AppError::UnauthorizedError)),
            WriteOutcome::Unauthorized
        );
        assert_eq!(
            WriteOutcome::from(Err(AppError::ExternalServiceError("boom".into()))),
            WriteOutcome::Other("boom".into())
        );
    }
}
