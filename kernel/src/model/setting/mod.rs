use chrono::{DateTime, Utc};

pub mod event;

/// キー単位で保存される設定レコード。値は JSON のまま保持する
#[derive(Debug, Clone, PartialEq)]
pub struct Setting {
    pub key: String,
    pub value: serde_json::Value,
    pub updated_at: DateTime<Utc>,
}
