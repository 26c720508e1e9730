use kernel::model::setting::Setting;
use sqlx::types::chrono::{DateTime, Utc};

#[derive(sqlx::FromRow)]
pub struct SettingRow {
    pub key: String,
    pub value: serde_json::Value,
    pub updated_at: DateTime<Utc>,
}

impl From<SettingRow> for Setting {
    fn from(value: SettingRow) -> Self {
        let SettingRow {
            key,
            value,
            updated_at,
        } = value;
        Setting {
            key,
            value,
            updated_at,
        }
    }
}
