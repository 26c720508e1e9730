use chrono::{DateTime, Utc};
use derive_new::new;
use kernel::model::setting::{event::UpsertSetting, Setting};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingResponse {
    pub key: String,
    pub value: serde_json::Value,
    pub updated_at: DateTime<Utc>,
}

impl From<Setting> for SettingResponse {
    fn from(value: Setting) -> Self {
        let Setting {
            key,
            value,
            updated_at,
        } = value;
        Self {
            key,
            value,
            updated_at,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSettingRequest {
    pub value: serde_json::Value,
}

#[derive(new)]
pub struct UpdateSettingRequestWithKey(String, UpdateSettingRequest);

impl From<UpdateSettingRequestWithKey> for UpsertSetting {
    fn from(value: UpdateSettingRequestWithKey) -> Self {
        let UpdateSettingRequestWithKey(key, UpdateSettingRequest { value }) = value;
        UpsertSetting { key, value }
    }
}
