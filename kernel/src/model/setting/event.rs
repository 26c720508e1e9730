use derive_new::new;

#[derive(Debug, Clone, new)]
pub struct UpsertSetting {
    pub key: String,
    pub value: serde_json::Value,
}
