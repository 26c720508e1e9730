use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::setting::{event::UpsertSetting, Setting};

#[async_trait]
pub trait SettingRepository: Send + Sync {
    // キーに対応する設定を取得する。存在しなければ None
    async fn find_by_key(&self, key: &str) -> AppResult<Option<Setting>>;
    // 設定を作成、または既存の値を上書きする
    async fn upsert(&self, event: UpsertSetting) -> AppResult<()>;
}
