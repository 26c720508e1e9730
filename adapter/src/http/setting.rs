//! サーバーの設定エンドポイントを設定ストアとして使うクライアント
//!
//! 管理用 CLI のように、データベースへ直接つながらない側で
//! [`SettingRepository`] を満たすために使う。
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use kernel::model::setting::{event::UpsertSetting, Setting};
use kernel::repository::setting::SettingRepository;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Deserialize;
use shared::error::{AppError, AppResult};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingPayload {
    key: String,
    value: serde_json::Value,
    updated_at: DateTime<Utc>,
}

impl From<SettingPayload> for Setting {
    fn from(value: SettingPayload) -> Self {
        let SettingPayload {
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

pub struct SettingApiClient {
    client: Client,
    base_url: String,
    access_token: Option<String>,
}

impl SettingApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            access_token: None,
        }
    }

    pub fn with_access_token(mut self, access_token: impl Into<String>) -> Self {
        self.access_token = Some(access_token.into());
        self
    }

    fn url(&self, key: &str) -> String {
        format!(
            "{}/api/v1/settings/{}",
            self.base_url.trim_end_matches('/'),
            key
        )
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.access_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

#[async_trait]
impl SettingRepository for SettingApiClient {
    async fn find_by_key(&self, key: &str) -> AppResult<Option<Setting>> {
        let res = self.authorize(self.client.get(self.url(key))).send().await?;
        if res.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let payload: SettingPayload = error_for_status(res).await?.json().await?;
        Ok(Some(payload.into()))
    }

    async fn upsert(&self, event: UpsertSetting) -> AppResult<()> {
        let res = self
            .authorize(self.client.put(self.url(&event.key)))
            .json(&serde_json::json!({ "value": event.value }))
            .send()
            .await?;
        error_for_status(res).await.map(|_| ())
    }
}

// 401/403 は権限エラーとして、それ以外の失敗はステータスと本文をまとめて返す
async fn error_for_status(res: Response) -> AppResult<Response> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }
    match status {
        StatusCode::UNAUTHORIZED => Err(AppError::UnauthorizedError),
        StatusCode::FORBIDDEN => Err(AppError::ForbiddenOperation),
        _ => {
            let body = res.text().await.unwrap_or_default();
            Err(AppError::ExternalServiceError(format!("{status}: {body}")))
        }
    }
}
