use async_trait::async_trait;
use derive_new::new;
use kernel::model::setting::{event::UpsertSetting, Setting};
use kernel::repository::setting::SettingRepository;
use shared::error::{AppError, AppResult};

use crate::database::{model::setting::SettingRow, ConnectionPool};

#[derive(new)]
pub struct SettingRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl SettingRepository for SettingRepositoryImpl {
    async fn find_by_key(&self, key: &str) -> AppResult<Option<Setting>> {
        let row = sqlx::query_as::<_, SettingRow>(
            r#"
                SELECT key, value, updated_at
                FROM settings
                WHERE key = $1
            "#,
        )
        .bind(key)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.map(Setting::from))
    }

    async fn upsert(&self, event: UpsertSetting) -> AppResult<()> {
        // レコードの有無に関わらず 1 文で書き込む。同時に書かれた場合は後勝ち
        let res = sqlx::query(
            r#"
                INSERT INTO settings (key, value)
                VALUES ($1, $2)
                ON CONFLICT (key) DO UPDATE
                SET value = EXCLUDED.value,
                    updated_at = CURRENT_TIMESTAMP(3)
            "#,
        )
        .bind(&event.key)
        .bind(&event.value)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(format!(
                "No setting record has been written for `{}`",
                event.key
            )));
        }

        Ok(())
    }
}
