use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    UnprocessableEntity(String),
    #[error("{0}")]
    EntityNotFound(String),
    #[error("{0}")]
    ValidationError(#[from] garde::Report),
    #[error("トランザクションを実行できませんでした。")]
    TransactionError(#[source] sqlx::Error),
    #[error("データベース処理実行中にエラーが発生しました。")]
    SpecificOperationError(#[source] sqlx::Error),
    #[error("マイグレーションに失敗しました: {0}")]
    MigrationError(#[source] sqlx::migrate::MigrateError),
    #[error("No rows affected: {0}")]
    NoRowsAffectedError(String),
    #[error("{0}")]
    KeyValueStoreError(#[from] redis::RedisError),
    #[error("{0}")]
    BcryptError(#[from] bcrypt::BcryptError),
    #[error("{0}")]
    ConvertToUuidError(#[from] uuid::Error),
    #[error("ログインに失敗しました")]
    UnauthenticatedError,
    #[error("認可情報が誤っています")]
    UnauthorizedError,
    #[error("許可されていない操作です")]
    ForbiddenOperation,
    #[error("{0}")]
    ConversionEntityError(String),
    #[error("{0}")]
    ExternalServiceError(String),
    #[error("{0}")]
    HttpClientError(#[from] reqwest::Error),
    #[error("Bookings are temporarily closed; reopening {0}")]
    BookingsClosed(String),
}

impl AppError {
    // 書き込み権限がないことを示すエラーかどうか
    pub fn is_authorization_error(&self) -> bool {
        matches!(
            self,
            AppError::UnauthenticatedError
                | AppError::UnauthorizedError
                | AppError::ForbiddenOperation
        )
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status_code = match self {
            AppError::UnprocessableEntity(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::EntityNotFound(_) => StatusCode::NOT_FOUND,
            AppError::ValidationError(_) | AppError::ConvertToUuidError(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::UnauthenticatedError | AppError::ForbiddenOperation => StatusCode::FORBIDDEN,
            AppError::UnauthorizedError => StatusCode::UNAUTHORIZED,
            AppError::BookingsClosed(_) => {
                // 締め切り中の案内文はそのまま利用者に返す
                return (StatusCode::SERVICE_UNAVAILABLE, self.to_string()).into_response();
            }
            e @ (AppError::TransactionError(_)
            | AppError::SpecificOperationError(_)
            | AppError::MigrationError(_)
            | AppError::NoRowsAffectedError(_)
            | AppError::KeyValueStoreError(_)
            | AppError::BcryptError(_)
            | AppError::ConversionEntityError(_)
            | AppError::ExternalServiceError(_)
            | AppError::HttpClientError(_)) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "Unexpected error happened"
                );
                let message = e.to_string();
                return (StatusCode::INTERNAL_SERVER_ERROR, message).into_response();
            }
        };

        status_code.into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
