use std::sync::Arc;

use adapter::clock::SystemClock;
use adapter::redis::RedisClient;
use adapter::repository::auth::AuthRepositoryImpl;
use adapter::repository::booking::BookingRepositoryImpl;
use adapter::repository::setting::SettingRepositoryImpl;
use adapter::repository::user::UserRepositoryImpl;
use adapter::{database::ConnectionPool, repository::health::HealthCheckRepositoryImpl};
use kernel::repository::auth::AuthRepository;
use kernel::repository::booking::BookingRepository;
use kernel::repository::health::HealthCheckRepository;
use kernel::repository::setting::SettingRepository;
use kernel::repository::user::UserRepository;
use kernel::service::booking_closure::BookingClosureController;
use shared::config::AppConfig;

#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    auth_repository: Arc<dyn AuthRepository>,
    user_repository: Arc<dyn UserRepository>,
    setting_repository: Arc<dyn SettingRepository>,
    booking_repository: Arc<dyn BookingRepository>,
    booking_closure: Arc<BookingClosureController>,
}

impl AppRegistry {
    pub fn new(pool: ConnectionPool, redis_client: Arc<RedisClient>, app_config: AppConfig) -> Self {
        let health_check_repository = Arc::new(HealthCheckRepositoryImpl::new(pool.clone()));
        let auth_repository = Arc::new(AuthRepositoryImpl::new(
            pool.clone(),
            redis_client.clone(),
            app_config.auth.ttl,
        ));
        let user_repository = Arc::new(UserRepositoryImpl::new(pool.clone()));
        let setting_repository: Arc<dyn SettingRepository> =
            Arc::new(SettingRepositoryImpl::new(pool.clone()));
        let booking_repository = Arc::new(BookingRepositoryImpl::new(pool.clone()));
        // 締め切り状態はプロセス内で 1 つだけ持ち、各ハンドラで共有する
        let booking_closure = Arc::new(
            BookingClosureController::new(setting_repository.clone(), Arc::new(SystemClock))
                .with_check_interval(app_config.closure.check_interval),
        );
        Self {
            health_check_repository,
            auth_repository,
            user_repository,
            setting_repository,
            booking_repository,
            booking_closure,
        }
    }

    /// 各リポジトリを外から差し込んで組み立てる
    pub fn from_parts(
        health_check_repository: Arc<dyn HealthCheckRepository>,
        auth_repository: Arc<dyn AuthRepository>,
        user_repository: Arc<dyn UserRepository>,
        setting_repository: Arc<dyn SettingRepository>,
        booking_repository: Arc<dyn BookingRepository>,
        booking_closure: Arc<BookingClosureController>,
    ) -> Self {
        Self {
            health_check_repository,
            auth_repository,
            user_repository,
            setting_repository,
            booking_repository,
            booking_closure,
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn auth_repository(&self) -> Arc<dyn AuthRepository> {
        self.auth_repository.clone()
    }

    pub fn user_repository(&self) -> Arc<dyn UserRepository> {
        self.user_repository.clone()
    }

    pub fn setting_repository(&self) -> Arc<dyn SettingRepository> {
        self.setting_repository.clone()
    }

    pub fn booking_repository(&self) -> Arc<dyn BookingRepository> {
        self.booking_repository.clone()
    }

    pub fn booking_closure(&self) -> Arc<BookingClosureController> {
        self.booking_closure.clone()
    }
}
