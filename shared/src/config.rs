use std::time::Duration;

use anyhow::{ensure, Result};

pub struct AppConfig {
    pub database: DatabaseConfig,
    pub redis: RedisConfig,
    pub auth: AuthConfig,
    pub closure: ClosureConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        let database = DatabaseConfig {
            host: std::env::var("DATABASE_HOST")?,
            port: std::env::var("DATABASE_PORT")?.parse()?,
            username: std::env::var("DATABASE_USERNAME")?,
            password: std::env::var("DATABASE_PASSWORD")?,
            database: std::env::var("DATABASE_NAME")?,
        };
        let redis = RedisConfig {
            host: std::env::var("REDIS_HOST")?,
            port: std::env::var("REDIS_PORT")?.parse::<u16>()?,
        };
        let auth = AuthConfig {
            ttl: std::env::var("AUTH_TOKEN_TTL")?.parse::<u64>()?,
        };
        // 未設定なら 60 秒ごとに締め切りの期限切れを確認する
        let check_interval = match std::env::var("BOOKING_CLOSURE_CHECK_INTERVAL") {
            Ok(v) => {
                let secs = v.parse::<u64>()?;
                ensure!(secs > 0, "BOOKING_CLOSURE_CHECK_INTERVAL must be positive");
                Duration::from_secs(secs)
            }
            Err(_) => ClosureConfig::DEFAULT_CHECK_INTERVAL,
        };
        let closure = ClosureConfig { check_interval };
        Ok(Self {
            database,
            redis,
            auth,
            closure,
        })
    }
}

pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
}

pub struct RedisConfig {
    pub host: String,
    pub port: u16,
}

pub struct AuthConfig {
    pub ttl: u64,
}

pub struct ClosureConfig {
    pub check_interval: Duration,
}

impl ClosureConfig {
    pub const DEFAULT_CHECK_INTERVAL: Duration = Duration::from_secs(60);
}
