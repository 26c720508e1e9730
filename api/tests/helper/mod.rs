#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicBool, AtomicUsize, Ordering},
        Arc, Mutex,
    },
};

use api::route::{auth, health::build_health_check_routers, v1};
use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use chrono::{DateTime, Utc};
use kernel::{
    clock::Clock,
    model::{
        auth::{event::CreateToken, AccessToken},
        booking::{event::CreateBooking, Booking},
        id::{BookingId, UserId},
        role::Role,
        setting::{event::UpsertSetting, Setting},
        user::User,
    },
    repository::{
        auth::AuthRepository, booking::BookingRepository, health::HealthCheckRepository,
        setting::SettingRepository, user::UserRepository,
    },
    service::booking_closure::BookingClosureController,
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};
use tower::ServiceExt;

pub const ADMIN_TOKEN: &str = "admin-token";
pub const CUSTOMER_TOKEN: &str = "customer-token";
pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const ADMIN_PASSWORD: &str = "Pa55w0rd";

pub struct WallClock;

impl Clock for WallClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

pub struct FakeAuth {
    admin: UserId,
    customer: UserId,
    pub deleted: Mutex<Vec<String>>,
}

#[async_trait]
impl AuthRepository for FakeAuth {
    async fn fetch_user_id_from_token(
        &self,
        access_token: &AccessToken,
    ) -> AppResult<Option<UserId>> {
        Ok(match access_token.0.as_str() {
            ADMIN_TOKEN => Some(self.admin),
            CUSTOMER_TOKEN => Some(self.customer),
            _ => None,
        })
    }

    async fn verify_user(&self, email: &str, password: &str) -> AppResult<UserId> {
        if email == ADMIN_EMAIL && password == ADMIN_PASSWORD {
            Ok(self.admin)
        } else {
            Err(AppError::UnauthenticatedError)
        }
    }

    async fn create_token(&self, event: CreateToken) -> AppResult<AccessToken> {
        Ok(AccessToken(event.access_token))
    }

    async fn delete_token(&self, access_token: AccessToken) -> AppResult<()> {
        self.deleted.lock().unwrap().push(access_token.0);
        Ok(())
    }
}

pub struct FakeUsers {
    admin: UserId,
    customer: UserId,
}

#[async_trait]
impl UserRepository for FakeUsers {
    async fn find_current_user(&self, current_user_id: UserId) -> AppResult<Option<User>> {
        let (user_name, email, role) = if current_user_id == self.admin {
            ("admin", ADMIN_EMAIL, Role::Admin)
        } else if current_user_id == self.customer {
            ("customer", "customer@example.com", Role::User)
        } else {
            return Ok(None);
        };
        Ok(Some(User {
            user_id: current_user_id,
            user_name: user_name.into(),
            email: email.into(),
            role,
        }))
    }
}

#[derive(Default)]
pub struct FakeSettings {
    entries: Mutex<HashMap<String, Setting>>,
    pub reads: AtomicUsize,
    pub writes: AtomicUsize,
    pub fail_writes: AtomicBool,
}

impl FakeSettings {
    pub fn value(&self, key: &str) -> Option<serde_json::Value> {
        self.entries
            .lock()
            .unwrap()
            .get(key)
            .map(|setting| setting.value.clone())
    }

    pub fn put(&self, key: &str, value: serde_json::Value) {
        self.entries.lock().unwrap().insert(
            key.into(),
            Setting {
                key: key.into(),
                value,
                updated_at: Utc::now(),
            },
        );
    }
}

#[async_trait]
impl SettingRepository for FakeSettings {
    async fn find_by_key(&self, key: &str) -> AppResult<Option<Setting>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    async fn upsert(&self, event: UpsertSetting) -> AppResult<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(AppError::ExternalServiceError(
                "settings store is unavailable".into(),
            ));
        }
        self.put(&event.key, event.value);
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeBookings {
    pub created: Mutex<Vec<String>>,
}

#[async_trait]
impl BookingRepository for FakeBookings {
    async fn create(&self, event: CreateBooking) -> AppResult<Booking> {
        self.created.lock().unwrap().push(event.customer_name.clone());
        Ok(Booking {
            booking_id: BookingId::new(),
            customer_name: event.customer_name,
            email: event.email,
            phone: event.phone,
            service_name: event.service_name,
            scheduled_at: event.scheduled_at,
            notes: event.notes,
            created_at: Utc::now(),
        })
    }
}

pub struct FakeHealth;

#[async_trait]
impl HealthCheckRepository for FakeHealth {
    async fn check_db(&self) -> bool {
        true
    }
}

pub struct TestApp {
    pub router: Router,
    pub registry: AppRegistry,
    pub auth: Arc<FakeAuth>,
    pub settings: Arc<FakeSettings>,
    pub bookings: Arc<FakeBookings>,
}

impl TestApp {
    pub fn new() -> Self {
        let admin = UserId::new();
        let customer = UserId::new();
        let auth = Arc::new(FakeAuth {
            admin,
            customer,
            deleted: Mutex::default(),
        });
        let settings = Arc::new(FakeSettings::default());
        let bookings = Arc::new(FakeBookings::default());
        let booking_closure = Arc::new(BookingClosureController::new(
            settings.clone(),
            Arc::new(WallClock),
        ));
        let registry = AppRegistry::from_parts(
            Arc::new(FakeHealth),
            auth.clone(),
            Arc::new(FakeUsers { admin, customer }),
            settings.clone(),
            bookings.clone(),
            booking_closure,
        );
        let router = Router::new()
            .merge(build_health_check_routers())
            .merge(v1::routes())
            .merge(auth::routes())
            .with_state(registry.clone());
        Self {
            router,
            registry,
            auth,
            settings,
            bookings,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body can be read");
        TestResponse {
            status,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(request(Method::GET, uri, None, None)).await
    }

    pub async fn post(
        &self,
        uri: &str,
        token: Option<&str>,
        body: Option<serde_json::Value>,
    ) -> TestResponse {
        self.send(request(Method::POST, uri, token, body)).await
    }

    pub async fn put(
        &self,
        uri: &str,
        token: Option<&str>,
        body: serde_json::Value,
    ) -> TestResponse {
        self.send(request(Method::PUT, uri, token, Some(body))).await
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub body: String,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("response body is JSON")
    }
}

pub fn request(
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let body = match body {
        Some(body) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(body.to_string())
        }
        None => Body::empty(),
    };
    builder.body(body).expect("request is well-formed")
}
