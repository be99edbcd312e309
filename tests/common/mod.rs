use std::net::SocketAddr;

use chrono::{Duration, Utc};
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use uuid::Uuid;

use teampulse::auth::identity::{encode_token, IdentityClaims};
use teampulse::config::Config;

pub const IDENTITY_SECRET: &str = "test-identity-secret-that-is-long-enough";

/// A running test server instance with a dedicated test database.
pub struct TestApp {
    pub addr: SocketAddr,
    pub pool: PgPool,
    pub client: Client,
    pub db_name: String,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Identity token as the external provider would issue it.
    pub fn identity_token(&self, sub: &str) -> String {
        let claims = IdentityClaims {
            sub: sub.to_string(),
            exp: (Utc::now() + Duration::minutes(5)).timestamp(),
            iss: None,
            email: Some(format!("{sub}@test.com")),
            first_name: Some(sub.to_string()),
            last_name: Some("Test".to_string()),
            profile_image_url: None,
        };
        encode_token(&claims, IDENTITY_SECRET).unwrap()
    }

    /// Exchange an identity token for a session, return (body, status).
    pub async fn create_session(&self, identity_token: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/api/auth/session"))
            .json(&json!({ "token": identity_token }))
            .send()
            .await
            .expect("session request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Sign in as `sub` (creating the user on first sight), return the session token.
    pub async fn sign_in(&self, sub: &str) -> String {
        let token = self.identity_token(sub);
        let (body, status) = self.create_session(&token).await;
        assert_eq!(status, StatusCode::OK, "sign in failed: {body}");
        body["token"].as_str().unwrap().to_string()
    }

    pub async fn set_role(&self, user_id: &str, role: &str) {
        sqlx::query("UPDATE users SET role = $2::user_role WHERE id = $1")
            .bind(user_id)
            .bind(role)
            .execute(&self.pool)
            .await
            .expect("set role failed");
    }

    pub async fn set_manager(&self, user_id: &str, manager_id: &str) {
        sqlx::query("UPDATE users SET manager_id = $2 WHERE id = $1")
            .bind(user_id)
            .bind(manager_id)
            .execute(&self.pool)
            .await
            .expect("set manager failed");
    }

    /// Make an authenticated GET request.
    pub async fn get_auth(&self, path: &str, token: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .get(self.url(path))
            .bearer_auth(token)
            .send()
            .await
            .expect("get request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Make an authenticated POST request with JSON body.
    pub async fn post_auth(&self, path: &str, token: &str, body: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url(path))
            .bearer_auth(token)
            .json(body)
            .send()
            .await
            .expect("post request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Make an authenticated PUT request with JSON body.
    pub async fn put_auth(&self, path: &str, token: &str, body: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .put(self.url(path))
            .bearer_auth(token)
            .json(body)
            .send()
            .await
            .expect("put request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// Make an authenticated PATCH request without a body.
    pub async fn patch_auth(&self, path: &str, token: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .patch(self.url(path))
            .bearer_auth(token)
            .send()
            .await
            .expect("patch request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }
}

fn admin_url(base_url: &str) -> String {
    base_url
        .rsplit_once('/')
        .map(|(base, _)| format!("{base}/postgres"))
        .unwrap_or_else(|| base_url.to_string())
}

/// Spawn a test app with a fresh temporary database.
pub async fn spawn_app() -> TestApp {
    let _ = dotenvy::dotenv();

    let base_url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set for tests");

    // Create a unique test database
    let db_name = format!("teampulse_test_{}", Uuid::now_v7().simple());

    let admin_pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&admin_url(&base_url))
        .await
        .expect("Failed to connect to postgres for test DB creation");

    sqlx::query(&format!("CREATE DATABASE \"{db_name}\""))
        .execute(&admin_pool)
        .await
        .expect("Failed to create test database");

    admin_pool.close().await;

    // Connect to test DB and run migrations
    let test_url = base_url
        .rsplit_once('/')
        .map(|(base, _)| format!("{base}/{db_name}"))
        .unwrap_or_else(|| base_url.clone());

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&test_url)
        .await
        .expect("Failed to connect to test database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations on test database");

    let config = Config {
        database_url: test_url,
        identity_secret: IDENTITY_SECRET.to_string(),
        identity_issuer: None,
        host: "127.0.0.1".parse().unwrap(),
        port: 0, // unused, we bind to random port
        session_ttl_hours: 1,
        secure_cookies: false,
        team_window_days: 30,
        max_body_size: 65_536,
        db_max_connections: 5,
        log_level: "warn".to_string(),
    };

    let app = teampulse::build_app(pool.clone(), config);

    // Bind to random port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    // Spawn server in background
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    TestApp {
        addr,
        pool,
        client: Client::new(),
        db_name,
    }
}

/// Drop the test database after tests complete.
pub async fn cleanup(app: TestApp) {
    let db_name = app.db_name.clone();
    app.pool.close().await;

    let base_url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set for tests");

    let admin_pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&admin_url(&base_url))
        .await
        .expect("Failed to connect for cleanup");

    let _ = sqlx::query(&format!("DROP DATABASE IF EXISTS \"{db_name}\" WITH (FORCE)"))
        .execute(&admin_pool)
        .await;

    admin_pool.close().await;
}
