//! Test utilities
//!
//! Fixtures build models directly; `test_app` wires the real router over a
//! fresh in-memory store so API tests need no external services.

pub mod fixtures {
    use chrono::Utc;
    use uuid::Uuid;

    use crate::{
        config::{CatalogConfig, Config, JwtConfig, ServerConfig},
        constants::{roles, DEFAULT_AVATAR_BASE_URL},
        models::{Photo, User, VoteChoice},
    };

    /// Member with no password, named after `username`
    pub fn member(username: &str) -> User {
        User {
            id: Uuid::new_v4(),
            username: username.to_string(),
            email: format!("{}@example.com", username),
            password_hash: String::new(),
            profile_picture: format!("{}{}", DEFAULT_AVATAR_BASE_URL, username),
            role: roles::MEMBER.to_string(),
            badges: Vec::new(),
            selected_badges: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Photo whose votes were cast by fresh, distinct voters
    pub fn photo_with_votes(owner: &User, category_id: Uuid, likes: u32, dislikes: u32) -> Photo {
        let mut photo = Photo::new(owner, category_id, "https://images.example.com/photo.jpg");
        for _ in 0..likes {
            photo.apply_vote(Uuid::new_v4(), VoteChoice::Like);
        }
        for _ in 0..dislikes {
            photo.apply_vote(Uuid::new_v4(), VoteChoice::Dislike);
        }
        photo
    }

    /// Configuration for tests
    pub fn test_config() -> Config {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                rust_log: "warn".to_string(),
            },
            jwt: JwtConfig {
                secret: "test_secret_key_for_testing_only".to_string(),
                expiry_hours: 24,
            },
            catalog: CatalogConfig::default(),
        }
    }
}

pub mod test_app {
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
        Router,
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use super::fixtures::test_config;
    use crate::{
        config::Config,
        db::{seed_official_catalog, Store},
        state::AppState,
    };

    /// Create a test application over an empty store
    pub fn create_test_app() -> (Router, AppState) {
        create_test_app_with(test_config(), Store::new())
    }

    /// Create a test application whose store holds the official catalog.
    /// `admin@snaprank.com` registers as an admin.
    pub fn create_seeded_test_app() -> (Router, AppState) {
        let mut config = test_config();
        config.catalog.admin_emails = vec!["admin@snaprank.com".to_string()];

        let mut store = Store::new();
        seed_official_catalog(&mut store);

        create_test_app_with(config, store)
    }

    fn create_test_app_with(config: Config, store: Store) -> (Router, AppState) {
        let state = AppState::new(store, config);
        let app = crate::create_router(state.clone());

        (app, state)
    }

    /// Send a request and decode the JSON body (`Null` when empty)
    pub async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, json)
    }

    /// Register a user and return their access token and ID
    pub async fn register(app: &Router, username: &str) -> (String, String) {
        let (status, body) = send(
            app,
            Method::POST,
            "/api/v1/auth/register",
            None,
            Some(serde_json::json!({
                "username": username,
                "email": format!("{}@snaprank.com", username),
                "password": "demo123",
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED, "register failed: {body}");

        (
            body["access_token"].as_str().unwrap().to_string(),
            body["user"]["id"].as_str().unwrap().to_string(),
        )
    }
}
