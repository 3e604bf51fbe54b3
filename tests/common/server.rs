//! In-process test app
//!
//! Builds the full router over the in-memory store and sends requests
//! through `oneshot`, no sockets involved.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use collabnotes::backend::routes::create_router;
use collabnotes::backend::AppState;
use collabnotes::shared::AppConfig;

/// Signing key used by every test app
pub const TEST_SECRET: &str = "integration-test-secret";

/// Status and parsed JSON body
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
}

impl TestApp {
    pub fn new() -> Self {
        let config = AppConfig::builder()
            .jwt_secret(TEST_SECRET)
            .bcrypt_cost(4)
            .build()
            .expect("test config is valid");
        let state = AppState::in_memory(config);
        Self {
            router: create_router(state.clone()),
            state,
        }
    }

    /// Send a request; `authorization` is the raw header value
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        authorization: Option<&str>,
        body: Option<Value>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(value) = authorization {
            builder = builder.header(header::AUTHORIZATION, value);
        }
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).expect("valid request"))
            .await
            .expect("router is infallible");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("readable body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("JSON body")
        };

        TestResponse { status, body }
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> TestResponse {
        let header = token.map(crate::common::bearer);
        self.send(Method::POST, uri, header.as_deref(), Some(body)).await
    }

    pub async fn put(&self, uri: &str, token: Option<&str>, body: Value) -> TestResponse {
        let header = token.map(crate::common::bearer);
        self.send(Method::PUT, uri, header.as_deref(), Some(body)).await
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> TestResponse {
        let header = token.map(crate::common::bearer);
        self.send(Method::GET, uri, header.as_deref(), None).await
    }
}
