//! HTTP client for the external backend REST API
//!
//! Forwards JSON requests with an optional Bearer token and hands back the
//! raw status and body, so the proxy can pass them through untouched.

use std::sync::Arc;

use axum::{
    Json,
    body::{Body, Bytes},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Serialize, de::DeserializeOwned};

use super::config::Config;
use super::services::{ApiErrorBody, BACKEND_UNAVAILABLE};

/// Backend call failures that produced no usable response
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("Error de conexión con el servidor")]
    Unavailable(#[source] reqwest::Error),

    #[error("Respuesta inválida del servidor: {0}")]
    InvalidResponse(String),
}

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let code = match &self {
            BackendError::Unavailable(_) => BACKEND_UNAVAILABLE,
            BackendError::InvalidResponse(_) => "INVALID_BACKEND_RESPONSE",
        };
        let body = ApiErrorBody::new(self.to_string(), code);

        (StatusCode::BAD_GATEWAY, Json(body)).into_response()
    }
}

/// Status and body as returned by the backend
#[derive(Debug, Clone)]
pub struct BackendResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

impl BackendResponse {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, BackendError> {
        serde_json::from_slice(&self.body).map_err(|e| BackendError::InvalidResponse(e.to_string()))
    }
}

impl IntoResponse for BackendResponse {
    fn into_response(self) -> Response {
        let mut response = Response::new(Body::from(self.body));
        *response.status_mut() = self.status;
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );
        response
    }
}

/// Shared backend client
#[derive(Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    config: Arc<Config>,
}

impl BackendClient {
    pub fn new(config: Config) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.backend_timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            config: Arc::new(config),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub async fn get(&self, path: &str, token: Option<&str>) -> Result<BackendResponse, BackendError> {
        let request = self.http.get(self.config.backend_url(path));
        self.send("GET", path, request, token).await
    }

    pub async fn post_json<T: Serialize + ?Sized>(
        &self,
        path: &str,
        token: Option<&str>,
        body: &T,
    ) -> Result<BackendResponse, BackendError> {
        let request = self.http.post(self.config.backend_url(path)).json(body);
        self.send("POST", path, request, token).await
    }

    async fn send(
        &self,
        method: &str,
        path: &str,
        mut request: reqwest::RequestBuilder,
        token: Option<&str>,
    ) -> Result<BackendResponse, BackendError> {
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| {
            tracing::error!(method, path, error = %e, "Backend request failed");
            BackendError::Unavailable(e)
        })?;

        let status = StatusCode::from_u16(response.status().as_u16())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = response.bytes().await.map_err(|e| {
            tracing::error!(method, path, error = %e, "Failed to read backend response");
            BackendError::Unavailable(e)
        })?;

        tracing::info!(method, path, status = status.as_u16(), "Backend call");
        Ok(BackendResponse { status, body })
    }
}
