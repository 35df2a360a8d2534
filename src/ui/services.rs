//! Browser calls to the same-origin proxy
//!
//! Requests go through `gloo-net`; the session cookie rides along
//! automatically. On the server these functions are never reached and
//! return a network failure.

use serde::{Serialize, de::DeserializeOwned};

use crate::core::auth::{AuthBackend, LoginCredentials, LoginResponse};
use crate::core::services::{ApiFailure, Operation, ServiceError, endpoints};
use crate::core::{CreateEnteRequest, CreateResponse, CreateSupervisorRequest, EnteSinSupervisor};
use crate::ui::auth::AuthContext;
use crate::ui::notifications::NotificationManager;

/// [`AuthBackend`] backed by the proxy's auth endpoints
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpAuthBackend;

impl AuthBackend for HttpAuthBackend {
    async fn login(&self, credentials: &LoginCredentials) -> Result<LoginResponse, ApiFailure> {
        post_json(endpoints::LOGIN, credentials).await
    }

    async fn logout(&self) -> Result<(), ApiFailure> {
        post_empty(endpoints::LOGOUT).await
    }
}

pub async fn create_ente(form: &CreateEnteRequest) -> Result<CreateResponse, ServiceError> {
    let body = form.clone().normalized();
    post_json(endpoints::ENTES, &body)
        .await
        .map_err(|f| ServiceError::from_failure(Operation::CreateEnte, &f))
}

pub async fn entes_sin_supervisor() -> Result<Vec<EnteSinSupervisor>, ServiceError> {
    get_json(endpoints::ENTES_SIN_SUPERVISOR)
        .await
        .map_err(|f| ServiceError::from_failure(Operation::ListEntesSinSupervisor, &f))
}

pub async fn create_supervisor(
    form: &CreateSupervisorRequest,
) -> Result<CreateResponse, ServiceError> {
    post_json(endpoints::SUPERVISORES, form)
        .await
        .map_err(|f| ServiceError::from_failure(Operation::CreateSupervisor, &f))
}

/// Toast a failed call; an expired session also logs the user out
pub fn report_error(
    auth: AuthContext,
    notifications: NotificationManager,
    operation: Operation,
    error: &ServiceError,
) {
    notifications.error(operation.error_title(), error.to_string());
    if error.requires_login() {
        auth.expire_session();
    }
}

#[cfg(feature = "hydrate")]
fn network(err: gloo_net::Error) -> ApiFailure {
    ApiFailure::Network(err.to_string())
}

#[cfg(feature = "hydrate")]
async fn read_json<T: DeserializeOwned>(
    response: gloo_net::http::Response,
) -> Result<T, ApiFailure> {
    use crate::core::services::ApiErrorBody;

    let status = response.status();
    let text = response.text().await.map_err(network)?;
    if !response.ok() {
        return Err(ApiFailure::status(status, ApiErrorBody::parse(&text)));
    }
    serde_json::from_str(&text).map_err(|e| {
        leptos::logging::warn!("Unexpected response body: {}", e);
        ApiFailure::status(status, ApiErrorBody::default())
    })
}

#[cfg(feature = "hydrate")]
async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiFailure> {
    use gloo_net::http::Request;

    let response = Request::get(url).send().await.map_err(network)?;
    read_json(response).await
}

#[cfg(feature = "hydrate")]
async fn post_json<B, T>(url: &str, body: &B) -> Result<T, ApiFailure>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    use gloo_net::http::Request;

    let response = Request::post(url)
        .json(body)
        .map_err(network)?
        .send()
        .await
        .map_err(network)?;
    read_json(response).await
}

#[cfg(feature = "hydrate")]
async fn post_empty(url: &str) -> Result<(), ApiFailure> {
    use crate::core::services::ApiErrorBody;
    use gloo_net::http::Request;

    let response = Request::post(url).send().await.map_err(network)?;
    if response.ok() {
        return Ok(());
    }
    let text = response.text().await.unwrap_or_default();
    Err(ApiFailure::status(response.status(), ApiErrorBody::parse(&text)))
}

#[cfg(not(feature = "hydrate"))]
async fn get_json<T: DeserializeOwned>(_url: &str) -> Result<T, ApiFailure> {
    Err(ApiFailure::Network("not available on server".to_string()))
}

#[cfg(not(feature = "hydrate"))]
async fn post_json<B, T>(_url: &str, _body: &B) -> Result<T, ApiFailure>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    Err(ApiFailure::Network("not available on server".to_string()))
}

#[cfg(not(feature = "hydrate"))]
async fn post_empty(_url: &str) -> Result<(), ApiFailure> {
    Err(ApiFailure::Network("not available on server".to_string()))
}
