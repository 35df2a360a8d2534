//! Same-origin proxy to the backend REST API
//!
//! - POST /api/auth/login - Forward credentials, set the auth cookies (public)
//! - POST /api/auth/logout - Clear the auth cookies
//! - POST /api/entes - Create an Ente
//! - GET /api/entes/sin-supervisor - Entes without a supervising organization
//! - POST /api/supervisores - Create a Supervisor
//!
//! Protected routes read the session token from the `access_token` cookie
//! and forward it as a Bearer header. Backend status and body are passed
//! through as-is.

use axum::{
    Json, Router,
    extract::{FromRequestParts, State},
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use axum_extra::extract::cookie::CookieJar;
use chrono::Utc;
use serde::Serialize;

use super::auth::cookies::{ACCESS_TOKEN_COOKIE, cleared_cookies, session_cookies};
use super::auth::{DenyReason, LoginCredentials, LoginResponse, Session, authorize_session};
use super::backend::{BackendClient, BackendError, BackendResponse};
use super::models::{CreateEnteRequest, CreateSupervisorRequest};
use super::services::{ApiErrorBody, endpoints};
use super::validation::{FieldError, ValidationResult, validate_ente, validate_supervisor};

/// Proxy state
#[derive(Clone)]
pub struct ApiState {
    pub backend: BackendClient,
}

/// Proxy failures produced before or instead of a backend response
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("Sesión expirada. Inicie sesión nuevamente")]
    Unauthorized(DenyReason),

    #[error("Datos inválidos")]
    Validation(ValidationResult),

    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// 422 body: the first message plus every field error
#[derive(Debug, Serialize)]
struct ValidationErrorBody {
    message: String,
    code: &'static str,
    errors: Vec<FieldError>,
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        match self {
            ProxyError::Unauthorized(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ApiErrorBody::new(message, "UNAUTHORIZED")),
            )
                .into_response(),
            ProxyError::Validation(result) => {
                let message = result.to_result().err().map_or(message, |e| e.message);
                let body = ValidationErrorBody {
                    message,
                    code: "VALIDATION_ERROR",
                    errors: result.errors,
                };
                (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
            }
            ProxyError::Backend(err) => err.into_response(),
        }
    }
}

/// Caller with a verified session cookie
#[derive(Debug, Clone)]
pub struct SessionUser {
    pub session: Session,
    pub token: String,
}

impl<S> FromRequestParts<S> for SessionUser
where
    S: Send + Sync,
{
    type Rejection = ProxyError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar
            .get(ACCESS_TOKEN_COOKIE)
            .map(|c| c.value().to_string())
            .unwrap_or_default();

        match authorize_session(Some(&token), Utc::now()) {
            Ok(session) => Ok(SessionUser { session, token }),
            Err(reason) => {
                tracing::warn!(path = %parts.uri.path(), reason = ?reason, "Rejected API call");
                Err(ProxyError::Unauthorized(reason))
            }
        }
    }
}

/// Create the proxy router
pub fn api_router(state: ApiState) -> Router {
    Router::new()
        .route(endpoints::LOGIN, post(login))
        .route(endpoints::LOGOUT, post(logout))
        .route(endpoints::ENTES, post(create_ente))
        .route(endpoints::ENTES_SIN_SUPERVISOR, get(entes_sin_supervisor))
        .route(endpoints::SUPERVISORES, post(create_supervisor))
        .with_state(state)
}

/// Cookies are only set for a successful login with the allowed role
async fn login(
    State(state): State<ApiState>,
    jar: CookieJar,
    Json(credentials): Json<LoginCredentials>,
) -> Result<(CookieJar, BackendResponse), ProxyError> {
    tracing::info!(email = %credentials.email, "Login attempt");
    let response = state
        .backend
        .post_json("/auth/login", None, &credentials)
        .await?;
    if !response.is_success() {
        return Ok((jar, response));
    }

    let login = match response.json::<LoginResponse>() {
        Ok(login) => login,
        Err(err) => {
            tracing::warn!(error = %err, "Login response without a session");
            return Ok((jar, response));
        }
    };
    if !login.user.has_allowed_role() {
        tracing::warn!(email = %login.user.email, role = %login.user.rol, "Login with foreign role");
        return Ok((jar, response));
    }

    let secure = state.backend.config().secure_cookies;
    let cookies = session_cookies(&login.access_token, &login.user, secure)
        .map_err(|e| BackendError::InvalidResponse(e.to_string()))?;
    let jar = cookies.into_iter().fold(jar, |jar, cookie| jar.add(cookie));
    Ok((jar, response))
}

/// Sessions are not tracked by the backend; only the cookies go
async fn logout(jar: CookieJar) -> (CookieJar, StatusCode) {
    let jar = cleared_cookies()
        .into_iter()
        .fold(jar, |jar, cookie| jar.add(cookie));
    (jar, StatusCode::NO_CONTENT)
}

async fn create_ente(
    State(state): State<ApiState>,
    user: SessionUser,
    Json(request): Json<CreateEnteRequest>,
) -> Result<BackendResponse, ProxyError> {
    let request = request.normalized();
    let result = validate_ente(&request);
    if !result.is_valid() {
        return Err(ProxyError::Validation(result));
    }

    tracing::info!(by = %user.session.email, nombre = %request.nombre, "Creating Ente");
    Ok(state
        .backend
        .post_json("/entes", Some(&user.token), &request)
        .await?)
}

async fn entes_sin_supervisor(
    State(state): State<ApiState>,
    user: SessionUser,
) -> Result<BackendResponse, ProxyError> {
    Ok(state
        .backend
        .get("/entes/sin-supervisor", Some(&user.token))
        .await?)
}

async fn create_supervisor(
    State(state): State<ApiState>,
    user: SessionUser,
    Json(request): Json<CreateSupervisorRequest>,
) -> Result<BackendResponse, ProxyError> {
    let result = validate_supervisor(&request);
    if !result.is_valid() {
        return Err(ProxyError::Validation(result));
    }

    tracing::info!(
        by = %user.session.email,
        organizacion = %request.nombre_organizacion,
        entes = request.entes_ids.len(),
        "Creating Supervisor"
    );
    Ok(state
        .backend
        .post_json("/supervisores", Some(&user.token), &request)
        .await?)
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{HeaderMap, Request, header},
    };
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::*;
    use crate::core::auth::session::test_tokens::token;
    use crate::core::backend::test_server;
    use crate::core::config::Config;

    /// Fake backend: echoes the Authorization header and body
    fn fake_backend() -> Router {
        async fn echo(headers: HeaderMap, body: Option<Json<Value>>) -> Json<Value> {
            let auth = headers
                .get(header::AUTHORIZATION)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string);
            Json(json!({
                "message": "ok",
                "authorization": auth,
                "body": body.map(|Json(b)| b),
            }))
        }

        Router::new()
            .route("/auth/login", post(echo))
            .route("/entes", post(echo))
            .route("/entes/sin-supervisor", get(echo))
            .route(
                "/supervisores",
                post(|| async {
                    (
                        StatusCode::CONFLICT,
                        Json(json!({"message": "duplicate key", "statusCode": 409})),
                    )
                }),
            )
    }

    async fn proxy_to(api_url: String) -> Router {
        proxy_with(api_url, false)
    }

    fn proxy_with(api_url: String, secure_cookies: bool) -> Router {
        let backend = BackendClient::new(Config {
            api_url,
            backend_timeout_secs: Some(5),
            secure_cookies,
        })
        .unwrap();
        api_router(ApiState { backend })
    }

    /// Fake backend answering every login with `rol`
    fn login_backend(rol: &'static str) -> Router {
        Router::new().route(
            "/auth/login",
            post(move || async move {
                Json(json!({
                    "access_token": "header.payload.sig",
                    "user": {
                        "id": "7f9c2d7e-0000-4000-8000-000000000001",
                        "email": "ana.perez@universitas.gob.ve",
                        "nombre": "Ana",
                        "apellido": "Pérez",
                        "rol": rol,
                    },
                }))
            }),
        )
    }

    fn set_cookies(response: &Response) -> Vec<String> {
        response
            .headers()
            .get_all(header::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .map(str::to_string)
            .collect()
    }

    async fn login_with(backend: Router, secure_cookies: bool) -> Response {
        let api_url = test_server::spawn(backend).await;
        proxy_with(api_url, secure_cookies)
            .oneshot(post_json(
                "/api/auth/login",
                None,
                json!({"email": "ana.perez@universitas.gob.ve", "password": "p"}),
            ))
            .await
            .unwrap()
    }

    async fn proxy() -> Router {
        proxy_to(test_server::spawn(fake_backend()).await).await
    }

    fn session_cookie() -> (String, String) {
        let t = token("UNIVERSITAS", Some(Utc::now().timestamp() + 1000));
        (format!("access_token={t}"), t)
    }

    fn post_json(path: &str, cookie: Option<&str>, body: Value) -> Request<Body> {
        let mut builder = Request::post(path).header(header::CONTENT_TYPE, "application/json");
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn valid_ente() -> Value {
        json!({
            "nombre": "Alcaldía de Sucre",
            "emailContacto": "admin@sucre.gob.ve",
            "password": "secreto",
            "nombreAdmin": "Luis",
            "apellidoAdmin": "Rojas",
            "rif": "",
            "estado": "Miranda",
        })
    }

    #[tokio::test]
    async fn test_login_is_public_and_has_no_bearer() {
        let response = proxy()
            .await
            .oneshot(post_json(
                "/api/auth/login",
                None,
                json!({"email": "ana@x.co", "password": "p"}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(set_cookies(&response).is_empty());
        let body = json_body(response).await;
        assert_eq!(body["authorization"], Value::Null);
        assert_eq!(body["body"]["email"], "ana@x.co");
    }

    #[tokio::test]
    async fn test_login_sets_secure_session_cookies() {
        let response = login_with(login_backend("UNIVERSITAS"), true).await;

        assert_eq!(response.status(), StatusCode::OK);
        let cookies = set_cookies(&response);
        assert_eq!(cookies.len(), 2);
        assert!(cookies.iter().any(|c| c.starts_with("access_token=header.payload.sig")));
        assert!(cookies.iter().any(|c| c.starts_with("user_session=")));
        for cookie in &cookies {
            assert!(cookie.contains("Secure"), "{cookie}");
            assert!(cookie.contains("SameSite=Strict"), "{cookie}");
            assert!(cookie.contains("Max-Age=604800"), "{cookie}");
        }
        assert_eq!(json_body(response).await["user"]["rol"], "UNIVERSITAS");
    }

    #[tokio::test]
    async fn test_login_cookies_follow_secure_flag() {
        let response = login_with(login_backend("UNIVERSITAS"), false).await;

        let cookies = set_cookies(&response);
        assert_eq!(cookies.len(), 2);
        assert!(cookies.iter().all(|c| !c.contains("Secure")));
    }

    #[tokio::test]
    async fn test_login_with_foreign_role_sets_no_cookies() {
        let response = login_with(login_backend("ADMIN_ENTE"), true).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(set_cookies(&response).is_empty());
    }

    #[tokio::test]
    async fn test_protected_route_requires_session() {
        let response = proxy()
            .await
            .oneshot(post_json("/api/entes", None, valid_ente()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = json_body(response).await;
        assert_eq!(body["code"], "UNAUTHORIZED");
    }

    #[tokio::test]
    async fn test_wrong_role_cookie_is_unauthorized() {
        let cookie = format!("access_token={}", token("ADMIN_ENTE", None));
        let request = Request::get("/api/entes/sin-supervisor")
            .header(header::COOKIE, cookie)
            .body(Body::empty())
            .unwrap();

        let response = proxy().await.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_create_ente_forwards_token_and_drops_blank_optionals() {
        let (cookie, t) = session_cookie();
        let response = proxy()
            .await
            .oneshot(post_json("/api/entes", Some(&cookie), valid_ente()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["authorization"], format!("Bearer {t}"));
        assert_eq!(body["body"]["estado"], "Miranda");
        assert!(body["body"].get("rif").is_none());
    }

    #[tokio::test]
    async fn test_invalid_ente_is_rejected_before_forwarding() {
        let (cookie, _) = session_cookie();
        let mut ente = valid_ente();
        ente["nombre"] = json!("AB");

        let response = proxy()
            .await
            .oneshot(post_json("/api/entes", Some(&cookie), ente))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = json_body(response).await;
        assert_eq!(body["message"], "El nombre debe tener al menos 3 caracteres");
        assert_eq!(body["errors"][0]["field"], "nombre");
    }

    #[tokio::test]
    async fn test_supervisor_conflict_passes_through() {
        let (cookie, _) = session_cookie();
        let supervisor = json!({
            "nombreOrganizacion": "Contraloría",
            "rifOrganizacion": "G-20000001-0",
            "emailOrganizacion": "info@contraloria.gob.ve",
            "nombreUsuario": "Eva",
            "apellidoUsuario": "Díaz",
            "emailUsuario": "eva@contraloria.gob.ve",
            "password": "secreto",
            "entesIds": [],
        });

        let response = proxy()
            .await
            .oneshot(post_json("/api/supervisores", Some(&cookie), supervisor))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert_eq!(json_body(response).await["message"], "duplicate key");
    }

    #[tokio::test]
    async fn test_entes_sin_supervisor_forwards_token() {
        let (cookie, t) = session_cookie();
        let request = Request::get("/api/entes/sin-supervisor")
            .header(header::COOKIE, cookie)
            .body(Body::empty())
            .unwrap();

        let response = proxy().await.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["authorization"], format!("Bearer {t}"));
    }

    #[tokio::test]
    async fn test_logout_clears_cookies() {
        let request = Request::post("/api/auth/logout")
            .body(Body::empty())
            .unwrap();
        let response = proxy().await.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert_eq!(response.headers().get_all(header::SET_COOKIE).iter().count(), 2);
    }

    #[tokio::test]
    async fn test_backend_down_is_bad_gateway() {
        let (cookie, _) = session_cookie();
        let router = proxy_to(test_server::unreachable().await).await;

        let response = router
            .oneshot(post_json("/api/entes", Some(&cookie), valid_ente()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(json_body(response).await["code"], "BACKEND_UNAVAILABLE");
    }
}
