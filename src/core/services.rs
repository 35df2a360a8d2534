//! Service error mapping for calls made from the browser
//!
//! Every protected call goes to the same-origin proxy, which passes the
//! backend status and JSON body through untouched. This module turns that
//! status/body pair into the message shown to the user.

use serde::{Deserialize, Serialize};

/// Code returned by the proxy when the backend cannot be reached
pub const BACKEND_UNAVAILABLE: &str = "BACKEND_UNAVAILABLE";

/// Same-origin proxy endpoints
pub mod endpoints {
    pub const LOGIN: &str = "/api/auth/login";
    pub const LOGOUT: &str = "/api/auth/logout";
    pub const ENTES: &str = "/api/entes";
    pub const ENTES_SIN_SUPERVISOR: &str = "/api/entes/sin-supervisor";
    pub const SUPERVISORES: &str = "/api/supervisores";
}

/// `message` may be a single string or a list (validation errors)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorMessage {
    Text(String),
    List(Vec<String>),
}

/// JSON error body used by the backend and by the proxy
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<ErrorMessage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl ApiErrorBody {
    pub fn new(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            message: Some(ErrorMessage::Text(message.into())),
            code: Some(code.into()),
        }
    }

    /// Parse a response body, tolerating non-JSON and empty bodies
    pub fn parse(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }

    /// Message text, if the body carried a non-empty one
    pub fn message_text(&self) -> Option<String> {
        let text = match self.message.as_ref()? {
            ErrorMessage::Text(text) => text.clone(),
            ErrorMessage::List(items) => items.join(", "),
        };
        (!text.trim().is_empty()).then_some(text)
    }
}

/// A failed HTTP call as seen by the browser
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiFailure {
    /// A response arrived with a non-success status
    Status { status: u16, body: ApiErrorBody },
    /// No response at all
    Network(String),
}

impl ApiFailure {
    pub fn status(status: u16, body: ApiErrorBody) -> Self {
        ApiFailure::Status { status, body }
    }

    /// Proxy 502 with [`BACKEND_UNAVAILABLE`] counts as a network failure
    pub fn is_network(&self) -> bool {
        match self {
            ApiFailure::Network(_) => true,
            ApiFailure::Status { status, body } => {
                *status == 502 && body.code.as_deref() == Some(BACKEND_UNAVAILABLE)
            }
        }
    }

    pub fn message_text(&self) -> Option<String> {
        match self {
            ApiFailure::Status { body, .. } => body.message_text(),
            ApiFailure::Network(_) => None,
        }
    }
}

/// Protected backend operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    CreateEnte,
    ListEntesSinSupervisor,
    CreateSupervisor,
}

impl Operation {
    /// Toast title for a failure
    pub fn error_title(&self) -> &'static str {
        match self {
            Operation::CreateEnte => "Error al crear el Ente",
            Operation::ListEntesSinSupervisor => "Error al cargar Entes disponibles",
            Operation::CreateSupervisor => "Error al crear el Supervisor",
        }
    }

    /// Used when the backend gives no message
    pub fn default_message(&self) -> &'static str {
        match self {
            Operation::CreateEnte => "Error al crear el Ente",
            Operation::ListEntesSinSupervisor => "Error al obtener Entes disponibles",
            Operation::CreateSupervisor => "Error al crear el Supervisor",
        }
    }
}

/// User-facing service errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    #[error("Sesión expirada. Inicie sesión nuevamente")]
    SessionExpired,

    #[error("No autorizado (solo UNIVERSITAS)")]
    Forbidden,

    #[error("Algunos Entes especificados no existen")]
    MissingEntes,

    #[error("Email ya registrado")]
    DuplicateEmail,

    #[error("{0}")]
    Rejected(String),

    #[error("Error de conexión con el servidor")]
    Network,
}

impl ServiceError {
    pub fn from_failure(operation: Operation, failure: &ApiFailure) -> Self {
        if failure.is_network() {
            return ServiceError::Network;
        }

        let ApiFailure::Status { status, .. } = failure else {
            return ServiceError::Network;
        };

        match (operation, *status) {
            (_, 401) => ServiceError::SessionExpired,
            (Operation::CreateEnte, 403) => ServiceError::Forbidden,
            (Operation::CreateSupervisor, 400) => ServiceError::MissingEntes,
            (Operation::CreateSupervisor, 409) => ServiceError::DuplicateEmail,
            _ => ServiceError::Rejected(
                failure
                    .message_text()
                    .unwrap_or_else(|| operation.default_message().to_string()),
            ),
        }
    }

    /// The stored session must be dropped and the user sent to login
    pub fn requires_login(&self) -> bool {
        matches!(self, ServiceError::SessionExpired)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failure(status: u16, body: &str) -> ApiFailure {
        ApiFailure::status(status, ApiErrorBody::parse(body))
    }

    #[test]
    fn test_parse_error_body() {
        let body = ApiErrorBody::parse(r#"{"message":"RIF duplicado","statusCode":400}"#);
        assert_eq!(body.message_text().as_deref(), Some("RIF duplicado"));

        let list = ApiErrorBody::parse(r#"{"message":["nombre vacío","email inválido"]}"#);
        assert_eq!(
            list.message_text().as_deref(),
            Some("nombre vacío, email inválido")
        );

        assert_eq!(ApiErrorBody::parse("<html>502</html>"), ApiErrorBody::default());
        assert_eq!(ApiErrorBody::parse(""), ApiErrorBody::default());
        assert_eq!(ApiErrorBody::parse(r#"{"message":"  "}"#).message_text(), None);
    }

    #[test]
    fn test_supervisor_conflict_message_is_exact() {
        let err = ServiceError::from_failure(
            Operation::CreateSupervisor,
            &failure(409, r#"{"message":"Duplicate key"}"#),
        );
        assert_eq!(err, ServiceError::DuplicateEmail);
        assert_eq!(err.to_string(), "Email ya registrado");
    }

    #[test]
    fn test_supervisor_missing_entes() {
        let err = ServiceError::from_failure(Operation::CreateSupervisor, &failure(400, "{}"));
        assert_eq!(err.to_string(), "Algunos Entes especificados no existen");
    }

    #[test]
    fn test_ente_forbidden() {
        let err = ServiceError::from_failure(Operation::CreateEnte, &failure(403, "{}"));
        assert_eq!(err.to_string(), "No autorizado (solo UNIVERSITAS)");
    }

    #[test]
    fn test_status_codes_are_operation_specific() {
        // 409 on Ente creation is not the supervisor duplicate-email case
        let err = ServiceError::from_failure(
            Operation::CreateEnte,
            &failure(409, r#"{"message":"Ente ya existe"}"#),
        );
        assert_eq!(err, ServiceError::Rejected("Ente ya existe".to_string()));

        let err = ServiceError::from_failure(Operation::CreateEnte, &failure(400, "{}"));
        assert_eq!(err.to_string(), "Error al crear el Ente");
    }

    #[test]
    fn test_fallback_messages() {
        let err = ServiceError::from_failure(Operation::ListEntesSinSupervisor, &failure(500, ""));
        assert_eq!(err.to_string(), "Error al obtener Entes disponibles");

        let err = ServiceError::from_failure(
            Operation::CreateSupervisor,
            &failure(500, r#"{"message":"Base de datos caída"}"#),
        );
        assert_eq!(err.to_string(), "Base de datos caída");
    }

    #[test]
    fn test_unauthorized_requires_login() {
        for op in [
            Operation::CreateEnte,
            Operation::ListEntesSinSupervisor,
            Operation::CreateSupervisor,
        ] {
            let err = ServiceError::from_failure(op, &failure(401, "{}"));
            assert!(err.requires_login());
        }
        assert!(!ServiceError::Network.requires_login());
    }

    #[test]
    fn test_network_failures() {
        let err = ServiceError::from_failure(
            Operation::CreateEnte,
            &ApiFailure::Network("TypeError: Failed to fetch".to_string()),
        );
        assert_eq!(err.to_string(), "Error de conexión con el servidor");

        let proxied = ApiFailure::status(502, ApiErrorBody::new("connect refused", BACKEND_UNAVAILABLE));
        assert!(proxied.is_network());
        assert_eq!(
            ServiceError::from_failure(Operation::CreateSupervisor, &proxied),
            ServiceError::Network
        );

        // A 502 from the backend itself keeps its message
        let upstream = failure(502, r#"{"message":"Gateway caído"}"#);
        assert!(!upstream.is_network());
    }
}
