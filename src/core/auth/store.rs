//! Client authentication store
//!
//! Holds `{user, is_authenticated, is_loading, error}` and runs the login,
//! logout and re-check flows against an injected [`AuthBackend`] and
//! [`AuthStorage`]. The UI wraps the resulting state in a signal; tests drive
//! the store directly.

use serde::{Deserialize, Serialize};

use super::storage::AuthStorage;
use super::user::{LoginCredentials, LoginResponse, User, is_allowed_role};
use crate::core::services::ApiFailure;

/// Observable auth state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthState {
    pub user: Option<User>,
    pub is_authenticated: bool,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl AuthState {
    /// Initial state read synchronously from storage
    pub fn from_storage(storage: &impl AuthStorage) -> Self {
        match (storage.token(), storage.user()) {
            (Some(_), Some(user)) if user.has_allowed_role() => Self::authenticated(user),
            _ => Self::default(),
        }
    }

    pub fn authenticated(user: User) -> Self {
        Self {
            user: Some(user),
            is_authenticated: true,
            is_loading: false,
            error: None,
        }
    }

    fn failed(error: String) -> Self {
        Self {
            error: Some(error),
            ..Self::default()
        }
    }
}

/// Login failures, with the text shown to the user
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    #[error("No tiene permisos para acceder a este sistema")]
    WrongRole,

    /// Backend `message`
    #[error("{0}")]
    Rejected(String),

    /// Local transport error text
    #[error("{0}")]
    Unreachable(String),

    #[error("Error al iniciar sesión")]
    Failed,
}

impl From<ApiFailure> for LoginError {
    fn from(failure: ApiFailure) -> Self {
        match failure {
            ApiFailure::Network(message) if !message.trim().is_empty() => {
                LoginError::Unreachable(message)
            }
            failure => failure
                .message_text()
                .map_or(LoginError::Failed, LoginError::Rejected),
        }
    }
}

/// HTTP side of the auth flows
#[allow(async_fn_in_trait)]
pub trait AuthBackend {
    async fn login(&self, credentials: &LoginCredentials) -> Result<LoginResponse, ApiFailure>;

    async fn logout(&self) -> Result<(), ApiFailure>;
}

/// Auth state plus the collaborators that change it
pub struct AuthStore<B, S> {
    backend: B,
    storage: S,
    state: AuthState,
}

impl<B: AuthBackend, S: AuthStorage> AuthStore<B, S> {
    /// Create a store whose state is read from `storage`
    pub fn new(backend: B, storage: S) -> Self {
        let state = AuthState::from_storage(&storage);
        Self {
            backend,
            storage,
            state,
        }
    }

    /// Resume from an existing state snapshot
    pub fn with_state(backend: B, storage: S, state: AuthState) -> Self {
        Self {
            backend,
            storage,
            state,
        }
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub fn into_state(self) -> AuthState {
        self.state
    }

    pub async fn login(&mut self, email: &str, password: &str) -> Result<User, LoginError> {
        self.state.is_loading = true;
        self.state.error = None;

        let credentials = LoginCredentials {
            email: email.to_string(),
            password: password.to_string(),
        };

        let result = match self.backend.login(&credentials).await {
            Ok(response) if is_allowed_role(&response.user.rol) => Ok(response),
            Ok(_) => Err(LoginError::WrongRole),
            Err(failure) => Err(LoginError::from(failure)),
        };

        match result {
            Ok(LoginResponse { access_token, user }) => {
                self.storage.save(&access_token, &user);
                self.state = AuthState::authenticated(user.clone());
                Ok(user)
            }
            Err(err) => {
                self.state = AuthState::failed(err.to_string());
                Err(err)
            }
        }
    }

    /// Backend errors are ignored; local state is always cleared
    pub async fn logout(&mut self) {
        self.state.is_loading = true;
        let _ = self.backend.logout().await;
        self.storage.clear();
        self.state = AuthState::default();
    }

    /// Re-read storage and drop sessions that no longer qualify
    pub fn check_auth(&mut self) {
        if !self.storage.has_valid_session() {
            self.state = AuthState::default();
            return;
        }

        match self.storage.user() {
            Some(user) if user.has_allowed_role() => {
                self.state = AuthState::authenticated(user);
            }
            _ => {
                self.storage.clear();
                self.state = AuthState::default();
            }
        }
    }

    pub fn clear_error(&mut self) {
        self.state.error = None;
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::core::auth::storage::MemoryStorage;
    use crate::core::services::{ApiErrorBody, BACKEND_UNAVAILABLE};

    fn user(rol: &str) -> User {
        User {
            id: "u-1".to_string(),
            email: "ana@universitas.gob.ve".to_string(),
            nombre: "Ana".to_string(),
            apellido: "Pérez".to_string(),
            rol: rol.to_string(),
            ente_id: None,
        }
    }

    struct MockBackend {
        login: Result<LoginResponse, ApiFailure>,
        logout_fails: bool,
        logout_calls: Cell<u32>,
    }

    impl MockBackend {
        fn returning(rol: &str) -> Self {
            Self {
                login: Ok(LoginResponse {
                    access_token: "tok".to_string(),
                    user: user(rol),
                }),
                logout_fails: false,
                logout_calls: Cell::new(0),
            }
        }

        fn failing(failure: ApiFailure) -> Self {
            Self {
                login: Err(failure),
                logout_fails: true,
                logout_calls: Cell::new(0),
            }
        }
    }

    impl AuthBackend for &MockBackend {
        async fn login(&self, _: &LoginCredentials) -> Result<LoginResponse, ApiFailure> {
            self.login.clone()
        }

        async fn logout(&self) -> Result<(), ApiFailure> {
            self.logout_calls.set(self.logout_calls.get() + 1);
            if self.logout_fails {
                Err(ApiFailure::Network("offline".to_string()))
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn test_initial_state_from_storage() {
        let empty = MemoryStorage::new();
        assert_eq!(AuthState::from_storage(&empty), AuthState::default());

        let stored = MemoryStorage::with_session("tok", user("UNIVERSITAS"));
        let state = AuthState::from_storage(&stored);
        assert!(state.is_authenticated);
        assert_eq!(state.user, Some(user("UNIVERSITAS")));

        let other_role = MemoryStorage::with_session("tok", user("SUPERVISOR"));
        assert!(!AuthState::from_storage(&other_role).is_authenticated);
    }

    #[tokio::test]
    async fn test_login_success_persists_session() {
        let backend = MockBackend::returning("UNIVERSITAS");
        let storage = MemoryStorage::new();
        let mut store = AuthStore::new(&backend, &storage);

        let logged = store.login("ana@universitas.gob.ve", "secreto").await.unwrap();

        assert_eq!(logged.rol, "UNIVERSITAS");
        assert!(store.state().is_authenticated);
        assert!(!store.state().is_loading);
        assert_eq!(storage.token().as_deref(), Some("tok"));
        assert_eq!(storage.user(), Some(user("UNIVERSITAS")));
    }

    #[tokio::test]
    async fn test_login_wrong_role_persists_nothing() {
        let backend = MockBackend::returning("ADMIN_ENTE");
        let storage = MemoryStorage::new();
        let mut store = AuthStore::new(&backend, &storage);

        let err = store.login("x@y.co", "p").await.unwrap_err();

        assert_eq!(err, LoginError::WrongRole);
        assert_eq!(
            store.state().error.as_deref(),
            Some("No tiene permisos para acceder a este sistema")
        );
        assert!(!store.state().is_authenticated);
        assert_eq!(storage.token(), None);
        assert_eq!(storage.user(), None);
    }

    #[tokio::test]
    async fn test_login_backend_message_wins() {
        let backend = MockBackend::failing(ApiFailure::status(
            401,
            ApiErrorBody::parse(r#"{"message":"Credenciales inválidas"}"#),
        ));
        let storage = MemoryStorage::new();
        let mut store = AuthStore::new(&backend, &storage);

        let err = store.login("x@y.co", "bad").await.unwrap_err();
        assert_eq!(err.to_string(), "Credenciales inválidas");
        assert_eq!(store.state().error.as_deref(), Some("Credenciales inválidas"));
    }

    #[tokio::test]
    async fn test_login_transport_error_text_is_shown() {
        let backend = MockBackend::failing(ApiFailure::Network("Failed to fetch".to_string()));
        let storage = MemoryStorage::new();
        let mut store = AuthStore::new(&backend, &storage);

        let err = store.login("x@y.co", "p").await.unwrap_err();
        assert_eq!(err, LoginError::Unreachable("Failed to fetch".to_string()));
        assert_eq!(store.state().error.as_deref(), Some("Failed to fetch"));

        let backend = MockBackend::failing(ApiFailure::status(
            502,
            ApiErrorBody::new("Error de conexión con el servidor", BACKEND_UNAVAILABLE),
        ));
        let mut store = AuthStore::new(&backend, &storage);
        let err = store.login("x@y.co", "p").await.unwrap_err();
        assert_eq!(err.to_string(), "Error de conexión con el servidor");
    }

    #[tokio::test]
    async fn test_login_generic_error() {
        for failure in [
            ApiFailure::status(500, ApiErrorBody::default()),
            ApiFailure::Network("  ".to_string()),
        ] {
            let backend = MockBackend::failing(failure);
            let storage = MemoryStorage::new();
            let mut store = AuthStore::new(&backend, &storage);

            let err = store.login("x@y.co", "p").await.unwrap_err();
            assert_eq!(err.to_string(), "Error al iniciar sesión");
        }
    }

    #[tokio::test]
    async fn test_logout_ignores_backend_errors() {
        let backend = MockBackend::failing(ApiFailure::Network("offline".to_string()));
        let storage = MemoryStorage::with_session("tok", user("UNIVERSITAS"));
        let mut store = AuthStore::new(&backend, &storage);
        assert!(store.state().is_authenticated);

        store.logout().await;

        assert_eq!(backend.logout_calls.get(), 1);
        assert_eq!(store.state(), &AuthState::default());
        assert!(!storage.has_valid_session());
    }

    #[test]
    fn test_check_auth() {
        let backend = MockBackend::returning("UNIVERSITAS");

        let storage = MemoryStorage::new();
        let mut store = AuthStore::with_state(
            &backend,
            &storage,
            AuthState::authenticated(user("UNIVERSITAS")),
        );
        store.check_auth();
        assert!(!store.state().is_authenticated);

        let storage = MemoryStorage::with_session("tok", user("UNIVERSITAS"));
        let mut store = AuthStore::with_state(&backend, &storage, AuthState::default());
        store.check_auth();
        assert!(store.state().is_authenticated);

        let storage = MemoryStorage::with_session("tok", user("SUPERVISOR"));
        let mut store = AuthStore::with_state(&backend, &storage, AuthState::default());
        store.check_auth();
        assert!(!store.state().is_authenticated);
        assert_eq!(storage.token(), None);
    }

    #[tokio::test]
    async fn test_clear_error() {
        let backend = MockBackend::returning("SUPERVISOR");
        let storage = MemoryStorage::new();
        let mut store = AuthStore::new(&backend, &storage);

        let _ = store.login("x@y.co", "p").await;
        assert!(store.state().error.is_some());

        store.clear_error();
        assert_eq!(store.state().error, None);
    }
}
