//! Auth context for managing user authentication state
//!
//! Wraps the core [`AuthStore`] state in a signal. The initial value is
//! read synchronously from the auth cookies: from the request `Cookie`
//! header while rendering on the server and from `document.cookie` in the
//! browser, so both sides hydrate to the same markup.

use leptos::prelude::*;

use super::storage::browser_storage;
use crate::core::auth::{AuthState, AuthStorage, AuthStore, LoginError, User};
use crate::ui::services::HttpAuthBackend;

/// Auth context providing authentication state and actions
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub state: RwSignal<AuthState>,
}

impl AuthContext {
    pub fn is_authenticated(&self) -> bool {
        self.state.with(|s| s.is_authenticated)
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(|s| s.is_loading)
    }

    pub fn user(&self) -> Option<User> {
        self.state.with(|s| s.user.clone())
    }

    pub fn error(&self) -> Option<String> {
        self.state.with(|s| s.error.clone())
    }

    fn store(&self) -> AuthStore<HttpAuthBackend, impl AuthStorage> {
        AuthStore::with_state(HttpAuthBackend, browser_storage(), self.state.get_untracked())
    }

    pub async fn login(self, email: String, password: String) -> Result<User, LoginError> {
        self.state.update(|s| {
            s.is_loading = true;
            s.error = None;
        });

        let mut store = self.store();
        let result = store.login(&email, &password).await;
        self.state.set(store.into_state());
        result
    }

    pub async fn logout(self) {
        self.state.update(|s| s.is_loading = true);

        let mut store = self.store();
        store.logout().await;
        self.state.set(store.into_state());
    }

    /// Re-read the cookies, dropping sessions that no longer qualify
    pub fn check_auth(&self) {
        let mut store = self.store();
        store.check_auth();
        self.state.set(store.into_state());
    }

    pub fn clear_error(&self) {
        let mut store = self.store();
        store.clear_error();
        self.state.set(store.into_state());
    }

    /// Server rejected the token: forget it and reload on the login page
    pub fn expire_session(&self) {
        browser_storage().clear();
        self.state.set(AuthState::default());
        redirect_to_login();
    }
}

/// Provide auth context to the component tree
pub fn provide_auth_context() -> AuthContext {
    let ctx = AuthContext {
        state: RwSignal::new(initial_state()),
    };
    provide_context(ctx);
    ctx
}

/// Get auth context from the component tree
pub fn use_auth_context() -> AuthContext {
    expect_context::<AuthContext>()
}

#[cfg(feature = "ssr")]
fn initial_state() -> AuthState {
    use crate::core::auth::MemoryStorage;
    use axum::http::{header, request::Parts};

    let cookie_header = use_context::<Parts>()
        .and_then(|parts| {
            parts
                .headers
                .get(header::COOKIE)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        })
        .unwrap_or_default();

    AuthState::from_storage(&MemoryStorage::from_cookie_header(&cookie_header))
}

#[cfg(not(feature = "ssr"))]
fn initial_state() -> AuthState {
    AuthState::from_storage(&browser_storage())
}

/// Full page load of `/login`, so the edge guard sees the cleared cookies
#[cfg(feature = "hydrate")]
fn redirect_to_login() {
    use crate::core::routes::LOGIN_ROUTE;

    if let Some(window) = web_sys::window() {
        if window.location().set_href(LOGIN_ROUTE).is_err() {
            leptos::logging::warn!("Could not navigate to {}", LOGIN_ROUTE);
        }
    }
}

#[cfg(not(feature = "hydrate"))]
fn redirect_to_login() {}
