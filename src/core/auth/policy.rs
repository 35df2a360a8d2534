//! Authorization policy shared by the request guard and the layout guard

use chrono::{DateTime, Utc};

use super::session::{Session, SessionError, verify_session};
use crate::core::routes::{is_public_route, is_route_allowed_for_role};

/// Outcome of an access check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    /// Public route, no session needed
    Public,
    /// Protected route with a verified session
    Granted(Session),
    /// Send to the login page; `clear_cookies` when a token was present but invalid
    RedirectToLogin {
        reason: DenyReason,
        clear_cookies: bool,
    },
    /// Valid session, but the route is outside the role's set
    RedirectToDashboard(Session),
}

/// Why a request was sent to the login page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DenyReason {
    MissingToken,
    Invalid(SessionError),
}

impl AccessDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, AccessDecision::Public | AccessDecision::Granted(_))
    }
}

/// Decide whether `path` may be served for the given session token
pub fn authorize(path: &str, token: Option<&str>, now: DateTime<Utc>) -> AccessDecision {
    if is_public_route(path) {
        return AccessDecision::Public;
    }

    let Some(token) = token.filter(|t| !t.is_empty()) else {
        return AccessDecision::RedirectToLogin {
            reason: DenyReason::MissingToken,
            clear_cookies: false,
        };
    };

    let session = match verify_session(token, now) {
        Ok(session) => session,
        Err(err) => {
            return AccessDecision::RedirectToLogin {
                reason: DenyReason::Invalid(err),
                clear_cookies: true,
            };
        }
    };

    if !is_route_allowed_for_role(path) {
        return AccessDecision::RedirectToDashboard(session);
    }

    AccessDecision::Granted(session)
}

/// Check a token for the authenticated shell, whatever the path
pub fn authorize_session(token: Option<&str>, now: DateTime<Utc>) -> Result<Session, DenyReason> {
    let token = token
        .filter(|t| !t.is_empty())
        .ok_or(DenyReason::MissingToken)?;
    verify_session(token, now).map_err(DenyReason::Invalid)
}
