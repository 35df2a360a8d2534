//! Session token decoding and verification
//!
//! Tokens are issued by the backend. Only the payload is read here: the
//! signature is NOT checked, so a session is an identity claim that the
//! backend re-validates on every privileged call.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::user::{is_allowed_role, name_from_email};

/// Session verification errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("Token decoding failed: {0}")]
    Decode(String),

    #[error("Token expired")]
    Expired,

    #[error("Role not allowed: {0}")]
    WrongRole(String),
}

/// Claims carried by backend tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackendClaims {
    pub user_id: String,
    pub email: String,
    pub rol: String,
    #[serde(default)]
    pub iat: Option<i64>,
    #[serde(default)]
    pub exp: Option<i64>,
}

/// A verified session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: String,
    pub email: String,
    pub role: String,
    /// Local part of the email
    pub name: String,
    pub issued_at: Option<i64>,
    pub expires_at: Option<i64>,
}

impl From<BackendClaims> for Session {
    fn from(claims: BackendClaims) -> Self {
        Session {
            name: name_from_email(&claims.email),
            user_id: claims.user_id,
            email: claims.email,
            role: claims.rol,
            issued_at: claims.iat,
            expires_at: claims.exp,
        }
    }
}

/// Decode the payload of a token without verifying its signature
pub fn decode_claims(token: &str) -> Result<BackendClaims, SessionError> {
    // Rejects anything that is not a three-part JWT with a known algorithm
    jsonwebtoken::decode_header(token).map_err(|e| SessionError::Decode(e.to_string()))?;

    let payload = token
        .split('.')
        .nth(1)
        .ok_or_else(|| SessionError::Decode("missing payload segment".to_string()))?;

    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| SessionError::Decode(e.to_string()))?;

    serde_json::from_slice(&bytes).map_err(|e| SessionError::Decode(e.to_string()))
}

/// Decode a token and check expiry, then role
pub fn verify_session(token: &str, now: DateTime<Utc>) -> Result<Session, SessionError> {
    let claims = decode_claims(token)?;

    if let Some(exp) = claims.exp {
        // exp is in seconds, compare against millisecond wall clock
        if exp.saturating_mul(1000) < now.timestamp_millis() {
            return Err(SessionError::Expired);
        }
    }

    if !is_allowed_role(&claims.rol) {
        return Err(SessionError::WrongRole(claims.rol));
    }

    Ok(claims.into())
}
