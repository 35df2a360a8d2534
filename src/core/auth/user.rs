//! User identity as returned by the backend and cached in the browser.

use serde::{Deserialize, Serialize};

/// The only role allowed to use this application.
pub const ALLOWED_ROLE: &str = "UNIVERSITAS";

/// Check a role string against [`ALLOWED_ROLE`] (exact match).
pub fn is_allowed_role(role: &str) -> bool {
    role == ALLOWED_ROLE
}

/// User information from the backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub nombre: String,
    pub apellido: String,
    pub rol: String,
    #[serde(default)]
    pub ente_id: Option<String>,
}

impl User {
    pub fn has_allowed_role(&self) -> bool {
        is_allowed_role(&self.rol)
    }

    /// "Nombre Apellido", or the email when both are blank.
    pub fn full_name(&self) -> String {
        let name = format!("{} {}", self.nombre.trim(), self.apellido.trim());
        let name = name.trim();
        if name.is_empty() {
            self.email.clone()
        } else {
            name.to_string()
        }
    }
}

/// Body of `POST /auth/login`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

/// Response of `POST /auth/login`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginResponse {
    pub access_token: String,
    pub user: User,
}

/// Display name derived from an email address (the part before `@`).
pub fn name_from_email(email: &str) -> String {
    email.split('@').next().unwrap_or_default().to_string()
}

/// Up to two uppercase initials for an avatar.
pub fn initials(name: &str) -> String {
    let parts: Vec<&str> = name.split_whitespace().collect();
    let initials: String = if parts.len() >= 2 {
        parts[..2].iter().filter_map(|p| p.chars().next()).collect()
    } else {
        name.chars().take(2).collect()
    };
    initials.to_uppercase()
}
