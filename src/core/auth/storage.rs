//! Persistence of the auth token and cached user
//!
//! The auth store never touches cookies directly; it goes through an
//! [`AuthStorage`] so the same flow runs against `document.cookie` in the
//! browser, the request `Cookie` header during SSR, and memory in tests.

use std::cell::RefCell;

use super::cookies::{ACCESS_TOKEN_COOKIE, USER_SESSION_COOKIE, decode_user, find_cookie};
use super::user::User;

pub trait AuthStorage {
    fn token(&self) -> Option<String>;

    fn user(&self) -> Option<User>;

    fn save(&self, token: &str, user: &User);

    fn clear(&self);

    /// Token and user both present
    fn has_valid_session(&self) -> bool {
        self.token().is_some() && self.user().is_some()
    }

    /// Cached user carries exactly `role`
    fn has_role(&self, role: &str) -> bool {
        self.user().is_some_and(|u| u.rol == role)
    }
}

/// In-memory storage
#[derive(Debug, Default)]
pub struct MemoryStorage {
    token: RefCell<Option<String>>,
    user: RefCell<Option<User>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(token: impl Into<String>, user: User) -> Self {
        Self {
            token: RefCell::new(Some(token.into())),
            user: RefCell::new(Some(user)),
        }
    }

    /// Snapshot of the auth cookies found in a `Cookie:` header
    pub fn from_cookie_header(header: &str) -> Self {
        Self {
            token: RefCell::new(find_cookie(header, ACCESS_TOKEN_COOKIE)),
            user: RefCell::new(
                find_cookie(header, USER_SESSION_COOKIE).and_then(|raw| decode_user(&raw)),
            ),
        }
    }
}

impl AuthStorage for MemoryStorage {
    fn token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn user(&self) -> Option<User> {
        self.user.borrow().clone()
    }

    fn save(&self, token: &str, user: &User) {
        *self.token.borrow_mut() = Some(token.to_string());
        *self.user.borrow_mut() = Some(user.clone());
    }

    fn clear(&self) {
        self.token.borrow_mut().take();
        self.user.borrow_mut().take();
    }
}

impl<S: AuthStorage + ?Sized> AuthStorage for &S {
    fn token(&self) -> Option<String> {
        (**self).token()
    }

    fn user(&self) -> Option<User> {
        (**self).user()
    }

    fn save(&self, token: &str, user: &User) {
        (**self).save(token, user)
    }

    fn clear(&self) {
        (**self).clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::auth::cookies::encode_user;

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

    #[test]
    fn test_memory_storage_save_and_clear() {
        let storage = MemoryStorage::new();
        assert!(!storage.has_valid_session());

        storage.save("tok", &user("UNIVERSITAS"));
        assert_eq!(storage.token().as_deref(), Some("tok"));
        assert!(storage.has_valid_session());
        assert!(storage.has_role("UNIVERSITAS"));
        assert!(!storage.has_role("SUPERVISOR"));

        storage.clear();
        assert_eq!(storage.token(), None);
        assert_eq!(storage.user(), None);
        assert!(!storage.has_role("UNIVERSITAS"));
    }

    #[test]
    fn test_token_without_user_is_not_a_session() {
        let storage = MemoryStorage::from_cookie_header("access_token=tok");
        assert_eq!(storage.token().as_deref(), Some("tok"));
        assert!(!storage.has_valid_session());
    }

    #[test]
    fn test_from_cookie_header() {
        let header = format!(
            "access_token=tok; user_session={}",
            encode_user(&user("UNIVERSITAS")).unwrap()
        );
        let storage = MemoryStorage::from_cookie_header(&header);

        assert!(storage.has_valid_session());
        assert_eq!(storage.user(), Some(user("UNIVERSITAS")));
    }

    #[test]
    fn test_corrupt_user_cookie_is_ignored() {
        let storage = MemoryStorage::from_cookie_header("access_token=tok; user_session=%7Bbroken");
        assert_eq!(storage.user(), None);
        assert!(!storage.has_valid_session());
    }

    #[test]
    fn test_reference_delegates() {
        let storage = MemoryStorage::new();
        let by_ref = &storage;
        by_ref.save("tok", &user("UNIVERSITAS"));
        assert_eq!(storage.token().as_deref(), Some("tok"));
    }
}
