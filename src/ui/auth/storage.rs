//! Browser-side [`AuthStorage`] over `document.cookie`

use crate::core::auth::AuthStorage;

#[cfg(feature = "hydrate")]
pub use browser::CookieStorage;

#[cfg(feature = "hydrate")]
mod browser {
    use cookie::Cookie;
    use wasm_bindgen::JsCast;
    use web_sys::HtmlDocument;

    use crate::core::auth::cookies::{
        ACCESS_TOKEN_COOKIE, USER_SESSION_COOKIE, cleared_cookies, decode_user, find_cookie,
        session_cookies,
    };
    use crate::core::auth::{AuthStorage, User};

    /// Auth cookies read and written through `document.cookie`
    #[derive(Debug, Clone, Copy, Default)]
    pub struct CookieStorage;

    impl CookieStorage {
        fn document() -> Option<HtmlDocument> {
            web_sys::window()?.document()?.dyn_into::<HtmlDocument>().ok()
        }

        fn read() -> String {
            Self::document()
                .and_then(|doc| doc.cookie().ok())
                .unwrap_or_default()
        }

        fn write(cookie: &Cookie<'_>) {
            let written = Self::document().map(|doc| doc.set_cookie(&cookie.to_string()));
            if !matches!(written, Some(Ok(()))) {
                leptos::logging::warn!("Could not write cookie {}", cookie.name());
            }
        }

        /// Fallback when the proxy did not set the cookies itself
        fn secure() -> bool {
            web_sys::window()
                .and_then(|w| w.location().protocol().ok())
                .is_some_and(|p| p == "https:")
        }
    }

    impl AuthStorage for CookieStorage {
        fn token(&self) -> Option<String> {
            find_cookie(&Self::read(), ACCESS_TOKEN_COOKIE)
        }

        fn user(&self) -> Option<User> {
            find_cookie(&Self::read(), USER_SESSION_COOKIE).and_then(|raw| decode_user(&raw))
        }

        /// The login proxy already sets both cookies with the server's
        /// `Secure` setting; those are left untouched
        fn save(&self, token: &str, user: &User) {
            if self.token().as_deref() == Some(token) && self.user().is_some() {
                return;
            }
            match session_cookies(token, user, Self::secure()) {
                Ok(cookies) => cookies.iter().for_each(Self::write),
                Err(e) => leptos::logging::warn!("Could not encode user session: {}", e),
            }
        }

        fn clear(&self) {
            cleared_cookies().iter().for_each(Self::write);
        }
    }
}

/// Storage the auth context writes through in the browser
#[cfg(feature = "hydrate")]
pub fn browser_storage() -> impl AuthStorage {
    CookieStorage
}

/// Nothing persists outside the browser
#[cfg(not(feature = "hydrate"))]
pub fn browser_storage() -> impl AuthStorage {
    crate::core::auth::MemoryStorage::new()
}
