//! Auth cookie contract shared by the server and the browser
//!
//! `access_token` carries the raw bearer token, `user_session` the
//! URL-encoded JSON of the cached [`User`]. Both live for 7 days,
//! `SameSite=Strict`, and are `Secure` in production builds.

use cookie::time::{Duration, OffsetDateTime};
use cookie::{Cookie, SameSite};

use super::user::User;

pub const ACCESS_TOKEN_COOKIE: &str = "access_token";
pub const USER_SESSION_COOKIE: &str = "user_session";

/// Cookie lifetime (7 days)
pub const COOKIE_MAX_AGE_SECS: i64 = 60 * 60 * 24 * 7;

/// Build a persistent auth cookie
pub fn auth_cookie(name: &'static str, value: String, secure: bool) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .max_age(Duration::seconds(COOKIE_MAX_AGE_SECS))
        .same_site(SameSite::Strict)
        .secure(secure)
        .build()
}

/// Build a cookie that deletes `name` when sent
pub fn expired_cookie(name: &'static str) -> Cookie<'static> {
    Cookie::build((name, ""))
        .path("/")
        .max_age(Duration::ZERO)
        .expires(OffsetDateTime::UNIX_EPOCH)
        .same_site(SameSite::Strict)
        .build()
}

/// Both auth cookies for a fresh login
pub fn session_cookies(
    token: &str,
    user: &User,
    secure: bool,
) -> Result<[Cookie<'static>; 2], serde_json::Error> {
    Ok([
        auth_cookie(ACCESS_TOKEN_COOKIE, token.to_string(), secure),
        auth_cookie(USER_SESSION_COOKIE, encode_user(user)?, secure),
    ])
}

/// Deletion cookies for both auth cookies
pub fn cleared_cookies() -> [Cookie<'static>; 2] {
    [
        expired_cookie(ACCESS_TOKEN_COOKIE),
        expired_cookie(USER_SESSION_COOKIE),
    ]
}

/// URL-encoded JSON of the user, as stored in `user_session`
pub fn encode_user(user: &User) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string(user)?;
    Ok(urlencoding::encode(&json).into_owned())
}

/// Inverse of [`encode_user`]; `None` for anything malformed
pub fn decode_user(raw: &str) -> Option<User> {
    let json = urlencoding::decode(raw).ok()?;
    serde_json::from_str(&json).ok()
}

/// Find a cookie value in a `Cookie:` header (or `document.cookie`)
pub fn find_cookie(header: &str, name: &str) -> Option<String> {
    Cookie::split_parse(header)
        .filter_map(Result::ok)
        .find(|c| c.name() == name)
        .map(|c| c.value().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: "u-1".to_string(),
            email: "ana@universitas.gob.ve".to_string(),
            nombre: "Ana María".to_string(),
            apellido: "Pérez; Díaz".to_string(),
            rol: "UNIVERSITAS".to_string(),
            ente_id: None,
        }
    }

    #[test]
    fn test_auth_cookie_attributes() {
        let rendered = auth_cookie(ACCESS_TOKEN_COOKIE, "abc.def.ghi".to_string(), true).to_string();

        assert!(rendered.starts_with("access_token=abc.def.ghi"));
        assert!(rendered.contains("Path=/"));
        assert!(rendered.contains("Max-Age=604800"));
        assert!(rendered.contains("SameSite=Strict"));
        assert!(rendered.contains("Secure"));
    }

    #[test]
    fn test_auth_cookie_not_secure_in_dev() {
        let rendered = auth_cookie(ACCESS_TOKEN_COOKIE, "t".to_string(), false).to_string();
        assert!(!rendered.contains("Secure"));
    }

    #[test]
    fn test_expired_cookie() {
        let c = expired_cookie(USER_SESSION_COOKIE);
        assert_eq!(c.name(), "user_session");
        assert_eq!(c.value(), "");
        assert_eq!(c.max_age(), Some(Duration::ZERO));
        assert_eq!(c.path(), Some("/"));
    }

    #[test]
    fn test_user_cookie_survives_header_round_trip() {
        let [token, session] = session_cookies("tok", &user(), false).unwrap();
        let header = format!(
            "theme=dark; {}={}; {}={}",
            token.name(),
            token.value(),
            session.name(),
            session.value()
        );

        assert_eq!(find_cookie(&header, ACCESS_TOKEN_COOKIE).as_deref(), Some("tok"));
        let raw = find_cookie(&header, USER_SESSION_COOKIE).unwrap();
        assert_eq!(decode_user(&raw), Some(user()));
    }

    #[test]
    fn test_encoded_user_has_no_cookie_delimiters() {
        let encoded = encode_user(&user()).unwrap();
        assert!(!encoded.contains(';'));
        assert!(!encoded.contains(' '));
        assert!(!encoded.contains('"'));
    }

    #[test]
    fn test_decode_user_rejects_garbage() {
        assert_eq!(decode_user("not-json"), None);
        assert_eq!(decode_user("%7B%22id%22%3A1%7D"), None);
        assert_eq!(decode_user("%E0%A4%A"), None);
    }

    #[test]
    fn test_find_cookie() {
        let header = "a=1; access_token=xyz; access_token_old=zzz";
        assert_eq!(find_cookie(header, "access_token").as_deref(), Some("xyz"));
        assert_eq!(find_cookie(header, "missing"), None);
        assert_eq!(find_cookie("access_token=", "access_token"), None);
        assert_eq!(find_cookie("", "access_token"), None);
    }
}
