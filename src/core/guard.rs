//! Request guard for page routes
//!
//! Runs the authorization policy on every non-asset request and either
//! lets it through (with the verified [`Session`] in the request
//! extensions) or redirects.

use axum::{
    body::Body,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use chrono::Utc;

use super::auth::cookies::{ACCESS_TOKEN_COOKIE, cleared_cookies};
use super::auth::{AccessDecision, DenyReason, Session};
use super::routes::{LOGIN_ROUTE, dashboard_route, is_static_asset};

/// axum middleware, install with `axum::middleware::from_fn(edge_guard)`
pub async fn edge_guard(jar: CookieJar, mut req: Request<Body>, next: Next) -> Response {
    let path = req.uri().path().to_string();

    if is_static_asset(&path) {
        return next.run(req).await;
    }

    let token = jar.get(ACCESS_TOKEN_COOKIE).map(|c| c.value().to_string());

    match super::auth::authorize(&path, token.as_deref(), Utc::now()) {
        AccessDecision::Public => {
            tracing::info!(path = %path, decision = "public", "Route guard");
            next.run(req).await
        }
        AccessDecision::Granted(session) => {
            tracing::info!(
                path = %path,
                decision = "granted",
                email = %session.email,
                role = %session.role,
                "Route guard"
            );
            req.extensions_mut().insert::<Session>(session);
            next.run(req).await
        }
        AccessDecision::RedirectToLogin {
            reason,
            clear_cookies,
        } => {
            match &reason {
                DenyReason::MissingToken => {
                    tracing::info!(path = %path, decision = "login", "Route guard: no session cookie");
                }
                DenyReason::Invalid(err) => {
                    tracing::warn!(path = %path, decision = "login", error = %err, "Route guard: invalid session");
                }
            }

            let redirect = Redirect::temporary(LOGIN_ROUTE);
            if clear_cookies {
                let jar = cleared_cookies()
                    .into_iter()
                    .fold(jar, |jar, cookie| jar.add(cookie));
                (jar, redirect).into_response()
            } else {
                redirect.into_response()
            }
        }
        AccessDecision::RedirectToDashboard(session) => {
            tracing::info!(
                path = %path,
                decision = "dashboard",
                email = %session.email,
                "Route guard: route not allowed for role"
            );
            Redirect::temporary(dashboard_route()).into_response()
        }
    }
}
