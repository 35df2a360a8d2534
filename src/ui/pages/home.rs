//! Root page: send the visitor to the dashboard or to the login page

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::core::routes::{LOGIN_ROUTE, dashboard_route};
use crate::ui::auth::{AuthContext, use_auth_context};

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth_context();
    let target = if has_session(auth) {
        dashboard_route()
    } else {
        LOGIN_ROUTE
    };

    view! { <Redirect path=target /> }
}

/// On the server the token itself is verified, not just the cached user
#[cfg(feature = "ssr")]
fn has_session(_auth: AuthContext) -> bool {
    use axum::http::request::Parts;
    use axum_extra::extract::cookie::CookieJar;

    use crate::core::auth::authorize_session;
    use crate::core::auth::cookies::ACCESS_TOKEN_COOKIE;

    use_context::<Parts>().is_some_and(|parts| {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(ACCESS_TOKEN_COOKIE).map(|c| c.value().to_string());
        authorize_session(token.as_deref(), chrono::Utc::now()).is_ok()
    })
}

#[cfg(not(feature = "ssr"))]
fn has_session(auth: AuthContext) -> bool {
    auth.is_authenticated()
}
