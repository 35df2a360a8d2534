//! Layout guard around every `/dashboard` page
//!
//! While rendering on the server the request path and `access_token` cookie
//! go through the same policy as the request guard. In the browser the
//! auth context decides. Anything but an allow renders a redirect to the
//! login page.

use leptos::prelude::*;
use leptos_router::components::{Outlet, Redirect};

use super::{Header, Sidebar};
use crate::core::routes::LOGIN_ROUTE;
use crate::ui::auth::{AuthContext, use_auth_context};

#[component]
pub fn DashboardLayout() -> impl IntoView {
    let auth = use_auth_context();
    let allowed = Signal::derive(move || layout_allows(auth));

    view! {
        <Show when=move || allowed.get() fallback=|| view! { <Redirect path=LOGIN_ROUTE /> }>
            <div class="dashboard">
                <Sidebar />
                <div class="dashboard-main">
                    <Header />
                    <main class="dashboard-content">
                        <Outlet />
                    </main>
                </div>
            </div>
        </Show>
    }
}

#[cfg(feature = "ssr")]
fn layout_allows(_auth: AuthContext) -> bool {
    use axum::http::request::Parts;
    use axum_extra::extract::cookie::CookieJar;

    use crate::core::auth::authorize;
    use crate::core::auth::cookies::ACCESS_TOKEN_COOKIE;

    let Some(parts) = use_context::<Parts>() else {
        return false;
    };
    let jar = CookieJar::from_headers(&parts.headers);
    let token = jar.get(ACCESS_TOKEN_COOKIE).map(|c| c.value().to_string());

    let decision = authorize(parts.uri.path(), token.as_deref(), chrono::Utc::now());
    if !decision.is_allowed() {
        tracing::warn!(path = %parts.uri.path(), decision = ?decision, "Layout guard redirect");
    }
    decision.is_allowed()
}

#[cfg(not(feature = "ssr"))]
fn layout_allows(auth: AuthContext) -> bool {
    auth.is_authenticated()
}
