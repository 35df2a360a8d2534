//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::core::routes::DASHBOARD_ROUTE;
use crate::ui::icon::{Icon, icons};

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <div class="not-found">
            <div class="not-found-icon">
                <Icon name=icons::FILE_TEXT class="w-12 h-12" />
            </div>

            <h1 class="not-found-code">"404"</h1>
            <h2 class="not-found-title">"Página no encontrada"</h2>
            <p class="not-found-text">
                "La página que busca no existe o fue movida."
            </p>

            <A href=DASHBOARD_ROUTE attr:class="btn btn-primary">
                "Volver al Dashboard"
            </A>
        </div>
    }
}
