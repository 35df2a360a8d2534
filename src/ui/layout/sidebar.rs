use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::core::routes::{SIDEBAR_ITEMS, is_active};
use crate::ui::auth::use_auth_context;
use crate::ui::icon::{Icon, icons};

/// Dashboard navigation with active-route highlighting
#[component]
pub fn Sidebar() -> impl IntoView {
    let auth = use_auth_context();
    let pathname = use_location().pathname;

    view! {
        <aside class="sidebar">
            <div class="sidebar-brand">
                <div class="sidebar-logo">
                    <Icon name=icons::FILE_TEXT class="w-6 h-6" />
                </div>
                <div>
                    <h1 class="sidebar-title">"UNIVERSITAS"</h1>
                    <p class="sidebar-subtitle">
                        {move || auth.user().map(|u| u.email).unwrap_or_default()}
                    </p>
                </div>
            </div>

            <nav class="sidebar-nav">
                {SIDEBAR_ITEMS
                    .iter()
                    .map(|item| {
                        let active = move || pathname.with(|path| is_active(item.href, path));
                        view! {
                            <A
                                href=item.href
                                attr:class=move || {
                                    if active() { "sidebar-link sidebar-link-active" } else { "sidebar-link" }
                                }
                            >
                                <Icon name=item.icon />
                                <span class="sidebar-link-title">{item.title}</span>
                                <Show when=active>
                                    <Icon name=icons::CHEVRON_RIGHT class="w-4 h-4" />
                                </Show>
                            </A>
                        }
                    })
                    .collect_view()}
            </nav>

            <footer class="sidebar-footer">
                <p>"v1.0.0"</p>
                <p>"© 2026 UNIVERSITAS"</p>
            </footer>
        </aside>
    }
}
