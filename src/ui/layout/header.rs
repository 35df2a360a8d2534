use leptos::prelude::*;

use crate::ui::auth::UserMenu;

/// Top bar of the dashboard
#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="topbar">
            <h2 class="topbar-title">"Panel de Control"</h2>
            <UserMenu />
        </header>
    }
}
