//! Login page component

use leptos::prelude::*;
use leptos_meta::Title;

use crate::ui::auth::LoginForm;

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <Title text="Iniciar Sesión | UNIVERSITAS" />
        <main class="login-page">
            <div class="login-container">
                <LoginForm />
            </div>
        </main>
    }
}
