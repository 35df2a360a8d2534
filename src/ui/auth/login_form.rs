//! Login form component
//!
//! Checks both fields locally, then runs the auth store login. Outcomes are
//! reported as toasts; success navigates to the dashboard.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use super::context::use_auth_context;
use crate::core::routes::DASHBOARD_ROUTE;
use crate::core::validation::is_valid_email;
use crate::ui::common::SubmitButton;
use crate::ui::icon::{Icon, icons};
use crate::ui::notifications::use_notifications;

/// Login form component
#[component]
pub fn LoginForm() -> impl IntoView {
    let auth = use_auth_context();
    let notifications = use_notifications();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let loading = Signal::derive(move || auth.is_loading());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        auth.clear_error();

        let email_val = email.get_untracked();
        let password_val = password.get_untracked();

        if email_val.is_empty() || password_val.is_empty() {
            notifications.error("Campos requeridos", "Por favor complete todos los campos");
            return;
        }
        if !is_valid_email(&email_val) {
            notifications.error("Email inválido", "Por favor ingrese un email válido");
            return;
        }

        let navigate = use_navigate();
        spawn_local(async move {
            match auth.login(email_val, password_val).await {
                Ok(_) => {
                    notifications.success("¡Bienvenido!", "Inicio de sesión exitoso");
                    navigate(DASHBOARD_ROUTE, Default::default());
                }
                Err(err) => {
                    notifications.error("Error de autenticación", err.to_string());
                }
            }
        });
    };

    view! {
        <div class="card login-card">
            <header class="card-header login-header">
                <div class="login-badge">
                    <Icon name=icons::LOCK class="w-8 h-8" />
                </div>
                <h1 class="login-title">"Bienvenido"</h1>
                <p class="card-description">"Sistema de Gestión de Contrataciones Públicas"</p>
            </header>

            <form on:submit=on_submit class="card-content login-form">
                <div class="field">
                    <label for="email" class="label">"Correo Electrónico"</label>
                    <div class="input-with-icon">
                        <Icon name=icons::MAIL class="input-icon" />
                        <input
                            type="email"
                            id="email"
                            name="email"
                            autocomplete="email"
                            placeholder="admin@universitas.gob.ve"
                            class="input-base"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                            disabled=move || loading.get()
                        />
                    </div>
                </div>

                <div class="field">
                    <label for="password" class="label">"Contraseña"</label>
                    <div class="input-with-icon">
                        <Icon name=icons::LOCK class="input-icon" />
                        <input
                            type="password"
                            id="password"
                            name="password"
                            autocomplete="current-password"
                            placeholder="••••••••"
                            class="input-base"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                            disabled=move || loading.get()
                        />
                    </div>
                </div>

                <SubmitButton
                    label="Iniciar Sesión"
                    loading_label="Iniciando sesión..."
                    loading=loading
                    class="btn btn-primary btn-block"
                />
            </form>

            <footer class="login-footer">
                <p>"Solo usuarios con rol UNIVERSITAS pueden acceder"</p>
            </footer>
        </div>
    }
}
