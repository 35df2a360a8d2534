//! User menu component
//!
//! Avatar button in the dashboard header with a dropdown showing the
//! signed-in user and the logout action.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use super::context::use_auth_context;
use crate::core::auth::user::initials;
use crate::core::routes::LOGIN_ROUTE;
use crate::ui::icon::{Icon, icons};

/// User menu component for the header
#[component]
pub fn UserMenu() -> impl IntoView {
    let auth = use_auth_context();
    let menu_open = RwSignal::new(false);

    let handle_logout = move |_| {
        menu_open.set(false);
        let navigate = use_navigate();
        spawn_local(async move {
            auth.logout().await;
            navigate(LOGIN_ROUTE, Default::default());
        });
    };

    view! {
        {move || {
            auth.user().map(|user| {
                let name = user.full_name();
                let avatar = initials(&name);
                let menu_name = name.clone();
                let role = user.rol;
                let email = user.email;

                view! {
                    <div class="user-menu">
                        <button
                            type="button"
                            class="user-menu-trigger"
                            on:click=move |_| menu_open.update(|v| *v = !*v)
                        >
                            <div class="user-menu-identity">
                                <p class="user-menu-name">{name}</p>
                                <p class="user-menu-email">{email}</p>
                            </div>
                            <span class="avatar">{avatar}</span>
                        </button>

                        <Show when=move || menu_open.get()>
                            <div class="dropdown">
                                <p class="dropdown-label">"Mi Cuenta"</p>
                                <hr class="dropdown-separator" />
                                <div class="dropdown-info">
                                    <p>
                                        <Icon name=icons::USER class="w-4 h-4" />
                                        <span>{menu_name.clone()}</span>
                                    </p>
                                    <p>
                                        <Icon name=icons::SHIELD class="w-4 h-4" />
                                        <span class="font-medium">{role.clone()}</span>
                                    </p>
                                </div>
                                <hr class="dropdown-separator" />
                                <button
                                    type="button"
                                    class="dropdown-item dropdown-item-danger"
                                    on:click=handle_logout
                                >
                                    <Icon name=icons::LOG_OUT class="w-4 h-4" />
                                    "Cerrar Sesión"
                                </button>
                            </div>
                        </Show>
                    </div>
                }
            })
        }}
    }
}
