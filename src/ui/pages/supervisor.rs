use leptos::prelude::*;
use leptos_meta::Title;

use crate::ui::forms::CreateSupervisorForm;

#[component]
pub fn SupervisorPage() -> impl IntoView {
    view! {
        <Title text="Crear Supervisor | UNIVERSITAS" />
        <div class="page">
            <div class="page-header">
                <h1 class="page-title">"Crear Supervisor"</h1>
                <p class="page-subtitle">
                    "Registra un nuevo Supervisor con su organización y asígnale Entes para gestionar"
                </p>
            </div>
            <CreateSupervisorForm />
        </div>
    }
}
