use leptos::prelude::*;
use leptos_meta::Title;

use crate::ui::forms::CreateEnteForm;

#[component]
pub fn EntePage() -> impl IntoView {
    view! {
        <Title text="Crear Ente | UNIVERSITAS" />
        <div class="page">
            <div class="page-header">
                <h1 class="page-title">"Crear Ente"</h1>
                <p class="page-subtitle">
                    "Registra un nuevo Ente Público con su usuario administrador asociado"
                </p>
            </div>
            <CreateEnteForm />
        </div>
    }
}
