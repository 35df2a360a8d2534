//! Modules that are not built yet, each listing its planned features

use leptos::prelude::*;
use leptos_meta::Title;

use crate::ui::icon::{Icon, icons};

struct PlannedModule {
    title: &'static str,
    subtitle: &'static str,
    icon: &'static str,
    summary: &'static str,
    features: &'static [&'static str],
}

const CONTRATACIONES: PlannedModule = PlannedModule {
    title: "Contrataciones",
    subtitle: "Gestión de contrataciones públicas",
    icon: icons::FILE_TEXT,
    summary: "Esta sección estará disponible próximamente. Aquí podrás gestionar todas las contrataciones del sistema.",
    features: &[
        "Lista de contrataciones activas",
        "Crear nueva contratación",
        "Editar contrataciones existentes",
        "Seguimiento de estados",
        "Reportes y estadísticas",
    ],
};

const USUARIOS: PlannedModule = PlannedModule {
    title: "Usuarios",
    subtitle: "Administración de usuarios del sistema",
    icon: icons::USERS,
    summary: "Esta sección estará disponible próximamente. Aquí podrás administrar todos los usuarios del sistema.",
    features: &[
        "Lista de usuarios registrados",
        "Crear nuevos usuarios",
        "Editar permisos y roles",
        "Gestión de estados (activo/inactivo)",
        "Historial de actividad",
    ],
};

const CONFIGURACION: PlannedModule = PlannedModule {
    title: "Configuración",
    subtitle: "Ajustes y configuración del sistema",
    icon: icons::SETTINGS,
    summary: "Esta sección estará disponible próximamente. Aquí podrás configurar los parámetros del sistema.",
    features: &[
        "Configuración general del sistema",
        "Parámetros de notificaciones",
        "Preferencias de usuario",
        "Configuración de seguridad",
        "Respaldos y mantenimiento",
    ],
};

#[component]
fn PlannedModulePage(module: &'static PlannedModule) -> impl IntoView {
    view! {
        <Title text=format!("{} | UNIVERSITAS", module.title) />
        <div class="page">
            <div class="page-header">
                <h1 class="page-title">{module.title}</h1>
                <p class="page-subtitle">{module.subtitle}</p>
            </div>

            <section class="card planned-card">
                <header class="card-header planned-card-header">
                    <Icon name=module.icon class="w-8 h-8" />
                    <h3 class="card-title">"Módulo en Desarrollo"</h3>
                </header>
                <div class="card-content">
                    <p>{module.summary}</p>
                    <div class="planned-features">
                        <p class="font-medium">"Funcionalidades planificadas:"</p>
                        <ul>
                            {module
                                .features
                                .iter()
                                .map(|feature| view! { <li>{*feature}</li> })
                                .collect_view()}
                        </ul>
                    </div>
                </div>
            </section>
        </div>
    }
}

#[component]
pub fn ContratacionesPage() -> impl IntoView {
    view! { <PlannedModulePage module=&CONTRATACIONES /> }
}

#[component]
pub fn UsuariosPage() -> impl IntoView {
    view! { <PlannedModulePage module=&USUARIOS /> }
}

#[component]
pub fn ConfiguracionPage() -> impl IntoView {
    view! { <PlannedModulePage module=&CONFIGURACION /> }
}
