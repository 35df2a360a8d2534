//! Dashboard home with summary cards

use leptos::prelude::*;
use leptos_meta::Title;

use crate::ui::icon::{Icon, icons};

struct StatCard {
    title: &'static str,
    value: &'static str,
    note: &'static str,
    icon: &'static str,
    tone: &'static str,
}

const STATS: &[StatCard] = &[
    StatCard {
        title: "Total Contrataciones",
        value: "125",
        note: "+12% desde el mes pasado",
        icon: icons::FILE_TEXT,
        tone: "tone-purple",
    },
    StatCard {
        title: "Usuarios Activos",
        value: "48",
        note: "+3 nuevos esta semana",
        icon: icons::USERS,
        tone: "tone-blue",
    },
    StatCard {
        title: "Aprobadas",
        value: "98",
        note: "78% del total",
        icon: icons::CHECK_CIRCLE,
        tone: "tone-green",
    },
    StatCard {
        title: "En Proceso",
        value: "27",
        note: "Requieren revisión",
        icon: icons::CLOCK,
        tone: "tone-orange",
    },
];

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <Title text="Dashboard | UNIVERSITAS" />
        <div class="page">
            <div class="page-header">
                <h1 class="page-title">"Dashboard"</h1>
                <p class="page-subtitle">
                    "Bienvenido al sistema de gestión de contrataciones públicas"
                </p>
            </div>

            <div class="stat-grid">
                {STATS
                    .iter()
                    .map(|stat| {
                        view! {
                            <section class=format!("card stat-card {}", stat.tone)>
                                <header class="stat-card-header">
                                    <h3 class="stat-card-title">{stat.title}</h3>
                                    <Icon name=stat.icon />
                                </header>
                                <div class="stat-card-value">{stat.value}</div>
                                <p class="stat-card-note">{stat.note}</p>
                            </section>
                        }
                    })
                    .collect_view()}
            </div>

            <section class="card welcome-card">
                <header class="card-header">
                    <h3 class="card-title">"¡Bienvenido al Sistema de Gestión!"</h3>
                </header>
                <div class="card-content">
                    <p>
                        "Este es el panel de control del sistema de gestión de contrataciones públicas. Desde aquí puedes administrar todas las operaciones del sistema."
                    </p>
                    <div class="welcome-badges">
                        <div class="welcome-badge">
                            <Icon name=icons::TRENDING_UP />
                            <div>
                                <p class="font-medium">"Acceso Completo"</p>
                                <p class="welcome-badge-note">"Rol: UNIVERSITAS"</p>
                            </div>
                        </div>
                        <div class="welcome-badge">
                            <Icon name=icons::SHIELD />
                            <div>
                                <p class="font-medium">"Sistema Seguro"</p>
                                <p class="welcome-badge-note">"Protegido por Proxy"</p>
                            </div>
                        </div>
                    </div>
                </div>
            </section>
        </div>
    }
}
