use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    components::{ParentRoute, Route, Router, Routes},
    path,
};

use crate::ui::layout::DashboardLayout;
use crate::ui::pages::{
    ConfiguracionPage, ContratacionesPage, DashboardPage, EntePage, HomePage, LoginPage,
    NotFoundPage, SupervisorPage, UsuariosPage,
};
use crate::ui::{NotificationsContainer, provide_auth_context, provide_notifications};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_notifications();
    provide_auth_context();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/universitas-admin.css"/>
        <Title text="UNIVERSITAS - Panel de Administración"/>

        <Router>
            <Routes fallback=NotFoundPage>
                <Route path=path!("/") view=HomePage/>
                <Route path=path!("/login") view=LoginPage/>
                <ParentRoute path=path!("/dashboard") view=DashboardLayout>
                    <Route path=path!("") view=DashboardPage/>
                    <Route path=path!("ente") view=EntePage/>
                    <Route path=path!("supervisor") view=SupervisorPage/>
                    <Route path=path!("contrataciones") view=ContratacionesPage/>
                    <Route path=path!("usuarios") view=UsuariosPage/>
                    <Route path=path!("configuracion") view=ConfiguracionPage/>
                </ParentRoute>
            </Routes>
        </Router>

        <NotificationsContainer/>
    }
}
