//! Supervisor creation form
//!
//! Organization, supervising user and the Entes assigned to it. The
//! assignment is optional; selected Entes are sent as `entesIds`.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::SelectEntesPanel;
use crate::core::models::CreateSupervisorRequest;
use crate::core::selection::{EnteSelection, or_not_specified};
use crate::core::services::Operation;
use crate::core::validation::{ValidationResult, validate_supervisor};
use crate::ui::auth::use_auth_context;
use crate::ui::common::form::{bind_field, field_error};
use crate::ui::common::{EmptyMessage, ErrorMessage, FormField, FormSection, SubmitButton};
use crate::ui::icon::{Icon, icons};
use crate::ui::notifications::use_notifications;
use crate::ui::services::{create_supervisor, report_error};

#[component]
pub fn CreateSupervisorForm() -> impl IntoView {
    let auth = use_auth_context();
    let notifications = use_notifications();

    let form = RwSignal::new(CreateSupervisorRequest::default());
    let selection = RwSignal::new(EnteSelection::new());
    let errors = RwSignal::new(ValidationResult::new());
    let submitting = RwSignal::new(false);
    let panel_open = RwSignal::new(false);

    let (organizacion, set_organizacion) = bind_field(
        form,
        |f| f.nombre_organizacion.as_str(),
        |f, v| f.nombre_organizacion = v,
    );
    let (rif, set_rif) = bind_field(
        form,
        |f| f.rif_organizacion.as_str(),
        |f, v| f.rif_organizacion = v,
    );
    let (email_org, set_email_org) = bind_field(
        form,
        |f| f.email_organizacion.as_str(),
        |f, v| f.email_organizacion = v,
    );
    let (nombre, set_nombre) =
        bind_field(form, |f| f.nombre_usuario.as_str(), |f, v| f.nombre_usuario = v);
    let (apellido, set_apellido) = bind_field(
        form,
        |f| f.apellido_usuario.as_str(),
        |f, v| f.apellido_usuario = v,
    );
    let (email, set_email) =
        bind_field(form, |f| f.email_usuario.as_str(), |f, v| f.email_usuario = v);
    let (password, set_password) = bind_field(form, |f| f.password.as_str(), |f, v| f.password = v);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }

        let request = CreateSupervisorRequest {
            entes_ids: selection.with_untracked(EnteSelection::ids),
            ..form.get_untracked()
        };
        let result = validate_supervisor(&request);
        let valid = result.is_valid();
        errors.set(result);
        if !valid {
            return;
        }

        submitting.set(true);
        spawn_local(async move {
            match create_supervisor(&request).await {
                Ok(response) => {
                    notifications.success("¡Éxito!", response.message);
                    form.set(CreateSupervisorRequest::default());
                    selection.update(EnteSelection::clear);
                }
                Err(err) => report_error(auth, notifications, Operation::CreateSupervisor, &err),
            }
            submitting.set(false);
        });
    };

    let disabled = Signal::derive(move || submitting.get());

    view! {
        <form on:submit=on_submit class="form-stack" novalidate=true>
            <FormSection
                title="Información de la Organización"
                description="Datos de la organización del Supervisor"
            >
                <div class="form-grid">
                    <div class="form-grid-wide">
                        <FormField
                            label="Nombre de la Organización"
                            required=true
                            placeholder="Ej: Contraloría Municipal"
                            value=organizacion
                            on_input=set_organizacion
                            disabled=disabled
                            error=field_error(errors, "nombreOrganizacion")
                        />
                    </div>
                    <FormField
                        label="RIF de la Organización"
                        required=true
                        placeholder="Ej: G-20000000-1"
                        value=rif
                        on_input=set_rif
                        disabled=disabled
                        error=field_error(errors, "rifOrganizacion")
                    />
                    <FormField
                        label="Email de la Organización"
                        required=true
                        input_type="email"
                        placeholder="Ej: contacto@contraloria.gob.ve"
                        value=email_org
                        on_input=set_email_org
                        disabled=disabled
                        error=field_error(errors, "emailOrganizacion")
                    />
                </div>
            </FormSection>

            <FormSection
                title="Información del Usuario Supervisor"
                description="Datos del usuario que administrará como Supervisor"
            >
                <div class="form-grid">
                    <FormField
                        label="Nombre del Usuario"
                        required=true
                        placeholder="Ej: Carlos"
                        value=nombre
                        on_input=set_nombre
                        disabled=disabled
                        error=field_error(errors, "nombreUsuario")
                    />
                    <FormField
                        label="Apellido del Usuario"
                        required=true
                        placeholder="Ej: Ramírez"
                        value=apellido
                        on_input=set_apellido
                        disabled=disabled
                        error=field_error(errors, "apellidoUsuario")
                    />
                    <FormField
                        label="Email del Usuario"
                        required=true
                        input_type="email"
                        placeholder="Ej: carlos.ramirez@supervision.gob.ve"
                        value=email
                        on_input=set_email
                        disabled=disabled
                        error=field_error(errors, "emailUsuario")
                    />
                    <FormField
                        label="Contraseña"
                        required=true
                        input_type="password"
                        placeholder="Contraseña temporal"
                        value=password
                        on_input=set_password
                        disabled=disabled
                        error=field_error(errors, "password")
                    />
                </div>
            </FormSection>

            <FormSection
                title="Entes Asignados"
                description="Asigna Entes que este Supervisor gestionará (opcional)"
            >
                <button type="button" class="btn btn-outline" on:click=move |_| panel_open.set(true)>
                    <Icon name=icons::PLUS class="w-4 h-4" />
                    "Agregar Ente(s)"
                </button>

                <SelectEntesPanel open=panel_open selection=selection />

                <ErrorMessage error=field_error(errors, "entesIds") />

                <div class="selected-entes">
                    {move || {
                        let entries = selection.with(|s| s.entries().to_vec());
                        if entries.is_empty() {
                            view! { <EmptyMessage text="No hay Entes asignados" /> }.into_any()
                        } else {
                            entries
                                .into_iter()
                                .map(|ente| {
                                    let id = ente.id.clone();
                                    let rif = or_not_specified(ente.rif.as_deref()).to_string();
                                    view! {
                                        <div class="selected-ente">
                                            <div>
                                                <p>
                                                    <span class="font-medium">"RIF:"</span>" "{rif}
                                                </p>
                                                <p>
                                                    <span class="font-medium">"Nombre:"</span>" "{ente.nombre}
                                                </p>
                                            </div>
                                            <button
                                                type="button"
                                                class="btn btn-ghost btn-sm"
                                                on:click=move |_| {
                                                    selection.update(|s| {
                                                        s.remove(&id);
                                                    })
                                                }
                                            >
                                                <Icon name=icons::X class="w-4 h-4" />
                                            </button>
                                        </div>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }
                    }}
                </div>
            </FormSection>

            <div class="form-actions">
                <SubmitButton label="Crear Supervisor" loading_label="Creando..." loading=disabled />
            </div>
        </form>
    }
}
