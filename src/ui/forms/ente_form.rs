//! Ente creation form
//!
//! Two sections: the Ente itself and its administrator. Fields are checked
//! with the shared validators before anything is sent.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::models::CreateEnteRequest;
use crate::core::services::Operation;
use crate::core::validation::{ValidationResult, validate_ente};
use crate::ui::auth::use_auth_context;
use crate::ui::common::form::{bind_field, field_error};
use crate::ui::common::{FormField, FormSection, SelectField, SubmitButton};
use crate::ui::notifications::use_notifications;
use crate::ui::services::{create_ente, report_error};

const ESTADOS: &[&str] = &["Distrito Capital", "Miranda"];
const MUNICIPIOS: &[&str] = &["Libertador", "Chacao"];
const PARROQUIAS: &[&str] = &["Catedral", "San Juan"];

fn optional(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or_default()
}

#[component]
pub fn CreateEnteForm() -> impl IntoView {
    let auth = use_auth_context();
    let notifications = use_notifications();

    let form = RwSignal::new(CreateEnteRequest::default());
    let errors = RwSignal::new(ValidationResult::new());
    let submitting = RwSignal::new(false);

    let (nombre, set_nombre) = bind_field(form, |f| f.nombre.as_str(), |f, v| f.nombre = v);
    let (nombre_admin, set_nombre_admin) =
        bind_field(form, |f| f.nombre_admin.as_str(), |f, v| f.nombre_admin = v);
    let (apellido_admin, set_apellido_admin) =
        bind_field(form, |f| f.apellido_admin.as_str(), |f, v| f.apellido_admin = v);
    let (email, set_email) = bind_field(form, |f| f.email_contacto.as_str(), |f, v| f.email_contacto = v);
    let (password, set_password) = bind_field(form, |f| f.password.as_str(), |f, v| f.password = v);
    let (rif, set_rif) = bind_field(form, |f| optional(&f.rif), |f, v| f.rif = Some(v));
    let (siglas, set_siglas) = bind_field(form, |f| optional(&f.siglas), |f, v| f.siglas = Some(v));
    let (direccion, set_direccion) = bind_field(
        form,
        |f| optional(&f.direccion_fiscal),
        |f, v| f.direccion_fiscal = Some(v),
    );
    let (estado, set_estado) = bind_field(form, |f| optional(&f.estado), |f, v| f.estado = Some(v));
    let (municipio, set_municipio) =
        bind_field(form, |f| optional(&f.municipio), |f, v| f.municipio = Some(v));
    let (parroquia, set_parroquia) =
        bind_field(form, |f| optional(&f.parroquia), |f, v| f.parroquia = Some(v));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }

        let request = form.get_untracked().normalized();
        let result = validate_ente(&request);
        let valid = result.is_valid();
        errors.set(result);
        if !valid {
            return;
        }

        submitting.set(true);
        spawn_local(async move {
            match create_ente(&request).await {
                Ok(response) => {
                    notifications.success("¡Éxito!", response.message);
                    form.set(CreateEnteRequest::default());
                }
                Err(err) => report_error(auth, notifications, Operation::CreateEnte, &err),
            }
            submitting.set(false);
        });
    };

    let disabled = Signal::derive(move || submitting.get());

    view! {
        <form on:submit=on_submit class="form-stack" novalidate=true>
            <FormSection
                title="Información del Ente"
                description="Datos generales del Ente Público a registrar"
            >
                <FormField
                    label="Nombre del Ente"
                    required=true
                    placeholder="Ej: Alcaldía del Municipio Libertador"
                    value=nombre
                    on_input=set_nombre
                    disabled=disabled
                    error=field_error(errors, "nombre")
                />
            </FormSection>

            <FormSection
                title="Información del Admin Ente"
                description="Datos del usuario administrador del Ente"
            >
                <div class="form-grid">
                    <FormField
                        label="Nombre del Administrador"
                        required=true
                        placeholder="Ej: Juan"
                        value=nombre_admin
                        on_input=set_nombre_admin
                        disabled=disabled
                        error=field_error(errors, "nombreAdmin")
                    />
                    <FormField
                        label="Apellido del Administrador"
                        required=true
                        placeholder="Ej: Pérez"
                        value=apellido_admin
                        on_input=set_apellido_admin
                        disabled=disabled
                        error=field_error(errors, "apellidoAdmin")
                    />
                    <FormField
                        label="Email de Contacto"
                        required=true
                        input_type="email"
                        placeholder="Ej: admin@alcaldia.gov.ve"
                        value=email
                        on_input=set_email
                        disabled=disabled
                        error=field_error(errors, "emailContacto")
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
                    <FormField
                        label="RIF"
                        placeholder="Ej: J-20000000-0"
                        value=rif
                        on_input=set_rif
                        disabled=disabled
                    />
                    <FormField
                        label="Siglas"
                        placeholder="Ej: AML"
                        value=siglas
                        on_input=set_siglas
                        disabled=disabled
                    />
                    <FormField
                        label="Dirección Fiscal"
                        placeholder="Ej: Av. Urdaneta, Palacio Municipal"
                        value=direccion
                        on_input=set_direccion
                        disabled=disabled
                    />
                    <SelectField
                        label="Estado"
                        placeholder="Seleccione un estado"
                        value=estado
                        on_change=set_estado
                        options=ESTADOS
                        disabled=disabled
                    />
                    <SelectField
                        label="Municipio"
                        placeholder="Seleccione un municipio"
                        value=municipio
                        on_change=set_municipio
                        options=MUNICIPIOS
                        disabled=disabled
                    />
                    <SelectField
                        label="Parroquia"
                        placeholder="Seleccione una parroquia"
                        value=parroquia
                        on_change=set_parroquia
                        options=PARROQUIAS
                        disabled=disabled
                    />
                </div>
            </FormSection>

            <div class="form-actions">
                <SubmitButton label="Crear Ente" loading_label="Creando..." loading=disabled />
            </div>
        </form>
    }
}
