//! Side panel listing Entes that have no Supervisor yet
//!
//! The list is fetched every time the panel opens. Entes already selected
//! at that moment are left out; the rest toggle between Agregar and Quitar.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::core::models::EnteSinSupervisor;
use crate::core::selection::{EnteSelection, or_not_specified};
use crate::core::services::Operation;
use crate::ui::auth::use_auth_context;
use crate::ui::common::{EmptyMessage, Spinner, SpinnerSize};
use crate::ui::icon::{Icon, icons};
use crate::ui::notifications::use_notifications;
use crate::ui::services::{entes_sin_supervisor, report_error};

#[component]
pub fn SelectEntesPanel(
    open: RwSignal<bool>,
    selection: RwSignal<EnteSelection>,
) -> impl IntoView {
    let auth = use_auth_context();
    let notifications = use_notifications();

    let candidates = RwSignal::new(Vec::<EnteSinSupervisor>::new());
    let loading = RwSignal::new(false);

    Effect::new(move |_| {
        if !open.get() {
            return;
        }

        loading.set(true);
        spawn_local(async move {
            match entes_sin_supervisor().await {
                Ok(entes) => {
                    let available = selection.with_untracked(|s| {
                        s.available(&entes).into_iter().cloned().collect::<Vec<_>>()
                    });
                    candidates.set(available);
                }
                Err(err) => {
                    candidates.set(Vec::new());
                    report_error(auth, notifications, Operation::ListEntesSinSupervisor, &err);
                }
            }
            loading.set(false);
        });
    });

    view! {
        <Show when=move || open.get()>
            <div class="sheet-backdrop" on:click=move |_| open.set(false)></div>
            <aside class="sheet" role="dialog" aria-modal="true">
                <header class="sheet-header">
                    <div>
                        <h3 class="sheet-title">"Entes disponibles"</h3>
                        <p class="card-description">
                            "Selecciona los Entes para asignar a este Supervisor"
                        </p>
                    </div>
                    <button type="button" class="btn btn-ghost btn-sm" on:click=move |_| open.set(false)>
                        <Icon name=icons::X class="w-4 h-4" />
                    </button>
                </header>

                <div class="sheet-body">
                    {move || {
                        if loading.get() {
                            view! { <Spinner size=SpinnerSize::Large centered=true /> }.into_any()
                        } else if candidates.with(Vec::is_empty) {
                            view! { <EmptyMessage text="No hay Entes disponibles para asignar" /> }
                                .into_any()
                        } else {
                            candidates
                                .get()
                                .into_iter()
                                .map(|ente| view! { <EnteCandidate ente=ente selection=selection /> })
                                .collect_view()
                                .into_any()
                        }
                    }}
                </div>
            </aside>
        </Show>
    }
}

#[component]
fn EnteCandidate(ente: EnteSinSupervisor, selection: RwSignal<EnteSelection>) -> impl IntoView {
    let id = ente.id.clone();
    let is_selected = move || selection.with(|s| s.contains(&id));

    let detail = |label: &'static str, value: Option<String>| {
        let missing = value.as_deref().is_none_or(|v| v.trim().is_empty());
        let text = or_not_specified(value.as_deref()).to_string();
        view! {
            <p class:text-muted=missing>
                <span class="font-medium">{label}":"</span>" "{text}
            </p>
        }
    };

    let add = {
        let ente = ente.clone();
        move |_| {
            selection.update(|s| {
                s.add(ente.clone());
            })
        }
    };
    let remove = {
        let id = ente.id.clone();
        move |_| {
            selection.update(|s| {
                s.remove(&id);
            })
        }
    };

    view! {
        <article class="card ente-candidate">
            <h4 class="ente-candidate-name">{ente.nombre.clone()}</h4>
            <div class="ente-candidate-details">
                {detail("RIF", ente.rif.clone())}
                {detail("Estado", ente.estado.clone())}
                {detail("Municipio", ente.municipio.clone())}
            </div>
            <div class="ente-candidate-actions">
                <Show
                    when=is_selected
                    fallback=move || {
                        let add = add.clone();
                        view! {
                            <button type="button" class="btn btn-primary btn-sm" on:click=add>
                                "Agregar"
                            </button>
                        }
                    }
                >
                    <button type="button" class="btn btn-outline btn-sm" on:click=remove.clone()>
                        "Quitar"
                    </button>
                </Show>
            </div>
        </article>
    }
}
