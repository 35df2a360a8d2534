use crate::core::validation::ValidationResult;
use crate::ui::icon::{Icon, icons};
use leptos::prelude::*;

/// Value signal and input callback for one field of a form struct
pub fn bind_field<T: Send + Sync + 'static>(
    form: RwSignal<T>,
    get: fn(&T) -> &str,
    set: fn(&mut T, String),
) -> (Signal<String>, Callback<String>) {
    (
        Signal::derive(move || form.with(|f| get(f).to_string())),
        Callback::new(move |value: String| form.update(|f| set(f, value))),
    )
}

/// Error message for `field` in the latest validation run
pub fn field_error(errors: RwSignal<ValidationResult>, field: &'static str) -> Signal<Option<String>> {
    Signal::derive(move || errors.with(|e| e.error_for(field).map(str::to_string)))
}

/// Generic form field component with label and input
#[component]
pub fn FormField(
    /// Field label text
    label: &'static str,
    /// Whether field is required (shows red asterisk)
    #[prop(default = false)]
    required: bool,
    /// Input type (text, password, email, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    #[prop(default = "")] placeholder: &'static str,
    /// Current value signal
    value: Signal<String>,
    /// Input event callback
    on_input: Callback<String>,
    #[prop(optional, into)] disabled: Signal<bool>,
    /// Optional error message to display
    #[prop(optional)]
    error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    view! {
        <div class="field">
            <label class="label">
                {label}
                {required.then(|| view! { <span class="required-mark">"*"</span> })}
            </label>
            <input
                type=input_type
                class="input-base"
                class:input-invalid=move || error.is_some_and(|e| e.get().is_some())
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                disabled=move || disabled.get()
            />
            {move || {
                error.and_then(|e| e.get()).map(|err| view! {
                    <div class="field-error">
                        <Icon name=icons::ALERT_CIRCLE class="icon-text"/>
                        <span>{err}</span>
                    </div>
                })
            }}
        </div>
    }
}

/// Select/dropdown form field component
#[component]
pub fn SelectField(
    label: &'static str,
    /// Empty first option, selected while nothing is chosen
    placeholder: &'static str,
    /// Current value signal
    value: Signal<String>,
    /// Change event callback
    on_change: Callback<String>,
    /// Options, value and display text are the same
    options: &'static [&'static str],
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="field">
            <label class="label">{label}</label>
            <select
                class="select-base"
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
                disabled=move || disabled.get()
            >
                <option value="">{placeholder}</option>
                {options
                    .iter()
                    .map(|option| view! { <option value=*option>{*option}</option> })
                    .collect_view()}
            </select>
        </div>
    }
}

/// Titled card grouping related fields
#[component]
pub fn FormSection(
    title: &'static str,
    #[prop(optional)] description: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <section class="card">
            <header class="card-header">
                <h3 class="card-title">{title}</h3>
                {description.map(|d| view! { <p class="card-description">{d}</p> })}
            </header>
            <div class="card-content">{children()}</div>
        </section>
    }
}
