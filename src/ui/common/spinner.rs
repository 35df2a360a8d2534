use leptos::prelude::*;

use crate::ui::icon::{Icon, icons};

/// Spinner size options
#[derive(Clone, Copy, PartialEq)]
pub enum SpinnerSize {
    Small,
    Medium,
    Large,
}

impl SpinnerSize {
    fn class(&self) -> &'static str {
        match self {
            SpinnerSize::Small => "spinner spinner-sm",
            SpinnerSize::Medium => "spinner spinner-md",
            SpinnerSize::Large => "spinner spinner-lg",
        }
    }
}

/// Loading spinner component
#[component]
pub fn Spinner(
    #[prop(default = SpinnerSize::Medium)] size: SpinnerSize,
    /// Whether to center the spinner in its container
    #[prop(default = false)]
    centered: bool,
) -> impl IntoView {
    let container_class = if centered {
        "spinner-container spinner-centered"
    } else {
        "spinner-container"
    };

    view! {
        <div class=container_class role="status" aria-live="polite">
            <Icon name=icons::LOADER class=size.class() />
            <span class="sr-only">"Cargando..."</span>
        </div>
    }
}

/// Submit button that swaps its label and disables itself while `loading`
#[component]
pub fn SubmitButton(
    /// Label shown at rest
    label: &'static str,
    /// Label shown while loading
    loading_label: &'static str,
    #[prop(into)] loading: Signal<bool>,
    #[prop(default = "btn btn-primary")] class: &'static str,
) -> impl IntoView {
    view! {
        <button type="submit" class=class disabled=move || loading.get()>
            {move || {
                if loading.get() {
                    view! {
                        <span class="btn-content">
                            <Icon name=icons::LOADER class="spinner spinner-sm" />
                            {loading_label}
                        </span>
                    }
                        .into_any()
                } else {
                    view! { <span class="btn-content">{label}</span> }.into_any()
                }
            }}
        </button>
    }
}
