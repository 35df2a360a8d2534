//! Inline message components

use crate::ui::{Icon, icons};
use leptos::prelude::*;

/// Alert line shown while `error` holds a message
#[component]
pub fn ErrorMessage(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    move || {
        error.get().map(|message| {
            view! {
                <div class="error-message" role="alert">
                    <Icon name=icons::ALERT_CIRCLE class="icon-text"/>
                    <span>{message}</span>
                </div>
            }
        })
    }
}

/// Muted one-line notice, used for empty lists
#[component]
pub fn EmptyMessage(text: &'static str) -> impl IntoView {
    view! { <p class="text-muted empty-message">{text}</p> }
}
