//! Styled text input bound to a string signal.

use leptos::prelude::*;

/// Labeled single-line input. `input_type` takes any HTML input type
/// (`"text"`, `"email"`, `"password"`, ...).
#[component]
pub fn TextField(
    label: String,
    value: RwSignal<String>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] placeholder: Option<String>,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field__label">{label}</span>
            <input
                class="field__input"
                type=input_type
                placeholder=placeholder.unwrap_or_default()
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}
