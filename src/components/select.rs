//! Styled select control bound to a string signal.

use leptos::prelude::*;

/// Labeled select. `options` is a list of `(value, display text)` pairs;
/// the chosen value is written back to `value`.
#[component]
pub fn SelectField(
    label: String,
    options: Vec<(String, String)>,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <label class="field field--select">
            <span class="field__label">{label}</span>
            <select
                class="field__select"
                prop:value=move || value.get()
                on:change=move |ev| value.set(event_target_value(&ev))
            >
                {options
                    .into_iter()
                    .map(|(option_value, text)| {
                        let selected = {
                            let option_value = option_value.clone();
                            move || value.get() == option_value
                        };
                        view! {
                            <option value=option_value selected=selected>
                                {text}
                            </option>
                        }
                    })
                    .collect::<Vec<_>>()}
            </select>
        </label>
    }
}
