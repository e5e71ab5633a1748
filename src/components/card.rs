//! Styled container card with an optional title row.

use leptos::prelude::*;

/// A bordered surface for grouping related content.
#[component]
pub fn Card(#[prop(optional)] title: Option<String>, children: Children) -> impl IntoView {
    view! {
        <section class="card">
            {title.map(|title| view! { <h2 class="card__title">{title}</h2> })}
            <div class="card__body">{children()}</div>
        </section>
    }
}
