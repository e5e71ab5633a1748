//! Admin-only site administration page.
//!
//! Reached through the `Admin`-restricted route; non-admins are bounced by
//! the access gate before this component ever mounts.

use leptos::prelude::*;

use crate::components::card::Card;
use crate::components::select::SelectField;
use crate::components::text_input::TextField;
use crate::state::toast::ToastState;

#[component]
pub fn AdminPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let site_name = RwSignal::new(String::new());
    let alert_email = RwSignal::new(String::new());
    let export_format = RwSignal::new("csv".to_owned());

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let name_value = site_name.get().trim().to_owned();
        let email_value = alert_email.get().trim().to_owned();
        let format_value = export_format.get();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::save_site_settings(&name_value, &email_value, &format_value).await {
                Ok(()) => toasts.update(|t| {
                    t.info("Settings saved.");
                }),
                Err(e) => toasts.update(|t| {
                    t.warn(format!("Save failed: {e}"));
                }),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (name_value, email_value, format_value, toasts);
    };

    view! {
        <div class="admin-page">
            <h1>"Site administration"</h1>
            <Card title="Reporting".to_owned()>
                <form class="admin-form" on:submit=on_save>
                    <TextField
                        label="Site name".to_owned()
                        value=site_name
                        placeholder="Alpine Ridge".to_owned()
                    />
                    <TextField label="Alert email".to_owned() value=alert_email input_type="email"/>
                    <SelectField
                        label="Export format".to_owned()
                        options=vec![
                            ("csv".to_owned(), "CSV".to_owned()),
                            ("json".to_owned(), "JSON".to_owned()),
                            ("pdf".to_owned(), "PDF report".to_owned()),
                        ]
                        value=export_format
                    />
                    <button class="btn btn--primary" type="submit">
                        "Save settings"
                    </button>
                </form>
            </Card>
        </div>
    }
}
