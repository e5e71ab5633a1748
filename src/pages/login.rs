//! Login page with email + password sign-in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::components::text_input::TextField;
use crate::state::auth::AuthStatus;
#[cfg(feature = "hydrate")]
use crate::util::access::HOME_PATH;

#[component]
pub fn LoginPage() -> impl IntoView {
    let status = expect_context::<RwSignal<AuthStatus>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        if let Err(message) = validate_credentials(&email_value, &password_value) {
            info.set(message.to_owned());
            return;
        }
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&email_value, &password_value).await {
                Ok(user) => {
                    status.set(AuthStatus::Authenticated(user));
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href(HOME_PATH);
                    }
                }
                Err(e) => {
                    info.set(format!("Sign in failed: {e}"));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (email_value, password_value, status);
    };

    view! {
        <div class="login-page">
            <div class="login-card card">
                <h1>"Voltboard"</h1>
                <p class="login-card__subtitle">"Sign in to your account"</p>
                <form class="login-form" on:submit=on_submit>
                    <TextField
                        label="Email".to_owned()
                        value=email
                        input_type="email"
                        placeholder="you@example.com".to_owned()
                    />
                    <TextField label="Password".to_owned() value=password input_type="password"/>
                    <button class="btn btn--primary login-button" type="submit" disabled=move || busy.get()>
                        "Sign in"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}

/// Local pre-flight check so obviously malformed submissions never leave
/// the browser.
pub(crate) fn validate_credentials(email: &str, password: &str) -> Result<(), &'static str> {
    if email.is_empty() || !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password.is_empty() {
        return Err("Enter your password.");
    }
    Ok(())
}
