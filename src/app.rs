//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::access_gate::AccessGate;
use crate::components::toast_tray::ToastTray;
use crate::net::types::Role;
use crate::pages::{admin::AdminPage, dashboard::DashboardPage, login::LoginPage};
use crate::state::{auth::AuthStatus, toast::ToastState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the auth status and toast queue as context signals, resolves the
/// persisted session once in the browser, and sets up client-side routing.
/// The status signal starts `Pending` and is the single source the access
/// gate observes; a failed session probe settles to `Unauthenticated` so
/// access checks fail closed.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let status = RwSignal::new(AuthStatus::Pending);
    let toasts = RwSignal::new(ToastState::default());

    provide_context(status);
    provide_context(toasts);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_current_user().await {
            Some(user) => status.set(AuthStatus::Authenticated(user)),
            None => status.set(AuthStatus::Unauthenticated),
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/voltboard.css"/>
        <Title text="Voltboard"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=|| view! { <Redirect path="/dashboard"/> }/>
                <Route path=(StaticSegment("auth"), StaticSegment("login")) view=LoginPage/>
                <Route
                    path=StaticSegment("dashboard")
                    view=|| {
                        view! {
                            <AccessGate>
                                <DashboardPage/>
                            </AccessGate>
                        }
                    }
                />
                <Route
                    path=StaticSegment("admin")
                    view=|| {
                        view! {
                            <AccessGate requirement=Role::Admin>
                                <AdminPage/>
                            </AccessGate>
                        }
                    }
                />
            </Routes>
        </Router>
        <ToastTray/>
    }
}
