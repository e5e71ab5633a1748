//! Role-aware route guard wrapping protected page content.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route mounts its page inside `AccessGate`. The gate
//! reads the shared `AuthStatus` signal, recomputes the access decision on
//! each change, and owes at most one navigation/notification per distinct
//! status observed. What to display is recomputed on every render from the
//! latest snapshot alone; it never waits for a pending redirect to land,
//! and protected children are never rendered while the session is still
//! resolving.

#[cfg(test)]
#[path = "access_gate_test.rs"]
mod access_gate_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::Role;
use crate::state::auth::AuthStatus;
use crate::state::toast::ToastState;
use crate::util::access::{
    ACCESS_DENIED_MESSAGE, Decision, GateEffect, GateTracker, HOME_PATH, LOGIN_PATH, decide,
};

pub(crate) const CHECKING_COPY: &str = "Checking access...";
pub(crate) const REDIRECTING_COPY: &str = "Redirecting to sign in...";
pub(crate) const DENIED_COPY: &str = "You do not have access to this page.";

/// Placeholder text for each non-`Allow` decision; `None` means the
/// protected children render instead. Total over all decisions, so the
/// render path cannot fall through.
#[must_use]
pub fn placeholder_copy(decision: Decision) -> Option<&'static str> {
    match decision {
        Decision::Wait => Some(CHECKING_COPY),
        Decision::DenyUnauthenticated => Some(REDIRECTING_COPY),
        Decision::DenyWrongRole => Some(DENIED_COPY),
        Decision::Allow => None,
    }
}

/// Guard protected content behind the current auth status.
///
/// Without a `requirement`, any authenticated user passes. With one, the
/// user's role must equal it. Unauthenticated visitors are redirected to
/// the login route silently; role mismatches get a warning toast and land
/// on the default dashboard.
#[component]
pub fn AccessGate(
    /// Role the viewer must hold, if the route is role-restricted.
    #[prop(optional)]
    requirement: Option<Role>,
    children: ChildrenFn,
) -> impl IntoView {
    let status = expect_context::<RwSignal<AuthStatus>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    let tracker = RwSignal::new(GateTracker::new());

    // Side effects fire on status transitions only; the tracker swallows
    // repeated observations of an identical snapshot. The effect is owned
    // by this component's scope and disposed on unmount, so nothing runs
    // after teardown.
    Effect::new(move || {
        let current = status.get();
        let effect = tracker
            .try_update(|t| t.observe(&current, requirement.as_ref()))
            .flatten();
        match effect {
            Some(GateEffect::RedirectLogin) => {
                navigate(LOGIN_PATH, replace_options());
            }
            Some(GateEffect::WarnRedirectHome) => {
                toasts.update(|t| {
                    t.warn(ACCESS_DENIED_MESSAGE);
                });
                navigate(HOME_PATH, replace_options());
            }
            None => {}
        }
    });

    move || match decide(&status.get(), requirement.as_ref()) {
        Decision::Allow => children().into_any(),
        decision => {
            let copy = placeholder_copy(decision).unwrap_or_default();
            let waiting = decision == Decision::Wait;
            view! {
                <div class="access-gate" class:access-gate--wait=waiting>
                    <p class="access-gate__message">{copy}</p>
                </div>
            }
            .into_any()
        }
    }
}

fn replace_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..Default::default() }
}
