//! Route access policy: decision function and transition tracking.
//!
//! DESIGN
//! ======
//! `decide` is a pure, total function of the latest auth snapshot and the
//! route's requirement; nothing is cached between renders. Side effects
//! (redirects, toasts) are a separate concern: `GateTracker` compares each
//! observed snapshot against the previous one so a repeated status never
//! re-triggers navigation, while a genuine change (including a role change
//! mid-session) is re-evaluated. The tracker holds no subscription of its
//! own; the owning component's reactive scope drives it and dropping it
//! releases everything.

#[cfg(test)]
#[path = "access_test.rs"]
mod access_test;

use crate::net::types::Role;
use crate::state::auth::AuthStatus;

/// Route for the sign-in screen; unauthenticated visitors land here.
pub const LOGIN_PATH: &str = "/auth/login";

/// Default authenticated landing route; role mismatches bounce here.
pub const HOME_PATH: &str = "/dashboard";

/// Toast shown when an authenticated user lacks the required role.
pub const ACCESS_DENIED_MESSAGE: &str = "Access denied. Insufficient permissions.";

/// Outcome of applying access policy to a status/requirement pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    /// Session still resolving; show a placeholder, take no action.
    Wait,
    /// No session; the visitor belongs on the login screen.
    DenyUnauthenticated,
    /// Signed in, but the route's role requirement is not met.
    DenyWrongRole,
    /// Render the protected content.
    Allow,
}

/// Navigation/notification side effect owed for a denial transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateEffect {
    /// Silently replace the current view with [`LOGIN_PATH`].
    RedirectLogin,
    /// Emit [`ACCESS_DENIED_MESSAGE`] and replace with [`HOME_PATH`].
    WarnRedirectHome,
}

/// Apply access policy to the latest auth snapshot.
///
/// An unrecognized requirement ([`Role::Unknown`]) can never be satisfied:
/// access checks fail closed rather than allowing on a role the client
/// cannot positively confirm.
#[must_use]
pub fn decide(status: &AuthStatus, requirement: Option<&Role>) -> Decision {
    match status {
        AuthStatus::Pending => Decision::Wait,
        AuthStatus::Unauthenticated => Decision::DenyUnauthenticated,
        AuthStatus::Authenticated(user) => match requirement {
            Some(required) if !required.is_known() => Decision::DenyWrongRole,
            Some(required) if user.role != *required => Decision::DenyWrongRole,
            _ => Decision::Allow,
        },
    }
}

/// De-duplicates side effects across repeated status observations.
///
/// Effects fire once per distinct status value observed, not once per
/// render. The last observed snapshot is held explicitly so repeated
/// emissions of an identical status are ignored.
#[derive(Clone, Debug, Default)]
pub struct GateTracker {
    last: Option<AuthStatus>,
}

impl GateTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a status observation and return the side effect it owes.
    ///
    /// Returns `None` when the status is unchanged since the previous
    /// observation, or when the decision for the new status carries no
    /// side effect (`Wait`, `Allow`).
    pub fn observe(&mut self, status: &AuthStatus, requirement: Option<&Role>) -> Option<GateEffect> {
        if self.last.as_ref() == Some(status) {
            return None;
        }
        self.last = Some(status.clone());

        match decide(status, requirement) {
            Decision::DenyUnauthenticated => Some(GateEffect::RedirectLogin),
            Decision::DenyWrongRole => Some(GateEffect::WarnRedirectHome),
            Decision::Wait | Decision::Allow => None,
        }
    }
}
