//! Auth-session status for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the route guard and identity-aware components. The app root
//! owns the status as an `RwSignal<AuthStatus>` in context and is the only
//! writer outside of login/logout flows; everything else reads snapshots.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Tri-state snapshot of the session: still resolving, absent, or present.
///
/// Starts as [`AuthStatus::Pending`] until the session probe settles, so
/// guarded content is never shown before authentication resolves.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AuthStatus {
    /// The session probe has not settled yet.
    #[default]
    Pending,
    /// No valid session.
    Unauthenticated,
    /// A signed-in account.
    Authenticated(User),
}

impl AuthStatus {
    /// The signed-in account, if any.
    #[must_use]
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated(user) => Some(user),
            Self::Pending | Self::Unauthenticated => None,
        }
    }

    /// Owned variant of [`AuthStatus::user`] for `signal.get()` call sites.
    #[must_use]
    pub fn into_user(self) -> Option<User> {
        match self {
            Self::Authenticated(user) => Some(user),
            Self::Pending | Self::Unauthenticated => None,
        }
    }

    /// Whether the session probe is still outstanding.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}
