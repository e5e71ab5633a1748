//! Transient user-facing notification state.
//!
//! The access gate and pages push messages here; `ToastTray` renders and
//! dismisses them. Emission is fire-and-forget for callers.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Severity of a toast message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Warn,
}

impl ToastLevel {
    /// BEM modifier suffix used by `ToastTray`.
    #[must_use]
    pub fn class_suffix(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warn => "warn",
        }
    }
}

/// A single transient message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Unique toast identifier (UUID string).
    pub id: String,
    pub level: ToastLevel,
    pub message: String,
}

/// Queue of currently visible toasts, newest last.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
}

impl ToastState {
    /// Push a warning-level message and return its id.
    pub fn warn(&mut self, message: impl Into<String>) -> String {
        self.push(ToastLevel::Warn, message)
    }

    /// Push an info-level message and return its id.
    pub fn info(&mut self, message: impl Into<String>) -> String {
        self.push(ToastLevel::Info, message)
    }

    fn push(&mut self, level: ToastLevel, message: impl Into<String>) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        self.toasts.push(Toast { id: id.clone(), level, message: message.into() });
        id
    }

    /// Remove the toast with the given id, if it is still visible.
    pub fn dismiss(&mut self, id: &str) {
        self.toasts.retain(|toast| toast.id != id);
    }
}
