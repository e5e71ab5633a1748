//! Shared reactive state provided via Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app root owns one `RwSignal` per state module; pages and components
//! read the latest snapshot and never keep copies of their own.

pub mod auth;
pub mod toast;
