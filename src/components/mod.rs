//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and form surfaces while reading shared
//! state from Leptos context providers. `access_gate` is the only module
//! here with behavior beyond presentation.

pub mod access_gate;
pub mod card;
pub mod confetti;
pub mod select;
pub mod stat_card;
pub mod text_input;
pub mod toast_tray;
