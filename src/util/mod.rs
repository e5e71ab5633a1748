//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate policy and math from page and component
//! rendering to improve reuse and testability.

pub mod access;
