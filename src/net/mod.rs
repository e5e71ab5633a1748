//! Networking modules for the HTTP API boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls against the portal backend and `types` defines
//! the shared wire schema those calls deserialize into.

pub mod api;
pub mod types;
