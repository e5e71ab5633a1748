//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering
//! details to `components`. Access policy lives in the `AccessGate`
//! wrapper applied at the route table, not in the pages themselves.

pub mod admin;
pub mod dashboard;
pub mod login;
