//! Shared wire-protocol DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! These types intentionally mirror server payloads so serde round-trips
//! stay lossless and UI code can remain schema-driven.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Authorization role attached to an authenticated account.
///
/// The wire format is the server's SCREAMING_SNAKE_CASE tag. Values the
/// client does not recognize collapse into [`Role::Unknown`] so access
/// checks can fail closed instead of rejecting the whole payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Residential customer with a single home installation.
    Individual,
    /// Commercial operator managing one or more plant sites.
    Industrial,
    /// Portal administrator.
    Admin,
    /// Any role tag this client build does not recognize.
    #[serde(other)]
    Unknown,
}

impl Role {
    /// Whether this is a role the client recognizes.
    #[must_use]
    pub fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// Short human-readable label for headers and badges.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Individual => "individual",
            Self::Industrial => "industrial",
            Self::Admin => "admin",
            Self::Unknown => "unknown",
        }
    }
}

/// The authenticated account as returned by `/api/auth/me` and login.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Authorization role.
    pub role: Role,
}

/// Aggregated production figures for the viewer's site(s).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SiteSummary {
    /// Display name of the site (or fleet) being summarized.
    pub site_name: String,
    /// Instantaneous output in kilowatts.
    pub current_output_kw: f64,
    /// Output change versus the previous sampling window, in percent.
    pub output_delta_pct: f64,
    /// Generation so far today in kilowatt-hours.
    pub energy_today_kwh: f64,
    /// Daily generation goal in kilowatt-hours.
    pub daily_goal_kwh: f64,
    /// Estimated CO2 avoided today in kilograms.
    pub co2_avoided_kg: f64,
    /// Inverter uptime over the selected range, in percent.
    pub uptime_pct: f64,
}
