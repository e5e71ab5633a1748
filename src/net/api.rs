//! REST API helpers for communicating with the portal backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so auth and
//! summary fetch failures degrade UI behavior without crashing hydration.
//! Session probes in particular treat any transport or decode failure as
//! "no session" so access checks fail closed.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{SiteSummary, User};

#[cfg(any(test, feature = "hydrate"))]
fn site_summary_endpoint(range: &str) -> String {
    format!("/api/sites/summary?range={range}")
}

#[cfg(any(test, feature = "hydrate"))]
fn login_failed_message(status: u16) -> String {
    format!("login failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn settings_failed_message(status: u16) -> String {
    format!("settings save failed: {status}")
}

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated, on any request failure, or on the
/// server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Sign in with email + password via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails, the server responds
/// with a non-OK status, or the response body cannot be decoded.
pub async fn login(email: &str, password: &str) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post("/api/auth/login")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(login_failed_message(resp.status()));
        }
        resp.json::<User>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout")
            .send()
            .await;
    }
}

/// Persist site reporting settings via `POST /api/sites/settings`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server
/// responds with a non-OK status.
pub async fn save_site_settings(
    site_name: &str,
    alert_email: &str,
    export_format: &str,
) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({
            "site_name": site_name,
            "alert_email": alert_email,
            "export_format": export_format,
        });
        let resp = gloo_net::http::Request::post("/api/sites/settings")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(settings_failed_message(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (site_name, alert_email, export_format);
        Err("not available on server".to_owned())
    }
}

/// Fetch aggregated production figures for the viewer's site(s).
/// Returns `None` on any failure or on the server.
pub async fn fetch_site_summary(range: &str) -> Option<SiteSummary> {
    #[cfg(feature = "hydrate")]
    {
        let url = site_summary_endpoint(range);
        let resp = gloo_net::http::Request::get(&url).send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<SiteSummary>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = range;
        None
    }
}
