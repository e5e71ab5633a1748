//! Dashboard page showing production stats for the signed-in account.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It refetches the site summary
//! whenever the selected range changes and fires a one-shot confetti burst
//! the first time a refresh shows the daily generation goal crossed.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::confetti::ConfettiBurst;
use crate::components::select::SelectField;
use crate::components::stat_card::StatCard;
use crate::net::types::{Role, SiteSummary};
use crate::state::auth::AuthStatus;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let status = expect_context::<RwSignal<AuthStatus>>();
    let range = RwSignal::new("today".to_owned());
    let summary = RwSignal::new(None::<SiteSummary>);
    let celebrate_seed = RwSignal::new(None::<u64>);

    // Refetch whenever the selected range changes.
    Effect::new(move || {
        let range_value = range.get();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_site_summary(&range_value).await {
                Some(next) => {
                    let prev = summary.get_untracked();
                    if should_celebrate(prev.as_ref(), &next) {
                        celebrate_seed.set(Some(celebration_seed()));
                    }
                    summary.set(Some(next));
                }
                None => {
                    log::warn!("site summary fetch failed for range {range_value}");
                    summary.set(None);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = range_value;
    });

    // A burst clears itself after its fixed lifetime.
    Effect::new(move || {
        if celebrate_seed.get().is_none() {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(
                crate::components::confetti::BURST_DURATION_MS,
            ))
            .await;
            celebrate_seed.set(None);
        });
    });

    let self_identity = move || {
        status
            .get()
            .into_user()
            .map(|user| (user.name, user.role.label()))
            .unwrap_or_else(|| ("me".to_owned(), Role::Individual.label()))
    };

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::net::api::logout().await;
            // The access gate observes the transition and handles the
            // redirect to the login route.
            status.set(AuthStatus::Unauthenticated);
        });
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header toolbar">
                <span class="toolbar__title">"Voltboard"</span>
                <span class="toolbar__divider" aria-hidden="true"></span>
                <SelectField
                    label="Range".to_owned()
                    options=vec![
                        ("today".to_owned(), "Today".to_owned()),
                        ("week".to_owned(), "This week".to_owned()),
                        ("month".to_owned(), "This month".to_owned()),
                    ]
                    value=range
                />

                <span class="toolbar__spacer"></span>

                <span class="toolbar__self">
                    {move || self_identity().0}
                    " ("
                    <span class="toolbar__self-role">{move || self_identity().1}</span>
                    ")"
                </span>

                <button class="btn toolbar__logout" on:click=on_logout title="Log out">
                    "Log out"
                </button>
            </header>

            <div class="dashboard-page__grid">
                <Show
                    when=move || summary.get().is_some()
                    fallback=move || view! { <p class="dashboard-page__loading">"Loading site summary..."</p> }
                >
                    {move || {
                        summary
                            .get()
                            .map(|s| {
                                view! {
                                    <h1 class="dashboard-page__site">{s.site_name.clone()}</h1>
                                    <div class="dashboard-page__cards">
                                        <StatCard
                                            label="Current output".to_owned()
                                            value=s.current_output_kw
                                            unit="kW"
                                            delta_pct=s.output_delta_pct
                                        />
                                        <StatCard
                                            label="Energy today".to_owned()
                                            value=s.energy_today_kwh
                                            unit="kWh"
                                        />
                                        <StatCard
                                            label="Goal progress".to_owned()
                                            value=goal_progress(&s)
                                            unit="%"
                                        />
                                        <StatCard
                                            label="CO2 avoided".to_owned()
                                            value=s.co2_avoided_kg
                                            unit="kg"
                                        />
                                        <StatCard label="Uptime".to_owned() value=s.uptime_pct unit="%"/>
                                    </div>
                                }
                            })
                    }}
                </Show>
            </div>

            <Show when=move || celebrate_seed.get().is_some()>
                <ConfettiBurst seed=celebrate_seed.get().unwrap_or_default()/>
            </Show>
        </div>
    }
}

/// Percent of the daily goal achieved, clamped to `0..=100`.
#[must_use]
pub fn goal_progress(summary: &SiteSummary) -> f64 {
    if summary.daily_goal_kwh <= 0.0 {
        return 0.0;
    }
    (summary.energy_today_kwh / summary.daily_goal_kwh * 100.0).clamp(0.0, 100.0)
}

/// Whether this refresh is the moment the daily goal was first crossed.
/// Sites without a goal never celebrate, and neither does the initial
/// load of an already-met goal.
#[must_use]
pub fn should_celebrate(prev: Option<&SiteSummary>, next: &SiteSummary) -> bool {
    if next.daily_goal_kwh <= 0.0 || next.energy_today_kwh < next.daily_goal_kwh {
        return false;
    }
    prev.is_some_and(|p| p.daily_goal_kwh > 0.0 && p.energy_today_kwh < p.daily_goal_kwh)
}

#[cfg(feature = "hydrate")]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn celebration_seed() -> u64 {
    js_sys::Date::now() as u64
}
