//! Dashboard statistic card with value, unit, and optional trend delta.

#[cfg(test)]
#[path = "stat_card_test.rs"]
mod stat_card_test;

use leptos::prelude::*;

/// A single labeled statistic for the dashboard grid.
#[component]
pub fn StatCard(
    label: String,
    value: f64,
    #[prop(default = "")] unit: &'static str,
    /// Change versus the previous window, in percent.
    #[prop(optional)]
    delta_pct: Option<f64>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__label">{label}</span>
            <span class="stat-card__value">
                {format_value(value)}
                <span class="stat-card__unit">{unit}</span>
            </span>
            {delta_pct.map(|delta| {
                view! {
                    <span class=format!("stat-card__delta {}", trend_class(delta))>
                        {format_delta(delta)}
                    </span>
                }
            })}
        </div>
    }
}

/// Format a statistic value: whole numbers at three digits and above, one
/// decimal below that.
#[must_use]
pub fn format_value(value: f64) -> String {
    if value.abs() >= 100.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

/// Format a percent delta with an explicit sign, e.g. `+4.2%`.
#[must_use]
pub fn format_delta(delta_pct: f64) -> String {
    format!("{delta_pct:+.1}%")
}

/// BEM modifier for the delta's direction.
#[must_use]
pub fn trend_class(delta_pct: f64) -> &'static str {
    if delta_pct > 0.0 {
        "stat-card__delta--up"
    } else if delta_pct < 0.0 {
        "stat-card__delta--down"
    } else {
        "stat-card__delta--flat"
    }
}
