use super::*;

fn summary(energy_today_kwh: f64, daily_goal_kwh: f64) -> SiteSummary {
    SiteSummary {
        site_name: "Alpine Ridge".to_owned(),
        current_output_kw: 41.2,
        output_delta_pct: 0.0,
        energy_today_kwh,
        daily_goal_kwh,
        co2_avoided_kg: 96.4,
        uptime_pct: 99.2,
    }
}

#[test]
fn goal_progress_is_a_percentage() {
    assert!((goal_progress(&summary(120.0, 240.0)) - 50.0).abs() < f64::EPSILON);
    assert!((goal_progress(&summary(240.0, 240.0)) - 100.0).abs() < f64::EPSILON);
}

#[test]
fn goal_progress_clamps_overshoot() {
    assert!((goal_progress(&summary(300.0, 240.0)) - 100.0).abs() < f64::EPSILON);
}

#[test]
fn goal_progress_is_zero_without_a_goal() {
    assert!((goal_progress(&summary(120.0, 0.0))).abs() < f64::EPSILON);
}

#[test]
fn celebrates_only_when_goal_is_first_crossed() {
    let below = summary(200.0, 240.0);
    let at_goal = summary(240.0, 240.0);
    let above = summary(260.0, 240.0);

    assert!(should_celebrate(Some(&below), &at_goal));
    assert!(should_celebrate(Some(&below), &above));

    // Already celebrated: the previous refresh had met the goal.
    assert!(!should_celebrate(Some(&at_goal), &above));
    // Still short of the goal.
    assert!(!should_celebrate(Some(&below), &summary(239.0, 240.0)));
}

#[test]
fn initial_load_never_celebrates() {
    assert!(!should_celebrate(None, &summary(300.0, 240.0)));
}

#[test]
fn sites_without_a_goal_never_celebrate() {
    assert!(!should_celebrate(Some(&summary(0.0, 0.0)), &summary(100.0, 0.0)));
    // Previous snapshot had no goal configured either.
    assert!(!should_celebrate(Some(&summary(100.0, 0.0)), &summary(240.0, 240.0)));
}
