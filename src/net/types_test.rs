use super::*;

#[test]
fn role_deserializes_wire_names() {
    assert_eq!(serde_json::from_str::<Role>("\"INDIVIDUAL\"").unwrap(), Role::Individual);
    assert_eq!(serde_json::from_str::<Role>("\"INDUSTRIAL\"").unwrap(), Role::Industrial);
    assert_eq!(serde_json::from_str::<Role>("\"ADMIN\"").unwrap(), Role::Admin);
}

#[test]
fn role_serializes_wire_names() {
    assert_eq!(serde_json::to_string(&Role::Individual).unwrap(), "\"INDIVIDUAL\"");
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"ADMIN\"");
}

#[test]
fn unrecognized_role_collapses_to_unknown() {
    let role = serde_json::from_str::<Role>("\"SUPERUSER\"").unwrap();
    assert_eq!(role, Role::Unknown);
    assert!(!role.is_known());
}

#[test]
fn known_roles_report_known() {
    assert!(Role::Individual.is_known());
    assert!(Role::Industrial.is_known());
    assert!(Role::Admin.is_known());
}

#[test]
fn role_labels_are_lowercase_words() {
    assert_eq!(Role::Individual.label(), "individual");
    assert_eq!(Role::Industrial.label(), "industrial");
    assert_eq!(Role::Admin.label(), "admin");
    assert_eq!(Role::Unknown.label(), "unknown");
}

#[test]
fn user_deserializes_with_role() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": "u-1",
        "name": "Ada",
        "role": "INDUSTRIAL"
    }))
    .unwrap();
    assert_eq!(user.name, "Ada");
    assert_eq!(user.role, Role::Industrial);
}

#[test]
fn user_with_unrecognized_role_still_parses() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": "u-2",
        "name": "Grace",
        "role": "AUDITOR"
    }))
    .unwrap();
    assert_eq!(user.role, Role::Unknown);
}

#[test]
fn site_summary_round_trips() {
    let summary = SiteSummary {
        site_name: "Alpine Ridge".to_owned(),
        current_output_kw: 41.2,
        output_delta_pct: 3.5,
        energy_today_kwh: 182.0,
        daily_goal_kwh: 240.0,
        co2_avoided_kg: 96.4,
        uptime_pct: 99.2,
    };
    let json = serde_json::to_string(&summary).unwrap();
    let back: SiteSummary = serde_json::from_str(&json).unwrap();
    assert_eq!(back, summary);
}
