use super::*;

#[test]
fn site_summary_endpoint_includes_range() {
    assert_eq!(site_summary_endpoint("today"), "/api/sites/summary?range=today");
    assert_eq!(site_summary_endpoint("month"), "/api/sites/summary?range=month");
}

#[test]
fn login_failed_message_includes_status() {
    assert_eq!(login_failed_message(401), "login failed: 401");
    assert_eq!(login_failed_message(503), "login failed: 503");
}

#[test]
fn settings_failed_message_includes_status() {
    assert_eq!(settings_failed_message(403), "settings save failed: 403");
}
