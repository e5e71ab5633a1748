use super::*;

#[test]
fn waiting_shows_checking_placeholder() {
    assert_eq!(placeholder_copy(Decision::Wait), Some(CHECKING_COPY));
}

#[test]
fn unauthenticated_shows_redirect_placeholder() {
    // Content is intentionally withheld while the login redirect is in
    // flight; the placeholder is all that communicates it.
    assert_eq!(placeholder_copy(Decision::DenyUnauthenticated), Some(REDIRECTING_COPY));
}

#[test]
fn wrong_role_shows_denied_placeholder() {
    assert_eq!(placeholder_copy(Decision::DenyWrongRole), Some(DENIED_COPY));
}

#[test]
fn allow_renders_children_instead_of_placeholder() {
    assert_eq!(placeholder_copy(Decision::Allow), None);
}

#[test]
fn placeholder_mapping_is_total() {
    for decision in [
        Decision::Wait,
        Decision::DenyUnauthenticated,
        Decision::DenyWrongRole,
        Decision::Allow,
    ] {
        // Every decision maps to either a placeholder or the children;
        // no decision can escape the render path.
        let _ = placeholder_copy(decision);
    }
}
