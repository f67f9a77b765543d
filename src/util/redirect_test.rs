use super::*;

// =============================================================
// Gate target selection (override precedence)
// =============================================================

#[test]
fn gate_target_uses_current_path_by_default() {
    assert_eq!(gate_target(None, "/dashboard"), "/dashboard");
}

#[test]
fn gate_target_override_wins_over_current_location() {
    assert_eq!(
        gate_target(Some("/dashboard"), "/somewhere-else"),
        "/dashboard"
    );
}

#[test]
fn gate_target_ignores_empty_override() {
    assert_eq!(gate_target(Some(""), "/dashboard"), "/dashboard");
}
