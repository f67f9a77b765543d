use super::*;

fn admin(name: &str) -> AdminUser {
    AdminUser {
        id: 1,
        username: name.to_owned(),
    }
}

// =============================================================
// Resolution from Loading
// =============================================================

#[test]
fn starts_loading() {
    assert_eq!(AdminSession::default(), AdminSession::Loading);
}

#[test]
fn unconfigured_resolves_to_setup() {
    let mut session = AdminSession::default();
    session.resolved_unconfigured();
    assert_eq!(session, AdminSession::Setup);
    assert!(session.admin().is_none());
}

#[test]
fn configured_with_session_resolves_to_dashboard_with_identity() {
    let mut session = AdminSession::default();
    session.resolved_session(admin("root"));
    assert_eq!(session.admin().map(|a| a.username.as_str()), Some("root"));
}

#[test]
fn configured_without_session_resolves_to_login() {
    let mut session = AdminSession::default();
    session.resolved_no_session();
    assert_eq!(session, AdminSession::Login);
}

#[test]
fn network_failure_fails_closed_to_login() {
    let mut session = AdminSession::default();
    session.resolution_failed();
    assert_eq!(session, AdminSession::Login);
}

// =============================================================
// Submission-driven transitions
// =============================================================

#[test]
fn setup_submission_reaches_dashboard() {
    let mut session = AdminSession::default();
    session.resolved_unconfigured();
    session.setup_succeeded(admin("first"));
    assert_eq!(session.admin().map(|a| a.username.as_str()), Some("first"));
}

#[test]
fn login_submission_reaches_dashboard() {
    let mut session = AdminSession::default();
    session.resolved_no_session();
    session.login_succeeded(admin("root"));
    assert!(matches!(session, AdminSession::Dashboard(_)));
}

#[test]
fn logout_returns_to_login_and_drops_identity() {
    let mut session = AdminSession::default();
    session.resolved_session(admin("root"));
    session.logged_out();
    assert_eq!(session, AdminSession::Login);
    assert!(session.admin().is_none());
}
