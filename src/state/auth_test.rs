use super::*;

fn user(name: &str) -> User {
    User {
        username: name.to_owned(),
        email: None,
    }
}

// =============================================================
// Resolution outcomes
// =============================================================

#[test]
fn resolving_has_no_user_and_is_loading() {
    let state = AuthState::resolving();
    assert!(state.user.is_none());
    assert!(state.loading);
}

#[test]
fn resolved_anonymous_clears_loading() {
    let state = AuthState::resolved(None);
    assert!(state.user.is_none());
    assert!(!state.loading);
}

#[test]
fn resolved_authenticated_carries_identity() {
    let state = AuthState::resolved(Some(user("alice")));
    assert_eq!(state.user.as_ref().map(|u| u.username.as_str()), Some("alice"));
    assert!(!state.loading);
}

// =============================================================
// Synchronous login/logout transitions
// =============================================================

#[test]
fn signed_in_replaces_identity_without_resolution() {
    let mut state = AuthState::resolved(None);
    state.signed_in(user("bob"));
    assert_eq!(state.user.as_ref().map(|u| u.username.as_str()), Some("bob"));
    assert!(!state.loading);
}

#[test]
fn signed_out_drops_identity() {
    let mut state = AuthState::resolved(Some(user("alice")));
    state.signed_out();
    assert!(state.user.is_none());
}
