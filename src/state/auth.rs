#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Regular-user session state: resolved identity plus a loading flag.
///
/// Resolved exactly once per page load from `/auth/me/`. Login and logout
/// update the state synchronously; no second round trip re-resolves it.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// Initial state while the current-session request is in flight.
    pub fn resolving() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }

    /// Outcome of the current-session request. `None` means anonymous;
    /// resolution failures map here too and are never surfaced.
    pub fn resolved(user: Option<User>) -> Self {
        Self {
            user,
            loading: false,
        }
    }

    /// A login or registration succeeded; adopt the returned identity.
    pub fn signed_in(&mut self, user: User) {
        self.user = Some(user);
        self.loading = false;
    }

    /// Logout clears the identity locally; the server call already went out.
    pub fn signed_out(&mut self) {
        self.user = None;
    }
}
