#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use crate::net::types::AdminUser;

/// Admin console session as a tagged union.
///
/// `Loading` resolves to exactly one of the other three:
/// - an unconfigured deployment goes to `Setup` without the admin-session
///   endpoint ever being consulted (setup is the one-time bootstrap of the
///   first and only admin account);
/// - a configured deployment goes to `Dashboard` when `/admin/me/`
///   confirms an identity, else to `Login`;
/// - any resolution failure falls back to `Login` (fail closed).
///
/// `Setup` and `Login` reach `Dashboard` only through a successful
/// submission carrying the identity from the response body. Logout returns
/// `Dashboard` to `Login`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AdminSession {
    #[default]
    Loading,
    Setup,
    Login,
    Dashboard(AdminUser),
}

impl AdminSession {
    /// `/admin/status/` reported `configured: false`.
    pub fn resolved_unconfigured(&mut self) {
        *self = Self::Setup;
    }

    /// `/admin/me/` confirmed an active admin session.
    pub fn resolved_session(&mut self, admin: AdminUser) {
        *self = Self::Dashboard(admin);
    }

    /// Configured, but `/admin/me/` returned non-2xx.
    pub fn resolved_no_session(&mut self) {
        *self = Self::Login;
    }

    /// Network failure at either resolution step.
    pub fn resolution_failed(&mut self) {
        *self = Self::Login;
    }

    /// The one-time setup submission succeeded.
    pub fn setup_succeeded(&mut self, admin: AdminUser) {
        *self = Self::Dashboard(admin);
    }

    /// An admin login submission succeeded.
    pub fn login_succeeded(&mut self, admin: AdminUser) {
        *self = Self::Dashboard(admin);
    }

    /// Explicit logout; the logout request has already been fired.
    pub fn logged_out(&mut self) {
        *self = Self::Login;
    }

    /// The resolved admin identity, present only on the dashboard.
    pub fn admin(&self) -> Option<&AdminUser> {
        match self {
            Self::Dashboard(admin) => Some(admin),
            _ => None,
        }
    }
}
