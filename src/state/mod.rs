//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by identity domain: `auth` holds the regular user
//! session, `admin` the admin-console session. The two are resolved from
//! different endpoints and never merge; neither grants the other's
//! capabilities.

pub mod admin;
pub mod auth;
