//! Reusable UI components: page chrome, the route gate, and the admin
//! console's forms and tables.

pub mod admin_attacks;
pub mod admin_audit;
pub mod admin_banned_ips;
pub mod admin_login;
pub mod admin_setup;
pub mod admin_traffic;
pub mod admin_users;
pub mod layout;
pub mod protected;
