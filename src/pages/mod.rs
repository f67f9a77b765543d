//! Routed page components.

pub mod admin;
pub mod auth;
pub mod dashboard;
pub mod home;
pub mod not_found;
pub mod unauthorized;
