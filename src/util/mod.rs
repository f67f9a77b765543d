//! Browser-facing helpers shared across pages and components.

pub mod datetime;
pub mod redirect;
