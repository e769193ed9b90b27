//! Pharmacy stock endpoints, restricted to pharmacists.

pub mod handlers;
pub mod routes;
