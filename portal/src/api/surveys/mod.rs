//! Survey batch listing for field supervisors.

pub mod handlers;
pub mod routes;
