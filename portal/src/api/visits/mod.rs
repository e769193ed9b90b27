//! Supervision visit tracking per sub-centre.

pub mod handlers;
pub mod routes;
