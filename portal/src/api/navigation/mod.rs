//! Navigation decisions for the client router.

pub mod handlers;
pub mod routes;
