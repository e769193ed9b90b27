//! Authentication module: session lifecycle, access gate and role routing.
//!
//! This module provides the credential store consulted on login, the
//! session manager that persists and restores the signed-in user, the gate
//! that authorizes role-scoped views, and the HTTP endpoints built on them.

pub mod credentials;
pub mod gate;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod router;
pub mod routes;
pub mod session;
