//! Session, access control and derived-state core of the PHC staff portal.

pub mod api;
pub mod auth;
pub mod config;
pub mod data;
pub mod errors;
pub mod navigation;
pub mod services;
pub mod storage;
pub mod utils;
