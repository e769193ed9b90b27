//! Derived-state computations behind the supervisor and pharmacy screens.

pub mod pharmacy;
pub mod surveys;
pub mod visits;
