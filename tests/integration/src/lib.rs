//! Integration test utilities for the Citadel league platform
//!
//! This crate provides helpers for running end-to-end tests against
//! the REST API with database-seeded fixtures.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
