//! # citadel-service
//!
//! Application layer containing business logic, services, and DTOs.
//!
//! Services orchestrate repository calls, enforce league policy (signup
//! windows, roster bounds, transfer approval), and evaluate permission
//! predicates before invoking lifecycle operations.

pub mod dto;
pub mod services;

pub use services::{ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult};
