//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod health;
pub mod invites;
pub mod leagues;
pub mod matches;
pub mod notifications;
pub mod rosters;
pub mod teams;
pub mod transfer_requests;
pub mod users;
