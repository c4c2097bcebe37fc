//! Fixture helpers used during test execution.
//!
//! - `people` - persons of every role and their login accounts
//! - `training` - plans, courses, scheduled items, enrollments and evaluations
//! - `oracle` - mock scoring oracle endpoints
//! - `factory` - dates, times and oracle payloads for building fixtures

pub mod factory;
pub mod oracle;
pub mod people;
pub mod training;
