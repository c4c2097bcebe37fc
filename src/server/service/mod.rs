//! Service layer for business logic and orchestration.
//!
//! Services validate requests, coordinate repositories inside transactions where several
//! rows must change together, and turn stored rows into the response models. Scoring
//! reaches out to the external oracle; everything else works on the database alone.

pub mod auth;
pub mod employee;
pub mod evaluation;
pub mod planner;
pub mod schedule;
pub mod scoring;
pub mod statistics;
pub mod teacher;
