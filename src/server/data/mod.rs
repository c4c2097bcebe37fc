//! Data access layer repositories.
//!
//! One repository per table. Every repository is generic over `ConnectionTrait` so the
//! same methods run on a pooled connection or inside a transaction. Queries apply coarse
//! filters in SQL; joins across tables and aggregation happen in the service layer.

pub mod account;
pub mod auth_session;
pub mod course;
pub mod course_item;
pub mod evaluation;
pub mod person;
pub mod plan_employee;
pub mod training_plan;

#[cfg(test)]
mod tests;
