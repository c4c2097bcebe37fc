//! Wire types shared by every HTTP endpoint.
//!
//! Field names are camelCase on the wire. Successful and failed responses are both
//! wrapped in [`api::ApiResponse`].

pub mod api;
pub mod auth;
pub mod employee;
pub mod home;
pub mod planner;
pub mod teacher;
