//! Server application core modules.
//!
//! This module contains the training backend: HTTP routing, session authentication,
//! database access, the scoring oracle client, and the services behind the employee,
//! teacher and planner endpoints.

#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod util;
