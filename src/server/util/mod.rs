//! Utility functions shared by services and controllers.
//!
//! Date and time parsing for request parameters, input validation with the request
//! error taxonomy, and the wire names of the role and plan status enums.

pub mod enums;
pub mod time;
pub mod validate;
