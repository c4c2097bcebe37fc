//! Server application models.
//!
//! Application state shared by every handler and the per-request caller identity
//! resolved from the `Session-ID` header.

pub mod app;
pub mod session;
