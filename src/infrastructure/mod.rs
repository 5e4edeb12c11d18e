//! Infrastructure utilities for the Zellij sandbox environment.
//!
//! # Organization
//!
//! - [`paths`]: Sandbox filesystem locations (trace file directory)

pub mod paths;

pub use paths::get_data_dir;
