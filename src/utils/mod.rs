//! Utility modules for the dashboard.
//!
//! - [`datetime`] - Due date parsing and human-readable formatting

pub mod datetime;
