//! Shared helpers used across domain modules.
//!
//! `timestamp` parses the backend's ISO-8601 strings into an ordering key;
//! `fmt` turns rates and instants into the strings a dashboard displays.

pub mod fmt;
pub mod timestamp;

pub use timestamp::parse_timestamp;
