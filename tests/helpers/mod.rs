//! Test helpers module
//!
//! Shared setup for the integration tests: an application context over the
//! embedded catalog and builders for ad-hoc records.

#![allow(dead_code)]

pub mod test_context;
pub mod test_data;

pub use test_context::*;
pub use test_data::*;
