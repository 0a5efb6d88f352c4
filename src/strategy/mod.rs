//! Parsing Strategy Module
//!
//! Strategies for scanning beyond a single document on the calling thread:
//! - Parallel: independent documents scanned concurrently with Rayon

#[cfg(feature = "parallel")]
pub mod parallel;

#[cfg(feature = "parallel")]
pub use parallel::{parse_many, scan_each};
