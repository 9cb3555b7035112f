//! Common utilities for the kata crates.
//!
//! This crate provides shared infrastructure used by the exercise crates:
//! - **Warning System** - colored, deduplicated stderr output for input the
//!   libraries accept but cannot fully honor

pub mod warning;
