//! # Bulk Write Testkit
//!
//! Test utilities for bulk write results.
//!
//! This crate provides:
//! - Canned results for common bulk write scenarios
//! - Property-based test generators using proptest
//!
//! ## Usage
//!
//! ```rust
//! use bulkwrite_testkit::prelude::*;
//!
//! let result = mixed_batch_result();
//! assert!(result.is_acknowledged());
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod generators;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::generators::*;
}

pub use fixtures::*;
pub use generators::*;
