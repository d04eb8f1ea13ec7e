//! # Bulk Write Core
//!
//! Outcome types for bulk writes issued against a data store.
//!
//! This crate provides:
//! - `AcknowledgedResult` with inserted, updated, removed, and modified counts
//! - `UpsertRecord` for documents created by upserts
//! - `WriteOutcome` distinguishing acknowledged and unacknowledged writes
//! - `WriteConcern` for choosing between the two
//!
//! This is a pure value crate with no I/O operations. Batching, transport,
//! and merging results across round-trips belong to the caller.
//!
//! ## Example
//!
//! ```
//! use bulkwrite_core::{AcknowledgedResult, OperationType, UpsertRecord};
//!
//! let result = AcknowledgedResult::for_operation_with_modified(
//!     OperationType::Update,
//!     3,
//!     2,
//!     Some(vec![UpsertRecord::new(1, "generated-id")]),
//! )
//! .unwrap();
//!
//! assert_eq!(result.updated_count(), 3);
//! assert_eq!(result.modified_count(), 2);
//! assert_eq!(result.upserts()[0].index(), 1);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod concern;
mod error;
mod operation;
mod outcome;
mod result;
mod upsert;
mod value;

pub use concern::WriteConcern;
pub use error::{BulkWriteError, BulkWriteResult};
pub use operation::OperationType;
pub use outcome::WriteOutcome;
pub use result::AcknowledgedResult;
pub use upsert::UpsertRecord;
pub use value::{Value, OBJECT_ID_LEN};

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn results_are_send_and_sync() {
        assert_send_sync::<AcknowledgedResult>();
        assert_send_sync::<WriteOutcome>();
        assert_send_sync::<UpsertRecord>();
    }
}
