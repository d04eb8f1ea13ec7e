//! Acknowledged bulk write results.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::Serialize;
use tracing::{trace, warn};

use crate::error::{BulkWriteError, BulkWriteResult};
use crate::operation::OperationType;
use crate::upsert::UpsertRecord;

/// Outcome of a bulk write that the data store acknowledged.
///
/// The counts are fixed at construction and the upserts are only ever
/// handed out as a shared slice, so a result can be read from any number
/// of threads without synchronization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AcknowledgedResult {
    inserted_count: u64,
    updated_count: u64,
    removed_count: u64,
    modified_count: u64,
    upserts: Vec<UpsertRecord>,
}

impl AcknowledgedResult {
    /// Creates a result from explicit counts.
    ///
    /// Any combination of counts is accepted, which lets callers that have
    /// already aggregated over several operation types build a single result.
    ///
    /// # Errors
    ///
    /// Returns [`BulkWriteError::InvalidArgument`] if `upserts` is `None`.
    /// An empty list is valid.
    pub fn new(
        inserted_count: u64,
        updated_count: u64,
        removed_count: u64,
        modified_count: u64,
        upserts: Option<Vec<UpsertRecord>>,
    ) -> BulkWriteResult<Self> {
        let Some(upserts) = upserts else {
            warn!("rejected bulk write result without an upsert list");
            return Err(BulkWriteError::invalid_argument("upserts can not be null"));
        };

        trace!(
            inserted_count,
            updated_count,
            removed_count,
            modified_count,
            upserts = upserts.len(),
            "built acknowledged bulk write result"
        );

        Ok(Self {
            inserted_count,
            updated_count,
            removed_count,
            modified_count,
            upserts,
        })
    }

    /// Creates a result for a batch of a single operation type.
    ///
    /// Equivalent to [`for_operation_with_modified`](Self::for_operation_with_modified)
    /// with a modified count of zero.
    ///
    /// # Errors
    ///
    /// Returns [`BulkWriteError::InvalidArgument`] if `upserts` is `None`.
    pub fn for_operation(
        op_type: OperationType,
        count: u64,
        upserts: Option<Vec<UpsertRecord>>,
    ) -> BulkWriteResult<Self> {
        Self::for_operation_with_modified(op_type, count, 0, upserts)
    }

    /// Creates a result for a batch of a single operation type.
    ///
    /// `count` lands in the counter matching `op_type`:
    ///
    /// | type                | counter          |
    /// |---------------------|------------------|
    /// | `Insert`            | `inserted_count` |
    /// | `Update`, `Replace` | `updated_count`  |
    /// | `Remove`            | `removed_count`  |
    ///
    /// The other two counters are zero. `modified_count` is stored as given.
    ///
    /// # Errors
    ///
    /// Returns [`BulkWriteError::InvalidArgument`] if `upserts` is `None`.
    pub fn for_operation_with_modified(
        op_type: OperationType,
        count: u64,
        modified_count: u64,
        upserts: Option<Vec<UpsertRecord>>,
    ) -> BulkWriteResult<Self> {
        let (inserted, updated, removed) = match op_type {
            OperationType::Insert => (count, 0, 0),
            OperationType::Update | OperationType::Replace => (0, count, 0),
            OperationType::Remove => (0, 0, count),
        };
        Self::new(inserted, updated, removed, modified_count, upserts)
    }

    /// Always `true`: this result was acknowledged by the data store.
    #[must_use]
    pub const fn is_acknowledged(&self) -> bool {
        true
    }

    /// Returns the number of inserted documents.
    #[must_use]
    pub const fn inserted_count(&self) -> u64 {
        self.inserted_count
    }

    /// Returns the number of documents matched by updates and replacements.
    #[must_use]
    pub const fn updated_count(&self) -> u64 {
        self.updated_count
    }

    /// Returns the number of removed documents.
    #[must_use]
    pub const fn removed_count(&self) -> u64 {
        self.removed_count
    }

    /// Returns the number of documents actually changed.
    #[must_use]
    pub const fn modified_count(&self) -> u64 {
        self.modified_count
    }

    /// Returns the upserted documents in request order.
    #[must_use]
    pub fn upserts(&self) -> &[UpsertRecord] {
        &self.upserts
    }
}

// Upserts seed the hash; counts follow in declaration order.
impl Hash for AcknowledgedResult {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.upserts.hash(state);
        self.inserted_count.hash(state);
        self.updated_count.hash(state);
        self.removed_count.hash(state);
        self.modified_count.hash(state);
    }
}

impl fmt::Display for AcknowledgedResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AcknowledgedResult{{inserted_count={}, updated_count={}, removed_count={}, modified_count={}, upserts=[",
            self.inserted_count, self.updated_count, self.removed_count, self.modified_count
        )?;
        for (i, upsert) in self.upserts.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{upsert}")?;
        }
        f.write_str("]}")
    }
}
