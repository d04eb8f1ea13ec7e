//! Acknowledged or unacknowledged bulk write outcomes.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::concern::WriteConcern;
use crate::error::{BulkWriteError, BulkWriteResult};
use crate::result::AcknowledgedResult;
use crate::upsert::UpsertRecord;

/// Outcome of a bulk write.
///
/// Two outcomes are equal only when they are the same variant, so an
/// acknowledged result never equals an unacknowledged one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum WriteOutcome {
    /// The data store confirmed the write and reported counts.
    Acknowledged(AcknowledgedResult),
    /// The write was sent without requesting an outcome.
    Unacknowledged,
}

impl WriteOutcome {
    /// Picks the outcome the write concern calls for.
    ///
    /// Under an unacknowledged concern the counts in `result` are dropped.
    pub fn with_concern(concern: &WriteConcern, result: AcknowledgedResult) -> Self {
        if concern.is_acknowledged() {
            Self::Acknowledged(result)
        } else {
            debug!(w = concern.w, "discarding counts for unacknowledged write");
            Self::Unacknowledged
        }
    }

    /// Returns `true` if the data store reported an outcome.
    #[must_use]
    pub const fn is_acknowledged(&self) -> bool {
        matches!(self, Self::Acknowledged(_))
    }

    /// Returns the acknowledged result, if any.
    #[must_use]
    pub const fn as_acknowledged(&self) -> Option<&AcknowledgedResult> {
        match self {
            Self::Acknowledged(result) => Some(result),
            Self::Unacknowledged => None,
        }
    }

    fn acknowledged(&self) -> BulkWriteResult<&AcknowledgedResult> {
        self.as_acknowledged().ok_or(BulkWriteError::Unacknowledged)
    }

    /// Returns the number of inserted documents.
    ///
    /// # Errors
    ///
    /// Returns [`BulkWriteError::Unacknowledged`] for unacknowledged writes.
    pub fn inserted_count(&self) -> BulkWriteResult<u64> {
        self.acknowledged().map(AcknowledgedResult::inserted_count)
    }

    /// Returns the number of documents matched by updates and replacements.
    ///
    /// # Errors
    ///
    /// Returns [`BulkWriteError::Unacknowledged`] for unacknowledged writes.
    pub fn updated_count(&self) -> BulkWriteResult<u64> {
        self.acknowledged().map(AcknowledgedResult::updated_count)
    }

    /// Returns the number of removed documents.
    ///
    /// # Errors
    ///
    /// Returns [`BulkWriteError::Unacknowledged`] for unacknowledged writes.
    pub fn removed_count(&self) -> BulkWriteResult<u64> {
        self.acknowledged().map(AcknowledgedResult::removed_count)
    }

    /// Returns the number of documents actually changed.
    ///
    /// # Errors
    ///
    /// Returns [`BulkWriteError::Unacknowledged`] for unacknowledged writes.
    pub fn modified_count(&self) -> BulkWriteResult<u64> {
        self.acknowledged().map(AcknowledgedResult::modified_count)
    }

    /// Returns the upserted documents in request order.
    ///
    /// # Errors
    ///
    /// Returns [`BulkWriteError::Unacknowledged`] for unacknowledged writes.
    pub fn upserts(&self) -> BulkWriteResult<&[UpsertRecord]> {
        self.acknowledged().map(AcknowledgedResult::upserts)
    }
}

impl From<AcknowledgedResult> for WriteOutcome {
    fn from(result: AcknowledgedResult) -> Self {
        Self::Acknowledged(result)
    }
}

impl fmt::Display for WriteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Acknowledged(result) => write!(f, "{result}"),
            Self::Unacknowledged => f.write_str("UnacknowledgedResult{}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operation::OperationType;

    fn sample() -> AcknowledgedResult {
        AcknowledgedResult::for_operation_with_modified(
            OperationType::Update,
            2,
            1,
            Some(vec![UpsertRecord::new(1, "new")]),
        )
        .unwrap()
    }

    #[test]
    fn acknowledged_accessors() {
        let outcome = WriteOutcome::from(sample());

        assert!(outcome.is_acknowledged());
        assert_eq!(outcome.inserted_count(), Ok(0));
        assert_eq!(outcome.updated_count(), Ok(2));
        assert_eq!(outcome.removed_count(), Ok(0));
        assert_eq!(outcome.modified_count(), Ok(1));
        assert_eq!(outcome.upserts().unwrap(), &[UpsertRecord::new(1, "new")]);
        assert_eq!(outcome.as_acknowledged(), Some(&sample()));
    }

    #[test]
    fn unacknowledged_accessors_fail() {
        let outcome = WriteOutcome::Unacknowledged;

        assert!(!outcome.is_acknowledged());
        assert_eq!(outcome.as_acknowledged(), None);
        assert_eq!(outcome.inserted_count(), Err(BulkWriteError::Unacknowledged));
        assert_eq!(outcome.updated_count(), Err(BulkWriteError::Unacknowledged));
        assert_eq!(outcome.removed_count(), Err(BulkWriteError::Unacknowledged));
        assert_eq!(outcome.modified_count(), Err(BulkWriteError::Unacknowledged));
        assert_eq!(outcome.upserts(), Err(BulkWriteError::Unacknowledged));
    }

    #[test]
    fn acknowledged_never_equals_unacknowledged() {
        let empty = AcknowledgedResult::new(0, 0, 0, 0, Some(vec![])).unwrap();

        assert_ne!(WriteOutcome::from(empty), WriteOutcome::Unacknowledged);
        assert_ne!(WriteOutcome::from(sample()), WriteOutcome::Unacknowledged);
        assert_eq!(WriteOutcome::Unacknowledged, WriteOutcome::Unacknowledged);
    }

    #[test]
    fn concern_selects_variant() {
        let acked = WriteOutcome::with_concern(&WriteConcern::default(), sample());
        assert_eq!(acked, WriteOutcome::Acknowledged(sample()));

        let unacked = WriteOutcome::with_concern(&WriteConcern::unacknowledged(), sample());
        assert_eq!(unacked, WriteOutcome::Unacknowledged);
    }

    #[test]
    fn display() {
        assert_eq!(
            WriteOutcome::Unacknowledged.to_string(),
            "UnacknowledgedResult{}"
        );
        assert_eq!(WriteOutcome::from(sample()).to_string(), sample().to_string());
    }
}
