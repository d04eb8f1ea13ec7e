//! Canned bulk write results.
//!
//! Provides ready-made results for the scenarios tests reach for most.

use bulkwrite_core::{AcknowledgedResult, OperationType, UpsertRecord, Value};

/// Builds an object identifier whose last byte is `seed`.
pub fn object_id(seed: u8) -> Value {
    let mut oid = [0u8; bulkwrite_core::OBJECT_ID_LEN];
    oid[bulkwrite_core::OBJECT_ID_LEN - 1] = seed;
    Value::ObjectId(oid)
}

/// Builds `count` upserts at consecutive indexes starting from `first_index`.
pub fn sequential_upserts(first_index: u32, count: u32) -> Vec<UpsertRecord> {
    (0..count)
        .map(|i| UpsertRecord::new(first_index + i, object_id(i as u8)))
        .collect()
}

/// Result of an insert-only batch of `count` documents.
pub fn insert_result(count: u64) -> AcknowledgedResult {
    AcknowledgedResult::for_operation(OperationType::Insert, count, Some(Vec::new()))
        .expect("upserts are present")
}

/// Result of an update batch where some requests upserted.
pub fn upserting_update_result() -> AcknowledgedResult {
    AcknowledgedResult::for_operation_with_modified(
        OperationType::Update,
        5,
        3,
        Some(sequential_upserts(2, 2)),
    )
    .expect("upserts are present")
}

/// Result aggregated over a batch that inserted, updated, and removed.
pub fn mixed_batch_result() -> AcknowledgedResult {
    AcknowledgedResult::new(2, 4, 1, 3, Some(sequential_upserts(6, 1)))
        .expect("upserts are present")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn object_id_seed() {
        let oid = object_id(7);
        assert_eq!(oid.as_object_id().map(|b| b[11]), Some(7));
    }

    #[test]
    fn sequential_upserts_are_ordered() {
        let upserts = sequential_upserts(3, 3);
        let indexes: Vec<u32> = upserts.iter().map(UpsertRecord::index).collect();
        assert_eq!(indexes, vec![3, 4, 5]);
        assert_ne!(upserts[0].id(), upserts[1].id());
    }

    #[test]
    fn canned_results() {
        let insert = insert_result(10);
        assert_eq!(insert.inserted_count(), 10);
        assert!(insert.upserts().is_empty());

        let update = upserting_update_result();
        assert_eq!(update.updated_count(), 5);
        assert_eq!(update.modified_count(), 3);
        assert_eq!(update.upserts().len(), 2);

        let mixed = mixed_batch_result();
        assert_eq!(mixed.inserted_count(), 2);
        assert_eq!(mixed.removed_count(), 1);
    }
}
