//! Property-based test generators using proptest.
//!
//! Provides strategies for generating random bulk write inputs
//! that maintain required invariants.

use bulkwrite_core::{AcknowledgedResult, OperationType, UpsertRecord, Value, OBJECT_ID_LEN};
use proptest::prelude::*;

/// Strategy for generating operation types.
pub fn operation_type_strategy() -> impl Strategy<Value = OperationType> {
    prop::sample::select(OperationType::ALL.to_vec())
}

/// Strategy for generating generated-identifier values.
pub fn value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Integer),
        prop::string::string_regex("[a-zA-Z0-9_-]{0,24}")
            .expect("Invalid regex")
            .prop_map(Value::Text),
        prop::collection::vec(any::<u8>(), 0..32).prop_map(Value::Bytes),
        prop::array::uniform12(any::<u8>())
            .prop_map(|oid: [u8; OBJECT_ID_LEN]| Value::ObjectId(oid)),
    ]
}

/// Strategy for generating a single upsert record.
pub fn upsert_strategy() -> impl Strategy<Value = UpsertRecord> {
    (0u32..1000, value_strategy()).prop_map(|(index, id)| UpsertRecord::new(index, id))
}

/// Strategy for generating an ordered list of upserts.
pub fn upserts_strategy(max_len: usize) -> impl Strategy<Value = Vec<UpsertRecord>> {
    prop::collection::vec(upsert_strategy(), 0..=max_len)
}

/// Strategy for generating a count that fits comfortably in a single batch.
pub fn count_strategy() -> impl Strategy<Value = u64> {
    0u64..100_000
}

/// Raw inputs for the canonical constructor.
#[derive(Debug, Clone)]
pub struct ResultInputs {
    /// Inserted count.
    pub inserted: u64,
    /// Updated count.
    pub updated: u64,
    /// Removed count.
    pub removed: u64,
    /// Modified count.
    pub modified: u64,
    /// Upserted documents.
    pub upserts: Vec<UpsertRecord>,
}

impl ResultInputs {
    /// Builds the result these inputs describe.
    pub fn build(&self) -> AcknowledgedResult {
        AcknowledgedResult::new(
            self.inserted,
            self.updated,
            self.removed,
            self.modified,
            Some(self.upserts.clone()),
        )
        .expect("upserts are present")
    }
}

/// Strategy for generating canonical constructor inputs.
pub fn result_inputs_strategy() -> impl Strategy<Value = ResultInputs> {
    (
        count_strategy(),
        count_strategy(),
        count_strategy(),
        count_strategy(),
        upserts_strategy(8),
    )
        .prop_map(|(inserted, updated, removed, modified, upserts)| ResultInputs {
            inserted,
            updated,
            removed,
            modified,
            upserts,
        })
}

/// Strategy for generating acknowledged results.
pub fn acknowledged_result_strategy() -> impl Strategy<Value = AcknowledgedResult> {
    result_inputs_strategy().prop_map(|inputs| inputs.build())
}

/// Configuration for property tests.
#[derive(Debug, Clone)]
pub struct PropTestConfig {
    /// Number of test cases to run.
    pub cases: u32,
    /// Maximum shrink iterations.
    pub max_shrink_iters: u32,
}

impl Default for PropTestConfig {
    fn default() -> Self {
        Self {
            cases: 256,
            max_shrink_iters: 1000,
        }
    }
}

impl PropTestConfig {
    /// Creates a configuration for quick tests.
    #[must_use]
    pub fn quick() -> Self {
        Self {
            cases: 32,
            max_shrink_iters: 100,
        }
    }

    /// Creates a configuration for thorough tests.
    #[must_use]
    pub fn thorough() -> Self {
        Self {
            cases: 1024,
            max_shrink_iters: 10000,
        }
    }

    /// Converts to proptest config.
    #[must_use]
    pub fn to_proptest_config(&self) -> ProptestConfig {
        ProptestConfig {
            cases: self.cases,
            max_shrink_iters: self.max_shrink_iters,
            ..ProptestConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #![proptest_config(PropTestConfig::quick().to_proptest_config())]

        #[test]
        fn upserts_respect_max_len(upserts in upserts_strategy(4)) {
            prop_assert!(upserts.len() <= 4);
        }

        #[test]
        fn text_ids_are_bounded(value in value_strategy()) {
            if let Some(text) = value.as_text() {
                prop_assert!(text.len() <= 24);
            }
        }

        #[test]
        fn inputs_build_matching_result(inputs in result_inputs_strategy()) {
            let result = inputs.build();
            prop_assert_eq!(result.inserted_count(), inputs.inserted);
            prop_assert_eq!(result.upserts(), inputs.upserts.as_slice());
        }
    }
}
