//! Upserted document records.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::value::Value;

/// A document created by an upsert during a bulk write.
///
/// `index` is the position of the originating request within the bulk write,
/// and `id` is the identifier the data store generated for the new document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UpsertRecord {
    index: u32,
    id: Value,
}

impl UpsertRecord {
    /// Creates a new upsert record.
    pub fn new(index: u32, id: impl Into<Value>) -> Self {
        Self {
            index,
            id: id.into(),
        }
    }

    /// Returns the index of the request that produced the upsert.
    #[must_use]
    pub const fn index(&self) -> u32 {
        self.index
    }

    /// Returns the generated identifier.
    #[must_use]
    pub const fn id(&self) -> &Value {
        &self.id
    }
}

impl fmt::Display for UpsertRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UpsertRecord{{index={}, id={}}}", self.index, self.id)
    }
}
