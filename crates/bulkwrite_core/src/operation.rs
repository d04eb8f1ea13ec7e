//! Write operation types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::BulkWriteError;

/// Type of a write request inside a bulk write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationType {
    /// A new document is inserted.
    Insert,
    /// Matching documents are modified with update operators.
    Update,
    /// A matching document is replaced wholesale.
    Replace,
    /// Matching documents are removed.
    Remove,
}

impl OperationType {
    /// All operation types, in code order.
    pub const ALL: [OperationType; 4] = [
        OperationType::Insert,
        OperationType::Update,
        OperationType::Replace,
        OperationType::Remove,
    ];

    /// Converts to a numeric code.
    pub fn to_code(&self) -> u8 {
        match self {
            OperationType::Insert => 1,
            OperationType::Update => 2,
            OperationType::Replace => 3,
            OperationType::Remove => 4,
        }
    }

    /// Converts from a numeric code.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(OperationType::Insert),
            2 => Some(OperationType::Update),
            3 => Some(OperationType::Replace),
            4 => Some(OperationType::Remove),
            _ => None,
        }
    }

    /// Returns the lowercase name of this operation type.
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationType::Insert => "insert",
            OperationType::Update => "update",
            OperationType::Replace => "replace",
            OperationType::Remove => "remove",
        }
    }
}

impl TryFrom<u8> for OperationType {
    type Error = BulkWriteError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or_else(|| {
            BulkWriteError::invalid_argument(format!("unrecognized operation type code {code}"))
        })
    }
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
