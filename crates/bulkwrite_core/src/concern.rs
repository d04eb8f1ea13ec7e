//! Write concern configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Acknowledgment level requested for a bulk write.
///
/// A write concern with `w == 0` asks the data store not to report an
/// outcome; every other level yields an acknowledged result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriteConcern {
    /// Number of members that must confirm the write (0 = unacknowledged).
    pub w: u32,

    /// Whether the write must reach the journal before it is confirmed.
    pub journal: bool,

    /// How long to wait for confirmation (zero = no limit).
    pub timeout: Duration,
}

impl Default for WriteConcern {
    fn default() -> Self {
        Self {
            w: 1,
            journal: false,
            timeout: Duration::ZERO,
        }
    }
}

impl WriteConcern {
    /// Creates a new write concern with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Write concern that requests no outcome.
    #[must_use]
    pub const fn unacknowledged() -> Self {
        Self {
            w: 0,
            journal: false,
            timeout: Duration::ZERO,
        }
    }

    /// Sets the number of confirming members.
    #[must_use]
    pub const fn w(mut self, value: u32) -> Self {
        self.w = value;
        self
    }

    /// Sets whether journaling is required.
    #[must_use]
    pub const fn journal(mut self, value: bool) -> Self {
        self.journal = value;
        self
    }

    /// Sets the confirmation timeout.
    #[must_use]
    pub const fn timeout(mut self, value: Duration) -> Self {
        self.timeout = value;
        self
    }

    /// Returns `true` if writes under this concern report an outcome.
    ///
    /// Requesting a journal forces acknowledgment even with `w == 0`.
    #[must_use]
    pub const fn is_acknowledged(&self) -> bool {
        self.w > 0 || self.journal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_concern() {
        let concern = WriteConcern::default();
        assert_eq!(concern.w, 1);
        assert!(!concern.journal);
        assert_eq!(concern.timeout, Duration::ZERO);
        assert!(concern.is_acknowledged());
    }

    #[test]
    fn builder_pattern() {
        let concern = WriteConcern::new()
            .w(3)
            .journal(true)
            .timeout(Duration::from_millis(500));

        assert_eq!(concern.w, 3);
        assert!(concern.journal);
        assert_eq!(concern.timeout, Duration::from_millis(500));
    }

    #[test]
    fn unacknowledged_concern() {
        assert!(!WriteConcern::unacknowledged().is_acknowledged());
        assert!(WriteConcern::unacknowledged().journal(true).is_acknowledged());
        assert!(!WriteConcern::new().w(0).is_acknowledged());
    }
}
