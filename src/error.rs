//! Error types for queue operations.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type QueueResult<T> = Result<T, QueueError>;

/// Errors raised by [`Queue`](crate::queue::Queue) operations.
///
/// Every mutating operation either applies fully or fails with one of these
/// and leaves the queue untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueueError {
    /// A rule's insertion predicate rejected the new attribute value.
    #[error("insertion rejected by rule {rule}: {reason}")]
    InvalidInsertion {
        /// Name of the rejecting rule.
        rule: String,
        /// Human-readable reason.
        reason: String,
    },

    /// `pop` was called on an empty queue.
    #[error("cannot pop from an empty queue")]
    EmptyQueueUnderflow,

    /// Indexed access outside the current bounds.
    #[error("index {index} out of range for queue of length {len}")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Queue length at the time of the call.
        len: usize,
    },

    /// A record carries a different number of attributes than there are rules.
    #[error("record has {actual} attributes, queue has {expected} rules")]
    AttributeCountMismatch {
        /// Number of active rules.
        expected: usize,
        /// Number of attributes on the record.
        actual: usize,
    },

    /// The same rule kind appears more than once in a rule list.
    #[error("rule {0} is configured more than once")]
    DuplicateRule(String),

    /// The queue configuration is invalid.
    #[error("invalid queue configuration: {0}")]
    InvalidConfig(String),

    /// A rule's sort did not return a permutation of the column indices.
    #[error("rule {rule} returned an invalid permutation")]
    InvalidPermutation {
        /// Name of the offending rule.
        rule: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = QueueError::IndexOutOfRange { index: 4, len: 2 };
        assert_eq!(err.to_string(), "index 4 out of range for queue of length 2");

        let err = QueueError::InvalidInsertion {
            rule: "FITSoft".into(),
            reason: "expected a boosted attribute, got speaker".into(),
        };
        assert_eq!(
            err.to_string(),
            "insertion rejected by rule FITSoft: expected a boosted attribute, got speaker"
        );

        assert_eq!(
            QueueError::EmptyQueueUnderflow.to_string(),
            "cannot pop from an empty queue"
        );
    }
}
