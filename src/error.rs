use thiserror::Error;

/// Errors returned by the positional operations of a [`LinkedQueue`].
///
/// A failed operation never changes the queue.
///
/// [`LinkedQueue`]: crate::LinkedQueue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueueError {
    /// The index is not a position of the queue (`index >= len`).
    #[error("index {index} out of bounds for a queue of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
    /// A positional lookup was made on a queue with no elements.
    #[error("positional lookup requires a non-empty queue")]
    Empty,
    /// A queue was built from an empty sequence.
    #[error("cannot build a queue from an empty sequence")]
    EmptyConstruction,
}

pub type Result<T> = std::result::Result<T, QueueError>;

#[cfg(test)]
mod tests {
    use super::QueueError;

    #[test]
    fn error_messages() {
        let err = QueueError::IndexOutOfBounds { index: 4, len: 2 };
        assert_eq!(err.to_string(), "index 4 out of bounds for a queue of length 2");
        assert_eq!(
            QueueError::Empty.to_string(),
            "positional lookup requires a non-empty queue"
        );
    }
}
