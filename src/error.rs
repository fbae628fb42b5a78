use thiserror::Error;

/// Failures raised by sequence operations.
///
/// Every operation that returns one of these has left the sequence untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// An index fell outside the interval valid for the operation.
    ///
    /// Access and in-place mutation accept `0..len`; insertion and split
    /// points accept `0..=len`.
    #[error("index {index} out of range for sequence of length {len}")]
    OutOfRange { index: usize, len: usize },

    /// A removal was requested but there is no element to remove.
    #[error("no element to remove")]
    EmptyState,
}

pub type Result<T> = std::result::Result<T, SequenceError>;

/// Checks an access index against `0..len`.
pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(SequenceError::OutOfRange { index, len })
    }
}

/// Checks an insertion or split point against `0..=len`.
pub(crate) fn check_position(index: usize, len: usize) -> Result<()> {
    if index <= len {
        Ok(())
    } else {
        Err(SequenceError::OutOfRange { index, len })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_index_bounds() {
        assert!(check_index(0, 1).is_ok());
        assert_eq!(
            check_index(1, 1),
            Err(SequenceError::OutOfRange { index: 1, len: 1 })
        );
        assert!(check_index(0, 0).is_err());
        assert!(check_index(usize::MAX, 3).is_err());
    }

    #[test]
    fn test_check_position_bounds() {
        assert!(check_position(0, 0).is_ok());
        assert!(check_position(3, 3).is_ok());
        assert_eq!(
            check_position(4, 3),
            Err(SequenceError::OutOfRange { index: 4, len: 3 })
        );
    }

    #[test]
    fn test_messages() {
        let err = SequenceError::OutOfRange { index: 7, len: 2 };
        assert_eq!(
            err.to_string(),
            "index 7 out of range for sequence of length 2"
        );
        assert_eq!(SequenceError::EmptyState.to_string(), "no element to remove");
    }
}
