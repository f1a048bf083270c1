//! Error types for [`UniqueList`](super::UniqueList).
//!
//! Every fallible operation on a unique list returns a
//! [`UniqueListError`]. A failed operation never leaves the list in a
//! partially-modified state.

use std::fmt;

/// Describes an out-of-bounds index or an invalid `[start, end)` window.
///
/// # Examples
///
/// ```rust
/// use unique_list::RangeError;
///
/// let error = RangeError::Index { index: 5, length: 3 };
/// assert_eq!(format!("{error}"), "index 5 out of range for length 3");
///
/// let error = RangeError::Range { start: 2, end: 1, length: 3 };
/// assert_eq!(format!("{error}"), "invalid range 2..1 for length 3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeError {
    /// A single index was outside the valid bounds.
    Index {
        /// The offending index.
        index: usize,
        /// The length of the list at the time of the call.
        length: usize,
    },
    /// A `[start, end)` window did not satisfy `start <= end <= length`.
    Range {
        /// Start of the requested window (inclusive).
        start: usize,
        /// End of the requested window (exclusive).
        end: usize,
        /// The length of the list at the time of the call.
        length: usize,
    },
    /// A source sequence ran out before filling the target window.
    Source {
        /// How many values the window needed.
        required: usize,
        /// How many values the source supplied.
        available: usize,
    },
}

impl fmt::Display for RangeError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index { index, length } => {
                write!(formatter, "index {index} out of range for length {length}")
            }
            Self::Range { start, end, length } => {
                write!(formatter, "invalid range {start}..{end} for length {length}")
            }
            Self::Source {
                required,
                available,
            } => write!(
                formatter,
                "source supplied {available} values, {required} required"
            ),
        }
    }
}

impl std::error::Error for RangeError {}

/// Represents errors that can occur when building or mutating a
/// [`UniqueList`](super::UniqueList).
///
/// The duplicate variants carry the offending value so callers can report
/// or recover it.
///
/// # Examples
///
/// ```rust
/// use unique_list::{UniqueList, UniqueListError};
///
/// let mut list = UniqueList::strict();
/// list.push(1).unwrap();
///
/// assert_eq!(list.push(1), Err(UniqueListError::DuplicateValue(1)));
/// assert_eq!(list.as_slice(), &[1]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UniqueListError<T> {
    /// A mutation on a live list would have introduced this value twice.
    DuplicateValue(T),
    /// The source data of a construction already contains this value twice.
    DuplicateValues(T),
    /// The operation is structurally impossible for this list.
    Unsupported(&'static str),
    /// An index or range was out of bounds.
    Range(RangeError),
}

impl<T> UniqueListError<T> {
    /// Returns the offending value for the duplicate variants.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::DuplicateValue(value) | Self::DuplicateValues(value) => Some(value),
            Self::Unsupported(_) | Self::Range(_) => None,
        }
    }

    /// Returns `true` for [`UniqueListError::DuplicateValue`] and
    /// [`UniqueListError::DuplicateValues`].
    #[must_use]
    pub const fn is_duplicate(&self) -> bool {
        matches!(self, Self::DuplicateValue(_) | Self::DuplicateValues(_))
    }

    /// Converts the carried value with `function`, keeping the variant.
    pub fn map_value<U, F>(self, function: F) -> UniqueListError<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::DuplicateValue(value) => UniqueListError::DuplicateValue(function(value)),
            Self::DuplicateValues(value) => UniqueListError::DuplicateValues(function(value)),
            Self::Unsupported(reason) => UniqueListError::Unsupported(reason),
            Self::Range(error) => UniqueListError::Range(error),
        }
    }
}

impl<T> From<RangeError> for UniqueListError<T> {
    fn from(error: RangeError) -> Self {
        Self::Range(error)
    }
}

impl<T: fmt::Debug> fmt::Display for UniqueListError<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateValue(value) => {
                write!(formatter, "duplicate value: {value:?} is already in the list")
            }
            Self::DuplicateValues(value) => {
                write!(formatter, "duplicate values: {value:?} occurs more than once")
            }
            Self::Unsupported(reason) => write!(formatter, "unsupported operation: {reason}"),
            Self::Range(error) => write!(formatter, "{error}"),
        }
    }
}

impl<T: fmt::Debug> std::error::Error for UniqueListError<T> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Range(error) => Some(error),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(UniqueListError::DuplicateValue(3), "duplicate value: 3 is already in the list")]
    #[case(UniqueListError::DuplicateValues(3), "duplicate values: 3 occurs more than once")]
    #[case(
        UniqueListError::Unsupported("cannot add to a fixed-length list"),
        "unsupported operation: cannot add to a fixed-length list"
    )]
    #[case(
        UniqueListError::Range(RangeError::Index { index: 4, length: 2 }),
        "index 4 out of range for length 2"
    )]
    fn test_display(#[case] error: UniqueListError<i32>, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    fn test_value_and_is_duplicate() {
        let duplicate: UniqueListError<&str> = UniqueListError::DuplicateValue("a");
        assert_eq!(duplicate.value(), Some(&"a"));
        assert!(duplicate.is_duplicate());

        let unsupported: UniqueListError<&str> = UniqueListError::Unsupported("nope");
        assert_eq!(unsupported.value(), None);
        assert!(!unsupported.is_duplicate());
    }

    #[rstest]
    fn test_map_value_keeps_variant() {
        let error: UniqueListError<i32> = UniqueListError::DuplicateValues(7);
        assert_eq!(
            error.map_value(|value| value.to_string()),
            UniqueListError::DuplicateValues("7".to_string())
        );
    }

    #[rstest]
    fn test_range_error_is_source() {
        use std::error::Error;

        let error: UniqueListError<i32> = RangeError::Range {
            start: 3,
            end: 1,
            length: 5,
        }
        .into();
        assert!(error.source().is_some());
        assert!(UniqueListError::DuplicateValue(1).source().is_none());
    }
}
