//! Stateless duplicate detection over plain slices.
//!
//! These helpers are shared by every [`UniqueList`](super::UniqueList)
//! constructor and by the mutation methods. They operate on a raw sequence
//! plus the `nullable` switch: when `nullable` is `true`, null values (see
//! [`Element::is_null`]) never count as seen and never match.
//!
//! Membership is decided by [`PartialEq`] alone, so every scan is O(n²).
//!
//! # Examples
//!
//! ```rust
//! use unique_list::validation::{contains_duplicates, dedup_keep_first, first_duplicate};
//!
//! let values = [0, 1, 2, 0, 1];
//! assert!(contains_duplicates(&values, false));
//! assert_eq!(first_duplicate(&values, false), Some(&0));
//! assert_eq!(dedup_keep_first(values.to_vec(), false), vec![0, 1, 2]);
//! ```

use super::element::{Element, is_exempt};
use super::error::UniqueListError;

/// Returns `true` if `sequence` holds the same non-exempt value twice.
#[must_use]
pub fn contains_duplicates<T: Element>(sequence: &[T], nullable: bool) -> bool {
    first_duplicate_position(sequence, nullable).is_some()
}

/// Returns the first value found to repeat, scanning left to right.
///
/// The returned reference points at the later, offending occurrence.
///
/// # Examples
///
/// ```rust
/// use unique_list::validation::first_duplicate;
///
/// let values = ["a", "b", "b", "a"];
/// let duplicate = first_duplicate(&values, true).unwrap();
/// assert!(std::ptr::eq(duplicate, &values[2]));
///
/// let nulls = [None, Some(1), None];
/// assert_eq!(first_duplicate(&nulls, true), None);
/// assert_eq!(first_duplicate(&nulls, false), Some(&None));
/// ```
#[must_use]
pub fn first_duplicate<T: Element>(sequence: &[T], nullable: bool) -> Option<&T> {
    first_duplicate_position(sequence, nullable).map(|position| &sequence[position])
}

/// Returns the position of the first offending occurrence.
pub(crate) fn first_duplicate_position<T: Element>(sequence: &[T], nullable: bool) -> Option<usize> {
    sequence.iter().enumerate().position(|(position, value)| {
        !is_exempt(value, nullable) && sequence[..position].iter().any(|seen| seen == value)
    })
}

/// Keeps the first occurrence of every value and drops later repeats.
///
/// Exempt values are dropped entirely, including their first occurrence:
/// a lenient nullable construction from `[None, Some(1), None]` yields
/// `[Some(1)]`.
///
/// # Examples
///
/// ```rust
/// use unique_list::validation::dedup_keep_first;
///
/// assert_eq!(dedup_keep_first(vec![3, 1, 3, 2, 1], true), vec![3, 1, 2]);
/// assert_eq!(dedup_keep_first(vec![None, Some(1), None], true), vec![Some(1)]);
/// assert_eq!(dedup_keep_first(vec![None, Some(1), None], false), vec![None, Some(1)]);
/// ```
#[must_use]
pub fn dedup_keep_first<T: Element>(sequence: Vec<T>, nullable: bool) -> Vec<T> {
    let mut kept: Vec<T> = Vec::with_capacity(sequence.len());
    for value in sequence {
        if is_exempt(&value, nullable) || kept.contains(&value) {
            continue;
        }
        kept.push(value);
    }
    kept
}

/// Applies the construction policy shared by every "from a sequence" entry
/// point.
///
/// In strict mode the sequence is returned unchanged if it holds no
/// duplicate. In lenient mode it is passed through [`dedup_keep_first`].
///
/// # Errors
///
/// Returns [`UniqueListError::DuplicateValues`] with the first offending
/// value when `strict` is `true` and the sequence holds a duplicate.
///
/// # Examples
///
/// ```rust
/// use unique_list::UniqueListError;
/// use unique_list::validation::build_initial;
///
/// assert_eq!(build_initial(vec![1, 2, 1], false, true), Ok(vec![1, 2]));
/// assert_eq!(
///     build_initial(vec![1, 2, 1], true, true),
///     Err(UniqueListError::DuplicateValues(1))
/// );
/// ```
pub fn build_initial<T: Element>(
    mut sequence: Vec<T>,
    strict: bool,
    nullable: bool,
) -> Result<Vec<T>, UniqueListError<T>> {
    if !strict {
        return Ok(dedup_keep_first(sequence, nullable));
    }
    match first_duplicate_position(&sequence, nullable) {
        Some(position) => {
            let value = sequence.swap_remove(position);
            tracing::debug!(position, "rejecting construction source with duplicate values");
            Err(UniqueListError::DuplicateValues(value))
        }
        None => Ok(sequence),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(vec![], false)]
    #[case(vec![1], false)]
    #[case(vec![1, 2, 3], false)]
    #[case(vec![1, 2, 1], true)]
    #[case(vec![5, 5], true)]
    fn test_contains_duplicates(#[case] values: Vec<i32>, #[case] expected: bool) {
        assert_eq!(contains_duplicates(&values, true), expected);
        assert_eq!(contains_duplicates(&values, false), expected);
    }

    #[rstest]
    #[case(true, false)]
    #[case(false, true)]
    fn test_nulls_are_exempt_only_when_nullable(#[case] nullable: bool, #[case] expected: bool) {
        let values = vec![None, Some(1), None];
        assert_eq!(contains_duplicates(&values, nullable), expected);
    }

    #[rstest]
    fn test_first_duplicate_reports_later_occurrence() {
        let values = [4, 7, 9, 7, 4];
        assert_eq!(first_duplicate_position(&values, false), Some(3));
        assert_eq!(first_duplicate(&values, false), Some(&7));
    }

    #[rstest]
    fn test_first_duplicate_none_for_clean_input() {
        assert_eq!(first_duplicate(&[1, 2, 3], false), None);
        assert_eq!(first_duplicate::<i32>(&[], false), None);
    }

    #[rstest]
    fn test_dedup_keep_first() {
        assert_eq!(dedup_keep_first(vec![0, 1, 2, 0, 1], false), vec![0, 1, 2]);
    }

    #[rstest]
    fn test_dedup_drops_every_exempt_value() {
        let values = vec![None, Some(2), None, Some(2), Some(3)];
        assert_eq!(dedup_keep_first(values.clone(), true), vec![Some(2), Some(3)]);
        assert_eq!(dedup_keep_first(values, false), vec![None, Some(2), Some(3)]);
    }

    #[rstest]
    fn test_build_initial_strict_returns_input_unchanged() {
        assert_eq!(build_initial(vec![3, 1, 2], true, false), Ok(vec![3, 1, 2]));
    }

    #[rstest]
    fn test_build_initial_strict_keeps_nulls_when_nullable() {
        let values = vec![None, Some(1), None];
        assert_eq!(build_initial(values.clone(), true, true), Ok(values));
    }

    #[rstest]
    fn test_build_initial_strict_reports_first_duplicate() {
        assert_eq!(
            build_initial(vec!["x", "y", "y", "x"], true, false),
            Err(UniqueListError::DuplicateValues("y"))
        );
    }

    #[rstest]
    fn test_build_initial_lenient_deduplicates() {
        assert_eq!(build_initial(vec![2, 2, 1], false, false), Ok(vec![2, 1]));
    }
}
