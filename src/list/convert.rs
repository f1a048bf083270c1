//! Conversion of arbitrary sequences into [`UniqueList`]s.

use super::element::Element;
use super::error::UniqueListError;
use super::mode::ListMode;
use super::unique_list::UniqueList;

/// Extension trait turning any [`IntoIterator`] into a [`UniqueList`].
///
/// Implemented for every `IntoIterator` whose items are [`Element`]s.
///
/// # Examples
///
/// ```rust
/// use unique_list::{ListMode, ToUniqueList, UniqueListError};
///
/// let lenient = vec![3, 1, 3].into_unique_list();
/// assert_eq!(lenient, [3, 1]);
///
/// let strict = vec![3, 1, 3].into_unique_list_with(ListMode::strict());
/// assert_eq!(strict, Err(UniqueListError::DuplicateValues(3)));
///
/// let fixed = (0..3).into_unique_list_with(ListMode::fixed_length()).unwrap();
/// assert!(!fixed.is_growable());
/// ```
pub trait ToUniqueList: IntoIterator + Sized
where
    Self::Item: Element,
{
    /// Collects into a lenient, nullable, growable list.
    fn into_unique_list(self) -> UniqueList<Self::Item> {
        self.into_iter().collect()
    }

    /// Collects into a list with the given mode.
    ///
    /// # Errors
    ///
    /// Returns [`UniqueListError::DuplicateValues`] if the mode validates
    /// strictly and the sequence holds a duplicate.
    fn into_unique_list_with(
        self,
        mode: ListMode,
    ) -> Result<UniqueList<Self::Item>, UniqueListError<Self::Item>> {
        UniqueList::try_from_iter(self, mode)
    }
}

impl<I> ToUniqueList for I
where
    I: IntoIterator,
    I::Item: Element,
{
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_into_unique_list_is_lenient() {
        let list = ["a", "b", "a"].into_unique_list();
        assert_eq!(list, ["a", "b"]);
        assert!(!list.is_strict());
        assert!(list.is_growable());
    }

    #[rstest]
    fn test_into_unique_list_with_respects_nullable() {
        let values = vec![None, Some(1), None];

        let nullable = values
            .clone()
            .into_unique_list_with(ListMode::strict())
            .unwrap();
        assert_eq!(nullable.len(), 3);

        let not_nullable = values.into_unique_list_with(ListMode::strict().with_nullable(false));
        assert_eq!(not_nullable, Err(UniqueListError::DuplicateValues(None)));
    }
}
