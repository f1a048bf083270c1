//! The [`Element`] trait: which values count as "null".

use std::rc::Rc;
use std::sync::Arc;

/// A value that can be stored in a [`UniqueList`](super::UniqueList).
///
/// Uniqueness is decided by [`PartialEq`]. The only extra knowledge the list
/// needs is whether a value is *null*: in a nullable list, null values are
/// exempt from the uniqueness invariant and may occur any number of times.
///
/// [`Option<T>`] reports `None` as null. Every other implementation provided
/// by this crate has no null value. Custom types opt in with an empty impl,
/// or override [`Element::is_null`] when they have an absent state of their
/// own.
///
/// # Examples
///
/// ```rust
/// use unique_list::Element;
///
/// #[derive(PartialEq)]
/// struct Tag(&'static str);
///
/// impl Element for Tag {}
///
/// assert!(!Tag("a").is_null());
/// assert!(None::<i32>.is_null());
/// assert!(!Some(1).is_null());
/// ```
pub trait Element: PartialEq {
    /// Returns `true` if this value represents absence.
    #[inline]
    fn is_null(&self) -> bool {
        false
    }
}

impl<T: PartialEq> Element for Option<T> {
    #[inline]
    fn is_null(&self) -> bool {
        self.is_none()
    }
}

impl<T: Element + ?Sized> Element for &T {
    #[inline]
    fn is_null(&self) -> bool {
        T::is_null(*self)
    }
}

impl<T: Element + ?Sized> Element for Box<T> {
    #[inline]
    fn is_null(&self) -> bool {
        T::is_null(self)
    }
}

impl<T: Element + ?Sized> Element for Rc<T> {
    #[inline]
    fn is_null(&self) -> bool {
        T::is_null(self)
    }
}

impl<T: Element + ?Sized> Element for Arc<T> {
    #[inline]
    fn is_null(&self) -> bool {
        T::is_null(self)
    }
}

macro_rules! impl_element_for {
    ($($type:ty),* $(,)?) => {
        $(impl Element for $type {})*
    };
}

impl_element_for!(
    (), bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64,
    str, String,
);

impl<T: PartialEq> Element for [T] {}

impl<T: PartialEq> Element for Vec<T> {}

impl<T: PartialEq, const N: usize> Element for [T; N] {}

macro_rules! impl_element_for_tuple {
    ($($name:ident),+) => {
        impl<$($name: PartialEq),+> Element for ($($name,)+) {}
    };
}

impl_element_for_tuple!(A);
impl_element_for_tuple!(A, B);
impl_element_for_tuple!(A, B, C);
impl_element_for_tuple!(A, B, C, D);

/// Returns `true` if `value` is exempt from the uniqueness invariant.
#[inline]
pub(crate) fn is_exempt<T: Element + ?Sized>(value: &T, nullable: bool) -> bool {
    nullable && value.is_null()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_option_none_is_null() {
        assert!(None::<u8>.is_null());
        assert!(!Some(0_u8).is_null());
    }

    #[rstest]
    fn test_references_forward() {
        let absent: Option<i32> = None;
        assert!((&absent).is_null());
        assert!(Box::new(absent).is_null());
        assert!(Rc::new(absent).is_null());
        assert!(!Arc::new(Some(1)).is_null());
    }

    #[rstest]
    #[case(true, true)]
    #[case(false, false)]
    fn test_is_exempt_requires_nullable(#[case] nullable: bool, #[case] expected: bool) {
        assert_eq!(is_exempt(&None::<i32>, nullable), expected);
        assert!(!is_exempt(&Some(1), nullable));
    }

    #[rstest]
    fn test_plain_values_are_never_null() {
        assert!(!0_i32.is_null());
        assert!(!String::new().is_null());
        assert!(!"".is_null());
        assert!(!(1, 2).is_null());
        assert!(!Vec::<i32>::new().is_null());
    }
}
