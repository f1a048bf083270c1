//! Lazy concatenation view returned by
//! [`UniqueList::followed_by`](super::UniqueList::followed_by).

use std::iter::{Chain, Cloned, FusedIterator};

/// Iterator over the elements of a list followed by the incoming values
/// that survived the list's duplicate policy.
///
/// List elements are cloned only as the iterator reaches them.
#[derive(Debug, Clone)]
pub struct FollowedBy<'a, T> {
    inner: Chain<Cloned<std::slice::Iter<'a, T>>, std::vec::IntoIter<T>>,
}

impl<'a, T: Clone> FollowedBy<'a, T> {
    pub(crate) fn new(head: &'a [T], tail: Vec<T>) -> Self {
        Self {
            inner: head.iter().cloned().chain(tail),
        }
    }
}

impl<T: Clone> Iterator for FollowedBy<'_, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T: Clone> DoubleEndedIterator for FollowedBy<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T: Clone> ExactSizeIterator for FollowedBy<'_, T> {}

impl<T: Clone> FusedIterator for FollowedBy<'_, T> {}
