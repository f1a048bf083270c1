//! Ordered, mutable list with a uniqueness invariant.
//!
//! This module provides [`UniqueList`], a `Vec`-backed sequence that keeps
//! ordinary list ergonomics (indexing, insertion, range writes) while
//! guaranteeing that no value occurs twice.
//!
//! # Duplicate policies
//!
//! Each family of mutation resolves a would-be duplicate differently:
//!
//! | Operation                    | Strict                | Lenient                         |
//! |------------------------------|-----------------------|---------------------------------|
//! | `push`                       | `DuplicateValue`      | value dropped                   |
//! | `push_all`                   | `DuplicateValue`      | duplicates filtered out         |
//! | `insert`                     | `DuplicateValue`      | existing occurrence moved       |
//! | `insert_all`                 | `DuplicateValue(s)`   | existing occurrences moved      |
//! | `set`, `set_all`, `set_range`, `replace_range` | `DuplicateValue` unless the result is clean | same |
//! | `fill_range`                 | `Unsupported`         | `Unsupported`                   |
//! | `followed_by`, `concat`, `+` | `DuplicateValue`      | duplicates filtered out         |
//!
//! Positional overwrites ignore the strict switch: they are checked against
//! the state the list would have after the write, so permuting values that
//! are already present is allowed.
//!
//! # Null values
//!
//! In a nullable list, values whose [`Element::is_null`] returns `true` are
//! exempt from the invariant and may occur any number of times.
//!
//! # Examples
//!
//! ```rust
//! use unique_list::{ListMode, UniqueList, UniqueListError};
//!
//! let mut list: UniqueList<i32> = UniqueList::new();
//! list.push(1).unwrap();
//! list.push(2).unwrap();
//! list.push(1).unwrap(); // silently dropped
//! assert_eq!(list, [1, 2]);
//!
//! // Lenient insert moves an existing value to the new position.
//! list.insert(0, 2).unwrap();
//! assert_eq!(list, [2, 1]);
//!
//! // Strict lists refuse duplicates and stay unchanged.
//! let mut strict = UniqueList::try_from_iter([0, 1, 2], ListMode::strict()).unwrap();
//! assert_eq!(strict.insert(1, 2), Err(UniqueListError::DuplicateValue(2)));
//! assert_eq!(strict, [0, 1, 2]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Deref};

use super::element::{Element, is_exempt};
use super::error::{RangeError, UniqueListError};
use super::followed_by::FollowedBy;
use super::mode::ListMode;
use super::validation::{build_initial, contains_duplicates, dedup_keep_first, first_duplicate};

const UNMODIFIABLE_MESSAGE: &str = "cannot modify an unmodifiable list";
const FIXED_LENGTH_MESSAGE: &str = "cannot change the length of a fixed-length list";
const FILL_RANGE_MESSAGE: &str = "fill_range would repeat a single value across a range";

/// An ordered, indexable list whose elements are unique.
///
/// The backing `Vec` is private; the list only hands out shared views
/// (slices, iterators), so every mutation goes through a method that
/// enforces the invariant.
///
/// # Type Parameters
///
/// * `T` - The element type. Uniqueness is decided by `PartialEq`; nullability
///   by [`Element`].
///
/// # Examples
///
/// ```rust
/// use unique_list::UniqueList;
///
/// let list: UniqueList<&str> = ["a", "b", "a", "c"].into_iter().collect();
/// assert_eq!(list, ["a", "b", "c"]);
/// assert_eq!(list[1], "b");
/// ```
#[derive(Clone)]
pub struct UniqueList<T> {
    elements: Vec<T>,
    mode: ListMode,
}

impl<T> UniqueList<T> {
    /// Creates an empty lenient, nullable, growable list.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self::with_mode(ListMode::lenient())
    }

    /// Creates an empty strict, nullable, growable list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unique_list::UniqueList;
    ///
    /// let list: UniqueList<i32> = UniqueList::strict();
    /// assert!(list.is_strict());
    /// assert!(list.is_growable());
    /// ```
    #[inline]
    #[must_use]
    pub const fn strict() -> Self {
        Self::with_mode(ListMode::strict())
    }

    /// Creates an empty lenient, nullable, fixed-length list.
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self::with_mode(ListMode::fixed_length())
    }

    /// Creates an empty list with the given mode.
    #[inline]
    #[must_use]
    pub const fn with_mode(mode: ListMode) -> Self {
        Self {
            elements: Vec::new(),
            mode,
        }
    }

    /// Creates an empty lenient, nullable, growable list with room for
    /// `capacity` elements.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
            mode: ListMode::lenient(),
        }
    }

    /// Returns the mode this list was constructed with.
    #[inline]
    #[must_use]
    pub const fn mode(&self) -> ListMode {
        self.mode
    }

    /// Whether duplicate insertions fail.
    #[inline]
    #[must_use]
    pub const fn is_strict(&self) -> bool {
        self.mode.is_strict()
    }

    /// Whether null values are exempt from uniqueness.
    #[inline]
    #[must_use]
    pub const fn is_nullable(&self) -> bool {
        self.mode.is_nullable()
    }

    /// Whether the length may change.
    #[inline]
    #[must_use]
    pub const fn is_growable(&self) -> bool {
        self.mode.is_growable()
    }

    /// Whether the list accepts mutations.
    #[inline]
    #[must_use]
    pub const fn is_modifiable(&self) -> bool {
        self.mode.is_modifiable()
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the list holds no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the number of elements the list can hold without
    /// reallocating.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.elements.capacity()
    }

    /// Returns the elements as a shared slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Returns an iterator over references to the elements, in order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Returns the element at `index`, if any.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }

    /// Returns the first element, if any.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.elements.first()
    }

    /// Returns the last element, if any.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.elements.last()
    }

    /// Consumes the list and returns the backing `Vec`.
    #[inline]
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }

    fn ensure_modifiable(&self) -> Result<(), UniqueListError<T>> {
        if self.mode.is_modifiable() {
            Ok(())
        } else {
            tracing::debug!("rejecting mutation of an unmodifiable list");
            Err(UniqueListError::Unsupported(UNMODIFIABLE_MESSAGE))
        }
    }

    fn ensure_growable(&self) -> Result<(), UniqueListError<T>> {
        self.ensure_modifiable()?;
        if self.mode.is_growable() {
            Ok(())
        } else {
            tracing::debug!("rejecting length change of a fixed-length list");
            Err(UniqueListError::Unsupported(FIXED_LENGTH_MESSAGE))
        }
    }
}

impl<T: Element> UniqueList<T> {
    /// Builds a list from `iterable` with the given mode.
    ///
    /// A lenient growable list keeps the first occurrence of every value and
    /// drops later repeats (and, when nullable, every null). Strict,
    /// fixed-length and unmodifiable lists keep the source as is.
    ///
    /// # Errors
    ///
    /// Returns [`UniqueListError::DuplicateValues`] if the mode validates
    /// strictly and the source holds a duplicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unique_list::{ListMode, UniqueList, UniqueListError};
    ///
    /// let lenient = UniqueList::try_from_iter([1, 2, 1], ListMode::lenient()).unwrap();
    /// assert_eq!(lenient, [1, 2]);
    ///
    /// let strict = UniqueList::try_from_iter([1, 2, 1], ListMode::strict());
    /// assert_eq!(strict.unwrap_err(), UniqueListError::DuplicateValues(1));
    /// ```
    pub fn try_from_iter<I>(iterable: I, mode: ListMode) -> Result<Self, UniqueListError<T>>
    where
        I: IntoIterator<Item = T>,
    {
        let elements = build_initial(
            iterable.into_iter().collect(),
            mode.validates_strictly(),
            mode.is_nullable(),
        )?;
        Ok(Self { elements, mode })
    }

    /// Builds a list of `length` values produced by `generator` from each
    /// index.
    ///
    /// # Errors
    ///
    /// Returns [`UniqueListError::DuplicateValues`] if the mode validates
    /// strictly and two generated values are equal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unique_list::{ListMode, UniqueList};
    ///
    /// let squares = UniqueList::generate(4, |index| index * index, ListMode::strict()).unwrap();
    /// assert_eq!(squares, [0, 1, 4, 9]);
    ///
    /// let halves = UniqueList::generate(4, |index| index / 2, ListMode::lenient()).unwrap();
    /// assert_eq!(halves, [0, 1]);
    /// ```
    pub fn generate<F>(length: usize, generator: F, mode: ListMode) -> Result<Self, UniqueListError<T>>
    where
        F: FnMut(usize) -> T,
    {
        Self::try_from_iter((0..length).map(generator), mode)
    }

    /// Builds a list that rejects every mutation.
    ///
    /// # Errors
    ///
    /// Returns [`UniqueListError::DuplicateValues`] if the source holds a
    /// duplicate (nulls excepted when `nullable`).
    pub fn unmodifiable<I>(iterable: I, nullable: bool) -> Result<Self, UniqueListError<T>>
    where
        I: IntoIterator<Item = T>,
    {
        Self::try_from_iter(iterable, ListMode::unmodifiable(nullable))
    }

    /// Returns `true` if the list contains `value`.
    #[inline]
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.elements.contains(value)
    }

    /// Returns the position of `value`, if present.
    #[inline]
    #[must_use]
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.elements.iter().position(|element| element == value)
    }

    /// Returns the position of the last occurrence of `value`, if present.
    ///
    /// Differs from [`UniqueList::index_of`] only for repeated nulls.
    #[inline]
    #[must_use]
    pub fn last_index_of(&self, value: &T) -> Option<usize> {
        self.elements.iter().rposition(|element| element == value)
    }

    /// Position of `value` if it is subject to the invariant and present.
    fn existing_position(&self, value: &T) -> Option<usize> {
        if is_exempt(value, self.mode.is_nullable()) {
            None
        } else {
            self.index_of(value)
        }
    }

    /// Appends `value`.
    ///
    /// Returns `Ok(true)` if the value was appended and `Ok(false)` if a
    /// lenient list dropped it as a duplicate.
    ///
    /// # Errors
    ///
    /// - [`UniqueListError::Unsupported`] if the list is not growable.
    /// - [`UniqueListError::DuplicateValue`] if the list is strict and
    ///   already contains `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unique_list::UniqueList;
    ///
    /// let mut list = UniqueList::new();
    /// assert_eq!(list.push("a"), Ok(true));
    /// assert_eq!(list.push("a"), Ok(false));
    /// assert_eq!(list.len(), 1);
    /// ```
    pub fn push(&mut self, value: T) -> Result<bool, UniqueListError<T>> {
        self.ensure_growable()?;
        if self.existing_position(&value).is_some() {
            if self.mode.is_strict() {
                tracing::debug!(operation = "push", "rejecting duplicate value");
                return Err(UniqueListError::DuplicateValue(value));
            }
            tracing::trace!(operation = "push", "dropping duplicate value");
            return Ok(false);
        }
        self.elements.push(value);
        Ok(true)
    }

    /// Appends every value of `iterable` that is not already present.
    ///
    /// Returns the number of values appended. A lenient list filters out
    /// values already in the list, including values appended earlier by the
    /// same call.
    ///
    /// # Errors
    ///
    /// - [`UniqueListError::Unsupported`] if the list is not growable.
    /// - [`UniqueListError::DuplicateValue`] if the list is strict and an
    ///   incoming value is already present or repeats within the batch.
    ///   Nothing is appended in that case.
    pub fn push_all<I>(&mut self, iterable: I) -> Result<usize, UniqueListError<T>>
    where
        I: IntoIterator<Item = T>,
    {
        self.ensure_growable()?;
        self.append_batch(iterable.into_iter().collect(), "push_all")
    }

    fn append_batch(
        &mut self,
        mut batch: Vec<T>,
        operation: &'static str,
    ) -> Result<usize, UniqueListError<T>> {
        let nullable = self.mode.is_nullable();
        if self.mode.is_strict() {
            let offending = batch.iter().enumerate().position(|(position, value)| {
                !is_exempt(value, nullable)
                    && (self.elements.contains(value) || batch[..position].contains(value))
            });
            if let Some(position) = offending {
                tracing::debug!(operation, position, "rejecting batch with duplicate value");
                return Err(UniqueListError::DuplicateValue(batch.swap_remove(position)));
            }
            let appended = batch.len();
            self.elements.extend(batch);
            return Ok(appended);
        }

        let before = self.elements.len();
        let incoming = batch.len();
        for value in batch {
            if is_exempt(&value, nullable) || !self.elements.contains(&value) {
                self.elements.push(value);
            }
        }
        let appended = self.elements.len() - before;
        if appended < incoming {
            tracing::trace!(operation, dropped = incoming - appended, "filtered duplicate values");
        }
        Ok(appended)
    }

    /// Inserts `value` at `index`, shifting later elements up.
    ///
    /// If a lenient list already contains `value`, the existing occurrence is
    /// removed first and the value is inserted at `index` of the shortened
    /// list (or appended, if `index` is now past the end).
    ///
    /// # Errors
    ///
    /// - [`UniqueListError::Unsupported`] if the list is not growable.
    /// - [`UniqueListError::Range`] if `index > len`.
    /// - [`UniqueListError::DuplicateValue`] if the list is strict and
    ///   already contains `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unique_list::UniqueList;
    ///
    /// let mut list: UniqueList<i32> = vec![0, 1, 2].into();
    /// list.insert(0, 2).unwrap();
    /// assert_eq!(list, [2, 0, 1]);
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), UniqueListError<T>> {
        self.ensure_growable()?;
        check_insert_index(index, self.len())?;
        if let Some(existing) = self.existing_position(&value) {
            if self.mode.is_strict() {
                tracing::debug!(operation = "insert", index, "rejecting duplicate value");
                return Err(UniqueListError::DuplicateValue(value));
            }
            tracing::trace!(operation = "insert", from = existing, to = index, "moving existing value");
            self.elements.remove(existing);
        }
        let index = index.min(self.elements.len());
        self.elements.insert(index, value);
        Ok(())
    }

    /// Inserts every value of `iterable` at `index`, preserving batch order.
    ///
    /// The batch is first resolved on its own with the construction policy
    /// (see [`build_initial`]). A lenient list then removes its existing
    /// occurrences of batch values before inserting.
    ///
    /// # Errors
    ///
    /// - [`UniqueListError::Unsupported`] if the list is not growable.
    /// - [`UniqueListError::Range`] if `index > len`.
    /// - [`UniqueListError::DuplicateValues`] if the list is strict and the
    ///   batch repeats a value.
    /// - [`UniqueListError::DuplicateValue`] if the list is strict and a
    ///   batch value is already present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unique_list::UniqueList;
    ///
    /// let mut list: UniqueList<i32> = vec![0, 1, 2, 3].into();
    /// list.insert_all(1, [3, 9, 9]).unwrap();
    /// assert_eq!(list, [0, 3, 9, 1, 2]);
    /// ```
    pub fn insert_all<I>(&mut self, index: usize, iterable: I) -> Result<(), UniqueListError<T>>
    where
        I: IntoIterator<Item = T>,
    {
        self.ensure_growable()?;
        check_insert_index(index, self.len())?;
        let mut batch = build_initial(
            iterable.into_iter().collect(),
            self.mode.is_strict(),
            self.mode.is_nullable(),
        )?;

        if self.mode.is_strict() {
            let offending = batch
                .iter()
                .position(|value| self.existing_position(value).is_some());
            if let Some(position) = offending {
                tracing::debug!(operation = "insert_all", index, "rejecting duplicate value");
                return Err(UniqueListError::DuplicateValue(batch.swap_remove(position)));
            }
        } else {
            for value in &batch {
                if let Some(existing) = self.existing_position(value) {
                    tracing::trace!(operation = "insert_all", from = existing, "moving existing value");
                    self.elements.remove(existing);
                }
            }
        }

        let index = index.min(self.elements.len());
        self.elements.splice(index..index, batch);
        self.debug_assert_unique();
        Ok(())
    }

    /// Returns the batch position of the value that would break the
    /// invariant if `batch` replaced `replaced` elements starting at
    /// `start`.
    ///
    /// The write is applied to a scratch view of references; the live list
    /// is not touched.
    fn offending_write(&self, start: usize, replaced: usize, batch: &[T]) -> Option<usize> {
        let scratch: Vec<&T> = self.elements[..start]
            .iter()
            .chain(batch)
            .chain(&self.elements[start + replaced..])
            .collect();
        let offending = first_duplicate(&scratch, self.mode.is_nullable())?;
        // Existing elements are unique among themselves, so one side of the
        // collision always comes from the batch.
        batch.iter().position(|value| value == *offending)
    }

    fn reject_write(
        mut batch: Vec<T>,
        position: usize,
        operation: &'static str,
    ) -> UniqueListError<T> {
        tracing::debug!(operation, position, "rejecting write that leaves a duplicate");
        UniqueListError::DuplicateValue(batch.swap_remove(position))
    }

    /// Replaces the element at `index` with `value`, returning the old
    /// element.
    ///
    /// Succeeds whenever the resulting list is free of duplicates, which
    /// includes writing a value over itself.
    ///
    /// # Errors
    ///
    /// - [`UniqueListError::Unsupported`] if the list is unmodifiable.
    /// - [`UniqueListError::Range`] if `index >= len`.
    /// - [`UniqueListError::DuplicateValue`] if `value` is present at
    ///   another position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unique_list::{UniqueList, UniqueListError};
    ///
    /// let mut list: UniqueList<i32> = vec![0, 1, 2].into();
    /// assert_eq!(list.set(0, 5), Ok(0));
    /// assert_eq!(list.set(1, 1), Ok(1));
    /// assert_eq!(list.set(2, 5), Err(UniqueListError::DuplicateValue(5)));
    /// assert_eq!(list, [5, 1, 2]);
    /// ```
    pub fn set(&mut self, index: usize, value: T) -> Result<T, UniqueListError<T>> {
        self.ensure_modifiable()?;
        check_index(index, self.len())?;
        if self
            .offending_write(index, 1, std::slice::from_ref(&value))
            .is_some()
        {
            return Err(Self::reject_write(vec![value], 0, "set"));
        }
        Ok(std::mem::replace(&mut self.elements[index], value))
    }

    /// Replaces the first element with `value`.
    ///
    /// # Errors
    ///
    /// As [`UniqueList::set`]; [`UniqueListError::Range`] on an empty list.
    pub fn set_first(&mut self, value: T) -> Result<T, UniqueListError<T>> {
        self.set(0, value)
    }

    /// Replaces the last element with `value`.
    ///
    /// # Errors
    ///
    /// As [`UniqueList::set`]; [`UniqueListError::Range`] on an empty list.
    pub fn set_last(&mut self, value: T) -> Result<T, UniqueListError<T>> {
        self.set(self.len().saturating_sub(1), value)
    }

    /// Overwrites the elements starting at `index` with the values of
    /// `iterable`.
    ///
    /// # Errors
    ///
    /// - [`UniqueListError::Unsupported`] if the list is unmodifiable.
    /// - [`UniqueListError::Range`] if the values do not fit before the end.
    /// - [`UniqueListError::DuplicateValue`] if the written list would hold a
    ///   duplicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unique_list::{UniqueList, UniqueListError};
    ///
    /// let mut list: UniqueList<i32> = (0..5).collect();
    /// assert_eq!(list.set_all(0, [1, 1]), Err(UniqueListError::DuplicateValue(1)));
    /// list.set_all(3, [4, 3]).unwrap();
    /// assert_eq!(list, [0, 1, 2, 4, 3]);
    /// ```
    pub fn set_all<I>(&mut self, index: usize, iterable: I) -> Result<(), UniqueListError<T>>
    where
        I: IntoIterator<Item = T>,
    {
        self.ensure_modifiable()?;
        let batch: Vec<T> = iterable.into_iter().collect();
        let end = index.saturating_add(batch.len());
        check_range(index, end, self.len())?;
        self.commit_write(index, end, batch, "set_all")
    }

    /// Overwrites `[start, end)` with values of `iterable`, after skipping
    /// `skip` of them. Extra values are ignored.
    ///
    /// # Errors
    ///
    /// - [`UniqueListError::Unsupported`] if the list is unmodifiable.
    /// - [`UniqueListError::Range`] if the window is invalid or the source
    ///   runs out.
    /// - [`UniqueListError::DuplicateValue`] if the written list would hold a
    ///   duplicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unique_list::UniqueList;
    ///
    /// let mut list: UniqueList<i32> = (0..5).collect();
    /// list.set_range(0, 2, [1, 0], 0).unwrap();
    /// assert_eq!(list, [1, 0, 2, 3, 4]);
    /// ```
    pub fn set_range<I>(
        &mut self,
        start: usize,
        end: usize,
        iterable: I,
        skip: usize,
    ) -> Result<(), UniqueListError<T>>
    where
        I: IntoIterator<Item = T>,
    {
        self.ensure_modifiable()?;
        check_range(start, end, self.len())?;
        let required = end - start;
        let batch: Vec<T> = iterable.into_iter().skip(skip).take(required).collect();
        if batch.len() < required {
            return Err(RangeError::Source {
                required,
                available: batch.len(),
            }
            .into());
        }
        self.commit_write(start, end, batch, "set_range")
    }

    /// Replaces `[start, end)` with the values of `iterable`, which may
    /// have a different length.
    ///
    /// # Errors
    ///
    /// - [`UniqueListError::Unsupported`] if the list is unmodifiable, or if
    ///   it is fixed-length and the replacement changes the length.
    /// - [`UniqueListError::Range`] if the window is invalid.
    /// - [`UniqueListError::DuplicateValue`] if the written list would hold a
    ///   duplicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unique_list::UniqueList;
    ///
    /// let mut list: UniqueList<i32> = (0..5).collect();
    /// list.replace_range(1, 4, [3, 1]).unwrap();
    /// assert_eq!(list, [0, 3, 1, 4]);
    /// ```
    pub fn replace_range<I>(
        &mut self,
        start: usize,
        end: usize,
        iterable: I,
    ) -> Result<(), UniqueListError<T>>
    where
        I: IntoIterator<Item = T>,
    {
        self.ensure_modifiable()?;
        check_range(start, end, self.len())?;
        let batch: Vec<T> = iterable.into_iter().collect();
        if batch.len() != end - start {
            self.ensure_growable()?;
        }
        self.commit_write(start, end, batch, "replace_range")
    }

    fn commit_write(
        &mut self,
        start: usize,
        end: usize,
        batch: Vec<T>,
        operation: &'static str,
    ) -> Result<(), UniqueListError<T>> {
        if let Some(position) = self.offending_write(start, end - start, &batch) {
            return Err(Self::reject_write(batch, position, operation));
        }
        self.elements.splice(start..end, batch);
        self.debug_assert_unique();
        Ok(())
    }

    /// Always fails: filling a range with one value cannot keep the list
    /// unique.
    ///
    /// # Errors
    ///
    /// Always returns [`UniqueListError::Unsupported`].
    pub fn fill_range(
        &mut self,
        _start: usize,
        _end: usize,
        _value: T,
    ) -> Result<(), UniqueListError<T>> {
        tracing::debug!("rejecting fill_range");
        Err(UniqueListError::Unsupported(FILL_RANGE_MESSAGE))
    }

    /// Removes the first occurrence of `value`. Returns whether it was found.
    ///
    /// # Errors
    ///
    /// [`UniqueListError::Unsupported`] if the list is not growable.
    pub fn remove(&mut self, value: &T) -> Result<bool, UniqueListError<T>> {
        self.ensure_growable()?;
        Ok(self
            .index_of(value)
            .map(|position| self.elements.remove(position))
            .is_some())
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Errors
    ///
    /// - [`UniqueListError::Unsupported`] if the list is not growable.
    /// - [`UniqueListError::Range`] if `index >= len`.
    pub fn remove_at(&mut self, index: usize) -> Result<T, UniqueListError<T>> {
        self.ensure_growable()?;
        check_index(index, self.len())?;
        Ok(self.elements.remove(index))
    }

    /// Removes and returns the last element, if any.
    ///
    /// # Errors
    ///
    /// [`UniqueListError::Unsupported`] if the list is not growable.
    pub fn pop(&mut self) -> Result<Option<T>, UniqueListError<T>> {
        self.ensure_growable()?;
        Ok(self.elements.pop())
    }

    /// Removes the elements in `[start, end)`.
    ///
    /// # Errors
    ///
    /// - [`UniqueListError::Unsupported`] if the list is not growable.
    /// - [`UniqueListError::Range`] if the window is invalid.
    pub fn remove_range(&mut self, start: usize, end: usize) -> Result<(), UniqueListError<T>> {
        self.ensure_growable()?;
        check_range(start, end, self.len())?;
        self.elements.drain(start..end);
        Ok(())
    }

    /// Keeps only the elements for which `predicate` returns `true`.
    ///
    /// # Errors
    ///
    /// [`UniqueListError::Unsupported`] if the list is not growable.
    pub fn retain<F>(&mut self, predicate: F) -> Result<(), UniqueListError<T>>
    where
        F: FnMut(&T) -> bool,
    {
        self.ensure_growable()?;
        self.elements.retain(predicate);
        Ok(())
    }

    /// Shortens the list to `length` elements. No effect if the list is
    /// already shorter.
    ///
    /// # Errors
    ///
    /// [`UniqueListError::Unsupported`] if the list is not growable.
    pub fn truncate(&mut self, length: usize) -> Result<(), UniqueListError<T>> {
        self.ensure_growable()?;
        self.elements.truncate(length);
        Ok(())
    }

    /// Removes every element.
    ///
    /// # Errors
    ///
    /// [`UniqueListError::Unsupported`] if the list is not growable.
    pub fn clear(&mut self) -> Result<(), UniqueListError<T>> {
        self.ensure_growable()?;
        self.elements.clear();
        Ok(())
    }

    /// Swaps the elements at positions `first` and `second`.
    ///
    /// # Errors
    ///
    /// - [`UniqueListError::Unsupported`] if the list is unmodifiable.
    /// - [`UniqueListError::Range`] if either index is out of bounds.
    pub fn swap(&mut self, first: usize, second: usize) -> Result<(), UniqueListError<T>> {
        self.ensure_modifiable()?;
        check_index(first, self.len())?;
        check_index(second, self.len())?;
        self.elements.swap(first, second);
        Ok(())
    }

    /// Reverses the order of the elements.
    ///
    /// # Errors
    ///
    /// [`UniqueListError::Unsupported`] if the list is unmodifiable.
    pub fn reverse(&mut self) -> Result<(), UniqueListError<T>> {
        self.ensure_modifiable()?;
        self.elements.reverse();
        Ok(())
    }

    /// Sorts the elements.
    ///
    /// # Errors
    ///
    /// [`UniqueListError::Unsupported`] if the list is unmodifiable.
    pub fn sort(&mut self) -> Result<(), UniqueListError<T>>
    where
        T: Ord,
    {
        self.sort_by(T::cmp)
    }

    /// Sorts the elements with a comparator.
    ///
    /// # Errors
    ///
    /// [`UniqueListError::Unsupported`] if the list is unmodifiable.
    pub fn sort_by<F>(&mut self, compare: F) -> Result<(), UniqueListError<T>>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.ensure_modifiable()?;
        self.elements.sort_by(compare);
        Ok(())
    }

    /// Sorts the elements by a key extraction function.
    ///
    /// # Errors
    ///
    /// [`UniqueListError::Unsupported`] if the list is unmodifiable.
    pub fn sort_by_key<K, F>(&mut self, key: F) -> Result<(), UniqueListError<T>>
    where
        F: FnMut(&T) -> K,
        K: Ord,
    {
        self.ensure_modifiable()?;
        self.elements.sort_by_key(key);
        Ok(())
    }

    /// Returns a lazy view of this list followed by the values of
    /// `iterable`.
    ///
    /// A lenient list leaves out incoming values it already contains.
    ///
    /// # Errors
    ///
    /// [`UniqueListError::DuplicateValue`] if the list is strict and an
    /// incoming value is already present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unique_list::UniqueList;
    ///
    /// let list: UniqueList<i32> = vec![0, 1, 2].into();
    /// let view = list.followed_by([1, 2, 3]).unwrap();
    /// assert_eq!(view.collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    /// ```
    pub fn followed_by<I>(&self, iterable: I) -> Result<FollowedBy<'_, T>, UniqueListError<T>>
    where
        I: IntoIterator<Item = T>,
        T: Clone,
    {
        let mut incoming: Vec<T> = iterable.into_iter().collect();
        if self.mode.is_strict() {
            let offending = incoming
                .iter()
                .position(|value| self.existing_position(value).is_some());
            if let Some(position) = offending {
                tracing::debug!(operation = "followed_by", position, "rejecting duplicate value");
                return Err(UniqueListError::DuplicateValue(incoming.swap_remove(position)));
            }
        } else {
            incoming.retain(|value| self.existing_position(value).is_none());
        }
        Ok(FollowedBy::new(&self.elements, incoming))
    }

    /// Returns a new list holding this list followed by the values of
    /// `iterable`, with this list's mode.
    ///
    /// # Errors
    ///
    /// [`UniqueListError::DuplicateValue`] if the list is strict and an
    /// incoming value is already present or repeats within `iterable`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unique_list::UniqueList;
    ///
    /// let left: UniqueList<i32> = vec![0, 1, 2].into();
    /// let right: UniqueList<i32> = vec![1, 2, 3].into();
    /// assert_eq!((&left + &right).unwrap(), [0, 1, 2, 3]);
    /// ```
    pub fn concat<I>(&self, iterable: I) -> Result<Self, UniqueListError<T>>
    where
        I: IntoIterator<Item = T>,
        T: Clone,
    {
        self.clone().into_concat(iterable)
    }

    fn into_concat<I>(mut self, iterable: I) -> Result<Self, UniqueListError<T>>
    where
        I: IntoIterator<Item = T>,
    {
        self.append_batch(iterable.into_iter().collect(), "concat")?;
        Ok(self)
    }

    /// Copies `[start, end)` into a new lenient, growable list that keeps
    /// this list's nullability.
    ///
    /// # Errors
    ///
    /// [`UniqueListError::Range`] if the window is invalid.
    pub fn sublist(&self, start: usize, end: usize) -> Result<Self, UniqueListError<T>>
    where
        T: Clone,
    {
        check_range(start, end, self.len())?;
        Ok(Self {
            elements: self.elements[start..end].to_vec(),
            mode: ListMode::lenient().with_nullable(self.mode.is_nullable()),
        })
    }

    /// Converts every element into `U`, keeping this list's mode.
    ///
    /// Conversion may map distinct values onto equal ones; the converted
    /// values go through the construction policy again.
    ///
    /// # Errors
    ///
    /// [`UniqueListError::DuplicateValues`] if the mode validates strictly
    /// and two converted values are equal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use unique_list::UniqueList;
    ///
    /// let list: UniqueList<u8> = vec![1, 2, 3].into();
    /// let widened: UniqueList<u32> = list.cast().unwrap();
    /// assert_eq!(widened, [1, 2, 3]);
    /// ```
    pub fn cast<U>(self) -> Result<UniqueList<U>, UniqueListError<U>>
    where
        U: Element + From<T>,
    {
        UniqueList::try_from_iter(self.elements.into_iter().map(U::from), self.mode)
    }

    #[inline]
    fn debug_assert_unique(&self) {
        debug_assert!(
            !contains_duplicates(&self.elements, self.mode.is_nullable()),
            "{UNIQUE_INVARIANT_PANIC_MESSAGE}"
        );
    }
}

const UNIQUE_INVARIANT_PANIC_MESSAGE: &str = "UniqueList must never hold two equal non-null values";

const fn check_index(index: usize, length: usize) -> Result<(), RangeError> {
    if index < length {
        Ok(())
    } else {
        Err(RangeError::Index { index, length })
    }
}

const fn check_insert_index(index: usize, length: usize) -> Result<(), RangeError> {
    if index <= length {
        Ok(())
    } else {
        Err(RangeError::Index { index, length })
    }
}

const fn check_range(start: usize, end: usize, length: usize) -> Result<(), RangeError> {
    if start <= end && end <= length {
        Ok(())
    } else {
        Err(RangeError::Range { start, end, length })
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for UniqueList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for UniqueList<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        &self.elements
    }
}

impl<T> AsRef<[T]> for UniqueList<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.elements
    }
}

impl<T: fmt::Debug> fmt::Debug for UniqueList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.elements.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for UniqueList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in &self.elements {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

impl<T: PartialEq> PartialEq for UniqueList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.elements == other.elements
    }
}

impl<T: Eq> Eq for UniqueList<T> {}

impl<T: PartialEq> PartialEq<[T]> for UniqueList<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.elements.as_slice() == other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for UniqueList<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.elements.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq> PartialEq<Vec<T>> for UniqueList<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        &self.elements == other
    }
}

impl<T: PartialEq> Element for UniqueList<T> {}

impl<T: Hash> Hash for UniqueList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.elements.hash(state);
    }
}

impl<T: Element + Clone> Add<&UniqueList<T>> for &UniqueList<T> {
    type Output = Result<UniqueList<T>, UniqueListError<T>>;

    fn add(self, other: &UniqueList<T>) -> Self::Output {
        self.concat(other.iter().cloned())
    }
}

impl<T: Element> Add for UniqueList<T> {
    type Output = Result<Self, UniqueListError<T>>;

    fn add(self, other: Self) -> Self::Output {
        self.into_concat(other.elements)
    }
}

impl<T> IntoIterator for UniqueList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a UniqueList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<T: Element> FromIterator<T> for UniqueList<T> {
    /// Collects into a lenient, nullable, growable list, keeping the first
    /// occurrence of every value and dropping nulls.
    fn from_iter<I: IntoIterator<Item = T>>(iterable: I) -> Self {
        let mode = ListMode::lenient();
        Self {
            elements: dedup_keep_first(iterable.into_iter().collect(), mode.is_nullable()),
            mode,
        }
    }
}

impl<T: Element> From<Vec<T>> for UniqueList<T> {
    #[inline]
    fn from(elements: Vec<T>) -> Self {
        elements.into_iter().collect()
    }
}

impl<T: Element, const N: usize> From<[T; N]> for UniqueList<T> {
    #[inline]
    fn from(elements: [T; N]) -> Self {
        elements.into_iter().collect()
    }
}

impl<T> From<UniqueList<T>> for Vec<T> {
    #[inline]
    fn from(list: UniqueList<T>) -> Self {
        list.elements
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for UniqueList<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in &self.elements {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct UniqueListVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> UniqueListVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for UniqueListVisitor<T>
where
    T: serde::Deserialize<'de> + Element,
{
    type Value = UniqueList<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut list = UniqueList::with_capacity(capacity);
        while let Some(element) = seq.next_element()? {
            if list.existing_position(&element).is_none() {
                list.elements.push(element);
            }
        }
        Ok(list)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for UniqueList<T>
where
    T: serde::Deserialize<'de> + Element,
{
    /// Deserializes a sequence into a lenient list. Repeated values are
    /// dropped; nulls are kept, so a serialized list reads back unchanged.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(UniqueListVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn lenient(values: &[i32]) -> UniqueList<i32> {
        UniqueList::try_from_iter(values.iter().copied(), ListMode::lenient()).unwrap()
    }

    fn strict(values: &[i32]) -> UniqueList<i32> {
        UniqueList::try_from_iter(values.iter().copied(), ListMode::strict()).unwrap()
    }

    #[rstest]
    fn test_new_creates_empty_growable_list() {
        let list: UniqueList<i32> = UniqueList::new();
        assert!(list.is_empty());
        assert!(list.is_growable());
        assert!(!list.is_strict());
        assert!(list.is_nullable());
    }

    #[rstest]
    fn test_empty_is_fixed_length() {
        let mut list: UniqueList<i32> = UniqueList::empty();
        assert!(!list.is_growable());
        assert_eq!(
            list.push(1),
            Err(UniqueListError::Unsupported(FIXED_LENGTH_MESSAGE))
        );
    }

    #[rstest]
    fn test_offending_write_points_into_batch() {
        let list = lenient(&[0, 1, 2, 3]);
        assert_eq!(list.offending_write(0, 2, &[3, 9]), Some(0));
        assert_eq!(list.offending_write(0, 2, &[1, 0]), None);
        assert_eq!(list.offending_write(3, 1, &[7, 7]), Some(0));
    }

    #[rstest]
    fn test_offending_write_ignores_nulls_when_nullable() {
        let list = UniqueList::try_from_iter([None, Some(1), None], ListMode::strict()).unwrap();
        assert_eq!(list.offending_write(1, 1, &[None]), None);

        let list =
            UniqueList::try_from_iter([None, Some(1)], ListMode::strict().with_nullable(false))
                .unwrap();
        assert_eq!(list.offending_write(1, 1, &[None]), Some(0));
    }

    #[rstest]
    #[case(0, 3, true)]
    #[case(3, 3, true)]
    #[case(2, 1, false)]
    #[case(0, 4, false)]
    fn test_check_range(#[case] start: usize, #[case] end: usize, #[case] valid: bool) {
        assert_eq!(check_range(start, end, 3).is_ok(), valid);
    }

    #[rstest]
    fn test_insert_past_shortened_end_appends() {
        let mut list = lenient(&[0, 1, 2]);
        list.insert(3, 0).unwrap();
        assert_eq!(list, [1, 2, 0]);
    }

    #[rstest]
    fn test_strict_insert_all_leaves_list_unchanged() {
        let mut list = strict(&[0, 1, 2]);
        assert_eq!(
            list.insert_all(1, [7, 2]),
            Err(UniqueListError::DuplicateValue(2))
        );
        assert_eq!(list, [0, 1, 2]);
    }

    #[rstest]
    fn test_display() {
        assert_eq!(lenient(&[1, 2, 3]).to_string(), "[1, 2, 3]");
        assert_eq!(lenient(&[]).to_string(), "[]");
    }

    #[rstest]
    fn test_debug() {
        assert_eq!(format!("{:?}", lenient(&[4, 5])), "[4, 5]");
    }

    #[rstest]
    fn test_equality_ignores_mode() {
        assert_eq!(lenient(&[1, 2]), strict(&[1, 2]));
        assert_ne!(lenient(&[1, 2]), lenient(&[2, 1]));
    }
}
