//! Ordered lists with a uniqueness invariant.
//!
//! This module provides:
//!
//! - [`UniqueList`]: a mutable, indexable list that never holds two equal
//!   values
//! - [`ListMode`]: the strict / nullable / growable switches of a list
//! - [`Element`]: what counts as a null value
//! - [`UniqueListError`]: the failures of list operations
//! - [`ToUniqueList`]: collects any sequence into a list
//! - [`validation`]: the duplicate-detection helpers behind construction
//!
//! # Examples
//!
//! ## Lenient lists
//!
//! ```rust
//! use unique_list::UniqueList;
//!
//! let mut list: UniqueList<i32> = vec![0, 1, 2].into();
//! list.push_all([1, 2, 3]).unwrap();
//! assert_eq!(list, [0, 1, 2, 3]);
//! ```
//!
//! ## Strict lists
//!
//! ```rust
//! use unique_list::{ListMode, UniqueList, UniqueListError};
//!
//! let mut list = UniqueList::try_from_iter([0, 1, 2], ListMode::strict()).unwrap();
//! assert_eq!(list.push_all([3, 1]), Err(UniqueListError::DuplicateValue(1)));
//! assert_eq!(list, [0, 1, 2]);
//! ```
//!
//! ## Nullable lists
//!
//! ```rust
//! use unique_list::{ListMode, UniqueList};
//!
//! let mut list = UniqueList::with_mode(ListMode::strict());
//! list.push(None).unwrap();
//! list.push(Some(1)).unwrap();
//! list.push(None).unwrap();
//! assert_eq!(list, [None, Some(1), None]);
//! ```

mod convert;
mod element;
mod error;
mod followed_by;
mod mode;
mod unique_list;
pub mod validation;

pub use convert::ToUniqueList;
pub use element::Element;
pub use error::RangeError;
pub use error::UniqueListError;
pub use followed_by::FollowedBy;
pub use mode::ListMode;
pub use unique_list::UniqueList;

static_assertions::assert_impl_all!(UniqueList<i32>: Send, Sync, Clone, Default);
static_assertions::assert_impl_all!(UniqueListError<String>: std::error::Error, Send, Sync);
static_assertions::assert_impl_all!(ListMode: Copy, Send, Sync);
static_assertions::assert_not_impl_any!(UniqueList<i32>: std::ops::DerefMut, std::ops::IndexMut<usize>);
