//! # unique-list
//!
//! An ordered, indexable, mutable list that enforces element uniqueness.
//!
//! ## Overview
//!
//! [`UniqueList`] offers the ergonomics of a `Vec` (index access, insertion,
//! range writes, concatenation) with the guarantee of a set: no value occurs
//! twice. What happens when an operation would introduce a duplicate depends
//! on the list's [`ListMode`]:
//!
//! - **strict** lists reject the operation with
//!   [`UniqueListError::DuplicateValue`] and stay unchanged,
//! - **lenient** lists silently drop or reposition the value,
//! - **nullable** lists exempt null values (see [`Element`]) from the rule,
//! - **fixed-length** lists refuse any change of length.
//!
//! Membership is decided by `PartialEq`; no hashing is required.
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`UniqueList`] and [`ListMode`]
//! - `full`: Enable all features
//!
//! ## Logging
//!
//! Rejected operations emit `tracing` events at `DEBUG` level; values
//! dropped or moved by a lenient list emit events at `TRACE` level.
//!
//! ## Example
//!
//! ```rust
//! use unique_list::prelude::*;
//!
//! let mut list: UniqueList<&str> = ["a", "b"].into_unique_list();
//! list.insert(0, "b").unwrap();
//! assert_eq!(list, ["b", "a"]);
//! assert_eq!(list.fill_range(0, 2, "c"), Err(UniqueListError::Unsupported(
//!     "fill_range would repeat a single value across a range"
//! )));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use unique_list::prelude::*;
/// ```
pub mod prelude {
    pub use crate::list::{Element, ListMode, ToUniqueList, UniqueList, UniqueListError};
}

mod list;

pub use list::*;
