//! Configuration of a [`UniqueList`](super::UniqueList).

/// The behavioral switches of a [`UniqueList`](super::UniqueList).
///
/// A mode is fixed when the list is constructed and never changes
/// afterwards. The switches are independent:
///
/// - `strict`: duplicate insertions fail instead of being filtered or
///   repositioned.
/// - `nullable`: null values (see [`Element`](super::Element)) are exempt
///   from the uniqueness invariant.
/// - `growable`: the length may change after construction.
/// - `modifiable`: the list accepts any mutation at all. An unmodifiable
///   list is never growable.
///
/// # Examples
///
/// ```rust
/// use unique_list::ListMode;
///
/// let mode = ListMode::lenient().with_nullable(false);
/// assert!(!mode.is_strict());
/// assert!(!mode.is_nullable());
/// assert!(mode.is_growable());
///
/// assert_eq!(ListMode::default(), ListMode::lenient());
/// assert!(ListMode::strict().is_strict());
/// assert!(!ListMode::fixed_length().is_growable());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "ListModeFields"))]
pub struct ListMode {
    strict: bool,
    nullable: bool,
    growable: bool,
    modifiable: bool,
}

impl ListMode {
    /// Lenient, nullable and growable. This is the default.
    #[inline]
    #[must_use]
    pub const fn lenient() -> Self {
        Self {
            strict: false,
            nullable: true,
            growable: true,
            modifiable: true,
        }
    }

    /// Strict, nullable and growable.
    #[inline]
    #[must_use]
    pub const fn strict() -> Self {
        Self::lenient().with_strict(true)
    }

    /// Lenient, nullable and fixed-length.
    #[inline]
    #[must_use]
    pub const fn fixed_length() -> Self {
        Self::lenient().with_growable(false)
    }

    /// Not growable and not modifiable.
    #[inline]
    #[must_use]
    pub(crate) const fn unmodifiable(nullable: bool) -> Self {
        Self {
            strict: true,
            nullable,
            growable: false,
            modifiable: false,
        }
    }

    /// Returns a copy with the `strict` switch set to `strict`.
    #[inline]
    #[must_use]
    pub const fn with_strict(self, strict: bool) -> Self {
        Self { strict, ..self }
    }

    /// Returns a copy with the `nullable` switch set to `nullable`.
    #[inline]
    #[must_use]
    pub const fn with_nullable(self, nullable: bool) -> Self {
        Self { nullable, ..self }
    }

    /// Returns a copy with the `growable` switch set to `growable`.
    ///
    /// Has no effect on an unmodifiable mode.
    #[inline]
    #[must_use]
    pub const fn with_growable(self, growable: bool) -> Self {
        Self {
            growable: growable && self.modifiable,
            ..self
        }
    }

    /// Whether duplicate insertions fail.
    #[inline]
    #[must_use]
    pub const fn is_strict(&self) -> bool {
        self.strict
    }

    /// Whether null values are exempt from uniqueness.
    #[inline]
    #[must_use]
    pub const fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// Whether the length may change.
    #[inline]
    #[must_use]
    pub const fn is_growable(&self) -> bool {
        self.growable
    }

    /// Whether the list accepts mutations.
    #[inline]
    #[must_use]
    pub const fn is_modifiable(&self) -> bool {
        self.modifiable
    }

    /// Whether construction must reject duplicates rather than drop them.
    ///
    /// Fixed-length and unmodifiable lists validate their initial contents
    /// strictly regardless of `strict`.
    #[inline]
    pub(crate) const fn validates_strictly(&self) -> bool {
        self.strict || !self.growable
    }
}

impl Default for ListMode {
    #[inline]
    fn default() -> Self {
        Self::lenient()
    }
}

/// Wire form of [`ListMode`]; converted through the builder rules so an
/// unmodifiable mode never reads back as growable.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct ListModeFields {
    strict: bool,
    nullable: bool,
    growable: bool,
    modifiable: bool,
}

#[cfg(feature = "serde")]
impl From<ListModeFields> for ListMode {
    fn from(fields: ListModeFields) -> Self {
        Self {
            strict: fields.strict,
            nullable: fields.nullable,
            growable: fields.growable && fields.modifiable,
            modifiable: fields.modifiable,
        }
    }
}
