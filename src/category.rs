//! Category labels for properties.
//!
//! A property's categories are the union of the categories declared on the
//! type enclosing it and the categories declared on the property itself.
//! Types declare theirs by implementing [`Categorized`]; properties carry
//! theirs in a [`CategorizedProperty`].
//!
//! # Examples
//!
//! ```rust
//! use iterw::categories;
//! use iterw::category::{Categories, Categorized, CategorizedProperty};
//!
//! struct StreamProperties;
//!
//! impl Categorized for StreamProperties {
//!     fn categories() -> Categories {
//!         categories!["sequence"]
//!     }
//! }
//!
//! let property = CategorizedProperty::new("append is associative", categories!["laws", "append"]);
//! let effective = property.effective_categories::<StreamProperties>();
//! assert_eq!(effective.iter().collect::<Vec<_>>(), vec!["append", "laws", "sequence"]);
//! ```

use std::collections::BTreeSet;
use std::iter::FromIterator;

/// An ordered set of category names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Categories {
    names: BTreeSet<&'static str>,
}

impl Categories {
    /// Creates an empty set.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            names: BTreeSet::new(),
        }
    }

    /// Returns `true` if `name` is one of the categories.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Returns the categories present in either set.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            names: self.names.union(&other.names).copied().collect(),
        }
    }

    /// Iterates the names in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.names.iter().copied()
    }

    /// Number of distinct categories.
    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if there are no categories.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl FromIterator<&'static str> for Categories {
    fn from_iter<I: IntoIterator<Item = &'static str>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}

impl<const N: usize> From<[&'static str; N]> for Categories {
    fn from(names: [&'static str; N]) -> Self {
        names.into_iter().collect()
    }
}

/// Types that declare categories for the properties they enclose.
pub trait Categorized {
    /// The categories declared on the type.
    fn categories() -> Categories;
}

/// A property together with the categories declared on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorizedProperty<P> {
    property: P,
    categories: Categories,
}

impl<P> CategorizedProperty<P> {
    /// Attaches categories to a property.
    pub const fn new(property: P, categories: Categories) -> Self {
        Self {
            property,
            categories,
        }
    }

    /// The property.
    #[inline]
    pub const fn property(&self) -> &P {
        &self.property
    }

    /// The categories declared on the property alone.
    #[inline]
    pub const fn own_categories(&self) -> &Categories {
        &self.categories
    }

    /// The enclosing type's categories together with the property's own.
    pub fn effective_categories<Enclosing: Categorized>(&self) -> Categories {
        Enclosing::categories().union(&self.categories)
    }

    /// Returns the property, discarding the categories.
    pub fn into_property(self) -> P {
        self.property
    }
}

/// Builds [`Categories`] from string literals.
///
/// # Examples
///
/// ```rust
/// use iterw::categories;
///
/// let tags = categories!["fast", "pure", "fast"];
/// assert_eq!(tags.len(), 2);
/// assert!(tags.contains("pure"));
/// assert!(categories![].is_empty());
/// ```
#[macro_export]
macro_rules! categories {
    () => {
        $crate::category::Categories::new()
    };
    ($($name:expr),+ $(,)?) => {
        $crate::category::Categories::from([$($name),+])
    };
}
