use crate::natural::natural_cmp;
use compare::Compare;
use std::cmp::Ordering;
use std::fmt;

/// Stateless comparator applying natural (alphanumeric) order to
/// string-like values. Being zero-sized and immutable, a single value can
/// be shared freely across threads.
///
/// Usage example:
///
/// ```
/// use compare::Compare;
/// use natural_sort::NaturalSortComparator;
/// use std::cmp::Ordering;
///
/// let cmp = NaturalSortComparator::new();
/// assert_eq!(cmp.compare(&"item9", &"item10"), Ordering::Less);
/// ```
#[derive(Copy, Clone, Debug, Default)]
pub struct NaturalSortComparator;

impl NaturalSortComparator {
    pub fn new() -> Self {
        Self
    }
}

impl<S: AsRef<str>> Compare<S, S> for NaturalSortComparator {
    fn compare(&self, u: &S, v: &S) -> Ordering {
        natural_cmp(u.as_ref(), v.as_ref())
    }
}

/// Natural-order comparator for arbitrary values, keyed on their
/// [`fmt::Display`] rendering. Both operands are rendered to text on every
/// call, mirroring comparison of untyped values by their textual form.
///
/// Usage example:
///
/// ```
/// use compare::Compare;
/// use natural_sort::DisplayComparator;
/// use std::cmp::Ordering;
///
/// assert_eq!(DisplayComparator.compare(&9u32, &10u32), Ordering::Less);
/// ```
#[derive(Copy, Clone, Debug, Default)]
pub struct DisplayComparator;

impl<T: fmt::Display> Compare<T, T> for DisplayComparator {
    fn compare(&self, u: &T, v: &T) -> Ordering {
        natural_cmp(&u.to_string(), &v.to_string())
    }
}
