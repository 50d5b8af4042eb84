//! Natural (alphanumeric) sorting with a small set of companion string and
//! file utilities.
//!
//! The core is [`natural_cmp`], a total ordering over text values in which
//! embedded digit runs compare by numeric magnitude instead of character
//! by character. A list sorted with it looks like this:
//!
//! ```text
//! 1-04, 1-4, 1-40, 10-40, Alice, Bob, Charly, a6-b6, h2-i7,
//! item01, item02, item02a, item2, item3, item00004, item4,
//! item 4 else, item05, item 5, item 5 something, item 6, item    8,
//! item128, item128a, item255, item256, item04096, x2-y08, z3-f6
//! ```
//!
//! [`NaturalSortComparator`] and [`DisplayComparator`] expose the ordering
//! through the [`compare::Compare`] seam, [`MergeSorted`] merges already
//! sorted sequences with it, and the [`strings`] and [`files`] modules
//! carry the surrounding utility surface.

pub mod comparators;
mod error;
pub mod files;
mod merge;
mod natural;
pub mod strings;

pub use comparators::{DisplayComparator, NaturalSortComparator};
pub use error::{Error, Result};
pub use merge::{merge_natural, MergeSorted};
pub use natural::{natural_cmp, sort_naturally, try_natural_cmp};

pub(crate) fn box_iterator<'a, T, I: Iterator<Item = T> + 'a>(
    iter: I,
) -> Box<dyn Iterator<Item = T> + 'a> {
    Box::new(iter)
}
