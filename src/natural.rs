//! Natural (alphanumeric) ordering of text values.
//!
//! Embedded runs of ASCII decimal digits compare by numeric magnitude while
//! everything else compares character by character, so `"item9"` sorts
//! before `"item10"`. Digit runs are never materialized as integers, which
//! keeps the comparison correct for runs of arbitrary length.

use crate::error::{Error, Result};
use std::cmp::Ordering;

/// Per-input scanning state for one comparison call.
///
/// `current` mirrors `chars[pos]`, with `None` as the end sentinel. It must
/// be refreshed via [`Cursor::read`] after every advance before it is read.
struct Cursor<'a> {
    chars: &'a [char],
    pos: usize,
    current: Option<char>,
    leading_zeros: isize,
}

impl<'a> Cursor<'a> {
    fn new(chars: &'a [char]) -> Self {
        Self {
            chars,
            pos: 0,
            current: None,
            leading_zeros: 0,
        }
    }

    fn read(&mut self) {
        self.current = self.chars.get(self.pos).copied();
    }

    /// Skips whitespace and `'0'` characters from the current position,
    /// counting consecutive zeroes. Whitespace resets the running count but
    /// the skip continues past it, so the count reflects the zeroes since
    /// the last whitespace. Recomputed on every pass of the outer loop; the
    /// tie-break reads whatever the last recomputation produced.
    fn count_leading_zeros(&mut self) {
        self.leading_zeros = 0;
        while let Some(c) = self.current {
            if c == '0' {
                self.leading_zeros += 1;
            } else if c.is_whitespace() {
                self.leading_zeros = 0;
            } else {
                break;
            }
            self.pos += 1;
            self.read();
        }
    }
}

/// Outcome of comparing two digit runs.
struct DigitRun {
    /// -1, 0 or 1 at the first point of difference.
    verdict: i8,
    /// Characters scanned on both sides, skippable by the caller when the
    /// verdict is 0.
    consumed: usize,
}

/// Compares two digit runs character by character from their own start.
///
/// Leading zeroes have already been stripped by the caller, so the runs are
/// aligned and a left-to-right digit comparison is equivalent to a magnitude
/// comparison. The side whose run ends first is the smaller one. Once a
/// verdict is captured it is never overwritten; scanning continues only to
/// measure `consumed`.
fn compare_digit_runs(a: &[char], b: &[char]) -> DigitRun {
    let mut verdict = 0i8;
    let mut len = 0usize;

    loop {
        let x = a.get(len).filter(|c| c.is_ascii_digit());
        let y = b.get(len).filter(|c| c.is_ascii_digit());
        match (x, y) {
            (None, None) => break,
            (None, Some(_)) => {
                verdict = -1;
                break;
            }
            (Some(_), None) => {
                verdict = 1;
                break;
            }
            (Some(x), Some(y)) if verdict == 0 => {
                if x < y {
                    verdict = -1;
                } else if x > y {
                    verdict = 1;
                }
            }
            (Some(_), Some(_)) => {}
        }
        len += 1;
    }

    DigitRun {
        verdict,
        consumed: len,
    }
}

fn leading_zero_delta(a: &Cursor<'_>, b: &Cursor<'_>) -> isize {
    (b.leading_zeros - a.leading_zeros).clamp(-1, 1)
}

/// Compares two text values in natural (alphanumeric) order.
///
/// Usage example:
///
/// ```
/// use natural_sort::natural_cmp;
/// use std::cmp::Ordering;
///
/// assert_eq!(natural_cmp("item9", "item10"), Ordering::Less);
/// assert_eq!(natural_cmp("item05", "item 5"), Ordering::Less);
/// assert_eq!(natural_cmp("Blu", "Bla"), Ordering::Greater);
/// ```
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let mut one = Cursor::new(&a);
    let mut two = Cursor::new(&b);

    let mut result: isize = 0;

    loop {
        one.read();
        two.read();

        one.count_leading_zeros();
        two.count_leading_zeros();

        match (one.current, two.current) {
            (Some(x), Some(y)) if x.is_ascii_digit() && y.is_ascii_digit() => {
                let run = compare_digit_runs(&a[one.pos..], &b[two.pos..]);

                if run.verdict != 0 {
                    result = run.verdict as isize;
                    break;
                }

                // The runs are numerically equal; only the leading-zero
                // counts captured above can still decide, and only if the
                // loop ends without a later difference.
                result = leading_zero_delta(&one, &two);

                // Skip the common run. The loop's own increment below
                // supplies the final step.
                if run.consumed > 1 {
                    one.pos += run.consumed - 1;
                    two.pos += run.consumed - 1;
                }
            }
            (None, None) => {
                result = leading_zero_delta(&one, &two);
                break;
            }
            _ => {}
        }

        // Direct comparison of the characters read before any run skip.
        // `None` sorts below any real character.
        if one.current < two.current {
            result = -1;
        } else if one.current > two.current {
            result = 1;
        }

        one.pos += 1;
        two.pos += 1;

        if result != 0 {
            break;
        }
    }

    result.cmp(&0)
}

/// Fallible variant of [`natural_cmp`] for possibly absent inputs.
///
/// An absent input is a precondition violation, answered with
/// [`Error::AbsentInput`] rather than being treated as empty.
pub fn try_natural_cmp(a: Option<&str>, b: Option<&str>) -> Result<Ordering> {
    match (a, b) {
        (Some(a), Some(b)) => Ok(natural_cmp(a, b)),
        _ => Err(Error::AbsentInput),
    }
}

/// Sorts a slice of string-like values in place in natural order.
///
/// Usage example:
///
/// ```
/// use natural_sort::sort_naturally;
///
/// let mut items = vec!["item10", "item9", "item1"];
/// sort_naturally(&mut items);
/// assert_eq!(items, vec!["item1", "item9", "item10"]);
/// ```
pub fn sort_naturally<S: AsRef<str>>(items: &mut [S]) {
    items.sort_by(|a, b| natural_cmp(a.as_ref(), b.as_ref()));
}
