//! Common string helpers: blank checks, hex codecs, digest shortcuts,
//! ellipsis shortening, occurrence counting and plain splitting.

use crate::error::Result;
use md5::{Digest, Md5};
use sha1::Sha1;

const ELLIPSIS: &str = "...";

/// Where [`shorten`] places the ellipsis and cuts the text.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ShortenMode {
    /// Cut the head: `...zy dog`.
    Start,
    /// Cut the middle: `Th...dog`.
    Middle,
    /// Cut the tail: `The qu...`.
    End,
}

/// Returns true when `text` is empty or consists of whitespace only.
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Renders bytes as uppercase hexadecimal pairs.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    hex::encode_upper(bytes)
}

/// Parses a string of hexadecimal pairs back into bytes. Rejects odd
/// lengths and non-hex characters.
pub fn hex_to_bytes(hex: &str) -> Result<Vec<u8>> {
    Ok(hex::decode(hex)?)
}

/// SHA-1 of the UTF-8 bytes of `text`, as lowercase hex.
pub fn sha1_hex(text: &str) -> String {
    hex::encode(Sha1::digest(text.as_bytes()))
}

/// MD5 of the UTF-8 bytes of `text`, as lowercase hex.
pub fn md5_hex(text: &str) -> String {
    hex::encode(Md5::digest(text.as_bytes()))
}

/// Truncates a digest to a `u32` code: the low nibble of the last byte
/// picks a read offset (clamped into range), four bytes are read
/// big-endian and the sign bit is cleared.
///
/// Panics if `digest` is shorter than 4 bytes; real digests never are.
pub fn truncate_hash_to_u32(digest: &[u8]) -> u32 {
    let offset = usize::from(digest[digest.len() - 1] & 0x0f).min(digest.len() - 4);
    let mut word = [0u8; 4];
    word.copy_from_slice(&digest[offset..offset + 4]);
    u32::from_be_bytes(word) & 0x7fff_ffff
}

/// Like [`truncate_hash_to_u32`] but reads eight bytes.
///
/// Panics if `digest` is shorter than 8 bytes.
pub fn truncate_hash_to_u64(digest: &[u8]) -> u64 {
    let offset = usize::from(digest[digest.len() - 1] & 0x0f).min(digest.len() - 8);
    let mut word = [0u8; 8];
    word.copy_from_slice(&digest[offset..offset + 8]);
    u64::from_be_bytes(word) & 0x7fff_ffff_ffff_ffff
}

pub fn sha1_truncated_u32(text: &str) -> u32 {
    truncate_hash_to_u32(&Sha1::digest(text.as_bytes()))
}

pub fn sha1_truncated_u64(text: &str) -> u64 {
    truncate_hash_to_u64(&Sha1::digest(text.as_bytes()))
}

pub fn md5_truncated_u32(text: &str) -> u32 {
    truncate_hash_to_u32(&Md5::digest(text.as_bytes()))
}

pub fn md5_truncated_u64(text: &str) -> u64 {
    truncate_hash_to_u64(&Md5::digest(text.as_bytes()))
}

/// Shortens `text` to at most `size` characters, marking the cut with an
/// ellipsis placed according to `mode`. Operates on characters, so a
/// multi-byte code point is never split.
///
/// Usage example:
///
/// ```
/// use natural_sort::strings::{shorten, ShortenMode};
///
/// let text = "The quick brown fox jumps over the lazy dog";
/// assert_eq!(shorten(text, 10, ShortenMode::End), "The qui...");
/// assert_eq!(shorten(text, 10, ShortenMode::Start), "...azy dog");
/// assert_eq!(shorten(text, 10, ShortenMode::Middle), "Th...y dog");
/// ```
pub fn shorten(text: &str, size: usize, mode: ShortenMode) -> String {
    let chars: Vec<char> = text.chars().collect();
    let effective = chars.len().min(size);
    match mode {
        ShortenMode::Start => {
            let keep = effective.saturating_sub(ELLIPSIS.len());
            let tail: String = chars[chars.len() - keep..].iter().collect();
            format!("{ELLIPSIS}{tail}")
        }
        ShortenMode::Middle => {
            let half = effective >> 1;
            let head: String =
                chars[..half.saturating_sub(ELLIPSIS.len())].iter().collect();
            let tail: String = chars[chars.len() - half..].iter().collect();
            format!("{head}{ELLIPSIS}{tail}")
        }
        ShortenMode::End => {
            let keep = effective.saturating_sub(ELLIPSIS.len());
            let head: String = chars[..keep].iter().collect();
            format!("{head}{ELLIPSIS}")
        }
    }
}

/// Counts non-overlapping occurrences of a character.
pub fn count_char(haystack: &str, needle: char) -> usize {
    haystack.matches(needle).count()
}

/// Counts non-overlapping occurrences of a substring. An empty needle
/// occurs zero times.
pub fn count_str(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    haystack.matches(needle).count()
}

/// Splits `text` at every occurrence of `delimiter` using plain character
/// matching, dropping empty segments. No regular expressions involved.
pub fn simple_split(text: &str, delimiter: char) -> Vec<&str> {
    simple_split_from(text, delimiter, 0)
}

/// Like [`simple_split`], starting from byte offset `start`, which must
/// lie on a character boundary.
pub fn simple_split_from(text: &str, delimiter: char, start: usize) -> Vec<&str> {
    text[start..]
        .split(delimiter)
        .filter(|segment| !segment.is_empty())
        .collect()
}
