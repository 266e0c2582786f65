//! String helpers
//!
//! Case-insensitive search, substring counting, and conversions between
//! strings and base64, ASCII, or UTF-8 bytes.

mod encoding;

pub use encoding::{ascii_bytes, ascii_string, from_base64, to_base64, utf8_string};

use crate::error::HelperError;

/// How substrings are matched when counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Comparison {
    /// Exact char-by-char match.
    #[default]
    Ordinal,
    /// Match after uppercasing each char of both sides.
    ///
    /// Only one-to-one case mappings apply: `ß` stays `ß` rather than
    /// becoming `SS`, and the Kelvin sign does not match `k`.
    IgnoreCase,
}

/// Uppercase every char that has a single-char uppercase form.
fn fold_case(text: &str) -> String {
    text.chars()
        .map(|ch| {
            let mut upper = ch.to_uppercase();
            match (upper.next(), upper.next()) {
                (Some(single), None) => single,
                _ => ch,
            }
        })
        .collect()
}

/// Extension methods on string slices.
pub trait StrExt {
    /// Whether `value` occurs anywhere, ignoring case.
    fn contains_ignore_case(&self, value: &str) -> bool;

    /// Number of non-overlapping occurrences of `needle`.
    ///
    /// After a match the scan resumes right behind it, so `"aaaa"` holds
    /// `"aa"` twice. An empty needle counts as zero occurrences.
    fn count_occurrences(&self, needle: &str, comparison: Comparison) -> usize;

    /// [`count_occurrences`](StrExt::count_occurrences) with [`Comparison::Ordinal`].
    fn count_occurrences_ordinal(&self, needle: &str) -> usize {
        self.count_occurrences(needle, Comparison::Ordinal)
    }

    /// [`count_occurrences`](StrExt::count_occurrences) with [`Comparison::IgnoreCase`].
    fn count_occurrences_ignore_case(&self, needle: &str) -> usize {
        self.count_occurrences(needle, Comparison::IgnoreCase)
    }

    /// Base64 of the UTF-8 bytes.
    fn to_base64_string(&self) -> String;

    /// Treat `self` as base64 and decode it to text.
    fn decode_base64_string(&self) -> Result<String, HelperError>;

    /// ASCII bytes, with `?` for anything outside ASCII.
    fn to_ascii_bytes(&self) -> Vec<u8>;

    /// UTF-8 bytes.
    fn to_utf8_bytes(&self) -> Vec<u8>;
}

impl StrExt for str {
    fn contains_ignore_case(&self, value: &str) -> bool {
        fold_case(self).contains(&fold_case(value))
    }

    fn count_occurrences(&self, needle: &str, comparison: Comparison) -> usize {
        if needle.is_empty() {
            return 0;
        }
        match comparison {
            Comparison::Ordinal => self.matches(needle).count(),
            Comparison::IgnoreCase => fold_case(self).matches(fold_case(needle).as_str()).count(),
        }
    }

    fn to_base64_string(&self) -> String {
        to_base64(self)
    }

    fn decode_base64_string(&self) -> Result<String, HelperError> {
        from_base64(self)
    }

    fn to_ascii_bytes(&self) -> Vec<u8> {
        ascii_bytes(self)
    }

    fn to_utf8_bytes(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }
}

/// Extension methods on byte slices.
pub trait BytesExt {
    /// Read as ASCII, with `?` for bytes outside ASCII.
    fn to_ascii_string(&self) -> String;

    /// Read as UTF-8, replacing invalid sequences.
    fn to_utf8_string(&self) -> String;
}

impl BytesExt for [u8] {
    fn to_ascii_string(&self) -> String {
        ascii_string(self)
    }

    fn to_utf8_string(&self) -> String {
        utf8_string(self)
    }
}
