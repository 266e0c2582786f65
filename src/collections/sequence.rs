use std::fmt::{Display, Write};

use tracing::warn;

use crate::error::HelperError;
use crate::position::PositionExt;

/// Rendering options for [`SequenceExt::join_with`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListFormat {
    /// Text placed between consecutive elements.
    pub separator: String,
    /// Text appended after the last element (omitted for empty input).
    pub terminator: Option<String>,
}

impl ListFormat {
    /// `"a, b, c"`.
    pub fn comma_separated() -> Self {
        Self {
            separator: ", ".to_string(),
            terminator: None,
        }
    }

    /// Replace the separator.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Append `terminator` after the last element.
    pub fn with_terminator(mut self, terminator: impl Into<String>) -> Self {
        self.terminator = Some(terminator.into());
        self
    }

    /// `"a, b, c."` when applied to a comma-separated format.
    pub fn with_ending_dot(self) -> Self {
        self.with_terminator(".")
    }
}

impl Default for ListFormat {
    fn default() -> Self {
        Self::comma_separated()
    }
}

/// Lazy groups of consecutive elements; see [`SequenceExt::chunks_of`].
#[derive(Debug, Clone)]
pub struct Chunks<I> {
    source: I,
    size: usize,
}

impl<I: Iterator> Iterator for Chunks<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let chunk: Vec<_> = self.source.by_ref().take(self.size).collect();
        if chunk.is_empty() {
            None
        } else {
            Some(chunk)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.source.size_hint();
        (
            lower.div_ceil(self.size),
            upper.map(|upper| upper.div_ceil(self.size)),
        )
    }
}

/// Extension methods for general sequences.
pub trait SequenceExt: Iterator + Sized {
    /// Split into groups of `size` elements; the final group may be shorter.
    fn chunks_of(self, size: usize) -> Result<Chunks<Self>, HelperError> {
        if size == 0 {
            warn!("rejecting chunking with size 0");
            return Err(HelperError::InvalidChunkSize);
        }
        Ok(Chunks { source: self, size })
    }

    /// Zero-based index of the first element satisfying `predicate`.
    fn index_of_by<P>(mut self, predicate: P) -> Option<usize>
    where
        P: FnMut(Self::Item) -> bool,
    {
        self.position(predicate)
    }

    /// Zero-based index of the first element equal to `item`.
    fn index_of<T>(self, item: &T) -> Option<usize>
    where
        T: ?Sized,
        Self::Item: PartialEq<T>,
    {
        self.index_of_by(|candidate| candidate == *item)
    }

    /// Whether any element satisfies `predicate`.
    fn exists<P>(mut self, predicate: P) -> bool
    where
        P: FnMut(Self::Item) -> bool,
    {
        self.any(predicate)
    }

    /// Whether the sequence yields no element at all.
    fn is_empty_sequence(mut self) -> bool {
        self.next().is_none()
    }

    /// Render elements according to `format`.
    fn join_with(self, format: &ListFormat) -> String
    where
        Self::Item: Display,
    {
        let mut rendered = String::new();
        self.for_each_with_position(|item, info| {
            if !info.is_first() {
                rendered.push_str(&format.separator);
            }
            // Writing into a String cannot fail.
            let _ = write!(rendered, "{}", item);
            if info.is_last() {
                if let Some(terminator) = &format.terminator {
                    rendered.push_str(terminator);
                }
            }
        });
        rendered
    }

    /// `"a, b, c"`; empty input renders as an empty string.
    fn to_comma_separated_string(self) -> String
    where
        Self::Item: Display,
    {
        self.join_with(&ListFormat::comma_separated())
    }

    /// `"a, b, c."`; empty input renders as an empty string.
    fn to_comma_separated_string_with_ending_dot(self) -> String
    where
        Self::Item: Display,
    {
        self.join_with(&ListFormat::comma_separated().with_ending_dot())
    }

    /// Concatenate a character sequence.
    fn aggregate_to_string(self) -> String
    where
        Self: Iterator<Item = char>,
    {
        self.collect()
    }
}

impl<I: Iterator> SequenceExt for I {}

/// Run `action` on every element of `source` and return `source`.
pub fn for_each_do<'a, S, F>(source: &'a S, action: F) -> &'a S
where
    S: ?Sized,
    &'a S: IntoIterator,
    F: FnMut(<&'a S as IntoIterator>::Item),
{
    source.into_iter().for_each(action);
    source
}
