use std::fmt;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Position of one element within a traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct ItemInfo {
    index: usize,
    is_first: bool,
    is_last: bool,
}

impl ItemInfo {
    /// Construct position metadata.
    pub fn new(index: usize, is_first: bool, is_last: bool) -> Self {
        Self {
            index,
            is_first,
            is_last,
        }
    }

    /// Zero-based position in emission order.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Whether this is the first element of the traversal.
    pub fn is_first(&self) -> bool {
        self.is_first
    }

    /// Whether this is the last element of the traversal.
    pub fn is_last(&self) -> bool {
        self.is_last
    }
}

/// One element of a source sequence together with its position.
///
/// `Display` renders the value only; the metadata is not part of the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct IterationEntry<T> {
    index: usize,
    is_first: bool,
    is_last: bool,
    value: T,
}

impl<T> IterationEntry<T> {
    /// Construct an entry for `value` at the given position.
    pub fn new(index: usize, value: T, is_first: bool, is_last: bool) -> Self {
        Self {
            index,
            is_first,
            is_last,
            value,
        }
    }

    /// Zero-based position in emission order.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Whether this is the first element of the traversal.
    pub fn is_first(&self) -> bool {
        self.is_first
    }

    /// Whether this is the last element of the traversal.
    pub fn is_last(&self) -> bool {
        self.is_last
    }

    /// Borrow the wrapped element.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Position metadata without the payload.
    pub fn info(&self) -> ItemInfo {
        ItemInfo::new(self.index, self.is_first, self.is_last)
    }

    /// Release the wrapped element.
    pub fn into_value(self) -> T {
        self.value
    }

    /// Split into payload and metadata.
    pub fn into_parts(self) -> (T, ItemInfo) {
        let info = self.info();
        (self.value, info)
    }
}

impl<T: fmt::Display> fmt::Display for IterationEntry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}
