use std::fmt;
use std::iter::FusedIterator;

use super::entry::IterationEntry;

/// Lazy adapter that annotates every element with its position.
///
/// One element is always fetched ahead of the one being emitted, which is
/// how `is_last` is known without a length query or a second pass. Nothing
/// is pulled from the source until the first call to [`Iterator::next`].
pub struct WithPosition<I: Iterator> {
    source: I,
    // `None` before the first pull, `Some(None)` once the source is drained.
    buffered: Option<Option<I::Item>>,
    next_index: usize,
}

impl<I: Iterator> WithPosition<I> {
    /// Wrap `source` without touching it.
    pub fn new(source: I) -> Self {
        Self {
            source,
            buffered: None,
            next_index: 0,
        }
    }

    /// Number of entries emitted so far.
    pub fn emitted(&self) -> usize {
        self.next_index
    }
}

impl<I: Iterator> Iterator for WithPosition<I> {
    type Item = IterationEntry<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = match self.buffered.as_mut() {
            Some(slot) => slot.take()?,
            None => match self.source.next() {
                Some(first) => first,
                None => {
                    self.buffered = Some(None);
                    return None;
                }
            },
        };

        let upcoming = self.source.next();
        let is_last = upcoming.is_none();
        self.buffered = Some(upcoming);

        let index = self.next_index;
        self.next_index += 1;
        Some(IterationEntry::new(index, current, index == 0, is_last))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.buffered {
            None => self.source.size_hint(),
            Some(None) => (0, Some(0)),
            Some(Some(_)) => {
                let (lower, upper) = self.source.size_hint();
                (
                    lower.saturating_add(1),
                    upper.and_then(|upper| upper.checked_add(1)),
                )
            }
        }
    }
}

impl<I: Iterator> FusedIterator for WithPosition<I> {}

impl<I: ExactSizeIterator> ExactSizeIterator for WithPosition<I> {}

impl<I> Clone for WithPosition<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            buffered: self.buffered.clone(),
            next_index: self.next_index,
        }
    }
}

impl<I> fmt::Debug for WithPosition<I>
where
    I: Iterator + fmt::Debug,
    I::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WithPosition")
            .field("source", &self.source)
            .field("buffered", &self.buffered)
            .field("next_index", &self.next_index)
            .finish()
    }
}
