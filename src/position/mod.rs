//! Position-aware iteration
//!
//! Annotates each element of a single forward pass with its zero-based
//! index and whether it is the first and/or last element.
//!
//! Two shapes are offered:
//! - **Lazy**: [`PositionExt::with_position`] yields [`IterationEntry`]
//!   values on demand.
//! - **Eager**: [`PositionExt::for_each_with_position`] drives a callback
//!   with the element and its [`ItemInfo`].
//!
//! The free functions accept an optional source (and optional callback)
//! for callers whose inputs may be absent; an absent source is rejected
//! with [`HelperError::InvalidArgument`] before any element is touched.
//!
//! The source iterator is owned by the traversal, so it is released on
//! completion, when a consumer stops early, and when a callback fails.

mod entry;
mod iter;

pub use entry::{ItemInfo, IterationEntry};
pub use iter::WithPosition;

use tracing::{trace, warn};

use crate::error::HelperError;

/// Extension methods for position-aware iteration over any iterator.
pub trait PositionExt: Iterator + Sized {
    /// Lazily annotate each element with its position.
    ///
    /// ```
    /// use nhelpers::position::PositionExt;
    ///
    /// let flags: Vec<_> = ["a", "b", "c"]
    ///     .into_iter()
    ///     .with_position()
    ///     .map(|entry| (entry.index(), entry.is_first(), entry.is_last()))
    ///     .collect();
    /// assert_eq!(flags, [(0, true, false), (1, false, false), (2, false, true)]);
    /// ```
    fn with_position(self) -> WithPosition<Self> {
        WithPosition::new(self)
    }

    /// Invoke `on_element` for every element together with its position.
    fn for_each_with_position<F>(self, mut on_element: F)
    where
        F: FnMut(Self::Item, ItemInfo),
    {
        let mut visited = 0usize;
        for entry in self.with_position() {
            let (value, info) = entry.into_parts();
            on_element(value, info);
            visited += 1;
        }
        trace!(visited, "positional traversal finished");
    }

    /// Like [`for_each_with_position`](PositionExt::for_each_with_position),
    /// stopping at the first error returned by `on_element`.
    ///
    /// The error is handed back unchanged. Elements visited before the
    /// failure keep whatever effects the callback had on them.
    fn try_for_each_with_position<F, E>(self, mut on_element: F) -> Result<(), E>
    where
        F: FnMut(Self::Item, ItemInfo) -> Result<(), E>,
    {
        let mut visited = 0usize;
        for entry in self.with_position() {
            let (value, info) = entry.into_parts();
            if let Err(err) = on_element(value, info) {
                trace!(visited, "positional traversal aborted by consumer");
                return Err(err);
            }
            visited += 1;
        }
        trace!(visited, "positional traversal finished");
        Ok(())
    }
}

impl<I: Iterator> PositionExt for I {}

fn missing_source() -> HelperError {
    warn!("rejecting positional traversal without a source");
    HelperError::missing("source")
}

/// Lazily annotate a possibly absent source.
///
/// Whether the result can be produced again depends on `source`: passing
/// `Some(&vec)` twice works, a one-shot iterator can only be walked once.
pub fn with_position<I>(source: Option<I>) -> Result<WithPosition<I::IntoIter>, HelperError>
where
    I: IntoIterator,
{
    let source = source.ok_or_else(missing_source)?;
    Ok(source.into_iter().with_position())
}

/// Visit every element of `source` with its position and hand the source
/// back for chaining.
///
/// A `None` callback still walks the source but invokes nothing.
pub fn for_each_with_position<'a, S, F>(
    source: Option<&'a S>,
    on_element: Option<F>,
) -> Result<&'a S, HelperError>
where
    S: ?Sized,
    &'a S: IntoIterator,
    F: FnMut(<&'a S as IntoIterator>::Item, ItemInfo),
{
    let source = source.ok_or_else(missing_source)?;
    match on_element {
        Some(on_element) => source.into_iter().for_each_with_position(on_element),
        None => source.into_iter().for_each_with_position(|_, _| {}),
    }
    Ok(source)
}

/// Fallible counterpart of [`for_each_with_position`].
///
/// A missing source is converted into the caller's error type `E`; callback
/// errors are returned as-is.
pub fn try_for_each_with_position<'a, S, F, E>(
    source: Option<&'a S>,
    on_element: Option<F>,
) -> Result<&'a S, E>
where
    S: ?Sized,
    &'a S: IntoIterator,
    F: FnMut(<&'a S as IntoIterator>::Item, ItemInfo) -> Result<(), E>,
    E: From<HelperError>,
{
    let source = source.ok_or_else(missing_source)?;
    match on_element {
        Some(on_element) => source.into_iter().try_for_each_with_position(on_element)?,
        None => source.into_iter().for_each_with_position(|_, _| {}),
    }
    Ok(source)
}
