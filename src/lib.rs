//! # Extension helpers for collections, sequences and strings
//!
//! Small, stateless helpers layered on top of the standard collection and
//! string types.
//!
//! ## Position-aware iteration
//!
//! The centrepiece is [`position`]: a single forward pass that reports, for
//! each element, its index and whether it is the first and/or last one.
//! "Last" is known one step early by keeping exactly one element of
//! lookahead, so the source needs neither random access nor a length.
//!
//! ## Usage Example
//!
//! ```
//! use nhelpers::{ItemInfo, PositionExt};
//!
//! let mut rendered = String::new();
//! ["a", "b", "c"].into_iter().for_each_with_position(|item, info: ItemInfo| {
//!     rendered.push_str(item);
//!     if !info.is_last() {
//!         rendered.push('+');
//!     }
//! });
//! assert_eq!(rendered, "a+b+c");
//! ```
//!
//! ## Features
//!
//! - `serialize`: `serde` derives for [`ItemInfo`] and [`IterationEntry`].

#![warn(missing_docs, missing_debug_implementations)]

pub mod collections; // Slice, map and sequence helpers
pub mod error;       // Crate error type
pub mod position;    // Position-aware iteration
pub mod text;        // String search and byte conversions

// Re-exports for convenience
pub use collections::{ListFormat, MapExt, SequenceExt, SliceExt};
pub use error::HelperError;
pub use position::{ItemInfo, IterationEntry, PositionExt, WithPosition};
pub use text::{BytesExt, Comparison, StrExt};
