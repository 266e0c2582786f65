//! Collection helpers
//!
//! Slice resets and copies, map slots that own a collection, and general
//! sequence utilities (chunking, searching, list rendering).

mod array;
mod dictionary;
mod sequence;

pub use array::SliceExt;
pub use dictionary::MapExt;
pub use sequence::{for_each_do, Chunks, ListFormat, SequenceExt};
