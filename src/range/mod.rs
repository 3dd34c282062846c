//! Residue range handling for release processing.
//!
//! Sequence features frequently arrive as overlapping residue ranges
//! (e.g. duplicated annotation segments on an entity). The grouping
//! routine here separates such a list into rows of mutually
//! non-overlapping segments so each row can be laid out or loaded
//! independently.

pub mod grouping;
pub mod interval;

pub use grouping::{group_fallible, group_nonoverlapping, group_ranges, Partition};
pub use interval::{Interval, RangeError};
