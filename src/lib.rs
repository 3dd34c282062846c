//! pdbkit: utility modules supporting the PDB data release pipeline.

pub mod cache;
pub mod range;
pub mod repo;
pub mod schedule;
pub mod text;
pub mod util;

// Re-export the range grouping entry points used by pipeline callers
pub use range::grouping::{group_nonoverlapping, group_ranges, Partition};
pub use range::interval::{Interval, RangeError};
