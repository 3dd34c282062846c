use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors produced while building intervals from pipeline input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    /// Input token could not be read as a `start:stop` / `start-stop` pair.
    #[error("malformed range token {text:?}")]
    Malformed { text: String },

    /// Bounds were numeric but inverted (`start > stop`).
    #[error("inverted range bounds: start {start} > stop {stop}")]
    Inverted { start: i64, stop: i64 },
}

/// A half-open residue range `[start, stop)`.
///
/// `start == stop` is a valid, empty range. Empty ranges overlap
/// nothing, including themselves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawInterval")]
pub struct Interval {
    start: i64,
    stop: i64,
}

/// Unvalidated wire form; deserialization funnels through
/// [`Interval::new`] so inverted bounds cannot sneak in.
#[derive(Deserialize)]
struct RawInterval {
    start: i64,
    stop: i64,
}

impl TryFrom<RawInterval> for Interval {
    type Error = RangeError;

    fn try_from(raw: RawInterval) -> Result<Self, Self::Error> {
        Interval::new(raw.start, raw.stop)
    }
}

impl Interval {
    /// Builds an interval, rejecting inverted bounds.
    pub fn new(start: i64, stop: i64) -> Result<Self, RangeError> {
        if start > stop {
            return Err(RangeError::Inverted { start, stop });
        }
        Ok(Interval { start, stop })
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn stop(&self) -> i64 {
        self.stop
    }

    /// Number of residue positions covered (`stop - start`).
    pub fn len(&self) -> i64 {
        self.stop - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.stop
    }

    /// True when the two ranges share at least one position.
    ///
    /// Empty ranges never overlap anything.
    pub fn overlaps(&self, other: Interval) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.start < other.stop && self.stop > other.start
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.stop)
    }
}

impl FromStr for Interval {
    type Err = RangeError;

    /// Parses `start:stop` or `start-stop` tokens.
    ///
    /// The `-` separator is only usable for non-negative bounds; ranges
    /// with negative residue numbers must use `:`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || RangeError::Malformed { text: s.to_string() };
        let (a, b) = s
            .split_once(':')
            .or_else(|| s.split_once('-'))
            .ok_or_else(malformed)?;
        let start: i64 = a.trim().parse().map_err(|_| malformed())?;
        let stop: i64 = b.trim().parse().map_err(|_| malformed())?;
        Interval::new(start, stop)
    }
}
