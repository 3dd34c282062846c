use crate::range::interval::{Interval, RangeError};
use serde::Serialize;
use tracing::error;

/// Result of separating a range list into rows of non-overlapping
/// segments.
///
/// Group ids are dense and 1-based: group `1` was created first.
/// Within a group, ranges appear in placement order.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Partition {
    groups: Vec<Vec<Interval>>,
}

impl Partition {
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Members of group `id` (1-based), or `None` for an unknown id.
    pub fn group(&self, id: usize) -> Option<&[Interval]> {
        if id == 0 {
            return None;
        }
        self.groups.get(id - 1).map(Vec::as_slice)
    }

    /// Iterates `(group id, members)` in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[Interval])> {
        self.groups
            .iter()
            .enumerate()
            .map(|(i, g)| (i + 1, g.as_slice()))
    }

    /// Total number of ranges across all groups.
    pub fn interval_count(&self) -> usize {
        self.groups.iter().map(Vec::len).sum()
    }
}

/// Separates `intervals` into groups of mutually non-overlapping
/// ranges.
///
/// Ranges are placed longest-first (ties keep input order) into the
/// lowest-numbered group none of whose members they overlap; a new
/// group is opened when no existing group admits the range. The greedy
/// first-fit order is part of the contract: downstream loaders depend
/// on the exact group composition, so it must not be swapped for an
/// optimal interval-graph coloring.
pub fn group_nonoverlapping(intervals: &[Interval]) -> Partition {
    let mut sorted = intervals.to_vec();
    sorted.sort_by(|a, b| b.len().cmp(&a.len()));

    let mut groups: Vec<Vec<Interval>> = Vec::new();
    for rng in sorted {
        match groups
            .iter_mut()
            .find(|grp| grp.iter().all(|t| !t.overlaps(rng)))
        {
            Some(grp) => grp.push(rng),
            None => groups.push(vec![rng]),
        }
    }

    Partition { groups }
}

/// Groups ranges from a fallible source, keeping whatever arrived
/// before the first error.
///
/// The first `Err` is handed to `report` and consumption stops; the
/// valid prefix is still grouped and returned. Callers cannot tell a
/// truncated result from a complete one by the return value alone --
/// the reporter is the only witness.
pub fn group_fallible<I, F>(items: I, mut report: F) -> Partition
where
    I: IntoIterator<Item = Result<Interval, RangeError>>,
    F: FnMut(&RangeError),
{
    let mut intervals = Vec::new();
    for item in items {
        match item {
            Ok(rng) => intervals.push(rng),
            Err(e) => {
                report(&e);
                break;
            }
        }
    }
    group_nonoverlapping(&intervals)
}

/// [`group_fallible`] with errors routed to the crate logger.
pub fn group_ranges<I>(items: I) -> Partition
where
    I: IntoIterator<Item = Result<Interval, RangeError>>,
{
    group_fallible(items, |e| {
        error!("range grouping stopped early: {}", e);
    })
}
