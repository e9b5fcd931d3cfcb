//! Stop ordering within a direction.
//!
//! Every visit of a classified trip gets a [`StopOrderKey`] relative to the
//! winning direction's reference sequence. Keys from different trips of the
//! same direction are comparable, which is what lets the writer merge all
//! trips of a direction into one sorted stop list.

use std::cmp::Ordering;

use crate::domain::StopVisit;

use super::score::Alignment;
use super::spec::DirectionSpec;

/// Where a visit sits relative to its reference position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Placement {
    /// Interpolated just before the position (unplaced stops ahead of the
    /// first placed stop of the trip).
    Before,
    /// Exactly at the position.
    At,
    /// Interpolated just after the position.
    After,
}

impl Placement {
    pub fn as_str(&self) -> &'static str {
        match self {
            Placement::Before => "before",
            Placement::At => "at",
            Placement::After => "after",
        }
    }
}

/// Sort key of one stop visit within a direction.
///
/// Ordered by reference position, then placement, then raw feed sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StopOrderKey {
    pub position: usize,
    pub placement: Placement,
    pub sequence: u32,
}

impl StopOrderKey {
    pub fn new(position: usize, placement: Placement, sequence: u32) -> Self {
        Self {
            position,
            placement,
            sequence,
        }
    }
}

/// A stop visit with its ordering key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedStop {
    pub visit: StopVisit,
    pub key: StopOrderKey,
}

/// Compare two ordered stops of the same direction.
///
/// Strict weak ordering consistent with reference positions; stops tied on
/// position break ties on their raw feed sequence number.
pub fn compare_stop_order(a: &OrderedStop, b: &OrderedStop) -> Ordering {
    a.key.cmp(&b.key)
}

/// Assign ordering keys to a trip's visits.
///
/// 1. Aligned visits take the position of the entry they aligned to.
/// 2. Other visits whose stop appears in the reference (skip entries,
///    out-of-order repeats) take the first such position strictly between
///    the positions of the placed visits around them.
/// 3. Everything else is placed just after the nearest preceding placed
///    visit, or just before the first placed visit if none precedes.
///
/// Keys are non-decreasing along the trip.
pub(crate) fn order_visits(
    direction: &DirectionSpec,
    visits: &[StopVisit],
    alignment: &Alignment,
) -> Vec<OrderedStop> {
    let mut positions: Vec<Option<usize>> = vec![None; visits.len()];
    for &(visit_idx, position) in &alignment.pairs {
        positions[visit_idx] = Some(position);
    }

    // Aligned positions to the right of each visit, for bounding step 2.
    let mut next_aligned: Vec<Option<usize>> = vec![None; visits.len()];
    let mut upcoming = None;
    for idx in (0..visits.len()).rev() {
        next_aligned[idx] = upcoming;
        if let Some(p) = positions[idx] {
            upcoming = Some(p);
        }
    }

    let reference = direction.reference();
    let mut last_placed: Option<usize> = None;
    for (idx, visit) in visits.iter().enumerate() {
        if let Some(p) = positions[idx] {
            last_placed = Some(p);
            continue;
        }
        let lower = last_placed.map_or(0, |p| p + 1);
        let upper = next_aligned[idx].unwrap_or(reference.len());
        let found = (lower..upper).find(|&p| reference[p].accepts(&visit.stop_id));
        if let Some(p) = found {
            positions[idx] = Some(p);
            last_placed = Some(p);
        }
    }

    let first_placed = positions.iter().flatten().next().copied().unwrap_or(0);
    let mut previous: Option<usize> = None;
    visits
        .iter()
        .zip(positions)
        .map(|(visit, position)| {
            let key = match (position, previous) {
                (Some(p), _) => {
                    previous = Some(p);
                    StopOrderKey::new(p, Placement::At, visit.sequence)
                }
                (None, Some(p)) => StopOrderKey::new(p, Placement::After, visit.sequence),
                (None, None) => StopOrderKey::new(first_placed, Placement::Before, visit.sequence),
            };
            OrderedStop {
                visit: visit.clone(),
                key,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DirectionLabel, StopId};
    use crate::splitter::score::align;
    use crate::splitter::spec::ReferenceEntry;

    fn stop(s: &str) -> StopId {
        StopId::parse(s).unwrap()
    }

    fn direction(entries: Vec<ReferenceEntry>) -> DirectionSpec {
        DirectionSpec::new(DirectionLabel::North, "N", entries)
    }

    fn plain(ids: &[&str]) -> Vec<ReferenceEntry> {
        ids.iter().map(|s| ReferenceEntry::Stop(stop(s))).collect()
    }

    fn visits(ids: &[&str]) -> Vec<StopVisit> {
        ids.iter()
            .enumerate()
            .map(|(i, s)| StopVisit::new(stop(s), (i as u32 + 1) * 10))
            .collect()
    }

    fn order(dir: &DirectionSpec, ids: &[&str]) -> Vec<StopOrderKey> {
        let v = visits(ids);
        let stops: Vec<&StopId> = v.iter().map(|x| &x.stop_id).collect();
        let alignment = align(&stops, dir.reference());
        order_visits(dir, &v, &alignment)
            .into_iter()
            .map(|o| o.key)
            .collect()
    }

    #[test]
    fn aligned_stops_take_reference_positions() {
        let dir = direction(plain(&["A", "B", "C", "D"]));
        let keys = order(&dir, &["A", "C", "D"]);
        assert_eq!(
            keys,
            vec![
                StopOrderKey::new(0, Placement::At, 10),
                StopOrderKey::new(2, Placement::At, 20),
                StopOrderKey::new(3, Placement::At, 30),
            ]
        );
    }

    #[test]
    fn unknown_stops_interpolate_after_previous() {
        let dir = direction(plain(&["A", "B", "C"]));
        let keys = order(&dir, &["A", "X", "Y", "C"]);
        assert_eq!(keys[1], StopOrderKey::new(0, Placement::After, 20));
        assert_eq!(keys[2], StopOrderKey::new(0, Placement::After, 30));
        assert!(keys[2] < keys[3]);
    }

    #[test]
    fn unknown_leading_stops_go_before_first_placed() {
        let dir = direction(plain(&["A", "B", "C"]));
        let keys = order(&dir, &["X", "B", "C"]);
        assert_eq!(keys[0], StopOrderKey::new(1, Placement::Before, 10));
        assert!(keys[0] < keys[1]);
    }

    #[test]
    fn skip_entries_place_optional_stops() {
        let dir = direction(vec![
            ReferenceEntry::Stop(stop("A")),
            ReferenceEntry::Skip(stop("S")),
            ReferenceEntry::Stop(stop("B")),
        ]);
        let keys = order(&dir, &["A", "S", "B"]);
        assert_eq!(keys[1], StopOrderKey::new(1, Placement::At, 20));
    }

    #[test]
    fn skip_outside_neighbours_is_interpolated() {
        // S is only referenced before A, but this trip visits it after A.
        let dir = direction(vec![
            ReferenceEntry::Skip(stop("S")),
            ReferenceEntry::Stop(stop("A")),
            ReferenceEntry::Stop(stop("B")),
        ]);
        let keys = order(&dir, &["A", "S", "B"]);
        assert_eq!(keys[1], StopOrderKey::new(1, Placement::After, 20));
    }

    #[test]
    fn keys_never_decrease_along_trip() {
        let dir = direction(plain(&["A", "B", "C", "D"]));
        let keys = order(&dir, &["Q", "D", "C", "B", "A", "Z"]);
        for w in keys.windows(2) {
            assert!(w[0] <= w[1], "{:?} > {:?}", w[0], w[1]);
        }
    }

    #[test]
    fn keys_are_comparable_across_trips() {
        let dir = direction(plain(&["A", "B", "C", "D"]));
        let short = order(&dir, &["A", "D"]);
        let long = order(&dir, &["A", "B", "C", "D"]);
        // B and C from the long trip land between A and D of the short one.
        assert!(short[0] < long[1]);
        assert!(long[2] < short[1]);
    }

    #[test]
    fn compare_uses_sequence_tiebreak() {
        let a = OrderedStop {
            visit: StopVisit::new(stop("A"), 1),
            key: StopOrderKey::new(4, Placement::At, 1),
        };
        let b = OrderedStop {
            visit: StopVisit::new(stop("A"), 9),
            key: StopOrderKey::new(4, Placement::At, 9),
        };
        assert_eq!(compare_stop_order(&a, &b), Ordering::Less);
        assert_eq!(compare_stop_order(&b, &a), Ordering::Greater);
        assert_eq!(compare_stop_order(&a, &a), Ordering::Equal);
    }

    #[test]
    fn placement_order_and_names() {
        assert!(Placement::Before < Placement::At);
        assert!(Placement::At < Placement::After);
        assert_eq!(Placement::After.as_str(), "after");
    }
}
