//! Scoring a trip against a reference stop sequence.
//!
//! The score is the length of the longest order-preserving common
//! subsequence between the trip's stops and the direction's scored
//! reference entries. Skip entries never match here.

use crate::domain::{RawTrip, StopId};

use super::spec::{DirectionSpec, ReferenceEntry};

/// Best alignment of a trip against one reference sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Alignment {
    /// Number of aligned stops.
    pub score: usize,

    /// `(visit index, reference position)` pairs, both strictly increasing.
    pub pairs: Vec<(usize, usize)>,
}

/// Match score of a trip against one direction.
pub fn match_score(direction: &DirectionSpec, trip: &RawTrip) -> usize {
    let stops: Vec<&StopId> = trip.stop_ids().collect();
    align(&stops, direction.reference()).score
}

/// Align trip stops against reference entries.
///
/// Classic O(n·m) LCS table, then a backtrack that prefers the diagonal,
/// then dropping a trip stop, so the alignment is deterministic.
pub(crate) fn align(stops: &[&StopId], reference: &[ReferenceEntry]) -> Alignment {
    let n = stops.len();
    let m = reference.len();

    // table[i][j] = LCS of stops[i..] and reference[j..]
    let mut table = vec![vec![0usize; m + 1]; n + 1];
    for i in (0..n).rev() {
        for j in (0..m).rev() {
            table[i][j] = if matches(stops[i], &reference[j]) {
                table[i + 1][j + 1] + 1
            } else {
                table[i + 1][j].max(table[i][j + 1])
            };
        }
    }

    let mut pairs = Vec::with_capacity(table[0][0]);
    let (mut i, mut j) = (0, 0);
    while i < n && j < m {
        if matches(stops[i], &reference[j]) && table[i][j] == table[i + 1][j + 1] + 1 {
            pairs.push((i, j));
            i += 1;
            j += 1;
        } else if table[i + 1][j] >= table[i][j + 1] {
            i += 1;
        } else {
            j += 1;
        }
    }

    Alignment {
        score: table[0][0],
        pairs,
    }
}

fn matches(stop: &StopId, entry: &ReferenceEntry) -> bool {
    entry.is_scored() && entry.accepts(stop)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DirectionLabel, StopVisit};

    fn stop(s: &str) -> StopId {
        StopId::parse(s).unwrap()
    }

    fn plain(ids: &[&str]) -> Vec<ReferenceEntry> {
        ids.iter().map(|s| ReferenceEntry::Stop(stop(s))).collect()
    }

    fn align_strs(trip: &[&str], reference: &[ReferenceEntry]) -> Alignment {
        let ids: Vec<StopId> = trip.iter().map(|s| stop(s)).collect();
        let refs: Vec<&StopId> = ids.iter().collect();
        align(&refs, reference)
    }

    #[test]
    fn exact_subsequence_scores_its_length() {
        let a = align_strs(&["A", "C", "D"], &plain(&["A", "B", "C", "D"]));
        assert_eq!(a.score, 3);
        assert_eq!(a.pairs, vec![(0, 0), (1, 2), (2, 3)]);
    }

    #[test]
    fn reversed_trip_scores_one() {
        let a = align_strs(&["D", "C", "B", "A"], &plain(&["A", "B", "C", "D"]));
        assert_eq!(a.score, 1);
        assert_eq!(a.pairs.len(), 1);
    }

    #[test]
    fn no_shared_stops_scores_zero() {
        let a = align_strs(&["X", "Y"], &plain(&["A", "B"]));
        assert_eq!(a.score, 0);
        assert!(a.pairs.is_empty());
    }

    #[test]
    fn empty_trip_scores_zero() {
        let a = align_strs(&[], &plain(&["A", "B"]));
        assert_eq!(a.score, 0);
    }

    #[test]
    fn skip_entries_are_not_scored() {
        let reference = vec![
            ReferenceEntry::Stop(stop("A")),
            ReferenceEntry::Skip(stop("S")),
            ReferenceEntry::Stop(stop("B")),
        ];
        let a = align_strs(&["A", "S", "B"], &reference);
        assert_eq!(a.score, 2);
        assert_eq!(a.pairs, vec![(0, 0), (2, 2)]);
    }

    #[test]
    fn equivalent_alternates_match_anchor_position() {
        let reference = vec![
            ReferenceEntry::Equivalent {
                anchor: stop("BAY_A"),
                alternates: vec![stop("BAY_B")],
            },
            ReferenceEntry::Stop(stop("X")),
        ];
        let a = align_strs(&["BAY_B", "X"], &reference);
        assert_eq!(a.score, 2);
        assert_eq!(a.pairs, vec![(0, 0), (1, 1)]);
    }

    #[test]
    fn repeated_reference_stop_aligns_in_order() {
        // Loop that passes the same stop on the way out and back.
        let a = align_strs(&["A", "L", "B", "L", "C"], &plain(&["A", "L", "B", "L", "C"]));
        assert_eq!(a.score, 5);
        assert_eq!(a.pairs, vec![(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)]);
    }

    #[test]
    fn match_score_uses_trip_stops() {
        let dir = DirectionSpec::new(DirectionLabel::North, "N", plain(&["A", "B", "C"]));
        let trip = RawTrip::new(
            "t",
            "s",
            vec![StopVisit::new(stop("B"), 2), StopVisit::new(stop("A"), 1)],
        )
        .unwrap();
        assert_eq!(match_score(&dir, &trip), 2);
    }
}
