//! Headsign merging and reported directions.
//!
//! A route normally reports its two configured directions. It reports a
//! single merged direction instead when the route has the merge override
//! or when both directions carry the same headsign. Either way the merge
//! must be allow-listed for that route and headsign pair.

use std::collections::HashMap;

use tracing::debug;

use crate::domain::{DirectionLabel, RouteId};

use super::classify::Assignment;
use super::error::SplitError;
use super::spec::{DirectionIndex, RouteDirectionSpec};

/// An allow-listed headsign merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowedMerge {
    pub route_id: RouteId,
    pub headsigns: [String; 2],
    /// Headsign reported for the merged direction.
    pub into: String,
}

/// Allow-list of headsign merges.
#[derive(Debug, Clone, Default)]
pub struct HeadsignMergePolicy {
    /// Keyed by route and the headsign pair in sorted order.
    allowed: HashMap<(RouteId, String, String), String>,
}

impl HeadsignMergePolicy {
    /// Create a policy that allows no merges.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allow one merge. A later entry for the same route and pair replaces
    /// an earlier one.
    pub fn allow(&mut self, merge: AllowedMerge) {
        let [a, b] = merge.headsigns;
        self.allowed.insert(pair_key(merge.route_id, a, b), merge.into);
    }

    /// Resolve the headsign for merging `first` and `second` on a route.
    ///
    /// The pair is unordered. Returns [`SplitError::UnexpectedMerge`] if the
    /// merge is not allow-listed, including when both headsigns are equal.
    pub fn merge(&self, route_id: RouteId, first: &str, second: &str) -> Result<&str, SplitError> {
        self.allowed
            .get(&pair_key(route_id, first.to_string(), second.to_string()))
            .map(String::as_str)
            .ok_or_else(|| SplitError::UnexpectedMerge {
                route_id,
                first: first.to_string(),
                second: second.to_string(),
            })
    }

    /// Number of allow-listed merges.
    pub fn len(&self) -> usize {
        self.allowed.len()
    }

    /// Returns true if no merges are allowed.
    pub fn is_empty(&self) -> bool {
        self.allowed.is_empty()
    }
}

fn pair_key(route_id: RouteId, a: String, b: String) -> (RouteId, String, String) {
    if a <= b { (route_id, a, b) } else { (route_id, b, a) }
}

/// A direction as reported to the writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportedDirection {
    pub label: DirectionLabel,
    pub headsign: String,
}

/// The directions a route reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportedDirections {
    Split([ReportedDirection; 2]),
    Merged(ReportedDirection),
}

impl ReportedDirections {
    /// Resolve a route's reported directions against the merge policy.
    pub fn resolve(
        route: &RouteDirectionSpec,
        policy: &HeadsignMergePolicy,
    ) -> Result<Self, SplitError> {
        let [first, second] = route.directions();

        if route.merges_directions() || first.headsign() == second.headsign() {
            let headsign = policy.merge(route.route_id(), first.headsign(), second.headsign())?;
            debug!(
                route = %route.route_id(),
                first = first.headsign(),
                second = second.headsign(),
                merged = headsign,
                "merged directions"
            );
            return Ok(ReportedDirections::Merged(ReportedDirection {
                label: first.label(),
                headsign: headsign.to_string(),
            }));
        }

        Ok(ReportedDirections::Split(DirectionIndex::BOTH.map(|idx| {
            let direction = route.direction(idx);
            ReportedDirection {
                label: direction.label(),
                headsign: direction.headsign().to_string(),
            }
        })))
    }

    /// The reported direction a classified trip belongs to.
    ///
    /// A merged assignment on a split route can only come from classifying
    /// against a different spec; it maps to the first direction.
    pub fn for_assignment(&self, assignment: Assignment) -> &ReportedDirection {
        match (self, assignment) {
            (ReportedDirections::Merged(merged), _) => merged,
            (ReportedDirections::Split(both), Assignment::Direction(idx)) => &both[idx.index()],
            (ReportedDirections::Split(both), Assignment::Merged) => &both[0],
        }
    }

    /// All reported directions.
    pub fn as_slice(&self) -> &[ReportedDirection] {
        match self {
            ReportedDirections::Split(both) => both,
            ReportedDirections::Merged(merged) => std::slice::from_ref(merged),
        }
    }

    pub fn is_merged(&self) -> bool {
        matches!(self, ReportedDirections::Merged(_))
    }
}
