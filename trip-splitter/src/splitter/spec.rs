//! Per-route direction specifications.

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::domain::{DirectionLabel, RouteId, StopId, StopVisit};

use super::error::SplitError;
use super::order::{Placement, StopOrderKey};

/// One position in a direction's reference stop sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReferenceEntry {
    /// A stop visited once at this position.
    Stop(StopId),

    /// A logical stop served by several physical stop ids (e.g. alternate
    /// bays at an exchange). Any of the ids matches this position.
    Equivalent {
        anchor: StopId,
        alternates: Vec<StopId>,
    },

    /// A stop only some trips serve. Used to place the stop when present,
    /// never counted when scoring a trip against the direction.
    Skip(StopId),
}

impl ReferenceEntry {
    /// The primary stop id of this entry.
    pub fn anchor(&self) -> &StopId {
        match self {
            ReferenceEntry::Stop(id) | ReferenceEntry::Skip(id) => id,
            ReferenceEntry::Equivalent { anchor, .. } => anchor,
        }
    }

    /// Whether this entry counts towards a trip's match score.
    pub fn is_scored(&self) -> bool {
        !matches!(self, ReferenceEntry::Skip(_))
    }

    /// Whether a visited stop id sits at this entry's position.
    pub fn accepts(&self, stop: &StopId) -> bool {
        match self {
            ReferenceEntry::Stop(id) | ReferenceEntry::Skip(id) => id == stop,
            ReferenceEntry::Equivalent { anchor, alternates } => {
                anchor == stop || alternates.contains(stop)
            }
        }
    }

    /// All stop ids that sit at this entry's position.
    pub fn stop_ids(&self) -> impl Iterator<Item = &StopId> {
        let alternates: &[StopId] = match self {
            ReferenceEntry::Equivalent { alternates, .. } => alternates,
            _ => &[],
        };
        std::iter::once(self.anchor()).chain(alternates)
    }
}

/// Which of a route's two directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DirectionIndex {
    First,
    Second,
}

impl DirectionIndex {
    /// Both indices, in order.
    pub const BOTH: [DirectionIndex; 2] = [DirectionIndex::First, DirectionIndex::Second];

    /// Array index (0 or 1).
    pub fn index(self) -> usize {
        match self {
            DirectionIndex::First => 0,
            DirectionIndex::Second => 1,
        }
    }
}

/// The canonical path of one direction of a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectionSpec {
    label: DirectionLabel,
    headsign: String,
    reference: Vec<ReferenceEntry>,
}

impl DirectionSpec {
    /// Create a direction spec. Validation happens when the spec is
    /// paired with its opposite direction in [`RouteDirectionSpec::new`].
    pub fn new(
        label: DirectionLabel,
        headsign: impl Into<String>,
        reference: Vec<ReferenceEntry>,
    ) -> Self {
        Self {
            label,
            headsign: headsign.into(),
            reference,
        }
    }

    pub fn label(&self) -> DirectionLabel {
        self.label
    }

    /// Rider-facing headsign for trips in this direction.
    pub fn headsign(&self) -> &str {
        &self.headsign
    }

    /// Reference stop sequence, first entry to last.
    pub fn reference(&self) -> &[ReferenceEntry] {
        &self.reference
    }

    /// Position of the first reference entry that accepts `stop`.
    pub fn position_of(&self, stop: &StopId) -> Option<usize> {
        self.reference.iter().position(|e| e.accepts(stop))
    }

    /// Whether any entry (scored or skip) accepts `stop`.
    pub fn contains(&self, stop: &StopId) -> bool {
        self.position_of(stop).is_some()
    }

    /// Order two stop visits by their position in this direction.
    ///
    /// Visits are keyed by the first reference position of their stop.
    /// Stops outside the reference sort after every referenced stop.
    /// Ties fall back to the raw feed sequence number, so this is a total
    /// order over visits.
    pub fn compare_stop_order(&self, a: &StopVisit, b: &StopVisit) -> Ordering {
        self.order_key(a).cmp(&self.order_key(b))
    }

    fn order_key(&self, visit: &StopVisit) -> StopOrderKey {
        match self.position_of(&visit.stop_id) {
            Some(position) => StopOrderKey::new(position, Placement::At, visit.sequence),
            None => StopOrderKey::new(self.reference.len(), Placement::After, visit.sequence),
        }
    }

    fn all_stop_ids(&self) -> HashSet<&StopId> {
        self.reference.iter().flat_map(|e| e.stop_ids()).collect()
    }
}

/// Direction specifications for one route.
///
/// Built once from configuration and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteDirectionSpec {
    route_id: RouteId,
    directions: [DirectionSpec; 2],
    merge_directions: bool,
}

impl RouteDirectionSpec {
    /// Pair two direction specs for a route.
    ///
    /// Returns [`SplitError::InvalidSpec`] if:
    /// - either reference sequence is empty or has only skip entries
    /// - the two directions share a label
    /// - the two reference sequences share no stop id
    /// - an equivalent entry has no alternates or lists its anchor again
    pub fn new(
        route_id: RouteId,
        first: DirectionSpec,
        second: DirectionSpec,
    ) -> Result<Self, SplitError> {
        let invalid = |reason: String| SplitError::InvalidSpec { route_id, reason };

        for direction in [&first, &second] {
            if direction.reference.is_empty() {
                return Err(invalid(format!(
                    "direction {} has an empty reference sequence",
                    direction.label
                )));
            }
            if !direction.reference.iter().any(ReferenceEntry::is_scored) {
                return Err(invalid(format!(
                    "direction {} has only skip entries",
                    direction.label
                )));
            }
            for entry in &direction.reference {
                if let ReferenceEntry::Equivalent { anchor, alternates } = entry {
                    if alternates.is_empty() {
                        return Err(invalid(format!(
                            "equivalent entry {anchor} in direction {} has no alternates",
                            direction.label
                        )));
                    }
                    if alternates.contains(anchor) {
                        return Err(invalid(format!(
                            "equivalent entry {anchor} in direction {} lists itself as an alternate",
                            direction.label
                        )));
                    }
                }
            }
        }

        if first.label == second.label {
            return Err(invalid(format!(
                "both directions are labelled {}",
                first.label
            )));
        }

        let first_ids = first.all_stop_ids();
        if second.all_stop_ids().is_disjoint(&first_ids) {
            return Err(invalid(
                "directions share no stop to anchor on".to_string(),
            ));
        }

        Ok(Self {
            route_id,
            directions: [first, second],
            merge_directions: false,
        })
    }

    /// Force both directions into one reported direction.
    ///
    /// Used for routes whose directions overlap so much that trips cannot
    /// be told apart. Ties between directions then go to the merged
    /// direction instead of failing.
    pub fn with_merged_directions(mut self) -> Self {
        self.merge_directions = true;
        self
    }

    pub fn route_id(&self) -> RouteId {
        self.route_id
    }

    pub fn direction(&self, index: DirectionIndex) -> &DirectionSpec {
        &self.directions[index.index()]
    }

    pub fn directions(&self) -> &[DirectionSpec; 2] {
        &self.directions
    }

    /// Whether the route reports a single merged direction.
    pub fn merges_directions(&self) -> bool {
        self.merge_directions
    }
}
