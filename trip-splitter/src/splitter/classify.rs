//! Assigning a raw trip to one of its route's directions.

use tracing::trace;

use crate::domain::{RawTrip, StopId};

use super::error::SplitError;
use super::order::{OrderedStop, compare_stop_order, order_visits};
use super::score::align;
use super::spec::{DirectionIndex, RouteDirectionSpec};

/// Direction a trip was assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Assignment {
    /// One of the route's two directions.
    Direction(DirectionIndex),
    /// The route's single merged direction (merge override, tied scores).
    Merged,
}

/// Result of classifying one trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    assignment: Assignment,
    reference: DirectionIndex,
    scores: [usize; 2],
    stops: Vec<OrderedStop>,
}

impl Classification {
    pub fn assignment(&self) -> Assignment {
        self.assignment
    }

    /// Direction whose reference sequence ordered the stops.
    pub fn reference_direction(&self) -> DirectionIndex {
        self.reference
    }

    /// Match score against each direction.
    pub fn scores(&self) -> [usize; 2] {
        self.scores
    }

    pub fn score(&self, direction: DirectionIndex) -> usize {
        self.scores[direction.index()]
    }

    /// Ordered stops in the trip's visiting order.
    pub fn stops(&self) -> &[OrderedStop] {
        &self.stops
    }

    /// Ordered stops sorted by their ordering key.
    pub fn into_sorted_stops(mut self) -> Vec<OrderedStop> {
        self.stops.sort_by(compare_stop_order);
        self.stops
    }
}

/// Classify a trip into one of the route's directions and order its stops.
///
/// Each direction is scored by the longest order-preserving run of trip
/// stops found in its reference sequence. The strictly higher score wins.
///
/// # Errors
///
/// - [`SplitError::NoMatch`] if the trip scores zero against both directions.
/// - [`SplitError::AmbiguousDirection`] if both scores are equal and the
///   route does not merge its directions.
///
/// On a route that merges its directions the stops of every trip, clear
/// winners included, are ordered against the first direction's reference.
pub fn classify(route: &RouteDirectionSpec, trip: &RawTrip) -> Result<Classification, SplitError> {
    let stops: Vec<&StopId> = trip.stop_ids().collect();
    let [first, second] = DirectionIndex::BOTH
        .map(|idx| align(&stops, route.direction(idx).reference()));
    let scores = [first.score, second.score];

    trace!(
        route = %route.route_id(),
        trip = trip.trip_id(),
        first = scores[0],
        second = scores[1],
        "scored trip"
    );

    if scores == [0, 0] {
        return Err(SplitError::NoMatch {
            route_id: route.route_id(),
            trip_id: trip.trip_id().to_string(),
        });
    }

    let assignment = if scores[0] > scores[1] {
        Assignment::Direction(DirectionIndex::First)
    } else if scores[1] > scores[0] {
        Assignment::Direction(DirectionIndex::Second)
    } else if route.merges_directions() {
        Assignment::Merged
    } else {
        return Err(SplitError::AmbiguousDirection {
            route_id: route.route_id(),
            trip_id: trip.trip_id().to_string(),
            score: scores[0],
        });
    };

    // A merged route reports one direction, so every trip is keyed against
    // the same reference.
    let (reference, alignment) = match assignment {
        Assignment::Direction(DirectionIndex::Second) if !route.merges_directions() => {
            (DirectionIndex::Second, second)
        }
        _ => (DirectionIndex::First, first),
    };

    let stops = order_visits(route.direction(reference), trip.visits(), &alignment);

    Ok(Classification {
        assignment,
        reference,
        scores,
        stops,
    })
}
