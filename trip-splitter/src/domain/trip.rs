//! Raw trips as handed over by the feed reader.

use super::{DomainError, StopId};

/// One stop visit of a trip (a `stop_times.txt` row reduced to what
/// direction splitting needs).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StopVisit {
    /// The stop visited.
    pub stop_id: StopId,

    /// GTFS `stop_sequence`. Increases along the trip but need not be
    /// contiguous.
    pub sequence: u32,
}

impl StopVisit {
    /// Create a new stop visit.
    pub fn new(stop_id: StopId, sequence: u32) -> Self {
        Self { stop_id, sequence }
    }
}

/// A trip read from the feed, not yet assigned to a direction.
///
/// Visits are always held in ascending `sequence` order and sequence
/// numbers are unique within the trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTrip {
    trip_id: String,
    service_id: String,
    visits: Vec<StopVisit>,
}

impl RawTrip {
    /// Create a trip from its visits, in any order.
    ///
    /// Visits are sorted by sequence number. Returns an error if two
    /// visits share a sequence number or the trip id is empty.
    pub fn new(
        trip_id: impl Into<String>,
        service_id: impl Into<String>,
        mut visits: Vec<StopVisit>,
    ) -> Result<Self, DomainError> {
        let trip_id = trip_id.into();
        if trip_id.is_empty() {
            return Err(DomainError::EmptyTripId);
        }

        visits.sort_by_key(|v| v.sequence);

        if let Some(pair) = visits.windows(2).find(|w| w[0].sequence == w[1].sequence) {
            return Err(DomainError::DuplicateSequence {
                trip_id,
                sequence: pair[0].sequence,
            });
        }

        Ok(Self {
            trip_id,
            service_id: service_id.into(),
            visits,
        })
    }

    /// The GTFS trip id.
    pub fn trip_id(&self) -> &str {
        &self.trip_id
    }

    /// The GTFS service id the trip runs under.
    pub fn service_id(&self) -> &str {
        &self.service_id
    }

    /// Visits in ascending sequence order.
    pub fn visits(&self) -> &[StopVisit] {
        &self.visits
    }

    /// Stop ids in visiting order.
    pub fn stop_ids(&self) -> impl Iterator<Item = &StopId> {
        self.visits.iter().map(|v| &v.stop_id)
    }
}
