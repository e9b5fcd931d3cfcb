//! Output DTOs handed to the writer.

use serde::Serialize;

use crate::splitter::{OrderedStop, ReportedDirection};

/// Everything generated for one agency.
#[derive(Debug, Clone, Serialize)]
pub struct FeedOutput {
    pub agency_name: String,

    pub agency_color: String,

    pub routes: Vec<RouteOutput>,
}

/// One route: color, reported directions and classified trips.
#[derive(Debug, Clone, Serialize)]
pub struct RouteOutput {
    pub route_id: u64,

    pub color: String,

    /// One entry, or two if the route's directions are not merged.
    pub directions: Vec<DirectionOutput>,

    pub trips: Vec<TripOutput>,

    /// Trips dropped because their service id is not in use.
    pub skipped_trips: usize,
}

/// A reported direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectionOutput {
    /// Direction label ("north", "0", ...)
    pub label: String,

    pub headsign: String,
}

impl From<&ReportedDirection> for DirectionOutput {
    fn from(direction: &ReportedDirection) -> Self {
        Self {
            label: direction.label.as_str().to_string(),
            headsign: direction.headsign.clone(),
        }
    }
}

/// A classified trip.
#[derive(Debug, Clone, Serialize)]
pub struct TripOutput {
    pub trip_id: String,

    pub service_id: String,

    /// Label of the reported direction
    pub direction: String,

    pub headsign: String,

    /// Stop times sorted by ordering key.
    pub stop_times: Vec<StopTimeOutput>,
}

/// A stop time with its ordering key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StopTimeOutput {
    pub stop_id: String,

    pub stop_sequence: u32,

    /// Reference position within the direction
    pub position: usize,

    /// "before", "at" or "after" the position
    pub placement: &'static str,
}

impl From<&OrderedStop> for StopTimeOutput {
    fn from(stop: &OrderedStop) -> Self {
        Self {
            stop_id: stop.visit.stop_id.as_str().to_string(),
            stop_sequence: stop.visit.sequence,
            position: stop.key.position,
            placement: stop.key.placement.as_str(),
        }
    }
}
