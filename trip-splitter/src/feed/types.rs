//! Feed DTOs.
//!
//! The feed reader upstream has already parsed the GTFS archive and
//! resolved calendars. These types map directly to the JSON hand-off
//! document it produces. Field names follow GTFS column names.

use serde::Deserialize;

/// The pre-parsed feed for one agency.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedDocument {
    /// Service ids still running after calendar / calendar-date filtering.
    #[serde(default)]
    pub useful_service_ids: Vec<String>,

    pub routes: Vec<FeedRouteDto>,
}

/// One route with its trips.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedRouteDto {
    /// `route_short_name`, used as the route id.
    pub route_short_name: String,

    /// `route_color`. Often empty in the source feed.
    #[serde(default)]
    pub route_color: Option<String>,

    #[serde(default)]
    pub trips: Vec<FeedTripDto>,
}

/// One trip with its stop times.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedTripDto {
    pub trip_id: String,

    pub service_id: String,

    pub stop_times: Vec<FeedStopTimeDto>,
}

/// One `stop_times.txt` row, reduced.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedStopTimeDto {
    pub stop_id: String,

    pub stop_sequence: u32,
}
