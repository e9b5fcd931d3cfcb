//! Splitter error types.

use crate::domain::RouteId;

/// Errors from direction splitting.
///
/// Every variant means the configured reference sequences no longer
/// describe the feed. Generation must stop so the configuration can be
/// fixed; none of these are retried or skipped.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SplitError {
    /// Trip matches both directions with the same score
    #[error(
        "trip {trip_id} on route {route_id} matches both directions equally (score {score})"
    )]
    AmbiguousDirection {
        route_id: RouteId,
        trip_id: String,
        score: usize,
    },

    /// Trip shares no ordered stops with either direction
    #[error("trip {trip_id} on route {route_id} matches neither direction")]
    NoMatch { route_id: RouteId, trip_id: String },

    /// Headsign merge requested that is not allow-listed
    #[error("unexpected headsign merge on route {route_id}: {first:?} & {second:?}")]
    UnexpectedMerge {
        route_id: RouteId,
        first: String,
        second: String,
    },

    /// Direction spec violates its construction invariants
    #[error("invalid direction spec for route {route_id}: {reason}")]
    InvalidSpec { route_id: RouteId, reason: String },
}
