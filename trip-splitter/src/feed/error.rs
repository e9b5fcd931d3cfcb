//! Feed input error types.

use std::path::PathBuf;

use crate::domain::{DomainError, InvalidRouteColor, InvalidRouteId, InvalidStopId};

/// Errors that can occur while reading feed input.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// Feed file could not be read
    #[error("failed to read feed {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Feed is not valid JSON for the expected schema
    #[error("feed JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("route {route}: {source}")]
    RouteId {
        route: String,
        source: InvalidRouteId,
    },

    #[error("route {route}: {source}")]
    RouteColor {
        route: String,
        source: InvalidRouteColor,
    },

    #[error("trip {trip_id}: {source}")]
    StopId {
        trip_id: String,
        source: InvalidStopId,
    },

    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The same route appears twice in the feed
    #[error("route {0} appears more than once in the feed")]
    DuplicateRoute(String),
}
