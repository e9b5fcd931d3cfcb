//! Agency configuration error types.

use std::path::PathBuf;

use crate::domain::{
    InvalidDirectionLabel, InvalidRouteColor, InvalidRouteId, InvalidStopId, RouteId,
};
use crate::splitter::SplitError;

/// Errors that can occur while loading agency configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Config is not valid JSON for the expected schema
    #[error("config JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    StopId(#[from] InvalidStopId),

    #[error(transparent)]
    RouteId(#[from] InvalidRouteId),

    #[error(transparent)]
    Color(#[from] InvalidRouteColor),

    #[error(transparent)]
    DirectionLabel(#[from] InvalidDirectionLabel),

    /// A direction spec failed validation
    #[error(transparent)]
    Spec(#[from] SplitError),

    /// Two direction specs for the same route
    #[error("route {0} is configured more than once")]
    DuplicateRoute(RouteId),

    /// Two colors for the same route (e.g. "7" and "07")
    #[error("route {0} has more than one color")]
    DuplicateRouteColor(RouteId),

    /// Route color configured for a route without a direction spec
    #[error("color configured for route {0}, which has no direction spec")]
    ColorForUnknownRoute(RouteId),

    /// Headsign merge names a route without a direction spec
    #[error("headsign merge configured for route {0}, which has no direction spec")]
    MergeForUnknownRoute(RouteId),
}
