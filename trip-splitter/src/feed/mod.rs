//! Feed input.
//!
//! GTFS parsing and calendar resolution happen upstream. This module only
//! defines the narrow hand-off: routes with their raw trips, plus the set
//! of service ids that survived calendar filtering.

mod convert;
mod error;
mod json;
mod types;

pub use convert::{convert_document, convert_route};
pub use error::FeedError;
pub use json::JsonFeed;
pub use types::{FeedDocument, FeedRouteDto, FeedStopTimeDto, FeedTripDto};

use crate::domain::{RawTrip, RouteColor, RouteId};

/// One route of the feed with its raw trips.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedRoute {
    pub route_id: RouteId,

    /// Color shipped in the feed, if any.
    pub color: Option<RouteColor>,

    pub trips: Vec<RawTrip>,
}

/// Trait for providing pre-parsed feed data.
///
/// This abstraction allows generation to be tested with in-memory data.
pub trait FeedSource {
    /// All routes of the agency.
    fn routes(&self) -> &[FeedRoute];

    /// Whether trips running under `service_id` should be kept.
    fn is_useful_service(&self, service_id: &str) -> bool;
}
