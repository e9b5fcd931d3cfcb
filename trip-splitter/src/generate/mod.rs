//! Feed generation.
//!
//! Runs every route of a feed through the direction splitter using one
//! agency's configuration. Any error stops generation for the whole feed:
//! a half-split schedule is worse than none.

mod output;

pub use output::{DirectionOutput, FeedOutput, RouteOutput, StopTimeOutput, TripOutput};

use tracing::{debug, info, warn};

use crate::agency::AgencyConfig;
use crate::domain::{RouteColor, RouteId};
use crate::feed::{FeedRoute, FeedSource};
use crate::splitter::{ReportedDirections, SplitError, classify};

/// Error from feed generation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    /// A trip could not be split, or a merge was not allowed
    #[error(transparent)]
    Split(#[from] SplitError),

    /// Route has no color in the feed and none configured
    #[error("unexpected route color for route {0}")]
    UnexpectedRouteColor(RouteId),

    /// Route has no direction spec
    #[error("route {0} has no direction spec configured")]
    RouteNotConfigured(RouteId),
}

/// Generates split output for one agency.
pub struct Generator<'a> {
    config: &'a AgencyConfig,
}

impl<'a> Generator<'a> {
    /// Create a new generator.
    pub fn new(config: &'a AgencyConfig) -> Self {
        Self { config }
    }

    /// Process every route of the feed.
    pub fn run<F: FeedSource>(&self, feed: &F) -> Result<FeedOutput, GenerateError> {
        let mut routes = Vec::with_capacity(feed.routes().len());
        for route in feed.routes() {
            routes.push(self.process_route(route, feed)?);
        }

        let trips: usize = routes.iter().map(|r| r.trips.len()).sum();
        info!(
            agency = self.config.name(),
            routes = routes.len(),
            trips,
            "generated feed"
        );

        Ok(FeedOutput {
            agency_name: self.config.name().to_string(),
            agency_color: self.config.color().as_str().to_string(),
            routes,
        })
    }

    /// Color for a route.
    ///
    /// The feed's own color wins; otherwise the configured color.
    pub fn route_color(&self, route: &FeedRoute) -> Result<RouteColor, GenerateError> {
        route
            .color
            .or_else(|| self.config.route_color(route.route_id))
            .ok_or(GenerateError::UnexpectedRouteColor(route.route_id))
    }

    fn process_route<F: FeedSource>(
        &self,
        route: &FeedRoute,
        feed: &F,
    ) -> Result<RouteOutput, GenerateError> {
        let color = self.route_color(route)?;
        let spec = self
            .config
            .route_spec(route.route_id)
            .ok_or(GenerateError::RouteNotConfigured(route.route_id))?;
        let reported = ReportedDirections::resolve(spec, self.config.merge_policy())?;

        let mut trips = Vec::with_capacity(route.trips.len());
        let mut skipped = 0;
        for trip in &route.trips {
            if !feed.is_useful_service(trip.service_id()) {
                skipped += 1;
                continue;
            }

            let classification = classify(spec, trip)?;
            let direction = reported.for_assignment(classification.assignment());
            debug!(
                route = %route.route_id,
                trip = trip.trip_id(),
                direction = %direction.label,
                scores = ?classification.scores(),
                "classified trip"
            );

            trips.push(TripOutput {
                trip_id: trip.trip_id().to_string(),
                service_id: trip.service_id().to_string(),
                direction: direction.label.as_str().to_string(),
                headsign: direction.headsign.clone(),
                stop_times: classification
                    .into_sorted_stops()
                    .iter()
                    .map(StopTimeOutput::from)
                    .collect(),
            });
        }

        if trips.is_empty() && skipped > 0 {
            warn!(route = %route.route_id, skipped, "no trips in service");
        }

        info!(
            route = %route.route_id,
            color = %color,
            trips = trips.len(),
            skipped,
            merged = reported.is_merged(),
            "split route"
        );

        Ok(RouteOutput {
            route_id: route.route_id.get(),
            color: color.as_str().to_string(),
            directions: reported.as_slice().iter().map(DirectionOutput::from).collect(),
            trips,
            skipped_trips: skipped,
        })
    }
}
