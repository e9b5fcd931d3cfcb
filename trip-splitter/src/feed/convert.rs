//! Conversion from feed DTOs to domain types.

use std::collections::HashSet;

use crate::domain::{RawTrip, RouteColor, RouteId, StopId, StopVisit};

use super::FeedRoute;
use super::error::FeedError;
use super::types::{FeedDocument, FeedRouteDto, FeedTripDto};

/// Convert every route of a feed document.
///
/// Fails on the first invalid route or trip, and on routes that appear
/// more than once.
pub fn convert_document(doc: &FeedDocument) -> Result<Vec<FeedRoute>, FeedError> {
    let mut seen = HashSet::with_capacity(doc.routes.len());
    let mut routes = Vec::with_capacity(doc.routes.len());

    for dto in &doc.routes {
        let route = convert_route(dto)?;
        if !seen.insert(route.route_id) {
            return Err(FeedError::DuplicateRoute(dto.route_short_name.clone()));
        }
        routes.push(route);
    }

    Ok(routes)
}

/// Convert a single route and its trips.
pub fn convert_route(dto: &FeedRouteDto) -> Result<FeedRoute, FeedError> {
    let route_id =
        RouteId::parse(&dto.route_short_name).map_err(|source| FeedError::RouteId {
            route: dto.route_short_name.clone(),
            source,
        })?;

    // Empty route_color means "not set" in GTFS
    let color = match dto.route_color.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(hex) => Some(RouteColor::parse(hex).map_err(|source| FeedError::RouteColor {
            route: dto.route_short_name.clone(),
            source,
        })?),
    };

    let trips = dto
        .trips
        .iter()
        .map(convert_trip)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(FeedRoute {
        route_id,
        color,
        trips,
    })
}

fn convert_trip(dto: &FeedTripDto) -> Result<RawTrip, FeedError> {
    let visits = dto
        .stop_times
        .iter()
        .map(|st| {
            StopId::parse(&st.stop_id)
                .map(|id| StopVisit::new(id, st.stop_sequence))
                .map_err(|source| FeedError::StopId {
                    trip_id: dto.trip_id.clone(),
                    source,
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(RawTrip::new(dto.trip_id.clone(), dto.service_id.clone(), visits)?)
}
