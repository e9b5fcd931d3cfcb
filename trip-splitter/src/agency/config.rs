//! Immutable per-agency configuration.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::Path;

use tracing::debug;

use crate::domain::{RouteColor, RouteId};
use crate::splitter::{HeadsignMergePolicy, RouteDirectionSpec};

use super::dto::AgencyConfigDto;
use super::error::ConfigError;

/// Embedded configuration for Vernon Regional Transit System.
pub const VERNON_JSON: &str = include_str!("../../data/vernon.json");

/// Everything the generator needs to know about one agency.
///
/// Built once at startup; nothing mutates it afterwards, so it can be
/// shared freely.
#[derive(Debug, Clone)]
pub struct AgencyConfig {
    name: String,
    color: RouteColor,
    route_colors: HashMap<RouteId, RouteColor>,
    routes: HashMap<RouteId, RouteDirectionSpec>,
    merges: HeadsignMergePolicy,
}

impl AgencyConfig {
    /// Load the embedded Vernon configuration.
    pub fn vernon() -> Result<Self, ConfigError> {
        Self::from_json(VERNON_JSON)
    }

    /// Parse and validate a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let dto: AgencyConfigDto = serde_json::from_str(json)?;
        Self::from_dto(&dto)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    fn from_dto(dto: &AgencyConfigDto) -> Result<Self, ConfigError> {
        let color = RouteColor::parse(&dto.agency_color)?;

        let mut route_colors = HashMap::with_capacity(dto.route_colors.len());
        for (short_name, hex) in &dto.route_colors {
            let route_id = RouteId::parse(short_name)?;
            if route_colors.insert(route_id, RouteColor::parse(hex)?).is_some() {
                return Err(ConfigError::DuplicateRouteColor(route_id));
            }
        }

        let mut routes = HashMap::with_capacity(dto.routes.len());
        for route_dto in &dto.routes {
            let spec = route_dto.convert()?;
            match routes.entry(spec.route_id()) {
                Entry::Occupied(_) => return Err(ConfigError::DuplicateRoute(spec.route_id())),
                Entry::Vacant(slot) => {
                    slot.insert(spec);
                }
            }
        }

        // Such a route could never be generated
        if let Some(route_id) = route_colors.keys().filter(|id| !routes.contains_key(*id)).min() {
            return Err(ConfigError::ColorForUnknownRoute(*route_id));
        }

        let mut merges = HeadsignMergePolicy::new();
        for merge_dto in &dto.headsign_merges {
            let merge = merge_dto.convert()?;
            if !routes.contains_key(&merge.route_id) {
                return Err(ConfigError::MergeForUnknownRoute(merge.route_id));
            }
            merges.allow(merge);
        }

        debug!(
            agency = %dto.agency_name,
            routes = routes.len(),
            colors = route_colors.len(),
            merges = merges.len(),
            "loaded agency config"
        );

        Ok(Self {
            name: dto.agency_name.clone(),
            color,
            route_colors,
            routes,
            merges,
        })
    }

    /// Display name of the agency.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Default agency color.
    pub fn color(&self) -> RouteColor {
        self.color
    }

    /// Configured color for a route, if any.
    pub fn route_color(&self, route_id: RouteId) -> Option<RouteColor> {
        self.route_colors.get(&route_id).copied()
    }

    /// Direction specs for a route, if configured.
    pub fn route_spec(&self, route_id: RouteId) -> Option<&RouteDirectionSpec> {
        self.routes.get(&route_id)
    }

    /// Number of routes with direction specs.
    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    pub fn merge_policy(&self) -> &HeadsignMergePolicy {
        &self.merges
    }
}
