//! Agency configuration DTOs and their conversion to splitter types.
//!
//! These types map directly to the JSON configuration document.

use serde::Deserialize;
use std::collections::BTreeMap;

use crate::domain::{DirectionLabel, RouteId, StopId};
use crate::splitter::{AllowedMerge, DirectionSpec, ReferenceEntry, RouteDirectionSpec};

use super::error::ConfigError;

/// Top-level agency configuration document.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AgencyConfigDto {
    /// Display name of the agency.
    pub agency_name: String,

    /// Default agency color (6 hex digits).
    pub agency_color: String,

    /// Route short name → color, for routes the feed ships without one.
    #[serde(default)]
    pub route_colors: BTreeMap<String, String>,

    /// Per-route direction specs.
    #[serde(default)]
    pub routes: Vec<RouteSpecDto>,

    /// Allow-listed headsign merges.
    #[serde(default)]
    pub headsign_merges: Vec<HeadsignMergeDto>,
}

/// Direction specs for one route.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RouteSpecDto {
    /// Route short name.
    pub route_id: String,

    /// Report one merged direction instead of two.
    #[serde(default)]
    pub merge_directions: bool,

    pub directions: [DirectionDto; 2],
}

/// One direction of a route.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DirectionDto {
    /// "north", "south", "east", "west", "0" or "1".
    pub label: String,

    pub headsign: String,

    /// Reference stop sequence.
    pub stops: Vec<ReferenceEntryDto>,
}

/// A reference entry: a bare stop id string, or a tagged object.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ReferenceEntryDto {
    Plain(String),
    Tagged(TaggedEntryDto),
}

/// Tagged reference entries: `{"skip": "id"}` or
/// `{"equivalent": {"anchor": "id", "alternates": ["id", ...]}}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaggedEntryDto {
    Equivalent {
        anchor: String,
        alternates: Vec<String>,
    },
    Skip(String),
}

/// An allow-listed headsign merge.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HeadsignMergeDto {
    pub route_id: String,
    pub headsigns: [String; 2],
    pub into: String,
}

impl ReferenceEntryDto {
    fn convert(&self) -> Result<ReferenceEntry, ConfigError> {
        Ok(match self {
            ReferenceEntryDto::Plain(id) => ReferenceEntry::Stop(StopId::parse(id)?),
            ReferenceEntryDto::Tagged(TaggedEntryDto::Skip(id)) => {
                ReferenceEntry::Skip(StopId::parse(id)?)
            }
            ReferenceEntryDto::Tagged(TaggedEntryDto::Equivalent { anchor, alternates }) => {
                ReferenceEntry::Equivalent {
                    anchor: StopId::parse(anchor)?,
                    alternates: alternates
                        .iter()
                        .map(|s| StopId::parse(s))
                        .collect::<Result<_, _>>()?,
                }
            }
        })
    }
}

impl DirectionDto {
    fn convert(&self) -> Result<DirectionSpec, ConfigError> {
        let label = DirectionLabel::parse(&self.label)?;
        let reference = self
            .stops
            .iter()
            .map(ReferenceEntryDto::convert)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(DirectionSpec::new(label, self.headsign.clone(), reference))
    }
}

impl RouteSpecDto {
    /// Convert and validate a route's direction specs.
    pub fn convert(&self) -> Result<RouteDirectionSpec, ConfigError> {
        let route_id = RouteId::parse(&self.route_id)?;
        let [first, second] = &self.directions;
        let spec = RouteDirectionSpec::new(route_id, first.convert()?, second.convert()?)?;
        Ok(if self.merge_directions {
            spec.with_merged_directions()
        } else {
            spec
        })
    }
}

impl HeadsignMergeDto {
    pub fn convert(&self) -> Result<AllowedMerge, ConfigError> {
        Ok(AllowedMerge {
            route_id: RouteId::parse(&self.route_id)?,
            headsigns: self.headsigns.clone(),
            into: self.into.clone(),
        })
    }
}
