//! Per-agency static configuration.
//!
//! Route colors, direction specs, merge overrides and the headsign merge
//! allow-list are kept as a JSON document, parsed once at startup into an
//! immutable [`AgencyConfig`]. The Vernon table ships embedded in the
//! binary.

mod config;
mod dto;
mod error;

pub use config::{AgencyConfig, VERNON_JSON};
pub use dto::{
    AgencyConfigDto, DirectionDto, HeadsignMergeDto, ReferenceEntryDto, RouteSpecDto,
    TaggedEntryDto,
};
pub use error::ConfigError;
