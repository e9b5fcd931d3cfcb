//! Direction labels.

use std::fmt;

/// Error returned when parsing an unknown direction label.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid direction label {0:?}: expected north, south, east, west, 0 or 1")]
pub struct InvalidDirectionLabel(String);

/// Label attached to one of a route's two directions.
///
/// Most routes are labelled with a compass direction. Routes whose two
/// directions don't map onto a compass axis (regional routes, loops) use the
/// GTFS binary `direction_id` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DirectionLabel {
    North,
    South,
    East,
    West,
    /// GTFS `direction_id = 0`
    Zero,
    /// GTFS `direction_id = 1`
    One,
}

impl DirectionLabel {
    /// Parse a label as written in agency configuration.
    ///
    /// Compass points are case-insensitive.
    pub fn parse(s: &str) -> Result<Self, InvalidDirectionLabel> {
        match s.to_ascii_lowercase().as_str() {
            "north" => Ok(DirectionLabel::North),
            "south" => Ok(DirectionLabel::South),
            "east" => Ok(DirectionLabel::East),
            "west" => Ok(DirectionLabel::West),
            "0" => Ok(DirectionLabel::Zero),
            "1" => Ok(DirectionLabel::One),
            _ => Err(InvalidDirectionLabel(s.to_string())),
        }
    }

    /// Canonical string form, as accepted by [`DirectionLabel::parse`].
    pub fn as_str(&self) -> &'static str {
        match self {
            DirectionLabel::North => "north",
            DirectionLabel::South => "south",
            DirectionLabel::East => "east",
            DirectionLabel::West => "west",
            DirectionLabel::Zero => "0",
            DirectionLabel::One => "1",
        }
    }
}

impl fmt::Display for DirectionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
