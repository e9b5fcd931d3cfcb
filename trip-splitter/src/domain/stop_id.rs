//! Stop identifier type.

use std::fmt;

/// Error returned when parsing an invalid stop id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid stop id {input:?}: {reason}")]
pub struct InvalidStopId {
    input: String,
    reason: &'static str,
}

/// A GTFS stop id as it appears in `stops.txt` / `stop_times.txt`.
///
/// Feed stop ids are opaque strings. This type guarantees that any `StopId`
/// is non-empty and carries no surrounding whitespace, so two ids compare
/// equal exactly when the feed meant the same physical stop.
///
/// # Examples
///
/// ```
/// use trip_splitter::domain::StopId;
///
/// let bay_d = StopId::parse("144275").unwrap();
/// assert_eq!(bay_d.as_str(), "144275");
///
/// // Empty ids are rejected
/// assert!(StopId::parse("").is_err());
///
/// // Padded ids are rejected rather than silently trimmed
/// assert!(StopId::parse(" 144275").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StopId(String);

impl StopId {
    /// Parse a stop id from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidStopId> {
        if s.is_empty() {
            return Err(InvalidStopId {
                input: s.to_string(),
                reason: "must not be empty",
            });
        }

        if s.trim() != s {
            return Err(InvalidStopId {
                input: s.to_string(),
                reason: "must not have leading or trailing whitespace",
            });
        }

        Ok(StopId(s.to_string()))
    }

    /// Returns the stop id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StopId({})", self.0)
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
