//! Route identifier and branding color types.

use std::fmt;

/// Error returned when parsing an invalid route id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid route id {input:?}: {reason}")]
pub struct InvalidRouteId {
    input: String,
    reason: &'static str,
}

/// Numeric route identifier.
///
/// The agency publishes route short names that are plain integers ("1",
/// "61", "90"), and those short names are used directly as route ids.
///
/// # Examples
///
/// ```
/// use trip_splitter::domain::RouteId;
///
/// let route = RouteId::parse("61").unwrap();
/// assert_eq!(route.get(), 61);
///
/// assert!(RouteId::parse("61A").is_err());
/// assert!(RouteId::parse("").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouteId(u64);

impl RouteId {
    /// Create a route id from a number.
    pub const fn new(id: u64) -> Self {
        RouteId(id)
    }

    /// Parse a route id from a route short name.
    pub fn parse(short_name: &str) -> Result<Self, InvalidRouteId> {
        if short_name.is_empty() {
            return Err(InvalidRouteId {
                input: short_name.to_string(),
                reason: "must not be empty",
            });
        }

        if !short_name.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidRouteId {
                input: short_name.to_string(),
                reason: "must contain only ASCII digits",
            });
        }

        short_name.parse().map(RouteId).map_err(|_| InvalidRouteId {
            input: short_name.to_string(),
            reason: "out of range",
        })
    }

    /// Returns the numeric id.
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned when parsing an invalid route color.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid route color {input:?}: {reason}")]
pub struct InvalidRouteColor {
    input: String,
    reason: &'static str,
}

/// A route branding color as six hex digits (GTFS `route_color`).
///
/// Stored uppercase, so `"34b233"` and `"34B233"` are the same color.
///
/// # Examples
///
/// ```
/// use trip_splitter::domain::RouteColor;
///
/// let green = RouteColor::parse("34b233").unwrap();
/// assert_eq!(green.as_str(), "34B233");
///
/// assert!(RouteColor::parse("#34B233").is_err());
/// assert!(RouteColor::parse("34B23").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct RouteColor([u8; 6]);

impl RouteColor {
    /// Parse a color from exactly six hex digits.
    pub fn parse(s: &str) -> Result<Self, InvalidRouteColor> {
        let bytes = s.as_bytes();

        if bytes.len() != 6 {
            return Err(InvalidRouteColor {
                input: s.to_string(),
                reason: "must be exactly 6 characters",
            });
        }

        let mut out = [0u8; 6];
        for (slot, &b) in out.iter_mut().zip(bytes) {
            if !b.is_ascii_hexdigit() {
                return Err(InvalidRouteColor {
                    input: s.to_string(),
                    reason: "must be hex digits 0-9 A-F",
                });
            }
            *slot = b.to_ascii_uppercase();
        }

        Ok(RouteColor(out))
    }

    /// Returns the color as a string slice.
    pub fn as_str(&self) -> &str {
        // SAFETY: We only store ASCII hex digits
        std::str::from_utf8(&self.0).unwrap()
    }
}

impl fmt::Debug for RouteColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RouteColor({})", self.as_str())
    }
}

impl fmt::Display for RouteColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any decimal string that fits in u64 parses to its value
        #[test]
        fn route_id_parses_numbers(n in 0u64..1_000_000) {
            prop_assert_eq!(RouteId::parse(&n.to_string()).unwrap().get(), n);
        }

        /// Parsing uppercases but otherwise preserves the color
        #[test]
        fn color_roundtrip(s in "[0-9a-fA-F]{6}") {
            let color = RouteColor::parse(&s).unwrap();
            prop_assert_eq!(color.as_str(), s.to_ascii_uppercase());
        }
    }
}
