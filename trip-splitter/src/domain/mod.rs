//! Domain types for the trip splitter.
//!
//! This module contains the validated value types shared by configuration,
//! feed input and the splitter. All types enforce their invariants at
//! construction time, so code that receives these types can trust their
//! validity.

mod direction;
mod error;
mod route;
mod stop_id;
mod trip;

pub use direction::{DirectionLabel, InvalidDirectionLabel};
pub use error::DomainError;
pub use route::{InvalidRouteColor, InvalidRouteId, RouteColor, RouteId};
pub use stop_id::{InvalidStopId, StopId};
pub use trip::{RawTrip, StopVisit};
