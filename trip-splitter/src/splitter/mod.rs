//! Route direction trip splitting.
//!
//! Given a route's two canonical reference stop sequences, this module
//! decides which direction each raw trip runs in and orders the trip's
//! stops relative to that direction, so every trip of a direction can be
//! merged into one sorted stop list.
//!
//! Everything here is a pure function of its inputs. Specs are immutable
//! once built and safe to share across threads.

mod classify;
mod error;
mod merge;
mod order;
mod score;
mod spec;


pub use classify::{Assignment, Classification, classify};
pub use error::SplitError;
pub use merge::{AllowedMerge, HeadsignMergePolicy, ReportedDirection, ReportedDirections};
pub use order::{OrderedStop, Placement, StopOrderKey, compare_stop_order};
pub use score::match_score;
pub use spec::{DirectionIndex, DirectionSpec, ReferenceEntry, RouteDirectionSpec};
