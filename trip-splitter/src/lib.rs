//! GTFS trip direction splitter.
//!
//! Assigns every trip of a route to one of the route's two configured
//! directions by matching its stop sequence against a reference sequence,
//! then orders the trip's stops along that reference.

pub mod agency;
pub mod domain;
pub mod feed;
pub mod generate;
pub mod splitter;
