//! Proximity grouping for map marker overlays.
//!
//! `huddle` is a small library that keeps a 2D map view readable when many
//! point markers crowd together: nearby markers are gathered into groups, and
//! sufficiently large groups are replaced by a single synthetic marker at the
//! group's average position.
//!
//! The primary public API is [`overlay::GroupOverlay`], which owns the
//! renderer-facing visible list and recomputes it on zoom changes. The
//! underlying pass is exposed under [`cluster`]:
//! - greedy first-match partitioning into groups and singles
//! - marker-footprint overlap as the proximity test
//! - collapse of large groups into synthetic centroid items

#![forbid(unsafe_code)]

pub mod cluster;
pub mod error;
pub mod geo;
pub mod overlay;

pub use cluster::{
    collapse, is_close, partition, Marker, OverlayItem, Partition, Projection,
    DEFAULT_MIN_GROUP_SIZE,
};
pub use error::{Error, Result};
pub use geo::{GeoPoint, MarkerSize, PixelPoint};
pub use overlay::{GroupOverlay, OverlayHost};
