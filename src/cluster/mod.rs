//! Clustering pass for marker overlays.
//!
//! This module holds the two halves of a recompute:
//!
//! - [`partition`]: the greedy first-match pass that splits items into
//!   proximity groups and singles (full algorithm notes on the function's
//!   module).
//! - [`collapse`]: dissolves undersized groups and replaces each remaining
//!   group with one synthetic item at the group's mean position.
//!
//! [`is_close`] is the standard proximity test (marker footprints projected
//! to screen space, tested for strict rectangle overlap), but [`partition`]
//! accepts any pairwise predicate, which keeps the pass testable without a
//! map view.
//!
//! ## Usage
//!
//! ```rust
//! use huddle::cluster::{collapse, partition, DEFAULT_MIN_GROUP_SIZE};
//! use huddle::geo::{GeoPoint, MarkerSize};
//! use huddle::{Marker, OverlayItem};
//!
//! #[derive(Clone, Debug, PartialEq)]
//! enum Visual {
//!     Pin,
//!     Cloud,
//! }
//!
//! impl Marker for Visual {
//!     fn intrinsic_size(&self) -> MarkerSize {
//!         MarkerSize::new(24, 24)
//!     }
//! }
//!
//! #[derive(Clone, Debug)]
//! struct Stop {
//!     at: GeoPoint,
//!     visual: Visual,
//! }
//!
//! impl OverlayItem for Stop {
//!     type Marker = Visual;
//!     fn position(&self) -> GeoPoint {
//!         self.at
//!     }
//!     fn set_marker(&mut self, marker: Visual) {
//!         self.visual = marker;
//!     }
//! }
//!
//! let stops: Vec<Stop> = [(0, 0), (0, 10), (0, 20), (5_000, 5_000)]
//!     .into_iter()
//!     .map(|(lat, lon)| Stop { at: GeoPoint::new(lat, lon), visual: Visual::Pin })
//!     .collect();
//!
//! // Close when within 30 microdegrees on both axes.
//! let part = partition(stops, |a, b| {
//!     a.at.lat_e6.abs_diff(b.at.lat_e6) < 30 && a.at.lon_e6.abs_diff(b.at.lon_e6) < 30
//! });
//! assert_eq!(part.groups.len(), 1);
//! assert_eq!(part.singles.len(), 1);
//!
//! let visible = collapse(part, DEFAULT_MIN_GROUP_SIZE, &Visual::Cloud, |centroid| Stop {
//!     at: centroid,
//!     visual: Visual::Pin,
//! });
//! assert_eq!(visible.len(), 2);
//! ```

mod greedy;
mod proximity;
mod traits;

pub use greedy::{collapse, partition, Partition, DEFAULT_MIN_GROUP_SIZE};
pub use proximity::is_close;
pub use traits::{Marker, OverlayItem, Projection};
