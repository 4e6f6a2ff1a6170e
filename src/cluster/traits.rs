use crate::geo::{GeoPoint, MarkerSize, PixelPoint};

/// View-state-dependent mapping from geographic positions to screen pixels.
///
/// Supplied by the host per display pass; assumed synchronous and
/// side-effect-free. Returns `None` while the view has no valid projection
/// (e.g. before layout), in which case proximity tests treat the affected
/// points as never close.
pub trait Projection {
    /// Project a position for the current pan/zoom state.
    fn to_pixels(&self, position: GeoPoint) -> Option<PixelPoint>;
}

/// A marker visual. The overlay never draws it; it only needs the on-screen
/// footprint for proximity tests, and hands clones to items it rebuilds.
pub trait Marker: Clone {
    /// Intrinsic footprint of this marker in pixels.
    fn intrinsic_size(&self) -> MarkerSize;
}

/// A point entity with a geographic position and an assignable marker visual.
pub trait OverlayItem {
    /// The marker visual type carried by this item.
    type Marker: Marker;

    /// Geographic position of this item.
    fn position(&self) -> GeoPoint;

    /// Replace this item's marker visual.
    fn set_marker(&mut self, marker: Self::Marker);
}
