//! Marker-footprint proximity test.
//!
//! Two items are "close" when the rectangles spanned by their marker
//! footprints, centered on their projected screen positions, overlap. Overlap
//! is strict: footprints that merely touch along an edge do not count.
//!
//! Both rectangles are sized from the same (default) marker footprint, so the
//! test is symmetric. A position that cannot be projected is never close to
//! anything.

use super::traits::Projection;
use crate::geo::{GeoPoint, MarkerSize, PixelPoint};

/// Axis-aligned screen rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct PixelRect {
    left: i32,
    top: i32,
    right: i32,
    bottom: i32,
}

impl PixelRect {
    /// Strict overlap: shared edges do not intersect.
    fn intersects(&self, other: &PixelRect) -> bool {
        self.left < other.right
            && other.left < self.right
            && self.top < other.bottom
            && other.top < self.bottom
    }
}

/// Rectangle spanned by a marker footprint centered on `center`.
///
/// The axes are transposed relative to screen space: the left/right extent is
/// built from `y` and the half-height, the top/bottom extent from `x` and the
/// half-width. Both operands of the overlap test use the same transposed
/// frame, so the pairing that is actually observable is `Δx` against the
/// footprint width and `Δy` against the footprint height.
fn marker_rect(center: PixelPoint, size: MarkerSize) -> PixelRect {
    let half_w = size.width / 2;
    let half_h = size.height / 2;
    PixelRect {
        left: center.y - half_h,
        top: center.x - half_w,
        right: center.y + half_h,
        bottom: center.x + half_w,
    }
}

/// Whether two positions are close for the current view state.
///
/// Projects both positions via `projection` and tests their marker footprints
/// for overlap. Either position failing to project means "not close".
pub fn is_close<P: Projection + ?Sized>(
    projection: &P,
    a: GeoPoint,
    b: GeoPoint,
    marker: MarkerSize,
) -> bool {
    let (Some(pa), Some(pb)) = (projection.to_pixels(a), projection.to_pixels(b)) else {
        return false;
    };
    marker_rect(pa, marker).intersects(&marker_rect(pb, marker))
}
