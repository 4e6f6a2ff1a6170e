//! The renderer-facing overlay.
//!
//! [`GroupOverlay`] owns the visible item list and decides when to rebuild it.
//! A display driver calls [`GroupOverlay::prepare_draw`] once per frame with
//! the current zoom identifier and projection; the overlay reruns the
//! clustering pass only when the zoom changed or a refresh was requested, and
//! otherwise leaves the visible list untouched. Render queries ([`len`],
//! [`item`]) and the rebuild take the same lock, so a reader never observes a
//! half-replaced list.
//!
//! The host side is wired in by composition through [`OverlayHost`]: the host
//! supplies the original items, builds synthetic group items, and receives
//! tap events.
//!
//! [`len`]: GroupOverlay::len
//! [`item`]: GroupOverlay::item

use std::sync::{Mutex, MutexGuard, PoisonError};

use log::debug;

use crate::cluster::{
    collapse, is_close, partition, Marker, OverlayItem, Projection, DEFAULT_MIN_GROUP_SIZE,
};
use crate::error::{Error, Result};
use crate::geo::GeoPoint;

/// Capabilities the host application supplies to an overlay.
///
/// The original item list is owned by the host and never mutated by the
/// overlay; it must stay stable for the duration of one `prepare_draw` call.
pub trait OverlayHost {
    /// Item type flowing through this overlay.
    type Item: OverlayItem + Clone;

    /// Number of original items.
    fn item_count(&self) -> usize;

    /// Original item at `index`. Called only with `index < item_count()`.
    fn item_at(&self, index: usize) -> Self::Item;

    /// Build a synthetic item standing in for a group, at the group's mean
    /// position. The overlay assigns the group marker afterwards.
    fn new_group_item(&self, centroid: GeoPoint) -> Self::Item;

    /// A visible item was tapped. The return value is handed back to the
    /// display driver unchanged.
    fn tapped(&self, item: &Self::Item) -> bool;
}

struct State<T> {
    visible: Vec<T>,
    last_zoom: Option<i32>,
    refresh: bool,
    focused: Option<usize>,
}

/// A marker overlay that groups nearby items into synthetic cluster markers.
///
/// Configured builder-style:
///
/// - [`with_group_marker`](Self::with_group_marker) enables clustering; with
///   no group marker the overlay mirrors the host's item list 1:1.
/// - [`with_min_group_size`](Self::with_min_group_size) sets the size below
///   which a group dissolves back into individuals (default
///   [`DEFAULT_MIN_GROUP_SIZE`]).
pub struct GroupOverlay<H: OverlayHost> {
    host: H,
    default_marker: <H::Item as OverlayItem>::Marker,
    group_marker: Option<<H::Item as OverlayItem>::Marker>,
    min_group_size: usize,
    state: Mutex<State<H::Item>>,
}

impl<H: OverlayHost> GroupOverlay<H> {
    /// Create an overlay over `host` with clustering disabled.
    pub fn new(host: H, default_marker: <H::Item as OverlayItem>::Marker) -> Self {
        Self {
            host,
            default_marker,
            group_marker: None,
            min_group_size: DEFAULT_MIN_GROUP_SIZE,
            state: Mutex::new(State {
                visible: Vec::new(),
                last_zoom: None,
                refresh: false,
                focused: None,
            }),
        }
    }

    /// Set the marker for synthetic group items, enabling clustering.
    pub fn with_group_marker(mut self, marker: <H::Item as OverlayItem>::Marker) -> Self {
        self.group_marker = Some(marker);
        self
    }

    /// Set the minimum member count for a group to survive aggregation.
    ///
    /// Values of 0 and 1 behave identically: every group aggregates, since
    /// groups never form with fewer than two members.
    pub fn with_min_group_size(mut self, min_group_size: usize) -> Self {
        self.min_group_size = min_group_size;
        self
    }

    /// The marker worn by individual items.
    pub fn default_marker(&self) -> &<H::Item as OverlayItem>::Marker {
        &self.default_marker
    }

    /// The marker worn by synthetic group items, if clustering is enabled.
    pub fn group_marker(&self) -> Option<&<H::Item as OverlayItem>::Marker> {
        self.group_marker.as_ref()
    }

    /// The host this overlay reads from.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Force a rebuild on the next display pass, regardless of zoom.
    ///
    /// Call after the host's original item set changes.
    pub fn request_refresh(&self) {
        self.lock_state().refresh = true;
    }

    /// Run the recompute trigger for one display pass.
    ///
    /// Rebuilds the visible list when the zoom level differs from the last
    /// pass or a refresh was requested; otherwise a no-op. The whole rebuild,
    /// including the list swap, happens under the state lock.
    pub fn prepare_draw<P: Projection + ?Sized>(&self, zoom: i32, projection: &P) {
        if self.group_marker.is_none() {
            return;
        }

        let mut state = self.lock_state();
        if state.last_zoom == Some(zoom) && !state.refresh {
            return;
        }
        state.refresh = false;
        state.last_zoom = Some(zoom);
        self.rebuild(&mut state, zoom, projection);
    }

    fn rebuild<P: Projection + ?Sized>(&self, state: &mut State<H::Item>, zoom: i32, projection: &P) {
        let Some(group_marker) = &self.group_marker else {
            return;
        };

        let originals: Vec<H::Item> = (0..self.host.item_count())
            .map(|i| self.host.item_at(i))
            .collect();
        let total = originals.len();

        let footprint = self.default_marker.intrinsic_size();
        let part = partition(originals, |a, b| {
            is_close(projection, a.position(), b.position(), footprint)
        });
        debug!(
            "regrouping {} items at zoom {}: {} groups, {} singles",
            total,
            zoom,
            part.groups.len(),
            part.singles.len()
        );

        state.visible = collapse(part, self.min_group_size, group_marker, |centroid| {
            self.host.new_group_item(centroid)
        });
        // Indices changed meaning; any held focus is stale.
        state.focused = None;
    }

    /// Number of currently visible items.
    ///
    /// With clustering disabled this is the host's item count.
    pub fn len(&self) -> usize {
        if self.group_marker.is_none() {
            return self.host.item_count();
        }
        self.lock_state().visible.len()
    }

    /// Whether no items are currently visible.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Visible item at `index`, or `None` past the end.
    ///
    /// With clustering disabled this reads straight from the host, so the
    /// visible list mirrors the original list in identity and order.
    pub fn item(&self, index: usize) -> Option<H::Item> {
        if self.group_marker.is_none() {
            return (index < self.host.item_count()).then(|| self.host.item_at(index));
        }
        self.lock_state().visible.get(index).cloned()
    }

    /// Clone of the whole visible list.
    pub fn items(&self) -> Vec<H::Item> {
        if self.group_marker.is_none() {
            return (0..self.host.item_count())
                .map(|i| self.host.item_at(i))
                .collect();
        }
        self.lock_state().visible.clone()
    }

    /// Dispatch a tap on the visible item at `index` to the host.
    ///
    /// Errors when `index` does not resolve to a current visible item, which
    /// happens when the display driver holds an index across a rebuild.
    pub fn tap(&self, index: usize) -> Result<bool> {
        let item = self
            .item(index)
            .ok_or(Error::IndexOutOfBounds { index, len: self.len() })?;
        Ok(self.host.tapped(&item))
    }

    /// Index of the focused visible item, if any.
    ///
    /// Reset to `None` by every rebuild.
    pub fn focused_index(&self) -> Option<usize> {
        self.lock_state().focused
    }

    /// Focus the visible item at `index`, or clear focus with `None`.
    pub fn set_focused_index(&self, index: Option<usize>) {
        self.lock_state().focused = index;
    }

    fn lock_state(&self) -> MutexGuard<'_, State<H::Item>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
