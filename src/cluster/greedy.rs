//! Greedy first-match grouping.
//!
//! # The Pass
//!
//! Items are processed in their original order, each consumed exactly once:
//!
//! 1. Scan existing groups in creation order, and each group's members in
//!    insertion order. The first member found close to the current item wins:
//!    the item is appended to that group and scanning stops.
//! 2. Otherwise scan the singles pool in insertion order. The first close
//!    single is pulled out of the pool and seeds a new two-member group
//!    `[current, matched]`.
//! 3. Otherwise the item joins the singles pool.
//!
//! First-match is deliberate: the pass never looks for the nearest or "best"
//! group, and downstream visual stability depends on this exact tie-break.
//! Group membership is transitively chained: every member is close to at
//! least one other member, not necessarily to all of them.
//!
//! # Complexity
//!
//! One pass over n items; each item may be tested against every grouped and
//! single item seen so far, so the pass is O(n²) worst case. Intended for
//! bounded, in-memory marker sets; callers with very large inputs should
//! bound them externally rather than expect mid-pass cancellation.

use log::debug;

use super::traits::OverlayItem;
use crate::geo::{mean_position, GeoPoint};

/// Groups below this size dissolve back into individuals, unless overridden.
pub const DEFAULT_MIN_GROUP_SIZE: usize = 3;

/// Output of one grouping pass: proximity groups plus leftover singles.
///
/// Every input item lands in exactly one place. Groups always hold at least
/// two members.
#[derive(Clone, Debug, Default)]
pub struct Partition<T> {
    /// Proximity groups, in creation order.
    pub groups: Vec<Vec<T>>,
    /// Ungrouped items, in pass order.
    pub singles: Vec<T>,
}

/// Partition `items` into proximity groups and singles.
///
/// `is_close` is the pairwise proximity test; it is expected to be symmetric.
/// The pass is deterministic and order-dependent (see the module docs).
pub fn partition<T, F>(items: Vec<T>, mut is_close: F) -> Partition<T>
where
    F: FnMut(&T, &T) -> bool,
{
    let mut groups: Vec<Vec<T>> = Vec::new();
    let mut singles: Vec<T> = Vec::new();

    'grouping: for item in items {
        for group in groups.iter_mut() {
            if group.iter().any(|member| is_close(&item, member)) {
                group.push(item);
                continue 'grouping;
            }
        }

        // Index bookkeeping instead of removal mid-iteration: find the match
        // first, then pull it out of the pool.
        if let Some(hit) = singles.iter().position(|single| is_close(&item, single)) {
            let matched = singles.remove(hit);
            groups.push(vec![item, matched]);
            continue 'grouping;
        }

        singles.push(item);
    }

    Partition { groups, singles }
}

/// Collapse a partition into the flat list the renderer consumes.
///
/// Groups of fewer than `min_group_size` members dissolve back into
/// individuals. Each remaining group becomes one synthetic item, built by
/// `new_group_item` at the group's mean position and carrying a clone of
/// `group_marker`. Output order is all singles first, then per-group results
/// in group-creation order; indices are not stable across passes.
pub fn collapse<T, F>(
    partition: Partition<T>,
    min_group_size: usize,
    group_marker: &T::Marker,
    mut new_group_item: F,
) -> Vec<T>
where
    T: OverlayItem,
    F: FnMut(GeoPoint) -> T,
{
    let Partition { groups, singles } = partition;
    let (n_groups, n_singles) = (groups.len(), singles.len());

    let mut out = singles;
    for group in groups {
        if group.len() < min_group_size {
            out.extend(group);
            continue;
        }

        let positions: Vec<GeoPoint> = group.iter().map(|item| item.position()).collect();
        match mean_position(&positions) {
            Some(centroid) => {
                let mut group_item = new_group_item(centroid);
                group_item.set_marker(group_marker.clone());
                out.push(group_item);
            }
            // Groups always hold at least two members; dissolve rather than
            // invent a position if that ever stops holding.
            None => out.extend(group),
        }
    }

    debug!(
        "collapsed {} groups and {} singles into {} visible items",
        n_groups,
        n_singles,
        out.len()
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::Marker;
    use crate::geo::MarkerSize;

    #[test]
    fn far_items_stay_single_in_order() {
        let part = partition(vec![10u32, 20, 30], |a, b| a.abs_diff(*b) < 2);
        assert!(part.groups.is_empty());
        assert_eq!(part.singles, vec![10, 20, 30]);
    }

    #[test]
    fn isolated_item_never_groups_with_itself() {
        let part = partition(vec![7u32], |_, _| true);
        assert!(part.groups.is_empty());
        assert_eq!(part.singles, vec![7]);
    }

    #[test]
    fn empty_input_yields_empty_partition() {
        let part = partition(Vec::<u32>::new(), |_, _| true);
        assert!(part.groups.is_empty());
        assert!(part.singles.is_empty());
    }

    #[test]
    fn transitive_chain_forms_one_group() {
        // 10-12 and 12-14 are close, 10-14 are not.
        let part = partition(vec![10u32, 12, 14], |a, b| a.abs_diff(*b) <= 2);
        assert_eq!(part.groups, vec![vec![12, 10, 14]]);
        assert!(part.singles.is_empty());
    }

    #[test]
    fn first_matching_group_wins() {
        // Two established groups; 3 is close to members of both but joins
        // the earlier-created one.
        let part = partition(vec![1u32, 2, 5, 6, 3], |a, b| a.abs_diff(*b) <= 1);
        assert_eq!(part.groups, vec![vec![2, 1, 3], vec![6, 5]]);
        assert!(part.singles.is_empty());
    }

    #[test]
    fn new_group_keeps_current_then_matched_order() {
        let part = partition(vec![5u32, 30, 6], |a, b| a.abs_diff(*b) <= 1);
        // 6 arrives last, finds single 5, and leads the new group.
        assert_eq!(part.groups, vec![vec![6, 5]]);
        assert_eq!(part.singles, vec![30]);
    }

    #[test]
    fn matched_single_leaves_pool_without_disturbing_it() {
        // 20 sits between 10 and 30 in the pool; pulling it out must keep
        // the others in order.
        let part = partition(vec![10u32, 20, 30, 21], |a, b| a.abs_diff(*b) <= 1);
        assert_eq!(part.groups, vec![vec![21, 20]]);
        assert_eq!(part.singles, vec![10, 30]);
    }

    // --- collapse ---

    #[derive(Clone, Debug, PartialEq)]
    enum Visual {
        Pin,
        Cloud,
    }

    impl Marker for Visual {
        fn intrinsic_size(&self) -> MarkerSize {
            MarkerSize::new(10, 10)
        }
    }

    #[derive(Clone, Debug, PartialEq)]
    struct Pin {
        at: GeoPoint,
        visual: Visual,
    }

    impl Pin {
        fn new(lat: i32, lon: i32) -> Self {
            Self {
                at: GeoPoint::new(lat, lon),
                visual: Visual::Pin,
            }
        }
    }

    impl OverlayItem for Pin {
        type Marker = Visual;

        fn position(&self) -> GeoPoint {
            self.at
        }

        fn set_marker(&mut self, marker: Visual) {
            self.visual = marker;
        }
    }

    fn group_pin(centroid: GeoPoint) -> Pin {
        Pin {
            at: centroid,
            visual: Visual::Pin,
        }
    }

    #[test]
    fn undersized_group_dissolves() {
        let part = Partition {
            groups: vec![vec![Pin::new(0, 0), Pin::new(0, 2)]],
            singles: vec![Pin::new(50, 50)],
        };
        let out = collapse(part, DEFAULT_MIN_GROUP_SIZE, &Visual::Cloud, group_pin);

        // Singles first, then the dissolved members, all untouched.
        assert_eq!(out.len(), 3);
        assert_eq!(out[0], Pin::new(50, 50));
        assert_eq!(out[1], Pin::new(0, 0));
        assert_eq!(out[2], Pin::new(0, 2));
    }

    #[test]
    fn qualifying_group_becomes_one_synthetic_item() {
        let part = Partition {
            groups: vec![vec![Pin::new(10, 20), Pin::new(10, 22), Pin::new(10, 24)]],
            singles: vec![],
        };
        let out = collapse(part, DEFAULT_MIN_GROUP_SIZE, &Visual::Cloud, group_pin);

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].at, GeoPoint::new(10, 22));
        assert_eq!(out[0].visual, Visual::Cloud);
    }

    #[test]
    fn threshold_is_exact() {
        let two = Partition {
            groups: vec![vec![Pin::new(0, 0), Pin::new(0, 1)]],
            singles: vec![],
        };
        assert_eq!(collapse(two, 3, &Visual::Cloud, group_pin).len(), 2);

        let three = Partition {
            groups: vec![vec![Pin::new(0, 0), Pin::new(0, 1), Pin::new(0, 2)]],
            singles: vec![],
        };
        assert_eq!(collapse(three, 3, &Visual::Cloud, group_pin).len(), 1);
    }

    #[test]
    fn output_keeps_singles_then_group_creation_order() {
        let part = Partition {
            groups: vec![
                vec![Pin::new(0, 0), Pin::new(0, 1), Pin::new(0, 2)],
                vec![Pin::new(90, 0), Pin::new(90, 2), Pin::new(90, 4)],
            ],
            singles: vec![Pin::new(45, 45)],
        };
        let out = collapse(part, 3, &Visual::Cloud, group_pin);

        assert_eq!(out.len(), 3);
        assert_eq!(out[0].at, GeoPoint::new(45, 45));
        assert_eq!(out[1].at, GeoPoint::new(0, 1));
        assert_eq!(out[2].at, GeoPoint::new(90, 2));
    }
}
