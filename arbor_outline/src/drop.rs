// Copyright 2026 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drop resolution: reparent/reorder dragged nodes relative to a drop target.
//!
//! ## Overview
//!
//! Given an ordered list of dragged nodes, a target, and a
//! [`DropAction`], these functions mutate the store so that the dragged items
//! end up contiguous, in their original relative order, at the requested
//! position. All mutation happens inside one synchronous call, so no partial
//! ordering is ever observable.
//!
//! ## Iteration direction
//!
//! The two sibling actions deliberately walk the drag list in opposite
//! directions:
//!
//! - [`DropAction::NextSibling`] inserts each item at `target + 1`, so it
//!   processes the list in reverse — each earlier item pushes in front of the
//!   later ones already placed, leaving the list in original order.
//! - [`DropAction::PrevSibling`] inserts before the target and processes
//!   forward, with a `-1` correction when the item is pulled out from before
//!   the target (removing it shifts the target's index down by one).
//!
//! Unifying the two into one rule breaks contiguity for multi-item drags;
//! the asymmetry is the algorithm.

use arbor_hierarchy::{Hierarchy, NodeId};

use crate::types::DropAction;

/// Pre-drop veto: may `target` accept a drop with `action`?
///
/// Nodes in `protected` (the root set) accept children but may never be
/// reordered relative to each other, so sibling actions onto them are
/// refused. A missing target is acceptable here; the drop itself is a no-op.
pub fn accepts_drop(protected: &[NodeId], target: Option<NodeId>, action: DropAction) -> bool {
    match (target, action) {
        (Some(t), DropAction::NextSibling | DropAction::PrevSibling) => !protected.contains(&t),
        _ => true,
    }
}

/// Apply a drop of `drag_items` (in drag order) onto `target`.
///
/// Sibling actions require the target to have a parent; a parentless target
/// (a forest root) is vetoed silently, with no mutation. Dragged ids that are
/// stale by the time the drop lands are skipped.
pub fn resolve_drop(
    h: &mut Hierarchy,
    drag_items: &[NodeId],
    target: NodeId,
    action: DropAction,
) {
    if !h.is_alive(target) {
        return;
    }
    match action {
        DropAction::LastChild => {
            // Forward order: appending keeps the original relative order.
            for &drag in drag_items {
                h.reparent(drag, Some(target));
                h.set_last_sibling(drag);
            }
        }
        DropAction::NextSibling => {
            if h.parent_of(target).is_none() {
                return;
            }
            // Reverse order; the target's index is re-read every step because
            // earlier placements may have shifted it.
            for &drag in drag_items.iter().rev() {
                let Some(target_index) = h.sibling_index(target) else {
                    return;
                };
                if h.parent_of(drag) != h.parent_of(target) {
                    h.reparent(drag, h.parent_of(target));
                    h.set_sibling_index(drag, target_index + 1);
                } else {
                    let Some(drag_index) = h.sibling_index(drag) else {
                        continue;
                    };
                    if target_index < drag_index {
                        h.set_sibling_index(drag, target_index + 1);
                    } else {
                        // Removing the item from before the target shifts the
                        // target down by one, so the raw index lands after it.
                        h.set_sibling_index(drag, target_index);
                    }
                }
            }
        }
        DropAction::PrevSibling => {
            if h.parent_of(target).is_none() {
                return;
            }
            // Forward order; index fixed up after any cross-parent move.
            for &drag in drag_items {
                if h.parent_of(drag) != h.parent_of(target) {
                    h.reparent(drag, h.parent_of(target));
                }
                let (Some(target_index), Some(drag_index)) =
                    (h.sibling_index(target), h.sibling_index(drag))
                else {
                    continue;
                };
                if target_index > drag_index {
                    h.set_sibling_index(drag, target_index - 1);
                } else {
                    h.set_sibling_index(drag, target_index);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;
    use arbor_hierarchy::NodeInfo;

    struct Fixture {
        h: Hierarchy,
        root: NodeId,
    }

    impl Fixture {
        fn new() -> Self {
            let mut h = Hierarchy::new();
            let root = h.insert(None, NodeInfo::named("root"));
            Self { h, root }
        }

        fn child(&mut self, parent: NodeId, name: &str) -> NodeId {
            self.h.insert(Some(parent), NodeInfo::named(name))
        }

        fn children(&self, parent: NodeId) -> Vec<NodeId> {
            self.h.children_of(parent).to_vec()
        }
    }

    // [A, B, C] appended after T's existing child X, in drag order.
    #[test]
    fn last_child_appends_in_drag_order() {
        let mut f = Fixture::new();
        let t = f.child(f.root, "t");
        let x = f.child(t, "x");
        let a = f.child(f.root, "a");
        let b = f.child(f.root, "b");
        let c = f.child(f.root, "c");

        resolve_drop(&mut f.h, &[a, b, c], t, DropAction::LastChild);
        assert_eq!(f.children(t), vec![x, a, b, c]);
        assert_eq!(f.children(f.root), vec![t]);
    }

    // Dropping onto an already-parenting target moves children to the tail.
    #[test]
    fn last_child_moves_existing_children_to_tail() {
        let mut f = Fixture::new();
        let t = f.child(f.root, "t");
        let x = f.child(t, "x");
        let y = f.child(t, "y");

        resolve_drop(&mut f.h, &[x], t, DropAction::LastChild);
        assert_eq!(f.children(t), vec![y, x]);
    }

    // Same parent, dragged items before the target: land immediately after it.
    #[test]
    fn next_sibling_same_parent_from_before() {
        let mut f = Fixture::new();
        let p = f.child(f.root, "p");
        let a = f.child(p, "a");
        let b = f.child(p, "b");
        let t = f.child(p, "t");

        resolve_drop(&mut f.h, &[a, b], t, DropAction::NextSibling);
        assert_eq!(f.children(p), vec![t, a, b]);
    }

    // Same parent, dragged items after the target: same landing spot.
    #[test]
    fn next_sibling_same_parent_from_after() {
        let mut f = Fixture::new();
        let p = f.child(f.root, "p");
        let t = f.child(p, "t");
        let x = f.child(p, "x");
        let a = f.child(p, "a");
        let b = f.child(p, "b");

        resolve_drop(&mut f.h, &[a, b], t, DropAction::NextSibling);
        assert_eq!(f.children(p), vec![t, a, b, x]);
    }

    // Cross-parent drag: items reparent to the target's parent, contiguous,
    // in original order, immediately after the target.
    #[test]
    fn next_sibling_cross_parent_stays_contiguous() {
        let mut f = Fixture::new();
        let p = f.child(f.root, "p");
        let q = f.child(f.root, "q");
        let t = f.child(p, "t");
        let u = f.child(p, "u");
        let a = f.child(q, "a");
        let b = f.child(q, "b");
        let c = f.child(q, "c");

        resolve_drop(&mut f.h, &[a, b, c], t, DropAction::NextSibling);
        assert_eq!(f.children(p), vec![t, a, b, c, u]);
        assert_eq!(f.children(q), Vec::<NodeId>::new());
        assert_eq!(f.h.parent_of(b), Some(p));
    }

    // B originally after T: [A, B] land in order immediately before T.
    #[test]
    fn prev_sibling_straddling_the_target() {
        let mut f = Fixture::new();
        let p = f.child(f.root, "p");
        let a = f.child(p, "a");
        let t = f.child(p, "t");
        let b = f.child(p, "b");

        resolve_drop(&mut f.h, &[a, b], t, DropAction::PrevSibling);
        assert_eq!(f.children(p), vec![a, b, t]);
    }

    // All dragged items after the target.
    #[test]
    fn prev_sibling_same_parent_from_after() {
        let mut f = Fixture::new();
        let p = f.child(f.root, "p");
        let x = f.child(p, "x");
        let t = f.child(p, "t");
        let a = f.child(p, "a");
        let b = f.child(p, "b");

        resolve_drop(&mut f.h, &[a, b], t, DropAction::PrevSibling);
        assert_eq!(f.children(p), vec![x, a, b, t]);
    }

    // Cross-parent PrevSibling: contiguous, in order, immediately before T.
    #[test]
    fn prev_sibling_cross_parent_stays_contiguous() {
        let mut f = Fixture::new();
        let p = f.child(f.root, "p");
        let q = f.child(f.root, "q");
        let u = f.child(p, "u");
        let t = f.child(p, "t");
        let a = f.child(q, "a");
        let b = f.child(q, "b");

        resolve_drop(&mut f.h, &[a, b], t, DropAction::PrevSibling);
        assert_eq!(f.children(p), vec![u, a, b, t]);
        assert!(f.children(q).is_empty());
    }

    // Sibling actions onto a parentless target never mutate anything.
    #[test]
    fn sibling_actions_onto_forest_root_are_vetoed() {
        let mut f = Fixture::new();
        let a = f.child(f.root, "a");
        let b = f.child(f.root, "b");
        let before = f.children(f.root);

        resolve_drop(&mut f.h, &[a, b], f.root, DropAction::NextSibling);
        assert_eq!(f.children(f.root), before);
        resolve_drop(&mut f.h, &[a, b], f.root, DropAction::PrevSibling);
        assert_eq!(f.children(f.root), before);

        // LastChild onto a root is fine.
        resolve_drop(&mut f.h, &[b], f.root, DropAction::LastChild);
        assert_eq!(f.children(f.root), vec![a, b]);
    }

    #[test]
    fn accepts_drop_vetoes_only_root_sibling_actions() {
        let mut f = Fixture::new();
        let a = f.child(f.root, "a");
        let protected = vec![f.root];

        assert!(!accepts_drop(&protected, Some(f.root), DropAction::NextSibling));
        assert!(!accepts_drop(&protected, Some(f.root), DropAction::PrevSibling));
        assert!(accepts_drop(&protected, Some(f.root), DropAction::LastChild));
        assert!(accepts_drop(&protected, Some(a), DropAction::NextSibling));
        assert!(accepts_drop(&protected, None, DropAction::NextSibling));
    }

    // Stale drag ids are skipped without disturbing the rest of the drop.
    #[test]
    fn stale_drag_items_are_skipped() {
        let mut f = Fixture::new();
        let p = f.child(f.root, "p");
        let t = f.child(p, "t");
        let a = f.child(p, "a");
        let dead = f.child(p, "dead");
        f.h.remove(dead);

        resolve_drop(&mut f.h, &[dead, a], t, DropAction::NextSibling);
        assert_eq!(f.children(p), vec![t, a]);
    }

    // Single-item moves in both directions within one parent.
    #[test]
    fn single_item_moves_both_directions() {
        let mut f = Fixture::new();
        let p = f.child(f.root, "p");
        let a = f.child(p, "a");
        let b = f.child(p, "b");
        let c = f.child(p, "c");

        // Move `a` (index 0) after `c` (index 2).
        resolve_drop(&mut f.h, &[a], c, DropAction::NextSibling);
        assert_eq!(f.children(p), vec![b, c, a]);

        // Move `a` (index 2) before `b` (index 0).
        resolve_drop(&mut f.h, &[a], b, DropAction::PrevSibling);
        assert_eq!(f.children(p), vec![a, b, c]);
    }
}
