// Copyright 2026 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selection state: an ordered set with toggle and diff operations.
//!
//! The selection is a set (no duplicates) that nevertheless remembers the
//! order items were added in, because tree widgets display and report
//! multi-selections in a stable order.
//! [`SelectionState::replace`] computes the leave/enter diff between the old
//! and new selections, which is what drives per-node observer notifications:
//! leavers are reported in their old order, enterers in their new order.

use alloc::vec::Vec;

use arbor_hierarchy::NodeId;

use crate::types::ToggleSelect;

/// Ordered selection set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionState {
    items: Vec<NodeId>,
}

/// Leave/enter difference produced by [`SelectionState::replace`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionDiff {
    /// Items that left the selection, in their previous order.
    pub left: Vec<NodeId>,
    /// Items that entered the selection, in the new order.
    pub entered: Vec<NodeId>,
}

impl SelectionState {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// The current selection, in order.
    pub fn items(&self) -> &[NodeId] {
        &self.items
    }

    /// Whether `node` is currently selected.
    pub fn contains(&self, node: NodeId) -> bool {
        self.items.contains(&node)
    }

    /// Toggle `node` in or out of the selection.
    ///
    /// If `node` is selected it is removed. Otherwise it is appended when
    /// `multi` is held, or becomes the sole selection when it is not.
    /// Other items keep their relative order in every case.
    pub fn toggle(&mut self, node: NodeId, multi: bool) -> ToggleSelect {
        if let Some(pos) = self.items.iter().position(|n| *n == node) {
            self.items.remove(pos);
            return ToggleSelect::Deselected;
        }
        if !multi {
            self.items.clear();
        }
        self.items.push(node);
        ToggleSelect::Selected
    }

    /// Replace the selection with `new`, returning the leave/enter diff.
    ///
    /// Duplicates in `new` are dropped (first occurrence wins).
    pub fn replace(&mut self, new: &[NodeId]) -> SelectionDiff {
        let mut deduped: Vec<NodeId> = Vec::with_capacity(new.len());
        for &n in new {
            if !deduped.contains(&n) {
                deduped.push(n);
            }
        }

        let left = self
            .items
            .iter()
            .copied()
            .filter(|n| !deduped.contains(n))
            .collect();
        let entered = deduped
            .iter()
            .copied()
            .filter(|n| !self.items.contains(n))
            .collect();

        self.items = deduped;
        SelectionDiff { left, entered }
    }

    /// Drop every item that fails `keep`, preserving order. Returns the
    /// removed items in their previous order.
    pub fn retain(&mut self, keep: impl Fn(NodeId) -> bool) -> Vec<NodeId> {
        let mut dropped = Vec::new();
        self.items.retain(|&n| {
            let k = keep(n);
            if !k {
                dropped.push(n);
            }
            k
        });
        dropped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use arbor_hierarchy::{Hierarchy, NodeInfo};

    fn nodes(count: usize) -> Vec<NodeId> {
        let mut h = Hierarchy::new();
        (0..count).map(|_| h.insert(None, NodeInfo::default())).collect()
    }

    // Double toggle without a modifier returns to the empty-of-x state.
    #[test]
    fn toggle_is_its_own_inverse() {
        let ids = nodes(1);
        let mut s = SelectionState::new();
        assert_eq!(s.toggle(ids[0], false), ToggleSelect::Selected);
        assert_eq!(s.items(), &[ids[0]]);
        assert_eq!(s.toggle(ids[0], false), ToggleSelect::Deselected);
        assert!(!s.contains(ids[0]));
        assert!(s.items().is_empty());
    }

    // Solo select replaces; multi select appends after existing items.
    #[test]
    fn toggle_solo_vs_multi() {
        let ids = nodes(3);
        let mut s = SelectionState::new();
        s.toggle(ids[0], false);
        s.toggle(ids[1], true);
        assert_eq!(s.items(), &[ids[0], ids[1]]);

        s.toggle(ids[2], false);
        assert_eq!(s.items(), &[ids[2]], "solo select replaces the selection");
    }

    // Removing one item keeps the relative order of the rest.
    #[test]
    fn toggle_preserves_order_of_others() {
        let ids = nodes(3);
        let mut s = SelectionState::new();
        for &n in &ids {
            s.toggle(n, true);
        }
        s.toggle(ids[1], true);
        assert_eq!(s.items(), &[ids[0], ids[2]]);
    }

    #[test]
    fn replace_reports_leavers_then_enterers() {
        let ids = nodes(4);
        let mut s = SelectionState::new();
        let first = s.replace(&[ids[0], ids[1]]);
        assert!(first.left.is_empty());
        assert_eq!(first.entered, vec![ids[0], ids[1]]);

        let second = s.replace(&[ids[1], ids[2], ids[3]]);
        assert_eq!(second.left, vec![ids[0]]);
        assert_eq!(second.entered, vec![ids[2], ids[3]]);
        assert_eq!(s.items(), &[ids[1], ids[2], ids[3]]);

        // Identical replacement produces an empty diff.
        let third = s.replace(&[ids[1], ids[2], ids[3]]);
        assert_eq!(third, SelectionDiff::default());
    }

    #[test]
    fn replace_drops_duplicates() {
        let ids = nodes(2);
        let mut s = SelectionState::new();
        let diff = s.replace(&[ids[0], ids[1], ids[0]]);
        assert_eq!(s.items(), &[ids[0], ids[1]]);
        assert_eq!(diff.entered, vec![ids[0], ids[1]]);
    }

    #[test]
    fn retain_returns_dropped_in_order() {
        let ids = nodes(4);
        let mut s = SelectionState::new();
        s.replace(&[ids[0], ids[1], ids[2], ids[3]]);
        let dropped = s.retain(|n| n != ids[1] && n != ids[3]);
        assert_eq!(dropped, vec![ids[1], ids[3]]);
        assert_eq!(s.items(), &[ids[0], ids[2]]);
    }
}
