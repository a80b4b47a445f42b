// Copyright 2026 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the binding: actions, widget-facing traits, handles, and errors.
//!
//! ## Overview
//!
//! These types describe the seams between the binding and its collaborators:
//! the tree-view widget ([`RowHost`]), the allocation pool ([`NodePool`]), and
//! per-node selection capabilities ([`SelectObserver`]).
//! They are used by [`outline`](crate::outline) and implemented by downstream
//! hosts.

use alloc::boxed::Box;
use alloc::string::String;

use arbor_hierarchy::NodeId;

/// Where dragged nodes land relative to the drop target.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DropAction {
    /// Append each dragged node as the target's last child.
    LastChild,
    /// Insert the dragged nodes immediately after the target.
    NextSibling,
    /// Insert the dragged nodes immediately before the target.
    PrevSibling,
}

/// Result of [`Outline::toggle_select`](crate::outline::Outline::toggle_select).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ToggleSelect {
    /// The node entered the selection.
    Selected,
    /// The node left the selection.
    Deselected,
}

/// Kind tag passed to [`NodePool::release`] so pools with multiple free lists
/// can route the returned resource.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum PoolKind {
    /// A domain element node.
    Element,
}

/// Lifecycle phase of the bound forest.
///
/// Some queries (currently [`Outline::is_pooled`](crate::outline::Outline::is_pooled))
/// only make sense while the host is actively running the forest.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Phase {
    /// The forest is being edited; pool membership is not meaningful.
    Edit,
    /// The forest is live; all queries are supported.
    Active,
}

/// Errors surfaced by the binding.
///
/// Root-set protection is never an error: illegal removals and reorders are
/// vetoed silently. This enum covers the cases where silently guessing would
/// produce a wrong answer instead.
#[derive(Debug, Eq, PartialEq, thiserror::Error)]
pub enum OutlineError {
    /// The query is only answerable in [`Phase::Active`].
    #[error("query unsupported in the {0:?} phase")]
    UnsupportedPhase(Phase),
}

/// Removal-permission predicate installed on the widget.
///
/// Returns `true` when the UI may remove the given node.
pub type RemoveFilter = Box<dyn Fn(NodeId) -> bool>;

/// The tree-view widget surface the binding drives.
///
/// A row is the widget's visual representation of a node; nodes without rows
/// (collapsed ancestors, virtualized-out entries) simply report
/// [`has_row`](Self::has_row) as `false` and visual updates for them are
/// skipped.
/// Structural calls (`add_child`, `remove_child`, `change_parent`) only
/// mirror store mutations into the widget's visual tree; the store remains
/// the system of record.
pub trait RowHost {
    /// Whether the widget currently materializes a row for `node`.
    fn has_row(&self, node: NodeId) -> bool;
    /// Refresh the label text of `node`'s row.
    fn set_row_label(&mut self, node: NodeId, label: &str);
    /// Mark `node`'s row as expandable (showing the expander arrow).
    fn set_row_can_expand(&mut self, node: NodeId, can_expand: bool);
    /// Expand or collapse `node`'s row.
    fn set_row_expanded(&mut self, node: NodeId, expanded: bool);
    /// Replace the widget's selected items.
    fn set_selected(&mut self, items: &[NodeId]);
    /// Mirror the addition of `child` under `parent`.
    fn add_child(&mut self, parent: NodeId, child: NodeId);
    /// Mirror the removal of `child` from `parent`.
    ///
    /// `last_child` hints that `parent` has no children left, so the widget
    /// can drop the expander arrow.
    fn remove_child(&mut self, parent: NodeId, child: NodeId, last_child: bool);
    /// Mirror a reparent of `child` under `new_parent`.
    fn change_parent(&mut self, new_parent: NodeId, child: NodeId);
    /// Install or clear the removal-permission predicate.
    fn set_remove_filter(&mut self, filter: Option<RemoveFilter>);
}

/// A no-op row host for headless use (tests, batch tools).
///
/// Reports no rows and swallows every visual update.
#[derive(Copy, Clone, Debug, Default)]
pub struct NullRows;

impl RowHost for NullRows {
    #[inline]
    fn has_row(&self, _node: NodeId) -> bool {
        false
    }
    fn set_row_label(&mut self, _node: NodeId, _label: &str) {}
    fn set_row_can_expand(&mut self, _node: NodeId, _can_expand: bool) {}
    fn set_row_expanded(&mut self, _node: NodeId, _expanded: bool) {}
    fn set_selected(&mut self, _items: &[NodeId]) {}
    fn add_child(&mut self, _parent: NodeId, _child: NodeId) {}
    fn remove_child(&mut self, _parent: NodeId, _child: NodeId, _last_child: bool) {}
    fn change_parent(&mut self, _new_parent: NodeId, _child: NodeId) {}
    fn set_remove_filter(&mut self, _filter: Option<RemoveFilter>) {}
}

/// Takes removed nodes' backing resources back for reuse.
pub trait NodePool {
    /// Return `node`'s backing resource to the pool.
    fn release(&mut self, kind: PoolKind, node: NodeId);
}

/// A pool that discards everything it is given.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoPool;

impl NodePool for NoPool {
    fn release(&mut self, _kind: PoolKind, _node: NodeId) {}
}

/// Per-node selection capability.
///
/// Registered explicitly on the binding (see
/// [`Outline::register_select_observer`](crate::outline::Outline::register_select_observer));
/// there is no runtime type probing. Zero or more observers per node.
pub trait SelectObserver {
    /// The node entered the selection.
    fn on_selected(&mut self, node: NodeId);
    /// The node left the selection.
    fn on_unselected(&mut self, node: NodeId);
}

/// Selection-changed callback: receives the old and new selections.
pub type SelectionListener = Box<dyn FnMut(&[NodeId], &[NodeId])>;

/// Cancellation handle for a registered [`SelectionListener`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ListenerHandle(pub(crate) u64);

/// Cancellation handle for a registered [`SelectObserver`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ObserverHandle(pub(crate) u64);

/// Display payload for one row, produced during item data binding.
///
/// The host applies this to the widget row however its toolkit requires
/// (label text, expander arrow, drag/edit affordances).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RowBinding {
    /// Label text (the node's display name).
    pub label: String,
    /// Whether the row should show an expander arrow.
    pub has_children: bool,
    /// Whether the row may start a drag. False for root-set members.
    pub can_drag: bool,
    /// Whether the row's label may be edited inline. False for root-set members.
    pub can_edit: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn phase_error_names_the_phase() {
        let e = OutlineError::UnsupportedPhase(Phase::Edit);
        assert_eq!(format!("{e}"), "query unsupported in the Edit phase");
    }

    #[test]
    fn null_rows_reports_no_rows() {
        let mut h = arbor_hierarchy::Hierarchy::new();
        let n = h.insert(None, arbor_hierarchy::NodeInfo::named("n"));
        let mut rows = NullRows;
        assert!(!rows.has_row(n));
        // Visual updates are swallowed without panicking.
        rows.set_row_label(n, "renamed");
        rows.set_selected(&[n]);
        rows.set_remove_filter(None);
    }
}
