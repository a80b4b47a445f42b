// Copyright 2026 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The outline binding: widget events in, store mutations and row updates out.
//!
//! ## Overview
//!
//! [`Outline`] owns the widget surface ([`RowHost`]) and the pool
//! ([`NodePool`]), holds the ordered root set, and keeps transient UI state
//! (selection, drag session, registered observers).
//! The hierarchy store is deliberately *not* owned: every operation takes it
//! as an explicit argument, so one store can back several bindings and no
//! global state is involved.
//!
//! ## Lifecycle
//!
//! Construction installs the removal filter on the widget (roots are never
//! removable). [`Outline::close`] clears it and drops all registered
//! listeners and observers; `Drop` runs the same teardown, so the widget is
//! released even when the binding is dropped during unwind.
//!
//! ## Event flow
//!
//! The host forwards each widget event to the matching method —
//! [`expandable_children`](Outline::expandable_children),
//! [`selection_changed`](Outline::selection_changed),
//! [`items_removed`](Outline::items_removed),
//! [`begin_drag`](Outline::begin_drag) /
//! [`begin_drop`](Outline::begin_drop) / [`handle_drop`](Outline::handle_drop) /
//! [`end_drag`](Outline::end_drag) — and applies the returned data
//! ([`RowBinding`], child lists) to its widget. All calls are synchronous.

use alloc::boxed::Box;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use arbor_hierarchy::{Hierarchy, NodeFlags, NodeId};

use crate::drop::{accepts_drop, resolve_drop};
use crate::selection::SelectionState;
use crate::types::{
    DropAction, ListenerHandle, NodePool, ObserverHandle, OutlineError, Phase, RowBinding, RowHost,
    SelectObserver, SelectionListener, ToggleSelect,
};

/// Binding between a [`Hierarchy`] forest and a tree-view widget.
pub struct Outline<R: RowHost, P: NodePool> {
    rows: R,
    pool: P,
    roots: Vec<NodeId>,
    selection: SelectionState,
    observers: Vec<(ObserverHandle, NodeId, Box<dyn SelectObserver>)>,
    listeners: Vec<(ListenerHandle, SelectionListener)>,
    next_handle: u64,
    drag: Option<Vec<NodeId>>,
    phase: Phase,
    closed: bool,
}

impl<R: RowHost, P: NodePool> core::fmt::Debug for Outline<R, P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Outline")
            .field("roots", &self.roots)
            .field("selection", &self.selection)
            .field("drag", &self.drag)
            .field("phase", &self.phase)
            .field("closed", &self.closed)
            .finish_non_exhaustive()
    }
}

impl<R: RowHost, P: NodePool> Outline<R, P> {
    /// Bind `rows` to the forest rooted at `roots`.
    ///
    /// Installs the removal filter: only non-root nodes may be removed
    /// through the UI.
    pub fn new(roots: Vec<NodeId>, mut rows: R, pool: P) -> Self {
        let protected = roots.clone();
        rows.set_remove_filter(Some(Box::new(move |n| !protected.contains(&n))));
        Self {
            rows,
            pool,
            roots,
            selection: SelectionState::new(),
            observers: Vec::new(),
            listeners: Vec::new(),
            next_handle: 0,
            drag: None,
            phase: Phase::Edit,
            closed: false,
        }
    }

    /// Tear the binding down: clear the removal filter and drop all
    /// registered listeners and observers. Idempotent; also run by `Drop`.
    pub fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        self.rows.set_remove_filter(None);
        self.listeners.clear();
        self.observers.clear();
        self.drag = None;
    }

    /// The ordered root forest this binding exposes as the widget's data source.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// The bound widget surface.
    pub fn rows(&self) -> &R {
        &self.rows
    }

    /// The bound widget surface, mutably.
    pub fn rows_mut(&mut self) -> &mut R {
        &mut self.rows
    }

    /// Set the lifecycle phase (see [`Phase`]).
    pub fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }

    // --- queries ---

    /// Children of `node` eligible for listing when its row expands.
    ///
    /// Only direct children carrying [`NodeFlags::ELEMENT`] qualify; empty
    /// when there are none. Pure query: repeated calls with no intervening
    /// mutation return the same list.
    pub fn expandable_children(&self, h: &Hierarchy, node: NodeId) -> Vec<NodeId> {
        h.children_of(node)
            .iter()
            .copied()
            .filter(|&c| h.flags(c).is_some_and(|f| f.contains(NodeFlags::ELEMENT)))
            .collect()
    }

    /// Display payload for `node`'s row during item data binding.
    pub fn bind_row(&self, h: &Hierarchy, node: NodeId) -> RowBinding {
        let editable = !self.roots.contains(&node);
        RowBinding {
            label: h.name(node).unwrap_or_default().to_string(),
            has_children: h.child_count(node) > 0,
            can_drag: editable,
            can_edit: editable,
        }
    }

    /// May the UI remove `node`? False exactly for root-set members.
    pub fn removal_allowed(&self, node: NodeId) -> bool {
        !self.roots.contains(&node)
    }

    /// Every [`NodeFlags::ELEMENT`] node in the forest, in depth-first order.
    pub fn elements(&self, h: &Hierarchy) -> Vec<NodeId> {
        self.roots
            .iter()
            .flat_map(|&r| h.descendants(r))
            .filter(|&n| h.flags(n).is_some_and(|f| f.contains(NodeFlags::ELEMENT)))
            .collect()
    }

    /// Whether `node`'s backing object currently lives outside the bound
    /// forest (released to the pool or never attached).
    ///
    /// Only answerable in [`Phase::Active`]; otherwise the forest is not the
    /// authority on pool membership and the query fails fast.
    pub fn is_pooled(&self, h: &Hierarchy, node: NodeId) -> Result<bool, OutlineError> {
        if self.phase != Phase::Active {
            return Err(OutlineError::UnsupportedPhase(self.phase));
        }
        if !h.is_alive(node) {
            return Ok(true);
        }
        let mut top = node;
        while let Some(p) = h.parent_of(top) {
            top = p;
        }
        Ok(!self.roots.contains(&top))
    }

    // --- selection ---

    /// The current selection, in order.
    pub fn selected(&self) -> &[NodeId] {
        self.selection.items()
    }

    /// Handle the widget's selection-changed event.
    ///
    /// Leavers are sent `on_unselected`, enterers `on_selected` (in that
    /// order). If the new selection includes a root-set member, one
    /// corrective re-assignment strips the roots and pushes the corrected
    /// selection back to the widget; the correction does not re-enter this
    /// handler. Registered listeners observe the (old, corrected-new) pair.
    pub fn selection_changed(&mut self, new: &[NodeId]) {
        let old = self.selection.items().to_vec();
        let diff = self.selection.replace(new);
        for node in diff.left {
            self.notify_unselected(node);
        }
        for node in diff.entered {
            self.notify_selected(node);
        }

        if self
            .selection
            .items()
            .iter()
            .any(|n| self.roots.contains(n))
        {
            let roots = self.roots.clone();
            self.selection.retain(|n| !roots.contains(&n));
            self.rows.set_selected(&self.selection.items().to_vec());
        }

        let current = self.selection.items().to_vec();
        for (_, listener) in &mut self.listeners {
            listener(&old, &current);
        }
    }

    /// Toggle `node` in or out of the selection and push the result to the
    /// widget.
    ///
    /// Already selected ⇒ deselected. Otherwise added to the selection when
    /// `multi` is held, or made the sole selection when it is not. Root-set
    /// members are auto-corrected out afterwards, so toggling a root reports
    /// [`ToggleSelect::Selected`] but leaves the selection without it — the
    /// same outcome as the widget-driven correction.
    pub fn toggle_select(&mut self, node: NodeId, multi: bool) -> ToggleSelect {
        let out = self.selection.toggle(node, multi);
        let roots = self.roots.clone();
        self.selection.retain(|n| !roots.contains(&n));
        self.rows.set_selected(&self.selection.items().to_vec());
        out
    }

    /// Register a selection-changed listener. Cancelled via
    /// [`remove_selection_listener`](Self::remove_selection_listener) or
    /// [`close`](Self::close).
    pub fn add_selection_listener(&mut self, listener: SelectionListener) -> ListenerHandle {
        let handle = ListenerHandle(self.fresh_handle());
        self.listeners.push((handle, listener));
        handle
    }

    /// Cancel a selection-changed listener. Unknown handles are ignored.
    pub fn remove_selection_listener(&mut self, handle: ListenerHandle) {
        self.listeners.retain(|(h, _)| *h != handle);
    }

    /// Attach a selection capability to `node`. Zero or more observers per
    /// node; each receives `on_selected`/`on_unselected` as `node` enters and
    /// leaves the selection.
    pub fn register_select_observer(
        &mut self,
        node: NodeId,
        observer: Box<dyn SelectObserver>,
    ) -> ObserverHandle {
        let handle = ObserverHandle(self.fresh_handle());
        self.observers.push((handle, node, observer));
        handle
    }

    /// Detach a selection capability. Unknown handles are ignored.
    pub fn remove_select_observer(&mut self, handle: ObserverHandle) {
        self.observers.retain(|(h, _, _)| *h != handle);
    }

    // --- removal / rename / structure ---

    /// Ask the widget to remove `node` from its parent's row.
    ///
    /// No-op for parentless nodes (the root set removes nothing this way).
    /// The widget is expected to answer with an items-removed event, which
    /// the host forwards to [`items_removed`](Self::items_removed).
    pub fn remove(&mut self, h: &Hierarchy, node: NodeId) {
        let Some(parent) = h.parent_of(node) else {
            return;
        };
        let last_child = h.child_count(parent) == 1;
        self.rows.remove_child(parent, node, last_child);
    }

    /// Handle the widget's items-removed event.
    ///
    /// Each item still alive is released to the pool and dropped (with its
    /// subtree) from the store; items already released are skipped, so a
    /// second event for the same ids is harmless. Removed items also leave
    /// the selection.
    pub fn items_removed(&mut self, h: &mut Hierarchy, items: &[NodeId]) {
        for &id in items {
            if h.is_alive(id) {
                self.pool.release(crate::types::PoolKind::Element, id);
                h.remove(id);
            }
        }
        self.selection.retain(|n| h.is_alive(n));
    }

    /// Rename `node` and refresh its row label if one exists.
    ///
    /// Without a row this mutates only the store and touches no UI.
    pub fn rename(&mut self, h: &mut Hierarchy, node: NodeId, name: &str) {
        h.set_name(node, String::from(name));
        if self.rows.has_row(node) {
            self.rows.set_row_label(node, name);
        }
    }

    /// Move `node` under `new_parent` and make the result visible.
    ///
    /// The store reparent appends as last child; the widget mirrors the move,
    /// and if the new parent has a row it is forced expandable and expanded
    /// so the moved child shows up. Nothing further happens when the parent
    /// has no visual representation yet.
    pub fn change_parent(&mut self, h: &mut Hierarchy, new_parent: NodeId, node: NodeId) {
        h.reparent(node, Some(new_parent));
        self.rows.change_parent(new_parent, node);
        if self.rows.has_row(new_parent) {
            self.rows.set_row_can_expand(new_parent, true);
            self.rows.set_row_expanded(new_parent, true);
        }
    }

    /// Attach `node` as the last child of `parent`, mirroring into the widget.
    pub fn add_child(&mut self, h: &mut Hierarchy, parent: NodeId, node: NodeId) {
        h.reparent(node, Some(parent));
        self.rows.add_child(parent, node);
    }

    // --- drag and drop ---

    /// Start a drag session over `items` (in drag order).
    pub fn begin_drag(&mut self, items: &[NodeId]) {
        self.drag = Some(items.to_vec());
    }

    /// The items of the active drag session, if any.
    pub fn drag_items(&self) -> Option<&[NodeId]> {
        self.drag.as_deref()
    }

    /// Pre-drop veto. Returns `false` — cancel the drop — when `target` is a
    /// root-set member and `action` is a sibling insertion; roots accept
    /// children but are never reordered relative to each other.
    pub fn begin_drop(&self, target: Option<NodeId>, action: DropAction) -> bool {
        accepts_drop(&self.roots, target, action)
    }

    /// Resolve the drop of the active drag session onto `target`.
    ///
    /// A `None` target and a missing session are both no-ops. The session
    /// survives until [`end_drag`](Self::end_drag).
    pub fn handle_drop(&mut self, h: &mut Hierarchy, target: Option<NodeId>, action: DropAction) {
        let Some(target) = target else {
            return;
        };
        let Some(items) = self.drag.clone() else {
            return;
        };
        if !accepts_drop(&self.roots, Some(target), action) {
            return;
        }
        resolve_drop(h, &items, target, action);
    }

    /// End the drag session, successful or not.
    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    // --- internals ---

    fn fresh_handle(&mut self) -> u64 {
        let h = self.next_handle;
        self.next_handle += 1;
        h
    }

    fn notify_selected(&mut self, node: NodeId) {
        for (_, n, obs) in &mut self.observers {
            if *n == node {
                obs.on_selected(node);
            }
        }
    }

    fn notify_unselected(&mut self, node: NodeId) {
        for (_, n, obs) in &mut self.observers {
            if *n == node {
                obs.on_unselected(node);
            }
        }
    }
}

impl<R: RowHost, P: NodePool> Drop for Outline<R, P> {
    fn drop(&mut self) {
        self.close();
    }
}
