// Copyright 2026 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core store implementation: structure, ordered-sibling updates, queries.

use alloc::string::String;
use alloc::vec::Vec;

use crate::types::{NodeFlags, NodeId, NodeInfo};

impl Default for Hierarchy {
    fn default() -> Self {
        Self::new()
    }
}

/// Top-level hierarchy store.
pub struct Hierarchy {
    nodes: Vec<Option<Node>>, // slots
    generations: Vec<u32>,    // last generation per slot (persists across frees)
    free_list: Vec<usize>,
}

impl core::fmt::Debug for Hierarchy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.nodes.len();
        let alive = self.nodes.iter().filter(|n| n.is_some()).count();
        let free = self.free_list.len();
        f.debug_struct("Hierarchy")
            .field("nodes_total", &total)
            .field("nodes_alive", &alive)
            .field("free_list", &free)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug)]
struct Node {
    generation: u32,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    info: NodeInfo,
}

impl Node {
    fn new(generation: u32, info: NodeInfo) -> Self {
        Self {
            generation,
            parent: None,
            children: Vec::new(),
            info,
        }
    }
}

impl Hierarchy {
    /// Create a new empty hierarchy.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
        }
    }

    /// Insert a new node as the last child of `parent` (or as parentless if `None`).
    pub fn insert(&mut self, parent: Option<NodeId>, info: NodeInfo) -> NodeId {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "NodeId uses 32-bit indices by design."
        )]
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.nodes[idx] = Some(Node::new(generation, info));
            (idx as u32, generation)
        } else {
            let generation = 1_u32;
            self.nodes.push(Some(Node::new(generation, info)));
            self.generations.push(generation);
            ((self.nodes.len() - 1) as u32, generation)
        };
        let id = NodeId::new(idx, generation);
        if let Some(p) = parent {
            self.link_parent(id, p);
        }
        id
    }

    /// Remove a node (and its subtree) from the hierarchy.
    pub fn remove(&mut self, id: NodeId) {
        if !self.is_alive(id) {
            return;
        }
        if let Some(parent) = self.node(id).parent {
            self.unlink_parent(id, parent);
        }
        let children = self.node(id).children.clone();
        for child in children {
            self.remove(child);
        }
        self.nodes[id.idx()] = None;
        self.free_list.push(id.idx());
    }

    /// Reparent `id` under `new_parent`, appending it as the last child.
    ///
    /// Passing `None` makes the node parentless. Reparenting under the current
    /// parent moves the node to the end of the sibling list. Reparenting under
    /// `id` itself or one of its descendants would introduce a cycle and is a
    /// silent no-op.
    pub fn reparent(&mut self, id: NodeId, new_parent: Option<NodeId>) {
        if !self.is_alive(id) {
            return;
        }
        if let Some(p) = new_parent {
            if !self.is_alive(p) {
                return;
            }
            // Walk up from the prospective parent; finding `id` means a cycle.
            let mut cur = Some(p);
            while let Some(c) = cur {
                if c == id {
                    return;
                }
                cur = self.parent_of(c);
            }
        }
        if let Some(parent) = self.node(id).parent {
            self.unlink_parent(id, parent);
        }
        if let Some(p) = new_parent {
            self.link_parent(id, p);
        }
    }

    /// Returns the parent of `id`, or `None` for parentless or stale nodes.
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.node_opt(id).and_then(|n| n.parent)
    }

    /// The ordered children of `id`. Empty for leaves and stale ids.
    pub fn children_of(&self, id: NodeId) -> &[NodeId] {
        self.node_opt(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Number of direct children of `id`.
    pub fn child_count(&self, id: NodeId) -> usize {
        self.children_of(id).len()
    }

    /// Position of `id` within its parent's child list.
    ///
    /// `None` for parentless or stale nodes.
    pub fn sibling_index(&self, id: NodeId) -> Option<usize> {
        let parent = self.parent_of(id)?;
        self.node(parent).children.iter().position(|c| *c == id)
    }

    /// Reposition `id` within its current parent's child list.
    ///
    /// `index` is clamped to the child-list length, so any large value means
    /// "last". No-op for parentless or stale nodes; siblings keep their
    /// relative order.
    pub fn set_sibling_index(&mut self, id: NodeId, index: usize) {
        let Some(parent) = self.parent_of(id) else {
            return;
        };
        let children = &mut self.node_mut(parent).children;
        let Some(cur) = children.iter().position(|c| *c == id) else {
            return;
        };
        children.remove(cur);
        let at = index.min(children.len());
        children.insert(at, id);
    }

    /// Move `id` to the end of its parent's child list.
    pub fn set_last_sibling(&mut self, id: NodeId) {
        self.set_sibling_index(id, usize::MAX);
    }

    /// Display name of `id`, if live.
    pub fn name(&self, id: NodeId) -> Option<&str> {
        self.node_opt(id).map(|n| n.info.name.as_str())
    }

    /// Update the display name of `id`. No-op on stale ids.
    pub fn set_name(&mut self, id: NodeId, name: impl Into<String>) {
        if let Some(n) = self.node_opt_mut(id) {
            n.info.name = name.into();
        }
    }

    /// Flags of `id`, if live.
    pub fn flags(&self, id: NodeId) -> Option<NodeFlags> {
        self.node_opt(id).map(|n| n.info.flags)
    }

    /// Update the flags of `id`. No-op on stale ids.
    pub fn set_flags(&mut self, id: NodeId, flags: NodeFlags) {
        if let Some(n) = self.node_opt_mut(id) {
            n.info.flags = flags;
        }
    }

    /// Returns true if `id` refers to a live node.
    ///
    /// A `NodeId` is considered live if its slot exists and its generation matches
    /// the current generation stored in that slot.
    /// See [`NodeId`] docs for the generational semantics.
    pub fn is_alive(&self, id: NodeId) -> bool {
        self.nodes
            .get(id.idx())
            .and_then(|n| n.as_ref())
            .map(|n| n.generation == id.1)
            .unwrap_or(false)
    }

    /// Depth-first iterator over the subtree rooted at `start` (inclusive).
    ///
    /// Children are visited in sibling order. Yields nothing for stale ids.
    pub fn descendants(&self, start: NodeId) -> Descendants<'_> {
        let stack = if self.is_alive(start) {
            alloc::vec![start]
        } else {
            Vec::new()
        };
        Descendants { store: self, stack }
    }

    // --- internals ---

    /// Access a node; panics if `id` is stale.
    fn node(&self, id: NodeId) -> &Node {
        self.nodes[id.idx()].as_ref().expect("dangling NodeId")
    }

    /// Access a node mutably; panics if `id` is stale.
    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        self.nodes[id.idx()].as_mut().expect("dangling NodeId")
    }

    fn node_opt(&self, id: NodeId) -> Option<&Node> {
        let n = self.nodes.get(id.idx())?.as_ref()?;
        if n.generation != id.1 {
            return None;
        }
        Some(n)
    }

    fn node_opt_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        let n = self.nodes.get_mut(id.idx())?.as_mut()?;
        if n.generation != id.1 {
            return None;
        }
        Some(n)
    }

    fn link_parent(&mut self, id: NodeId, parent: NodeId) {
        let parent_node = self.node_mut(parent);
        parent_node.children.push(id);
        self.node_mut(id).parent = Some(parent);
    }

    fn unlink_parent(&mut self, id: NodeId, parent: NodeId) {
        let p = self.node_mut(parent);
        p.children.retain(|c| *c != id);
        self.node_mut(id).parent = None;
    }
}

/// Depth-first traversal over a subtree.
///
/// Created by [`Hierarchy::descendants`].
#[derive(Debug)]
pub struct Descendants<'a> {
    store: &'a Hierarchy,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.stack.pop()?;
        // Push in reverse so the first child is popped first.
        let children = self.store.children_of(next);
        self.stack.extend(children.iter().rev().copied());
        Some(next)
    }
}
