// Copyright 2026 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the hierarchy store: node identifiers, flags, and node data.

use alloc::string::String;

/// Identifier for a node in the hierarchy.
///
/// This is a small, copyable handle that stays stable across updates but becomes
/// invalid when the underlying slot is reused.
/// It consists of a slot index and a generation counter.
///
/// ## Semantics
///
/// - On insert, a fresh slot is allocated with generation `1`.
/// - On remove, the slot is freed; any existing `NodeId` that pointed to that slot is now stale.
/// - On reuse of a freed slot, its generation is incremented, producing a new, distinct `NodeId`.
///
/// ### Liveness
///
/// Use [`Hierarchy::is_alive`](crate::Hierarchy::is_alive) to check whether a
/// `NodeId` still refers to a live node.
/// Stale `NodeId`s never alias a different live node because the generation must match.
///
/// ### Notes
///
/// - The generation increments on slot reuse and never decreases.
/// - `u32` is ample for practical lifetimes; behavior on generation overflow is unspecified.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct NodeId(pub(crate) u32, pub(crate) u32);

impl NodeId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

bitflags::bitflags! {
    /// Node flags controlling how a widget binding treats a node.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct NodeFlags: u8 {
        /// Node is a domain element (listed when its parent expands in an outline view).
        const ELEMENT = 0b0000_0001;
        /// Node's subtree is protected from structural edits by the UI.
        const LOCKED  = 0b0000_0010;
    }
}

impl Default for NodeFlags {
    fn default() -> Self {
        Self::ELEMENT
    }
}

/// Per-node data stored alongside the structure.
#[derive(Clone, Debug)]
pub struct NodeInfo {
    /// Display name shown by widget rows bound to this node.
    pub name: String,
    /// Element/lock flags.
    ///
    /// See [`NodeFlags`] for available bits.
    pub flags: NodeFlags,
}

impl NodeInfo {
    /// Node data with the given name and default flags.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            flags: NodeFlags::default(),
        }
    }
}

impl Default for NodeInfo {
    fn default() -> Self {
        Self {
            name: String::new(),
            flags: NodeFlags::default(),
        }
    }
}
