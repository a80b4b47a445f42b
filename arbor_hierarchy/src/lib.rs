// Copyright 2026 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arbor Hierarchy: a generational hierarchy store with ordered siblings.
//!
//! Arbor Hierarchy is the system of record for a forest of named nodes, the
//! kind a scene graph or an outline (tree-view) panel is built over.
//!
//! - Nodes carry a display name, [`NodeFlags`], an ordered child list, and an
//!   optional parent.
//! - Handles are small generational [`NodeId`]s: stale ids never alias a
//!   live node.
//! - Sibling order is part of the data model. [`Hierarchy::reparent`] appends
//!   as last child and [`Hierarchy::set_sibling_index`] repositions a node
//!   within its parent, which is exactly what drag-and-drop reordering in a
//!   tree view needs.
//!
//! This crate holds no UI state. A widget binding such as `arbor_outline`
//! drives it from tree-view events and queries it back for display.
//!
//! ## Not a widget
//!
//! There is no notion of rows, expansion, or selection here; those belong to
//! the widget layer. The store only answers structural questions (parent,
//! children, sibling index) and applies structural mutations.
//!
//! ## Minimal usage
//!
//! ```
//! use arbor_hierarchy::{Hierarchy, NodeInfo};
//!
//! let mut h = Hierarchy::new();
//! let root = h.insert(None, NodeInfo::named("scene"));
//! let a = h.insert(Some(root), NodeInfo::named("a"));
//! let b = h.insert(Some(root), NodeInfo::named("b"));
//!
//! assert_eq!(h.children_of(root), &[a, b]);
//! assert_eq!(h.sibling_index(b), Some(1));
//!
//! // Move `b` before `a`.
//! h.set_sibling_index(b, 0);
//! assert_eq!(h.children_of(root), &[b, a]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod store;
mod types;

pub use store::{Descendants, Hierarchy};
pub use types::{NodeFlags, NodeId, NodeInfo};
