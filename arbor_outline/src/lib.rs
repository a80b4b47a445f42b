// Copyright 2026 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arbor Outline: binds a hierarchy store to a tree-view (outline) widget.
//!
//! ## Overview
//!
//! This crate is the glue between [`arbor_hierarchy::Hierarchy`] — the system
//! of record for parent/child structure — and whatever tree-view widget a host
//! application uses.
//! It does not render rows, detect gestures, or virtualize large trees; the
//! widget does all of that.
//! Instead, the host forwards widget events (expand, select, remove,
//! drag-drop) to an [`Outline`](crate::outline::Outline), which validates
//! them, mutates the store, and pushes label/expansion/selection state back
//! through the [`RowHost`](crate::types::RowHost) trait.
//!
//! ## Inputs
//!
//! Construct an [`Outline`](crate::outline::Outline) with the ordered root
//! set, a [`RowHost`](crate::types::RowHost) implementation wrapping your
//! widget, and a [`NodePool`](crate::types::NodePool) that takes removed
//! nodes back.
//! Roots are protected: they cannot be removed, selected, or sibling-reordered
//! through the binding.
//!
//! ## Drag and drop
//!
//! The one nontrivial piece is the drop resolution in
//! [`drop`](crate::drop): given an ordered list of dragged nodes, a target,
//! and a [`DropAction`](crate::types::DropAction), it reparents and reorders
//! so that multi-item drags stay contiguous and keep their original relative
//! order, whether items move forward or backward, within or across parents.
//! The forward/reverse iteration asymmetry between the two sibling actions is
//! load-bearing; see the module docs.
//!
//! ## Lifecycle
//!
//! Everything is synchronous and single-threaded: the widget dispatches one
//! callback at a time and each operation completes before it returns, so no
//! partially reordered state is ever observable.
//! Dropping (or [`close`](crate::outline::Outline::close)-ing) the binding
//! clears the removal filter it installed on the widget, even during unwind.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod drop;
pub mod outline;
pub mod selection;
pub mod types;
