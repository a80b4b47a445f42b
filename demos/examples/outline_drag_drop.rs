// Copyright 2026 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag-and-drop resolution walkthrough with a simple ASCII tree.
//!
//! This example builds a small forest, binds it to a chatty in-memory row
//! host, and runs the three drop actions so you can watch the sibling
//! arithmetic keep multi-item drags contiguous and in order.
//!
//! Run:
//! - `cargo run -p arbor_demos --example outline_drag_drop`

use arbor_hierarchy::{Hierarchy, NodeId, NodeInfo};
use arbor_outline::outline::Outline;
use arbor_outline::types::{DropAction, NoPool, RemoveFilter, RowHost};

/// Row host that logs every call the binding makes. A real host would drive
/// a toolkit tree widget here.
#[derive(Default)]
struct LoggingRows;

impl RowHost for LoggingRows {
    fn has_row(&self, _node: NodeId) -> bool {
        true
    }
    fn set_row_label(&mut self, node: NodeId, label: &str) {
        println!("  [rows] label {node:?} = {label:?}");
    }
    fn set_row_can_expand(&mut self, node: NodeId, can_expand: bool) {
        println!("  [rows] can_expand {node:?} = {can_expand}");
    }
    fn set_row_expanded(&mut self, node: NodeId, expanded: bool) {
        println!("  [rows] expanded {node:?} = {expanded}");
    }
    fn set_selected(&mut self, items: &[NodeId]) {
        println!("  [rows] selected = {items:?}");
    }
    fn add_child(&mut self, parent: NodeId, child: NodeId) {
        println!("  [rows] add_child {child:?} under {parent:?}");
    }
    fn remove_child(&mut self, parent: NodeId, child: NodeId, last_child: bool) {
        println!("  [rows] remove_child {child:?} from {parent:?} (last: {last_child})");
    }
    fn change_parent(&mut self, new_parent: NodeId, child: NodeId) {
        println!("  [rows] change_parent {child:?} -> {new_parent:?}");
    }
    fn set_remove_filter(&mut self, filter: Option<RemoveFilter>) {
        println!(
            "  [rows] remove filter {}",
            if filter.is_some() { "installed" } else { "cleared" }
        );
    }
}

fn main() {
    let mut h = Hierarchy::new();
    let root = h.insert(None, NodeInfo::named("scene"));
    let group = h.insert(Some(root), NodeInfo::named("group"));
    let a = h.insert(Some(group), NodeInfo::named("a"));
    let b = h.insert(Some(group), NodeInfo::named("b"));
    let t = h.insert(Some(group), NodeInfo::named("t"));
    let bin = h.insert(Some(root), NodeInfo::named("bin"));
    let x = h.insert(Some(bin), NodeInfo::named("x"));
    let y = h.insert(Some(bin), NodeInfo::named("y"));

    let mut outline = Outline::new(vec![root], LoggingRows, NoPool);

    println!("\nBefore:");
    print_ascii_tree(&h, root);

    // Same-parent reorder: drag [a, b] to sit immediately after `t`.
    println!("\n== NextSibling: drag [a, b] onto t ==");
    outline.begin_drag(&[a, b]);
    if outline.begin_drop(Some(t), DropAction::NextSibling) {
        outline.handle_drop(&mut h, Some(t), DropAction::NextSibling);
    }
    outline.end_drag();
    print_ascii_tree(&h, root);

    // Cross-parent move: drag [x, y] to sit immediately before `t`.
    println!("\n== PrevSibling: drag [x, y] onto t ==");
    outline.begin_drag(&[x, y]);
    if outline.begin_drop(Some(t), DropAction::PrevSibling) {
        outline.handle_drop(&mut h, Some(t), DropAction::PrevSibling);
    }
    outline.end_drag();
    print_ascii_tree(&h, root);

    // Reparent: drag [a, b] into the now-empty `bin`.
    println!("\n== LastChild: drag [a, b] onto bin ==");
    outline.begin_drag(&[a, b]);
    if outline.begin_drop(Some(bin), DropAction::LastChild) {
        outline.handle_drop(&mut h, Some(bin), DropAction::LastChild);
    }
    outline.end_drag();
    print_ascii_tree(&h, root);

    // Sibling drops onto a root are vetoed before anything moves.
    println!("\n== NextSibling onto the root (vetoed) ==");
    outline.begin_drag(&[a]);
    let accepted = outline.begin_drop(Some(root), DropAction::NextSibling);
    println!("  accepted: {accepted}");
    outline.end_drag();
    print_ascii_tree(&h, root);

    outline.close();
}

fn print_ascii_tree(h: &Hierarchy, root: NodeId) {
    fn go(h: &Hierarchy, node: NodeId, prefix: &str) {
        let children = h.children_of(node);
        let len = children.len();
        for (i, &c) in children.iter().enumerate() {
            let last = i + 1 == len;
            let branch = if last { "└── " } else { "├── " };
            println!("{prefix}{branch}{}", h.name(c).unwrap_or("?"));
            let next_prefix = if last {
                format!("{prefix}    ")
            } else {
                format!("{prefix}│   ")
            };
            go(h, c, &next_prefix);
        }
    }
    println!("{}", h.name(root).unwrap_or("?"));
    go(h, root, "");
}
