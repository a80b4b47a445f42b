// Copyright 2026 the Arbor Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selection handling: toggle-select, observers, and root auto-correction.
//!
//! Run:
//! - `cargo run -p arbor_demos --example outline_selection`

use arbor_hierarchy::{Hierarchy, NodeId, NodeInfo};
use arbor_outline::outline::Outline;
use arbor_outline::types::{NoPool, NullRows, SelectObserver};

/// Observer that narrates its notifications, tagged with a label.
struct Narrator(&'static str);

impl SelectObserver for Narrator {
    fn on_selected(&mut self, node: NodeId) {
        println!("  [{}] selected {node:?}", self.0);
    }
    fn on_unselected(&mut self, node: NodeId) {
        println!("  [{}] unselected {node:?}", self.0);
    }
}

fn main() {
    let mut h = Hierarchy::new();
    let root = h.insert(None, NodeInfo::named("scene"));
    let a = h.insert(Some(root), NodeInfo::named("a"));
    let b = h.insert(Some(root), NodeInfo::named("b"));
    let c = h.insert(Some(root), NodeInfo::named("c"));

    let mut outline = Outline::new(vec![root], NullRows, NoPool);
    outline.register_select_observer(a, Box::new(Narrator("a")));
    outline.register_select_observer(b, Box::new(Narrator("b")));

    let listener = outline.add_selection_listener(Box::new(|old, new| {
        println!("  [listener] {old:?} -> {new:?}");
    }));

    println!("\n== selection_changed([a, b]) ==");
    outline.selection_changed(&[a, b]);
    println!("selected: {:?}", outline.selected());

    println!("\n== selection_changed([b, root, c]) — root corrected out ==");
    outline.selection_changed(&[b, root, c]);
    println!("selected: {:?}", outline.selected());

    println!("\n== toggle_select(c, no modifier) twice ==");
    let first = outline.toggle_select(c, false);
    let second = outline.toggle_select(c, false);
    println!("first: {first:?}, second: {second:?}, selected: {:?}", outline.selected());

    println!("\n== toggle_select(a, multi) then toggle_select(b, multi) ==");
    outline.toggle_select(a, true);
    outline.toggle_select(b, true);
    println!("selected: {:?}", outline.selected());

    outline.remove_selection_listener(listener);
    println!("\n== after listener removal: selection_changed([]) ==");
    outline.selection_changed(&[]);
    println!("selected: {:?}", outline.selected());
}
