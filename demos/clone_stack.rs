// This file is part of growable-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pushes two values, clones the stack, then drains both to show that the
//! clone has its own storage.
//!
//! ```text
//! cargo run --example clone_stack
//! ```

use growable_stack::Stack;

fn main() {
    let mut stack = Stack::new();
    stack.push("1");
    stack.push("2");

    let mut cloned = stack.clone();

    println!("Original Stack");
    while let Ok(value) = stack.pop() {
        println!("{value}");
    }

    println!("\nCloned Stack");
    while let Ok(value) = cloned.pop() {
        println!("{value}");
    }
}
