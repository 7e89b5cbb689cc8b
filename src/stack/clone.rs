// This file is part of growable-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::stack::Stack;

/// Allocates a new buffer of the same capacity and clones each slot into it.
///
/// The clone never shares storage with `self`. Elements are duplicated with
/// `T::clone`, so a stack of handles (`Rc<U>`, `Arc<U>`, `&U`) yields a clone
/// whose slots point at the same values as the original's.
impl<T: Clone> Clone for Stack<T> {
    fn clone(&self) -> Self {
        Self {
            buf: self.buf.clone(),
            len: self.len,
        }
    }
}
