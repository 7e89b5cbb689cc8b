// This file is part of growable-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, stack::Stack};

impl<T> Stack<T> {
    /// Removes and returns the top element.
    ///
    /// The vacated slot is left empty, so the stack holds no reference to the
    /// returned value. Returns [`Error::EmptyContainer`] when the stack is
    /// empty, leaving it unchanged.
    #[inline]
    pub fn pop(&mut self) -> Result<T, Error> {
        let top = self.len.checked_sub(1).ok_or(Error::EmptyContainer)?;
        // Slots below `len` are always occupied.
        let value = self.buf[top].take().ok_or(Error::EmptyContainer)?;
        self.len = top;
        Ok(value)
    }

    /// Drops every element and sets `size() = 0`. The capacity is kept.
    pub fn clear(&mut self) {
        for slot in &mut self.buf[..self.len] {
            *slot = None;
        }
        self.len = 0;
    }
}
