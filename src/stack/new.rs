// This file is part of growable-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::stack::Stack;

// Alloc imports
use alloc::boxed::Box;

impl<T> Stack<T> {
    /// Constructs an empty stack with [`Stack::DEFAULT_CAPACITY`] slots.
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Constructs an empty stack with `capacity` slots.
    ///
    /// A capacity of `0` is allowed; the first push then grows the buffer to
    /// a single slot.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: empty_slots(capacity),
            len: 0,
        }
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Allocates `capacity` slots, all empty.
pub(super) fn empty_slots<T>(capacity: usize) -> Box<[Option<T>]> {
    core::iter::repeat_with(|| None).take(capacity).collect()
}
