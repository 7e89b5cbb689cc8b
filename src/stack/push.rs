// This file is part of growable-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::stack::{Stack, new::empty_slots};

impl<T> Stack<T> {
    /// Pushes `value` on top of the stack.
    ///
    /// If the buffer is full it is first reallocated to `2 * size() + 1`
    /// slots. Never fails.
    #[inline]
    pub fn push(&mut self, value: T) {
        if self.len == self.buf.len() {
            self.grow();
        }
        self.buf[self.len] = Some(value);
        self.len += 1;
    }

    #[cold]
    fn grow(&mut self) {
        // `len` non-zero-sized slots are already allocated, so `len <= isize::MAX`.
        let new_capacity = 2 * self.len + 1;

        #[cfg(feature = "tracing")]
        tracing::trace!(
            old_capacity = self.buf.len(),
            new_capacity,
            "growing stack storage"
        );

        let mut grown = empty_slots(new_capacity);
        for (dst, src) in grown.iter_mut().zip(self.buf.iter_mut()) {
            *dst = src.take();
        }
        self.buf = grown;
    }
}
