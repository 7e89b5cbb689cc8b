// This file is part of growable-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for [`Stack`](crate::Stack).
//!
//! Indices count from the bottom of the stack (`0` is the oldest element).
//! Like slices, indexing **panics** when `i >= size()`, even if `i` is within
//! the capacity.

// Crate imports
use crate::stack::Stack;

// Core imports
use core::ops::{Index, IndexMut};

impl<T> Index<usize> for Stack<T> {
    type Output = T;
    fn index(&self, i: usize) -> &Self::Output {
        let len = self.len;
        match self.get(i) {
            Some(v) => v,
            None => panic!("index out of bounds: the len is {len} but the index is {i}"),
        }
    }
}

impl<T> IndexMut<usize> for Stack<T> {
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        let len = self.len;
        match self.get_mut(i) {
            Some(v) => v,
            None => panic!("index out of bounds: the len is {len} but the index is {i}"),
        }
    }
}
