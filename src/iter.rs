// This file is part of growable-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`Stack`](crate::Stack).
//!
//! - [`Iter`] / [`IterMut`] walk the live elements bottom to top and support
//!   `DoubleEndedIterator` and `ExactSizeIterator`.
//! - [`IntoIter`] and [`Drain`] yield by value in pop order (top first).
//! - `Extend` / `FromIterator` push items in iteration order, so the last
//!   item ends up on top.

// Crate imports
use crate::stack::Stack;

// Core imports
use core::{
    iter::FusedIterator,
    slice,
};

/// Borrowing iterator returned by [`Stack::iter`], bottom to top.
pub struct Iter<'a, T> {
    slots: slice::Iter<'a, Option<T>>,
}

impl<'a, T> Iter<'a, T> {
    /// `slots` must be the live prefix of a stack's buffer.
    pub(crate) fn new(slots: &'a [Option<T>]) -> Self {
        Self {
            slots: slots.iter(),
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots.clone(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;
    fn next(&mut self) -> Option<&'a T> {
        self.slots.next().and_then(Option::as_ref)
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}
impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        self.slots.next_back().and_then(Option::as_ref)
    }
}
impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Mutable iterator returned by [`Stack::iter_mut`], bottom to top.
pub struct IterMut<'a, T> {
    slots: slice::IterMut<'a, Option<T>>,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(slots: &'a mut [Option<T>]) -> Self {
        Self {
            slots: slots.iter_mut(),
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;
    fn next(&mut self) -> Option<&'a mut T> {
        self.slots.next().and_then(Option::as_mut)
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}
impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<&'a mut T> {
        self.slots.next_back().and_then(Option::as_mut)
    }
}
impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

/// Owned iterator returned by `Stack::into_iter()`.
///
/// Yields elements by value in pop order, top first.
pub struct IntoIter<T> {
    stack: Stack<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        self.stack.pop().ok()
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.stack.len;
        (rem, Some(rem))
    }
}
impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

/// Draining iterator returned by [`Stack::drain`].
///
/// Pops top first. Whatever is left when the iterator is dropped is cleared
/// from the stack.
pub struct Drain<'a, T> {
    stack: &'a mut Stack<T>,
}

impl<'a, T> Drain<'a, T> {
    pub(crate) fn new(stack: &'a mut Stack<T>) -> Self {
        Self { stack }
    }
}

impl<T> Iterator for Drain<'_, T> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        self.stack.pop().ok()
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.stack.len;
        (rem, Some(rem))
    }
}
impl<T> ExactSizeIterator for Drain<'_, T> {}
impl<T> FusedIterator for Drain<'_, T> {}

impl<T> Drop for Drain<'_, T> {
    fn drop(&mut self) {
        self.stack.clear();
    }
}

impl<T> IntoIterator for Stack<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter { stack: self }
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Stack<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for Stack<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut out = Stack::new();
        out.extend(iter);
        out
    }
}
