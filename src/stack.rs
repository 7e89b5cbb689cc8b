// This file is part of growable-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `Stack` type and its inherent API.
//!
//! `Stack<T>` is a LIFO container over a heap-allocated buffer of slots.
//! It grows its buffer by the `2n + 1` rule when a push finds it full, and
//! every slot at or above the logical size is kept empty.

mod clone;
mod new;
mod pop;
mod push;

// Crate imports
use crate::{
    error::Error,
    iter::{Drain, Iter, IterMut},
};

// Alloc imports
use alloc::boxed::Box;

// Core imports
use core::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
};

/// A growable last-in-first-out stack.
///
/// `Stack<T>` owns a contiguous buffer of `capacity()` slots and tracks a
/// logical size `n` with `0 <= n <= capacity()`:
///
/// - slots `[0, n)` hold the elements in push order (index `0` is the
///   bottom, index `n - 1` the top);
/// - slots `[n, capacity())` are always empty, so a popped element is never
///   kept alive by the stack;
/// - capacity starts at [`Stack::DEFAULT_CAPACITY`] and only grows.
///
/// # Growth
///
/// [`push`](Stack::push) on a full stack reallocates the buffer to
/// `2 * n + 1` slots and moves the live elements across before writing. The
/// `+ 1` makes growth from a zero-capacity stack
/// ([`Stack::with_capacity(0)`](Stack::with_capacity)) well defined. Pushes
/// are amortized `O(1)`. Popping never shrinks the buffer.
///
/// # Cloning
///
/// [`Clone`] allocates a new buffer of the same capacity and clones each
/// element into the same index. The two stacks never share a buffer, so
/// pushing or popping on one does not affect the other. Whether the
/// *elements* are shared depends on `T`: cloning a `Stack<Rc<U>>` shares
/// each `U` between the two stacks.
///
/// # Examples
///
/// ```rust
/// use growable_stack::Stack;
///
/// let mut stack = Stack::new();
/// for i in 0..20 {
///     stack.push(i);
/// }
/// assert_eq!(stack.size(), 20);
/// assert_eq!(stack.capacity(), 33);
/// assert_eq!(stack.peek(), Some(&19));
/// assert_eq!(stack[0], 0);
/// assert_eq!(stack.pop(), Ok(19));
/// ```
pub struct Stack<T> {
    pub(crate) buf: Box<[Option<T>]>,
    pub(crate) len: usize,
}

impl<T> Stack<T> {
    /// Capacity of a stack created with [`Stack::new`] or [`Default`].
    pub const DEFAULT_CAPACITY: usize = 16;

    /// Returns the number of slots in the backing buffer.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Returns the number of elements on the stack.
    #[inline]
    pub const fn size(&self) -> usize {
        self.len
    }

    /// Alias of [`size`](Stack::size).
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the stack holds no elements.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `Some(&T)` if `i < size()`, otherwise `None`. Index `0` is the bottom.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        if i < self.len {
            self.buf[i].as_ref()
        } else {
            None
        }
    }

    /// Returns `Some(&mut T)` if `i < size()`, otherwise `None`.
    #[inline]
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        if i < self.len {
            self.buf[i].as_mut()
        } else {
            None
        }
    }

    /// Returns the top element without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.len.checked_sub(1).and_then(|top| self.get(top))
    }

    /// Returns the top element mutably, if any.
    #[inline]
    pub fn peek_mut(&mut self) -> Option<&mut T> {
        self.len.checked_sub(1).and_then(|top| self.get_mut(top))
    }

    /// Fallible variant of [`peek`](Stack::peek), returning
    /// [`Error::EmptyContainer`] when the stack is empty.
    #[inline]
    pub fn try_peek(&self) -> Result<&T, Error> {
        self.peek().ok_or(Error::EmptyContainer)
    }

    // iterators
    /// Iterates from bottom to top without consuming the stack.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.buf[..self.len])
    }

    /// Mutable bottom-to-top iteration.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(&mut self.buf[..self.len])
    }

    /// Pops every element, top first, **and leaves `self` empty**.
    ///
    /// Elements not consumed before the iterator is dropped are dropped
    /// along with it. The capacity is unchanged.
    #[inline]
    pub fn drain(&mut self) -> Drain<'_, T> {
        Drain::new(self)
    }
}

struct LiveElements<'a, T>(&'a Stack<T>);

impl<T: fmt::Debug> fmt::Debug for LiveElements<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("elements", &LiveElements(self))
            .finish()
    }
}

// Comparisons and hashing look at live elements only; capacity is not part of the value.
impl<T: PartialEq> PartialEq for Stack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}
impl<T: Eq> Eq for Stack<T> {}
impl<T: Ord> Ord for Stack<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other.iter())
    }
}
impl<T: PartialOrd> PartialOrd for Stack<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}
impl<T: Hash> Hash for Stack<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len);
        for item in self.iter() {
            item.hash(state);
        }
    }
}
