// This file is part of growable-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `growable-stack`
//!
//! A `no_std` (with `alloc`), heap-backed LIFO stack **with no `unsafe`**.
//!
//! The core type, [`Stack<T>`], owns a contiguous buffer of element slots and
//! tracks a logical size `n ∈ 0..=capacity`. Elements are pushed onto and
//! popped off the top; indices count from the bottom (`0` is the oldest
//! element, `n - 1` the newest).
//!
//! ## Storage semantics
//!
//! - A fresh stack has capacity [`Stack::DEFAULT_CAPACITY`] (16).
//! - When a push finds the stack full, the storage is reallocated to
//!   `2 * n + 1` slots and the live elements are moved across. Growth never
//!   happens eagerly and capacity never shrinks.
//! - Slots past the logical size are always empty. [`Stack::pop`],
//!   [`Stack::clear`] and [`Stack::drain`] move elements *out* of their slots,
//!   so the stack never keeps a popped element alive.
//! - [`Clone`] allocates new storage and clones each element into it. The two
//!   stacks never share slots; for handle types such as `Rc<U>` they do share
//!   the pointed-to values.
//!
//! ## Errors
//!
//! The only failure is popping an empty stack, reported as
//! [`Error::EmptyContainer`]. [`Stack::push`] never fails.
//!
//! ## Features
//!
//! - `serde`
//!   - Enables `Serialize` / `Deserialize` for `Stack<T>`.
//!   - A stack serializes as a sequence, bottom first. Capacity is not
//!     serialized.
//!
//! - `tracing`
//!   - Emits a `trace`-level event whenever the backing storage grows.
//!
//! ## Example
//!
//! ```rust
//! use growable_stack::{Error, Stack};
//!
//! let mut stack = Stack::new();
//! stack.push("1");
//! stack.push("2");
//!
//! let mut cloned = stack.clone();
//!
//! assert_eq!(stack.pop(), Ok("2"));
//! assert_eq!(stack.size(), 1);
//! assert_eq!(cloned.size(), 2);
//!
//! assert_eq!(cloned.pop(), Ok("2"));
//! assert_eq!(cloned.pop(), Ok("1"));
//! assert_eq!(cloned.pop(), Err(Error::EmptyContainer));
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

// Modules
mod error;
mod index;
mod iter;
#[cfg(feature = "serde")]
mod serde;
mod stack;

// Public exports (crate API surface)
pub use error::Error;
pub use iter::{Drain, IntoIter, Iter, IterMut};
pub use stack::Stack;
