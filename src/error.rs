// This file is part of growable-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for [`Stack`](crate::Stack).
//!
//! Only popping (or peeking through the fallible accessor) can fail; growth
//! is not a domain error. The error is `Copy` and implements
//! `core::error::Error`.

// Core imports
use core::{error::Error as CoreError, fmt};

/// Errors returned by operations on [`Stack`](crate::Stack).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The operation needs at least one element, but the stack is empty.
    ///
    /// Returned by [`Stack::pop`](crate::Stack::pop) and
    /// [`Stack::try_peek`](crate::Stack::try_peek) when `size() == 0`.
    EmptyContainer,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyContainer => f.write_str("stack is empty"),
        }
    }
}

impl CoreError for Error {}
