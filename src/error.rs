// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors raised by list operations.
//!
//! Every fallible operation validates its arguments before touching the buffer,
//! so an `Err` always means the list is exactly as it was before the call.
//!
//! "Not found" is not an error: `index_of` returns `None` and `remove` returns
//! `false`.

use thiserror::Error;

/// Result alias for list operations.
pub type Result<T> = std::result::Result<T, ListError>;

/// The operation that rejected an index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Get,
    Set,
    Insert,
    RemoveAt,
}

impl Operation {
    /// Upper bound is inclusive for operations that may append at the end.
    pub fn allows_end(self) -> bool {
        matches!(self, Operation::Set | Operation::Insert)
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Operation::Get => "get",
            Operation::Set => "set",
            Operation::Insert => "insert",
            Operation::RemoveAt => "remove_at",
        };
        f.write_str(name)
    }
}

/// Errors returned by [`DynamicArrayList`](crate::DynamicArrayList).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    /// A construction or call parameter is malformed.
    #[error("invalid argument `{parameter}`: {reason}")]
    InvalidArgument {
        parameter: &'static str,
        reason: String,
    },

    /// An index lies outside the valid range of the operation.
    #[error("{operation}: index {index} is out of range for a list of count {len}")]
    IndexOutOfRange {
        operation: Operation,
        index: usize,
        len: usize,
    },

    /// A required destination was absent.
    #[error("`{parameter}` must not be absent")]
    NullTarget { parameter: &'static str },

    /// The `copy_to` destination cannot hold every element from the given offset.
    #[error(
        "the target array is too small because it can only hold {available} items, \
         but {required} would be required"
    )]
    InsufficientCapacity { available: usize, required: usize },
}

impl ListError {
    pub(crate) fn out_of_range(operation: Operation, index: usize, len: usize) -> Self {
        tracing::trace!(%operation, index, len, "rejected index");
        ListError::IndexOutOfRange {
            operation,
            index,
            len,
        }
    }
}
