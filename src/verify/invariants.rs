// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Structural invariant checks that report instead of panicking.
//!
//! Contracts catch violations where they happen. These checks answer a
//! different question: given a list in some state, is it well-formed? Tests use
//! them after every step of a generated operation sequence.
//!
//! | Check                   | Property                                    |
//! |-------------------------|---------------------------------------------|
//! | `LengthExceedsCapacity` | `len <= capacity`                           |
//! | `CapacityBelowMinimum`  | `capacity >= MIN_CAPACITY`                  |
//! | `MissingElement`        | every slot in `[0, len)` holds an element   |
//! | `StaleSlot`             | every slot in `[len, capacity)` is empty    |

use crate::list::MIN_CAPACITY;
use thiserror::Error;

/// Error type for invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantError {
    /// The logical length is larger than the buffer.
    #[error("len {len} > capacity {capacity}")]
    LengthExceedsCapacity { len: usize, capacity: usize },
    /// The buffer is smaller than the minimum capacity.
    #[error("capacity {capacity} < minimum {minimum}")]
    CapacityBelowMinimum { capacity: usize, minimum: usize },
    /// A logical slot is empty.
    #[error("logical slot {index} is empty (len {len})")]
    MissingElement { index: usize, len: usize },
    /// A slot past the logical length still holds a value.
    #[error("slot {index} past len {len} still holds a value")]
    StaleSlot { index: usize, len: usize },
}

/// Check a raw buffer against a logical length.
///
/// Returns the first violation found, checking the cheap bounds before
/// walking the slots.
pub fn check_slots<T>(slots: &[Option<T>], len: usize) -> Result<(), InvariantError> {
    let capacity = slots.len();
    if len > capacity {
        return Err(InvariantError::LengthExceedsCapacity { len, capacity });
    }
    if capacity < MIN_CAPACITY {
        return Err(InvariantError::CapacityBelowMinimum {
            capacity,
            minimum: MIN_CAPACITY,
        });
    }

    let (occupied, spare) = slots.split_at(len);
    if let Some(index) = occupied.iter().position(Option::is_none) {
        return Err(InvariantError::MissingElement { index, len });
    }
    if let Some(offset) = spare.iter().position(Option::is_some) {
        return Err(InvariantError::StaleSlot {
            index: len + offset,
            len,
        });
    }
    Ok(())
}
