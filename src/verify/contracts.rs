// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for `DynamicArrayList`.
//!
//! Every public mutation of the list calls into this module to assert its
//! preconditions, postconditions and the structural invariants:
//!
//! 1. Are **zero-cost in release builds** unless `strict-contracts` is enabled
//! 2. Provide **early failure detection** during development and in tests
//! 3. Never change behaviour: a violated contract panics, a satisfied one is a no-op
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function        | Property                                          |
//! |--------------------------|---------------------------------------------------|
//! | `check_list_invariants`  | `len <= capacity`, `capacity >= MIN_CAPACITY`     |
//! | `check_occupied`         | slot `index < len` holds an element               |
//! | `check_slots_cleared`    | slots `[from, capacity)` are empty                |
//! | `check_growth`           | new capacity is exactly `GROWTH_FACTOR * old`     |
//! | `check_length_delta`     | length changed by exactly the expected amount     |
//! | `check_search_result`    | found index lies in `[0, len)`                    |
//!
//! # Usage
//!
//! ```ignore
//! use dynlist::verify::contracts::*;
//!
//! // Panics in debug builds if the invariant is violated
//! check_list_invariants(list.len(), list.capacity());
//! ```

use crate::list::{GROWTH_FACTOR, MIN_CAPACITY};

/// Contracts are enabled under `debug_assertions` or the `strict-contracts` feature.
pub const CONTRACTS_ENABLED: bool = cfg!(any(debug_assertions, feature = "strict-contracts"));

macro_rules! contract {
    ($cond:expr, $($arg:tt)+) => {
        if CONTRACTS_ENABLED {
            assert!($cond, $($arg)+);
        }
    };
}

// ============================================================================
// STRUCTURAL CONTRACTS
// ============================================================================

/// Check the invariants that hold before and after every public operation.
///
/// # Panics (contracts enabled)
/// Panics if `len > capacity` or `capacity < MIN_CAPACITY`.
#[inline]
pub fn check_list_invariants(len: usize, capacity: usize) {
    // INVARIANT: logical length never exceeds the allocated capacity
    contract!(
        len <= capacity,
        "Contract violation: len {} > capacity {}",
        len,
        capacity
    );
    // INVARIANT: capacity never drops below the minimum
    contract!(
        capacity >= MIN_CAPACITY,
        "Contract violation: capacity {} < minimum {}",
        capacity,
        MIN_CAPACITY
    );
}

/// Check that a logical slot holds an element.
#[inline]
pub fn check_occupied<T>(slots: &[Option<T>], index: usize) {
    contract!(
        slots.get(index).is_some_and(Option::is_some),
        "Contract violation: logical slot {} is empty",
        index
    );
}

/// Check that every slot from `from` to the end of the buffer is empty.
///
/// Stale slots would keep removed elements alive, so `clear` and `remove_at`
/// assert this after they run.
#[inline]
pub fn check_slots_cleared<T>(slots: &[Option<T>], from: usize) {
    if !CONTRACTS_ENABLED {
        return;
    }
    for (offset, slot) in slots.iter().skip(from).enumerate() {
        // INVARIANT: no element is reachable past the logical length
        contract!(
            slot.is_none(),
            "Contract violation: slot {} past len {} still holds a value",
            from + offset,
            from
        );
    }
}

// ============================================================================
// OPERATION CONTRACTS
// ============================================================================

/// Check that growth doubled the capacity.
#[inline]
pub fn check_growth(old_capacity: usize, new_capacity: usize) {
    // INVARIANT: capacity only ever grows, by exactly GROWTH_FACTOR
    contract!(
        Some(new_capacity) == old_capacity.checked_mul(GROWTH_FACTOR),
        "Contract violation: growth from {} produced {} (expected {}x)",
        old_capacity,
        new_capacity,
        GROWTH_FACTOR
    );
}

/// Check that an operation changed the length by `delta`.
#[inline]
pub fn check_length_delta(old_len: usize, new_len: usize, delta: isize) {
    // INVARIANT: push/insert add one element, remove_at removes one
    contract!(
        old_len.checked_add_signed(delta) == Some(new_len),
        "Contract violation: len went from {} to {} (expected delta {})",
        old_len,
        new_len,
        delta
    );
}

/// Check that a search result lies in `[0, len)`.
#[inline]
pub fn check_search_result(result: Option<usize>, len: usize) {
    if let Some(index) = result {
        contract!(
            index < len,
            "Contract violation: index_of returned {} for a list of len {}",
            index,
            len
        );
    }
}
