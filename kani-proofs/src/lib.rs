// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for the dynlist slot primitives.
//!
//! This standalone crate extracts the slot manipulations behind
//! `DynamicArrayList` and proves them on a bounded buffer using Kani.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **Growth**: the next capacity is exactly double and never wraps
//! 2. **Insert**: prefix kept, item at index, tail shifted right, spare slots empty
//! 3. **Remove**: removed value returned, tail shifted left, vacated slot emptied
//! 4. **Index ranges**: `[0, len]` for set/insert, `[0, len)` for get/remove_at

/// Factor applied on every growth.
pub const GROWTH_FACTOR: usize = 2;

/// Bounded buffer size for the proofs.
pub const MODEL_CAPACITY: usize = 4;

// ============================================================================
// SLOT PRIMITIVES (mirrors src/list.rs)
// ============================================================================

/// Capacity after one growth step, or `None` on overflow.
pub fn next_capacity(capacity: usize) -> Option<usize> {
    capacity.checked_mul(GROWTH_FACTOR)
}

/// Whether `index` is valid for an operation over a list of `len` elements.
pub fn index_in_range(index: usize, len: usize, allows_end: bool) -> bool {
    if allows_end {
        index <= len
    } else {
        index < len
    }
}

/// Insert `item` at `index`; the caller guarantees `len < slots.len()`.
pub fn insert_slot<T>(slots: &mut [Option<T>], len: usize, index: usize, item: T) {
    slots[len] = Some(item);
    slots[index..=len].rotate_right(1);
}

/// Remove the element at `index < len`, leaving slot `len - 1` empty.
pub fn remove_slot<T>(slots: &mut [Option<T>], len: usize, index: usize) -> Option<T> {
    let removed = slots[index].take()?;
    slots[index..len].rotate_left(1);
    Some(removed)
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// Symbolic buffer holding `len` elements followed by empty slots.
    fn any_buffer(len: usize) -> [Option<u8>; MODEL_CAPACITY] {
        let mut slots = [None; MODEL_CAPACITY];
        for i in 0..len {
            slots[i] = Some(kani::any());
        }
        slots
    }

    /// Verify growth doubles and stays strictly above the old capacity.
    #[kani::proof]
    fn verify_growth_doubles() {
        let capacity: usize = kani::any_where(|&c| c >= 2 && c <= usize::MAX / GROWTH_FACTOR);

        let grown = next_capacity(capacity);
        kani::assert(grown == Some(capacity * 2), "growth must double");
        kani::assert(grown.map_or(false, |g| g > capacity), "growth must increase capacity");
    }

    /// Verify growth reports overflow instead of wrapping.
    #[kani::proof]
    fn verify_growth_overflow() {
        let capacity: usize = kani::any_where(|&c| c > usize::MAX / GROWTH_FACTOR);
        kani::assert(next_capacity(capacity).is_none(), "overflow must be reported");
    }

    /// Verify insert keeps the prefix, places the item and shifts the tail.
    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_insert_shifts_tail() {
        let len: usize = kani::any_where(|&n| n < MODEL_CAPACITY);
        let index: usize = kani::any_where(|&i| i <= len);
        let item: u8 = kani::any();

        let original = any_buffer(len);
        let mut slots = original;
        insert_slot(&mut slots, len, index, item);

        for i in 0..index {
            kani::assert(slots[i] == original[i], "prefix must be unchanged");
        }
        kani::assert(slots[index] == Some(item), "item must land at index");
        for i in index..len {
            kani::assert(slots[i + 1] == original[i], "tail must shift right by one");
        }
        for i in (len + 1)..MODEL_CAPACITY {
            kani::assert(slots[i].is_none(), "spare slots must stay empty");
        }
    }

    /// Verify remove returns the element, shifts the tail and empties the vacated slot.
    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_remove_clears_vacated_slot() {
        let len: usize = kani::any_where(|&n| n >= 1 && n <= MODEL_CAPACITY);
        let index: usize = kani::any_where(|&i| i < len);

        let original = any_buffer(len);
        let mut slots = original;
        let removed = remove_slot(&mut slots, len, index);

        kani::assert(removed == original[index], "removed value must be returned");
        for i in 0..index {
            kani::assert(slots[i] == original[i], "prefix must be unchanged");
        }
        for i in index..(len - 1) {
            kani::assert(slots[i] == original[i + 1], "tail must shift left by one");
        }
        for i in (len - 1)..MODEL_CAPACITY {
            kani::assert(slots[i].is_none(), "no value may remain past the new len");
        }
    }

    /// Verify the index ranges of every operation.
    #[kani::proof]
    fn verify_index_ranges() {
        let len: usize = kani::any();
        let index: usize = kani::any();

        kani::assert(
            index_in_range(index, len, true) == (index <= len),
            "set/insert accept [0, len]",
        );
        kani::assert(
            index_in_range(index, len, false) == (index < len),
            "get/remove_at accept [0, len)",
        );
        if index_in_range(index, len, false) {
            kani::assert(index_in_range(index, len, true), "[0, len) is inside [0, len]");
        }
    }
}
