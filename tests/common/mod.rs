//! Shared test utilities and fixtures.

#![allow(dead_code)]

use dynlist::DynamicArrayList;

// Re-export canonical test utilities from dynlist::testing
pub use dynlist::testing::{list_of, list_with_capacity, DropCounter};

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Assert that a list is structurally well-formed and holds `expected` in order.
pub fn assert_list_eq<T>(list: &DynamicArrayList<T>, expected: &[T])
where
    T: PartialEq + std::fmt::Debug,
{
    if let Err(err) = list.verify() {
        panic!("list is not well-formed: {}", err);
    }
    assert_eq!(list.len(), expected.len(), "length mismatch for {:?}", list);
    for (i, value) in expected.iter().enumerate() {
        assert_eq!(list.get(i), Ok(value), "element {} differs", i);
    }
}

/// Assert the structural invariants that hold after every operation.
pub fn assert_invariants<T>(list: &DynamicArrayList<T>) {
    assert!(
        list.len() <= list.capacity(),
        "len {} > capacity {}",
        list.len(),
        list.capacity()
    );
    assert!(list.capacity() >= dynlist::MIN_CAPACITY);
    if let Err(err) = list.verify() {
        panic!("invariant violated: {}", err);
    }
}
