//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use std::cell::Cell;
use std::rc::Rc;

use crate::DynamicArrayList;

/// Build a list holding `items` in order, starting from the default capacity.
///
/// This is the canonical builder used across all tests.
pub fn list_of<T: Clone>(items: &[T]) -> DynamicArrayList<T> {
    let mut list = DynamicArrayList::new();
    for item in items {
        list.push(item.clone());
    }
    list
}

/// Build a list with an explicit initial capacity.
pub fn list_with_capacity<T: Clone>(capacity: usize, items: &[T]) -> DynamicArrayList<T> {
    let mut list = DynamicArrayList::with_capacity(capacity).expect("capacity >= 2");
    for item in items {
        list.push(item.clone());
    }
    list
}

/// An element that counts how many of its kind have been dropped.
#[derive(Debug)]
pub struct DropCounter {
    drops: Rc<Cell<usize>>,
}

impl DropCounter {
    /// Create `n` counters sharing one drop tally.
    pub fn batch(n: usize) -> (Vec<DropCounter>, Rc<Cell<usize>>) {
        let drops = Rc::new(Cell::new(0));
        let counters = (0..n)
            .map(|_| DropCounter {
                drops: Rc::clone(&drops),
            })
            .collect();
        (counters, drops)
    }
}

impl Drop for DropCounter {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}
