// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for arbitrary operation sequences.
//!
//! The list is driven alongside a `Vec`. Contracts are compiled in
//! (`strict-contracts`), so an internal violation panics even in release fuzz
//! builds; the explicit checks below catch divergence from the oracle.

#![no_main]

use arbitrary::Arbitrary;
use dynlist::{DynamicArrayList, ListError};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum Op {
    Push(u16),
    Set(u8, u16),
    Insert(u8, u16),
    RemoveAt(u8),
    Remove(u16),
    Clear,
}

#[derive(Arbitrary, Debug)]
struct Input {
    initial_capacity: u8,
    ops: Vec<Op>,
}

fuzz_target!(|input: Input| {
    let capacity = usize::from(input.initial_capacity);
    let mut list = match DynamicArrayList::with_capacity(capacity) {
        Ok(list) => list,
        Err(ListError::InvalidArgument { .. }) => {
            assert!(capacity < dynlist::MIN_CAPACITY);
            return;
        }
        Err(other) => panic!("unexpected construction error: {}", other),
    };
    let mut oracle: Vec<u16> = Vec::new();
    let mut last_capacity = list.capacity();

    for op in input.ops {
        match op {
            Op::Push(v) => {
                list.push(v);
                oracle.push(v);
            }
            Op::Set(i, v) => {
                let i = usize::from(i);
                let result = list.set(i, v);
                if i < oracle.len() {
                    oracle[i] = v;
                } else if i == oracle.len() {
                    oracle.push(v);
                } else {
                    assert!(result.is_err(), "set({}) past len {} succeeded", i, oracle.len());
                    continue;
                }
                assert!(result.is_ok());
            }
            Op::Insert(i, v) => {
                let i = usize::from(i);
                let result = list.insert(i, v);
                if i <= oracle.len() {
                    assert!(result.is_ok());
                    oracle.insert(i, v);
                } else {
                    assert!(result.is_err());
                }
            }
            Op::RemoveAt(i) => {
                let i = usize::from(i);
                let result = list.remove_at(i);
                if i < oracle.len() {
                    assert_eq!(result, Ok(oracle.remove(i)));
                } else {
                    assert!(result.is_err());
                }
            }
            Op::Remove(v) => {
                let removed = list.remove(&v);
                match oracle.iter().position(|&x| x == v) {
                    Some(i) => {
                        assert!(removed);
                        oracle.remove(i);
                    }
                    None => assert!(!removed),
                }
            }
            Op::Clear => {
                list.clear();
                oracle.clear();
            }
        }

        // Capacity only ever grows, and only by doubling
        let capacity = list.capacity();
        assert!(capacity == last_capacity || capacity == last_capacity * 2);
        last_capacity = capacity;

        assert_eq!(list, oracle);
        assert_eq!(list.verify(), Ok(()));
    }
});
