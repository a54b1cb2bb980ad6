// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: runtime contracts and structural invariant checks.
//!
//! Two complementary approaches to catching bugs:
//!
//! 1. **Runtime contracts** (`contracts`) that panic when a precondition,
//!    postcondition or invariant is violated. Active in debug builds and under
//!    the `strict-contracts` feature, compiled out otherwise.
//!
//! 2. **Invariant checks** (`DynamicArrayList::verify`) that walk the whole
//!    buffer and return a typed [`InvariantError`] instead of panicking. Property
//!    tests call this after every operation.
//!
//! The list is correct with or without the contracts enabled. They only report.

pub mod contracts;
mod invariants;

pub use invariants::*;
