// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Value equality used by `index_of`, `contains` and `remove`.
//!
//! Two phases: identity first, then `PartialEq`. A value compared with itself
//! (same address) is equal without calling `eq`; everything else falls through
//! to the full comparison.
//!
//! Absent values are modelled with `Option<T>`, so the null rules come from
//! `Option`'s `PartialEq`:
//!
//! | source    | other     | result        |
//! |-----------|-----------|---------------|
//! | `None`    | `None`    | `true`        |
//! | `None`    | `Some(_)` | `false`       |
//! | `Some(_)` | `None`    | `false`       |
//! | `Some(a)` | `Some(b)` | `a == b`      |

/// Returns whether `source` and `other` are logically equal.
#[inline]
pub fn equals<T: PartialEq + ?Sized>(source: &T, other: &T) -> bool {
    std::ptr::eq(source, other) || source == other
}
