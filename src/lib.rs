//! A contract-checked dynamic array list.
//!
//! This crate provides [`DynamicArrayList<T>`], an indexable, resizable sequence
//! backed by one contiguous buffer that doubles when an insertion would overflow
//! it. Every public operation states its preconditions, postconditions and the
//! list invariants through runtime contracts, and property tests check the same
//! invariants against a `Vec` oracle.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │ equality.rs │────▶│   list.rs    │────▶│   iter.rs   │
//! │  (equals)   │     │ (push, grow, │     │ (Iter,      │
//! └─────────────┘     │  insert, ...)│     │  IntoIter)  │
//!                     └──────────────┘     └─────────────┘
//!        │                   │                    │
//!        ▼                   ▼                    ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                     verify/                          │
//! │  (contracts: panicking checks,                       │
//! │   invariants: InvariantError reports)                │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Invariants
//!
//! | Property                        | Enforced by                          |
//! |---------------------------------|--------------------------------------|
//! | `len <= capacity`               | `check_list_invariants`, `verify`    |
//! | `capacity >= 2`                 | `with_capacity`, `verify`            |
//! | capacity only doubles           | `check_growth`                       |
//! | no value past `len` is reachable| `check_slots_cleared`, `verify`      |
//!
//! # Usage
//!
//! ```
//! use dynlist::{DynamicArrayList, ListError};
//!
//! let mut list = DynamicArrayList::with_capacity(2)?;
//! list.push(33);
//! list.push(44);
//! list.push(55);
//! assert_eq!(list.capacity(), 4);
//!
//! assert!(!list.remove(&66));
//! assert_eq!(list.remove_at(0)?, 33);
//! assert_eq!(list, [44, 55]);
//!
//! assert!(matches!(list.get(2), Err(ListError::IndexOutOfRange { .. })));
//! # Ok::<(), ListError>(())
//! ```
//!
//! # Features
//!
//! - `serde`: serialize a list as a plain sequence.
//! - `strict-contracts`: keep contract assertions in release builds.

// Module declarations
pub mod equality;
mod error;
mod iter;
mod list;
#[cfg(feature = "serde")]
mod serialization;
pub mod testing;
pub mod verify;

// Re-exports for public API
pub use equality::equals;
pub use error::{ListError, Operation, Result};
pub use iter::{IntoIter, Iter, IterMut};
pub use list::{DynamicArrayList, DEFAULT_CAPACITY, GROWTH_FACTOR, MIN_CAPACITY};
pub use verify::InvariantError;
