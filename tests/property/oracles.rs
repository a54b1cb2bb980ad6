//! Oracle implementations: obviously-correct models of the list.
//!
//! `OracleList` tracks the logical contents in a `Vec` and the capacity as a plain
//! number following the doubling rule. If the list and the oracle disagree, the
//! oracle is right.

use proptest::prelude::*;

/// One step of a generated operation sequence.
#[derive(Debug, Clone)]
pub enum Op {
    Push(u8),
    Set(usize, u8),
    Insert(usize, u8),
    RemoveAt(usize),
    Remove(u8),
    Clear,
}

/// Indices are drawn from a small range so that both valid and out-of-range
/// positions come up often.
pub fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<u8>().prop_map(Op::Push),
        2 => (0usize..12, any::<u8>()).prop_map(|(i, v)| Op::Set(i, v)),
        2 => (0usize..12, any::<u8>()).prop_map(|(i, v)| Op::Insert(i, v)),
        2 => (0usize..12).prop_map(Op::RemoveAt),
        1 => (0u8..8).prop_map(Op::Remove),
        1 => Just(Op::Clear),
    ]
}

pub fn ops_strategy() -> impl Strategy<Value = Vec<Op>> {
    prop::collection::vec(op_strategy(), 0..64)
}

/// Reference model of the list.
#[derive(Debug, Clone)]
pub struct OracleList {
    pub items: Vec<u8>,
    pub capacity: usize,
}

/// What the oracle expects an operation to return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Done,
    Failed,
    Removed(u8),
    Found(bool),
}

impl OracleList {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::new(),
            capacity,
        }
    }

    fn reserve_one(&mut self) {
        if self.items.len() == self.capacity {
            self.capacity *= 2;
        }
    }

    pub fn apply(&mut self, op: &Op) -> Outcome {
        match *op {
            Op::Push(v) => {
                self.reserve_one();
                self.items.push(v);
                Outcome::Done
            }
            Op::Set(i, v) if i < self.items.len() => {
                self.items[i] = v;
                Outcome::Done
            }
            Op::Set(i, v) if i == self.items.len() => self.apply(&Op::Push(v)),
            Op::Set(..) => Outcome::Failed,
            Op::Insert(i, v) if i <= self.items.len() => {
                self.reserve_one();
                self.items.insert(i, v);
                Outcome::Done
            }
            Op::Insert(..) => Outcome::Failed,
            Op::RemoveAt(i) if i < self.items.len() => Outcome::Removed(self.items.remove(i)),
            Op::RemoveAt(_) => Outcome::Failed,
            Op::Remove(v) => match self.items.iter().position(|&x| x == v) {
                Some(i) => {
                    self.items.remove(i);
                    Outcome::Found(true)
                }
                None => Outcome::Found(false),
            },
            Op::Clear => {
                self.items.clear();
                Outcome::Done
            }
        }
    }
}

/// Oracle for `index_of`: first position, by linear scan.
pub fn oracle_index_of(items: &[u8], needle: u8) -> Option<usize> {
    for (i, &item) in items.iter().enumerate() {
        if item == needle {
            return Some(i);
        }
    }
    None
}
