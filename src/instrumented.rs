//! The instrumented element type.
//!
//! [`Counted`] wraps an integer payload together with a handle to the
//! counter that records its operations. Every relational or equality
//! operator between two `Counted` values increments the matching counter
//! before yielding the payload comparison; `Clone` records the copy
//! lifecycle, and the [`swap`] / [`copy_within`] helpers record the move and
//! copy lifecycle for in-slice data movement.
//!
//! Algorithms under test must route all element comparisons and movement
//! through these operations — anything else is invisible to the counter and
//! invalidates the measurement. Ordering and equality are by payload value.

use std::cmp::Ordering;
use std::fmt;

use crate::counter::{CounterRef, Op};

/// An integer payload whose comparisons and copies/moves are counted.
pub struct Counted {
    value: i64,
    counter: CounterRef,
}

impl Counted {
    /// Wrap `value`, attaching it to `counter`. Plain construction is not
    /// a counted event.
    pub fn new(value: i64, counter: &CounterRef) -> Self {
        Self {
            value,
            counter: CounterRef::clone(counter),
        }
    }

    /// The raw payload. Reading it is uncounted; verification code uses this
    /// to check ordering without disturbing the tally.
    pub fn value(&self) -> i64 {
        self.value
    }
}

impl Clone for Counted {
    /// Counted as a copy construction.
    fn clone(&self) -> Self {
        self.counter.record(Op::CopyConstruct);
        Self {
            value: self.value,
            counter: CounterRef::clone(&self.counter),
        }
    }

    /// Counted as a copy assignment.
    fn clone_from(&mut self, source: &Self) {
        self.counter.record(Op::CopyAssign);
        self.value = source.value;
    }
}

impl PartialEq for Counted {
    fn eq(&self, other: &Self) -> bool {
        self.counter.record(Op::Equal);
        self.value == other.value
    }

    #[allow(clippy::partialeq_ne_impl)]
    fn ne(&self, other: &Self) -> bool {
        self.counter.record(Op::NotEqual);
        self.value != other.value
    }
}

impl PartialOrd for Counted {
    /// Uncounted three-way comparison backing the operators below. The
    /// algorithm contract is to compare through the six operators, each of
    /// which records its own kind.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.value.cmp(&other.value))
    }

    fn lt(&self, other: &Self) -> bool {
        self.counter.record(Op::LessThan);
        self.value < other.value
    }

    fn le(&self, other: &Self) -> bool {
        self.counter.record(Op::LessEqual);
        self.value <= other.value
    }

    fn gt(&self, other: &Self) -> bool {
        self.counter.record(Op::GreaterThan);
        self.value > other.value
    }

    fn ge(&self, other: &Self) -> bool {
        self.counter.record(Op::GreaterEqual);
        self.value >= other.value
    }
}

impl fmt::Display for Counted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl fmt::Debug for Counted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Counted({})", self.value)
    }
}

/// Exchange `values[i]` and `values[j]`, counted as the classical three-move
/// swap: one move construction (into the temporary) and two move
/// assignments.
pub fn swap(values: &mut [Counted], i: usize, j: usize) {
    if i == j {
        return;
    }
    values[i].counter.record(Op::MoveConstruct);
    values[i].counter.record(Op::MoveAssign);
    values[i].counter.record(Op::MoveAssign);
    values.swap(i, j);
}

/// Copy the payload of `values[src]` into `values[dst]`, counted as one copy
/// assignment. Exists because two slots of one slice cannot be borrowed for
/// `clone_from` simultaneously.
pub fn copy_within(values: &mut [Counted], src: usize, dst: usize) {
    let payload = values[src].value;
    values[dst].counter.record(Op::CopyAssign);
    values[dst].value = payload;
}
