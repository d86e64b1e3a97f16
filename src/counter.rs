//! Operation counters for instrumented measurements.
//!
//! An [`OpCounter`] tallies every comparison and copy/move lifecycle event
//! performed through [`Counted`](crate::instrumented::Counted) values.
//! Counters are plain relaxed atomics: increments are cheap, and
//! [`OpCounter::snapshot_and_reset`] swaps each counter to zero while
//! capturing its value. Case execution is strictly sequential, so a
//! snapshot taken between runs is an exact account of the work in between.
//!
//! There is deliberately no global instance. Each suite run constructs its
//! own counter and shares it with the values under test via a [`CounterRef`],
//! which keeps measurements isolated and leaves the door open to running
//! suites in parallel with independent counters.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Shared handle to an operation counter.
pub type CounterRef = Arc<OpCounter>;

/// The kind of operation being recorded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    LessThan,
    GreaterThan,
    LessEqual,
    GreaterEqual,
    Equal,
    NotEqual,
    CopyConstruct,
    CopyAssign,
    MoveConstruct,
    MoveAssign,
}

/// Live operation tally: six comparison counters and four lifecycle counters.
#[derive(Debug, Default)]
pub struct OpCounter {
    less_than: AtomicU64,
    greater_than: AtomicU64,
    less_equal: AtomicU64,
    greater_equal: AtomicU64,
    equal: AtomicU64,
    not_equal: AtomicU64,
    copy_constructs: AtomicU64,
    copy_assigns: AtomicU64,
    move_constructs: AtomicU64,
    move_assigns: AtomicU64,
}

impl OpCounter {
    /// Create a fresh counter wrapped in a shareable handle.
    pub fn shared() -> CounterRef {
        Arc::new(Self::default())
    }

    /// Record one operation. Unconditional, never fails.
    pub fn record(&self, op: Op) {
        let counter = match op {
            Op::LessThan => &self.less_than,
            Op::GreaterThan => &self.greater_than,
            Op::LessEqual => &self.less_equal,
            Op::GreaterEqual => &self.greater_equal,
            Op::Equal => &self.equal,
            Op::NotEqual => &self.not_equal,
            Op::CopyConstruct => &self.copy_constructs,
            Op::CopyAssign => &self.copy_assigns,
            Op::MoveConstruct => &self.move_constructs,
            Op::MoveAssign => &self.move_assigns,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Capture all ten counters as they stood before the call and zero them.
    ///
    /// Each field is swapped atomically; the capture as a whole assumes the
    /// sequential execution model (no instrumented operations in flight).
    pub fn snapshot_and_reset(&self) -> CounterSnapshot {
        CounterSnapshot {
            less_than: self.less_than.swap(0, Ordering::Relaxed),
            greater_than: self.greater_than.swap(0, Ordering::Relaxed),
            less_equal: self.less_equal.swap(0, Ordering::Relaxed),
            greater_equal: self.greater_equal.swap(0, Ordering::Relaxed),
            equal: self.equal.swap(0, Ordering::Relaxed),
            not_equal: self.not_equal.swap(0, Ordering::Relaxed),
            copy_constructs: self.copy_constructs.swap(0, Ordering::Relaxed),
            copy_assigns: self.copy_assigns.swap(0, Ordering::Relaxed),
            move_constructs: self.move_constructs.swap(0, Ordering::Relaxed),
            move_assigns: self.move_assigns.swap(0, Ordering::Relaxed),
        }
    }

    /// Zero all counters, discarding the current values.
    pub fn reset(&self) {
        let _ = self.snapshot_and_reset();
    }
}

/// Immutable capture of an [`OpCounter`] at a point in time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CounterSnapshot {
    pub less_than: u64,
    pub greater_than: u64,
    pub less_equal: u64,
    pub greater_equal: u64,
    pub equal: u64,
    pub not_equal: u64,
    pub copy_constructs: u64,
    pub copy_assigns: u64,
    pub move_constructs: u64,
    pub move_assigns: u64,
}

impl CounterSnapshot {
    /// Sum of the six comparison counters.
    pub fn total_comparisons(&self) -> u64 {
        self.less_than
            + self.greater_than
            + self.less_equal
            + self.greater_equal
            + self.equal
            + self.not_equal
    }

    /// Sum of the four lifecycle counters (indicative of data movement).
    pub fn total_data_moves(&self) -> u64 {
        self.copy_constructs + self.copy_assigns + self.move_constructs + self.move_assigns
    }
}

impl fmt::Display for CounterSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "  < : {}, > : {}, <=: {}, >=: {}, ==: {}, !=: {}",
            self.less_than,
            self.greater_than,
            self.less_equal,
            self.greater_equal,
            self.equal,
            self.not_equal
        )?;
        write!(
            f,
            "  CopyCtor: {}, CopyAssign: {}, MoveCtor: {}, MoveAssign: {}",
            self.copy_constructs, self.copy_assigns, self.move_constructs, self.move_assigns
        )
    }
}
