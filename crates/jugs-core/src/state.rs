//! Search states: [`State`] (a pair of buckets) and [`Op`] (the six moves).
//!
//! A state's identity is the pair of quantities it holds. Capacities travel
//! along with the buckets but never take part in equality, hashing or
//! ordering, so the state space of a puzzle is bounded by
//! `(capacity_a + 1) * (capacity_b + 1)`.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::bucket::{Bucket, BucketError};

// ---------------------------------------------------------------------------
// Op
// ---------------------------------------------------------------------------

/// One of the six bucket transitions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Op {
    FillA,
    FillB,
    EmptyA,
    EmptyB,
    PourAToB,
    PourBToA,
}

impl Op {
    /// All operations in successor-generation order.
    ///
    /// Search traces depend on this order; do not reorder.
    pub const ALL: [Op; 6] = [
        Op::FillA,
        Op::FillB,
        Op::EmptyA,
        Op::EmptyB,
        Op::PourAToB,
        Op::PourBToA,
    ];
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Op::FillA => "fill A",
            Op::FillB => "fill B",
            Op::EmptyA => "empty A",
            Op::EmptyB => "empty B",
            Op::PourAToB => "pour A->B",
            Op::PourBToA => "pour B->A",
        };
        f.write_str(name)
    }
}

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

/// A pair of buckets (A, B).
///
/// `State` is `Copy`: every transition works on a fresh copy, so two states
/// never share a bucket.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct State {
    pub(crate) a: Bucket,
    pub(crate) b: Bucket,
}

impl State {
    /// Create a state from two buckets.
    #[inline]
    pub const fn new(a: Bucket, b: Bucket) -> Self {
        Self { a, b }
    }

    /// Create a state from raw capacities and quantities, validating both
    /// buckets.
    pub fn with_quantities(
        capacity_a: i32,
        quantity_a: i32,
        capacity_b: i32,
        quantity_b: i32,
    ) -> Result<Self, BucketError> {
        Ok(Self {
            a: Bucket::new(capacity_a, quantity_a)?,
            b: Bucket::new(capacity_b, quantity_b)?,
        })
    }

    /// Bucket A.
    #[inline]
    pub fn a(&self) -> Bucket {
        self.a
    }

    /// Bucket B.
    #[inline]
    pub fn b(&self) -> Bucket {
        self.b
    }

    /// The `(A, B)` quantities: the state's identity.
    #[inline]
    pub fn quantities(&self) -> (i32, i32) {
        (self.a.quantity, self.b.quantity)
    }

    /// Number of distinct quantity pairs these capacities allow, saturating
    /// at `usize::MAX`.
    pub fn state_space(&self) -> usize {
        let side = |b: Bucket| {
            usize::try_from(b.capacity).map_or(usize::MAX, |c| c.saturating_add(1))
        };
        side(self.a).saturating_mul(side(self.b))
    }

    /// Return a copy of this state with `op` applied.
    pub fn apply(self, op: Op) -> Self {
        let mut next = self;
        match op {
            Op::FillA => next.a.fill(),
            Op::FillB => next.b.fill(),
            Op::EmptyA => next.a.empty(),
            Op::EmptyB => next.b.empty(),
            Op::PourAToB => {
                next.a.pour_to(&mut next.b);
            }
            Op::PourBToA => {
                next.b.pour_to(&mut next.a);
            }
        }
        next
    }

    /// The six successor states, in [`Op::ALL`] order.
    ///
    /// No-op transitions are kept; callers filter them out.
    pub fn successors(self) -> [State; 6] {
        Op::ALL.map(|op| self.apply(op))
    }
}

// --- trait impls for State ---

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.quantities() == other.quantities()
    }
}

impl Eq for State {}

impl Hash for State {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.a.quantity.hash(state);
        self.b.quantity.hash(state);
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        self.quantities().cmp(&other.quantities())
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.a.quantity, self.b.quantity)
    }
}
