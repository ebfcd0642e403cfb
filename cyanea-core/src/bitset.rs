//! Dense vertex sets.
//!
//! [`VertexSet`] is the small set algebra graph traversals need: insert,
//! membership, union, symmetric difference, and intersection counts. Two
//! representations implement it:
//!
//! - [`WordSet`] packs up to [`WORD_BITS`] vertices into a single `u64`, so
//!   every operation is one machine instruction plus a popcount.
//! - [`WideSet`] stores one bit per vertex in a [`BitVec`] of u64 blocks and
//!   handles any vertex count. Set operations run block by block.
//!
//! Both are sized for vertices `0..n` at construction. Mixing sets built for
//! different `n` is a logic error.

use std::fmt;

use bitvec::prelude::*;

/// Number of vertices a [`WordSet`] can hold.
pub const WORD_BITS: usize = u64::BITS as usize;

/// A set of vertex indices in `0..n`.
pub trait VertexSet: Clone + fmt::Debug + Send + Sync {
    /// An empty set able to hold vertices `0..n`.
    fn with_capacity(n: usize) -> Self;

    /// Add vertex `v`.
    fn insert(&mut self, v: usize);

    /// Whether vertex `v` is a member. Indices past the capacity are never members.
    fn contains(&self, v: usize) -> bool;

    /// In-place union.
    fn union_with(&mut self, other: &Self);

    /// Vertices in exactly one of `self` and `other`.
    fn symmetric_difference(&self, other: &Self) -> Self;

    /// `|self ∩ other|`
    fn intersection_len(&self, other: &Self) -> usize;

    /// Number of members.
    fn len(&self) -> usize;

    /// Whether the set has no members.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Members in ascending order.
    fn to_vec(&self) -> Vec<usize>;
}

// ── WordSet ──────────────────────────────────────────────────────────────

/// A vertex set held in one u64 word.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct WordSet(u64);

impl WordSet {
    /// The raw bit pattern, bit `i` set iff vertex `i` is a member.
    pub fn bits(self) -> u64 {
        self.0
    }
}

impl VertexSet for WordSet {
    /// # Panics
    ///
    /// Panics if `n > WORD_BITS`.
    fn with_capacity(n: usize) -> Self {
        assert!(n <= WORD_BITS, "WordSet holds at most {WORD_BITS} vertices, got {n}");
        WordSet(0)
    }

    fn insert(&mut self, v: usize) {
        assert!(v < WORD_BITS, "vertex {v} does not fit in a WordSet");
        self.0 |= 1u64 << v;
    }

    fn contains(&self, v: usize) -> bool {
        v < WORD_BITS && (self.0 >> v) & 1 == 1
    }

    fn union_with(&mut self, other: &Self) {
        self.0 |= other.0;
    }

    fn symmetric_difference(&self, other: &Self) -> Self {
        WordSet(self.0 ^ other.0)
    }

    fn intersection_len(&self, other: &Self) -> usize {
        (self.0 & other.0).count_ones() as usize
    }

    fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    fn to_vec(&self) -> Vec<usize> {
        let mut out = Vec::with_capacity(self.len());
        let mut word = self.0;
        while word != 0 {
            out.push(word.trailing_zeros() as usize);
            word &= word - 1; // clear lowest set bit
        }
        out
    }
}

// ── WideSet ──────────────────────────────────────────────────────────────

/// A vertex set of arbitrary capacity backed by a bit vector of u64 blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WideSet(BitVec<u64, Lsb0>);

impl WideSet {
    /// Capacity in vertices.
    pub fn capacity(&self) -> usize {
        self.0.len()
    }
}

impl VertexSet for WideSet {
    fn with_capacity(n: usize) -> Self {
        WideSet(bitvec![u64, Lsb0; 0; n])
    }

    /// # Panics
    ///
    /// Panics if `v` is not below the capacity.
    fn insert(&mut self, v: usize) {
        self.0.set(v, true);
    }

    fn contains(&self, v: usize) -> bool {
        v < self.0.len() && self.0[v]
    }

    fn union_with(&mut self, other: &Self) {
        debug_assert_eq!(self.0.len(), other.0.len());
        for (a, b) in self.0.as_raw_mut_slice().iter_mut().zip(other.0.as_raw_slice()) {
            *a |= *b;
        }
    }

    fn symmetric_difference(&self, other: &Self) -> Self {
        debug_assert_eq!(self.0.len(), other.0.len());
        let mut out = self.clone();
        for (a, b) in out.0.as_raw_mut_slice().iter_mut().zip(other.0.as_raw_slice()) {
            *a ^= *b;
        }
        out
    }

    fn intersection_len(&self, other: &Self) -> usize {
        debug_assert_eq!(self.0.len(), other.0.len());
        self.0
            .as_raw_slice()
            .iter()
            .zip(other.0.as_raw_slice())
            .map(|(a, b)| (a & b).count_ones() as usize)
            .sum()
    }

    fn len(&self) -> usize {
        self.0.count_ones()
    }

    fn to_vec(&self) -> Vec<usize> {
        self.0.iter_ones().collect()
    }
}
