//! Simplicial complex keyed by dimension, and the assembler that buckets simplices.

use std::collections::HashSet;

use crate::point::PointId;
use crate::simplex::Simplex;

/// Simplices grouped by dimension. Every dimension `0..=max_dim` is addressable
/// through [`get`](Self::get).
///
/// Only dimensions `0..=min(max_dim, vertex count - 1)` are stored; no clique
/// can be larger than the vertex set, so every dimension above that is empty.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SimplicialComplex {
    max_dim: usize,
    buckets: Vec<Vec<Simplex>>,
}

impl SimplicialComplex {
    /// Requested upper bound on dimension.
    #[inline]
    pub fn max_dim(&self) -> usize {
        self.max_dim
    }

    /// Number of stored dimensions, `min(max_dim, vertex count - 1) + 1`.
    #[inline]
    pub fn stored_dims(&self) -> usize {
        self.buckets.len()
    }

    /// Simplices of dimension `dim` in discovery order; empty when none exist.
    pub fn get(&self, dim: usize) -> &[Simplex] {
        self.buckets.get(dim).map(Vec::as_slice).unwrap_or(&[])
    }

    /// `(dim, simplices)` for every stored dimension, ascending.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[Simplex])> {
        self.buckets.iter().enumerate().map(|(d, b)| (d, b.as_slice()))
    }

    /// Number of simplices per stored dimension.
    pub fn f_vector(&self) -> Vec<usize> {
        self.buckets.iter().map(Vec::len).collect()
    }

    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Alternating sum of the f-vector.
    pub fn euler_characteristic(&self) -> i64 {
        self.buckets
            .iter()
            .enumerate()
            .map(|(d, b)| if d % 2 == 0 { b.len() as i64 } else { -(b.len() as i64) })
            .sum()
    }

    /// Membership by vertex set (order-insensitive).
    pub fn contains(&self, s: &Simplex) -> bool {
        let key = s.canonical();
        self.get(s.dim()).iter().any(|t| t.canonical() == key)
    }

    /// Whether every facet of every simplex is also present.
    pub fn is_closed(&self) -> bool {
        let present: HashSet<Vec<PointId>> = self
            .buckets
            .iter()
            .flatten()
            .map(Simplex::canonical)
            .collect();
        self.buckets
            .iter()
            .flatten()
            .flat_map(|s| s.facets())
            .all(|f| present.contains(&f.canonical()))
    }
}

/// Bucket `simplices` by dimension, keeping discovery order within a bucket.
///
/// Buckets are materialized for `0..=min(max_dim, n - 1)` where `n` is the
/// number of 0-simplices, so any `max_dim` up to `usize::MAX` is cheap. A
/// simplex above `max_dim` grows the bucket list rather than being dropped.
pub fn assemble(simplices: Vec<Simplex>, max_dim: usize) -> SimplicialComplex {
    let vertex_count = simplices.iter().filter(|s| s.dim() == 0).count();
    let stored = max_dim.min(vertex_count.saturating_sub(1));
    let mut buckets: Vec<Vec<Simplex>> = vec![Vec::new(); stored.saturating_add(1)];
    let mut max_dim = max_dim;
    for s in simplices {
        let d = s.dim();
        if d >= buckets.len() {
            buckets.resize_with(d.saturating_add(1), Vec::new);
        }
        max_dim = max_dim.max(d);
        buckets[d].push(s);
    }
    SimplicialComplex { max_dim, buckets }
}
