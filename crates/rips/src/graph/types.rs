//! Graph data types and queries.

use std::collections::HashMap;

use crate::point::{Point, PointId};

/// Undirected edge stored once, normalized so that `.0 < .1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub PointId, pub PointId);

impl Edge {
    /// Normalizes the pair; callers guarantee `a != b`.
    #[inline]
    pub fn new(a: PointId, b: PointId) -> Self {
        if a < b {
            Self(a, b)
        } else {
            Self(b, a)
        }
    }

    #[inline]
    pub fn contains(&self, u: PointId) -> bool {
        self.0 == u || self.1 == u
    }
}

/// Proximity graph over a point cloud.
///
/// `vertices` keep the caller's order (seeds are expanded in this order);
/// `lower[k]` lists the lower neighbors of `vertices[k]` ascending by id.
#[derive(Clone, Debug)]
pub struct ProximityGraph<const D: usize> {
    pub(crate) vertices: Vec<Point<D>>,
    pub(crate) edges: Vec<Edge>,
    pub(crate) eta: f64,
    pub(crate) lower: Vec<Vec<PointId>>,
    pub(crate) index: HashMap<PointId, usize>,
}

impl<const D: usize> ProximityGraph<D> {
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Points in the caller's order.
    pub fn vertices(&self) -> &[Point<D>] {
        &self.vertices
    }

    /// Edges ascending by `(lower, upper)` id.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    #[inline]
    pub fn eta(&self) -> f64 {
        self.eta
    }

    /// Neighbors `v` of `u` with `v < u`, ascending. Unknown ids have none.
    pub fn lower_neighbors(&self, u: PointId) -> &[PointId] {
        match self.index.get(&u) {
            Some(&k) => &self.lower[k],
            None => &[],
        }
    }

    /// All neighbors of `u`, ascending by id.
    pub fn neighbors(&self, u: PointId) -> Vec<PointId> {
        let mut out: Vec<PointId> = self
            .edges
            .iter()
            .filter(|e| e.contains(u))
            .map(|e| if e.0 == u { e.1 } else { e.0 })
            .collect();
        out.sort_unstable();
        out
    }

    pub fn has_edge(&self, a: PointId, b: PointId) -> bool {
        if a == b {
            return false;
        }
        let e = Edge::new(a, b);
        self.lower_neighbors(e.1).binary_search(&e.0).is_ok()
    }

    pub fn point(&self, u: PointId) -> Option<&Point<D>> {
        self.index.get(&u).map(|&k| &self.vertices[k])
    }
}
