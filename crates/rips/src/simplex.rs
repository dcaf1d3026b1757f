//! Simplices as owned, non-empty vertex sequences.

use crate::point::PointId;

/// A clique of the proximity graph, listed in discovery order.
///
/// Always holds at least one vertex; dimension is `len - 1`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Simplex(Vec<PointId>);

impl Simplex {
    /// The 0-simplex on `p`.
    #[inline]
    pub fn vertex(p: PointId) -> Self {
        Self(vec![p])
    }

    /// Build from an explicit vertex list; `None` if empty.
    pub fn from_vertices(vertices: Vec<PointId>) -> Option<Self> {
        if vertices.is_empty() {
            None
        } else {
            Some(Self(vertices))
        }
    }

    /// A copy of `self` with `v` appended.
    pub fn extended(&self, v: PointId) -> Self {
        let mut vs = Vec::with_capacity(self.0.len() + 1);
        vs.extend_from_slice(&self.0);
        vs.push(v);
        Self(vs)
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.0.len() - 1
    }

    #[inline]
    pub fn vertices(&self) -> &[PointId] {
        &self.0
    }

    /// Vertex set in ascending id order, for order-insensitive comparison.
    pub fn canonical(&self) -> Vec<PointId> {
        let mut vs = self.0.clone();
        vs.sort_unstable();
        vs
    }

    /// Codimension-1 faces, one per omitted vertex. Empty for a vertex.
    pub fn facets(&self) -> Vec<Simplex> {
        if self.0.len() < 2 {
            return Vec::new();
        }
        (0..self.0.len())
            .map(|skip| {
                Simplex(
                    self.0
                        .iter()
                        .enumerate()
                        .filter(|&(k, _)| k != skip)
                        .map(|(_, &v)| v)
                        .collect(),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimensions_and_extension() {
        let s = Simplex::vertex(PointId(4));
        assert_eq!(s.dim(), 0);
        let t = s.extended(PointId(2)).extended(PointId(1));
        assert_eq!(t.dim(), 2);
        assert_eq!(t.vertices(), &[PointId(4), PointId(2), PointId(1)]);
        assert_eq!(t.canonical(), vec![PointId(1), PointId(2), PointId(4)]);
        // original untouched
        assert_eq!(s.vertices(), &[PointId(4)]);
    }

    #[test]
    fn facets_omit_each_vertex_once() {
        let t = Simplex::from_vertices(vec![PointId(3), PointId(1), PointId(0)]).unwrap();
        let f: Vec<Vec<PointId>> = t.facets().iter().map(|s| s.vertices().to_vec()).collect();
        assert_eq!(
            f,
            vec![
                vec![PointId(1), PointId(0)],
                vec![PointId(3), PointId(0)],
                vec![PointId(3), PointId(1)],
            ]
        );
        assert!(Simplex::vertex(PointId(0)).facets().is_empty());
    }

    #[test]
    fn empty_is_rejected() {
        assert!(Simplex::from_vertices(Vec::new()).is_none());
    }
}
