//! Input validation and brute-force graph construction.

use std::collections::HashMap;

use crate::error::ComplexError;
use crate::point::{Point, PointId};

use super::types::{Edge, ProximityGraph};

/// Reject thresholds that are negative, NaN, or infinite.
pub fn validate_threshold(eta: f64) -> Result<(), ComplexError> {
    if eta.is_finite() && eta >= 0.0 {
        Ok(())
    } else {
        Err(ComplexError::InvalidThreshold { eta })
    }
}

/// Map ids to positions, failing fast on duplicate ids or non-finite coordinates.
pub fn index_points<const D: usize>(
    points: &[Point<D>],
) -> Result<HashMap<PointId, usize>, ComplexError> {
    let mut index = HashMap::with_capacity(points.len());
    for (k, p) in points.iter().enumerate() {
        if !p.is_finite() {
            return Err(ComplexError::NonFiniteCoordinate { id: p.id });
        }
        if index.insert(p.id, k).is_some() {
            return Err(ComplexError::DuplicateId { id: p.id });
        }
    }
    Ok(index)
}

/// Build the proximity graph: `{u,v}` is an edge iff `u != v` and `d(u,v) <= eta`.
///
/// Exact O(N²) pair scan; every unordered pair is visited once so no edge is
/// stored twice.
pub fn build_graph<const D: usize>(
    points: &[Point<D>],
    eta: f64,
) -> Result<ProximityGraph<D>, ComplexError> {
    validate_threshold(eta)?;
    let index = index_points(points)?;
    let n = points.len();
    let mut edges = Vec::new();
    let mut lower: Vec<Vec<PointId>> = vec![Vec::new(); n];
    for (i, p) in points.iter().enumerate() {
        for (j, q) in points.iter().enumerate().skip(i + 1) {
            if p.dist(q) > eta {
                continue;
            }
            edges.push(Edge::new(p.id, q.id));
            if p.id < q.id {
                lower[j].push(p.id);
            } else {
                lower[i].push(q.id);
            }
        }
    }
    for l in lower.iter_mut() {
        l.sort_unstable();
    }
    edges.sort_unstable();
    tracing::debug!(vertices = n, edges = edges.len(), eta, "proximity_graph");
    Ok(ProximityGraph {
        vertices: points.to_vec(),
        edges,
        eta,
        lower,
        index,
    })
}
