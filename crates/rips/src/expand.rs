//! Coface expansion (incremental Vietoris-Rips construction, after Zomorodian).
//!
//! Every clique of size `<= max_dim + 1` is reached exactly once: it is grown
//! from its highest vertex by repeatedly appending a lower neighbor that is
//! adjacent to everything already in the simplex. The candidate pool carried
//! along is the intersection of the lower neighborhoods seen so far, so it is
//! ascending by id and only shrinks.
//!
//! The accumulator is owned: each call takes it by value and hands it back.

use crate::graph::ProximityGraph;
use crate::intersect::{intersect_sorted, is_strictly_ascending};
use crate::point::PointId;
use crate::simplex::Simplex;

/// All simplices of the clique complex of `graph` up to dimension `max_dim`,
/// in discovery order (seeds follow `graph.vertices()`).
pub fn incremental_vr<const D: usize>(
    graph: &ProximityGraph<D>,
    max_dim: usize,
) -> Vec<Simplex> {
    graph.vertices().iter().fold(Vec::new(), |acc, p| {
        let pool = graph.lower_neighbors(p.id).to_vec();
        cofaces(graph, max_dim, Simplex::vertex(p.id), pool, acc)
    })
}

/// Record `tau`, then extend it by every candidate unless `max_dim` is reached.
///
/// Pre: `pool` is strictly ascending and every id in it is a lower neighbor of
/// all vertices of `tau`.
pub fn cofaces<const D: usize>(
    graph: &ProximityGraph<D>,
    max_dim: usize,
    tau: Simplex,
    pool: Vec<PointId>,
    mut acc: Vec<Simplex>,
) -> Vec<Simplex> {
    debug_assert!(is_strictly_ascending(&pool));
    if tau.dim() >= max_dim {
        acc.push(tau);
        return acc;
    }
    acc.push(tau.clone());
    for &v in &pool {
        let sigma = tau.extended(v);
        let next = intersect_sorted(&pool, graph.lower_neighbors(v));
        acc = cofaces(graph, max_dim, sigma, next, acc);
    }
    acc
}
