//! Single entry point: points, maximum dimension, threshold → Vietoris-Rips complex.

use crate::complex::{assemble, SimplicialComplex};
use crate::error::ComplexError;
use crate::expand::incremental_vr;
use crate::graph::{build_graph, validate_threshold};
use crate::point::Point;

/// Parameters of one complex computation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VrCfg {
    /// Inclusive upper bound on simplex dimension.
    pub max_dim: usize,
    /// Inclusive distance threshold for edges.
    pub eta: f64,
}

impl Default for VrCfg {
    fn default() -> Self {
        Self {
            max_dim: 2,
            eta: 80.0,
        }
    }
}

impl VrCfg {
    pub fn validate(&self) -> Result<(), ComplexError> {
        validate_threshold(self.eta)
    }
}

/// Vietoris-Rips complex of `points` at threshold `eta`, dimensions `0..=max_dim`.
///
/// Stateless: every call rebuilds the graph from scratch. Fails before any
/// work on a bad threshold, duplicate ids, or non-finite coordinates.
pub fn complex<const D: usize>(
    points: &[Point<D>],
    max_dim: usize,
    eta: f64,
) -> Result<SimplicialComplex, ComplexError> {
    let graph = build_graph(points, eta)?;
    let cx = assemble(incremental_vr(&graph, max_dim), max_dim);
    tracing::debug!(max_dim, eta, f_vector = ?cx.f_vector(), "vr_complex");
    Ok(cx)
}

/// Same as [`complex`]; the threshold is validated once, by `build_graph`.
pub fn complex_with_cfg<const D: usize>(
    points: &[Point<D>],
    cfg: VrCfg,
) -> Result<SimplicialComplex, ComplexError> {
    complex(points, cfg.max_dim, cfg.eta)
}
