//! Vietoris-Rips complexes of finite point clouds.
//!
//! Pipeline
//! - `graph`: exact proximity graph at threshold `eta` plus lower-neighbor queries.
//! - `intersect`: order-preserving intersection of id lists.
//! - `expand`: incremental coface expansion (Zomorodian) up to `max_dim`.
//! - `complex`: bucketing into a complex keyed by dimension.
//! - `vr`: the `complex(points, max_dim, eta)` entry point.
//!
//! `layout` supplies reproducible point clouds and eased transitions for
//! callers that recompute the complex once per frame.
//!
//! Every computation is stateless: nothing is cached across calls.

pub mod complex;
pub mod error;
pub mod expand;
pub mod graph;
pub mod intersect;
pub mod layout;
pub mod point;
pub mod simplex;
pub mod vr;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use complex::{assemble, SimplicialComplex};
pub use error::ComplexError;
pub use expand::{cofaces, incremental_vr};
pub use graph::{build_graph, Edge, ProximityGraph};
pub use intersect::{intersect, intersect_sorted};
pub use point::{Point, Point2, PointId};
pub use simplex::Simplex;
pub use vr::{complex, complex_with_cfg, VrCfg};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::layout::{
        ease_cubic, initial_points, next_layout, shell_layout, targets, Layout, LayoutCfg,
        ReplayToken, Transition,
    };
    pub use crate::{complex, complex_with_cfg, Point2, PointId, Simplex, SimplicialComplex, VrCfg};
    pub use nalgebra::Vector2 as Vec2;
}
