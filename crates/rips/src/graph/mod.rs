//! Proximity graph: vertices are points, edges join pairs within the threshold.
//!
//! Purpose
//! - Build the 1-skeleton of the Vietoris-Rips complex by exact brute force.
//! - Answer lower-neighbor queries relative to the id order (`PointId: Ord`).
//!
//! Layout
//! - `types.rs` holds `Edge` and `ProximityGraph` with its queries, `build.rs`
//!   validates input and constructs the graph.

mod build;
mod types;

pub use build::{build_graph, index_points, validate_threshold};
pub use types::{Edge, ProximityGraph};

#[cfg(test)]
mod tests;
