//! Graph construction and lower-neighbor queries.

use super::*;
use crate::error::ComplexError;
use crate::point::{Point2, PointId};

fn diagonal() -> Vec<Point2> {
    vec![
        Point2::xy(1, 0.0, 0.0),
        Point2::xy(2, 2.0, 2.0),
        Point2::xy(3, 3.0, 3.0),
        Point2::xy(4, 4.0, 4.0),
    ]
}

#[test]
fn empty_input_gives_empty_graph() {
    let g = build_graph::<2>(&[], 1.0).unwrap();
    assert_eq!(g.vertex_count(), 0);
    assert_eq!(g.edge_count(), 0);
    assert!(g.lower_neighbors(PointId(0)).is_empty());
}

#[test]
fn large_threshold_gives_complete_graph() {
    let g = build_graph(&diagonal(), 30.0).unwrap();
    assert_eq!(g.edge_count(), 6);
    for e in g.edges() {
        assert!(e.0 < e.1);
    }
    let mut dedup = g.edges().to_vec();
    dedup.dedup();
    assert_eq!(dedup.len(), 6);
}

#[test]
fn zero_threshold_has_no_edges_between_distinct_points() {
    let g = build_graph(&diagonal(), 0.0).unwrap();
    assert_eq!(g.edge_count(), 0);
}

#[test]
fn coincident_points_connect_at_zero_threshold() {
    let pts = vec![Point2::xy(0, 1.0, 1.0), Point2::xy(1, 1.0, 1.0)];
    let g = build_graph(&pts, 0.0).unwrap();
    assert!(g.has_edge(PointId(0), PointId(1)));
}

#[test]
fn threshold_is_inclusive() {
    let pts = vec![Point2::xy(0, 0.0, 0.0), Point2::xy(1, 3.0, 4.0)];
    let at = build_graph(&pts, 5.0).unwrap();
    assert!(at.has_edge(PointId(0), PointId(1)));
    let below = build_graph(&pts, 5.0 - 1e-9).unwrap();
    assert!(!below.has_edge(PointId(0), PointId(1)));
}

#[test]
fn lower_neighbors_only_precede() {
    let g = build_graph(&diagonal(), 30.0).unwrap();
    assert_eq!(g.lower_neighbors(PointId(3)), &[PointId(1), PointId(2)]);
    assert_eq!(g.lower_neighbors(PointId(1)), &[] as &[PointId]);
    assert_eq!(
        g.neighbors(PointId(2)),
        vec![PointId(1), PointId(3), PointId(4)]
    );
}

#[test]
fn lower_neighbors_follow_ids_not_positions() {
    // Input order is the reverse of the id order.
    let pts = vec![
        Point2::xy(9, 0.0, 0.0),
        Point2::xy(5, 1.0, 0.0),
        Point2::xy(2, 2.0, 0.0),
    ];
    let g = build_graph(&pts, 1.5).unwrap();
    assert_eq!(g.lower_neighbors(PointId(9)), &[PointId(5)]);
    assert_eq!(g.lower_neighbors(PointId(5)), &[PointId(2)]);
    assert!(g.lower_neighbors(PointId(2)).is_empty());
    assert!(!g.has_edge(PointId(9), PointId(2)));
}

#[test]
fn lower_neighbor_consistency_on_every_edge() {
    let g = build_graph(&diagonal(), 2.9).unwrap();
    for e in g.edges() {
        assert!(g.lower_neighbors(e.1).contains(&e.0));
        assert!(!g.lower_neighbors(e.0).contains(&e.1));
    }
}

#[test]
fn rejects_bad_threshold() {
    for eta in [-1.0, f64::NAN, f64::INFINITY] {
        let err = build_graph(&diagonal(), eta).unwrap_err();
        assert!(matches!(err, ComplexError::InvalidThreshold { .. }));
    }
}

#[test]
fn rejects_duplicate_ids() {
    let pts = vec![Point2::xy(1, 0.0, 0.0), Point2::xy(1, 5.0, 5.0)];
    assert_eq!(
        build_graph(&pts, 1.0).unwrap_err(),
        ComplexError::DuplicateId { id: PointId(1) }
    );
}

#[test]
fn rejects_non_finite_coordinates() {
    let pts = vec![Point2::xy(0, 0.0, 0.0), Point2::xy(7, f64::NAN, 0.0)];
    assert_eq!(
        build_graph(&pts, 1.0).unwrap_err(),
        ComplexError::NonFiniteCoordinate { id: PointId(7) }
    );
}

#[test]
fn accessors_expose_a_read_only_view() {
    let pts = diagonal();
    let g = build_graph(&pts, 1.5).unwrap();
    assert_eq!(g.vertices(), pts.as_slice());
    assert_eq!(g.eta(), 1.5);
    assert_eq!(
        g.edges(),
        &[
            Edge::new(PointId(2), PointId(3)),
            Edge::new(PointId(3), PointId(4))
        ]
    );
    for e in g.edges() {
        assert!(g.has_edge(e.0, e.1));
        assert_eq!(g.lower_neighbors(e.1), &[e.0]);
    }
}

#[test]
fn far_apart_coordinates_do_not_overflow() {
    let pts = vec![Point2::xy(0, 0.0, 0.0), Point2::xy(1, 1e200, 1e200)];
    let g = build_graph(&pts, 1e300).unwrap();
    assert!(g.has_edge(PointId(0), PointId(1)));
    let tight = build_graph(&pts, 1e200).unwrap();
    assert!(!tight.has_edge(PointId(0), PointId(1)));
}
