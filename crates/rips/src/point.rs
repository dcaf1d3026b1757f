//! Points of the cloud: an identifier from the fixed vertex order plus coordinates.

use nalgebra::{SVector, Vector2};

/// Point identifier. `Ord` on this type is the one total order used by a computation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PointId(pub usize);

/// A point in `R^D`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point<const D: usize> {
    pub id: PointId,
    pub pos: SVector<f64, D>,
}

pub type Point2 = Point<2>;

impl<const D: usize> Point<D> {
    #[inline]
    pub fn new(id: usize, pos: SVector<f64, D>) -> Self {
        Self {
            id: PointId(id),
            pos,
        }
    }

    /// Euclidean distance, scaled by the largest component so that squaring
    /// cannot overflow for finite coordinates.
    #[inline]
    pub fn dist(&self, other: &Self) -> f64 {
        let d = self.pos - other.pos;
        let scale = d.amax();
        if scale == 0.0 || !scale.is_finite() {
            return scale;
        }
        (d / scale).norm() * scale
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.pos.iter().all(|c| c.is_finite())
    }
}

impl Point2 {
    #[inline]
    pub fn xy(id: usize, x: f64, y: f64) -> Self {
        Self::new(id, Vector2::new(x, y))
    }
}
