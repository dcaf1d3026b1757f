//! Deterministic point layouts and frame-by-frame transitions between them.
//!
//! Purpose
//! - Drive repeated complex computations the way an animation does: points
//!   keep their ids while their coordinates move from one layout to the next.
//! - Stay reproducible: every random draw goes through a `ReplayToken`.
//!
//! Model
//! - `Random`: uniform targets inside the canvas box.
//! - `Shells`: targets on concentric circles around the canvas centre; the
//!   shell coordinate grows linearly with the point index, each shell is
//!   rotated by an offset in [-90°, 0°]. A lone shell takes the midpoint, -45°.
//! - A `Transition` linearly interpolates from current positions to targets;
//!   `frames` samples it with cubic in-out easing.

use std::fmt;

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::point::Point2;

/// Errors for layout parameters.
#[derive(Debug)]
pub enum LayoutError {
    InvalidParams { reason: String },
}

impl LayoutError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParams { reason } => write!(f, "invalid layout params: {reason}"),
        }
    }
}

impl std::error::Error for LayoutError {}

/// Canvas and shell configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutCfg {
    pub width: f64,
    pub height: f64,
    /// Radius of a drawn point; keeps random targets inside the canvas.
    pub point_width: f64,
    pub shells_min: usize,
    pub shells_max: usize,
}

impl Default for LayoutCfg {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 600.0,
            point_width: 3.0,
            shells_min: 1,
            shells_max: 9,
        }
    }
}

impl LayoutCfg {
    pub fn validate(&self) -> Result<(), LayoutError> {
        if !(self.width.is_finite() && self.height.is_finite() && self.point_width.is_finite()) {
            return Err(LayoutError::invalid("canvas sizes must be finite"));
        }
        if self.point_width < 0.0 {
            return Err(LayoutError::invalid("point_width must be >= 0"));
        }
        if self.width <= self.point_width || self.height <= self.point_width {
            return Err(LayoutError::invalid("canvas must be larger than point_width"));
        }
        if self.shells_min == 0 {
            return Err(LayoutError::invalid("shells_min must be >= 1"));
        }
        if self.shells_min > self.shells_max {
            return Err(LayoutError::invalid("shells_min <= shells_max required"));
        }
        Ok(())
    }

    /// Radius of the outermost shell.
    #[inline]
    pub fn circle_radius(&self) -> f64 {
        self.width.min(self.height) / 4.0 - 10.0 * self.point_width
    }

    #[inline]
    fn center(&self) -> Vector2<f64> {
        Vector2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    /// SplitMix64-style mix of `(seed, index)` into one RNG seed.
    pub fn to_std_rng(self) -> StdRng {
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }

    #[inline]
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }
}

/// Target layout kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    Random,
    Shells,
}

/// Alternation used between transitions: odd steps coalesce into shells.
#[inline]
pub fn next_layout(step: u64) -> Layout {
    if step % 2 == 1 {
        Layout::Shells
    } else {
        Layout::Random
    }
}

/// `n` points with ids `0..n` at uniform positions inside the canvas.
pub fn initial_points<R: Rng>(n: usize, cfg: &LayoutCfg, rng: &mut R) -> Vec<Point2> {
    random_layout(n, cfg, rng)
        .into_iter()
        .enumerate()
        .map(|(id, p)| Point2::xy(id, p.x, p.y))
        .collect()
}

/// Uniform targets in `[0, width - point_width] × [0, height - point_width]`.
pub fn random_layout<R: Rng>(n: usize, cfg: &LayoutCfg, rng: &mut R) -> Vec<Vector2<f64>> {
    let w = cfg.width - cfg.point_width;
    let h = cfg.height - cfg.point_width;
    (0..n)
        .map(|_| Vector2::new(rng.gen::<f64>() * w, rng.gen::<f64>() * h))
        .collect()
}

/// Uniform shell count in `shells_min..=shells_max`.
pub fn sample_shells<R: Rng>(cfg: &LayoutCfg, rng: &mut R) -> usize {
    let lo = cfg.shells_min.max(1);
    let hi = cfg.shells_max.max(lo);
    rng.gen_range(lo..=hi)
}

/// Targets on `shells` concentric circles around the canvas centre.
pub fn shell_layout(n: usize, shells: usize, cfg: &LayoutCfg) -> Vec<Vector2<f64>> {
    if n == 0 {
        return Vec::new();
    }
    let shells = shells.max(1);
    let s = shells as f64;
    let per_shell = ((n as f64 / s).round() as usize).max(1);
    let spacing = 360.0 / per_shell as f64;
    let r_max = cfg.circle_radius();
    let c = cfg.center();
    (0..n)
        .map(|i| {
            let shell = 1.0 + (i as f64) * s / (n as f64);
            let radius = (r_max * shell / s).round();
            let offset = if shells > 1 {
                -90.0 * (shell - 1.0) / (s - 1.0)
            } else {
                -45.0
            };
            let theta = offset + ((i % per_shell) as f64) * spacing;
            c + polar_to_cartesian(radius, theta.to_radians())
        })
        .collect()
}

#[inline]
pub fn polar_to_cartesian(r: f64, theta: f64) -> Vector2<f64> {
    Vector2::new(r * theta.cos(), r * theta.sin())
}

/// Cubic in-out easing on [0, 1].
pub fn ease_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0) * 2.0;
    if t <= 1.0 {
        t * t * t / 2.0
    } else {
        let u = t - 2.0;
        (u * u * u + 2.0) / 2.0
    }
}

/// Draw targets of the given kind.
pub fn targets<R: Rng>(
    layout: Layout,
    n: usize,
    cfg: &LayoutCfg,
    rng: &mut R,
) -> Vec<Vector2<f64>> {
    match layout {
        Layout::Random => random_layout(n, cfg, rng),
        Layout::Shells => {
            let shells = sample_shells(cfg, rng);
            shell_layout(n, shells, cfg)
        }
    }
}

/// Linear motion of a point set towards fixed targets. Ids never change.
#[derive(Clone, Debug)]
pub struct Transition {
    from: Vec<Point2>,
    to: Vec<Vector2<f64>>,
}

impl Transition {
    pub fn new(from: Vec<Point2>, to: Vec<Vector2<f64>>) -> Result<Self, LayoutError> {
        if from.len() != to.len() {
            return Err(LayoutError::invalid(format!(
                "{} points but {} targets",
                from.len(),
                to.len()
            )));
        }
        Ok(Self { from, to })
    }

    /// Positions at `t` (clamped to [0, 1]).
    pub fn at(&self, t: f64) -> Vec<Point2> {
        let t = t.clamp(0.0, 1.0);
        self.from
            .iter()
            .zip(&self.to)
            .map(|(p, q)| Point2 {
                id: p.id,
                pos: p.pos * (1.0 - t) + q * t,
            })
            .collect()
    }

    /// `count + 1` eased frames from start (t=0) to end (t=1) inclusive.
    pub fn frames(&self, count: usize) -> impl Iterator<Item = Vec<Point2>> + '_ {
        let count = count.max(1);
        (0..=count).map(move |k| self.at(ease_cubic(k as f64 / count as f64)))
    }
}
