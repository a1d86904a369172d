//! Random convex polygons and clear lines (radial jitter + replay tokens).
//!
//! Purpose
//! - Reproducible fixtures for tests and benchmarks of the nearest-vertex
//!   search: convex vertex lists in either orientation, with a random starting
//!   vertex, and lines that stay clear of them.
//!
//! Model
//! - Start from `n` equally spaced angles on [0, 2π), add bounded angular and
//!   radial jitter, take the convex hull, rotate the start vertex, and orient.
//! - Radial jitter can push points inside the hull, so the drawn polygon may
//!   have fewer than `n` vertices. With `radial_jitter = 0` every point is kept.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{GeomError, Line, Point, Polygon};

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(1),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(1);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Traversal direction of the drawn vertex list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Ccw,
    Cw,
    /// Pick one per draw.
    Random,
}

/// Radial-jitter sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RadialCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radial jitter (relative amplitude). Radii = `base_radius * (1 + u)`,
    /// with `u∈[-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    pub base_radius: f64,
    pub center: Point,
    pub orientation: Orientation,
}
impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(12),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.0,
            base_radius: 1.0,
            center: Vector2::zeros(),
            orientation: Orientation::Random,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    #[inline]
    pub(crate) fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
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
}

/// Draw a random convex polygon.
pub fn draw_convex_polygon(cfg: RadialCfg, tok: ReplayToken) -> Result<Polygon, GeomError> {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.clamp(0.0, 0.99);
    let r0 = cfg.base_radius.max(1e-9);
    let delta = 2.0 * std::f64::consts::PI / (n as f64);
    let phase = rng.gen::<f64>() * 2.0 * std::f64::consts::PI;
    let mut angles: Vec<f64> = (0..n)
        .map(|k| {
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            phase + (k as f64) * delta + jitter
        })
        .collect();
    angles.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let pts: Vec<Point> = angles
        .into_iter()
        .map(|th| {
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            let r = (1.0 + u) * r0;
            cfg.center + Vector2::new(th.cos() * r, th.sin() * r)
        })
        .collect();
    let mut verts = if pts.len() < 3 {
        pts
    } else {
        convex_hull_ccw(&pts)
    };
    let start = rng.gen_range(0..verts.len().max(1));
    verts.rotate_left(start);
    let cw = match cfg.orientation {
        Orientation::Ccw => false,
        Orientation::Cw => true,
        Orientation::Random => rng.gen::<bool>(),
    };
    if cw {
        verts.reverse();
    }
    Polygon::new(verts)
}

/// Line with unit normal at `angle` lying `gap` beyond the polygon's support
/// in that direction. For `gap > 0` the line does not touch the polygon and
/// the nearest vertex lies at distance exactly `gap`.
pub fn line_clear_of(poly: &Polygon, angle: f64, gap: f64) -> Result<Line, GeomError> {
    let u = Vector2::new(angle.cos(), angle.sin());
    let support = poly
        .vertices()
        .iter()
        .map(|p| u.dot(p))
        .fold(f64::NEG_INFINITY, f64::max);
    Line::new(u.x, u.y, support + gap)
}

/// Andrew's monotone chain (returns hull in CCW order, collinear points dropped).
fn convex_hull_ccw(points: &[Point]) -> Vec<Point> {
    let mut pts: Vec<_> = points.to_vec();
    pts.sort_by(|a, b| {
        match a.x.partial_cmp(&b.x).unwrap_or(std::cmp::Ordering::Equal) {
            std::cmp::Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(std::cmp::Ordering::Equal),
            o => o,
        }
    });
    pts.dedup_by(|a, b| (*a - *b).norm() < 1e-12);
    if pts.len() < 3 {
        return pts;
    }
    let mut lower: Vec<Point> = Vec::with_capacity(pts.len());
    for p in &pts {
        while lower.len() >= 2 && cross(lower[lower.len() - 2], lower[lower.len() - 1], *p) <= 0.0 {
            lower.pop();
        }
        lower.push(*p);
    }
    let mut upper: Vec<Point> = Vec::with_capacity(pts.len());
    for p in pts.iter().rev() {
        while upper.len() >= 2 && cross(upper[upper.len() - 2], upper[upper.len() - 1], *p) <= 0.0 {
            upper.pop();
        }
        upper.push(*p);
    }
    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}

#[inline]
fn cross(a: Point, b: Point, c: Point) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}
