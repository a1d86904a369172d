//! Basic 2D types: `Line`, `Polygon`, and the `Nearest` result.
//!
//! - `Line`: `a·x + b·y = c`, normal `(a, b)` nonzero and finite.
//! - `Polygon`: ordered vertices, cyclic indexing, at least one vertex.
//! - `Nearest`: a vertex index with its point and distance to the line.

use nalgebra::Vector2;

use super::error::GeomError;

/// A point in the plane.
pub type Point = Vector2<f64>;

/// Implicit line `a·x + b·y = c`.
///
/// Only constructible through `Line::new`, so `(a, b) != (0, 0)` holds for
/// every value of this type. Besides the given coefficients it keeps a copy
/// scaled by a power of two so that `max(|a|, |b|)` lies in `[1, 2)`: the
/// scaling is exact, so points on the line still give a zero residual, and
/// neither the residual nor the norm can under- or overflow for tiny or huge
/// coefficients.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    coeffs: [f64; 3],
    n: Vector2<f64>,
    c: f64,
    norm: f64,
}

/// `2^e` with `2^e <= m < 2^(e+1)`; `f64::MIN_POSITIVE` for subnormal `m`.
/// Pre: `m` finite and positive.
#[inline]
fn pow2_floor(m: f64) -> f64 {
    let biased = (m.to_bits() >> 52) & 0x7ff;
    if biased == 0 {
        f64::MIN_POSITIVE
    } else {
        f64::from_bits(biased << 52)
    }
}

impl Line {
    /// Rejects non-finite coefficients, `(a, b) = (0, 0)`, and lines whose
    /// offset from the origin is not representable (e.g. `(1e-300, 0, 1e300)`).
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self, GeomError> {
        let invalid = GeomError::InvalidLine { a, b, c };
        if !(a.is_finite() && b.is_finite() && c.is_finite()) || (a == 0.0 && b == 0.0) {
            return Err(invalid);
        }
        let s = pow2_floor(a.abs().max(b.abs()));
        let n = Vector2::new(a / s, b / s);
        let c_s = c / s;
        let norm = n.x.hypot(n.y);
        if !(c_s.is_finite() && (c_s / norm).is_finite()) {
            return Err(invalid);
        }
        Ok(Self {
            coeffs: [a, b, c],
            n,
            c: c_s,
            norm,
        })
    }

    /// Build from `[a, b, c]`.
    #[inline]
    pub fn from_coeffs(coeffs: [f64; 3]) -> Result<Self, GeomError> {
        Self::new(coeffs[0], coeffs[1], coeffs[2])
    }

    #[inline]
    pub fn a(&self) -> f64 {
        self.coeffs[0]
    }
    #[inline]
    pub fn b(&self) -> f64 {
        self.coeffs[1]
    }
    #[inline]
    pub fn c(&self) -> f64 {
        self.coeffs[2]
    }
    /// Coefficients as given to `new`.
    #[inline]
    pub fn coeffs(&self) -> [f64; 3] {
        self.coeffs
    }
    /// Unit normal `(a, b) / ‖(a, b)‖`.
    #[inline]
    pub fn normal(&self) -> Vector2<f64> {
        self.n / self.norm
    }

    /// Signed distance, positive on the side `(a, b)` points to.
    #[inline]
    pub fn signed_distance(&self, p: Point) -> f64 {
        (self.n.dot(&p) - self.c) / self.norm
    }

    /// Perpendicular distance `|a·x + b·y - c| / ‖(a, b)‖`.
    #[inline]
    pub fn distance(&self, p: Point) -> f64 {
        self.signed_distance(p).abs()
    }
}

/// Convex polygon as an ordered, cyclic vertex list.
///
/// Pre (not checked): convex, non-self-intersecting, vertices in consistent
/// clockwise or counterclockwise order.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    verts: Vec<Point>,
}

impl Polygon {
    pub fn new(verts: Vec<Point>) -> Result<Self, GeomError> {
        if verts.is_empty() {
            return Err(GeomError::EmptyPolygon);
        }
        if let Some(index) = verts
            .iter()
            .position(|p| !(p.x.is_finite() && p.y.is_finite()))
        {
            return Err(GeomError::NonFiniteVertex { index });
        }
        Ok(Self { verts })
    }

    /// Build from `[x, y]` pairs.
    pub fn from_xy(xy: &[[f64; 2]]) -> Result<Self, GeomError> {
        Self::new(xy.iter().map(|&[x, y]| Point::new(x, y)).collect())
    }

    /// Number of vertices (always `>= 1`).
    #[inline]
    pub fn len(&self) -> usize {
        self.verts.len()
    }

    /// Always false for a constructed polygon.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.verts.is_empty()
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.verts
    }

    /// Reduce any signed index into `0..len()`.
    #[inline]
    pub fn wrap(&self, i: isize) -> usize {
        i.rem_euclid(self.verts.len() as isize) as usize
    }

    /// Vertex at a cyclic index: `vertex(-1)` is the last vertex.
    #[inline]
    pub fn vertex(&self, i: isize) -> Point {
        self.verts[self.wrap(i)]
    }

    /// Same polygon traversed in the opposite direction.
    pub fn reversed(&self) -> Self {
        let mut verts = self.verts.clone();
        verts.reverse();
        Self { verts }
    }
}

/// Vertex closest to a line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Nearest {
    pub index: usize,
    pub point: Point,
    pub distance: f64,
}
