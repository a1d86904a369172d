use thiserror::Error;

/// Rejected geometric input.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GeomError {
    /// `(a, b) = (0, 0)` or a non-finite coefficient: the distance is undefined.
    #[error("invalid line {a}·x + {b}·y = {c}: need finite coefficients with (a, b) != (0, 0)")]
    InvalidLine { a: f64, b: f64, c: f64 },
    /// The search has no defined result on zero vertices.
    #[error("polygon has no vertices")]
    EmptyPolygon,
    #[error("vertex {index} has a non-finite coordinate")]
    NonFiniteVertex { index: usize },
}
