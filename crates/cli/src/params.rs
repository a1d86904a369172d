//! Runtime parameters loaded from YAML.
//!
//! Expected document (JSON works too, YAML being a superset):
//!
//! ```yaml
//! polygon: [[0, 0], [0, 10], [10, 10], [10, 0]]
//! line: [0, 1, 20]   # a·x + b·y = c
//! ```
//!
//! Extra keys are ignored.

use polydist::{GeomError, Line, Polygon};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Document shape before geometric validation.
#[derive(Clone, Debug, Deserialize)]
struct RawParams {
    polygon: Vec<[f64; 2]>,
    line: [f64; 3],
}

/// Validated search input.
#[derive(Clone, Debug)]
pub struct Params {
    pub polygon: Polygon,
    pub line: Line,
}

#[derive(Debug, Error)]
pub enum ParamsError {
    #[error("reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Missing keys or wrongly shaped values.
    #[error("malformed input: {0}")]
    Malformed(#[from] serde_yaml::Error),
    #[error("invalid geometry: {0}")]
    Geometry(#[from] GeomError),
}

impl Params {
    pub fn load(path: &Path) -> Result<Self, ParamsError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ParamsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&contents)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, ParamsError> {
        let raw: RawParams = serde_yaml::from_str(yaml)?;
        // Line first: a degenerate line is reported even for an empty polygon.
        let line = Line::from_coeffs(raw.line)?;
        let polygon = Polygon::from_xy(&raw.polygon)?;
        Ok(Self { polygon, line })
    }
}
