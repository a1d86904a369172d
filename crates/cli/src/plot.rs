//! Plot hand-off: polygon, line and search trace as plain JSON.
//!
//! Drawing is left to an external tool; this only serializes what a plot needs.

use anyhow::{Context, Result};
use polydist::{Line, Nearest, Phase, Polygon, SearchTrace};
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Serialize)]
pub struct PlotData {
    pub polygon: Vec<[f64; 2]>,
    /// `[a, b, c]` for `a·x + b·y = c`.
    pub line: [f64; 3],
    /// Visits in order; a plot labels them 1, 2, ...
    pub trace: Vec<TracePoint>,
    pub nearest: NearestPoint,
}

#[derive(Debug, Serialize)]
pub struct TracePoint {
    pub phase: &'static str,
    pub index: usize,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Serialize)]
pub struct NearestPoint {
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub distance: f64,
}

fn phase_name(phase: Phase) -> &'static str {
    match phase {
        Phase::Start => "start",
        Phase::Jump => "jump",
        Phase::Window => "window",
        Phase::Descend => "descend",
    }
}

impl PlotData {
    pub fn new(polygon: &Polygon, line: &Line, best: &Nearest, trace: &SearchTrace) -> Self {
        Self {
            polygon: polygon.vertices().iter().map(|p| [p.x, p.y]).collect(),
            line: line.coeffs(),
            trace: trace
                .visits
                .iter()
                .map(|v| TracePoint {
                    phase: phase_name(v.phase),
                    index: v.index,
                    x: v.point.x,
                    y: v.point.y,
                })
                .collect(),
            nearest: NearestPoint {
                index: best.index,
                x: best.point.x,
                y: best.point.y,
                distance: best.distance,
            },
        }
    }

    pub fn write(&self, out: &Path) -> Result<()> {
        if let Some(parent) = out.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("creating plot dir {}", parent.display()))?;
            }
        }
        std::fs::write(out, serde_json::to_vec_pretty(self)?)
            .with_context(|| format!("writing {}", out.display()))
    }
}
