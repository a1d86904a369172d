//! Search configuration and the diagnostic trace.

use crate::geom2::Point;

/// How the coarse jump result is refined.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Refine {
    /// Best of the fixed 5-vertex window `index-3 ..= index+1`.
    #[default]
    Window,
    /// Window, then walk towards strictly closer neighbours until none is left.
    Descend,
}

/// Search configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchCfg {
    pub refine: Refine,
}

/// Which part of the search produced a visit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Start,
    Jump,
    Window,
    Descend,
}

/// One visited vertex.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Visit {
    pub phase: Phase,
    pub index: usize,
    pub point: Point,
}

/// Ordered record of a single search: start vertex, one entry per jump, the
/// refinement window, then any descent steps. Has no effect on the result.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchTrace {
    pub visits: Vec<Visit>,
}

impl SearchTrace {
    #[inline]
    pub(crate) fn push(&mut self, phase: Phase, index: usize, point: Point) {
        self.visits.push(Visit {
            phase,
            index,
            point,
        });
    }

    /// Visited points in order (what a plot draws).
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.visits.iter().map(|v| v.point)
    }

    /// Vertex indices of one phase, in visit order.
    pub fn indices(&self, phase: Phase) -> Vec<usize> {
        self.visits
            .iter()
            .filter(|v| v.phase == phase)
            .map(|v| v.index)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.visits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visits.is_empty()
    }
}
