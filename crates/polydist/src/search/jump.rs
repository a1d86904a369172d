//! Jump phase and refinement.

use crate::geom2::{Line, Nearest, Polygon};

use super::types::{Phase, Refine, SearchCfg, SearchTrace};

/// Vertices scanned behind the final jump index.
const WINDOW_BEHIND: isize = 3;
/// Width of the refinement window (`index-3 ..= index+1`).
const WINDOW_LEN: usize = 5;

/// Runner carrying the inputs and the optional trace sink.
pub(super) struct JumpRunner<'a> {
    poly: &'a Polygon,
    line: &'a Line,
    cfg: SearchCfg,
    trace: Option<&'a mut SearchTrace>,
}

impl<'a> JumpRunner<'a> {
    pub(super) fn new(
        poly: &'a Polygon,
        line: &'a Line,
        cfg: SearchCfg,
        trace: Option<&'a mut SearchTrace>,
    ) -> Self {
        Self {
            poly,
            line,
            cfg,
            trace,
        }
    }

    pub(super) fn run(mut self) -> Nearest {
        let index = self.jump();
        let best = self.scan_window(index);
        match self.cfg.refine {
            Refine::Window => best,
            Refine::Descend => self.descend(best),
        }
    }

    #[inline]
    fn dist(&self, i: isize) -> f64 {
        self.line.distance(self.poly.vertex(i))
    }

    #[inline]
    fn record(&mut self, phase: Phase, index: usize) {
        if let Some(trace) = self.trace.as_deref_mut() {
            trace.push(phase, index, self.poly.vertices()[index]);
        }
    }

    /// Coarse phase: returns the index reached once `step` hits 0.
    fn jump(&mut self) -> usize {
        let n = self.poly.len();
        let mut index = 0usize;
        let mut step = n.div_ceil(2);
        self.record(Phase::Start, index);
        while step > 0 {
            let i = index as isize;
            let right = self.dist(i + 1);
            let left = self.dist(i - 1);
            // Ties move right.
            index = if left < right {
                self.poly.wrap(i - step as isize)
            } else {
                self.poly.wrap(i + step as isize)
            };
            self.record(Phase::Jump, index);
            step /= 2;
        }
        index
    }

    /// Best vertex of `index-3 ..= index+1`; for `n < 5` the window shrinks to
    /// `n` consecutive (hence distinct) vertices. First hit wins on ties.
    fn scan_window(&mut self, index: usize) -> Nearest {
        let len = WINDOW_LEN.min(self.poly.len());
        let first = index as isize - WINDOW_BEHIND;
        let mut best: Option<Nearest> = None;
        for k in 0..len as isize {
            let j = self.poly.wrap(first + k);
            self.record(Phase::Window, j);
            let d = self.dist(j as isize);
            if best.map_or(true, |b| d < b.distance) {
                best = Some(Nearest {
                    index: j,
                    point: self.poly.vertices()[j],
                    distance: d,
                });
            }
        }
        // len >= 1 since polygons are non-empty
        best.unwrap_or_else(|| self.at(index))
    }

    /// Walk towards a strictly closer neighbour until there is none.
    /// Bounded by `n` moves so non-convex input cannot loop forever.
    fn descend(&mut self, mut best: Nearest) -> Nearest {
        for _ in 0..self.poly.len() {
            let i = best.index as isize;
            let right = self.dist(i + 1);
            let left = self.dist(i - 1);
            let next = if left < right { i - 1 } else { i + 1 };
            let d = left.min(right);
            if d >= best.distance {
                break;
            }
            best = self.at(self.poly.wrap(next));
            self.record(Phase::Descend, best.index);
        }
        best
    }

    fn at(&self, index: usize) -> Nearest {
        let point = self.poly.vertices()[index];
        Nearest {
            index,
            point,
            distance: self.line.distance(point),
        }
    }
}
