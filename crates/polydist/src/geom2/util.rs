use super::types::{Line, Nearest, Point, Polygon};

/// Perpendicular distance from `p` to `line`: `|a·x0 + b·y0 - c| / sqrt(a² + b²)`.
///
/// Total for every constructed `Line` (the zero normal is rejected by
/// `Line::new`). Result is finite and `>= 0` for finite `p`.
#[inline]
pub fn distance(p: Point, line: &Line) -> f64 {
    line.distance(p)
}

/// Minimum distance over all `points`; `+inf` for an empty slice.
pub fn brute_force_min_distance(points: &[Point], line: &Line) -> f64 {
    points
        .iter()
        .map(|&p| distance(p, line))
        .fold(f64::INFINITY, f64::min)
}

/// Scan every vertex. First index wins on ties.
pub fn brute_force_nearest(poly: &Polygon, line: &Line) -> Nearest {
    let verts = poly.vertices();
    let mut best = Nearest {
        index: 0,
        point: verts[0],
        distance: distance(verts[0], line),
    };
    for (index, &p) in verts.iter().enumerate().skip(1) {
        let d = distance(p, line);
        if d < best.distance {
            best = Nearest {
                index,
                point: p,
                distance: d,
            };
        }
    }
    best
}
