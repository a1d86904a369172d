use super::*;
use crate::geom2::rand::{
    draw_convex_polygon, line_clear_of, Orientation, RadialCfg, ReplayToken, VertexCount,
};
use crate::geom2::{brute_force_min_distance, brute_force_nearest, distance};
use proptest::prelude::*;

const DESCEND: SearchCfg = SearchCfg {
    refine: Refine::Descend,
};

fn square() -> Polygon {
    Polygon::from_xy(&[[0.0, 0.0], [0.0, 10.0], [10.0, 10.0], [10.0, 0.0]]).unwrap()
}

/// Regular hexagon starting at (1, 0), counterclockwise.
fn hexagon() -> Polygon {
    let s = 3f64.sqrt() / 2.0;
    Polygon::from_xy(&[
        [1.0, 0.0],
        [0.5, s],
        [-0.5, s],
        [-1.0, 0.0],
        [-0.5, -s],
        [0.5, -s],
    ])
    .unwrap()
}

fn random_case(n_max: usize, seed: u64, index: u64, jitter: f64) -> (Polygon, Line) {
    let cfg = RadialCfg {
        vertex_count: VertexCount::Uniform { min: 1, max: n_max },
        radial_jitter: jitter,
        orientation: Orientation::Random,
        ..RadialCfg::default()
    };
    let tok = ReplayToken { seed, index };
    let poly = draw_convex_polygon(cfg, tok).unwrap();
    let angle = (index as f64) * 0.7311;
    let gap = 0.25 + (index % 7) as f64;
    let line = line_clear_of(&poly, angle, gap).unwrap();
    (poly, line)
}

#[test]
fn square_with_horizontal_line_above() {
    let line = Line::new(0.0, 1.0, 20.0).unwrap();
    assert!((find_minimum_distance(&square(), &line) - 10.0).abs() < 1e-12);
}

#[test]
fn square_with_vertical_line_left() {
    let line = Line::new(1.0, 0.0, -5.0).unwrap();
    assert!((find_minimum_distance(&square(), &line) - 5.0).abs() < 1e-12);
}

#[test]
fn tiny_and_huge_line_coefficients() {
    // x = 0 written at very different scales; the nearest vertex is 3 away.
    let triangle = Polygon::from_xy(&[[3.0, 0.0], [6.0, 2.0], [6.0, -2.0]]).unwrap();
    for scale in [1e-200, 1.0, 1e200] {
        let line = Line::new(scale, 0.0, 0.0).unwrap();
        for cfg in [SearchCfg::default(), DESCEND] {
            let best = find_nearest_vertex_with_cfg(&triangle, &line, cfg);
            assert_eq!(best.index, 0, "scale {scale}");
            assert_eq!(best.distance, 3.0, "scale {scale}");
        }
    }
}

#[test]
fn single_vertex_returns_its_distance() {
    let poly = Polygon::from_xy(&[[3.0, -4.0]]).unwrap();
    let line = Line::new(1.0, 2.0, 7.0).unwrap();
    let expected = distance(poly.vertex(0), &line);
    assert_eq!(find_minimum_distance(&poly, &line), expected);
    let (best, trace) = find_nearest_vertex_traced(&poly, &line, SearchCfg::default());
    assert_eq!(best.index, 0);
    assert!(trace.visits.iter().all(|v| v.index == 0));
}

#[test]
fn degenerate_line_rejected_regardless_of_polygon() {
    let polys: [&[[f64; 2]]; 3] = [&[], &[[1.0, 1.0]], &[[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]]];
    for xy in polys {
        assert!(matches!(
            min_distance_xy(xy, [0.0, 0.0, 3.0]),
            Err(GeomError::InvalidLine { .. })
        ));
    }
    assert_eq!(
        min_distance_xy(&[], [0.0, 1.0, 3.0]),
        Err(GeomError::EmptyPolygon)
    );
    assert_eq!(
        min_distance_xy(&[[0.0, 0.0], [0.0, 10.0], [10.0, 10.0], [10.0, 0.0]], [0.0, 1.0, 20.0]),
        Ok(10.0)
    );
}

#[test]
fn ties_move_right() {
    // At vertex 0 and then at vertex 3 both neighbours are equally far from x = -5.
    let line = Line::new(1.0, 0.0, -5.0).unwrap();
    let (best, trace) = find_nearest_vertex_traced(&hexagon(), &line, SearchCfg::default());
    assert_eq!(trace.indices(Phase::Start), vec![0]);
    assert_eq!(trace.indices(Phase::Jump), vec![3, 4]);
    assert_eq!(trace.indices(Phase::Window), vec![1, 2, 3, 4, 5]);
    assert_eq!(best.index, 3);
    assert!((best.distance - 4.0).abs() < 1e-12);

    // Repeated runs take the same path.
    for _ in 0..10 {
        let (_, again) = find_nearest_vertex_traced(&hexagon(), &line, SearchCfg::default());
        assert_eq!(again, trace);
    }
}

#[test]
fn fixed_window_can_miss_and_descend_recovers() {
    // Vertex 0 is the minimum for x = 5, but the tie at vertex 0 sends the
    // first jump to the far side and the window 1..=5 never sees vertex 0.
    let line = Line::new(1.0, 0.0, 5.0).unwrap();
    let window = find_nearest_vertex(&hexagon(), &line);
    assert_eq!(window.index, 1);
    assert!((window.distance - 4.5).abs() < 1e-12);

    let (exact, trace) = find_nearest_vertex_traced(&hexagon(), &line, DESCEND);
    assert_eq!(exact.index, 0);
    assert!((exact.distance - 4.0).abs() < 1e-12);
    assert_eq!(trace.indices(Phase::Descend), vec![0]);
}

#[test]
fn trace_layout_and_no_effect_on_result() {
    for index in 0..200 {
        let (poly, line) = random_case(60, 11, index, 0.2);
        for cfg in [SearchCfg::default(), DESCEND] {
            let plain = find_nearest_vertex_with_cfg(&poly, &line, cfg);
            let (traced, trace) = find_nearest_vertex_traced(&poly, &line, cfg);
            assert_eq!(plain, traced);

            let n = poly.len();
            let jumps = usize::BITS - n.div_ceil(2).leading_zeros();
            assert_eq!(trace.visits[0].phase, Phase::Start);
            assert_eq!(trace.visits[0].index, 0);
            assert_eq!(trace.indices(Phase::Jump).len(), jumps as usize);
            assert_eq!(trace.indices(Phase::Window).len(), n.min(5));
            assert_eq!(trace.len(), trace.points().count());
            for v in &trace.visits {
                assert_eq!(v.point, poly.vertices()[v.index]);
            }
        }
    }
}

#[test]
fn small_polygons_are_exact_with_fixed_window() {
    for index in 0..500 {
        let (poly, line) = random_case(5, 5, index, 0.0);
        let fast = find_minimum_distance(&poly, &line);
        assert_eq!(fast, brute_force_min_distance(poly.vertices(), &line));
    }
}

#[test]
fn descend_matches_brute_force_up_to_twenty_vertices() {
    for n in 1..=20 {
        for index in 0..300 {
            let cfg = RadialCfg {
                vertex_count: VertexCount::Fixed(n),
                radial_jitter: if index % 2 == 0 { 0.0 } else { 0.3 },
                ..RadialCfg::default()
            };
            let poly = draw_convex_polygon(cfg, ReplayToken { seed: n as u64, index }).unwrap();
            let line = line_clear_of(&poly, index as f64 * 0.377, 0.5).unwrap();
            let oracle = brute_force_nearest(&poly, &line);
            let fast = find_nearest_vertex_with_cfg(&poly, &line, DESCEND);
            assert_eq!(fast.distance, oracle.distance, "n={n} index={index}");
        }
    }
}

#[test]
fn fixed_window_never_undershoots() {
    for index in 0..500 {
        let (poly, line) = random_case(40, 8, index, 0.3);
        let fast = find_minimum_distance(&poly, &line);
        assert!(fast >= 0.0);
        assert!(fast >= brute_force_min_distance(poly.vertices(), &line));
    }
}

#[test]
fn orientation_does_not_matter_for_descend() {
    for index in 0..100 {
        let (poly, line) = random_case(30, 21, index, 0.1);
        let a = find_nearest_vertex_with_cfg(&poly, &line, DESCEND).distance;
        let b = find_nearest_vertex_with_cfg(&poly.reversed(), &line, DESCEND).distance;
        assert_eq!(a, b);
    }
}

proptest! {
    #[test]
    fn descend_is_exact_on_random_convex_polygons(
        seed in any::<u64>(),
        index in 0u64..1_000,
        n in 1usize..300,
        angle in 0.0f64..std::f64::consts::TAU,
        gap in 1e-3f64..1e3,
    ) {
        let cfg = RadialCfg {
            vertex_count: VertexCount::Fixed(n),
            ..RadialCfg::default()
        };
        let poly = draw_convex_polygon(cfg, ReplayToken { seed, index }).unwrap();
        let line = line_clear_of(&poly, angle, gap).unwrap();
        let fast = find_nearest_vertex_with_cfg(&poly, &line, DESCEND);
        let oracle = brute_force_nearest(&poly, &line);
        prop_assert_eq!(fast.distance, oracle.distance);
        prop_assert!(fast.distance >= 0.0);
    }
}
