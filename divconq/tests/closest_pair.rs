use divconq::{brute_force_closest, closest_pair, Error, InvalidInput, Point};
use proptest::prelude::*;

fn pts(raw: &[(f64, f64)]) -> Vec<Point> {
    raw.iter().map(|&p| Point::from(p)).collect()
}

fn lcg(seed: &mut u64) -> f64 { *seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407); ((*seed >> 11) as f64) / ((1u64 << 53) as f64) }

fn random_points(n: usize, seed: u64, max_coord: f64) -> Vec<Point> {
    let mut s = seed;
    (0..n).map(|_| Point::new(lcg(&mut s) * max_coord, lcg(&mut s) * max_coord)).collect()
}

// Number of pairs realizing the minimum distance.
fn minimal_pair_count(points: &[Point], min: f64) -> usize {
    let mut count = 0;
    for i in 0..points.len() {
        for j in (i + 1)..points.len() {
            let dx = points[i].x - points[j].x; let dy = points[i].y - points[j].y;
            if (dx*dx + dy*dy).sqrt() == min { count += 1; }
        }
    }
    count
}

#[test]
fn triangle_scenario() {
    let p = pts(&[(0.0, 0.0), (3.0, 4.0), (1.0, 1.0)]);
    let pair = closest_pair(&p).unwrap();
    assert!((pair.distance() - 1.4142).abs() < 1e-4);
    assert_eq!(pair.points(), (Point::new(0.0, 0.0), Point::new(1.0, 1.0)));
}

#[test]
fn coincident_points_are_distance_zero() {
    let p = pts(&[(0.0, 0.0), (0.0, 0.0)]);
    let pair = closest_pair(&p).unwrap();
    assert_eq!(pair.distance(), 0.0);
    assert_eq!(pair.first(), Point::new(0.0, 0.0));
    assert_eq!(pair.second(), Point::new(0.0, 0.0));
}

#[test]
fn duplicates_among_many_points_win() {
    let mut p = random_points(500, 7, 10_000.0);
    p.push(p[123]);
    let pair = closest_pair(&p).unwrap();
    assert_eq!(pair.distance(), 0.0);
    assert_eq!(pair.first(), p[123]);
}

#[test]
fn exactly_two_points() {
    let p = pts(&[(-2.0, 1.0), (4.0, 9.0)]);
    let pair = closest_pair(&p).unwrap();
    assert_eq!(pair.distance(), 10.0);
    assert_eq!(pair.points(), (p[0], p[1]));
}

#[test]
fn three_collinear_points_pick_adjacent_pair() {
    let p = pts(&[(0.0, 0.0), (10.0, 0.0), (3.0, 0.0)]);
    let pair = closest_pair(&p).unwrap();
    assert_eq!(pair.distance(), 3.0);
    assert!(pair.same_points(&brute_force_closest(&p).unwrap()));
    assert_eq!(pair.points(), (Point::new(0.0, 0.0), Point::new(3.0, 0.0)));
}

#[test]
fn collinear_vertical_line() {
    let p: Vec<Point> = (0..64).map(|i| Point::new(5.0, (i * i) as f64)).collect();
    let pair = closest_pair(&p).unwrap();
    assert_eq!(pair.distance(), 1.0);
    assert_eq!(pair.points(), (Point::new(5.0, 0.0), Point::new(5.0, 1.0)));
}

#[test]
fn closest_pair_across_the_split_line() {
    // Far-apart clusters on each side; the closest pair straddles x = 50.
    let p = pts(&[
        (0.0, 0.0), (0.0, 40.0), (10.0, 80.0), (49.5, 20.0),
        (50.5, 20.5), (90.0, 0.0), (100.0, 40.0), (90.0, 80.0),
    ]);
    let pair = closest_pair(&p).unwrap();
    assert!(pair.same_points(&brute_force_closest(&p).unwrap()));
    assert_eq!(pair.points(), (Point::new(49.5, 20.0), Point::new(50.5, 20.5)));
}

#[test]
fn equal_halves_keep_the_left_pair() {
    // Both halves hold a pair at distance 1; the left one must win.
    let p = pts(&[(0.0, 0.0), (0.0, 1.0), (0.0, 50.0), (100.0, 0.0), (100.0, 1.0), (100.0, 50.0)]);
    let pair = closest_pair(&p).unwrap();
    assert_eq!(pair.distance(), 1.0);
    assert_eq!(pair.points(), (Point::new(0.0, 0.0), Point::new(0.0, 1.0)));
}

#[test]
fn strip_does_not_replace_an_equal_pair() {
    // (1,50)-(4,54) straddles x = 4 at distance 5, tying the left pair (0,0)-(0,5).
    // Listed first, it is what the input-order brute force returns.
    let p = pts(&[(1.0, 50.0), (4.0, 54.0), (0.0, 0.0), (0.0, 5.0), (20.0, 0.0), (20.0, 100.0)]);
    let slow = brute_force_closest(&p).unwrap();
    assert_eq!(slow.points(), (Point::new(1.0, 50.0), Point::new(4.0, 54.0)));

    let pair = closest_pair(&p).unwrap();
    assert_eq!(pair.distance(), 5.0);
    assert_eq!(pair.points(), (Point::new(0.0, 0.0), Point::new(0.0, 5.0)));
}

#[test]
fn too_few_points_is_invalid_input() {
    assert_eq!(closest_pair(&[]), Err(Error::InvalidInput(InvalidInput::TooFewPoints { got: 0 })));
    assert_eq!(
        closest_pair(&pts(&[(1.0, 1.0)])),
        Err(Error::InvalidInput(InvalidInput::TooFewPoints { got: 1 }))
    );
    assert!(brute_force_closest(&pts(&[(1.0, 1.0)])).is_err());
}

#[test]
fn non_finite_coordinates_are_rejected() {
    let p = pts(&[(0.0, 0.0), (1.0, f64::NAN), (2.0, 2.0)]);
    assert_eq!(closest_pair(&p), Err(Error::InvalidInput(InvalidInput::NonFiniteCoordinate { index: 1 })));
    let p = pts(&[(f64::INFINITY, 0.0), (1.0, 1.0)]);
    assert_eq!(closest_pair(&p), Err(Error::InvalidInput(InvalidInput::NonFiniteCoordinate { index: 0 })));
}

#[test]
fn input_is_left_untouched() {
    let p = random_points(300, 42, 100.0);
    let before = p.clone();
    let _ = closest_pair(&p).unwrap();
    assert_eq!(p, before);
}

#[test]
fn large_random_sets_match_brute_force() {
    for (n, seed) in [(1_000usize, 1u64), (2_000, 2), (3_000, 3)] {
        let p = random_points(n, seed, 10_000.0);
        let fast = closest_pair(&p).unwrap();
        let slow = brute_force_closest(&p).unwrap();
        assert_eq!(fast.distance(), slow.distance(), "n={}", n);
    }
}

#[test]
fn many_shared_x_coordinates() {
    // Three columns; every split line is shared by many points.
    let mut p = Vec::new();
    for i in 0..90 { p.push(Point::new((i % 3) as f64, (i * 7 % 101) as f64 * 1.5)); }
    let fast = closest_pair(&p).unwrap();
    let slow = brute_force_closest(&p).unwrap();
    assert_eq!(fast.distance(), slow.distance());
}

#[test]
fn result_serializes_with_both_points() {
    let pair = closest_pair(&pts(&[(0.0, 0.0), (3.0, 4.0)])).unwrap();
    let v = serde_json::to_value(pair).unwrap();
    assert_eq!(v["distance"], 5.0);
    assert_eq!(v["p1"]["x"], 0.0);
    assert_eq!(v["p2"]["y"], 4.0);
}

fn points_strategy() -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((-1.0e4f64..1.0e4, -1.0e4f64..1.0e4), 2..=200)
        .prop_map(|raw| raw.into_iter().map(Point::from).collect())
}

fn grid_points_strategy() -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((0i32..8, 0i32..60), 2..=120)
        .prop_map(|raw| raw.into_iter().map(|(x, y)| Point::new(x as f64, y as f64)).collect())
}

proptest! {
    #[test]
    fn agrees_with_brute_force(p in points_strategy()) {
        let fast = closest_pair(&p).unwrap();
        let slow = brute_force_closest(&p).unwrap();
        prop_assert_eq!(fast.distance(), slow.distance());
    }

    #[test]
    fn agrees_with_brute_force_on_grids(p in grid_points_strategy()) {
        let fast = closest_pair(&p).unwrap();
        let slow = brute_force_closest(&p).unwrap();
        prop_assert_eq!(fast.distance(), slow.distance());
    }

    #[test]
    fn invariant_under_permutation(
        (original, shuffled) in points_strategy().prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
    ) {
        let a = closest_pair(&original).unwrap();
        let b = closest_pair(&shuffled).unwrap();
        prop_assert_eq!(a.distance(), b.distance());
        if minimal_pair_count(&original, a.distance()) == 1 {
            prop_assert!(a.same_points(&b), "{} vs {}", a, b);
        }
    }

    #[test]
    fn reported_distance_matches_reported_points(p in points_strategy()) {
        let pair = closest_pair(&p).unwrap();
        let (a, b) = pair.points();
        let dx = a.x - b.x; let dy = a.y - b.y;
        prop_assert_eq!(pair.distance(), (dx*dx + dy*dy).sqrt());
        prop_assert!(p.contains(&a) && p.contains(&b));
    }
}
