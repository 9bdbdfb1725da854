use super::*;
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn p(x: f64, y: f64) -> Point2D {
    Point2D::from((x, y))
}

fn close(a: Point2D, b: Point2D, eps: f64) -> bool {
    (a.x() - b.x()).abs() <= eps && (a.y() - b.y()).abs() <= eps
}

#[test]
fn default_corners_and_centroid() {
    let t = Triangle::default();
    assert_eq!(t.corners(), [p(0.0, 0.0), p(1.0, 0.0), p(0.5, 1.0)]);
    assert_eq!(t.ref_point(), p(0.5, 1.0 / 3.0));
}

#[test]
fn centroid_scenarios() {
    let t = Triangle::new(p(0.0, 0.0), p(2.0, 0.0), p(1.0, 3.0));
    assert_eq!(t.ref_point(), p(1.0, 1.0));

    let z = Triangle::new(p(0.0, 0.0), p(0.0, 0.0), p(0.0, 0.0));
    assert_eq!(z.ref_point(), p(0.0, 0.0));
}

#[test]
fn degenerate_collinear_is_accepted() {
    // All on y = 2x.
    let t = Triangle::new(p(0.0, 0.0), p(1.0, 2.0), p(5.0, 10.0));
    assert_eq!(t.ref_point(), p(2.0, 4.0));
    assert_eq!(t.ref_point(), t.compute_ref_point());
}

#[test]
fn non_finite_coordinates_propagate() {
    let t = Triangle::new(p(f64::NAN, 0.0), p(1.0, 0.0), p(0.0, f64::INFINITY));
    let r = t.ref_point();
    assert!(r.x().is_nan());
    assert_eq!(r.y(), f64::INFINITY);
}

#[test]
fn rebuilds_keep_centroid_current() {
    let t = Triangle::default();
    let u = t.with_one(p(3.0, 0.0)).with_two(p(0.0, 3.0)).with_three(p(0.0, 0.0));
    assert_eq!(u.corners(), [p(3.0, 0.0), p(0.0, 3.0), p(0.0, 0.0)]);
    assert_eq!(u.ref_point(), p(1.0, 1.0));
    // Original is untouched.
    assert_eq!(t, Triangle::default());

    let moved = u.translate(-1.0, 2.0);
    assert_eq!(moved.one(), p(2.0, 2.0));
    assert_eq!(moved.ref_point(), moved.compute_ref_point());
    assert!(close(moved.ref_point(), p(0.0, 3.0), 1e-12));
}

#[test]
fn description_lists_corners_then_ref_point() {
    let t = Triangle::new(p(0.0, 0.0), p(2.0, 0.0), p(1.0, 3.0));
    let text = t.describe();
    assert!(text.lines().count() >= 5);
    let parts = [
        t.one().to_string(),
        t.two().to_string(),
        t.three().to_string(),
        t.ref_point().to_string(),
    ];
    let mut from = 0;
    for part in &parts {
        let at = text[from..]
            .find(part.as_str())
            .unwrap_or_else(|| panic!("missing {part} in {text:?}"));
        from += at + part.len();
    }
}

#[test]
fn randomized_seeded_mean() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..100 {
        let mut q = || p(rng.gen_range(-50.0..50.0), rng.gen_range(-50.0..50.0));
        let (a, b, c) = (q(), q(), q());
        let t = Triangle::new(a, b, c);
        let expected = p(
            (a.x() + b.x() + c.x()) / 3.0,
            (a.y() + b.y() + c.y()) / 3.0,
        );
        assert_eq!(t.ref_point(), expected);
    }
}

fn coord() -> impl Strategy<Value = f64> {
    -1e6f64..1e6
}

fn point() -> impl Strategy<Value = Point2D> {
    (coord(), coord()).prop_map(|(x, y)| Point2D::new(x, y))
}

proptest! {
    #[test]
    fn ref_point_is_componentwise_mean(a in point(), b in point(), c in point()) {
        let t = Triangle::new(a, b, c);
        prop_assert_eq!(t.ref_point().x(), (a.x() + b.x() + c.x()) / 3.0);
        prop_assert_eq!(t.ref_point().y(), (a.y() + b.y() + c.y()) / 3.0);
        prop_assert_eq!(t.ref_point(), t.compute_ref_point());
    }

    #[test]
    fn ref_point_ignores_corner_order(a in point(), b in point(), c in point()) {
        let r = Triangle::new(a, b, c).ref_point();
        let eps = 1e-6;
        for perm in [[b, c, a], [c, a, b], [b, a, c], [a, c, b], [c, b, a]] {
            let t = Triangle::new(perm[0], perm[1], perm[2]);
            prop_assert!(close(t.ref_point(), r, eps));
            prop_assert_eq!(t.corners(), perm);
        }
    }
}
