use super::*;
use nalgebra::{vector, Vector2};

fn pts(raw: &[(f64, f64)]) -> Vec<Vector2<f64>> {
    raw.iter().map(|&(x, y)| Vector2::new(x, y)).collect()
}

#[test]
fn hull_square_keeps_all_corners_in_rotation() {
    let p = pts(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
    let h = convex_hull_indices(&p);
    assert_eq!(h, vec![0, 1, 2, 3]);
    // every consecutive triple turns the same way
    for k in 0..h.len() {
        let o = p[h[k]];
        let b = p[h[(k + 1) % h.len()]];
        let c = p[h[(k + 2) % h.len()]];
        assert!(cross(o, b, c) > 0.0);
    }
}

#[test]
fn hull_excludes_interior_point() {
    let p = pts(&[(0.0, 0.0), (4.0, 0.0), (1.0, 1.0), (0.0, 4.0)]);
    let h = convex_hull_indices(&p);
    assert_eq!(h.len(), 3);
    assert!(!h.contains(&2));
}

#[test]
fn hull_drops_collinear_boundary_points() {
    let p = pts(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (2.0, 2.0)]);
    let h = convex_hull_indices(&p);
    assert_eq!(h, vec![0, 2, 3]);
}

#[test]
fn hull_of_small_sets_is_identity() {
    assert!(convex_hull_indices(&[]).is_empty());
    let two = pts(&[(3.0, 1.0), (0.0, 0.0)]);
    assert_eq!(convex_hull_indices(&two), vec![0, 1]);
}

#[test]
fn hull_of_duplicates_degrades_without_panicking() {
    let p = pts(&[(1.0, 1.0), (1.0, 1.0), (1.0, 1.0), (1.0, 1.0)]);
    let h = convex_hull_indices(&p);
    assert!(h.len() <= 2);
}

#[test]
fn crossing_diagonals_cross() {
    let eps = DEFAULT_CROSSING_EPS;
    assert!(segments_cross(
        vector![0.0, 0.0],
        vector![2.0, 2.0],
        vector![0.0, 2.0],
        vector![2.0, 0.0],
        eps
    ));
}

#[test]
fn shared_endpoint_and_touching_do_not_cross() {
    let eps = DEFAULT_CROSSING_EPS;
    // shared endpoint
    assert!(!segments_cross(
        vector![0.0, 0.0],
        vector![2.0, 0.0],
        vector![2.0, 0.0],
        vector![2.0, 3.0],
        eps
    ));
    // T-junction: cd ends on the interior of ab
    assert!(!segments_cross(
        vector![0.0, 0.0],
        vector![2.0, 0.0],
        vector![1.0, 0.0],
        vector![1.0, 1.0],
        eps
    ));
    // disjoint
    assert!(!segments_cross(
        vector![0.0, 0.0],
        vector![1.0, 0.0],
        vector![5.0, -1.0],
        vector![5.0, 1.0],
        eps
    ));
}

#[test]
fn parallel_and_collinear_never_cross() {
    let eps = DEFAULT_CROSSING_EPS;
    assert!(!segments_cross(
        vector![0.0, 0.0],
        vector![4.0, 0.0],
        vector![0.0, 1.0],
        vector![4.0, 1.0],
        eps
    ));
    assert!(!segments_cross(
        vector![0.0, 0.0],
        vector![4.0, 0.0],
        vector![1.0, 0.0],
        vector![3.0, 0.0],
        eps
    ));
}

#[test]
fn crossing_near_endpoint_is_tolerated() {
    // cd passes ab at t = 0.0005 along ab
    let a = vector![0.0, 0.0];
    let b = vector![1000.0, 0.0];
    let c = vector![0.5, -1.0];
    let d = vector![0.5, 1.0];
    assert!(!segments_cross(a, b, c, d, DEFAULT_CROSSING_EPS));
    assert!(segments_cross(a, b, c, d, 0.0));
}
