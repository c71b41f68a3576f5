use nalgebra::Vector2;

/// Parametric margin at both ends of a segment.
pub const DEFAULT_CROSSING_EPS: f64 = 0.001;

#[inline]
fn perp_dot(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    a.x * b.y - a.y * b.x
}

/// True iff segments `ab` and `cd` cross in their interiors.
///
/// Both parameters of the intersection must lie in `(eps, 1 - eps)`; touching
/// at or near an endpoint is not a crossing. Parallel (including collinear)
/// segments never cross.
pub fn segments_cross(
    a: Vector2<f64>,
    b: Vector2<f64>,
    c: Vector2<f64>,
    d: Vector2<f64>,
    eps: f64,
) -> bool {
    let r = b - a;
    let s = d - c;
    let det = perp_dot(r, s);
    if det == 0.0 {
        return false;
    }
    let qp = c - a;
    let t = perp_dot(qp, s) / det;
    let u = perp_dot(qp, r) / det;
    let (lo, hi) = (eps, 1.0 - eps);
    t > lo && t < hi && u > lo && u < hi
}
