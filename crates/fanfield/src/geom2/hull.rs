use nalgebra::Vector2;
use std::cmp::Ordering;

/// z-component of `(b - o) × (c - o)`; positive for a left turn in a y-up frame.
#[inline]
pub fn cross(o: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    let ob = b - o;
    let oc = c - o;
    ob.x * oc.y - ob.y * oc.x
}

#[inline]
fn lex(a: &Vector2<f64>, b: &Vector2<f64>) -> Ordering {
    a.x.partial_cmp(&b.x)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal))
}

/// Andrew's monotone chain; returns indices into `points` along the hull.
///
/// - Fewer than three points are returned as-is (input order).
/// - Non-left turns are popped, so collinear boundary points are excluded.
/// - Equal coordinates keep their input order (stable sort).
pub fn convex_hull_indices(points: &[Vector2<f64>]) -> Vec<usize> {
    if points.len() < 3 {
        return (0..points.len()).collect();
    }
    let mut order: Vec<usize> = (0..points.len()).collect();
    order.sort_by(|&a, &b| lex(&points[a], &points[b]));

    let mut lower: Vec<usize> = Vec::with_capacity(order.len());
    for &i in &order {
        while lower.len() >= 2
            && cross(
                points[lower[lower.len() - 2]],
                points[lower[lower.len() - 1]],
                points[i],
            ) <= 0.0
        {
            lower.pop();
        }
        lower.push(i);
    }
    let mut upper: Vec<usize> = Vec::with_capacity(order.len());
    for &i in order.iter().rev() {
        while upper.len() >= 2
            && cross(
                points[upper[upper.len() - 2]],
                points[upper[upper.len() - 1]],
                points[i],
            ) <= 0.0
        {
            upper.pop();
        }
        upper.push(i);
    }
    lower.pop();
    upper.pop();
    lower.extend(upper);
    lower
}
