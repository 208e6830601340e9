use std::f64::consts::{FRAC_PI_2, PI};

use super::polynomial::quadratic_roots;
use super::{Point2, Tolerance, Vector2, Vector3};

/// Intersection of two lines given by their homogeneous triples.
///
/// The cross product of the triples is the intersection point in
/// homogeneous coordinates. A zero `z` means the lines are parallel or
/// coincident, and both cases give `None`.
#[must_use]
pub fn homogeneous_line_intersect(l1: &Vector3, l2: &Vector3, tol: &Tolerance) -> Option<Point2> {
    let p = l1.cross(l2);
    if tol.is_zero(p.z) {
        tracing::debug!(?l1, ?l2, "lines are parallel or coincident, no intersection");
        return None;
    }
    Some(Point2::new(p.x / p.z, p.y / p.z))
}

/// Intersection of the line `anchor + t * direction` with a circle.
///
/// The line is re-anchored at the foot of the perpendicular from the center
/// and parametrized in units of the radius, so the quadratic becomes
/// `tau^2 + (s^2 - 1) = 0` with `s = distance / radius`. Its discriminant
/// depends neither on where the anchor sits nor on the coordinate scale. A
/// tangent line yields one point; a secant yields two, the `+sqrt(disc)` root
/// first. A zero-radius circle is met only by a line through its center.
#[must_use]
pub fn line_circle_intersect_2d(
    anchor: &Point2,
    direction: &Vector2,
    center: &Point2,
    radius: f64,
    tol: &Tolerance,
) -> Vec<Point2> {
    let len = direction.norm();
    if tol.is_zero(len) {
        return Vec::new();
    }
    let unit = direction / len;
    let foot = *anchor + unit * unit.dot(&(center - anchor));
    let h = (foot - center).norm();

    if tol.is_zero(radius) {
        return if tol.is_zero(h) { vec![foot] } else { Vec::new() };
    }
    let s = h / radius;

    quadratic_roots(1.0, 0.0, (s - 1.0) * (s + 1.0), tol)
        .into_iter()
        .map(|tau| foot + unit * (tau * radius))
        .collect()
}

/// Intersection of two circles.
///
/// Solves `a cos(t) + b sin(t) = c` for the parameter `t` of points on the
/// second circle (`c1`, `r1`), rewritten as `sin(t + beta) = C`. The
/// returned points lie on the second circle.
///
/// Concentric circles give no result, as do disjoint and strictly nested
/// circles. `|C|` equal to one under `tol` is tangency and gives exactly one
/// point. A zero-radius circle on either side is a point, met only when it
/// lies on the other circle.
#[must_use]
pub fn circle_circle_intersect_2d(
    c0: &Point2,
    r0: f64,
    c1: &Point2,
    r1: f64,
    tol: &Tolerance,
) -> Vec<Point2> {
    if tol.is_zero(r1) {
        return point_on_circle(c1, c0, r0, tol);
    }
    if tol.is_zero(r0) {
        return point_on_circle(c0, c1, r1, tol);
    }

    let dx = c1.x - c0.x;
    let dy = c1.y - c0.y;
    let a = 2.0 * r1 * dx;
    let b = 2.0 * r1 * dy;
    let c = -(dx * dx + dy * dy) - (r1 * r1 - r0 * r0);

    let den = a.hypot(b);
    if tol.is_zero(den) {
        tracing::debug!(?c0, ?c1, "concentric circles, no intersection");
        return Vec::new();
    }
    let (a, b, c) = (a / den, b / den, c / den);
    let beta = a.atan2(b);

    let on_circle = |t: f64| Point2::new(c1.x + r1 * t.cos(), c1.y + r1 * t.sin());

    if tol.numbers_equal(c.abs(), 1.0) {
        vec![on_circle(c.signum() * FRAC_PI_2 - beta)]
    } else if c.abs() > 1.0 {
        Vec::new()
    } else {
        let alpha = c.asin();
        vec![on_circle(alpha - beta), on_circle(PI - alpha - beta)]
    }
}

/// `[p]` when `p` lies on the circle `(center, radius)`, otherwise empty.
fn point_on_circle(p: &Point2, center: &Point2, radius: f64, tol: &Tolerance) -> Vec<Point2> {
    if tol.numbers_equal((p - center).norm(), radius) {
        vec![*p]
    } else {
        Vec::new()
    }
}
