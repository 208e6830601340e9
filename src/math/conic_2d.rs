//! Intersections involving the implicit conic
//! `A x^2 + B xy + C y^2 + D x + E y + F = 0`.
//!
//! Coefficients are passed as `[A, B, C, D, E, F]`.

use super::polynomial::{mul, quadratic_roots, real_roots, sub};
use super::{Point2, Tolerance, Vector2};

/// Value of the conic polynomial at `p`.
#[must_use]
pub fn conic_value(k: &[f64; 6], p: &Point2) -> f64 {
    let [a, b, c, d, e, f] = *k;
    let (x, y) = (p.x, p.y);
    a * x * x + b * x * y + c * y * y + d * x + e * y + f
}

/// Gradient of the conic polynomial at `p`.
#[must_use]
pub fn conic_gradient(k: &[f64; 6], p: &Point2) -> Vector2 {
    let [a, b, c, d, e, _] = *k;
    Vector2::new(2.0 * a * p.x + b * p.y + d, b * p.x + 2.0 * c * p.y + e)
}

/// Intersection of the line `anchor + t * direction` with a conic.
///
/// The substitution gives a quadratic in `t`, classified like the
/// line/circle case. A line lying on a degenerate conic gives no result.
#[must_use]
pub fn line_conic_intersect_2d(
    anchor: &Point2,
    direction: &Vector2,
    k: &[f64; 6],
    tol: &Tolerance,
) -> Vec<Point2> {
    if !is_finite(k) {
        tracing::debug!(?k, "non-finite conic coefficients, no intersection");
        return Vec::new();
    }
    let [a, b, c, d, e, _] = *k;
    let (x0, y0) = (anchor.x, anchor.y);
    let (u, v) = (direction.x, direction.y);

    let qa = a * u * u + b * u * v + c * v * v;
    let qb = 2.0 * a * x0 * u + b * (x0 * v + y0 * u) + 2.0 * c * y0 * v + d * u + e * v;
    let qc = conic_value(k, anchor);

    quadratic_roots(qa, qb, qc, tol)
        .into_iter()
        .map(|t| *anchor + direction * t)
        .collect()
}

/// Intersection of two conics.
///
/// `y` is eliminated with the resultant of both conics seen as quadratics in
/// `y`, which leaves a polynomial of degree at most four in `x`. For each of
/// its real roots the candidate `y` values are recovered and kept when the
/// point lies on both conics. Conics sharing a component give no result.
#[must_use]
pub fn conic_conic_intersect_2d(k1: &[f64; 6], k2: &[f64; 6], tol: &Tolerance) -> Vec<Point2> {
    if !(is_finite(k1) && is_finite(k2)) {
        tracing::debug!(?k1, ?k2, "non-finite conic coefficients, no intersection");
        return Vec::new();
    }
    let Some(xs) = real_roots(&y_resultant(k1, k2, tol), tol) else {
        tracing::debug!(?k1, ?k2, "conics share a component, no isolated intersection");
        return Vec::new();
    };

    // Roots at a tangency are only accurate to sqrt(epsilon).
    let loose = tol.loosened();
    let mut points: Vec<Point2> = Vec::new();
    for x in xs {
        for y in candidate_ys(k1, k2, x, tol) {
            let p = Point2::new(x, y);
            if !(near_conic(k1, &p, &loose) && near_conic(k2, &p, &loose)) {
                continue;
            }
            if points.iter().all(|q| !loose.is_zero((q - p).norm())) {
                points.push(p);
            }
        }
    }
    points
}

fn is_finite(k: &[f64; 6]) -> bool {
    k.iter().all(|c| c.is_finite())
}

/// Coefficients of the conic as a quadratic in `y` at fixed `x`.
fn y_quadratic(k: &[f64; 6], x: f64) -> (f64, f64, f64) {
    let [a, b, c, d, e, f] = *k;
    (c, b * x + e, a * x * x + d * x + f)
}

/// Resultant in `y` of two conics, as a polynomial in `x`.
///
/// For `p2 y^2 + p1 y + p0` and `q2 y^2 + q1 y + q0` it is
/// `(p2 q0 - p0 q2)^2 - (p2 q1 - p1 q2)(p1 q0 - p0 q1)`. When neither conic
/// has a `y^2` term that expression vanishes identically and the resultant
/// of the two linear forms, `p1 q0 - p0 q1`, is used instead.
fn y_resultant(k1: &[f64; 6], k2: &[f64; 6], tol: &Tolerance) -> Vec<f64> {
    let split = |k: &[f64; 6]| ([k[2]], [k[4], k[1]], [k[5], k[3], k[0]]);
    let (p2, p1, p0) = split(k1);
    let (q2, q1, q0) = split(k2);

    let t3 = sub(&mul(&p1, &q0), &mul(&p0, &q1));
    if tol.is_zero(k1[2]) && tol.is_zero(k2[2]) {
        return t3;
    }
    let t1 = sub(&mul(&p2, &q0), &mul(&p0, &q2));
    let t2 = sub(&mul(&p2, &q1), &mul(&p1, &q2));
    sub(&mul(&t1, &t1), &mul(&t2, &t3))
}

/// Candidate `y` values at `x`: the roots of the first conic in `y` (or of
/// the second if the first does not depend on `y`), plus the common root
/// obtained by eliminating `y^2` when that is well defined.
fn candidate_ys(k1: &[f64; 6], k2: &[f64; 6], x: f64, tol: &Tolerance) -> Vec<f64> {
    let (a2, a1, a0) = y_quadratic(k1, x);
    let (b2, b1, b0) = y_quadratic(k2, x);

    let loose = tol.loosened();
    let mut ys = if tol.is_zero(a2) && tol.is_zero(a1) {
        quadratic_roots(b2, b1, b0, &loose)
    } else {
        quadratic_roots(a2, a1, a0, &loose)
    };

    let den = a1 * b2 - a2 * b1;
    if !tol.is_zero(den) {
        ys.push((a2 * b0 - a0 * b2) / den);
    }
    ys
}

/// First-order distance test `|f(p)| / |grad f(p)|`.
fn near_conic(k: &[f64; 6], p: &Point2, tol: &Tolerance) -> bool {
    let value = conic_value(k, p);
    let grad = conic_gradient(k, p).norm();
    if tol.is_zero(grad) {
        tol.is_zero(value)
    } else {
        tol.is_zero(value / grad)
    }
}
