//! Real polynomial roots.
//!
//! Coefficient slices are in ascending order: `coeffs[i]` multiplies `x^i`.

use nalgebra::DMatrix;

use super::Tolerance;

/// Real roots of `a * t^2 + b * t + c = 0`.
///
/// The discriminant is classified by `tol`: zero gives one (tangent) root,
/// strictly positive gives two roots with the `+sqrt(disc)` root first,
/// anything else gives none. A vanishing `a` falls back to the linear
/// equation; if `b` vanishes too the result is empty.
#[must_use]
pub fn quadratic_roots(a: f64, b: f64, c: f64, tol: &Tolerance) -> Vec<f64> {
    if tol.is_zero(a) {
        if tol.is_zero(b) {
            return Vec::new();
        }
        return vec![-c / b];
    }

    let disc = b * b - 4.0 * a * c;
    tracing::trace!(disc, "quadratic discriminant");
    if tol.is_zero(disc) {
        vec![-b / (2.0 * a)]
    } else if tol.is_strictly_positive(disc) {
        let s = disc.sqrt();
        vec![(-b + s) / (2.0 * a), (-b - s) / (2.0 * a)]
    } else {
        Vec::new()
    }
}

/// Product of two polynomials.
#[must_use]
pub fn mul(p: &[f64], q: &[f64]) -> Vec<f64> {
    if p.is_empty() || q.is_empty() {
        return Vec::new();
    }
    let mut out = vec![0.0; p.len() + q.len() - 1];
    for (i, pi) in p.iter().enumerate() {
        for (j, qj) in q.iter().enumerate() {
            out[i + j] += pi * qj;
        }
    }
    out
}

/// Difference `p - q` of two polynomials.
#[must_use]
pub fn sub(p: &[f64], q: &[f64]) -> Vec<f64> {
    let n = p.len().max(q.len());
    (0..n)
        .map(|i| p.get(i).copied().unwrap_or(0.0) - q.get(i).copied().unwrap_or(0.0))
        .collect()
}

/// Evaluates the polynomial at `x` (Horner).
#[must_use]
pub fn eval(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, c| acc * x + c)
}

/// Real roots of an arbitrary-degree polynomial.
///
/// Leading coefficients that are negligible relative to the largest one are
/// dropped before the companion matrix is built. Returns `None` when the
/// polynomial vanishes identically, since every `x` is then a root.
///
/// Eigenvalues whose imaginary part is within `sqrt(epsilon)` (relative to
/// their magnitude) count as real: a double root, such as a tangency, splits
/// into a complex pair of roughly that size.
///
/// Non-finite coefficients give no roots.
#[must_use]
pub fn real_roots(coeffs: &[f64], tol: &Tolerance) -> Option<Vec<f64>> {
    if !coeffs.iter().all(|c| c.is_finite()) {
        tracing::debug!(?coeffs, "non-finite polynomial, no roots");
        return Some(Vec::new());
    }
    let scale = coeffs.iter().fold(0.0_f64, |m, c| m.max(c.abs()));
    if scale == 0.0 {
        return None;
    }

    let mut degree = coeffs.len() - 1;
    while degree > 0 && tol.is_zero(coeffs[degree] / scale) {
        degree -= 1;
    }
    if degree == 0 {
        return if tol.is_zero(coeffs[0] / scale) { None } else { Some(Vec::new()) };
    }

    let lead = coeffs[degree];
    let mut companion = DMatrix::<f64>::zeros(degree, degree);
    for i in 1..degree {
        companion[(i, i - 1)] = 1.0;
    }
    for (i, c) in coeffs[..degree].iter().enumerate() {
        companion[(i, degree - 1)] = -c / lead;
    }

    let imag_tol = tol.loosened().epsilon();
    #[allow(clippy::cast_precision_loss)]
    let derivative: Vec<f64> = coeffs[1..=degree]
        .iter()
        .enumerate()
        .map(|(i, c)| c * (i + 1) as f64)
        .collect();

    let mut roots: Vec<f64> = companion
        .complex_eigenvalues()
        .iter()
        .filter(|z| z.im.abs() <= imag_tol * z.re.abs().max(1.0))
        .map(|z| polish(&coeffs[..=degree], &derivative, z.re))
        .collect();
    roots.sort_by(f64::total_cmp);
    Some(roots)
}

/// A few Newton steps; keeps the starting value if a step diverges.
fn polish(coeffs: &[f64], derivative: &[f64], x0: f64) -> f64 {
    let mut x = x0;
    for _ in 0..4 {
        let d = eval(derivative, x);
        if d == 0.0 {
            break;
        }
        let next = x - eval(coeffs, x) / d;
        if !next.is_finite() || eval(coeffs, next).abs() > eval(coeffs, x).abs() {
            break;
        }
        x = next;
    }
    x
}
