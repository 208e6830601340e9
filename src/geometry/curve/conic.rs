use crate::math::conic_2d::{conic_conic_intersect_2d, conic_gradient, conic_value, line_conic_intersect_2d};
use crate::math::{Point2, Tolerance, Vector2};

use super::Line;

/// A general second-degree curve `A x^2 + B xy + C y^2 + D x + E y + F = 0`.
///
/// Covers circles, ellipses, parabolas, hyperbolas and their degenerate
/// forms. Circles reduce to this form exactly through
/// [`Circle::as_generalized_conic`](super::Circle::as_generalized_conic).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneralConic {
    coefficients: [f64; 6],
}

impl GeneralConic {
    /// Creates a conic from its six coefficients.
    #[must_use]
    pub fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self {
            coefficients: [a, b, c, d, e, f],
        }
    }

    /// Returns `[A, B, C, D, E, F]`.
    #[must_use]
    pub fn coefficients(&self) -> [f64; 6] {
        self.coefficients
    }

    /// Value of the implicit polynomial at `p`.
    #[must_use]
    pub fn evaluate(&self, p: &Point2) -> f64 {
        conic_value(&self.coefficients, p)
    }

    /// Gradient of the implicit polynomial at `p`.
    #[must_use]
    pub fn gradient(&self, p: &Point2) -> Vector2 {
        conic_gradient(&self.coefficients, p)
    }

    /// Returns whether `p` satisfies the conic equation within tolerance.
    #[must_use]
    pub fn contains_point(&self, p: &Point2) -> bool {
        Tolerance::default().is_zero(self.evaluate(p))
    }

    /// Intersection with an infinite line.
    #[must_use]
    pub fn intersect_with_infinite_line(&self, line: &Line) -> Vec<Point2> {
        line_conic_intersect_2d(
            line.anchor(),
            line.direction(),
            &self.coefficients,
            &Tolerance::default(),
        )
    }

    /// Intersection with another conic.
    #[must_use]
    pub fn intersect_with_generalized_conic(&self, other: &GeneralConic) -> Vec<Point2> {
        conic_conic_intersect_2d(&self.coefficients, &other.coefficients, &Tolerance::default())
    }
}
