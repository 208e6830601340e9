use crate::geometry::{Circle, Curve, GeneralConic, Line};
use crate::math::conic_2d::{conic_conic_intersect_2d, line_conic_intersect_2d};
use crate::math::intersect_2d::{
    circle_circle_intersect_2d, homogeneous_line_intersect, line_circle_intersect_2d,
};
use crate::math::{Point2, Tolerance};

/// Computes the intersection points of two curves.
///
/// Each unordered pair of curve kinds is routed to its dedicated solver;
/// circles only go through the general conic engine when paired with a
/// general conic. Degenerate configurations give an empty result.
pub struct CurveCurveIntersect<'a> {
    curve_a: &'a Curve,
    curve_b: &'a Curve,
    tolerance: Tolerance,
}

impl<'a> CurveCurveIntersect<'a> {
    /// Creates a new `CurveCurveIntersect` query under the default tolerance.
    #[must_use]
    pub fn new(curve_a: &'a Curve, curve_b: &'a Curve) -> Self {
        Self {
            curve_a,
            curve_b,
            tolerance: Tolerance::default(),
        }
    }

    /// Uses `tolerance` to classify tangency and parallelism.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Executes the query, returning all intersection points.
    ///
    /// For circle/circle the points are computed on `curve_b`.
    #[must_use]
    pub fn execute(&self) -> Vec<Point2> {
        let tol = &self.tolerance;
        match (self.curve_a, self.curve_b) {
            (Curve::Line(a), Curve::Line(b)) => {
                homogeneous_line_intersect(a.triple(), b.triple(), tol).into_iter().collect()
            }
            (Curve::Line(line), Curve::Circle(circle)) | (Curve::Circle(circle), Curve::Line(line)) => {
                line_circle(line, circle, tol)
            }
            (Curve::Circle(a), Curve::Circle(b)) => {
                circle_circle_intersect_2d(a.center(), a.radius(), b.center(), b.radius(), tol)
            }
            (Curve::Line(line), Curve::Conic(conic)) | (Curve::Conic(conic), Curve::Line(line)) => {
                line_conic_intersect_2d(line.anchor(), line.direction(), &conic.coefficients(), tol)
            }
            (Curve::Circle(circle), Curve::Conic(conic))
            | (Curve::Conic(conic), Curve::Circle(circle)) => circle_conic(circle, conic, tol),
            (Curve::Conic(a), Curve::Conic(b)) => {
                conic_conic_intersect_2d(&a.coefficients(), &b.coefficients(), tol)
            }
        }
    }
}

fn line_circle(line: &Line, circle: &Circle, tol: &Tolerance) -> Vec<Point2> {
    line_circle_intersect_2d(line.anchor(), line.direction(), circle.center(), circle.radius(), tol)
}

fn circle_conic(circle: &Circle, conic: &GeneralConic, tol: &Tolerance) -> Vec<Point2> {
    conic_conic_intersect_2d(
        &conic.coefficients(),
        &circle.as_generalized_conic().coefficients(),
        tol,
    )
}
