mod circle;
mod conic;
mod line;

pub use circle::Circle;
pub use conic::GeneralConic;
pub use line::Line;

use crate::error::Result;
use crate::math::{Point2, Vector2};

/// Parameter domain for a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveDomain {
    /// Start of the parameter range.
    pub t_min: f64,
    /// End of the parameter range.
    pub t_max: f64,
}

impl CurveDomain {
    /// Creates a new curve domain.
    #[must_use]
    pub fn new(t_min: f64, t_max: f64) -> Self {
        Self { t_min, t_max }
    }
}

/// Trait for curves with an explicit parametrization in the plane.
///
/// General conics are implicit only and do not implement it.
pub trait ParametricCurve {
    /// Evaluates the curve at parameter `t`.
    fn evaluate(&self, t: f64) -> Point2;

    /// Computes the unit tangent vector at parameter `t`.
    ///
    /// # Errors
    ///
    /// Returns an error if the tangent is degenerate.
    fn tangent(&self, t: f64) -> Result<Vector2>;

    /// Returns the parameter domain of the curve.
    fn domain(&self) -> CurveDomain;

    /// Returns whether the curve is closed.
    fn is_closed(&self) -> bool;
}

/// The closed set of curve kinds the toolkit can intersect.
#[derive(Debug, Clone, PartialEq)]
pub enum Curve {
    /// An infinite line.
    Line(Line),
    /// A circle.
    Circle(Circle),
    /// A general second-degree curve.
    Conic(GeneralConic),
}

impl Curve {
    /// Intersects two curves under the default tolerance.
    ///
    /// See [`CurveCurveIntersect`](crate::operations::query::CurveCurveIntersect)
    /// for a configurable tolerance.
    #[must_use]
    pub fn intersect(&self, other: &Curve) -> Vec<Point2> {
        crate::operations::query::CurveCurveIntersect::new(self, other).execute()
    }

    /// Reduces the curve to its implicit second-degree form.
    ///
    /// A line becomes the degenerate conic `a x + b y + c = 0`.
    #[must_use]
    pub fn as_generalized_conic(&self) -> GeneralConic {
        match self {
            Self::Line(line) => {
                let t = line.triple();
                GeneralConic::new(0.0, 0.0, 0.0, t.x, t.y, t.z)
            }
            Self::Circle(circle) => circle.as_generalized_conic(),
            Self::Conic(conic) => *conic,
        }
    }
}

impl From<Line> for Curve {
    fn from(line: Line) -> Self {
        Self::Line(line)
    }
}

impl From<Circle> for Curve {
    fn from(circle: Circle) -> Self {
        Self::Circle(circle)
    }
}

impl From<GeneralConic> for Curve {
    fn from(conic: GeneralConic) -> Self {
        Self::Conic(conic)
    }
}
