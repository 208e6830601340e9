use crate::error::{OperationError, Result};
use crate::geometry::Curve;
use crate::math::Point2;

/// Unsigned distance from a point to a curve.
pub struct PointCurveDistance<'a> {
    curve: &'a Curve,
    point: Point2,
}

impl<'a> PointCurveDistance<'a> {
    /// Creates a new `PointCurveDistance` query.
    #[must_use]
    pub fn new(curve: &'a Curve, point: Point2) -> Self {
        Self { curve, point }
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns an error for general conics, which have no closed form.
    pub fn execute(&self) -> Result<f64> {
        match self.curve {
            Curve::Line(line) => Ok(line.distance_to(&self.point)),
            Curve::Circle(circle) => Ok(circle.distance_to(&self.point)),
            Curve::Conic(_) => Err(OperationError::Unsupported("distance to a general conic").into()),
        }
    }
}
