use crate::error::{OperationError, Result};
use crate::geometry::Curve;
use crate::math::Point2;

/// Result of a closest point query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosestPointResult {
    /// The closest point on the curve.
    pub point: Point2,
    /// The distance from the query point to the closest point.
    pub distance: f64,
}

/// Finds the point of a curve nearest to a given point.
pub struct ClosestPointOnCurve<'a> {
    curve: &'a Curve,
    point: Point2,
}

impl<'a> ClosestPointOnCurve<'a> {
    /// Creates a new `ClosestPointOnCurve` query.
    #[must_use]
    pub fn new(curve: &'a Curve, point: Point2) -> Self {
        Self { curve, point }
    }

    /// Executes the query.
    ///
    /// Lines always have a closest point (the orthogonal projection).
    /// Circles have none when the query point is the center.
    ///
    /// # Errors
    ///
    /// Returns an error for general conics, which have no closed form.
    pub fn execute(&self) -> Result<Option<ClosestPointResult>> {
        let closest = match self.curve {
            Curve::Line(line) => Some(line.closest_point_to_point(&self.point)),
            Curve::Circle(circle) => circle.closest_point_to_point(&self.point),
            Curve::Conic(_) => {
                return Err(OperationError::Unsupported("closest point on a general conic").into())
            }
        };
        Ok(closest.map(|point| ClosestPointResult {
            point,
            distance: (self.point - point).norm(),
        }))
    }
}
