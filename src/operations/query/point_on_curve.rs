use crate::geometry::Curve;
use crate::math::Point2;

/// Tests whether a point lies on a curve, within the default tolerance.
pub struct PointOnCurve<'a> {
    curve: &'a Curve,
    point: Point2,
}

impl<'a> PointOnCurve<'a> {
    /// Creates a new `PointOnCurve` query.
    #[must_use]
    pub fn new(curve: &'a Curve, point: Point2) -> Self {
        Self { curve, point }
    }

    /// Executes the query.
    #[must_use]
    pub fn execute(&self) -> bool {
        match self.curve {
            Curve::Line(line) => line.is_point_on_line(&self.point),
            Curve::Circle(circle) => circle.is_point_on_circle(&self.point),
            Curve::Conic(conic) => conic.contains_point(&self.point),
        }
    }
}
