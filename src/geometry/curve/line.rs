use crate::error::{GeometryError, Result};
use crate::math::distance_2d::{line_triple, project_onto_line, signed_distance_to_triple};
use crate::math::intersect_2d::{homogeneous_line_intersect, line_circle_intersect_2d};
use crate::math::{Point2, Tolerance, Vector2, Vector3};

use super::{Circle, CurveDomain, GeneralConic, ParametricCurve};

/// An infinite line defined by an anchor point and a unit direction.
///
/// The parametric form is `P(t) = anchor + t * direction`. The homogeneous
/// triple `(a, b, c)` with `a x + b y + c = 0` is derived once at
/// construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    anchor: Point2,
    direction: Vector2,
    triple: Vector3,
}

impl Line {
    /// Creates a new line from an anchor point and a direction.
    ///
    /// The direction is normalized.
    ///
    /// # Errors
    ///
    /// Returns an error if the direction vector is zero-length or a
    /// coordinate is not finite.
    pub fn new(anchor: Point2, direction: Vector2) -> Result<Self> {
        if !(anchor.x.is_finite() && anchor.y.is_finite()) {
            return Err(GeometryError::NonFinite("anchor").into());
        }
        if !(direction.x.is_finite() && direction.y.is_finite()) {
            return Err(GeometryError::NonFinite("direction").into());
        }
        let len = direction.norm();
        if Tolerance::default().is_zero(len) {
            return Err(GeometryError::ZeroVector.into());
        }
        let direction = direction / len;
        Ok(Self {
            anchor,
            direction,
            triple: line_triple(&anchor, &direction),
        })
    }

    /// Creates the line through `p0` and `p1`, directed from `p0` to `p1`.
    ///
    /// # Errors
    ///
    /// Returns an error if the two points coincide.
    pub fn through(p0: Point2, p1: Point2) -> Result<Self> {
        Self::new(p0, p1 - p0)
    }

    /// Returns the anchor point of the line.
    #[must_use]
    pub fn anchor(&self) -> &Point2 {
        &self.anchor
    }

    /// Returns the unit direction vector of the line.
    #[must_use]
    pub fn direction(&self) -> &Vector2 {
        &self.direction
    }

    /// Returns the homogeneous coefficients `(a, b, c)`.
    #[must_use]
    pub fn triple(&self) -> &Vector3 {
        &self.triple
    }

    /// Returns a point known to lie on the line.
    #[must_use]
    pub fn point_on_line(&self) -> Point2 {
        self.anchor
    }

    /// Signed distance from `q`, positive on the left of the direction.
    #[must_use]
    pub fn signed_distance_to(&self, q: &Point2) -> f64 {
        signed_distance_to_triple(&self.triple, q)
    }

    /// Distance from `q` to the line.
    #[must_use]
    pub fn distance_to(&self, q: &Point2) -> f64 {
        self.signed_distance_to(q).abs()
    }

    /// Returns whether `q` satisfies the line equation within tolerance.
    #[must_use]
    pub fn is_point_on_line(&self, q: &Point2) -> bool {
        let t = &self.triple;
        Tolerance::default().is_zero(t.x * q.x + t.y * q.y + t.z)
    }

    /// Orthogonal projection of `q` onto the line.
    #[must_use]
    pub fn closest_point_to_point(&self, q: &Point2) -> Point2 {
        project_onto_line(&self.anchor, &self.direction, q)
    }

    /// Intersection with another infinite line.
    ///
    /// Parallel and coincident lines both give `None`.
    #[must_use]
    pub fn intersect_with_infinite_line(&self, other: &Line) -> Option<Point2> {
        homogeneous_line_intersect(&self.triple, &other.triple, &Tolerance::default())
    }

    /// Intersection with a circle: empty, one tangent point, or two points.
    #[must_use]
    pub fn intersect_with_circle(&self, circle: &Circle) -> Vec<Point2> {
        line_circle_intersect_2d(
            &self.anchor,
            &self.direction,
            circle.center(),
            circle.radius(),
            &Tolerance::default(),
        )
    }

    /// Intersection with a general conic, delegated to the conic.
    #[must_use]
    pub fn intersect_with_generalized_conic(&self, conic: &GeneralConic) -> Vec<Point2> {
        conic.intersect_with_infinite_line(self)
    }
}

impl ParametricCurve for Line {
    fn evaluate(&self, t: f64) -> Point2 {
        self.anchor + self.direction * t
    }

    fn tangent(&self, _t: f64) -> Result<Vector2> {
        Ok(self.direction)
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(f64::NEG_INFINITY, f64::INFINITY)
    }

    fn is_closed(&self) -> bool {
        false
    }
}
