use std::f64::consts::{FRAC_PI_2, TAU};

use nalgebra::Rotation2;

use crate::diagnostics::{Diagnostic, Diagnostics, TracingDiagnostics};
use crate::error::{GeometryError, Result};
use crate::math::distance_2d::point_to_circle_dist;
use crate::math::intersect_2d::circle_circle_intersect_2d;
use crate::math::{Point2, Tolerance, Vector2};

use super::{CurveDomain, GeneralConic, Line, ParametricCurve};

/// A full circle in the plane.
///
/// `P(t) = center + radius * (cos(t), sin(t))` over `[0, 2*pi)`. A zero
/// radius is allowed; such a circle is a single point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    center: Point2,
    radius: f64,
}

impl Circle {
    /// Creates a new circle from its center and radius.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is negative or not finite, or the
    /// center is not finite.
    pub fn new(center: Point2, radius: f64) -> Result<Self> {
        if !(center.x.is_finite() && center.y.is_finite()) {
            return Err(GeometryError::NonFinite("center").into());
        }
        if !radius.is_finite() || radius < 0.0 {
            return Err(GeometryError::InvalidRadius(radius).into());
        }
        Ok(Self { center, radius })
    }

    /// Creates the circle through three points.
    ///
    /// Collinear or coincident points give `None` and a warning through
    /// `tracing`.
    #[must_use]
    pub fn from_3_points(p0: Point2, p1: Point2, p2: Point2) -> Option<Self> {
        Self::from_3_points_with(p0, p1, p2, &TracingDiagnostics)
    }

    /// Same as [`Circle::from_3_points`], reporting to a custom sink.
    #[must_use]
    pub fn from_3_points_with(
        p0: Point2,
        p1: Point2,
        p2: Point2,
        diagnostics: &dyn Diagnostics,
    ) -> Option<Self> {
        let center = perpendicular_bisector(&p0, &p1)
            .zip(perpendicular_bisector(&p1, &p2))
            .and_then(|(l1, l2)| l1.intersect_with_infinite_line(&l2));

        let Some(center) = center else {
            diagnostics.report(&Diagnostic::CollinearPoints { p0, p1, p2 });
            return None;
        };
        Some(Self {
            center,
            radius: (p0 - center).norm(),
        })
    }

    /// Returns the center of the circle.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Distance from `q` to the circle.
    #[must_use]
    pub fn distance_to(&self, q: &Point2) -> f64 {
        point_to_circle_dist(&self.center, self.radius, q)
    }

    /// The point of the circle nearest to `q`.
    ///
    /// `None` when `q` is at the center, where every point is nearest.
    #[must_use]
    pub fn closest_point_to_point(&self, q: &Point2) -> Option<Point2> {
        self.point_towards(q - self.center)
    }

    /// The point of the circle nearest to `line`: the point in the direction
    /// of the center's projection onto the line.
    ///
    /// `None` when the line passes through the center.
    #[must_use]
    pub fn closest_point_to_infinite_line(&self, line: &Line) -> Option<Point2> {
        self.point_towards(line.closest_point_to_point(&self.center) - self.center)
    }

    fn point_towards(&self, radial: Vector2) -> Option<Point2> {
        let len = radial.norm();
        if Tolerance::default().is_zero(len) {
            return None;
        }
        Some(self.center + radial * (self.radius / len))
    }

    /// Exact reduction to `x^2 + y^2 - 2a x - 2b y + (a^2 + b^2 - r^2) = 0`.
    #[must_use]
    pub fn as_generalized_conic(&self) -> GeneralConic {
        let (a, b, r) = (self.center.x, self.center.y, self.radius);
        GeneralConic::new(1.0, 0.0, 1.0, -2.0 * a, -2.0 * b, a * a + b * b - r * r)
    }

    /// Returns whether `q` is at distance `radius` from the center, within tolerance.
    #[must_use]
    pub fn is_point_on_circle(&self, q: &Point2) -> bool {
        Tolerance::default().numbers_equal((q - self.center).norm(), self.radius)
    }

    /// Intersection with an infinite line, delegated to the line.
    #[must_use]
    pub fn intersect_with_infinite_line(&self, line: &Line) -> Vec<Point2> {
        line.intersect_with_circle(self)
    }

    /// Intersection with a general conic, via this circle's conic form.
    #[must_use]
    pub fn intersect_with_generalized_conic(&self, conic: &GeneralConic) -> Vec<Point2> {
        conic.intersect_with_generalized_conic(&self.as_generalized_conic())
    }

    /// Intersection with another circle: empty, one tangent point, or two points.
    #[must_use]
    pub fn intersect_with_circle(&self, other: &Circle) -> Vec<Point2> {
        circle_circle_intersect_2d(
            &self.center,
            self.radius,
            &other.center,
            other.radius,
            &Tolerance::default(),
        )
    }
}

/// Perpendicular bisector of the chord `p -> q`.
fn perpendicular_bisector(p: &Point2, q: &Point2) -> Option<Line> {
    let chord = q - p;
    let mid = *p + chord * 0.5;
    Line::new(mid, Rotation2::new(FRAC_PI_2) * chord).ok()
}

impl ParametricCurve for Circle {
    fn evaluate(&self, t: f64) -> Point2 {
        self.center + Vector2::new(t.cos(), t.sin()) * self.radius
    }

    fn tangent(&self, t: f64) -> Result<Vector2> {
        if Tolerance::default().is_zero(self.radius) {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(Vector2::new(-t.sin(), t.cos()))
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, TAU)
    }

    fn is_closed(&self) -> bool {
        true
    }
}
