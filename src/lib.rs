//! Closed-form distances, closest points and intersections among infinite
//! lines, circles and general conics in the plane.
//!
//! All degeneracy decisions (tangent, parallel, coincident, disjoint) go
//! through one [`Tolerance`] policy, and degenerate configurations come back
//! as `None` or an empty `Vec` rather than as errors.

pub mod diagnostics;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use diagnostics::{Diagnostic, Diagnostics, SilentDiagnostics, TracingDiagnostics};
pub use error::{ConicaError, Result};
pub use geometry::{Circle, Curve, GeneralConic, Line, ParametricCurve};
pub use math::{Point2, Tolerance, Vector2, Vector3, EPSILON};
