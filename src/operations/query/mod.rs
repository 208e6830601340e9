mod closest_point;
mod distance;
mod intersect;
mod point_on_curve;

pub use closest_point::{ClosestPointOnCurve, ClosestPointResult};
pub use distance::PointCurveDistance;
pub use intersect::CurveCurveIntersect;
pub use point_on_curve::PointOnCurve;
