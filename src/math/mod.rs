pub mod conic_2d;
pub mod distance_2d;
pub mod intersect_2d;
pub mod polynomial;
pub mod tolerance;

pub use tolerance::{Tolerance, EPSILON};

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 3D vector type, used for homogeneous line coefficients.
pub type Vector3 = nalgebra::Vector3<f64>;
