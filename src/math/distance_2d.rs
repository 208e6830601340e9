use super::{Point2, Vector2, Vector3};

/// Homogeneous coefficients `(a, b, c)` of the line through `anchor` with
/// direction `direction`, such that `a * x + b * y + c = 0`.
///
/// For a unit direction `(u, v)` and anchor `(x0, y0)` this is
/// `(-v, u, v * x0 - u * y0)`, so `(a, b)` is the left-hand unit normal.
#[must_use]
pub fn line_triple(anchor: &Point2, direction: &Vector2) -> Vector3 {
    let (u, v) = (direction.x, direction.y);
    Vector3::new(-v, u, v * anchor.x - u * anchor.y)
}

/// Signed distance from `q` to the line described by `triple`.
///
/// Positive on the left of the line direction.
#[must_use]
pub fn signed_distance_to_triple(triple: &Vector3, q: &Point2) -> f64 {
    let (a, b, c) = (triple.x, triple.y, triple.z);
    (a * q.x + b * q.y + c) / (a * a + b * b).sqrt()
}

/// Orthogonal projection of `q` onto the line `anchor + t * direction`.
///
/// `direction` must be unit length.
#[must_use]
pub fn project_onto_line(anchor: &Point2, direction: &Vector2, q: &Point2) -> Point2 {
    let t = direction.dot(&(q - anchor));
    *anchor + direction * t
}

/// Distance from `q` to the circle with the given center and radius.
#[must_use]
pub fn point_to_circle_dist(center: &Point2, radius: f64, q: &Point2) -> f64 {
    ((q - center).norm() - radius).abs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const TOL: f64 = 1e-12;

    #[test]
    fn triple_of_x_axis() {
        let t = line_triple(&Point2::new(3.0, 0.0), &Vector2::new(1.0, 0.0));
        assert_abs_diff_eq!(t, Vector3::new(0.0, 1.0, 0.0), epsilon = TOL);
    }

    #[test]
    fn triples_of_same_line_are_proportional() {
        let s = std::f64::consts::FRAC_1_SQRT_2;
        let t1 = line_triple(&Point2::new(0.0, 1.0), &Vector2::new(s, s));
        let t2 = line_triple(&Point2::new(4.0, 5.0), &Vector2::new(-s, -s));
        assert_abs_diff_eq!(t1.cross(&t2).norm(), 0.0, epsilon = TOL);
    }

    #[test]
    fn signed_distance_sign_follows_left_normal() {
        let t = line_triple(&Point2::origin(), &Vector2::new(1.0, 0.0));
        assert_abs_diff_eq!(signed_distance_to_triple(&t, &Point2::new(2.0, 3.0)), 3.0, epsilon = TOL);
        assert_abs_diff_eq!(signed_distance_to_triple(&t, &Point2::new(-7.0, -2.0)), -2.0, epsilon = TOL);
    }

    #[test]
    fn projection_is_perpendicular_foot() {
        let p = project_onto_line(&Point2::new(1.0, 1.0), &Vector2::new(0.0, 1.0), &Point2::new(4.0, -2.0));
        assert_abs_diff_eq!(p, Point2::new(1.0, -2.0), epsilon = TOL);
    }

    #[test]
    fn circle_distance_inside_and_outside() {
        let c = Point2::new(1.0, 1.0);
        assert_abs_diff_eq!(point_to_circle_dist(&c, 2.0, &Point2::new(1.0, 5.0)), 2.0, epsilon = TOL);
        assert_abs_diff_eq!(point_to_circle_dist(&c, 2.0, &c), 2.0, epsilon = TOL);
    }
}
