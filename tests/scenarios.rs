//! End-to-end scenarios for lines, circles and conics.

#![allow(clippy::unwrap_used)]

use std::cell::RefCell;
use std::io;
use std::sync::{Arc, Mutex};

use approx::assert_abs_diff_eq;

use conica::operations::query::{ClosestPointOnCurve, CurveCurveIntersect, PointOnCurve};
use conica::{Circle, Curve, Diagnostic, GeneralConic, Line, Point2, Vector2};

const TOL: f64 = 1e-9;

fn circle(x: f64, y: f64, r: f64) -> Circle {
    Circle::new(Point2::new(x, y), r).unwrap()
}

#[test]
fn identical_and_parallel_lines_have_no_intersection() {
    let l1 = Line::through(Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)).unwrap();
    let l1_again = Line::new(Point2::new(0.0, 0.0), Vector2::new(1.0, 1.0)).unwrap();
    let l2 = Line::new(Point2::new(2.0, 0.0), Vector2::new(1.0, 1.0)).unwrap();
    assert!(l1.intersect_with_infinite_line(&l1_again).is_none());
    assert!(l1.intersect_with_infinite_line(&l2).is_none());
    assert!(l2.intersect_with_infinite_line(&l1).is_none());
}

#[test]
fn externally_tangent_circles_meet_once() {
    let hits = circle(0.0, 0.0, 1.0).intersect_with_circle(&circle(2.0, 0.0, 1.0));
    assert_eq!(hits.len(), 1, "hits={hits:?}");
    assert_abs_diff_eq!(hits[0], Point2::new(1.0, 0.0), epsilon = TOL);
}

#[test]
fn overlapping_circles_meet_twice() {
    let mut hits = circle(0.0, 0.0, 1.0).intersect_with_circle(&circle(1.0, 0.0, 1.0));
    hits.sort_by(|p, q| q.y.total_cmp(&p.y));
    let h = 3.0_f64.sqrt() / 2.0;
    assert_eq!(hits.len(), 2, "hits={hits:?}");
    assert_abs_diff_eq!(hits[0], Point2::new(0.5, h), epsilon = TOL);
    assert_abs_diff_eq!(hits[1], Point2::new(0.5, -h), epsilon = TOL);
}

#[test]
fn point_circle_meets_the_same_way_in_either_order() {
    let point = circle(1.0, 0.0, 0.0);
    let unit = circle(0.0, 0.0, 1.0);
    assert_eq!(point.intersect_with_circle(&unit), vec![Point2::new(1.0, 0.0)]);
    assert_eq!(unit.intersect_with_circle(&point), vec![Point2::new(1.0, 0.0)]);

    let away = circle(1.0, 1.0, 0.0);
    assert!(away.intersect_with_circle(&unit).is_empty());
    assert!(unit.intersect_with_circle(&away).is_empty());
}

#[test]
fn large_tangent_line_meets_once_from_any_anchor() {
    let c = circle(250.0, -400.0, 1000.0);
    let angle: f64 = 0.7;
    let dir = Vector2::new(angle.cos(), angle.sin());
    let touch = Point2::new(250.0, -400.0) + Vector2::new(-angle.sin(), angle.cos()) * 1000.0;

    for anchor in [touch, touch + dir * 1000.0] {
        let line = Line::new(anchor, dir).unwrap();
        let hits = line.intersect_with_circle(&c);
        assert_eq!(hits.len(), 1, "anchor={anchor:?} hits={hits:?}");
        assert_abs_diff_eq!(hits[0], touch, epsilon = 1e-6);
        assert_eq!(Curve::from(c).intersect(&Curve::from(line)).len(), 1);
    }
}

#[test]
fn disjoint_circles_do_not_meet() {
    assert!(circle(0.0, 0.0, 1.0).intersect_with_circle(&circle(5.0, 0.0, 1.0)).is_empty());
}

#[test]
fn circle_through_three_points() {
    let pts = [Point2::new(0.0, 0.0), Point2::new(2.0, 0.0), Point2::new(1.0, 1.0)];
    let c = Circle::from_3_points(pts[0], pts[1], pts[2]).unwrap();
    for p in &pts {
        assert_abs_diff_eq!((p - c.center()).norm(), c.radius(), epsilon = TOL);
    }
}

#[test]
fn collinear_points_give_no_circle_and_a_diagnostic() {
    let seen = RefCell::new(Vec::new());
    let sink = |d: &Diagnostic| seen.borrow_mut().push(*d);
    let (p0, p1, p2) = (Point2::new(0.0, 0.0), Point2::new(1.0, 0.0), Point2::new(2.0, 0.0));

    assert!(Circle::from_3_points_with(p0, p1, p2, &sink).is_none());
    assert_eq!(seen.into_inner(), vec![Diagnostic::CollinearPoints { p0, p1, p2 }]);
}

/// Log sink shared between the subscriber and the test body.
#[derive(Clone, Default)]
struct CapturedLog(Arc<Mutex<Vec<u8>>>);

impl CapturedLog {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLog {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn collinear_points_warn_through_tracing_by_default() {
    let log = CapturedLog::default();
    let writer = log.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_max_level(tracing::Level::WARN)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let c = Circle::from_3_points(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(2.0, 0.0),
        );
        assert!(c.is_none());
    });

    let out = log.contents();
    assert!(out.contains("WARN"), "{out}");
    assert!(out.contains("collinear"), "{out}");
}

#[test]
fn valid_circle_emits_no_warning() {
    let log = CapturedLog::default();
    let writer = log.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_max_level(tracing::Level::WARN)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let c = Circle::from_3_points(
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(1.0, 1.0),
        );
        assert!(c.is_some());
    });

    assert!(log.contents().is_empty(), "{}", log.contents());
}

#[test]
fn conic_reduction_vanishes_on_the_circle() {
    let c = circle(-1.5, 2.0, 3.0);
    let conic = c.as_generalized_conic();
    for i in 0..16 {
        let t = f64::from(i) * std::f64::consts::TAU / 16.0;
        let p = Point2::new(-1.5 + 3.0 * t.cos(), 2.0 + 3.0 * t.sin());
        assert_abs_diff_eq!(conic.evaluate(&p), 0.0, epsilon = 1e-9);
    }
}

#[test]
fn same_tangency_through_every_solver_path() {
    // A circle tangent to the x-axis at (3, 0).
    let c = circle(3.0, 2.0, 2.0);
    let axis = Line::new(Point2::new(-10.0, 0.0), Vector2::new(1.0, 0.0)).unwrap();

    let direct = axis.intersect_with_circle(&c);
    let delegated = c.intersect_with_infinite_line(&axis);
    let dispatched = Curve::from(axis).intersect(&Curve::from(c));
    for hits in [&direct, &delegated, &dispatched] {
        assert_eq!(hits.len(), 1, "hits={hits:?}");
        assert_abs_diff_eq!(hits[0], Point2::new(3.0, 0.0), epsilon = TOL);
    }
}

#[test]
fn mixed_curve_set_pairwise() {
    let curves: Vec<Curve> = vec![
        Line::new(Point2::new(0.0, 0.0), Vector2::new(1.0, 0.0)).unwrap().into(),
        circle(0.0, 0.0, 2.0).into(),
        GeneralConic::new(1.0, 0.0, 0.0, 0.0, -1.0, -1.0).into(),
    ];
    for a in &curves {
        for b in &curves {
            if a == b {
                continue;
            }
            for p in CurveCurveIntersect::new(a, b).execute() {
                assert!(PointOnCurve::new(a, p).execute() || on_loosely(a, &p), "{p:?} off {a:?}");
                assert!(PointOnCurve::new(b, p).execute() || on_loosely(b, &p), "{p:?} off {b:?}");
            }
        }
    }
}

fn on_loosely(curve: &Curve, p: &Point2) -> bool {
    curve.as_generalized_conic().evaluate(p).abs() < 1e-6
}

#[test]
fn closest_point_query_lands_on_curve() {
    let c: Curve = circle(1.0, -1.0, 0.5).into();
    let r = ClosestPointOnCurve::new(&c, Point2::new(10.0, 3.0)).execute().unwrap().unwrap();
    assert!(PointOnCurve::new(&c, r.point).execute());
}
