//! Advisory diagnostics for degenerate construction input.
//!
//! A diagnostic never replaces the `None` / empty result of the operation
//! that raised it; it only tells the embedding application why.

use std::fmt;

use crate::math::Point2;

/// A degenerate-input report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Diagnostic {
    /// Three points handed to a circle constructor are collinear (or two of
    /// them coincide), so no circle passes through all of them.
    CollinearPoints {
        /// First point, in the order given to the constructor.
        p0: Point2,
        /// Second point.
        p1: Point2,
        /// Third point.
        p2: Point2,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CollinearPoints { p0, p1, p2 } => write!(
                f,
                "circle points ({}, {}), ({}, {}), ({}, {}) are collinear, not creating circle",
                p0.x, p0.y, p1.x, p1.y, p2.x, p2.y
            ),
        }
    }
}

/// Receiver of [`Diagnostic`]s.
///
/// Any `Fn(&Diagnostic)` closure is a sink.
pub trait Diagnostics {
    /// Reports one diagnostic.
    fn report(&self, diagnostic: &Diagnostic);
}

/// Forwards diagnostics to `tracing` at `WARN` level. This is the default sink.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn report(&self, diagnostic: &Diagnostic) {
        tracing::warn!("{diagnostic}");
    }
}

/// Discards every diagnostic.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentDiagnostics;

impl Diagnostics for SilentDiagnostics {
    fn report(&self, _diagnostic: &Diagnostic) {}
}

impl<F> Diagnostics for F
where
    F: Fn(&Diagnostic),
{
    fn report(&self, diagnostic: &Diagnostic) {
        self(diagnostic);
    }
}
