//! Numerical tolerance policy.
//!
//! Every degeneracy classification in the crate (parallelism, tangency,
//! collinearity, point-on-curve) goes through [`Tolerance`], so that all
//! solvers agree on where the boundary between "two points", "one point" and
//! "no point" lies.

use crate::error::{Result, ToleranceError};

/// Default epsilon used by [`Tolerance::default`].
pub const EPSILON: f64 = 1e-10;

/// A single-epsilon comparison policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    epsilon: f64,
}

impl Tolerance {
    /// Creates a policy with a custom epsilon.
    ///
    /// # Errors
    ///
    /// Returns an error if `epsilon` is not finite or not strictly positive.
    pub fn new(epsilon: f64) -> Result<Self> {
        if !epsilon.is_finite() || epsilon <= 0.0 {
            return Err(ToleranceError::InvalidEpsilon(epsilon).into());
        }
        Ok(Self { epsilon })
    }

    /// Returns the epsilon of this policy.
    #[must_use]
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Returns whether `x` is zero within epsilon.
    #[must_use]
    pub fn is_zero(&self, x: f64) -> bool {
        x.abs() <= self.epsilon
    }

    /// Returns whether `a` and `b` are equal within epsilon.
    #[must_use]
    pub fn numbers_equal(&self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.epsilon
    }

    /// Returns whether `x` is greater than epsilon.
    #[must_use]
    pub fn is_strictly_positive(&self, x: f64) -> bool {
        x > self.epsilon
    }

    /// Policy with epsilon `sqrt(self.epsilon)`, for quantities that are only
    /// determined to half the working precision, such as double polynomial
    /// roots at a tangency.
    #[must_use]
    pub fn loosened(&self) -> Self {
        Self {
            epsilon: self.epsilon.sqrt(),
        }
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self { epsilon: EPSILON }
    }
}

/// [`Tolerance::is_zero`] under the default policy.
#[must_use]
pub fn is_zero(x: f64) -> bool {
    Tolerance::default().is_zero(x)
}

/// [`Tolerance::numbers_equal`] under the default policy.
#[must_use]
pub fn numbers_equal(a: f64, b: f64) -> bool {
    Tolerance::default().numbers_equal(a, b)
}

/// [`Tolerance::is_strictly_positive`] under the default policy.
#[must_use]
pub fn is_strictly_positive(x: f64) -> bool {
    Tolerance::default().is_strictly_positive(x)
}
