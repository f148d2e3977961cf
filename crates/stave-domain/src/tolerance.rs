//! Tolerance module - equality policy for continuous quantities
//!
//! Positions, angles and times in the model are routinely round-tripped
//! through decimal text and pick up representation error along the way.
//! Two continuous values are therefore "the same" when their absolute
//! difference is strictly below a small epsilon.

/// Default epsilon for every continuous field in the model
pub const EQUALITY_EPSILON: f64 = 0.00000001;

/// Bound under which two continuous values compare equal
///
/// The epsilon is always finite and strictly positive. A `Tolerance` is
/// carried by value inside a [`Comparator`](crate::Comparator), so tests can
/// inject a different bound while production code keeps
/// [`Tolerance::STANDARD`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerance {
    epsilon: f64,
}

impl Tolerance {
    /// The model-wide tolerance, backed by [`EQUALITY_EPSILON`]
    pub const STANDARD: Tolerance = Tolerance {
        epsilon: EQUALITY_EPSILON,
    };

    /// Create a tolerance with a custom epsilon
    ///
    /// # Errors
    /// Returns error if `epsilon` is not finite or not strictly positive
    ///
    /// # Examples
    ///
    /// ```
    /// use stave_domain::Tolerance;
    ///
    /// let loose = Tolerance::new(0.001).unwrap();
    /// assert!(loose.are_same(1.0, 1.0005));
    /// assert!(Tolerance::new(0.0).is_err());
    /// ```
    pub fn new(epsilon: f64) -> Result<Self, String> {
        if !epsilon.is_finite() {
            return Err(format!("Tolerance must be finite, got {}", epsilon));
        }
        if epsilon <= 0.0 {
            return Err(format!("Tolerance must be strictly positive, got {}", epsilon));
        }

        Ok(Self { epsilon })
    }

    /// Get the epsilon
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Check whether two continuous values are the same within this tolerance
    ///
    /// NaN is never the same as anything, itself included. Infinities are
    /// not the same as themselves either, since `inf - inf` is NaN.
    #[inline]
    pub fn are_same(&self, left: f64, right: f64) -> bool {
        (left - right).abs() < self.epsilon
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Check whether two continuous values are the same under [`Tolerance::STANDARD`]
#[inline]
pub fn are_same(left: f64, right: f64) -> bool {
    Tolerance::STANDARD.are_same(left, right)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: every finite value is the same as itself
        #[test]
        fn test_reflexive(x in -1.0e9f64..1.0e9f64) {
            prop_assert!(are_same(x, x));
        }

        /// Property: argument order never changes the verdict
        #[test]
        fn test_symmetric(a in -1.0e3f64..1.0e3f64, b in -1.0e3f64..1.0e3f64) {
            prop_assert_eq!(are_same(a, b), are_same(b, a));
        }

        /// Property: drift well inside epsilon is tolerated
        #[test]
        fn test_drift_within_epsilon(x in -1.0e3f64..1.0e3f64, frac in 0.0f64..0.5f64) {
            prop_assert!(are_same(x, x + frac * EQUALITY_EPSILON));
        }

        /// Property: drift well beyond epsilon is rejected
        #[test]
        fn test_drift_beyond_epsilon(x in -1.0e3f64..1.0e3f64, d in 1.0e-6f64..1.0e3f64) {
            prop_assert!(!are_same(x, x + d));
            prop_assert!(!are_same(x, x - d));
        }
    }
}
