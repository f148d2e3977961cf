//! Round-trip verifier
//!
//! Wraps a [`Comparator`] built from configuration and adds the round-trip
//! check used by model tests: take a value, push it through the
//! collaborator's parse → serialize pipeline, and compare the result with
//! the original.

use crate::config::{DiagnosticsMode, VerifyConfig};
use crate::error::{Result, VerifyError};
use crate::sink::TracingSink;
use stave_domain::{
    int_maps_equal, sequences_equal, ApiEq, Comparator, DiagnosticSink, SilentSink, StderrSink,
    Tolerance,
};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

/// Verifies equivalence and round-trip fidelity of model values
#[derive(Debug, Clone)]
pub struct Verifier {
    comparator: Comparator,
}

impl Verifier {
    /// Create a verifier from configuration
    ///
    /// # Errors
    /// Returns [`VerifyError::InvalidTolerance`] if the configured epsilon
    /// is rejected
    pub fn new(config: &VerifyConfig) -> Result<Self> {
        let tolerance = config.tolerance()?;
        let sink: Arc<dyn DiagnosticSink> = match config.diagnostics {
            DiagnosticsMode::Silent => Arc::new(SilentSink),
            DiagnosticsMode::Stderr => Arc::new(StderrSink),
            DiagnosticsMode::Tracing => Arc::new(TracingSink),
        };

        debug!(
            epsilon = tolerance.epsilon(),
            diagnostics = ?config.diagnostics,
            "Verifier configured"
        );

        Ok(Self::with_comparator(Comparator::new(tolerance, sink)))
    }

    /// Create a verifier around an existing comparator
    pub fn with_comparator(comparator: Comparator) -> Self {
        Self { comparator }
    }

    /// Create a verifier with the standard tolerance and a custom sink
    pub fn with_sink(sink: Arc<dyn DiagnosticSink>) -> Self {
        Self::with_comparator(Comparator::new(Tolerance::STANDARD, sink))
    }

    /// Get the underlying comparator
    pub fn comparator(&self) -> &Comparator {
        &self.comparator
    }

    /// Check whether two values are equivalent
    pub fn equivalent<T: ApiEq + ?Sized>(&self, lhs: &T, rhs: &T) -> bool {
        self.comparator.compare(lhs, rhs)
    }

    /// Negation of [`Verifier::equivalent`]
    pub fn differ<T: ApiEq + ?Sized>(&self, lhs: &T, rhs: &T) -> bool {
        self.comparator.differ(lhs, rhs)
    }

    /// Check whether two ordered sequences are equivalent
    pub fn sequences_equivalent<T: ApiEq>(&self, lhs: &[T], rhs: &[T]) -> bool {
        sequences_equal(lhs, rhs, &self.comparator)
    }

    /// Check whether two integer-keyed mappings are equivalent
    pub fn int_maps_equivalent<T: ApiEq>(
        &self,
        lhs: &BTreeMap<i32, T>,
        rhs: &BTreeMap<i32, T>,
    ) -> bool {
        int_maps_equal(lhs, rhs, &self.comparator)
    }

    /// Rebuild a value and check that it survived unchanged
    ///
    /// `rebuild` is the collaborator's round trip (serialize, parse, build a
    /// fresh value). Returns the equality verdict; a failing rebuild is an
    /// error, a divergent result is `Ok(false)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use stave_verify::{Verifier, VerifyConfig};
    ///
    /// let verifier = Verifier::new(&VerifyConfig::quiet()).unwrap();
    /// let tempo = 112.5f64;
    ///
    /// let survived = verifier
    ///     .round_trip(&tempo, |t| format!("{}", t).parse::<f64>())
    ///     .unwrap();
    /// assert!(survived);
    /// ```
    pub fn round_trip<T, E, F>(&self, original: &T, rebuild: F) -> Result<bool>
    where
        T: ApiEq,
        E: fmt::Display,
        F: FnOnce(&T) -> std::result::Result<T, E>,
    {
        let rebuilt = rebuild(original).map_err(|e| VerifyError::Rebuild(e.to_string()))?;
        let equal = self.comparator.compare(original, &rebuilt);

        if equal {
            debug!(type_name = std::any::type_name::<T>(), "Round trip preserved value");
        } else {
            info!(type_name = std::any::type_name::<T>(), "Round trip changed value");
        }

        Ok(equal)
    }
}

impl Default for Verifier {
    /// Standard tolerance, diagnostics to stderr
    fn default() -> Self {
        Self::with_comparator(Comparator::new(Tolerance::STANDARD, Arc::new(StderrSink)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_from_default_config() {
        let verifier = Verifier::new(&VerifyConfig::default()).unwrap();
        assert_eq!(verifier.comparator().tolerance(), Tolerance::STANDARD);
    }

    #[test]
    fn test_new_rejects_bad_epsilon() {
        let config = VerifyConfig {
            epsilon: 0.0,
            ..VerifyConfig::quiet()
        };
        assert!(matches!(
            Verifier::new(&config),
            Err(VerifyError::InvalidTolerance(_))
        ));
    }

    #[test]
    fn test_configured_tolerance_applies() {
        let config = VerifyConfig {
            epsilon: 0.5,
            ..VerifyConfig::quiet()
        };
        let verifier = Verifier::new(&config).unwrap();

        assert!(verifier.equivalent(&1.0f64, &1.4f64));
        assert!(verifier.differ(&1.0f64, &1.5f64));
    }

    #[test]
    fn test_collections() {
        let verifier = Verifier::new(&VerifyConfig::quiet()).unwrap();

        assert!(verifier.sequences_equivalent(&[1, 2, 3], &[1, 2, 3]));
        assert!(!verifier.sequences_equivalent(&[1, 2, 3], &[1, 2]));

        let lhs = BTreeMap::from([(1, 0.5), (2, 0.75)]);
        let rhs = BTreeMap::from([(1, 0.5), (2, 0.7500000001)]);
        assert!(verifier.int_maps_equivalent(&lhs, &rhs));
        assert!(!verifier.int_maps_equivalent(&lhs, &BTreeMap::from([(1, 0.5)])));
    }

    #[test]
    fn test_round_trip_failure_is_error() {
        let verifier = Verifier::new(&VerifyConfig::quiet()).unwrap();
        let result = verifier.round_trip(&3i32, |_| Err::<i32, _>("unexpected end of document"));

        match result {
            Err(VerifyError::Rebuild(msg)) => assert_eq!(msg, "unexpected end of document"),
            other => panic!("Expected rebuild error, got {:?}", other),
        }
    }

    #[test]
    fn test_round_trip_divergence_is_false() {
        let verifier = Verifier::new(&VerifyConfig::quiet()).unwrap();
        let lossy = verifier
            .round_trip(&0.123456789f64, |v| format!("{:.3}", v).parse::<f64>())
            .unwrap();
        assert!(!lossy);
    }
}
