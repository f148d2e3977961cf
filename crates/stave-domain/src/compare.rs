//! Comparison module - the comparable-value trait and its context
//!
//! Every model type implements [`ApiEq`]. Scalars get their implementations
//! here: floats use the tolerance, everything discrete uses exact equality.
//! Composite types get theirs from [`api_equals!`](crate::api_equals).

use crate::diagnostics::{default_sink, DiagnosticSink, Mismatch, SilentSink};
use crate::tolerance::Tolerance;
use std::fmt;
use std::sync::Arc;

/// Structural equality for model values
///
/// Implementations compare `self` with `other` under the tolerance carried
/// by `cmp` and report every mismatched field of a composite to its sink.
/// The verdict must not depend on the sink.
pub trait ApiEq {
    /// Check whether two values are equivalent
    fn api_eq(&self, other: &Self, cmp: &Comparator) -> bool;
}

/// Context threaded through a comparison
///
/// Holds the tolerance for continuous values and the sink that receives
/// mismatch diagnostics. Cloning is cheap.
#[derive(Clone)]
pub struct Comparator {
    tolerance: Tolerance,
    sink: Arc<dyn DiagnosticSink>,
}

impl Comparator {
    /// Create a comparator from a tolerance and a sink
    pub fn new(tolerance: Tolerance, sink: Arc<dyn DiagnosticSink>) -> Self {
        Self { tolerance, sink }
    }

    /// Create a comparator with the standard tolerance that reports nothing
    pub fn silent() -> Self {
        Self::new(Tolerance::STANDARD, Arc::new(SilentSink))
    }

    /// Replace the tolerance
    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Replace the sink
    pub fn with_sink(mut self, sink: Arc<dyn DiagnosticSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Get the tolerance
    pub fn tolerance(&self) -> Tolerance {
        self.tolerance
    }

    /// Compare two values
    pub fn compare<T: ApiEq + ?Sized>(&self, lhs: &T, rhs: &T) -> bool {
        lhs.api_eq(rhs, self)
    }

    /// Negation of [`Comparator::compare`]
    pub fn differ<T: ApiEq + ?Sized>(&self, lhs: &T, rhs: &T) -> bool {
        !self.compare(lhs, rhs)
    }

    /// Compare two continuous values under this comparator's tolerance
    #[inline]
    pub fn are_same(&self, lhs: f64, rhs: f64) -> bool {
        self.tolerance.are_same(lhs, rhs)
    }

    /// Report a mismatched field to the sink
    pub fn report(&self, type_name: &'static str, field_name: &'static str) {
        self.sink.report(&Mismatch::new(type_name, field_name));
    }
}

impl Default for Comparator {
    /// Standard tolerance and the process-wide default sink
    fn default() -> Self {
        Self::new(Tolerance::STANDARD, default_sink())
    }
}

impl fmt::Debug for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Comparator")
            .field("tolerance", &self.tolerance)
            .finish_non_exhaustive()
    }
}

impl ApiEq for f64 {
    #[inline]
    fn api_eq(&self, other: &Self, cmp: &Comparator) -> bool {
        cmp.are_same(*self, *other)
    }
}

impl ApiEq for f32 {
    #[inline]
    fn api_eq(&self, other: &Self, cmp: &Comparator) -> bool {
        cmp.are_same(f64::from(*self), f64::from(*other))
    }
}

crate::api_discrete!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, String, str, (),
);

impl<T: ApiEq + ?Sized> ApiEq for &T {
    fn api_eq(&self, other: &Self, cmp: &Comparator) -> bool {
        (**self).api_eq(*other, cmp)
    }
}

impl<T: ApiEq + ?Sized> ApiEq for Box<T> {
    fn api_eq(&self, other: &Self, cmp: &Comparator) -> bool {
        (**self).api_eq(&**other, cmp)
    }
}

impl<T: ApiEq> ApiEq for Option<T> {
    fn api_eq(&self, other: &Self, cmp: &Comparator) -> bool {
        match (self, other) {
            (None, None) => true,
            (Some(lhs), Some(rhs)) => lhs.api_eq(rhs, cmp),
            _ => false,
        }
    }
}
