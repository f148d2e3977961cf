//! Diagnostics module - side channel for comparison mismatches
//!
//! When a composite comparison finds a field that disagrees it reports a
//! [`Mismatch`] to a [`DiagnosticSink`]. Reporting is advisory: a sink never
//! influences the verdict, and swapping or silencing it changes nothing but
//! where the lines go.

use std::fmt;
use std::io::Write;
use std::sync::{Arc, Mutex, OnceLock, RwLock};

/// A single field that disagreed during a composite comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Mismatch {
    /// Name of the composite type being compared
    pub type_name: &'static str,

    /// Name of the field that disagreed
    pub field_name: &'static str,
}

impl Mismatch {
    /// Create a new mismatch record
    pub fn new(type_name: &'static str, field_name: &'static str) -> Self {
        Self {
            type_name,
            field_name,
        }
    }
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} members are not equal", self.type_name, self.field_name)
    }
}

/// Destination for mismatch diagnostics
///
/// Implementations must not panic. Any `Fn(&Mismatch)` closure that is
/// `Send + Sync` is a sink.
pub trait DiagnosticSink: Send + Sync {
    /// Receive one mismatched field
    fn report(&self, mismatch: &Mismatch);
}

impl<F> DiagnosticSink for F
where
    F: Fn(&Mismatch) + Send + Sync,
{
    fn report(&self, mismatch: &Mismatch) {
        self(mismatch)
    }
}

/// Sink that discards every diagnostic
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentSink;

impl DiagnosticSink for SilentSink {
    fn report(&self, _mismatch: &Mismatch) {}
}

/// Sink that writes one line per mismatch to standard error
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn report(&self, mismatch: &Mismatch) {
        // Write errors are ignored.
        let _ = writeln!(std::io::stderr().lock(), "{}", mismatch);
    }
}

/// Sink that keeps every mismatch in memory
///
/// Mostly useful in tests that want to assert on which fields diverged.
#[derive(Debug, Default)]
pub struct RecordingSink {
    mismatches: Mutex<Vec<Mismatch>>,
}

impl RecordingSink {
    /// Create an empty recording sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a copy of everything recorded so far, in report order
    pub fn mismatches(&self) -> Vec<Mismatch> {
        self.mismatches
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Get the recorded mismatches rendered as diagnostic lines
    pub fn lines(&self) -> Vec<String> {
        self.mismatches().iter().map(ToString::to_string).collect()
    }

    /// Number of mismatches recorded
    pub fn len(&self) -> usize {
        self.mismatches
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    /// Check if nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Forget everything recorded so far
    pub fn clear(&self) {
        self.mismatches
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clear();
    }
}

impl DiagnosticSink for RecordingSink {
    fn report(&self, mismatch: &Mismatch) {
        self.mismatches
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(*mismatch);
    }
}

static DEFAULT_SINK: RwLock<Option<Arc<dyn DiagnosticSink>>> = RwLock::new(None);

fn stderr_sink() -> Arc<dyn DiagnosticSink> {
    static STDERR: OnceLock<Arc<dyn DiagnosticSink>> = OnceLock::new();
    STDERR.get_or_init(|| Arc::new(StderrSink)).clone()
}

/// Get the sink used by `==` on generated types
///
/// Standard error unless replaced with [`set_default_sink`].
pub fn default_sink() -> Arc<dyn DiagnosticSink> {
    DEFAULT_SINK
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .clone()
        .unwrap_or_else(stderr_sink)
}

/// Replace the process-wide default sink
///
/// Affects every later `==` on generated types in every thread. Comparisons
/// that go through an explicit [`Comparator`](crate::Comparator) keep their
/// own sink.
pub fn set_default_sink(sink: Arc<dyn DiagnosticSink>) {
    *DEFAULT_SINK
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(sink);
}

/// Restore standard error as the process-wide default sink
pub fn reset_default_sink() {
    *DEFAULT_SINK
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner()) = None;
}
