//! Diagnostic sink backed by `tracing`

use stave_domain::{DiagnosticSink, Mismatch};
use tracing::debug;

/// Sink that forwards each mismatch as a DEBUG event
///
/// Events carry `type_name` and `field_name` as structured fields and the
/// usual `<Type> <field> members are not equal` line as the message, under
/// the `stave::diagnostics` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, mismatch: &Mismatch) {
        debug!(
            target: "stave::diagnostics",
            type_name = mismatch.type_name,
            field_name = mismatch.field_name,
            "{}",
            mismatch
        );
    }
}
