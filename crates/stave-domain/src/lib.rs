//! Stave Domain Layer
//!
//! This crate holds the comparison core of the Stave notation model. It has
//! ZERO external dependencies and defines what it means for two in-memory
//! model values to be "the same", so that parse → rebuild → re-serialize
//! round trips can be certified in tests.
//!
//! ## Key Concepts
//!
//! - **Tolerance**: continuous quantities (positions, angles, times) are equal
//!   when they differ by less than a fixed epsilon
//! - **ApiEq**: the comparable-value trait every model type implements
//! - **Comparator**: carries the tolerance and the diagnostic sink through a
//!   comparison
//! - **api_equals!**: declares field-by-field equality for a model type
//! - **Diagnostics**: `<Type> <field> members are not equal` lines, routed to
//!   a replaceable sink
//!
//! ## Example
//!
//! ```
//! use stave_domain::{api_equals, Comparator, Placement, RecordingSink, Tolerance};
//! use std::sync::Arc;
//!
//! #[derive(Debug, Clone)]
//! pub struct DirectionData {
//!     pub tick_time_position: i32,
//!     pub default_y: f64,
//!     pub placement: Placement,
//! }
//!
//! api_equals! {
//!     DirectionData { tick_time_position, default_y, placement }
//! }
//!
//! let a = DirectionData { tick_time_position: 0, default_y: 12.5, placement: Placement::Above };
//! let mut b = a.clone();
//! b.default_y += 1e-10;
//! assert_eq!(a, b);
//!
//! b.placement = Placement::Below;
//! let sink = Arc::new(RecordingSink::new());
//! let cmp = Comparator::new(Tolerance::STANDARD, sink.clone());
//! assert!(cmp.differ(&a, &b));
//! assert_eq!(sink.lines(), vec!["DirectionData placement members are not equal"]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod collections;
pub mod common;
pub mod compare;
pub mod diagnostics;
mod macros;
pub mod tolerance;

// Re-exports for convenience
pub use collections::{int_maps_differ, int_maps_equal, sequences_differ, sequences_equal};
pub use common::{Bool, Placement, DEFAULT_TICKS_PER_QUARTER, TICK_TIME_INFINITY};
pub use compare::{ApiEq, Comparator};
pub use diagnostics::{
    default_sink, reset_default_sink, set_default_sink, DiagnosticSink, Mismatch, RecordingSink,
    SilentSink, StderrSink,
};
pub use tolerance::{are_same, Tolerance, EQUALITY_EPSILON};
