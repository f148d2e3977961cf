//! Stave Verify
//!
//! Round-trip verification for the Stave notation model.
//!
//! The Verifier provides:
//! - Comparators built from TOML configuration (tolerance, diagnostics mode)
//! - A `tracing`-backed diagnostic sink
//! - Equivalence checks for values, sequences and integer-keyed mappings
//! - Round-trip checks around a collaborator's rebuild step
//!
//! # Examples
//!
//! ```
//! use stave_domain::{api_equals, Placement};
//! use stave_verify::{Verifier, VerifyConfig};
//!
//! #[derive(Debug, Clone)]
//! pub struct LyricData {
//!     pub text: String,
//!     pub default_y: f64,
//!     pub placement: Placement,
//! }
//!
//! api_equals! {
//!     LyricData { text, default_y, placement }
//! }
//!
//! let verifier = Verifier::new(&VerifyConfig::quiet()).unwrap();
//! let lyric = LyricData {
//!     text: "Ky".to_string(),
//!     default_y: -80.0,
//!     placement: Placement::Below,
//! };
//!
//! let survived = verifier
//!     .round_trip(&lyric, |l| Ok::<_, String>(l.clone()))
//!     .unwrap();
//! assert!(survived);
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod sink;
mod verifier;

pub use config::{DiagnosticsMode, VerifyConfig};
pub use error::{Result, VerifyError};
pub use sink::TracingSink;
pub use verifier::Verifier;
