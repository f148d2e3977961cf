//! Integration tests for stave-verify
//!
//! These tests cover configuration loading from disk, the tracing sink and
//! round trips over a small notation model.

use stave_domain::{api_equals, Bool, Placement, RecordingSink};
use stave_verify::{DiagnosticsMode, Verifier, VerifyConfig, VerifyError};
use std::collections::BTreeMap;
use std::io::Write;
use std::sync::{Arc, Mutex};
use tempfile::NamedTempFile;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Debug, Clone)]
struct DirectionData {
    tick_time_position: i32,
    words: String,
    default_y: f64,
    placement: Placement,
    is_staff_value_specified: Bool,
}

#[derive(Debug, Clone)]
struct StaffData {
    directions: Vec<DirectionData>,
}

api_equals! {
    DirectionData { tick_time_position, words, default_y, placement, is_staff_value_specified }
    StaffData { directions }
}

fn direction(words: &str, tick: i32) -> DirectionData {
    DirectionData {
        tick_time_position: tick,
        words: words.to_string(),
        default_y: 35.25,
        placement: Placement::Above,
        is_staff_value_specified: Bool::Unspecified,
    }
}

/// Shared in-memory writer for capturing subscriber output
#[derive(Clone, Default)]
struct CaptureWriter {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl CaptureWriter {
    fn contents(&self) -> String {
        String::from_utf8(self.buffer.lock().unwrap().clone()).unwrap()
    }
}

impl Write for CaptureWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CaptureWriter {
    type Writer = CaptureWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[test]
fn test_load_config_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "epsilon = 0.001").unwrap();
    writeln!(file, "diagnostics = \"silent\"").unwrap();

    let config = VerifyConfig::load(file.path()).unwrap();
    assert_eq!(config.epsilon, 0.001);
    assert_eq!(config.diagnostics, DiagnosticsMode::Silent);

    let verifier = Verifier::new(&config).unwrap();
    assert!(verifier.equivalent(&10.0f64, &10.0005f64));
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = VerifyConfig::load(dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(err, VerifyError::Io(_)));
}

#[test]
fn test_load_malformed_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "epsilon = [not toml").unwrap();

    let err = VerifyConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, VerifyError::Parse(_)));
}

#[test]
fn test_tracing_sink_emits_diagnostic_line() {
    let writer = CaptureWriter::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(writer.clone())
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .finish();

    let verifier = Verifier::new(&VerifyConfig::traced()).unwrap();
    let a = direction("dolce", 0);
    let mut b = a.clone();
    b.words = "cantabile".to_string();

    let equal = tracing::subscriber::with_default(subscriber, || verifier.equivalent(&a, &b));

    assert!(!equal);
    let output = writer.contents();
    assert!(output.contains("DirectionData words members are not equal"));
    assert!(output.contains("stave::diagnostics"));
    assert!(output.contains("field_name"));
}

#[test]
fn test_tracing_sink_quiet_on_equal_values() {
    let writer = CaptureWriter::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(writer.clone())
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .finish();

    let verifier = Verifier::new(&VerifyConfig::traced()).unwrap();
    let a = direction("dolce", 0);

    let equal = tracing::subscriber::with_default(subscriber, || verifier.equivalent(&a, &a.clone()));

    assert!(equal);
    assert!(!writer.contents().contains("members are not equal"));
}

#[test]
fn test_diagnostics_mode_does_not_change_verdict() {
    let a = StaffData {
        directions: vec![direction("p", 0), direction("cresc.", 420)],
    };
    let mut b = a.clone();
    b.directions[1].default_y = 36.0;

    for config in [VerifyConfig::quiet(), VerifyConfig::traced(), VerifyConfig::default()] {
        let verifier = Verifier::new(&config).unwrap();
        assert!(verifier.differ(&a, &b));
        assert!(verifier.equivalent(&a, &a.clone()));
    }
}

#[test]
fn test_round_trip_through_text() {
    let sink = Arc::new(RecordingSink::new());
    let verifier = Verifier::with_sink(sink.clone());
    let staff = StaffData {
        directions: vec![direction("mf", 0), direction("rit.", 840)],
    };

    // Stand-in for a serializer: positions survive as decimal text.
    let survived = verifier
        .round_trip(&staff, |s| {
            let mut rebuilt = s.clone();
            for d in &mut rebuilt.directions {
                d.default_y = format!("{:.10}", d.default_y).parse::<f64>()?;
            }
            Ok::<_, std::num::ParseFloatError>(rebuilt)
        })
        .unwrap();

    assert!(survived);
    assert!(sink.is_empty());
}

#[test]
fn test_round_trip_detects_dropped_placement() {
    let sink = Arc::new(RecordingSink::new());
    let verifier = Verifier::with_sink(sink.clone());
    let staff = StaffData {
        directions: vec![direction("sfz", 210)],
    };

    let survived = verifier
        .round_trip(&staff, |s| {
            let mut rebuilt = s.clone();
            rebuilt.directions[0].placement = Placement::Unspecified;
            Ok::<_, String>(rebuilt)
        })
        .unwrap();

    assert!(!survived);
    assert_eq!(
        sink.lines(),
        vec![
            "DirectionData placement members are not equal",
            "StaffData directions members are not equal",
        ]
    );
}

#[test]
fn test_keyed_staves() {
    let verifier = Verifier::new(&VerifyConfig::quiet()).unwrap();
    let lhs = BTreeMap::from([
        (1, StaffData { directions: vec![direction("f", 0)] }),
        (2, StaffData { directions: vec![] }),
    ]);
    let mut rhs = lhs.clone();
    assert!(verifier.int_maps_equivalent(&lhs, &rhs));

    rhs.insert(3, StaffData { directions: vec![] });
    assert!(!verifier.int_maps_equivalent(&lhs, &rhs));
}
