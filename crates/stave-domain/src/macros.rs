//! Declarative equality for model types

/// Derive field-by-field equality for one or more model types
///
/// For each `Type { field, ... }` block this generates:
///
/// - `impl ApiEq for Type`: every declared field is compared (floats under
///   the comparator's tolerance, discrete values exactly, composites through
///   their own `ApiEq`). All fields are visited even after a mismatch, and
///   each mismatched field is reported to the comparator's sink as
///   `<Type> <field> members are not equal`.
/// - `impl PartialEq for Type`: `==` runs the comparison with
///   `Comparator::default()`, `!=` is its negation.
///
/// The field list must name every field of the struct exactly once; a
/// missing, unknown or repeated field is a compile error.
///
/// # Examples
///
/// ```
/// use stave_domain::{api_equals, Bool};
///
/// #[derive(Debug, Clone)]
/// pub struct TimeSignatureData {
///     pub beats: i32,
///     pub beat_type: i32,
///     pub is_implicit: Bool,
/// }
///
/// #[derive(Debug, Clone)]
/// pub struct MeasureData {
///     pub time_signature: TimeSignatureData,
///     pub width: Option<f64>,
/// }
///
/// api_equals! {
///     TimeSignatureData { beats, beat_type, is_implicit }
///     MeasureData { time_signature, width }
/// }
///
/// let common = TimeSignatureData { beats: 4, beat_type: 4, is_implicit: Bool::Unspecified };
/// let measure = MeasureData { time_signature: common.clone(), width: Some(120.0) };
/// assert_eq!(measure, measure.clone());
///
/// let mut cut = measure.clone();
/// cut.time_signature.beat_type = 2;
/// assert_ne!(measure, cut);
/// ```
///
/// Leaving a field out does not compile:
///
/// ```compile_fail
/// use stave_domain::api_equals;
///
/// pub struct KeyData {
///     pub fifths: i32,
///     pub cancel: i32,
/// }
///
/// api_equals! {
///     KeyData { fifths }
/// }
/// ```
#[macro_export]
macro_rules! api_equals {
    ($($name:ident { $($field:ident),* $(,)? })+) => {
        $(
            impl $crate::ApiEq for $name {
                #[allow(unused_mut, unused_variables)]
                fn api_eq(&self, other: &Self, cmp: &$crate::Comparator) -> bool {
                    // Exhaustive pattern: every field of the type must be declared.
                    let $name { $($field: _),* } = self;

                    let mut is_equal = true;
                    $(
                        if !$crate::ApiEq::api_eq(&self.$field, &other.$field, cmp) {
                            cmp.report(stringify!($name), stringify!($field));
                            is_equal = false;
                        }
                    )*
                    is_equal
                }
            }

            impl ::core::cmp::PartialEq for $name {
                fn eq(&self, other: &Self) -> bool {
                    $crate::ApiEq::api_eq(self, other, &$crate::Comparator::default())
                }
            }
        )+
    };
}

/// Register discrete types for exact comparison
///
/// Enumerations, identifiers and other categorical values must match
/// exactly regardless of tolerance. Each listed type needs `PartialEq`.
///
/// # Examples
///
/// ```
/// use stave_domain::{api_discrete, Comparator};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// pub enum Step { C, D, E, F, G, A, B }
///
/// api_discrete!(Step);
///
/// let cmp = Comparator::silent();
/// assert!(cmp.compare(&Step::C, &Step::C));
/// assert!(cmp.differ(&Step::C, &Step::D));
/// ```
#[macro_export]
macro_rules! api_discrete {
    ($($t:ty),+ $(,)?) => {
        $(
            impl $crate::ApiEq for $t {
                #[inline]
                fn api_eq(&self, other: &Self, _cmp: &$crate::Comparator) -> bool {
                    self == other
                }
            }
        )+
    };
}
