//! Collections module - equality over sequences and keyed mappings
//!
//! Both kinds of container compare their cardinality first; a length or
//! size difference is an immediate inequality and emits no diagnostics.
//! Element comparison then stops at the first divergent pair, whose own
//! field mismatches are still reported.

use crate::compare::{ApiEq, Comparator};
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// Compare two ordered sequences position by position
///
/// # Examples
///
/// ```
/// use stave_domain::{sequences_equal, Comparator};
///
/// let cmp = Comparator::silent();
/// assert!(sequences_equal(&[1.0, 2.0], &[1.0, 2.000000001], &cmp));
/// assert!(!sequences_equal(&[1.0, 2.0, 3.0], &[1.0, 2.0], &cmp));
/// ```
pub fn sequences_equal<T: ApiEq>(lhs: &[T], rhs: &[T], cmp: &Comparator) -> bool {
    if lhs.len() != rhs.len() {
        return false;
    }

    lhs.iter().zip(rhs).all(|(l, r)| l.api_eq(r, cmp))
}

/// Negation of [`sequences_equal`]
pub fn sequences_differ<T: ApiEq>(lhs: &[T], rhs: &[T], cmp: &Comparator) -> bool {
    !sequences_equal(lhs, rhs, cmp)
}

/// Compare two integer-keyed mappings
///
/// `BTreeMap` iterates in ascending key order, so walking both maps in
/// lockstep pairs up equal keys; any key or value difference at a step is
/// an inequality.
///
/// # Examples
///
/// ```
/// use stave_domain::{int_maps_equal, Comparator};
/// use std::collections::BTreeMap;
///
/// let cmp = Comparator::silent();
/// let lhs = BTreeMap::from([(2, 0.5), (1, 0.25)]);
/// let rhs = BTreeMap::from([(1, 0.25), (2, 0.5)]);
/// assert!(int_maps_equal(&lhs, &rhs, &cmp));
/// ```
pub fn int_maps_equal<T: ApiEq>(
    lhs: &BTreeMap<i32, T>,
    rhs: &BTreeMap<i32, T>,
    cmp: &Comparator,
) -> bool {
    lhs.api_eq(rhs, cmp)
}

/// Negation of [`int_maps_equal`]
pub fn int_maps_differ<T: ApiEq>(
    lhs: &BTreeMap<i32, T>,
    rhs: &BTreeMap<i32, T>,
    cmp: &Comparator,
) -> bool {
    !int_maps_equal(lhs, rhs, cmp)
}

impl<T: ApiEq> ApiEq for [T] {
    fn api_eq(&self, other: &Self, cmp: &Comparator) -> bool {
        sequences_equal(self, other, cmp)
    }
}

impl<T: ApiEq, const N: usize> ApiEq for [T; N] {
    fn api_eq(&self, other: &Self, cmp: &Comparator) -> bool {
        sequences_equal(self, other, cmp)
    }
}

impl<T: ApiEq> ApiEq for Vec<T> {
    fn api_eq(&self, other: &Self, cmp: &Comparator) -> bool {
        sequences_equal(self, other, cmp)
    }
}

impl<K: ApiEq, V: ApiEq> ApiEq for BTreeMap<K, V> {
    fn api_eq(&self, other: &Self, cmp: &Comparator) -> bool {
        if self.len() != other.len() {
            return false;
        }

        self.iter()
            .zip(other)
            .all(|((lk, lv), (rk, rv))| lk.api_eq(rk, cmp) && lv.api_eq(rv, cmp))
    }
}

/// Hash maps have no stable iteration order, so values are paired by key
impl<K, V, S> ApiEq for HashMap<K, V, S>
where
    K: Eq + Hash,
    V: ApiEq,
    S: BuildHasher,
{
    fn api_eq(&self, other: &Self, cmp: &Comparator) -> bool {
        if self.len() != other.len() {
            return false;
        }

        self.iter().all(|(key, lv)| {
            other
                .get(key)
                .is_some_and(|rv| lv.api_eq(rv, cmp))
        })
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: a sequence of finite values equals itself
        #[test]
        fn test_sequence_reflexive(values in prop::collection::vec(-1.0e6f64..1.0e6f64, 0..32)) {
            let cmp = Comparator::silent();
            prop_assert!(sequences_equal(&values, &values, &cmp));
        }

        /// Property: dropping the tail always breaks equality
        #[test]
        fn test_sequence_prefix_unequal(
            values in prop::collection::vec(any::<i32>(), 1..32),
            cut in 0usize..32,
        ) {
            let cmp = Comparator::silent();
            let cut = cut % values.len();
            prop_assert!(sequences_differ(&values, &values[..cut], &cmp));
        }

        /// Property: a strict subset of entries is never equal to the whole map
        #[test]
        fn test_map_subset_unequal(
            entries in prop::collection::btree_map(any::<i32>(), any::<i64>(), 1..16),
        ) {
            let cmp = Comparator::silent();
            let mut subset = entries.clone();
            let first = *subset.keys().next().unwrap();
            subset.remove(&first);
            prop_assert!(int_maps_differ(&entries, &subset, &cmp));
        }

        /// Property: map verdicts are symmetric
        #[test]
        fn test_map_symmetric(
            lhs in prop::collection::btree_map(0i32..8, 0i64..3, 0..8),
            rhs in prop::collection::btree_map(0i32..8, 0i64..3, 0..8),
        ) {
            let cmp = Comparator::silent();
            prop_assert_eq!(int_maps_equal(&lhs, &rhs, &cmp), int_maps_equal(&rhs, &lhs, &cmp));
        }
    }
}
