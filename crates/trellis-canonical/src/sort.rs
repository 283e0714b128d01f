//! Canonical sorting and set comparison for Trellis records.
//!
//! Two collections produced in different orders compare equal once both
//! are sorted with the same total order; the `*_sets_equal` helpers
//! bundle that canonicalize-then-compare step.

use crate::order::{path_cmp, value_cmp};
use std::cmp::Ordering;
use trellis_core::{Path, TypedValue, Update};

/// Compare two update records: by path first, then by value.
pub fn update_cmp(a: &Update, b: &Update) -> Ordering {
    path_cmp(&a.path, &b.path).then_with(|| value_cmp(&a.value, &b.value))
}

/// Sort paths into canonical order.
pub fn sort_paths(paths: &mut [Path]) {
    paths.sort_by(path_cmp);
}

/// Sort typed values into canonical order.
pub fn sort_values(values: &mut [TypedValue]) {
    values.sort_by(value_cmp);
}

/// Sort update records into canonical order.
pub fn sort_updates(updates: &mut [Update]) {
    updates.sort_by(update_cmp);
}

/// Returns `true` if the two collections hold the same paths, ignoring
/// order.
///
/// # Example
///
/// ```rust
/// use trellis_canonical::path_sets_equal;
/// use trellis_core::{Path, PathElement};
///
/// let a = Path::new(vec![PathElement::new("a")]);
/// let b = Path::new(vec![PathElement::new("b")]);
/// assert!(path_sets_equal(&[a.clone(), b.clone()], &[b, a]));
/// ```
pub fn path_sets_equal(a: &[Path], b: &[Path]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut sorted_a = a.to_vec();
    let mut sorted_b = b.to_vec();
    sort_paths(&mut sorted_a);
    sort_paths(&mut sorted_b);
    sorted_a == sorted_b
}

/// Returns `true` if the two collections hold the same values, ignoring
/// order.
pub fn value_sets_equal(a: &[TypedValue], b: &[TypedValue]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut sorted_a = a.to_vec();
    let mut sorted_b = b.to_vec();
    sort_values(&mut sorted_a);
    sort_values(&mut sorted_b);
    sorted_a == sorted_b
}

/// Returns `true` if the two collections hold the same update records,
/// ignoring order.
///
/// Duplicates are significant: a record present twice on one side must
/// be present twice on the other.
pub fn update_sets_equal(a: &[Update], b: &[Update]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut sorted_a = a.to_vec();
    let mut sorted_b = b.to_vec();
    sort_updates(&mut sorted_a);
    sort_updates(&mut sorted_b);
    sorted_a == sorted_b
}
