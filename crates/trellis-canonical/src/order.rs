//! Total orderings over Trellis paths and typed values.
//!
//! Both comparators are pure and total: they never fail, and any two
//! inputs are ordered one way or the other. Recursion depth in
//! [`value_cmp`] is bounded by the nesting of the caller's leaf lists.

use std::cmp::Ordering;
use std::collections::HashMap;
use trellis_core::{Decimal64, Path, PathElement, TypedValue};

/// Compare two paths.
///
/// Elements are compared in lockstep, root to leaf: by name, then by key
/// count, then by key names in ascending order, then by the key values in
/// that same order. A path whose elements are a strict prefix of the
/// other's sorts first; fully equal element sequences fall back to the
/// origin tag, with the empty origin sorting before any non-empty one.
/// The root path is the minimum.
///
/// # Example
///
/// ```rust
/// use std::cmp::Ordering;
/// use trellis_canonical::path_cmp;
/// use trellis_core::{Path, PathElement};
///
/// let shallow = Path::new(vec![PathElement::new("a")]);
/// let deep = Path::new(vec![PathElement::new("a"), PathElement::new("b")]);
/// assert_eq!(path_cmp(&shallow, &deep), Ordering::Less);
/// ```
pub fn path_cmp(a: &Path, b: &Path) -> Ordering {
    for (ea, eb) in a.elements.iter().zip(b.elements.iter()) {
        let ord = element_cmp(ea, eb);
        if ord != Ordering::Equal {
            return ord;
        }
    }
    a.elements
        .len()
        .cmp(&b.elements.len())
        .then_with(|| a.origin.cmp(&b.origin))
}

/// Returns `true` if `a` sorts at or before `b`.
pub fn path_le(a: &Path, b: &Path) -> bool {
    path_cmp(a, b) != Ordering::Greater
}

fn element_cmp(a: &PathElement, b: &PathElement) -> Ordering {
    let ord = a.name.cmp(&b.name);
    if ord != Ordering::Equal {
        return ord;
    }
    let ord = a.keys.len().cmp(&b.keys.len());
    if ord != Ordering::Equal {
        return ord;
    }
    let names_a = sorted_keys(&a.keys);
    let names_b = sorted_keys(&b.keys);
    for (na, nb) in names_a.iter().zip(names_b.iter()) {
        let ord = na.cmp(nb);
        if ord != Ordering::Equal {
            return ord;
        }
        // name came from the map itself, so the lookup succeeds
        let ord = a.keys[*na].cmp(&b.keys[*nb]);
        if ord != Ordering::Equal {
            return ord;
        }
    }
    Ordering::Equal
}

/// Materialize the key names of `keys` in ascending order.
///
/// Key maps are unordered; comparisons visit them through this sorted
/// view so the result does not depend on insertion order.
fn sorted_keys(keys: &HashMap<String, String>) -> Vec<&str> {
    let mut names: Vec<&str> = keys.keys().map(String::as_str).collect();
    names.sort_unstable();
    names
}

/// Compare two typed values.
///
/// [`TypedValue::Empty`] is the minimum. Values of different variants are
/// ordered by a fixed variant rank; values of the same variant compare by
/// payload: numerically for the numeric kinds,
/// lexicographically for strings and raw byte payloads, `false < true`
/// for booleans, and element-wise recursively for leaf lists (a shorter
/// list sharing its prefix with a longer one sorts first).
///
/// Floats, and the effective value `digits × 10^-precision` of decimals,
/// compare via [`f64::total_cmp`]: NaN is ordered as an extremal value
/// above positive infinity rather than breaking totality.
///
/// # Example
///
/// ```rust
/// use std::cmp::Ordering;
/// use trellis_canonical::value_cmp;
/// use trellis_core::TypedValue;
///
/// assert_eq!(
///     value_cmp(&TypedValue::Uint(42), &TypedValue::String("ab".into())),
///     Ordering::Less,
/// );
/// ```
pub fn value_cmp(a: &TypedValue, b: &TypedValue) -> Ordering {
    let ord = rank(a).cmp(&rank(b));
    if ord != Ordering::Equal {
        return ord;
    }
    match (a, b) {
        (TypedValue::Int(x), TypedValue::Int(y)) => x.cmp(y),
        (TypedValue::Uint(x), TypedValue::Uint(y)) => x.cmp(y),
        (TypedValue::Float(x), TypedValue::Float(y)) => x.total_cmp(y),
        (TypedValue::Decimal(x), TypedValue::Decimal(y)) => decimal_cmp(*x, *y),
        (TypedValue::Bool(x), TypedValue::Bool(y)) => x.cmp(y),
        (TypedValue::String(x), TypedValue::String(y)) => x.cmp(y),
        (TypedValue::Bytes(x), TypedValue::Bytes(y))
        | (TypedValue::Json(x), TypedValue::Json(y))
        | (TypedValue::JsonIetf(x), TypedValue::JsonIetf(y))
        | (TypedValue::Any(x), TypedValue::Any(y)) => x.cmp(y),
        (TypedValue::LeafList(x), TypedValue::LeafList(y)) => leaf_list_cmp(x, y),
        // equal ranks mean equal variants; only Empty pairs remain
        _ => Ordering::Equal,
    }
}

/// Returns `true` if `a` sorts at or before `b`.
pub fn value_le(a: &TypedValue, b: &TypedValue) -> bool {
    value_cmp(a, b) != Ordering::Greater
}

fn leaf_list_cmp(a: &[TypedValue], b: &[TypedValue]) -> Ordering {
    for (va, vb) in a.iter().zip(b.iter()) {
        let ord = value_cmp(va, vb);
        if ord != Ordering::Equal {
            return ord;
        }
    }
    a.len().cmp(&b.len())
}

/// Two decimals with different digit/precision pairs but the same
/// effective value are equivalent under the order.
fn decimal_cmp(a: Decimal64, b: Decimal64) -> Ordering {
    a.to_f64().total_cmp(&b.to_f64())
}

/// Fixed cross-variant rank deciding order between values of different
/// kinds: Empty, Int, Uint, Float, Decimal, Bool, String, Bytes, Json,
/// JsonIetf, LeafList, Any. Numeric kinds sort before strings, strings
/// before the opaque and composite kinds.
const fn rank(value: &TypedValue) -> u8 {
    match value {
        TypedValue::Empty => 0,
        TypedValue::Int(_) => 1,
        TypedValue::Uint(_) => 2,
        TypedValue::Float(_) => 3,
        TypedValue::Decimal(_) => 4,
        TypedValue::Bool(_) => 5,
        TypedValue::String(_) => 6,
        TypedValue::Bytes(_) => 7,
        TypedValue::Json(_) => 8,
        TypedValue::JsonIetf(_) => 9,
        TypedValue::LeafList(_) => 10,
        TypedValue::Any(_) => 11,
    }
}
