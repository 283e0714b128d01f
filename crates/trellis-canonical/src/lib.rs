//! # Trellis Canonical
//!
//! Deterministic total orderings and canonical set comparison for Trellis
//! records.
//!
//! This crate provides:
//! - Total preorders over paths ([`path_cmp`]) and typed values
//!   ([`value_cmp`]), with `bool`-returning [`path_le`] / [`value_le`]
//!   predicates
//! - Canonical sorting of record collections ([`sort_updates`] and
//!   friends)
//! - Order-insensitive set comparison ([`update_sets_equal`] and friends)
//!
//! ## Ordering Rules
//!
//! 1. Path elements compare root to leaf: name, key count, key names in
//!    ascending order, key values in that same order
//! 2. A sequence that is a strict prefix of another sorts first
//! 3. The empty origin, the root path and the empty value are minimal
//! 4. Values of different kinds are ordered by a fixed variant rank;
//!    values of the same kind compare by payload
//! 5. Floats and decimal effective values use `f64::total_cmp`, so NaN
//!    sorts as an extremal value instead of breaking totality
//!
//! ## Example
//!
//! ```rust
//! use trellis_canonical::update_sets_equal;
//! use trellis_core::{Path, PathElement, TypedValue, Update};
//!
//! let mtu = Update::new(
//!     Path::new(vec![PathElement::new("mtu")]),
//!     TypedValue::Uint(1500),
//! );
//! let name = Update::new(
//!     Path::new(vec![PathElement::new("name")]),
//!     TypedValue::String("eth0".into()),
//! );
//!
//! // Same records, different order: equal after canonicalization.
//! assert!(update_sets_equal(
//!     &[mtu.clone(), name.clone()],
//!     &[name, mtu],
//! ));
//! ```

mod order;
mod sort;

pub use order::*;
pub use sort::*;
