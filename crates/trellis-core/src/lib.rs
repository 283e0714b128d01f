//! # Trellis Core
//!
//! Core types and validation for the Trellis configuration/telemetry
//! protocol.
//!
//! This crate provides:
//! - The record data model: [`Path`], [`PathElement`], [`TypedValue`],
//!   [`Decimal64`] and the [`Update`] record pair
//! - Structural validation for records
//!
//! ## Example
//!
//! ```rust
//! use trellis_core::{validate_update, Path, PathElement, TypedValue, Update};
//!
//! let update = Update::new(
//!     Path::new(vec![PathElement::new("interface").with_key("name", "eth0")]),
//!     TypedValue::Uint(1500),
//! );
//! validate_update(&update).unwrap();
//! ```

pub mod error;
pub mod types;
pub mod validation;

// Re-exports for convenience
pub use error::*;
pub use types::*;
pub use validation::*;
