//! Trellis Validation
//!
//! Structural validation for Trellis records. Validation ensures a record
//! conforms to the data-model invariants before it enters a canonical set:
//! element and key names must be non-empty, and leaf lists hold only
//! populated scalar values.

use crate::types::{Path, TypedValue, Update};
use thiserror::Error;

/// Errors that can occur during validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Empty element name at index {0}")]
    EmptyElementName(usize),

    #[error("Empty key name in element '{0}'")]
    EmptyKeyName(String),

    #[error("Leaf list element at index {0} is empty")]
    EmptyLeafListElement(usize),

    #[error("Leaf list element at index {0} is itself a leaf list")]
    NestedLeafList(usize),
}

/// Validate a path
///
/// Every element must have a non-empty name and non-empty key names.
///
/// # Errors
///
/// Returns `ValidationError` if the path is invalid.
///
/// # Example
///
/// ```rust
/// use trellis_core::{validate_path, Path, PathElement};
///
/// let path = Path::new(vec![PathElement::new("interface").with_key("name", "eth0")]);
/// assert!(validate_path(&path).is_ok());
/// ```
pub fn validate_path(path: &Path) -> Result<(), ValidationError> {
    for (index, element) in path.elements.iter().enumerate() {
        if element.name.is_empty() {
            return Err(ValidationError::EmptyElementName(index));
        }
        for key in element.keys.keys() {
            if key.is_empty() {
                return Err(ValidationError::EmptyKeyName(element.name.clone()));
            }
        }
    }
    Ok(())
}

/// Validate a typed value
///
/// Leaf lists must contain only populated, non-list elements.
///
/// # Errors
///
/// Returns `ValidationError` if the value is invalid.
pub fn validate_value(value: &TypedValue) -> Result<(), ValidationError> {
    if let TypedValue::LeafList(elements) = value {
        for (index, element) in elements.iter().enumerate() {
            match element {
                TypedValue::Empty => {
                    return Err(ValidationError::EmptyLeafListElement(index));
                }
                TypedValue::LeafList(_) => {
                    return Err(ValidationError::NestedLeafList(index));
                }
                _ => {}
            }
        }
    }
    Ok(())
}

/// Validate an update record
///
/// # Errors
///
/// Returns `ValidationError` if the path or value is invalid.
pub fn validate_update(update: &Update) -> Result<(), ValidationError> {
    validate_path(&update.path)?;
    validate_value(&update.value)?;
    Ok(())
}
