// crates/attr-value/src/error.rs
// ============================================================================
// Module: Attribute Value Errors
// Description: Construction errors for typed attribute values.
// Purpose: Surface element type mismatches from checked collection builders.
// Dependencies: crate::value, thiserror
// ============================================================================

//! ## Overview
//! Attribute value construction is total for scalars; only collection
//! construction can fail, and only when an element's type disagrees with the
//! declared element type. Callers propagate these errors rather than panic.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::value::AttrType;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised when constructing typed attribute values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    /// An element's type disagreed with the declared element type.
    #[error("list element {index} has type {actual}, expected {expected}")]
    ElementType {
        /// Zero-based index of the offending element.
        index: usize,
        /// Element type declared for the collection.
        expected: AttrType,
        /// Actual type of the offending element.
        actual: AttrType,
    },
}
