// crates/mailgate-schema/src/convert.rs
// ============================================================================
// Module: Mailgate Attribute Conversion Helpers
// Description: Adapters between plain strings and tri-state attribute values.
// Purpose: Move configuration data across the provider framework boundary
//          and serialize map data deterministically.
// Dependencies: attr-value, serde_jcs, thiserror
// ============================================================================

//! ## Overview
//! Resource models hold plain strings and string collections; the provider
//! framework exchanges tri-state attribute values. The helpers here convert
//! in both directions with fixed null and unknown policies, and serialize
//! string maps as canonical JSON so identical content always produces
//! byte-identical text.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::HashMap;

use attr_value::AttrType;
use attr_value::AttrValue;
use attr_value::ValueError;
use thiserror::Error;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised by the conversion helpers.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Canonical JSON serialization failed.
    #[error("failed to canonicalize json: {0}")]
    Canonicalization(String),
}

// ============================================================================
// SECTION: String Adapters
// ============================================================================

/// Converts an optional configuration string into a known attribute value.
///
/// Absent input maps to the known empty string, never to a typed null.
#[must_use]
pub fn string_value(value: Option<&str>) -> AttrValue {
    AttrValue::string(value.unwrap_or(""))
}

/// Returns the contained string, or the empty string when absent.
#[must_use]
pub fn or_empty(value: Option<&str>) -> &str {
    value.unwrap_or("")
}

// ============================================================================
// SECTION: List Adapters
// ============================================================================

/// Builds a known string list value from plain strings.
///
/// The empty slice maps to a known empty list, never to a typed null.
///
/// # Errors
///
/// Propagates [`ValueError::ElementType`] from list construction. The path is
/// unreachable for string elements but is surfaced rather than swallowed.
pub fn string_list(values: &[String]) -> Result<AttrValue, ValueError> {
    AttrValue::list(AttrType::String, typed_strings(values))
}

/// Converts plain strings into typed string elements, element-wise.
#[must_use]
pub fn typed_strings(values: &[String]) -> Vec<AttrValue> {
    values.iter().map(|value| AttrValue::string(value.as_str())).collect()
}

/// Converts typed string elements back into plain strings.
///
/// Null and unknown elements map to an empty-string placeholder, so output
/// length always equals input length and positional correspondence with
/// parallel sequences is preserved.
#[must_use]
pub fn plain_strings(elements: &[AttrValue]) -> Vec<String> {
    elements.iter().map(|element| element.as_str().unwrap_or("").to_owned()).collect()
}

// ============================================================================
// SECTION: Deterministic JSON
// ============================================================================

/// Serializes a string map as canonical JSON text.
///
/// Keys are sorted during canonicalization, so two maps with identical
/// content serialize to byte-identical text regardless of insertion or
/// iteration order.
///
/// # Errors
///
/// Returns [`ConvertError::Canonicalization`] when serialization fails; the
/// error is propagated unchanged and never swallowed.
pub fn map_to_json(map: &HashMap<String, String>) -> Result<String, ConvertError> {
    serde_jcs::to_string(map).map_err(|err| ConvertError::Canonicalization(err.to_string()))
}
