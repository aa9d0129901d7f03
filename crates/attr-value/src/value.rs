// crates/attr-value/src/value.rs
// ============================================================================
// Module: Attribute Types and Values
// Description: Tri-state attribute values over a closed set of attribute types.
// Purpose: Provide checked construction and typed accessors for plan values.
// Dependencies: crate::error, serde
// ============================================================================

//! ## Overview
//! An [`AttrValue`] pairs an attribute type with one of three states: null,
//! unknown, or known with a payload of that type. Scalar construction is
//! total; list construction is checked so that a known list's elements always
//! share the declared element type.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::error::ValueError;

// ============================================================================
// SECTION: Attribute Types
// ============================================================================

/// Attribute type descriptor for the closed set of supported value shapes.
///
/// # Invariants
/// - Variants are stable for serialization and schema matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "element", rename_all = "snake_case")]
pub enum AttrType {
    /// Boolean attribute.
    Bool,
    /// String attribute.
    String,
    /// Homogeneous list attribute with the given element type.
    List(Box<AttrType>),
}

impl fmt::Display for AttrType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => f.write_str("bool"),
            Self::String => f.write_str("string"),
            Self::List(element) => write!(f, "list<{element}>"),
        }
    }
}

// ============================================================================
// SECTION: Value States
// ============================================================================

/// Tri-state lifecycle of an attribute value.
///
/// # Invariants
/// - A `Known` payload matches the owning value's attribute type; the checked
///   constructors are the only producers inside this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
enum ValueState {
    /// Explicitly absent.
    Null,
    /// Not yet resolved by the planning engine.
    Unknown,
    /// Resolved payload.
    Known(KnownValue),
}

/// Payload of a known attribute value.
///
/// # Invariants
/// - List elements all share the element type declared by the owning value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
enum KnownValue {
    /// Boolean payload.
    Bool(bool),
    /// String payload.
    String(String),
    /// List payload.
    List(Vec<AttrValue>),
}

// ============================================================================
// SECTION: Attribute Values
// ============================================================================

/// Tri-state typed attribute value.
///
/// # Invariants
/// - When produced by the constructors on this type, a known payload matches
///   `attr_type`. Deserialized values are validated at framework boundaries,
///   not by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttrValue {
    /// Attribute type of this value in every state.
    attr_type: AttrType,
    /// Tri-state payload.
    state: ValueState,
}

impl AttrValue {
    /// Creates a null value of the given attribute type.
    #[must_use]
    pub const fn null(attr_type: AttrType) -> Self {
        Self {
            attr_type,
            state: ValueState::Null,
        }
    }

    /// Creates an unknown value of the given attribute type.
    #[must_use]
    pub const fn unknown(attr_type: AttrType) -> Self {
        Self {
            attr_type,
            state: ValueState::Unknown,
        }
    }

    /// Creates a known string value.
    #[must_use]
    pub fn string(value: impl Into<String>) -> Self {
        Self {
            attr_type: AttrType::String,
            state: ValueState::Known(KnownValue::String(value.into())),
        }
    }

    /// Creates a known boolean value.
    #[must_use]
    pub const fn boolean(value: bool) -> Self {
        Self {
            attr_type: AttrType::Bool,
            state: ValueState::Known(KnownValue::Bool(value)),
        }
    }

    /// Creates a known list value after checking every element against the
    /// declared element type. The empty list succeeds for any element type.
    ///
    /// # Errors
    ///
    /// Returns [`ValueError::ElementType`] when an element's type disagrees
    /// with `element_type`.
    pub fn list(element_type: AttrType, elements: Vec<Self>) -> Result<Self, ValueError> {
        for (index, element) in elements.iter().enumerate() {
            if *element.attr_type() != element_type {
                return Err(ValueError::ElementType {
                    index,
                    expected: element_type,
                    actual: element.attr_type().clone(),
                });
            }
        }
        Ok(Self {
            attr_type: AttrType::List(Box::new(element_type)),
            state: ValueState::Known(KnownValue::List(elements)),
        })
    }

    /// Returns the attribute type of this value.
    #[must_use]
    pub const fn attr_type(&self) -> &AttrType {
        &self.attr_type
    }

    /// Returns true when the value is null.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self.state, ValueState::Null)
    }

    /// Returns true when the value is unknown.
    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        matches!(self.state, ValueState::Unknown)
    }

    /// Returns true when the value is known.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        matches!(self.state, ValueState::Known(_))
    }

    /// Returns the string payload when the value is a known string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match &self.state {
            ValueState::Known(KnownValue::String(value)) => Some(value),
            ValueState::Null | ValueState::Unknown | ValueState::Known(_) => None,
        }
    }

    /// Returns the boolean payload when the value is a known boolean.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match &self.state {
            ValueState::Known(KnownValue::Bool(value)) => Some(*value),
            ValueState::Null | ValueState::Unknown | ValueState::Known(_) => None,
        }
    }

    /// Returns the elements when the value is a known list.
    #[must_use]
    pub fn as_elements(&self) -> Option<&[AttrValue]> {
        match &self.state {
            ValueState::Known(KnownValue::List(elements)) => Some(elements),
            ValueState::Null | ValueState::Unknown | ValueState::Known(_) => None,
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::string(value)
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::string(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::boolean(value)
    }
}
