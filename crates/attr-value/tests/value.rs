// crates/attr-value/tests/value.rs
// ============================================================================
// Module: Attribute Value Tests
// Description: Tests for tri-state attribute values and checked construction.
// ============================================================================
//! ## Overview
//! Validates tri-state accessors, checked list construction, and stable
//! serialization for attribute values.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use attr_value::AttrType;
use attr_value::AttrValue;
use attr_value::ValueError;

// ============================================================================
// SECTION: Tri-State Accessors
// ============================================================================

/// Tests tri states are mutually exclusive.
#[test]
fn test_tri_states_are_mutually_exclusive() {
    let null = AttrValue::null(AttrType::String);
    let unknown = AttrValue::unknown(AttrType::String);
    let known = AttrValue::string("ok");

    assert!(null.is_null() && !null.is_unknown() && !null.is_known());
    assert!(unknown.is_unknown() && !unknown.is_null() && !unknown.is_known());
    assert!(known.is_known() && !known.is_null() && !known.is_unknown());
}

/// Tests string accessor only yields known strings.
#[test]
fn test_string_accessor_only_yields_known_strings() {
    assert_eq!(AttrValue::string("ok").as_str(), Some("ok"));
    assert_eq!(AttrValue::null(AttrType::String).as_str(), None);
    assert_eq!(AttrValue::unknown(AttrType::String).as_str(), None);
    assert_eq!(AttrValue::boolean(true).as_str(), None);
}

/// Tests boolean accessor only yields known booleans.
#[test]
fn test_boolean_accessor_only_yields_known_booleans() {
    assert_eq!(AttrValue::boolean(true).as_bool(), Some(true));
    assert_eq!(AttrValue::from(false).as_bool(), Some(false));
    assert_eq!(AttrValue::null(AttrType::Bool).as_bool(), None);
    assert_eq!(AttrValue::string("true").as_bool(), None);
}

// ============================================================================
// SECTION: List Construction
// ============================================================================

/// Tests list construction accepts homogeneous elements.
#[test]
fn test_list_construction_accepts_homogeneous_elements() {
    let value = AttrValue::list(
        AttrType::String,
        vec![AttrValue::string("a"), AttrValue::string("b")],
    )
    .unwrap();

    assert_eq!(*value.attr_type(), AttrType::List(Box::new(AttrType::String)));
    let elements = value.as_elements().unwrap();
    assert_eq!(elements.len(), 2);
    assert_eq!(elements[0].as_str(), Some("a"));
}

/// Tests empty list construction is known and not null.
#[test]
fn test_empty_list_is_known_not_null() {
    let value = AttrValue::list(AttrType::String, Vec::new()).unwrap();

    assert!(value.is_known());
    assert!(!value.is_null());
    assert_eq!(value.as_elements(), Some(&[][..]));
}

/// Tests list construction rejects mismatched element types.
#[test]
fn test_list_construction_rejects_mismatched_elements() {
    let error = AttrValue::list(
        AttrType::String,
        vec![AttrValue::string("a"), AttrValue::boolean(true)],
    )
    .unwrap_err();

    assert_eq!(
        error,
        ValueError::ElementType {
            index: 1,
            expected: AttrType::String,
            actual: AttrType::Bool,
        }
    );
}

/// Tests null and unknown elements are rejected unless typed to match.
#[test]
fn test_list_construction_checks_element_types_in_every_state() {
    let typed = AttrValue::list(
        AttrType::String,
        vec![AttrValue::string("a"), AttrValue::null(AttrType::String)],
    );
    assert!(typed.is_ok());

    let mistyped = AttrValue::list(
        AttrType::String,
        vec![AttrValue::null(AttrType::Bool)],
    );
    assert!(mistyped.is_err());
}

// ============================================================================
// SECTION: Serialization
// ============================================================================

/// Tests serde round trip preserves values.
#[test]
fn test_serde_round_trip_preserves_values() {
    let value = AttrValue::list(
        AttrType::String,
        vec![AttrValue::string("a"), AttrValue::unknown(AttrType::String)],
    )
    .unwrap();

    let encoded = serde_json::to_string(&value).unwrap();
    let decoded: AttrValue = serde_json::from_str(&encoded).unwrap();

    assert_eq!(value, decoded);
}

/// Tests type rendering is stable.
#[test]
fn test_type_rendering_is_stable() {
    assert_eq!(AttrType::Bool.to_string(), "bool");
    assert_eq!(AttrType::String.to_string(), "string");
    assert_eq!(AttrType::List(Box::new(AttrType::String)).to_string(), "list<string>");
}
