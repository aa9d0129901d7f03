// crates/mailgate-schema/src/labels.rs
// ============================================================================
// Module: Mailgate Value Translation Tables
// Description: Fixed mappings from coded API values to display labels.
// Purpose: Present raw Mailgate enum codes as human-readable strings.
// Dependencies: none
// ============================================================================

//! ## Overview
//! The Mailgate API returns several enumerations as short coded strings,
//! usually stringified small integers. The tables here translate those codes
//! into display labels for provider state and documentation. Label tables
//! pass unmapped codes through unchanged; the boolean flag table is strict
//! and leaves the missing-code fallback to the caller. The two policies are
//! intentionally different and must not be unified.

// ============================================================================
// SECTION: Label Tables
// ============================================================================

/// Immutable table of coded API values and their display labels.
///
/// # Invariants
/// - Codes are unique within a table.
/// - Entries never change after initialization; lookups are read-only.
#[derive(Debug, Clone, Copy)]
pub struct LabelTable {
    /// Stable table name for diagnostics.
    name: &'static str,
    /// Code and label pairs in API declaration order.
    entries: &'static [(&'static str, &'static str)],
}

impl LabelTable {
    /// Returns the stable table name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Translates a code into its display label.
    ///
    /// The empty code short-circuits to the empty string before lookup, even
    /// when the table carries an explicit `""` entry. A mapped code returns
    /// its label; an unmapped code passes through unchanged.
    #[must_use]
    pub fn label<'a>(&self, code: &'a str) -> &'a str {
        if code.is_empty() {
            return "";
        }
        self.entries
            .iter()
            .find(|entry| entry.0 == code)
            .map_or(code, |entry| entry.1)
    }
}

// ============================================================================
// SECTION: Flag Tables
// ============================================================================

/// Immutable table of coded API values and their boolean meanings.
///
/// # Invariants
/// - Codes are unique within a table.
/// - Unmapped codes have no defined fallback; callers choose their own.
#[derive(Debug, Clone, Copy)]
pub struct FlagTable {
    /// Stable table name for diagnostics.
    name: &'static str,
    /// Code and flag pairs in API declaration order.
    entries: &'static [(&'static str, bool)],
}

impl FlagTable {
    /// Returns the stable table name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Looks up the flag for a code.
    ///
    /// Unlike [`LabelTable::label`], this lookup is strict: unmapped codes
    /// return `None` and the caller decides the fallback.
    #[must_use]
    pub fn flag(&self, code: &str) -> Option<bool> {
        self.entries.iter().find(|entry| entry.0 == code).map(|entry| entry.1)
    }
}

// ============================================================================
// SECTION: Mailgate Tables
// ============================================================================

/// Ownership classes for Mailgate sender domains.
pub const OWNER_TYPES: LabelTable = LabelTable {
    name: "owner_type",
    entries: &[("", ""), ("1", "System"), ("2", "Account"), ("3", "Delegated")],
};

/// Sending roles for Mailgate message streams.
pub const ROLE_TYPES: LabelTable = LabelTable {
    name: "role_type",
    entries: &[("1", "Promotional"), ("2", "Transactional"), ("3", "Notification")],
};

/// Input kinds for Mailgate subscription form fields.
pub const REQUEST_OPTION_TYPES: LabelTable = LabelTable {
    name: "request_option_type",
    entries: &[
        ("", ""),
        ("1", "Dropdown"),
        ("2", "Checkbox"),
        ("3", "Radio"),
        ("4", "Multi-select"),
    ],
};

/// Display contexts for Mailgate subscription form fields.
pub const SHOW_ON_CONTEXTS: LabelTable = LabelTable {
    name: "show_on",
    entries: &[
        ("", ""),
        ("1", "Signup form"),
        ("2", "Preference center"),
        ("3", "Unsubscribe page"),
    ],
};

/// Required markers for Mailgate subscription form fields.
pub const REQUIRED_FLAGS: FlagTable = FlagTable {
    name: "required",
    entries: &[("", false), ("0", false), ("1", true)],
};
