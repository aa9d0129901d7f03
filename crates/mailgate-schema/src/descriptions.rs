// crates/mailgate-schema/src/descriptions.rs
// ============================================================================
// Module: Mailgate Schema Description Catalog
// Description: Fixed documentation strings for resource and data source schemas.
// Purpose: Serve schema documentation text without runtime I/O.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Schema builders attach a description to every resource, data source, and
//! attribute they define. The catalog here embeds those strings at compile
//! time and lists them in a deterministic order keyed by slot name.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Serialize;

// ============================================================================
// SECTION: Description Constants
// ============================================================================

/// Description for the provider `api_key` attribute.
pub const API_KEY: &str = "Server API key used to authenticate all Mailgate requests. \
     May also be sourced from the MAILGATE_API_KEY environment variable.";

/// Description for the provider `endpoint` attribute.
pub const ENDPOINT: &str = "Regional API endpoint used for all Mailgate requests. \
     Defaults to the account home region when unset.";

/// Description for the subscription form field resource.
pub const FORM_FIELD: &str = "Custom field collected on Mailgate subscription forms. \
     Fields declare an input kind, the contexts they are shown on, and whether \
     a subscriber must fill them in.";

/// Description for the message stream resource.
pub const MESSAGE_STREAM: &str = "Message stream that groups outgoing Mailgate traffic by \
     sending role, such as transactional or promotional mail.";

/// Description for the sender domain resource.
pub const SENDER_DOMAIN: &str = "Domain verified for sending through Mailgate, including its \
     ownership class and DNS verification records.";

/// Description for the subscriber list resource.
pub const SUBSCRIBER_LIST: &str = "Named list of Mailgate subscribers targeted by broadcast \
     message streams.";

/// Description for the template resource.
pub const TEMPLATE: &str =
    "Reusable Mailgate message template rendered with per-send substitution data.";

/// Description for the webhook resource.
pub const WEBHOOK: &str = "HTTPS endpoint that receives Mailgate delivery, bounce, and \
     subscription events.";

// ============================================================================
// SECTION: Catalog
// ============================================================================

/// Catalog entry tying a documentation slot to its display text.
///
/// # Invariants
/// - `slot` values are unique within the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DescriptionEntry {
    /// Stable slot name used by schema builders.
    pub slot: &'static str,
    /// Display text for the slot.
    pub text: &'static str,
}

/// Full description catalog, ordered ascending by slot name.
const CATALOG: &[DescriptionEntry] = &[
    DescriptionEntry {
        slot: "api_key",
        text: API_KEY,
    },
    DescriptionEntry {
        slot: "endpoint",
        text: ENDPOINT,
    },
    DescriptionEntry {
        slot: "form_field",
        text: FORM_FIELD,
    },
    DescriptionEntry {
        slot: "message_stream",
        text: MESSAGE_STREAM,
    },
    DescriptionEntry {
        slot: "sender_domain",
        text: SENDER_DOMAIN,
    },
    DescriptionEntry {
        slot: "subscriber_list",
        text: SUBSCRIBER_LIST,
    },
    DescriptionEntry {
        slot: "template",
        text: TEMPLATE,
    },
    DescriptionEntry {
        slot: "webhook",
        text: WEBHOOK,
    },
];

/// Returns the full description catalog ordered by slot name.
#[must_use]
pub const fn catalog() -> &'static [DescriptionEntry] {
    CATALOG
}

/// Looks up a description by slot name.
#[must_use]
pub fn description(slot: &str) -> Option<&'static str> {
    CATALOG.iter().find(|entry| entry.slot == slot).map(|entry| entry.text)
}
