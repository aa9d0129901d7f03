// crates/mailgate-schema/src/lib.rs
// ============================================================================
// Module: Mailgate Schema Helpers Library
// Description: Public API surface for the Mailgate provider helper layer.
// Purpose: Expose value translation tables, the description catalog, and
//          attribute conversion helpers.
// Dependencies: crate::{convert, descriptions, labels}
// ============================================================================

//! ## Overview
//! Mailgate schema helpers back the resource and data source schemas of the
//! Mailgate provider. They translate coded API values into display labels,
//! supply schema documentation text, and adapt plain strings to the tri-state
//! attribute values used by the provider framework. The crate holds no client
//! or lifecycle logic; those layers consume it.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod convert;
pub mod descriptions;
pub mod labels;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use convert::ConvertError;
pub use convert::map_to_json;
pub use convert::or_empty;
pub use convert::plain_strings;
pub use convert::string_list;
pub use convert::string_value;
pub use convert::typed_strings;
pub use descriptions::DescriptionEntry;
pub use labels::FlagTable;
pub use labels::LabelTable;
pub use labels::OWNER_TYPES;
pub use labels::REQUEST_OPTION_TYPES;
pub use labels::REQUIRED_FLAGS;
pub use labels::ROLE_TYPES;
pub use labels::SHOW_ON_CONTEXTS;
