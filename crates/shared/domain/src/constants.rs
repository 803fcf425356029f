//! Domain-level constants.
//!
//! Column widths of the persisted schema double as validation ceilings.

// =============================================================================
// Users
// =============================================================================

/// Maximum length of a user's display name
pub const MAX_NAME_LENGTH: u64 = 30;

/// Maximum length of a login
pub const MAX_LOGIN_LENGTH: u64 = 50;

/// Maximum length of an email address
pub const MAX_EMAIL_LENGTH: u64 = 50;

// =============================================================================
// Properties
// =============================================================================

/// Maximum length of a property key
pub const MAX_PROPERTY_KEY_LENGTH: u64 = 25;

/// Maximum length of a property value
pub const MAX_PROPERTY_VALUE_LENGTH: u64 = 30;
