//! Endpoint templates for the Outline management API.
//!
//! Templates contain named placeholders (e.g. `{keyId}`) that are resolved
//! with [`crate::utils::urls::replace_placeholders`] before the template is
//! appended to the base API URL.

/// Placeholder name for the access-key identifier.
pub const KEY_ID: &str = "keyId";

pub const GET_ACCESS_KEYS: &str = "access-keys";
pub const GET_ACCESS_KEY_BY_ID: &str = "access-keys/{keyId}";
pub const CREATE_ACCESS_KEY: &str = "access-keys";
pub const UPDATE_ACCESS_KEY: &str = "access-keys/{keyId}";
pub const DELETE_ACCESS_KEY: &str = "access-keys/{keyId}";
