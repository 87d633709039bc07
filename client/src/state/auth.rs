//! Persisted auth flag for the current browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server issues no token. A successful password check is remembered by
//! writing `"true"` under [`AUTH_FLAG_KEY`] in localStorage, and the route
//! guard trusts that value unconditionally. Anything else, including a
//! failed storage read, means "not authenticated".

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::util::storage;

pub const AUTH_FLAG_KEY: &str = "imagen_authenticated";
const AUTH_FLAG_TRUE: &str = "true";

/// Interpret a raw stored value. Only the exact string `"true"` counts.
pub fn is_authenticated_value(raw: Option<&str>) -> bool {
    raw == Some(AUTH_FLAG_TRUE)
}

/// Read the flag from localStorage. Always `false` outside the browser.
pub fn read_auth_flag() -> bool {
    is_authenticated_value(storage::load_raw(AUTH_FLAG_KEY).as_deref())
}

/// Record a successful password check.
pub fn mark_authenticated() {
    storage::save_raw(AUTH_FLAG_KEY, AUTH_FLAG_TRUE);
}

/// Forget a prior password check (logout).
pub fn clear_authenticated() {
    storage::remove(AUTH_FLAG_KEY);
}
