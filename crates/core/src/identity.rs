//! Display identity for user accounts.

/// Name shown for a user account: the profile's full name, or the raw
/// username when the profile has no (non-blank) full name.
pub fn display_name(full_name: Option<&str>, username: &str) -> String {
    match full_name.map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => username.to_string(),
    }
}
