//! Validation helper functions for configuration types.

use crate::core::errors::{Result, SimHashError};

/// Validate that no entry of a string collection is empty.
pub fn validate_non_empty_entries<'a, I>(entries: I, field: &str) -> Result<()>
where
    I: IntoIterator<Item = &'a String>,
{
    if entries.into_iter().any(|entry| entry.is_empty()) {
        return Err(SimHashError::validation_field(
            format!("Empty entry in {}", field),
            field,
        ));
    }
    Ok(())
}

/// Collect entries that contain upper-case characters, sorted for stable output.
pub fn uppercase_entries<'a, I>(entries: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a String>,
{
    let mut offending: Vec<&str> = entries
        .into_iter()
        .filter(|entry| entry.chars().any(char::is_uppercase))
        .map(String::as_str)
        .collect();
    offending.sort_unstable();
    offending
}
