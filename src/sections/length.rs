//! Length section - checks password minimum length.

/// Minimum number of characters for the `length` rule.
pub const MIN_LENGTH: usize = 8;

/// Checks if the password has at least [`MIN_LENGTH`] characters.
///
/// Characters are Unicode scalar values, not bytes.
pub fn has_min_length(password: &str) -> bool {
    password.chars().count() >= MIN_LENGTH
}
