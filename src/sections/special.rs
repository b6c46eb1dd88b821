//! Special character section - checks for a symbol from a fixed ASCII set.

/// Characters accepted by the `special` rule.
pub const SPECIAL_CHARACTERS: &str = r#"!@#$%^&*()_+-=[]{};':"\|,.<>/?"#;

/// Checks if the password contains at least one of [`SPECIAL_CHARACTERS`].
pub fn has_special(password: &str) -> bool {
    password.chars().any(|c| SPECIAL_CHARACTERS.contains(c))
}
