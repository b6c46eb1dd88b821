//! Character variety section - checks for digits, lowercase and uppercase letters.
//!
//! Classes are ASCII only: `é` is not a lowercase letter and `٣` is not a digit.

/// Checks if the password contains at least one ASCII digit.
pub fn has_digit(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}

/// Checks if the password contains at least one ASCII lowercase letter.
pub fn has_lowercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_lowercase())
}

/// Checks if the password contains at least one ASCII uppercase letter.
pub fn has_uppercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
}
