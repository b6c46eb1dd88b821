//! Reference rule predicates
//!
//! Each section tests one composition aspect of a password. Sections are
//! independent and never short-circuit each other.

mod length;
mod special;
mod variety;

pub use length::{MIN_LENGTH, has_min_length};
pub use special::{SPECIAL_CHARACTERS, has_special};
pub use variety::{has_digit, has_lowercase, has_uppercase};

/// Signature shared by all reference predicates.
pub type SectionFn = fn(&str) -> bool;
