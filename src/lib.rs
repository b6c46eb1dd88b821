//! Rule-based password strength evaluation library
//!
//! A password is checked against an ordered set of composition rules. The
//! result carries the outcome of every rule, the number of rules passed
//! (the score) and a strength label derived from the score.
//!
//! # Features
//!
//! - `async` (default): Enables a debounced, cancellable channel-based driver
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_rules::{default_rule_set, evaluate, StrengthLabel};
//! use secrecy::SecretString;
//!
//! let rules = default_rule_set();
//! let password = SecretString::new("Password1".to_string().into());
//!
//! let evaluation = evaluate(&password, &rules);
//!
//! assert_eq!(evaluation.score, 4);
//! assert_eq!(evaluation.label, StrengthLabel::VeryStrong);
//! for outcome in &evaluation.outcomes {
//!     println!("{} {}", if outcome.passed { "✓" } else { "✗" }, outcome.description);
//! }
//! ```

// Internal modules
mod evaluator;
mod rules;
mod sections;
mod types;

#[cfg(test)]
mod properties;

// Public API
pub use evaluator::{evaluate, evaluate_default};
pub use rules::{Rule, RuleSet, RuleSetBuilder, RuleSetError, default_rule_set};
pub use sections::{
    MIN_LENGTH, SPECIAL_CHARACTERS, has_digit, has_lowercase, has_min_length, has_special,
    has_uppercase,
};
pub use types::{EvaluationResult, RuleOutcome, StrengthLabel};

#[cfg(feature = "async")]
pub use evaluator::evaluate_tx;
