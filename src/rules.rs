//! Rule set management module
//!
//! Builds and validates the ordered collection of rules the evaluator applies.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

use crate::sections::{
    SectionFn, has_digit, has_lowercase, has_min_length, has_special, has_uppercase,
};

type Predicate = Arc<dyn Fn(&str) -> bool + Send + Sync>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleSetError {
    #[error("Rule set must contain at least one rule")]
    Empty,
    #[error("Duplicate rule key: {0}")]
    DuplicateKey(String),
    #[error("Unknown rule key: {0}")]
    UnknownKey(String),
}

/// A named password predicate with its display text.
#[derive(Clone)]
pub struct Rule {
    key: String,
    description: String,
    predicate: Predicate,
}

impl Rule {
    pub fn new<F>(key: impl Into<String>, description: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self {
            key: key.into(),
            description: description.into(),
            predicate: Arc::new(predicate),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Applies the predicate to `password`.
    pub fn check(&self, password: &str) -> bool {
        (self.predicate)(password)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("key", &self.key)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// Ordered, immutable collection of rules.
///
/// Iteration order is the display order and is preserved by every evaluation.
/// A `RuleSet` is never empty and never holds two rules with the same key.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Arc<[Rule]>,
}

impl RuleSet {
    /// Creates a rule set from `rules`, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - `rules` is empty
    /// - two rules share a key
    pub fn new(rules: Vec<Rule>) -> Result<Self, RuleSetError> {
        if rules.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::warn!("Rule set rejected: no rules");
            return Err(RuleSetError::Empty);
        }

        let mut seen = HashSet::with_capacity(rules.len());
        for rule in &rules {
            if !seen.insert(rule.key.as_str()) {
                #[cfg(feature = "tracing")]
                tracing::warn!("Rule set rejected: duplicate key {}", rule.key);
                return Err(RuleSetError::DuplicateKey(rule.key.clone()));
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!("Rule set built with {} rules", rules.len());

        Ok(Self {
            rules: rules.into(),
        })
    }

    pub fn builder() -> RuleSetBuilder {
        RuleSetBuilder::default()
    }

    /// Returns a copy with the description of `key` replaced.
    ///
    /// ```rust
    /// let rules = pwd_rules::default_rule_set()
    ///     .with_description("length", "Almeno 8 caratteri")
    ///     .unwrap();
    /// assert_eq!(rules.get("length").unwrap().description(), "Almeno 8 caratteri");
    /// ```
    pub fn with_description(
        &self,
        key: &str,
        description: impl Into<String>,
    ) -> Result<Self, RuleSetError> {
        let idx = self
            .rules
            .iter()
            .position(|r| r.key == key)
            .ok_or_else(|| RuleSetError::UnknownKey(key.to_string()))?;

        let mut rules = self.rules.to_vec();
        rules[idx].description = description.into();
        Ok(Self {
            rules: rules.into(),
        })
    }

    pub fn get(&self, key: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.key == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|r| r.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Always `false` for a constructed rule set.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        default_rule_set()
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

/// Accumulates rules in insertion order; validation happens in [`RuleSetBuilder::build`].
#[derive(Debug, Default)]
pub struct RuleSetBuilder {
    rules: Vec<Rule>,
}

impl RuleSetBuilder {
    pub fn rule<F>(
        mut self,
        key: impl Into<String>,
        description: impl Into<String>,
        predicate: F,
    ) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.rules.push(Rule::new(key, description, predicate));
        self
    }

    pub fn push(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn build(self) -> Result<RuleSet, RuleSetError> {
        RuleSet::new(self.rules)
    }
}

const REFERENCE_RULES: [(&str, &str, SectionFn); 5] = [
    ("length", "At least 8 characters", has_min_length),
    ("number", "Contains a number", has_digit),
    ("lowercase", "Contains a lowercase letter", has_lowercase),
    ("uppercase", "Contains an uppercase letter", has_uppercase),
    ("special", "Contains a special character", has_special),
];

/// Returns the reference rule set: `length`, `number`, `lowercase`,
/// `uppercase`, `special`, in that order.
pub fn default_rule_set() -> RuleSet {
    let rules = REFERENCE_RULES
        .iter()
        .map(|&(key, description, predicate)| Rule::new(key, description, predicate))
        .collect::<Vec<_>>();
    RuleSet {
        rules: rules.into(),
    }
}
