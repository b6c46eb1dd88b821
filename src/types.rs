//! Result types produced by the evaluator.

use std::fmt;

/// Strength category derived from the number of satisfied rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StrengthLabel {
    VeryWeak,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl StrengthLabel {
    /// Maps a score to its label.
    ///
    /// | score | label       |
    /// |-------|-------------|
    /// | 0     | Very Weak   |
    /// | 1     | Weak        |
    /// | 2     | Medium      |
    /// | 3     | Strong      |
    /// | 4+    | Very Strong |
    ///
    /// Scores 4 and 5 intentionally share a label. Anything above 5 (custom
    /// rule sets with more rules) saturates to `VeryStrong`.
    pub fn from_score(score: usize) -> Self {
        match score {
            0 => StrengthLabel::VeryWeak,
            1 => StrengthLabel::Weak,
            2 => StrengthLabel::Medium,
            3 => StrengthLabel::Strong,
            _ => StrengthLabel::VeryStrong,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLabel::VeryWeak => "Very Weak",
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Medium => "Medium",
            StrengthLabel::Strong => "Strong",
            StrengthLabel::VeryStrong => "Very Strong",
        }
    }

    /// Kebab-case class name a UI can attach to the label.
    pub fn css_class(&self) -> &'static str {
        match self {
            StrengthLabel::VeryWeak => "very-weak",
            StrengthLabel::Weak => "weak",
            StrengthLabel::Medium => "medium",
            StrengthLabel::Strong => "strong",
            StrengthLabel::VeryStrong => "very-strong",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a single rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
    pub key: String,
    pub description: String,
    pub passed: bool,
}

/// Result of one evaluation: per-rule outcomes, score and label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationResult {
    /// One entry per rule, in rule set order.
    pub outcomes: Vec<RuleOutcome>,
    pub score: usize,
    pub label: StrengthLabel,
}

impl EvaluationResult {
    pub(crate) fn from_outcomes(outcomes: Vec<RuleOutcome>) -> Self {
        let score = outcomes.iter().filter(|o| o.passed).count();
        Self {
            outcomes,
            score,
            label: StrengthLabel::from_score(score),
        }
    }

    /// Returns whether the rule `key` passed, or `None` if no such rule was evaluated.
    pub fn passed(&self, key: &str) -> Option<bool> {
        self.outcomes
            .iter()
            .find(|o| o.key == key)
            .map(|o| o.passed)
    }

    /// Number of rules that were evaluated.
    pub fn rule_count(&self) -> usize {
        self.outcomes.len()
    }

    /// Fraction of rules passed, in `[0.0, 1.0]`.
    pub fn progress(&self) -> f32 {
        if self.outcomes.is_empty() {
            return 0.0;
        }
        self.score as f32 / self.outcomes.len() as f32
    }
}
