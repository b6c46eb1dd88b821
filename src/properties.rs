//! Property-based tests for the evaluator.
//!
//! These tests use proptest to verify invariants around:
//! - One outcome per rule, in rule set order
//! - Score and label consistency
//! - Determinism
//! - Appending characters never lowering the score

use crate::evaluator::{evaluate, evaluate_default};
use crate::rules::{RuleSet, default_rule_set};
use crate::sections::SPECIAL_CHARACTERS;
use crate::types::StrengthLabel;
use proptest::prelude::*;
use secrecy::SecretString;

fn secret(pwd: &str) -> SecretString {
    SecretString::new(pwd.to_string().into())
}

/// Strategy mixing the reference classes with arbitrary unicode.
fn arb_password() -> impl Strategy<Value = String> {
    prop_oneof![
        any::<String>(),
        prop::string::string_regex("[a-zA-Z0-9]{0,24}").unwrap(),
        prop::collection::vec(
            prop_oneof![
                prop::char::range('a', 'z'),
                prop::char::range('A', 'Z'),
                prop::char::range('0', '9'),
                prop::sample::select(SPECIAL_CHARACTERS.chars().collect::<Vec<_>>()),
                any::<char>(),
            ],
            0..32,
        )
        .prop_map(|chars: Vec<char>| chars.into_iter().collect::<String>()),
    ]
}

/// Strategy for custom rule sets of 1..=8 character-membership rules.
fn arb_rule_set() -> impl Strategy<Value = RuleSet> {
    prop::collection::vec(any::<char>(), 1..=8).prop_map(|chars| {
        chars
            .into_iter()
            .enumerate()
            .fold(RuleSet::builder(), |builder, (i, c)| {
                builder.rule(format!("has_{i}"), format!("Contains {c:?}"), move |p| {
                    p.contains(c)
                })
            })
            .build()
            .expect("keys are unique by construction")
    })
}

proptest! {
    #[test]
    fn one_outcome_per_rule_in_order(pwd in arb_password()) {
        let rules = default_rule_set();
        let evaluation = evaluate(&secret(&pwd), &rules);

        let keys: Vec<_> = evaluation.outcomes.iter().map(|o| o.key.as_str()).collect();
        let expected: Vec<_> = rules.keys().collect();
        prop_assert_eq!(keys, expected);
    }

    #[test]
    fn score_counts_passed_rules(pwd in arb_password()) {
        let evaluation = evaluate_default(&secret(&pwd));

        let passed = evaluation.outcomes.iter().filter(|o| o.passed).count();
        prop_assert_eq!(evaluation.score, passed);
        prop_assert!(evaluation.score <= evaluation.rule_count());
        prop_assert_eq!(evaluation.label, StrengthLabel::from_score(evaluation.score));
    }

    #[test]
    fn evaluation_is_deterministic(pwd in arb_password()) {
        let first = evaluate_default(&secret(&pwd));
        let second = evaluate_default(&secret(&pwd));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn appending_never_lowers_score(pwd in arb_password(), c in any::<char>()) {
        let before = evaluate_default(&secret(&pwd));

        let mut longer = pwd.clone();
        longer.push(c);
        let after = evaluate_default(&secret(&longer));

        prop_assert!(after.score >= before.score);
        prop_assert!(after.label >= before.label);
    }

    #[test]
    fn custom_rule_sets_keep_invariants(rules in arb_rule_set(), pwd in arb_password()) {
        let evaluation = evaluate(&secret(&pwd), &rules);

        prop_assert_eq!(evaluation.rule_count(), rules.len());
        prop_assert!(evaluation.score <= rules.len());
        for (outcome, rule) in evaluation.outcomes.iter().zip(rules.iter()) {
            prop_assert_eq!(outcome.key.as_str(), rule.key());
            prop_assert_eq!(outcome.passed, rule.check(&pwd));
        }
        let progress = evaluation.progress();
        prop_assert!((0.0..=1.0).contains(&progress));
    }
}
