//! Password strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use std::time::Duration;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::rules::{RuleSet, default_rule_set};
use crate::types::{EvaluationResult, RuleOutcome};

/// Evaluates a password against `rules`.
///
/// Every rule is applied in rule set order, without short-circuiting, so the
/// result always carries one outcome per rule. Any input is accepted,
/// including the empty string.
///
/// # Arguments
/// * `password` - The password to evaluate
/// * `rules` - The rules to apply
///
/// # Returns
/// An `EvaluationResult` with per-rule outcomes, score and label.
pub fn evaluate(password: &SecretString, rules: &RuleSet) -> EvaluationResult {
    let pwd = password.expose_secret();

    let outcomes = rules
        .iter()
        .map(|rule| RuleOutcome {
            key: rule.key().to_string(),
            description: rule.description().to_string(),
            passed: rule.check(pwd),
        })
        .collect();

    let result = EvaluationResult::from_outcomes(outcomes);

    #[cfg(feature = "tracing")]
    tracing::trace!(
        score = result.score,
        rules = result.rule_count(),
        label = %result.label,
        "password evaluated"
    );

    result
}

/// Evaluates a password against the reference rule set.
pub fn evaluate_default(password: &SecretString) -> EvaluationResult {
    evaluate(password, &default_rule_set())
}

/// Async version that waits `delay`, then sends the evaluation via channel.
///
/// Nothing is sent if `token` is cancelled before the delay elapses, so a UI
/// can cancel the previous call on every keystroke and only the last input
/// gets evaluated. Once started, an evaluation always runs to completion.
#[cfg(feature = "async")]
pub async fn evaluate_tx(
    password: &SecretString,
    rules: &RuleSet,
    delay: Duration,
    token: CancellationToken,
    tx: mpsc::Sender<EvaluationResult>,
) {
    #[cfg(feature = "tracing")]
    tracing::debug!("evaluation is about to start...");

    tokio::select! {
        biased;
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("evaluation cancelled before start");
            return;
        }
        _ = tokio::time::sleep(delay) => {}
    }

    let evaluation = evaluate(password, rules);

    if let Err(_e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", _e);
    }
}
