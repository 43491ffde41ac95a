//! Password policy evaluator - main evaluation logic.

use secrecy::SecretString;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::policy::PasswordPolicy;
use crate::sections::{run_sections, SPECIAL_CHARACTERS};
use crate::types::{Requirement, Rule, Score, Strength, ValidationResult};

/// Delay before a keystroke-triggered evaluation runs.
#[cfg(feature = "async")]
pub const DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

/// Evaluates a password against a policy.
///
/// The score is the share of enabled rules that pass, scaled to 0..=100
/// with every rule weighted equally. Unmet rules are listed in canonical
/// order. Pure: the same inputs always produce the same result.
///
/// # Arguments
/// * `password` - The password to evaluate
/// * `policy` - Rules to check; `min_length` must be at least 1
pub fn evaluate_password(password: &SecretString, policy: &PasswordPolicy) -> ValidationResult {
    debug_assert!(policy.min_length >= 1, "policy min_length must be at least 1");

    let checks = run_sections(password, policy);

    let enabled = checks.len();
    let errors: Vec<Rule> = checks
        .iter()
        .filter(|check| !check.satisfied)
        .map(|check| check.rule)
        .collect();

    let score = Score::from_ratio(enabled - errors.len(), enabled);

    ValidationResult {
        is_valid: errors.is_empty(),
        errors,
        strength: Strength::from(score),
        score,
    }
}

/// Evaluates a password against the shared default policy.
pub fn evaluate_password_default(password: &SecretString) -> ValidationResult {
    evaluate_password(password, crate::policy::default_policy())
}

/// Builds the requirement checklist for display.
///
/// One entry per enabled rule, in canonical order.
pub fn requirements(password: &SecretString, policy: &PasswordPolicy) -> Vec<Requirement> {
    run_sections(password, policy)
        .into_iter()
        .map(|check| Requirement {
            description: describe(check.rule, policy),
            satisfied: check.satisfied,
        })
        .collect()
}

/// Human-readable description of a rule under a policy.
pub fn describe(rule: Rule, policy: &PasswordPolicy) -> String {
    match rule {
        Rule::Length => format!("At least {} characters", policy.min_length),
        Rule::Lowercase => "At least one lowercase letter".to_string(),
        Rule::Uppercase => "At least one uppercase letter".to_string(),
        Rule::Digit => "At least one number".to_string(),
        Rule::Special => format!("At least one special character ({})", SPECIAL_CHARACTERS),
        Rule::Common => "Not a commonly used password".to_string(),
    }
}

/// Debounced evaluation that sends the result via channel.
///
/// Waits [`DEBOUNCE`] before evaluating. If `token` is cancelled first,
/// typically because a newer keystroke superseded this one, nothing is sent.
#[cfg(feature = "async")]
pub async fn evaluate_password_tx(
    password: &SecretString,
    policy: &PasswordPolicy,
    token: CancellationToken,
    tx: mpsc::Sender<ValidationResult>,
) {
    #[cfg(feature = "tracing")]
    tracing::debug!("evaluation is about to start...");

    tokio::select! {
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("evaluation cancelled before debounce elapsed");
            return;
        }
        _ = tokio::time::sleep(DEBOUNCE) => {}
    }

    let result = evaluate_password(password, policy);

    if let Err(_e) = tx.send(result).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password validation result: {}", _e);
    }
}
