//! Character variety section - checks for lowercase, uppercase, digits, special chars.

use secrecy::{ExposeSecret, SecretString};
use super::{RuleCheck, SectionResult};
use crate::policy::PasswordPolicy;
use crate::types::Rule;

/// Characters accepted by the `special` rule.
pub const SPECIAL_CHARACTERS: &str = r#"!@#$%^&*(),.?":{}|<>"#;

/// Checks each character class the policy requires.
pub fn character_variety_section(password: &SecretString, policy: &PasswordPolicy) -> SectionResult {
    let pwd = password.expose_secret();

    let classes = [
        (Rule::Lowercase, policy.require_lowercase),
        (Rule::Uppercase, policy.require_uppercase),
        (Rule::Digit, policy.require_digit),
        (Rule::Special, policy.require_special_char),
    ];

    classes
        .into_iter()
        .filter(|(_, required)| *required)
        .map(|(rule, _)| RuleCheck::new(rule, pwd.chars().any(|c| matches_class(rule, c))))
        .collect()
}

fn matches_class(rule: Rule, c: char) -> bool {
    match rule {
        Rule::Lowercase => c.is_lowercase(),
        Rule::Uppercase => c.is_uppercase(),
        Rule::Digit => c.is_ascii_digit(),
        Rule::Special => SPECIAL_CHARACTERS.contains(c),
        Rule::Length | Rule::Common => false,
    }
}
