//! Length section - checks password minimum length.

use secrecy::{ExposeSecret, SecretString};
use super::{RuleCheck, SectionResult};
use crate::policy::PasswordPolicy;
use crate::types::Rule;

/// Checks the password against the policy minimum length.
///
/// Length counts Unicode scalar values, not bytes.
pub fn length_section(password: &SecretString, policy: &PasswordPolicy) -> SectionResult {
    let len = password.expose_secret().chars().count();
    vec![RuleCheck::new(Rule::Length, len >= policy.min_length)]
}
