//! Blacklist section - checks if password is in the common password list.

use secrecy::{ExposeSecret, SecretString};
use super::{RuleCheck, SectionResult};
use crate::policy::PasswordPolicy;
use crate::types::Rule;

/// Checks the password against the policy blacklist, if one is attached.
///
/// An empty password never satisfies this rule.
pub fn blacklist_section(password: &SecretString, policy: &PasswordPolicy) -> SectionResult {
    let Some(blacklist) = policy.blacklist.as_deref() else {
        return Vec::new();
    };
    let pwd = password.expose_secret();
    let satisfied = !pwd.is_empty() && !blacklist.contains(pwd);
    vec![RuleCheck::new(Rule::Common, satisfied)]
}
