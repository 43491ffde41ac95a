//! Password rule sections
//!
//! Each section checks one group of rules and reports an outcome for
//! every rule it covers that the policy enables.

mod blacklist;
mod length;
mod variety;

pub use blacklist::blacklist_section;
pub use length::length_section;
pub use variety::{character_variety_section, SPECIAL_CHARACTERS};

use crate::policy::PasswordPolicy;
use crate::types::Rule;
use secrecy::SecretString;

/// Outcome of a single enabled rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleCheck {
    pub rule: Rule,
    pub satisfied: bool,
}

impl RuleCheck {
    pub fn new(rule: Rule, satisfied: bool) -> Self {
        Self { rule, satisfied }
    }
}

/// Checks reported by a section. Disabled rules are omitted.
pub type SectionResult = Vec<RuleCheck>;

pub type Section = fn(&SecretString, &PasswordPolicy) -> SectionResult;

/// Sections in canonical rule order.
pub const SECTIONS: [(&str, Section); 3] = [
    ("length", length_section),
    ("variety", character_variety_section),
    ("blacklist", blacklist_section),
];

/// Runs every section, returning enabled rule outcomes in canonical order.
pub fn run_sections(password: &SecretString, policy: &PasswordPolicy) -> SectionResult {
    SECTIONS
        .iter()
        .flat_map(|(_section_name, section)| {
            let checks = section(password, policy);
            #[cfg(feature = "tracing")]
            tracing::trace!(
                section = *_section_name,
                unmet = checks.iter().filter(|c| !c.satisfied).count(),
                "section evaluated"
            );
            checks
        })
        .collect()
}
