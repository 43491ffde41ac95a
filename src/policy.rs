//! Password policy and its configuration.

use std::path::PathBuf;
use std::sync::{Arc, LazyLock};
use thiserror::Error;

use crate::blacklist::{Blacklist, BlacklistError};
use crate::types::Rule;

pub const DEFAULT_MIN_LENGTH: usize = 8;

pub const ENV_MIN_LENGTH: &str = "PWD_MIN_LENGTH";
pub const ENV_REQUIRE_LOWERCASE: &str = "PWD_REQUIRE_LOWERCASE";
pub const ENV_REQUIRE_UPPERCASE: &str = "PWD_REQUIRE_UPPERCASE";
pub const ENV_REQUIRE_DIGIT: &str = "PWD_REQUIRE_DIGIT";
pub const ENV_REQUIRE_SPECIAL: &str = "PWD_REQUIRE_SPECIAL";
pub const ENV_BLACKLIST_PATH: &str = "PWD_BLACKLIST_PATH";

static DEFAULT_POLICY: LazyLock<PasswordPolicy> = LazyLock::new(PasswordPolicy::default);

#[derive(Error, Debug)]
pub enum PolicyError {
    #[error("Minimum length must be at least 1, got {0}")]
    InvalidMinLength(usize),
    #[error("Invalid value for {key}: {value:?}")]
    InvalidEnvValue { key: &'static str, value: String },
    #[error(transparent)]
    Blacklist(#[from] BlacklistError),
}

/// Rules a password is checked against.
///
/// The length rule is always enabled. The `common` rule is enabled
/// whenever a blacklist is attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordPolicy {
    pub min_length: usize,
    pub require_lowercase: bool,
    pub require_uppercase: bool,
    pub require_digit: bool,
    pub require_special_char: bool,
    pub blacklist: Option<Arc<Blacklist>>,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            require_lowercase: true,
            require_uppercase: true,
            require_digit: true,
            require_special_char: true,
            blacklist: None,
        }
    }
}

/// Shared process-wide default policy.
pub fn default_policy() -> &'static PasswordPolicy {
    &DEFAULT_POLICY
}

impl PasswordPolicy {
    /// Default character-class requirements with a custom minimum length.
    pub fn new(min_length: usize) -> Result<Self, PolicyError> {
        Self::default().with_min_length(min_length).validated()
    }

    #[must_use]
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    #[must_use]
    pub fn with_lowercase(mut self, required: bool) -> Self {
        self.require_lowercase = required;
        self
    }

    #[must_use]
    pub fn with_uppercase(mut self, required: bool) -> Self {
        self.require_uppercase = required;
        self
    }

    #[must_use]
    pub fn with_digit(mut self, required: bool) -> Self {
        self.require_digit = required;
        self
    }

    #[must_use]
    pub fn with_special_char(mut self, required: bool) -> Self {
        self.require_special_char = required;
        self
    }

    #[must_use]
    pub fn with_blacklist(mut self, blacklist: Arc<Blacklist>) -> Self {
        self.blacklist = Some(blacklist);
        self
    }

    pub fn validate(&self) -> Result<(), PolicyError> {
        if self.min_length == 0 {
            return Err(PolicyError::InvalidMinLength(self.min_length));
        }
        Ok(())
    }

    /// Consumes the policy, returning it only if well-formed.
    pub fn validated(self) -> Result<Self, PolicyError> {
        self.validate()?;
        Ok(self)
    }

    pub fn is_enabled(&self, rule: Rule) -> bool {
        match rule {
            Rule::Length => true,
            Rule::Lowercase => self.require_lowercase,
            Rule::Uppercase => self.require_uppercase,
            Rule::Digit => self.require_digit,
            Rule::Special => self.require_special_char,
            Rule::Common => self.blacklist.is_some(),
        }
    }

    /// Enabled rules in canonical order.
    pub fn enabled_rules(&self) -> impl Iterator<Item = Rule> + '_ {
        Rule::ALL.into_iter().filter(|rule| self.is_enabled(*rule))
    }

    /// Builds a policy from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `PWD_MIN_LENGTH`: minimum length (default: 8)
    /// - `PWD_REQUIRE_LOWERCASE`, `PWD_REQUIRE_UPPERCASE`, `PWD_REQUIRE_DIGIT`,
    ///   `PWD_REQUIRE_SPECIAL`: `true`/`false`, `1`/`0`, `yes`/`no` (default: true)
    /// - `PWD_BLACKLIST_PATH`: blacklist file; when unset no blacklist is used
    ///
    /// Unset variables keep their default.
    ///
    /// # Errors
    ///
    /// Returns error if a variable holds an unparseable value, the
    /// minimum length is 0, or the blacklist file cannot be loaded.
    pub fn from_env() -> Result<Self, PolicyError> {
        let defaults = Self::default();

        let mut policy = Self {
            min_length: env_usize(ENV_MIN_LENGTH)?.unwrap_or(defaults.min_length),
            require_lowercase: env_bool(ENV_REQUIRE_LOWERCASE)?
                .unwrap_or(defaults.require_lowercase),
            require_uppercase: env_bool(ENV_REQUIRE_UPPERCASE)?
                .unwrap_or(defaults.require_uppercase),
            require_digit: env_bool(ENV_REQUIRE_DIGIT)?.unwrap_or(defaults.require_digit),
            require_special_char: env_bool(ENV_REQUIRE_SPECIAL)?
                .unwrap_or(defaults.require_special_char),
            blacklist: None,
        };
        policy.validate()?;

        if let Some(path) = env_var(ENV_BLACKLIST_PATH) {
            let blacklist = Blacklist::from_path(PathBuf::from(path))?;
            policy.blacklist = Some(Arc::new(blacklist));
        }

        #[cfg(feature = "tracing")]
        tracing::info!(
            min_length = policy.min_length,
            rules = policy.enabled_rules().count(),
            "Password policy loaded from environment"
        );

        Ok(policy)
    }
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn env_usize(key: &'static str) -> Result<Option<usize>, PolicyError> {
    env_var(key)
        .map(|value| {
            value
                .trim()
                .parse()
                .map_err(|_| PolicyError::InvalidEnvValue { key, value })
        })
        .transpose()
}

fn env_bool(key: &'static str) -> Result<Option<bool>, PolicyError> {
    env_var(key)
        .map(|value| match value.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" => Ok(true),
            "false" | "0" | "no" => Ok(false),
            _ => Err(PolicyError::InvalidEnvValue { key, value }),
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const ALL_KEYS: [&str; 6] = [
        ENV_MIN_LENGTH,
        ENV_REQUIRE_LOWERCASE,
        ENV_REQUIRE_UPPERCASE,
        ENV_REQUIRE_DIGIT,
        ENV_REQUIRE_SPECIAL,
        ENV_BLACKLIST_PATH,
    ];

    /// Helper to safely set env var in tests
    fn set_env(key: &str, value: &str) {
        // SAFETY: env-touching tests are serialized
        unsafe { std::env::set_var(key, value); }
    }

    fn clear_env() {
        for key in ALL_KEYS {
            // SAFETY: env-touching tests are serialized
            unsafe { std::env::remove_var(key); }
        }
    }

    #[test]
    fn test_default_policy() {
        let policy = PasswordPolicy::default();
        assert_eq!(policy.min_length, 8);
        assert!(policy.require_lowercase);
        assert!(policy.require_uppercase);
        assert!(policy.require_digit);
        assert!(policy.require_special_char);
        assert!(policy.blacklist.is_none());
        assert_eq!(default_policy(), &policy);
    }

    #[test]
    fn test_new_rejects_zero_length() {
        assert!(matches!(
            PasswordPolicy::new(0),
            Err(PolicyError::InvalidMinLength(0))
        ));
        assert_eq!(PasswordPolicy::new(12).unwrap().min_length, 12);
    }

    #[test]
    fn test_enabled_rules_follow_flags() {
        let policy = PasswordPolicy::default()
            .with_lowercase(false)
            .with_special_char(false);
        let rules: Vec<Rule> = policy.enabled_rules().collect();
        assert_eq!(rules, vec![Rule::Length, Rule::Uppercase, Rule::Digit]);
    }

    #[test]
    fn test_blacklist_enables_common_rule() {
        let policy =
            PasswordPolicy::default().with_blacklist(Arc::new(Blacklist::from_entries(["x"])));
        assert!(policy.is_enabled(Rule::Common));
        assert_eq!(policy.enabled_rules().last(), Some(Rule::Common));
    }

    #[test]
    #[serial]
    fn test_from_env_defaults_when_unset() {
        clear_env();
        let policy = PasswordPolicy::from_env().unwrap();
        assert_eq!(policy, PasswordPolicy::default());
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        set_env(ENV_MIN_LENGTH, "12");
        set_env(ENV_REQUIRE_SPECIAL, "false");
        set_env(ENV_REQUIRE_DIGIT, "No");

        let policy = PasswordPolicy::from_env().unwrap();
        assert_eq!(policy.min_length, 12);
        assert!(!policy.require_special_char);
        assert!(!policy.require_digit);
        assert!(policy.require_uppercase);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_values() {
        clear_env();
        set_env(ENV_MIN_LENGTH, "eight");
        assert!(matches!(
            PasswordPolicy::from_env(),
            Err(PolicyError::InvalidEnvValue { key: ENV_MIN_LENGTH, .. })
        ));

        set_env(ENV_MIN_LENGTH, "0");
        assert!(matches!(
            PasswordPolicy::from_env(),
            Err(PolicyError::InvalidMinLength(0))
        ));

        clear_env();
        set_env(ENV_REQUIRE_UPPERCASE, "maybe");
        assert!(matches!(
            PasswordPolicy::from_env(),
            Err(PolicyError::InvalidEnvValue { key: ENV_REQUIRE_UPPERCASE, .. })
        ));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_loads_blacklist() {
        clear_env();
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(temp_file, "password").expect("Failed to write");
        writeln!(temp_file, "qwerty").expect("Failed to write");
        set_env(ENV_BLACKLIST_PATH, temp_file.path().to_str().unwrap());

        let policy = PasswordPolicy::from_env().unwrap();
        let blacklist = policy.blacklist.expect("blacklist should be loaded");
        assert_eq!(blacklist.len(), 2);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_missing_blacklist_file() {
        clear_env();
        set_env(ENV_BLACKLIST_PATH, "/nonexistent/path/blacklist.txt");

        assert!(matches!(
            PasswordPolicy::from_env(),
            Err(PolicyError::Blacklist(BlacklistError::FileNotFound(_)))
        ));

        clear_env();
    }
}
