//! Password policy evaluation library
//!
//! Checks a candidate password against a configurable policy and reports
//! which rules are unmet, an overall verdict, a 0-100 score and a coarse
//! strength tier, so a UI can render a requirement checklist and a
//! strength meter without duplicating rule logic.
//!
//! # Features
//!
//! - `async`: Enables debounced evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//! - `serde`: Serialize the result types
//!
//! # Environment Variables
//!
//! Read by [`PasswordPolicy::from_env`]:
//!
//! - `PWD_MIN_LENGTH` (default: 8)
//! - `PWD_REQUIRE_LOWERCASE`, `PWD_REQUIRE_UPPERCASE`, `PWD_REQUIRE_DIGIT`,
//!   `PWD_REQUIRE_SPECIAL` (default: true)
//! - `PWD_BLACKLIST_PATH`: optional common-password list, one per line
//!
//! # Example
//!
//! ```rust
//! use pwd_policy::{evaluate_password, PasswordPolicy, Rule, Strength};
//! use secrecy::SecretString;
//!
//! let policy = PasswordPolicy::default();
//! let password = SecretString::new("Abcdef1!".to_string().into());
//!
//! let result = evaluate_password(&password, &policy);
//! assert!(result.is_valid);
//! assert_eq!(result.strength, Strength::High);
//!
//! let weak = SecretString::new("aaaaaaaa".to_string().into());
//! let result = evaluate_password(&weak, &policy);
//! assert_eq!(result.errors, vec![Rule::Uppercase, Rule::Digit, Rule::Special]);
//! ```

// Internal modules
mod blacklist;
mod evaluator;
mod policy;
mod sections;
mod types;

// Public API
pub use blacklist::{Blacklist, BlacklistError};
pub use evaluator::{describe, evaluate_password, evaluate_password_default, requirements};
pub use policy::{default_policy, PasswordPolicy, PolicyError, DEFAULT_MIN_LENGTH};
pub use sections::SPECIAL_CHARACTERS;
pub use types::{Requirement, Rule, Score, ScoreOutOfRange, Strength, ValidationResult};

#[cfg(feature = "async")]
pub use evaluator::{evaluate_password_tx, DEBOUNCE};
