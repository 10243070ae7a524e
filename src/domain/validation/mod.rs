//! Submission-time validation.
//!
//! Validation is built from small named rule objects ([`rules`]) arranged into
//! ordered per-field lists ([`rule_set::RuleSet`]). [`schema::PitchSchema`]
//! holds the fixed rule lists of the pitch form and produces an
//! [`crate::domain::entities::ErrorSet`] for a whole record.

pub mod rule_set;
pub mod rules;
pub mod schema;

pub use rule_set::RuleSet;
pub use rules::{AsyncRule, Rule, RuleResult, SyncRule};
pub use schema::PitchSchema;
