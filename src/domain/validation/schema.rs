//! The fixed validation schema of the pitch form.

use std::sync::Arc;

use super::rule_set::RuleSet;
use super::rules::{
    ImageContentType, Length, NoLeadingWhitespace, Rule, SingleSpacesOnly, StartsWithLetter,
    UrlFormat,
};
use crate::domain::entities::{ErrorSet, Field, PitchRecord};
use crate::domain::probe::ContentProbe;

/// Rule sets for every field of the pitch form.
///
/// | Field         | Rules                                                    |
/// |---------------|----------------------------------------------------------|
/// | `title`       | text rules, 3..=100 characters                           |
/// | `description` | text rules, 20..=500 characters                          |
/// | `category`    | text rules, 3..=20 characters                            |
/// | `link`        | absolute URL, remote `content-type: image/*`             |
/// | `pitch`       | text rules, at least 10 characters                       |
///
/// "Text rules" are, in order: no leading whitespace, single spaces only,
/// starts with an ASCII letter.
pub struct PitchSchema {
    rule_sets: Vec<RuleSet>,
}

impl PitchSchema {
    /// Builds the schema, using `probe` for the image link check.
    pub fn new(probe: Arc<dyn ContentProbe>) -> Self {
        let rule_sets = vec![
            text_rules(Field::Title).rule(Rule::sync(Length::between(3, 100))),
            text_rules(Field::Description).rule(Rule::sync(Length::between(20, 500))),
            text_rules(Field::Category).rule(Rule::sync(Length::between(3, 20))),
            RuleSet::new(Field::Link)
                .rule(Rule::sync(UrlFormat))
                .rule(Rule::async_rule(ImageContentType::new(probe))),
            text_rules(Field::Pitch).rule(Rule::sync(
                Length::at_least(10).with_min_message("Pitch must be at least 10 characters"),
            )),
        ];

        Self { rule_sets }
    }

    pub fn rule_set(&self, field: Field) -> Option<&RuleSet> {
        self.rule_sets.iter().find(|set| set.field() == field)
    }

    /// Validates every field of `record`, including the remote image probe.
    ///
    /// Does not stop at the first failing field: the returned set holds one
    /// message for each field that failed.
    pub async fn validate(&self, record: &PitchRecord) -> ErrorSet {
        let mut errors = ErrorSet::new();

        for set in &self.rule_sets {
            if let Err(message) = set.check(record.get(set.field())).await {
                errors.insert(set.field(), message);
            }
        }

        tracing::debug!(failed = errors.len(), "record validated");
        errors
    }

    /// Validates with synchronous rules only, skipping the remote probe.
    ///
    /// Suitable for optimistic checks while the user is still editing; an
    /// empty result does not guarantee [`Self::validate`] will pass.
    pub fn validate_sync(&self, record: &PitchRecord) -> ErrorSet {
        let mut errors = ErrorSet::new();

        for set in &self.rule_sets {
            if let Err(message) = set.check_sync(record.get(set.field())) {
                errors.insert(set.field(), message);
            }
        }

        errors
    }
}

fn text_rules(field: Field) -> RuleSet {
    RuleSet::new(field)
        .rule(Rule::sync(NoLeadingWhitespace))
        .rule(Rule::sync(SingleSpacesOnly))
        .rule(Rule::sync(StartsWithLetter))
}
