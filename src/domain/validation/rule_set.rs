//! Ordered rule list bound to a single field.

use super::rules::{Rule, RuleResult};
use crate::domain::entities::Field;

/// The rules applied to one field, in evaluation order.
///
/// Evaluation stops at the first failing rule, so rules placed later (such as
/// a network probe) only run on values that passed the earlier ones.
pub struct RuleSet {
    field: Field,
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new(field: Field) -> Self {
        Self {
            field,
            rules: Vec::new(),
        }
    }

    /// Appends a rule to the end of the list.
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn field(&self) -> Field {
        self.field
    }

    /// Names of the rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(Rule::name).collect()
    }

    pub fn has_async_rules(&self) -> bool {
        self.rules.iter().any(Rule::is_async)
    }

    /// Runs every rule, awaiting asynchronous ones.
    pub async fn check(&self, value: &str) -> RuleResult {
        for rule in &self.rules {
            let outcome = match rule {
                Rule::Sync(rule) => rule.check(value),
                Rule::Async(rule) => rule.check(value).await,
            };
            self.trace_failure(rule, &outcome);
            outcome?;
        }
        Ok(())
    }

    /// Runs only the synchronous rules.
    pub fn check_sync(&self, value: &str) -> RuleResult {
        for rule in &self.rules {
            if let Rule::Sync(sync_rule) = rule {
                let outcome = sync_rule.check(value);
                self.trace_failure(rule, &outcome);
                outcome?;
            }
        }
        Ok(())
    }

    fn trace_failure(&self, rule: &Rule, outcome: &RuleResult) {
        if let Err(message) = outcome {
            tracing::trace!(field = %self.field, rule = rule.name(), %message, "rule failed");
        }
    }
}
