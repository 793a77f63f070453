//! Declarative validation for inline-edited rows.
//!
//! Rules are data: a named table of predicate/message pairs. The caller picks
//! which rule names apply and every one of them runs against the same
//! candidate, so rules that look across fields or across the collection see a
//! consistent snapshot.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

type Predicate<'a, T> = Box<dyn Fn(&T) -> bool + Send + Sync + 'a>;
type Message<'a, T> = Box<dyn Fn(&T) -> String + Send + Sync + 'a>;

/// A single validation rule.
pub struct Rule<'a, T> {
    predicate: Predicate<'a, T>,
    message: Message<'a, T>,
}

impl<'a, T> Rule<'a, T> {
    /// Create a rule from a predicate and a message builder.
    pub fn new<P, M>(predicate: P, message: M) -> Self
    where
        P: Fn(&T) -> bool + Send + Sync + 'a,
        M: Fn(&T) -> String + Send + Sync + 'a,
    {
        Self {
            predicate: Box::new(predicate),
            message: Box::new(message),
        }
    }

    /// Check the candidate.
    pub fn passes(&self, candidate: &T) -> bool {
        (self.predicate)(candidate)
    }

    /// Message shown when the candidate fails.
    pub fn message(&self, candidate: &T) -> String {
        (self.message)(candidate)
    }
}

impl<T> std::fmt::Debug for Rule<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Rule")
    }
}

/// Named validation rules for one entity type.
#[derive(Debug)]
pub struct RuleSet<'a, T> {
    rules: BTreeMap<&'static str, Rule<'a, T>>,
}

impl<T> Default for RuleSet<'_, T> {
    fn default() -> Self {
        Self {
            rules: BTreeMap::new(),
        }
    }
}

impl<'a, T> RuleSet<'a, T> {
    /// Create an empty rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style method to add a rule. A rule with the same name is
    /// replaced.
    pub fn with_rule(mut self, name: &'static str, rule: Rule<'a, T>) -> Self {
        self.rules.insert(name, rule);
        self
    }

    /// Get a rule by name.
    pub fn get(&self, name: &str) -> Option<&Rule<'a, T>> {
        self.rules.get(name)
    }

    /// Names of all rules, sorted.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.keys().copied()
    }

    /// Run the named rules against one candidate.
    ///
    /// Names this set does not define are skipped.
    pub fn evaluate(&self, candidate: &T, active: &[&str]) -> ValidationResult {
        let mut seen = BTreeSet::new();
        let failures = active
            .iter()
            .filter(|name| seen.insert(**name))
            .filter_map(|name| self.rules.get_key_value(*name))
            .filter(|(_, rule)| !rule.passes(candidate))
            .map(|(name, rule)| RuleFailure {
                rule: (*name).to_string(),
                message: rule.message(candidate),
            })
            .collect();

        ValidationResult { failures }
    }

    /// Run every rule in the set.
    pub fn evaluate_all(&self, candidate: &T) -> ValidationResult {
        let names: Vec<&str> = self.names().collect();
        self.evaluate(candidate, &names)
    }
}

/// A rule that rejected the candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleFailure {
    /// Rule name
    pub rule: String,
    /// Message built from the candidate
    pub message: String,
}

/// Outcome of validating one candidate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// Failed rules, in evaluation order
    pub failures: Vec<RuleFailure>,
}

impl ValidationResult {
    /// True when no rule failed. This is the only gate for saving.
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }

    /// Names of the failed rules.
    pub fn failing_rule_names(&self) -> BTreeSet<&str> {
        self.failures.iter().map(|f| f.rule.as_str()).collect()
    }

    /// Check if a rule failed.
    pub fn is_failing(&self, rule: &str) -> bool {
        self.failures.iter().any(|f| f.rule == rule)
    }

    /// Messages for the failed rules among `rules`, in the order given.
    pub fn render_errors(&self, rules: &[&str]) -> Vec<String> {
        rules
            .iter()
            .filter_map(|name| self.failures.iter().find(|f| f.rule == *name))
            .map(|f| f.message.clone())
            .collect()
    }
}
