//! Queue configuration.

use std::collections::HashSet;

use crate::error::{QueueError, QueueResult};
use crate::priority::Rule;

/// Configuration for a [`Queue`](super::Queue).
///
/// # Examples
///
/// ```
/// use speaklist::priority::Rule;
/// use speaklist::queue::QueueConfig;
///
/// let config = QueueConfig::default()
///     .with_rule(Rule::fit_soft())
///     .with_rule(Rule::first_speaker())
///     .with_auto_prioritize(true);
/// assert_eq!(config.rules.len(), 2);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct QueueConfig {
    /// Active rules, in evaluation order. Each record carries one attribute
    /// per rule, in this order.
    pub rules: Vec<Rule>,
    /// Whether [`Queue::add`](super::Queue::add) and
    /// [`Queue::add_all`](super::Queue::add_all) repair the order afterwards.
    pub auto_prioritize: bool,
    /// Maximum number of full repair passes per
    /// [`Queue::prioritize`](super::Queue::prioritize) call. A pass repairs
    /// every rule once, in order; passes stop early once a pass leaves the
    /// order unchanged. `1` gives a single sequential pass.
    pub max_passes: usize,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            rules: Vec::new(),
            auto_prioritize: false,
            max_passes: 16,
        }
    }
}

impl QueueConfig {
    /// Appends a rule.
    pub fn with_rule(mut self, rule: impl Into<Rule>) -> Self {
        self.rules.push(rule.into());
        self
    }

    /// Appends several rules, in order.
    pub fn with_rules(mut self, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Enables or disables repairing the order after `add`.
    pub fn with_auto_prioritize(mut self, auto: bool) -> Self {
        self.auto_prioritize = auto;
        self
    }

    /// Sets the maximum number of repair passes.
    pub fn with_max_passes(mut self, n: usize) -> Self {
        self.max_passes = n;
        self
    }

    /// Validates the configuration.
    ///
    /// Each rule kind may appear at most once: two rules on the same
    /// attribute would fight over one column.
    pub fn validate(&self) -> QueueResult<()> {
        if self.max_passes == 0 {
            return Err(QueueError::InvalidConfig("max_passes must be at least 1".into()));
        }
        let mut seen = HashSet::new();
        for rule in &self.rules {
            if !seen.insert(rule.name()) {
                return Err(QueueError::DuplicateRule(rule.name().to_owned()));
            }
        }
        Ok(())
    }
}
