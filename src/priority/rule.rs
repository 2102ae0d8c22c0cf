//! Closed set of rules a queue can be configured with.

use super::first_speaker::FirstSpeakerPriority;
use super::fit_soft::FitSoftPriority;
use super::types::{AttributeKind, AttributeValue, Priority};

/// A configured fairness rule.
///
/// Dispatches the [`Priority`] operations over untyped attribute columns.
/// Values of the wrong kind are skipped when a column is projected; the
/// queue rejects them at insertion, so a queue column is always well typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rule {
    /// See [`FirstSpeakerPriority`].
    FirstSpeaker(FirstSpeakerPriority),
    /// See [`FitSoftPriority`].
    FitSoft(FitSoftPriority),
}

impl Rule {
    /// The first-speaker rule.
    pub fn first_speaker() -> Self {
        Rule::FirstSpeaker(FirstSpeakerPriority)
    }

    /// The FIT soft rule.
    pub fn fit_soft() -> Self {
        Rule::FitSoft(FitSoftPriority)
    }

    /// Returns the rule name.
    pub fn name(&self) -> &str {
        match self {
            Rule::FirstSpeaker(p) => p.name(),
            Rule::FitSoft(p) => p.name(),
        }
    }

    /// Returns the attribute kind this rule governs.
    pub fn attribute_kind(&self) -> AttributeKind {
        match self {
            Rule::FirstSpeaker(p) => p.attribute_kind(),
            Rule::FitSoft(p) => p.attribute_kind(),
        }
    }

    /// Whether `value` has the kind this rule governs.
    pub fn accepts(&self, value: &AttributeValue) -> bool {
        value.kind() == self.attribute_kind()
    }

    /// See [`Priority::is_valid_list`].
    pub fn is_valid_list(&self, column: &[&AttributeValue]) -> bool {
        match self {
            Rule::FirstSpeaker(p) => p.is_valid_names(&speakers(column)),
            Rule::FitSoft(p) => p.is_valid_list(&flags(column)),
        }
    }

    /// See [`Priority::sort`].
    pub fn sort(&self, column: &[&AttributeValue]) -> Vec<usize> {
        match self {
            Rule::FirstSpeaker(p) => p.sort_names(&speakers(column)),
            Rule::FitSoft(p) => p.sort(&flags(column)),
        }
    }

    /// See [`Priority::is_valid_insert`]. Values of the wrong kind are
    /// never valid.
    pub fn is_valid_insert(&self, column: &[&AttributeValue], candidate: &AttributeValue) -> bool {
        match (self, candidate) {
            (Rule::FirstSpeaker(p), AttributeValue::Speaker(name)) => {
                p.accepts_name(&speakers(column), name)
            }
            (Rule::FitSoft(p), AttributeValue::Boosted(flag)) => {
                p.is_valid_insert(&flags(column), flag)
            }
            _ => false,
        }
    }
}

impl From<FirstSpeakerPriority> for Rule {
    fn from(p: FirstSpeakerPriority) -> Self {
        Rule::FirstSpeaker(p)
    }
}

impl From<FitSoftPriority> for Rule {
    fn from(p: FitSoftPriority) -> Self {
        Rule::FitSoft(p)
    }
}

/// Borrows the names of a speaker column; no strings are copied.
fn speakers<'a>(column: &[&'a AttributeValue]) -> Vec<&'a str> {
    column.iter().filter_map(|v| v.as_speaker()).collect()
}

fn flags(column: &[&AttributeValue]) -> Vec<bool> {
    column.iter().filter_map(|v| v.as_boosted()).collect()
}
