//! First-speaker priority.
//!
//! Nobody speaks a second time before everyone on the list has spoken once.
//!
//! # Validity
//!
//! Scanning left to right, a repeated name is allowed only once every
//! distinct name of the whole column has already appeared. First
//! occurrences never invalidate a column.
//!
//! # Repair
//!
//! Each entry is ranked by how often its name occurred before it. Entries
//! are then emitted round by round (all rank-0 entries, then all rank-1
//! entries, ...), keeping original order within a round. The first round
//! contains every distinct name, so every repeat follows a full round.

use std::collections::{HashMap, HashSet};

use super::types::{AttributeKind, Priority};

/// Rule that gives everyone a first turn before anyone gets a second.
///
/// # Examples
///
/// ```
/// use speaklist::priority::{FirstSpeakerPriority, Priority};
///
/// let rule = FirstSpeakerPriority;
/// let column: Vec<String> = ["a", "a", "b"].iter().map(|s| s.to_string()).collect();
///
/// assert!(!rule.is_valid_list(&column));
/// assert_eq!(rule.sort(&column), vec![0, 2, 1]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FirstSpeakerPriority;

impl FirstSpeakerPriority {
    /// [`Priority::is_valid_list`] over any column of names, owned or
    /// borrowed.
    pub fn is_valid_names<S: AsRef<str>>(&self, column: &[S]) -> bool {
        let distinct: HashSet<&str> = column.iter().map(|name| name.as_ref()).collect();
        let mut seen: HashSet<&str> = HashSet::with_capacity(distinct.len());

        for name in column {
            // A repeat is fine only after the full first round.
            if !seen.insert(name.as_ref()) && seen.len() < distinct.len() {
                return false;
            }
        }
        true
    }

    /// [`Priority::sort`] over any column of names, owned or borrowed.
    pub fn sort_names<S: AsRef<str>>(&self, column: &[S]) -> Vec<usize> {
        if self.is_valid_names(column) {
            return (0..column.len()).collect();
        }

        let mut occurrences: HashMap<&str, usize> = HashMap::new();
        let mut ranked: Vec<(usize, usize)> = column
            .iter()
            .enumerate()
            .map(|(index, name)| {
                let count = occurrences.entry(name.as_ref()).or_insert(0);
                let rank = *count;
                *count += 1;
                (rank, index)
            })
            .collect();

        ranked.sort_unstable();
        ranked.into_iter().map(|(_, index)| index).collect()
    }

    /// [`Priority::is_valid_insert`] over any column of names. Always
    /// accepts; repeats are ordered by [`sort_names`](Self::sort_names).
    pub fn accepts_name<S: AsRef<str>>(&self, _column: &[S], _candidate: &str) -> bool {
        true
    }
}

impl Priority for FirstSpeakerPriority {
    type Value = String;

    fn name(&self) -> &str {
        "FirstSpeaker"
    }

    fn attribute_kind(&self) -> AttributeKind {
        AttributeKind::Speaker
    }

    fn is_valid_list(&self, column: &[String]) -> bool {
        self.is_valid_names(column)
    }

    fn sort(&self, column: &[String]) -> Vec<usize> {
        self.sort_names(column)
    }

    fn is_valid_insert(&self, column: &[String], candidate: &String) -> bool {
        self.accepts_name(column, candidate)
    }
}
