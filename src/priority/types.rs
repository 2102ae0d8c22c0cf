//! Core trait and attribute types for priorities.

use std::fmt;

/// The kind of attribute a priority governs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttributeKind {
    /// Speaker identity (a name).
    Speaker,
    /// Boosted flag for front-loaded speakers.
    Boosted,
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeKind::Speaker => f.write_str("speaker"),
            AttributeKind::Boosted => f.write_str("boosted"),
        }
    }
}

/// One rule-specific value stored on a speaker record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttributeValue {
    /// Speaker identity.
    Speaker(String),
    /// Boosted flag.
    Boosted(bool),
}

impl AttributeValue {
    /// Returns the kind of this value.
    pub fn kind(&self) -> AttributeKind {
        match self {
            AttributeValue::Speaker(_) => AttributeKind::Speaker,
            AttributeValue::Boosted(_) => AttributeKind::Boosted,
        }
    }

    /// Returns the speaker identity, if this is a speaker value.
    pub fn as_speaker(&self) -> Option<&str> {
        match self {
            AttributeValue::Speaker(s) => Some(s),
            AttributeValue::Boosted(_) => None,
        }
    }

    /// Returns the boosted flag, if this is a boosted value.
    pub fn as_boosted(&self) -> Option<bool> {
        match self {
            AttributeValue::Boosted(b) => Some(*b),
            AttributeValue::Speaker(_) => None,
        }
    }
}

impl From<bool> for AttributeValue {
    fn from(b: bool) -> Self {
        AttributeValue::Boosted(b)
    }
}

impl From<&str> for AttributeValue {
    fn from(s: &str) -> Self {
        AttributeValue::Speaker(s.to_owned())
    }
}

impl From<String> for AttributeValue {
    fn from(s: String) -> Self {
        AttributeValue::Speaker(s)
    }
}

/// A fairness rule over one attribute column of the queue.
///
/// A column is the sequence of this rule's attribute values across all
/// queued records, in queue order. Implementations are pure: the same
/// column always yields the same answer.
///
/// # Examples
///
/// ```
/// use speaklist::priority::{AttributeKind, Priority};
///
/// // Nobody may be listed twice.
/// struct Unique;
///
/// impl Priority for Unique {
///     type Value = String;
///     fn name(&self) -> &str { "Unique" }
///     fn attribute_kind(&self) -> AttributeKind { AttributeKind::Speaker }
///     fn is_valid_list(&self, column: &[String]) -> bool {
///         column.iter().enumerate().all(|(i, v)| !column[..i].contains(v))
///     }
///     fn sort(&self, column: &[String]) -> Vec<usize> {
///         (0..column.len()).collect()
///     }
///     fn is_valid_insert(&self, column: &[String], candidate: &String) -> bool {
///         !column.contains(candidate)
///     }
/// }
///
/// let rule = Unique;
/// assert!(!rule.is_valid_insert(&["a".to_string()], &"a".to_string()));
/// ```
pub trait Priority {
    /// Column value type.
    type Value;

    /// Returns the name of this rule.
    fn name(&self) -> &str;

    /// Returns the attribute kind this rule governs.
    fn attribute_kind(&self) -> AttributeKind;

    /// Whether the column, in its current order, satisfies this rule.
    fn is_valid_list(&self, column: &[Self::Value]) -> bool;

    /// Returns a permutation of `0..column.len()` that makes the column
    /// valid. Must be the identity when the column is already valid.
    fn sort(&self, column: &[Self::Value]) -> Vec<usize>;

    /// Whether appending `candidate` to `column` is acceptable.
    ///
    /// Accepts everything by default; ordering is left to [`Priority::sort`].
    fn is_valid_insert(&self, _column: &[Self::Value], _candidate: &Self::Value) -> bool {
        true
    }
}

/// Whether `perm` is a permutation of `0..n`.
pub fn is_permutation(perm: &[usize], n: usize) -> bool {
    if perm.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &i in perm {
        if i >= n || seen[i] {
            return false;
        }
        seen[i] = true;
    }
    true
}

/// Reorders `items` so that position `k` holds the element previously at
/// `perm[k]`.
///
/// `perm` must be a permutation of `0..items.len()`; check with
/// [`is_permutation`] first.
pub fn apply_permutation<T>(items: &mut Vec<T>, perm: &[usize]) {
    debug_assert!(is_permutation(perm, items.len()));
    let mut slots: Vec<Option<T>> = items.drain(..).map(Some).collect();
    items.extend(perm.iter().filter_map(|&i| slots[i].take()));
}

/// Returns `true` if `perm` is `0..perm.len()` in order.
pub fn is_identity(perm: &[usize]) -> bool {
    perm.iter().enumerate().all(|(k, &i)| k == i)
}
