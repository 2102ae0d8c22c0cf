//! FIT soft priority.
//!
//! Front-loads boosted speakers (women, inter, trans and non-binary people
//! in the usual quota setting) while allowing at most one non-boosted
//! speaker between two boosted ones.
//!
//! # Validity
//!
//! A signed counter starts at 0 and `remaining` holds the number of boosted
//! entries still ahead. For each entry, left to right:
//!
//! 1. If `remaining == 0`, the column is valid iff the counter is 0. Entries
//!    after the last boosted one are never inspected; they are all
//!    non-boosted, so there is nothing left to interleave.
//! 2. If the counter is below `-1`, the column is invalid.
//! 3. A boosted entry moves a negative counter one step toward 0.
//! 4. A non-boosted entry decrements the counter.
//!
//! Columns shorter than three entries are always valid.
//!
//! # Repair
//!
//! Boosted and non-boosted indices are queued separately (original order),
//! then taken alternately starting with a boosted one until either queue
//! runs dry. The rest of the other queue is appended.

use std::collections::VecDeque;

use super::types::{AttributeKind, Priority};

/// Rule that interleaves boosted speakers with at most one other in between.
///
/// # Examples
///
/// ```
/// use speaklist::priority::{FitSoftPriority, Priority};
///
/// let rule = FitSoftPriority;
/// assert!(!rule.is_valid_list(&[false, false, true]));
/// assert_eq!(rule.sort(&[false, false, true]), vec![2, 0, 1]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FitSoftPriority;

impl Priority for FitSoftPriority {
    type Value = bool;

    fn name(&self) -> &str {
        "FITSoft"
    }

    fn attribute_kind(&self) -> AttributeKind {
        AttributeKind::Boosted
    }

    fn is_valid_list(&self, column: &[bool]) -> bool {
        if column.len() < 3 {
            return true;
        }

        let mut counter: i64 = 0;
        let mut remaining = column.iter().filter(|&&b| b).count();

        for &boosted in column {
            if remaining == 0 {
                return counter == 0;
            }
            if counter < -1 {
                return false;
            }
            if boosted {
                if counter < 0 {
                    counter += 1;
                }
                remaining -= 1;
            } else {
                counter -= 1;
            }
        }

        counter == 0
    }

    fn sort(&self, column: &[bool]) -> Vec<usize> {
        if self.is_valid_list(column) {
            return (0..column.len()).collect();
        }

        let (mut boosted, mut others): (VecDeque<usize>, VecDeque<usize>) =
            (0..column.len()).partition(|&i| column[i]);

        let mut order = Vec::with_capacity(column.len());
        while !boosted.is_empty() && !others.is_empty() {
            if let Some(i) = boosted.pop_front() {
                order.push(i);
            }
            if let Some(i) = others.pop_front() {
                order.push(i);
            }
        }
        order.extend(boosted);
        order.extend(others);
        order
    }
}
