//! Queue container and repair engine.
//!
//! # Repair
//!
//! One pass visits every rule in configuration order. Each rule sees its
//! own attribute column, returns a permutation, and that permutation is
//! applied to whole records before the next rule runs. A later rule may
//! break an earlier rule's column, so passes repeat until a pass leaves the
//! order as it found it, or `max_passes` is reached.
//!
//! A pass can leave the order unchanged in two ways: every rule accepts its
//! column, or the rules undo each other's moves. Only the first means the
//! queue is prioritized. Rules are repaired independently, so there is no
//! guarantee that an order valid for every rule is found even when one
//! exists.
//!
//! Permutations are composed on an index vector and applied to the
//! records once at the end, so a failing rule leaves the queue untouched.

use std::ops::{Bound, Range, RangeBounds};

use tracing::{debug, trace, warn};

use super::config::QueueConfig;
use super::record::SpeakerRecord;
use crate::error::{QueueError, QueueResult};
use crate::priority::{apply_permutation, is_identity, is_permutation, AttributeValue, Rule};

/// A speaking order governed by a fixed list of rules.
///
/// # Examples
///
/// ```
/// use speaklist::priority::{AttributeValue, Rule};
/// use speaklist::queue::{Queue, SpeakerRecord};
///
/// let mut queue = Queue::new(vec![Rule::fit_soft()]);
/// for (name, boosted) in [("A", false), ("B", false), ("C", true)] {
///     queue
///         .append(SpeakerRecord::new(name, [AttributeValue::Boosted(boosted)]))
///         .unwrap();
/// }
///
/// assert!(!queue.is_prioritized());
/// queue.prioritize().unwrap();
/// assert_eq!(queue.names(), vec!["C", "A", "B"]);
/// ```
#[derive(Debug, Clone)]
pub struct Queue {
    records: Vec<SpeakerRecord>,
    config: QueueConfig,
}

impl Queue {
    /// Creates an empty queue with the given rules and default settings.
    pub fn new(rules: Vec<Rule>) -> Self {
        Self {
            records: Vec::new(),
            config: QueueConfig::default().with_rules(rules),
        }
    }

    /// Creates an empty queue from a validated configuration.
    pub fn with_config(config: QueueConfig) -> QueueResult<Self> {
        config.validate()?;
        Ok(Self {
            records: Vec::new(),
            config,
        })
    }

    /// Active rules, in evaluation order.
    pub fn rules(&self) -> &[Rule] {
        &self.config.rules
    }

    /// The queue configuration.
    pub fn config(&self) -> &QueueConfig {
        &self.config
    }

    /// Number of queued speakers.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether a speaker with this name is queued.
    pub fn contains(&self, name: &str) -> bool {
        self.records.iter().any(|r| r.name() == name)
    }

    /// Returns the record at `index`.
    pub fn get(&self, index: usize) -> QueueResult<&SpeakerRecord> {
        self.records.get(index).ok_or(QueueError::IndexOutOfRange {
            index,
            len: self.records.len(),
        })
    }

    /// Iterates over records in queue order.
    pub fn iter(&self) -> std::slice::Iter<'_, SpeakerRecord> {
        self.records.iter()
    }

    /// Speaker names in queue order.
    pub fn names(&self) -> Vec<&str> {
        self.records.iter().map(SpeakerRecord::name).collect()
    }

    /// The attribute column of the rule at `rule_index`, in queue order.
    pub fn column(&self, rule_index: usize) -> Option<Vec<&AttributeValue>> {
        if rule_index >= self.config.rules.len() {
            return None;
        }
        Some(self.project(rule_index, None))
    }

    /// Inserts `record` before position `index` (`index == len` appends).
    pub fn insert(&mut self, index: usize, record: SpeakerRecord) -> QueueResult<()> {
        if index > self.records.len() {
            return Err(QueueError::IndexOutOfRange {
                index,
                len: self.records.len(),
            });
        }
        self.check_record(&record, None)?;
        trace!(speaker = record.name(), index, "insert");
        self.records.insert(index, record);
        Ok(())
    }

    /// Appends `record` at the back of the queue.
    pub fn append(&mut self, record: SpeakerRecord) -> QueueResult<()> {
        self.insert(self.records.len(), record)
    }

    /// Appends several records. Either all are appended or none is.
    pub fn extend(&mut self, records: impl IntoIterator<Item = SpeakerRecord>) -> QueueResult<()> {
        let start = self.records.len();
        for record in records {
            if let Err(e) = self.check_record(&record, None) {
                self.records.truncate(start);
                return Err(e);
            }
            self.records.push(record);
        }
        trace!(added = self.records.len() - start, "extend");
        Ok(())
    }

    /// Appends `record` and, if `auto_prioritize` is set, repairs the order.
    pub fn add(&mut self, record: SpeakerRecord) -> QueueResult<()> {
        self.add_all(std::iter::once(record))
    }

    /// Appends `records` and, if `auto_prioritize` is set, repairs the order.
    pub fn add_all(&mut self, records: impl IntoIterator<Item = SpeakerRecord>) -> QueueResult<()> {
        let start = self.records.len();
        self.extend(records)?;
        if self.config.auto_prioritize {
            if let Err(e) = self.prioritize() {
                self.records.truncate(start);
                return Err(e);
            }
        }
        Ok(())
    }

    /// Replaces the record at `index`, returning the old one.
    ///
    /// The new record is checked against the columns without the replaced
    /// slot.
    pub fn replace(&mut self, index: usize, record: SpeakerRecord) -> QueueResult<SpeakerRecord> {
        if index >= self.records.len() {
            return Err(QueueError::IndexOutOfRange {
                index,
                len: self.records.len(),
            });
        }
        self.check_record(&record, Some(index))?;
        trace!(speaker = record.name(), index, "replace");
        Ok(std::mem::replace(&mut self.records[index], record))
    }

    /// Removes and returns the speaker at the front of the queue.
    pub fn pop(&mut self) -> QueueResult<SpeakerRecord> {
        if self.records.is_empty() {
            return Err(QueueError::EmptyQueueUnderflow);
        }
        let record = self.records.remove(0);
        trace!(speaker = record.name(), "pop");
        Ok(record)
    }

    /// Pops the front speaker and returns just the name.
    pub fn next_speaker(&mut self) -> QueueResult<String> {
        self.pop().map(SpeakerRecord::into_name)
    }

    /// Removes and returns the record at `index`.
    pub fn remove(&mut self, index: usize) -> QueueResult<SpeakerRecord> {
        if index >= self.records.len() {
            return Err(QueueError::IndexOutOfRange {
                index,
                len: self.records.len(),
            });
        }
        Ok(self.records.remove(index))
    }

    /// Removes and returns the records in `range`.
    pub fn drain(&mut self, range: impl RangeBounds<usize>) -> QueueResult<Vec<SpeakerRecord>> {
        let range = self.resolve_range(range)?;
        Ok(self.records.drain(range).collect())
    }

    /// Removes every record.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Whether every rule accepts its column in the current order.
    ///
    /// Each rule is checked on its own column; conflicts between rules are
    /// not detected.
    pub fn is_prioritized(&self) -> bool {
        for (rule_index, rule) in self.config.rules.iter().enumerate() {
            if !rule.is_valid_list(&self.project(rule_index, None)) {
                debug!(rule = rule.name(), "column not prioritized");
                return false;
            }
        }
        true
    }

    /// Repairs the order rule by rule.
    ///
    /// Rules are repaired one after another, in configuration order; the
    /// rule order therefore affects the final arrangement. Passes repeat
    /// until one leaves the order unchanged or `max_passes` is reached, so
    /// a second call on a settled queue changes nothing.
    ///
    /// With a single rule the queue is always prioritized afterwards. With
    /// several rules the repairs can pull in different directions and
    /// [`is_prioritized`](Self::is_prioritized) may still be false.
    ///
    /// [`QueueConfig::with_max_passes(1)`](super::QueueConfig::with_max_passes)
    /// gives exactly one sequential pass over the rules.
    pub fn prioritize(&mut self) -> QueueResult<()> {
        let n = self.records.len();
        let mut order: Vec<usize> = (0..n).collect();
        let mut settled = false;

        for pass in 0..self.config.max_passes {
            let before = order.clone();
            let mut changed = false;

            for (rule_index, rule) in self.config.rules.iter().enumerate() {
                let column: Vec<&AttributeValue> = order
                    .iter()
                    .filter_map(|&k| self.records[k].attribute(rule_index))
                    .collect();
                let perm = rule.sort(&column);

                if !is_permutation(&perm, n) {
                    return Err(QueueError::InvalidPermutation {
                        rule: rule.name().to_owned(),
                    });
                }
                if is_identity(&perm) {
                    continue;
                }

                order = perm.iter().map(|&p| order[p]).collect();
                changed = true;
                debug!(rule = rule.name(), pass, "column repaired");
            }

            if !changed {
                settled = true;
                break;
            }
            if order == before {
                debug!(pass, "rules undo each other; stopping");
                settled = true;
                break;
            }
        }

        if !settled {
            warn!(
                max_passes = self.config.max_passes,
                "rules did not settle within the pass limit"
            );
        }

        if !is_identity(&order) {
            apply_permutation(&mut self.records, &order);
        }
        Ok(())
    }

    /// Projects one rule's column, optionally leaving out one slot.
    fn project(&self, rule_index: usize, skip: Option<usize>) -> Vec<&AttributeValue> {
        self.records
            .iter()
            .enumerate()
            .filter(|&(i, _)| Some(i) != skip)
            .filter_map(|(_, r)| r.attribute(rule_index))
            .collect()
    }

    /// Runs every rule's insertion check; all must pass.
    fn check_record(&self, record: &SpeakerRecord, skip: Option<usize>) -> QueueResult<()> {
        let expected = self.config.rules.len();
        let actual = record.attributes().len();
        if expected != actual {
            warn!(speaker = record.name(), expected, actual, "attribute count mismatch");
            return Err(QueueError::AttributeCountMismatch { expected, actual });
        }

        for (rule_index, (rule, value)) in self
            .config
            .rules
            .iter()
            .zip(record.attributes())
            .enumerate()
        {
            let reason = if !rule.accepts(value) {
                format!(
                    "expected a {} attribute, got {}",
                    rule.attribute_kind(),
                    value.kind()
                )
            } else if !rule.is_valid_insert(&self.project(rule_index, skip), value) {
                "value rejected for the current order".to_owned()
            } else {
                continue;
            };

            warn!(speaker = record.name(), rule = rule.name(), %reason, "insertion rejected");
            return Err(QueueError::InvalidInsertion {
                rule: rule.name().to_owned(),
                reason,
            });
        }
        Ok(())
    }

    fn resolve_range(&self, range: impl RangeBounds<usize>) -> QueueResult<Range<usize>> {
        let len = self.records.len();
        let start = match range.start_bound() {
            Bound::Included(&s) => s,
            Bound::Excluded(&s) => s
                .checked_add(1)
                .ok_or(QueueError::IndexOutOfRange { index: s, len })?,
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&e) => e
                .checked_add(1)
                .ok_or(QueueError::IndexOutOfRange { index: e, len })?,
            Bound::Excluded(&e) => e,
            Bound::Unbounded => len,
        };
        if end > len {
            return Err(QueueError::IndexOutOfRange { index: end - 1, len });
        }
        if start > end {
            return Err(QueueError::IndexOutOfRange { index: start, len });
        }
        Ok(start..end)
    }
}

impl<'a> IntoIterator for &'a Queue {
    type Item = &'a SpeakerRecord;
    type IntoIter = std::slice::Iter<'a, SpeakerRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn boosted(name: &str, flag: bool) -> SpeakerRecord {
        SpeakerRecord::new(name, [AttributeValue::Boosted(flag)])
    }

    /// Record for a queue with rules `[FitSoft, FirstSpeaker]`.
    fn both(name: &str, flag: bool) -> SpeakerRecord {
        SpeakerRecord::new(
            name,
            [AttributeValue::Boosted(flag), AttributeValue::from(name)],
        )
    }

    /// Record for a queue with rules `[FirstSpeaker, FitSoft]`.
    fn named_first(name: &str, flag: bool) -> SpeakerRecord {
        SpeakerRecord::new(
            name,
            [AttributeValue::from(name), AttributeValue::Boosted(flag)],
        )
    }

    fn fit_queue(entries: &[(&str, bool)]) -> Queue {
        let mut queue = Queue::new(vec![Rule::fit_soft()]);
        for &(name, flag) in entries {
            queue.append(boosted(name, flag)).unwrap();
        }
        queue
    }

    fn plenum() -> Vec<(&'static str, bool)> {
        vec![
            ("Anton", false),
            ("Malte", false),
            ("Jim", false),
            ("Anna", true),
            ("Sophia", true),
            ("Christina", true),
            ("Anna", true),
            ("Sophia", true),
            ("Jim", false),
            ("Corinna", true),
            ("Malte", false),
        ]
    }

    #[test]
    fn test_empty_queue_is_prioritized() {
        assert!(Queue::new(vec![]).is_prioritized());
        assert!(Queue::new(vec![Rule::fit_soft()]).is_prioritized());
        assert!(Queue::new(vec![Rule::fit_soft(), Rule::first_speaker()]).is_prioritized());
    }

    #[test]
    fn test_boosted_moves_to_front() {
        let mut queue = fit_queue(&[("A", false), ("B", false), ("C", true)]);
        assert!(!queue.is_prioritized());
        queue.prioritize().unwrap();
        assert_eq!(queue.names(), vec!["C", "A", "B"]);
        assert!(queue.is_prioritized());
    }

    #[test]
    fn test_prioritize_keeps_valid_order() {
        let mut queue = fit_queue(&[("A", true), ("B", false), ("C", true)]);
        queue.prioritize().unwrap();
        assert_eq!(queue.names(), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_prioritize_is_idempotent() {
        let mut queue = Queue::new(vec![Rule::fit_soft(), Rule::first_speaker()]);
        queue
            .extend(plenum().into_iter().map(|(n, b)| both(n, b)))
            .unwrap();
        queue.prioritize().unwrap();
        let once: Vec<String> = queue.names().into_iter().map(String::from).collect();
        queue.prioritize().unwrap();
        assert_eq!(queue.names(), once);
    }

    #[test]
    fn test_plenum_fit_then_first_speaker() {
        let mut queue = Queue::new(vec![Rule::fit_soft(), Rule::first_speaker()]);
        queue
            .extend(plenum().into_iter().map(|(n, b)| both(n, b)))
            .unwrap();
        queue.prioritize().unwrap();
        assert!(queue.is_prioritized());
        assert_eq!(
            queue.names(),
            vec![
                "Anna",
                "Anton",
                "Sophia",
                "Malte",
                "Christina",
                "Jim",
                "Corinna",
                "Anna",
                "Jim",
                "Sophia",
                "Malte",
            ]
        );
    }

    #[test]
    fn test_plenum_first_speaker_only() {
        let mut queue = Queue::new(vec![Rule::first_speaker()]);
        for (name, _) in plenum() {
            queue
                .append(SpeakerRecord::new(name, [AttributeValue::from(name)]))
                .unwrap();
        }
        queue.prioritize().unwrap();
        assert_eq!(
            queue.names(),
            vec![
                "Anton",
                "Malte",
                "Jim",
                "Anna",
                "Sophia",
                "Christina",
                "Corinna",
                "Anna",
                "Sophia",
                "Jim",
                "Malte",
            ]
        );
    }

    #[test]
    fn test_single_pass_can_leave_earlier_rule_broken() {
        let records = || {
            vec![
                named_first("d", false),
                named_first("b", false),
                named_first("a", false),
                named_first("b", true),
            ]
        };
        let config =
            QueueConfig::default().with_rules([Rule::first_speaker(), Rule::fit_soft()]);

        let mut single = Queue::with_config(config.clone().with_max_passes(1)).unwrap();
        single.extend(records()).unwrap();
        single.prioritize().unwrap();
        assert_eq!(single.names(), vec!["b", "d", "b", "a"]);
        assert!(!single.is_prioritized());

        let mut settled = Queue::with_config(config).unwrap();
        settled.extend(records()).unwrap();
        settled.prioritize().unwrap();
        assert_eq!(settled.names(), vec!["b", "d", "a", "b"]);
        assert_eq!(
            settled.get(0).unwrap().attribute(1),
            Some(&AttributeValue::Boosted(true))
        );
        assert!(settled.is_prioritized());
    }

    #[test]
    fn test_conflicting_rules_stop_without_settling() {
        let config =
            QueueConfig::default().with_rules([Rule::first_speaker(), Rule::fit_soft()]);
        let mut queue = Queue::with_config(config).unwrap();
        queue
            .extend(vec![
                named_first("b", false),
                named_first("a", false),
                named_first("b", true),
                named_first("c", true),
            ])
            .unwrap();

        queue.prioritize().unwrap();
        assert_eq!(queue.names(), vec!["c", "b", "b", "a"]);
        // b, c, a, b would satisfy both rules, but sequential repair
        // keeps bouncing between two orders instead
        assert!(!queue.is_prioritized());

        let once: Vec<SpeakerRecord> = queue.iter().cloned().collect();
        queue.prioritize().unwrap();
        assert_eq!(queue.iter().cloned().collect::<Vec<_>>(), once);
    }

    #[test]
    fn test_records_stay_aligned() {
        let mut queue = Queue::new(vec![Rule::fit_soft(), Rule::first_speaker()]);
        queue
            .extend(plenum().into_iter().map(|(n, b)| both(n, b)))
            .unwrap();
        queue.prioritize().unwrap();
        for record in &queue {
            assert_eq!(
                record.attribute(1).and_then(|v| v.as_speaker()),
                Some(record.name())
            );
        }
    }

    #[test]
    fn test_rejected_insert_leaves_queue_unchanged() {
        let mut queue = fit_queue(&[("A", false)]);
        let err = queue
            .append(SpeakerRecord::new("B", [AttributeValue::from("B")]))
            .unwrap_err();
        assert!(matches!(err, QueueError::InvalidInsertion { .. }));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_attribute_count_mismatch() {
        let mut queue = Queue::new(vec![Rule::fit_soft(), Rule::first_speaker()]);
        let err = queue.append(boosted("A", true)).unwrap_err();
        assert_eq!(
            err,
            QueueError::AttributeCountMismatch {
                expected: 2,
                actual: 1
            }
        );
        assert!(queue.is_empty());
    }

    #[test]
    fn test_extend_is_all_or_nothing() {
        let mut queue = fit_queue(&[("A", false)]);
        let result = queue.extend(vec![
            boosted("B", true),
            SpeakerRecord::new("C", [AttributeValue::from("C")]),
        ]);
        assert!(result.is_err());
        assert_eq!(queue.names(), vec!["A"]);
    }

    #[test]
    fn test_insert_positions() {
        let mut queue = fit_queue(&[("A", false), ("C", false)]);
        queue.insert(1, boosted("B", true)).unwrap();
        queue.insert(3, boosted("D", false)).unwrap();
        assert_eq!(queue.names(), vec!["A", "B", "C", "D"]);

        let err = queue.insert(9, boosted("E", false)).unwrap_err();
        assert_eq!(err, QueueError::IndexOutOfRange { index: 9, len: 4 });
    }

    #[test]
    fn test_pop_and_next_speaker() {
        let mut queue = fit_queue(&[("A", true), ("B", false)]);
        assert_eq!(queue.pop().unwrap().name(), "A");
        assert_eq!(queue.next_speaker().unwrap(), "B");
        assert_eq!(queue.pop().unwrap_err(), QueueError::EmptyQueueUnderflow);
    }

    #[test]
    fn test_get_and_replace() {
        let mut queue = fit_queue(&[("A", true), ("B", false)]);
        assert_eq!(queue.get(1).unwrap().name(), "B");
        assert!(matches!(
            queue.get(2),
            Err(QueueError::IndexOutOfRange { index: 2, len: 2 })
        ));

        let old = queue.replace(1, boosted("C", true)).unwrap();
        assert_eq!(old.name(), "B");
        assert_eq!(queue.names(), vec!["A", "C"]);

        assert!(queue.replace(5, boosted("D", true)).is_err());
        assert!(queue
            .replace(0, SpeakerRecord::new("E", [AttributeValue::from("E")]))
            .is_err());
        assert_eq!(queue.names(), vec!["A", "C"]);
    }

    #[test]
    fn test_remove_and_drain() {
        let mut queue = fit_queue(&[("A", true), ("B", false), ("C", true), ("D", false)]);
        assert_eq!(queue.remove(1).unwrap().name(), "B");
        assert!(queue.remove(3).is_err());

        let drained = queue.drain(0..2).unwrap();
        assert_eq!(drained.len(), 2);
        assert_eq!(queue.names(), vec!["D"]);

        assert_eq!(
            queue.drain(0..=3).unwrap_err(),
            QueueError::IndexOutOfRange { index: 3, len: 1 }
        );
        assert_eq!(queue.drain(..).unwrap().len(), 1);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_drain_bounds_at_usize_max() {
        let mut queue = fit_queue(&[("A", true), ("B", false)]);
        assert_eq!(
            queue.drain(..=usize::MAX).unwrap_err(),
            QueueError::IndexOutOfRange {
                index: usize::MAX,
                len: 2
            }
        );
        assert_eq!(
            queue
                .drain((Bound::Excluded(usize::MAX), Bound::Unbounded))
                .unwrap_err(),
            QueueError::IndexOutOfRange {
                index: usize::MAX,
                len: 2
            }
        );
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_contains_and_column() {
        let queue = fit_queue(&[("A", true), ("B", false)]);
        assert!(queue.contains("A"));
        assert!(!queue.contains("Z"));
        assert_eq!(
            queue.column(0).unwrap(),
            vec![&AttributeValue::Boosted(true), &AttributeValue::Boosted(false)]
        );
        assert!(queue.column(1).is_none());
    }

    #[test]
    fn test_add_with_auto_prioritize() {
        let config = QueueConfig::default()
            .with_rule(Rule::fit_soft())
            .with_auto_prioritize(true);
        let mut queue = Queue::with_config(config).unwrap();
        queue
            .add_all(vec![boosted("A", false), boosted("B", false)])
            .unwrap();
        queue.add(boosted("C", true)).unwrap();
        assert_eq!(queue.names(), vec!["C", "A", "B"]);
    }

    #[test]
    fn test_add_without_auto_prioritize_appends() {
        let mut queue = fit_queue(&[("A", false), ("B", false)]);
        queue.add(boosted("C", true)).unwrap();
        assert_eq!(queue.names(), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_with_config_rejects_duplicates() {
        let config = QueueConfig::default()
            .with_rule(Rule::first_speaker())
            .with_rule(Rule::first_speaker());
        assert!(matches!(Queue::with_config(config), Err(QueueError::DuplicateRule(_))));
    }

    #[test]
    fn test_clear() {
        let mut queue = fit_queue(&[("A", true)]);
        queue.clear();
        assert!(queue.is_empty());
        assert!(queue.is_prioritized());
    }

    fn arb_entries() -> impl Strategy<Value = Vec<(String, bool)>> {
        proptest::collection::vec(("[a-d]", any::<bool>()), 0..12)
    }

    proptest! {
        #[test]
        fn prop_prioritize_is_idempotent(
            entries in arb_entries(),
            fit_first in any::<bool>(),
        ) {
            let rules = if fit_first {
                vec![Rule::fit_soft(), Rule::first_speaker()]
            } else {
                vec![Rule::first_speaker(), Rule::fit_soft()]
            };
            let mut queue = Queue::new(rules.clone());
            for (name, flag) in &entries {
                let attrs: Vec<AttributeValue> = rules
                    .iter()
                    .map(|r| match r {
                        Rule::FitSoft(_) => AttributeValue::Boosted(*flag),
                        Rule::FirstSpeaker(_) => AttributeValue::from(name.as_str()),
                    })
                    .collect();
                queue.append(SpeakerRecord::new(name.as_str(), attrs)).unwrap();
            }

            let mut before: Vec<SpeakerRecord> = queue.iter().cloned().collect();
            queue.prioritize().unwrap();

            let once: Vec<SpeakerRecord> = queue.iter().cloned().collect();
            queue.prioritize().unwrap();
            let twice: Vec<SpeakerRecord> = queue.iter().cloned().collect();
            prop_assert_eq!(&once, &twice);

            // same records, only reordered
            let mut after = once;
            let key = |r: &SpeakerRecord| format!("{:?}", r);
            before.sort_by_key(key);
            after.sort_by_key(key);
            prop_assert_eq!(before, after);
        }

        #[test]
        fn prop_single_rule_repair(flags in proptest::collection::vec(any::<bool>(), 0..16)) {
            let mut queue = Queue::new(vec![Rule::fit_soft()]);
            for (i, &flag) in flags.iter().enumerate() {
                queue.append(boosted(&i.to_string(), flag)).unwrap();
            }
            let was_valid = queue.is_prioritized();
            let before: Vec<String> = queue.names().into_iter().map(String::from).collect();
            queue.prioritize().unwrap();
            prop_assert!(queue.is_prioritized());
            if was_valid {
                prop_assert_eq!(queue.names(), before);
            }
        }
    }
}
