//! Speaker records.

use crate::priority::AttributeValue;

/// A queued speaker with one attribute value per active rule.
///
/// Records are immutable once built, so the queue always moves a name
/// together with all of its attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpeakerRecord {
    name: String,
    attributes: Vec<AttributeValue>,
}

impl SpeakerRecord {
    /// Creates a record. `attributes` must follow the queue's rule order.
    ///
    /// # Examples
    ///
    /// ```
    /// use speaklist::priority::AttributeValue;
    /// use speaklist::queue::SpeakerRecord;
    ///
    /// let record = SpeakerRecord::new("Anna", [AttributeValue::Boosted(true)]);
    /// assert_eq!(record.name(), "Anna");
    /// assert_eq!(record.attributes().len(), 1);
    /// ```
    pub fn new(
        name: impl Into<String>,
        attributes: impl IntoIterator<Item = AttributeValue>,
    ) -> Self {
        Self {
            name: name.into(),
            attributes: attributes.into_iter().collect(),
        }
    }

    /// Speaker name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Consumes the record, returning the speaker name.
    pub fn into_name(self) -> String {
        self.name
    }

    /// All attribute values, in rule order.
    pub fn attributes(&self) -> &[AttributeValue] {
        &self.attributes
    }

    /// Attribute value for the rule at `rule_index`.
    pub fn attribute(&self, rule_index: usize) -> Option<&AttributeValue> {
        self.attributes.get(rule_index)
    }
}
