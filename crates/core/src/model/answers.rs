use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::QuestionId;

/// Which bound of a range answer is being edited.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerField {
    Min,
    Max,
}

impl AnswerField {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Min => "Min",
            Self::Max => "Max",
        }
    }
}

impl fmt::Display for AnswerField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Min => "min",
            Self::Max => "max",
        })
    }
}

/// Raw user text for one question. Untouched bounds stay `None` and are
/// left out of the submitted JSON.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeAnswer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    min: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    max: Option<String>,
}

impl RangeAnswer {
    #[must_use]
    pub fn min(&self) -> Option<&str> {
        self.min.as_deref()
    }

    #[must_use]
    pub fn max(&self) -> Option<&str> {
        self.max.as_deref()
    }

    #[must_use]
    pub fn get(&self, field: AnswerField) -> Option<&str> {
        match field {
            AnswerField::Min => self.min(),
            AnswerField::Max => self.max(),
        }
    }

    pub fn set(&mut self, field: AnswerField, value: String) {
        match field {
            AnswerField::Min => self.min = Some(value),
            AnswerField::Max => self.max = Some(value),
        }
    }
}

/// User answers keyed by question id.
///
/// Entries appear lazily, on the first edit of a question. Values are stored
/// verbatim; numeric validation is left to the scoring server.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    entries: BTreeMap<QuestionId, RangeAnswer>,
}

impl AnswerSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Upsert one bound, keeping the other bound if it was already set.
    pub fn record(&mut self, id: QuestionId, field: AnswerField, value: impl Into<String>) {
        self.entries.entry(id).or_default().set(field, value.into());
    }

    #[must_use]
    pub fn get(&self, id: &QuestionId) -> Option<&RangeAnswer> {
        self.entries.get(id)
    }

    #[must_use]
    pub fn value(&self, id: &QuestionId, field: AnswerField) -> Option<&str> {
        self.get(id).and_then(|answer| answer.get(field))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, &RangeAnswer)> {
        self.entries.iter()
    }
}
