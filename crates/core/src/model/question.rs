use serde::{Deserialize, Serialize};

use crate::model::QuestionId;

/// A numeric-range question as served by the quiz API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    id: QuestionId,
    question: String,
}

impl Question {
    #[must_use]
    pub fn new(id: QuestionId, question: impl Into<String>) -> Self {
        Self {
            id,
            question: question.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    /// Display text of the question.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.question
    }
}
