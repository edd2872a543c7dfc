use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{AnswerValue, QuestionId, SessionId};

/// One recorded answer, tagged with when and in which session it was given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    #[serde(rename = "answer")]
    pub value: AnswerValue,

    #[serde(rename = "timestamp")]
    pub recorded_at: DateTime<Utc>,

    #[serde(rename = "sessionId")]
    pub session_id: SessionId,
}

impl Answer {
    pub fn new(value: impl Into<AnswerValue>, recorded_at: DateTime<Utc>, session_id: SessionId) -> Self {
        Self {
            value: value.into(),
            recorded_at,
            session_id,
        }
    }
}

/// Answers recorded during a session, keyed by question id.
///
/// At most one answer per question: inserting again overwrites.
/// Ordered by question id so logged records come out deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerMap {
    values: BTreeMap<QuestionId, Answer>,
}

impl AnswerMap {
    /// Create a new empty answer map.
    pub fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Insert or overwrite the answer for a question, returning the previous one.
    pub fn insert(&mut self, id: impl Into<QuestionId>, answer: Answer) -> Option<Answer> {
        self.values.insert(id.into(), answer)
    }

    /// Get the answer for a question.
    pub fn get(&self, id: &QuestionId) -> Option<&Answer> {
        self.values.get(id)
    }

    /// Get just the answer value for a question.
    pub fn value(&self, id: &QuestionId) -> Option<&AnswerValue> {
        self.values.get(id).map(|a| &a.value)
    }

    /// Check if a question has been answered.
    pub fn contains(&self, id: &QuestionId) -> bool {
        self.values.contains_key(id)
    }

    /// Get an iterator over all id-answer pairs, ordered by id.
    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, &Answer)> {
        self.values.iter()
    }

    /// Get an iterator over the answered question ids.
    pub fn ids(&self) -> impl Iterator<Item = &QuestionId> {
        self.values.keys()
    }

    /// Get the number of answers.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if there are no answers.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Remove every answer.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    // === Convenience accessors ===

    /// Get the rating recorded for a question, if it is a rating.
    pub fn rating(&self, id: &QuestionId) -> Option<u8> {
        self.value(id).and_then(AnswerValue::as_rating)
    }

    /// Get the text recorded for a question, if it is text.
    pub fn text(&self, id: &QuestionId) -> Option<&str> {
        self.value(id).and_then(AnswerValue::as_text)
    }
}
