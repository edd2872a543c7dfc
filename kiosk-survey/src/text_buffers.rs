use std::collections::HashMap;

use kiosk_survey_types::{AnswerMap, QuestionId};

/// Uncommitted free-text input, one buffer per text question.
///
/// A buffer is created the first time its question is displayed, seeded from
/// any answer already recorded for it. Edits only touch the buffer; the
/// controller copies it into the `AnswerMap` when the user navigates.
#[derive(Debug, Clone, Default)]
pub struct TextBuffers {
    buffers: HashMap<QuestionId, String>,
}

impl TextBuffers {
    pub fn new() -> Self {
        Self {
            buffers: HashMap::new(),
        }
    }

    /// Make sure a buffer exists for `id`, seeding it from `answers`.
    ///
    /// An existing buffer is left alone, so in-progress edits survive.
    pub fn seed(&mut self, id: &QuestionId, answers: &AnswerMap) -> &mut String {
        self.buffers
            .entry(id.clone())
            .or_insert_with(|| answers.text(id).unwrap_or_default().to_string())
    }

    pub fn get(&self, id: &QuestionId) -> Option<&str> {
        self.buffers.get(id).map(String::as_str)
    }

    /// Replace the contents of the buffer for `id`.
    pub fn set(&mut self, id: &QuestionId, value: impl Into<String>) {
        self.buffers.insert(id.clone(), value.into());
    }

    pub fn len(&self) -> usize {
        self.buffers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffers.is_empty()
    }

    pub fn clear(&mut self) {
        self.buffers.clear();
    }
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;
    use kiosk_survey_types::{Answer, SessionId};

    use super::*;

    #[test]
    fn seed_uses_recorded_text_once() {
        let q5 = QuestionId::from("q5");
        let mut answers = AnswerMap::new();
        answers.insert(
            q5.clone(),
            Answer::new("old", DateTime::from_timestamp_millis(0).unwrap(), SessionId::new("s")),
        );

        let mut buffers = TextBuffers::new();
        assert_eq!(buffers.seed(&q5, &answers), "old");

        buffers.set(&q5, "new");
        // Re-seeding must not clobber the edit.
        assert_eq!(buffers.seed(&q5, &answers), "new");
        assert_eq!(buffers.get(&q5), Some("new"));
    }

    #[test]
    fn seed_without_answer_is_empty() {
        let mut buffers = TextBuffers::new();
        let id = QuestionId::from("q9");
        assert_eq!(buffers.seed(&id, &AnswerMap::new()), "");
        assert_eq!(buffers.len(), 1);

        buffers.clear();
        assert!(buffers.is_empty());
        assert_eq!(buffers.get(&id), None);
    }
}
