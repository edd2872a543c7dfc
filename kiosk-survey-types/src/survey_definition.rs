use std::collections::HashSet;

use crate::{Question, QuestionKind, SurveyError};

/// The fixed question catalog plus the copy shown around it.
///
/// Questions are traversed in the order they appear here.
#[derive(Debug, Clone)]
pub struct SurveyDefinition {
    /// Heading of the survey screen.
    pub title: String,

    /// Optional message shown on the welcome screen.
    pub prelude: Option<String>,

    /// Optional time estimate shown under the start button.
    pub estimate: Option<String>,

    /// All questions in the survey.
    pub questions: Vec<Question>,

    /// Optional message shown on the thank-you screen.
    pub epilogue: Option<String>,
}

impl SurveyDefinition {
    /// Create a new survey definition with the given questions.
    pub fn new(title: impl Into<String>, questions: Vec<Question>) -> Self {
        Self {
            title: title.into(),
            prelude: None,
            estimate: None,
            questions,
            epilogue: None,
        }
    }

    /// Set the prelude message.
    pub fn with_prelude(mut self, prelude: impl Into<String>) -> Self {
        self.prelude = Some(prelude.into());
        self
    }

    /// Set the time estimate.
    pub fn with_estimate(mut self, estimate: impl Into<String>) -> Self {
        self.estimate = Some(estimate.into());
        self
    }

    /// Set the epilogue message.
    pub fn with_epilogue(mut self, epilogue: impl Into<String>) -> Self {
        self.epilogue = Some(epilogue.into());
        self
    }

    /// Get the questions.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Get the question at `index`.
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Check if the survey has any questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Get the number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Check that the catalog can drive a session.
    ///
    /// Rejects an empty catalog, duplicate or empty ids, and rating scales of zero.
    pub fn validate(&self) -> Result<(), SurveyError> {
        if self.questions.is_empty() {
            return Err(SurveyError::InvalidCatalog(
                "survey has no questions".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for question in &self.questions {
            if question.id().is_empty() {
                return Err(SurveyError::InvalidCatalog(format!(
                    "question '{}' has an empty id",
                    question.prompt()
                )));
            }
            if !seen.insert(question.id()) {
                return Err(SurveyError::InvalidCatalog(format!(
                    "duplicate question id '{}'",
                    question.id()
                )));
            }
            if let QuestionKind::Rating { scale: 0 } = question.kind() {
                return Err(SurveyError::InvalidCatalog(format!(
                    "question '{}' has a rating scale of 0",
                    question.id()
                )));
            }
        }

        Ok(())
    }
}
