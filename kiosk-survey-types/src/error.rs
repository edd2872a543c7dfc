use crate::QuestionId;

/// Error type for survey operations.
#[derive(Debug, thiserror::Error)]
pub enum SurveyError {
    /// The question catalog cannot drive a session.
    #[error("Invalid survey catalog: {0}")]
    InvalidCatalog(String),

    /// A rating outside the question's `1..=scale` range.
    #[error("Rating {value} is out of range for '{question}' (1-{scale})")]
    RatingOutOfRange {
        question: QuestionId,
        value: u8,
        scale: u8,
    },

    /// A rating was given for a free-text question.
    #[error("Question '{0}' does not take a rating")]
    NotARatingQuestion(QuestionId),

    /// The completion sink failed to accept a submitted record.
    #[error("Completion sink error: {0}")]
    Sink(#[from] anyhow::Error),
}

impl SurveyError {
    /// Create a sink error from any error type.
    pub fn sink(err: impl Into<anyhow::Error>) -> Self {
        Self::Sink(err.into())
    }

    /// Check if this error came from the completion sink.
    pub fn is_sink(&self) -> bool {
        matches!(self, Self::Sink(_))
    }
}
