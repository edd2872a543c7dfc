use crate::QuestionId;

/// A single question in a survey.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    /// The key of this question's answer in the `AnswerMap`.
    id: QuestionId,

    /// The prompt text shown to the user.
    text: String,

    /// The kind of question (determines the input widget).
    kind: QuestionKind,

    /// Optional decorative symbol shown above the prompt.
    glyph: Option<String>,
}

impl Question {
    /// Create a new question.
    pub fn new(id: impl Into<QuestionId>, text: impl Into<String>, kind: QuestionKind) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            kind,
            glyph: None,
        }
    }

    /// Create a rating question with choices `1..=scale`.
    pub fn rating(id: impl Into<QuestionId>, text: impl Into<String>, scale: u8) -> Self {
        Self::new(id, text, QuestionKind::Rating { scale })
    }

    /// Create a free-text question.
    pub fn text(id: impl Into<QuestionId>, text: impl Into<String>) -> Self {
        Self::new(id, text, QuestionKind::Text { placeholder: None })
    }

    /// Set the decorative glyph.
    pub fn with_glyph(mut self, glyph: impl Into<String>) -> Self {
        self.glyph = Some(glyph.into());
        self
    }

    /// Set the placeholder of a text question. Ignored for ratings.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        if let QuestionKind::Text { placeholder: slot } = &mut self.kind {
            *slot = Some(placeholder.into());
        }
        self
    }

    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    /// Get the prompt text.
    pub fn prompt(&self) -> &str {
        &self.text
    }

    pub fn kind(&self) -> &QuestionKind {
        &self.kind
    }

    pub fn glyph(&self) -> Option<&str> {
        self.glyph.as_deref()
    }

    /// The rating scale, present iff this is a rating question.
    pub fn scale(&self) -> Option<u8> {
        match self.kind {
            QuestionKind::Rating { scale } => Some(scale),
            QuestionKind::Text { .. } => None,
        }
    }

    pub fn is_rating(&self) -> bool {
        self.kind.is_rating()
    }

    pub fn is_text(&self) -> bool {
        self.kind.is_text()
    }
}

/// The kind of question, determining the input type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionKind {
    /// Discrete choice among `1..=scale`.
    Rating { scale: u8 },

    /// Free text, committed on navigation.
    Text { placeholder: Option<String> },
}

impl QuestionKind {
    pub fn is_rating(&self) -> bool {
        matches!(self, Self::Rating { .. })
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text { .. })
    }

    /// Check whether `value` is one of the offered rating choices.
    pub fn accepts_rating(&self, value: u8) -> bool {
        match self {
            Self::Rating { scale } => (1..=*scale).contains(&value),
            Self::Text { .. } => false,
        }
    }
}
