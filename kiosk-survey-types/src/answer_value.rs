use serde::{Deserialize, Serialize};

/// A single answer value collected from a survey.
///
/// Serialized untagged, so a rating shows up as a bare integer and a
/// free-text answer as a bare string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    /// A rating in `1..=scale` (from Rating questions).
    Rating(u8),

    /// Free text (from Text questions). May be empty.
    Text(String),
}

impl AnswerValue {
    /// Try to get this value as a rating.
    pub fn as_rating(&self) -> Option<u8> {
        match self {
            Self::Rating(r) => Some(*r),
            _ => None,
        }
    }

    /// Try to get this value as a string reference.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get the type name of this value for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Rating(_) => "Rating",
            Self::Text(_) => "Text",
        }
    }
}

impl From<u8> for AnswerValue {
    fn from(r: u8) -> Self {
        Self::Rating(r)
    }
}

impl From<String> for AnswerValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for AnswerValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}
