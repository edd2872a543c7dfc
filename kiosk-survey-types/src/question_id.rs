use std::fmt;

use serde::{Deserialize, Serialize};

/// The unique identifier of a question, e.g. `"q1"`.
///
/// Used as the key in `AnswerMap` and in the per-question text buffers.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId {
    id: String,
}

impl QuestionId {
    /// Create a new question id.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// Get the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.id
    }

    /// Check if the id is empty.
    pub fn is_empty(&self) -> bool {
        self.id.is_empty()
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

impl From<&str> for QuestionId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for QuestionId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for QuestionId {
    fn as_ref(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_and_conversions() {
        let id = QuestionId::from("q1");
        assert_eq!(id.as_str(), "q1");
        assert_eq!(id.to_string(), "q1");
        assert_eq!(id, QuestionId::new(String::from("q1")));
        assert!(!id.is_empty());
        assert!(QuestionId::new("").is_empty());
    }

    #[test]
    fn orders_lexically() {
        let mut ids = vec![QuestionId::from("q3"), QuestionId::from("q1")];
        ids.sort();
        assert_eq!(ids[0].as_str(), "q1");
    }
}
