use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{AnswerMap, SessionId};

/// Final status of a submitted survey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SurveyStatus {
    Completed,
}

/// The frozen record produced by a confirmed submission.
///
/// This is what gets handed to the `CompletionSink`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedSurvey {
    pub session_id: SessionId,
    pub answers: AnswerMap,
    pub status: SurveyStatus,
    pub completed_at: DateTime<Utc>,
}

impl CompletedSurvey {
    pub fn new(session_id: SessionId, answers: AnswerMap, completed_at: DateTime<Utc>) -> Self {
        Self {
            session_id,
            answers,
            status: SurveyStatus::Completed,
            completed_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Answer;

    #[test]
    fn serializes_with_record_field_names() {
        let at = DateTime::from_timestamp_millis(0).unwrap();
        let session = SessionId::new("session_0_abc");
        let mut answers = AnswerMap::new();
        answers.insert("q1", Answer::new(5u8, at, session.clone()));

        let record = CompletedSurvey::new(session, answers, at);
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["sessionId"], "session_0_abc");
        assert_eq!(json["status"], "COMPLETED");
        assert_eq!(json["completedAt"], "1970-01-01T00:00:00Z");
        assert_eq!(json["answers"]["q1"]["answer"], 5);
    }
}
