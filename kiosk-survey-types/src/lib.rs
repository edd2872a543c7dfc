//! Core types for the kiosk-survey crate.
//!
//! This crate provides the foundational types for a fixed-sequence survey:
//! - `SurveyDefinition` - The question catalog plus welcome/thank-you copy
//! - `Question` and `QuestionKind` - Individual rating or free-text questions
//! - `AnswerMap`, `Answer` and `AnswerValue` - Answers recorded during a session
//! - `CompletedSurvey` - The frozen record handed over on submission
//! - `Clock` and `CompletionSink` traits - The collaborators a controller needs

mod question_id;
pub use question_id::QuestionId;

mod answer_value;
pub use answer_value::AnswerValue;

mod answers;
pub use answers::{Answer, AnswerMap};

mod session_id;
pub use session_id::SessionId;

mod question;
pub use question::{Question, QuestionKind};

mod survey_definition;
pub use survey_definition::SurveyDefinition;

mod record;
pub use record::{CompletedSurvey, SurveyStatus};

mod error;
pub use error::SurveyError;

mod traits;
pub use traits::{Clock, CompletionSink, SystemClock};
