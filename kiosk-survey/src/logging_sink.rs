use kiosk_survey_types::{CompletedSurvey, CompletionSink};

/// Completion sink that only logs the record.
///
/// The record is emitted as JSON on the `info` level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingSink;

impl CompletionSink for LoggingSink {
    fn complete(&mut self, record: &CompletedSurvey) -> anyhow::Result<()> {
        let json = serde_json::to_string(record)?;
        tracing::info!(
            session_id = %record.session_id,
            answers = record.answers.len(),
            record = %json,
            "Survey completed"
        );
        Ok(())
    }
}
