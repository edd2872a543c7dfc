use chrono::{DateTime, Utc};

use crate::CompletedSurvey;

/// Source of the current time.
///
/// Answers are stamped with it, session ids are derived from it and the
/// thank-you reset deadline is measured against it.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// The wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

/// Receiver of completed survey records.
///
/// Implement this to persist or transmit submissions. Any
/// `FnMut(&CompletedSurvey) -> anyhow::Result<()>` closure is a sink too.
pub trait CompletionSink {
    /// Accept one completed record.
    ///
    /// Called exactly once per confirmed submission.
    fn complete(&mut self, record: &CompletedSurvey) -> anyhow::Result<()>;
}

impl<F> CompletionSink for F
where
    F: FnMut(&CompletedSurvey) -> anyhow::Result<()>,
{
    fn complete(&mut self, record: &CompletedSurvey) -> anyhow::Result<()> {
        self(record)
    }
}
