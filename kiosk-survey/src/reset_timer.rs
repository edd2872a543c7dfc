use chrono::{DateTime, TimeDelta, Utc};
use kiosk_survey_types::SessionId;

/// The one-shot thank-you -> welcome reset, owned by the controller.
///
/// The timer remembers which session scheduled it. Firing it for any other
/// session is the caller's cue to ignore it.
#[derive(Debug, Clone, Default)]
pub struct ResetTimer {
    pending: Option<PendingReset>,
}

#[derive(Debug, Clone)]
struct PendingReset {
    deadline: DateTime<Utc>,
    session: SessionId,
}

impl ResetTimer {
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// Arm the timer, replacing any earlier schedule.
    pub fn schedule(&mut self, session: SessionId, deadline: DateTime<Utc>) {
        self.pending = Some(PendingReset { deadline, session });
    }

    /// Disarm the timer. Returns whether anything was pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline(&self) -> Option<DateTime<Utc>> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    /// Time left until the deadline, clamped at zero.
    pub fn remaining(&self, now: DateTime<Utc>) -> Option<TimeDelta> {
        self.deadline()
            .map(|deadline| (deadline - now).max(TimeDelta::zero()))
    }

    /// If the deadline has passed, disarm and return the scheduling session.
    pub fn take_due(&mut self, now: DateTime<Utc>) -> Option<SessionId> {
        match &self.pending {
            Some(p) if p.deadline <= now => self.pending.take().map(|p| p.session),
            _ => None,
        }
    }
}
