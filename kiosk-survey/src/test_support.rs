//! Test doubles for driving a `SurveyController` without user interaction.
//!
//! `ManualClock` only moves when told to, and `RecordingSink` keeps every
//! submitted record. Both are cheap handles: clone one before handing it to
//! the controller and keep the clone to steer or inspect.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::time::Duration;
//! use kiosk_survey::{ManualClock, RecordingSink, SurveyController, SurveyEvent, catalog};
//!
//! let clock = ManualClock::default();
//! let sink = RecordingSink::new();
//! let mut survey = SurveyController::new(catalog::customer_satisfaction(), clock.clone(), sink.clone())?;
//!
//! survey.dispatch(SurveyEvent::Start)?;
//! for _ in 0..5 {
//!     survey.dispatch(SurveyEvent::Skip)?;
//! }
//! survey.dispatch(SurveyEvent::ConfirmSubmit)?;
//! assert_eq!(sink.records().len(), 1);
//!
//! clock.advance(Duration::from_secs(5));
//! assert!(survey.tick());
//! ```

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};

use crate::{Clock, CompletedSurvey, CompletionSink};

/// A clock that stands still until advanced.
#[derive(Debug, Clone)]
pub struct ManualClock {
    now: Rc<Cell<DateTime<Utc>>>,
}

impl ManualClock {
    /// Create a clock stopped at `start`.
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Rc::new(Cell::new(start)),
        }
    }

    /// Move every handle of this clock forward.
    pub fn advance(&self, by: Duration) {
        let by = TimeDelta::from_std(by).unwrap_or(TimeDelta::zero());
        self.now.set(self.now.get() + by);
    }

    /// Jump to an absolute time.
    pub fn set(&self, to: DateTime<Utc>) {
        self.now.set(to);
    }
}

impl Default for ManualClock {
    /// Stopped at the Unix epoch.
    fn default() -> Self {
        Self::new(DateTime::<Utc>::default())
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        self.now.get()
    }
}

/// A completion sink that keeps every record it receives.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    records: Rc<RefCell<Vec<CompletedSurvey>>>,
    fail_with: Option<String>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink that records, then reports `message` as a failure.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            records: Rc::default(),
            fail_with: Some(message.into()),
        }
    }

    /// Everything received so far, oldest first.
    pub fn records(&self) -> Vec<CompletedSurvey> {
        self.records.borrow().clone()
    }

    pub fn last(&self) -> Option<CompletedSurvey> {
        self.records.borrow().last().cloned()
    }
}

impl CompletionSink for RecordingSink {
    fn complete(&mut self, record: &CompletedSurvey) -> anyhow::Result<()> {
        self.records.borrow_mut().push(record.clone());
        match &self.fail_with {
            Some(message) => Err(anyhow::anyhow!("{message}")),
            None => Ok(()),
        }
    }
}
