//! The survey state machine.
//!
//! `Welcome -> Survey -> ThankYou -> Welcome`, one session at a time. All
//! mutation happens synchronously inside the operation that the user
//! triggered, or inside `tick()` for the thank-you reset.

use std::time::Duration;

use chrono::TimeDelta;
use kiosk_survey_types::{
    Answer, AnswerMap, AnswerValue, Clock, CompletedSurvey, CompletionSink, Question,
    QuestionId, QuestionKind, SessionId, SurveyDefinition, SurveyError,
};

use crate::{
    ResetTimer, Screen, ScreenView, Session, SurveyEvent, SurveyView, TextBuffers, ThankYouView,
    WelcomeView,
};

/// How long the thank-you screen stays up before resetting.
pub const DEFAULT_RESET_DELAY: Duration = Duration::from_millis(5000);

/// Owns all survey state and exposes it as renderable screens.
pub struct SurveyController<K, S> {
    definition: SurveyDefinition,
    clock: K,
    sink: S,
    reset_delay: TimeDelta,
    session: Session,
    answers: AnswerMap,
    text_buffers: TextBuffers,
    reset_timer: ResetTimer,
}

impl<K: Clock, S: CompletionSink> SurveyController<K, S> {
    /// Create a controller on the welcome screen.
    ///
    /// Fails if the catalog is empty, has duplicate ids or a zero rating scale.
    pub fn new(definition: SurveyDefinition, clock: K, sink: S) -> Result<Self, SurveyError> {
        definition.validate()?;
        Ok(Self {
            definition,
            clock,
            sink,
            reset_delay: delta(DEFAULT_RESET_DELAY),
            session: Session::default(),
            answers: AnswerMap::new(),
            text_buffers: TextBuffers::new(),
            reset_timer: ResetTimer::new(),
        })
    }

    /// Set how long the thank-you screen stays up.
    pub fn with_reset_delay(mut self, delay: Duration) -> Self {
        self.reset_delay = delta(delay);
        self
    }

    // === Accessors ===

    pub fn definition(&self) -> &SurveyDefinition {
        &self.definition
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn screen(&self) -> Screen {
        self.session.screen
    }

    pub fn current_index(&self) -> usize {
        self.session.current_index
    }

    pub fn session_id(&self) -> Option<&SessionId> {
        self.session.id.as_ref()
    }

    pub fn confirm_pending(&self) -> bool {
        self.session.confirm_pending
    }

    pub fn answers(&self) -> &AnswerMap {
        &self.answers
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.definition.question(self.session.current_index)
    }

    /// Live text of the current question, if it is a text question.
    pub fn current_text(&self) -> Option<&str> {
        let question = self.current_question().filter(|q| q.is_text())?;
        self.text_buffers.get(question.id())
    }

    /// When the pending thank-you reset is due, if one is armed.
    pub fn next_deadline(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        self.reset_timer.deadline()
    }

    /// Time left until the pending thank-you reset, if one is armed.
    pub fn time_until_reset(&self) -> Option<Duration> {
        self.reset_timer
            .remaining(self.clock.now())
            .map(|left| left.to_std().unwrap_or_default())
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    fn is_last(&self) -> bool {
        self.session.current_index + 1 >= self.definition.len()
    }

    /// On the survey screen with the confirm dialog closed.
    fn is_answering(&self) -> bool {
        self.session.screen == Screen::Survey && !self.session.confirm_pending
    }

    // === Transitions ===

    /// Leave the welcome screen and begin a fresh session.
    pub fn start(&mut self) {
        if self.session.screen != Screen::Welcome {
            tracing::debug!(screen = ?self.session.screen, "start ignored outside welcome screen");
            return;
        }

        if self.reset_timer.cancel() {
            tracing::debug!("cancelled pending reset from previous session");
        }

        let id = SessionId::generate(self.clock.now());
        tracing::info!(session_id = %id, "survey started");

        self.answers.clear();
        self.text_buffers.clear();
        self.session = Session {
            id: Some(id),
            current_index: 0,
            screen: Screen::Survey,
            confirm_pending: false,
        };
        self.seed_current_text();
    }

    /// Commit pending text, then advance or open the confirm dialog.
    pub fn next(&mut self) {
        if !self.is_answering() {
            tracing::debug!("next ignored");
            return;
        }

        self.commit_pending_text();
        if self.is_last() {
            self.session.confirm_pending = true;
            tracing::debug!("reached end of survey, awaiting confirmation");
        } else {
            self.session.current_index += 1;
            self.seed_current_text();
        }
    }

    /// Commit pending text, then step back. No-op on the first question.
    pub fn previous(&mut self) {
        if !self.is_answering() {
            tracing::debug!("previous ignored");
            return;
        }

        self.commit_pending_text();
        if self.session.current_index > 0 {
            self.session.current_index -= 1;
            self.seed_current_text();
        }
    }

    /// Move on without answering. Keeps any answer already recorded.
    pub fn skip(&mut self) {
        self.next();
    }

    /// Record a rating for the current question.
    ///
    /// Only `1..=scale` is accepted. Outside an open survey screen this does nothing.
    pub fn rate(&mut self, value: u8) -> Result<(), SurveyError> {
        if !self.is_answering() {
            tracing::debug!(value, "rating ignored");
            return Ok(());
        }
        let Some(question) = self.current_question() else {
            return Ok(());
        };

        let id = question.id().clone();
        let kind = question.kind();
        let QuestionKind::Rating { scale } = *kind else {
            return Err(SurveyError::NotARatingQuestion(id));
        };
        if !kind.accepts_rating(value) {
            return Err(SurveyError::RatingOutOfRange {
                question: id,
                value,
                scale,
            });
        }

        self.record_answer(id, AnswerValue::Rating(value));
        Ok(())
    }

    /// Replace the live text of the current text question.
    ///
    /// Nothing is recorded until the user navigates.
    pub fn set_text(&mut self, value: impl Into<String>) {
        if !self.is_answering() {
            return;
        }
        let Some(id) = self
            .current_question()
            .filter(|q| q.is_text())
            .map(|q| q.id().clone())
        else {
            tracing::debug!("text ignored on rating question");
            return;
        };
        self.text_buffers.set(&id, value);
    }

    /// Freeze the answers into a completed record and show the thank-you screen.
    ///
    /// Does nothing unless the confirm dialog is open. The record is handed to
    /// the completion sink; if the sink fails the survey still counts as
    /// submitted and the failure is returned.
    pub fn confirm_submit(&mut self) -> Result<Option<CompletedSurvey>, SurveyError> {
        if self.session.screen != Screen::Survey || !self.session.confirm_pending {
            tracing::debug!("submit ignored without confirmation");
            return Ok(None);
        }
        let Some(session_id) = self.session.id.clone() else {
            return Ok(None);
        };

        self.commit_pending_text();

        let now = self.clock.now();
        let record = CompletedSurvey::new(session_id.clone(), self.answers.clone(), now);

        self.session.confirm_pending = false;
        self.session.screen = Screen::ThankYou;
        match now.checked_add_signed(self.reset_delay) {
            Some(deadline) => self.reset_timer.schedule(session_id.clone(), deadline),
            None => tracing::warn!("reset delay out of range, waiting for dismissal"),
        }

        tracing::info!(
            session_id = %session_id,
            answers = record.answers.len(),
            "survey submitted"
        );

        if let Err(err) = self.sink.complete(&record) {
            tracing::error!(session_id = %session_id, error = %err, "completion sink failed");
            return Err(SurveyError::Sink(err));
        }

        Ok(Some(record))
    }

    /// Close the confirm dialog, staying on the same question.
    pub fn cancel_submit(&mut self) {
        if self.session.confirm_pending {
            self.session.confirm_pending = false;
            tracing::debug!("submission cancelled");
        }
    }

    /// Fire the thank-you reset if it is due.
    ///
    /// A reset scheduled by another session, or arriving after the screen
    /// already changed, is dropped. Returns whether a reset happened.
    pub fn tick(&mut self) -> bool {
        let Some(scheduled_by) = self.reset_timer.take_due(self.clock.now()) else {
            return false;
        };

        if self.session.screen != Screen::ThankYou
            || self.session.id.as_ref() != Some(&scheduled_by)
        {
            tracing::debug!(session_id = %scheduled_by, "stale reset ignored");
            return false;
        }

        tracing::info!(session_id = %scheduled_by, "returning to welcome screen");
        self.reset();
        true
    }

    /// Leave the thank-you screen right away.
    pub fn return_to_welcome(&mut self) {
        if self.session.screen != Screen::ThankYou {
            return;
        }
        self.reset_timer.cancel();
        tracing::info!("thank-you screen dismissed");
        self.reset();
    }

    /// Route one interaction to the matching operation.
    pub fn dispatch(&mut self, event: SurveyEvent) -> Result<(), SurveyError> {
        match event {
            SurveyEvent::Start => self.start(),
            SurveyEvent::Rate(value) => self.rate(value)?,
            SurveyEvent::TextChanged(value) => self.set_text(value),
            SurveyEvent::Next => self.next(),
            SurveyEvent::Previous => self.previous(),
            SurveyEvent::Skip => self.skip(),
            SurveyEvent::ConfirmSubmit => {
                self.confirm_submit()?;
            }
            SurveyEvent::CancelSubmit => self.cancel_submit(),
            SurveyEvent::Dismiss => self.return_to_welcome(),
        }
        Ok(())
    }

    // === Rendering ===

    /// Describe the current screen.
    pub fn view(&self) -> ScreenView<'_> {
        match self.session.screen {
            Screen::Welcome => ScreenView::Welcome(WelcomeView {
                title: &self.definition.title,
                prelude: self.definition.prelude.as_deref(),
                estimate: self.definition.estimate.as_deref(),
            }),
            Screen::ThankYou => {
                let remaining = self
                    .reset_timer
                    .remaining(self.clock.now())
                    .unwrap_or_else(TimeDelta::zero);
                ScreenView::ThankYou(ThankYouView {
                    epilogue: self.definition.epilogue.as_deref(),
                    seconds_remaining: whole_seconds_up(remaining),
                })
            }
            Screen::Survey => match self.current_question() {
                Some(question) => {
                    let index = self.session.current_index;
                    let total = self.definition.len();
                    ScreenView::Survey(SurveyView {
                        title: &self.definition.title,
                        question,
                        position: index + 1,
                        total,
                        progress: (index + 1) as f64 / total as f64,
                        selected_rating: self.answers.rating(question.id()),
                        text: if question.is_text() {
                            self.text_buffers
                                .get(question.id())
                                .or_else(|| self.answers.text(question.id()))
                        } else {
                            None
                        },
                        confirm_pending: self.session.confirm_pending,
                        can_go_back: index > 0,
                        is_last: self.is_last(),
                    })
                }
                // Unreachable with a validated catalog.
                None => ScreenView::Welcome(WelcomeView {
                    title: &self.definition.title,
                    prelude: self.definition.prelude.as_deref(),
                    estimate: self.definition.estimate.as_deref(),
                }),
            },
        }
    }

    // === Answer recording ===

    /// Insert or overwrite the answer for `id`, stamped with now and the session.
    fn record_answer(&mut self, id: QuestionId, value: AnswerValue) {
        let Some(session_id) = self.session.id.clone() else {
            tracing::debug!(question = %id, "answer ignored outside a session");
            return;
        };
        tracing::debug!(question = %id, kind = value.type_name(), "answer recorded");
        self.answers
            .insert(id, Answer::new(value, self.clock.now(), session_id));
    }

    /// Copy the current text buffer into the answers if it changed.
    ///
    /// An unanswered question counts as empty text, so skipping an untouched
    /// text question records nothing.
    fn commit_pending_text(&mut self) {
        let Some(id) = self
            .current_question()
            .filter(|q| q.is_text())
            .map(|q| q.id().clone())
        else {
            return;
        };
        let Some(buffer) = self.text_buffers.get(&id) else {
            return;
        };
        if buffer == self.answers.text(&id).unwrap_or_default() {
            return;
        }
        let value = AnswerValue::Text(buffer.to_string());
        self.record_answer(id, value);
    }

    fn seed_current_text(&mut self) {
        if let Some(question) = self
            .definition
            .question(self.session.current_index)
            .filter(|q| q.is_text())
        {
            self.text_buffers.seed(question.id(), &self.answers);
        }
    }

    fn reset(&mut self) {
        self.session.reset();
        self.answers.clear();
        self.text_buffers.clear();
    }
}

fn delta(duration: Duration) -> TimeDelta {
    TimeDelta::from_std(duration).unwrap_or(TimeDelta::MAX)
}

fn whole_seconds_up(remaining: TimeDelta) -> u64 {
    let millis = remaining.num_milliseconds().max(0) as u64;
    millis.div_ceil(1000)
}
