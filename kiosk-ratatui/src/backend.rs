//! Ratatui front end for `SurveyController`.
//!
//! Owns the terminal while the kiosk runs: draws the current screen, turns
//! key presses into survey events and keeps the thank-you timer ticking.

use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use kiosk_survey::{Clock, CompletionSink, SurveyController, SurveyError};
use ratatui::{Terminal, prelude::CrosstermBackend, style::Color};
use thiserror::Error;

use crate::{KeyAction, draw, map_key};

/// Error type for the Ratatui kiosk.
#[derive(Debug, Error)]
pub enum KioskError {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal setup/restore error.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// The survey rejected an event the kiosk produced.
    #[error("Survey error: {0}")]
    Survey(#[from] SurveyError),
}

/// Color theme for the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    pub primary: Color,
    pub secondary: Color,
    /// Text on filled buttons.
    pub on_primary: Color,
    /// Fill of unselected rating buttons.
    pub surface: Color,
    pub text: Color,
    pub highlight: Color,
    pub success: Color,
    pub border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Color::Cyan,
            secondary: Color::Blue,
            on_primary: Color::Black,
            surface: Color::DarkGray,
            text: Color::White,
            highlight: Color::Yellow,
            success: Color::Green,
            border: Color::Gray,
        }
    }
}

/// Full-screen terminal kiosk running one `SurveyController` after another.
#[derive(Debug, Clone)]
pub struct RatatuiKiosk {
    /// Title shown on the outer border.
    title: String,
    /// Color theme for the UI.
    theme: Theme,
    /// Longest wait for input before redrawing.
    poll_interval: Duration,
}

impl Default for RatatuiKiosk {
    fn default() -> Self {
        Self::new()
    }
}

impl RatatuiKiosk {
    /// Create a new kiosk with default settings.
    pub fn new() -> Self {
        Self {
            title: "Customer Feedback".to_string(),
            theme: Theme::default(),
            poll_interval: Duration::from_millis(250),
        }
    }

    /// Set the title shown on the outer border.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set a custom color theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Set the longest wait for input before the screen is redrawn.
    ///
    /// Bounds how stale the thank-you countdown can get.
    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval.max(Duration::from_millis(10));
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    /// Run the kiosk until the user quits.
    ///
    /// The terminal is restored even if the loop fails.
    pub fn run<K: Clock, S: CompletionSink>(
        &self,
        survey: &mut SurveyController<K, S>,
    ) -> Result<(), KioskError> {
        let mut terminal = self.setup_terminal()?;
        tracing::info!(title = %self.title, "kiosk started");

        let result = self.event_loop(&mut terminal, survey);

        self.restore_terminal(&mut terminal)?;
        tracing::info!("kiosk stopped");
        result
    }

    fn event_loop<K: Clock, S: CompletionSink>(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        survey: &mut SurveyController<K, S>,
    ) -> Result<(), KioskError> {
        loop {
            terminal.draw(|frame| draw(frame, &survey.view(), &self.theme, &self.title))?;

            if event::poll(self.poll_timeout(survey.time_until_reset()))?
                && let Event::Key(key) = event::read()?
            {
                match map_key(key, &survey.view()) {
                    KeyAction::Quit => return Ok(()),
                    KeyAction::Dispatch(survey_event) => match survey.dispatch(survey_event) {
                        Ok(()) => {}
                        // Already logged by the controller; the kiosk keeps going.
                        Err(err) if err.is_sink() => {
                            tracing::warn!(error = %err, "submission not delivered");
                        }
                        Err(err) => return Err(err.into()),
                    },
                    KeyAction::Ignore => {}
                }
            }

            survey.tick();
        }
    }

    /// Wait no longer than the poll interval, and wake up for a due reset.
    fn poll_timeout(&self, until_reset: Option<Duration>) -> Duration {
        match until_reset {
            Some(left) => left.min(self.poll_interval),
            None => self.poll_interval,
        }
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>, KioskError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        enter_alternate_screen(&mut stdout)?;
        match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => Ok(terminal),
            Err(err) => {
                let _ = execute!(io::stdout(), LeaveAlternateScreen);
                undo_raw_mode();
                Err(KioskError::Terminal(format!("cannot open terminal: {err}")))
            }
        }
    }

    fn restore_terminal(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> Result<(), KioskError> {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }
}

/// Switch `out` to the alternate screen. Leaves raw mode again on failure.
fn enter_alternate_screen<W: Write>(out: &mut W) -> Result<(), KioskError> {
    execute!(out, EnterAlternateScreen).map_err(|err| {
        undo_raw_mode();
        KioskError::from(err)
    })
}

/// Best effort, on a setup path that already failed.
fn undo_raw_mode() {
    if let Err(err) = disable_raw_mode() {
        tracing::warn!(error = %err, "failed to leave raw mode");
    }
}
