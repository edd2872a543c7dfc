//! # kiosk-survey
//!
//! A fixed-sequence survey for kiosks. Presentation-agnostic.
//!
//! `SurveyController` owns the whole session: which screen is showing, which
//! question is current, the answers recorded so far and the confirm dialog.
//! A front end renders `SurveyController::view()` and feeds user input back
//! as `SurveyEvent`s.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use kiosk_survey::{LoggingSink, SurveyController, SurveyEvent, SystemClock, catalog};
//!
//! let mut survey = SurveyController::new(catalog::customer_satisfaction(), SystemClock, LoggingSink)?;
//!
//! survey.dispatch(SurveyEvent::Start)?;
//! survey.dispatch(SurveyEvent::Rate(5))?;
//! survey.dispatch(SurveyEvent::Next)?;
//!
//! // In the host's event loop, let the thank-you screen time out:
//! survey.tick();
//! ```
//!
//! ## Screens
//!
//! `Welcome` -> `Survey` -> `ThankYou` -> `Welcome`. The last step happens on
//! its own after the reset delay (5 seconds by default).
//!
//! ## Front ends
//!
//! - `kiosk-ratatui` - terminal kiosk

// Re-export all types from kiosk-survey-types
pub use kiosk_survey_types::*;

pub mod catalog;

mod controller;
pub use controller::{DEFAULT_RESET_DELAY, SurveyController};

mod event;
pub use event::SurveyEvent;

mod session;
pub use session::{Screen, Session};

mod text_buffers;
pub use text_buffers::TextBuffers;

mod reset_timer;
pub use reset_timer::ResetTimer;

mod view;
pub use view::{ScreenView, SurveyView, ThankYouView, WelcomeView};

mod logging_sink;
pub use logging_sink::LoggingSink;

// Clock and sink doubles for driving the controller without a terminal
mod test_support;
pub use test_support::{ManualClock, RecordingSink};
