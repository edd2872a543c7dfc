//! # kiosk-ratatui
//!
//! Terminal kiosk for kiosk-survey.
//!
//! Draws the welcome, survey and thank-you screens (plus the submit
//! confirmation overlay) with ratatui and turns key presses into
//! `SurveyEvent`s. The thank-you screen returns to the welcome screen on its
//! own; the kiosk only exits on Ctrl+C / Ctrl+Q, or Esc on the welcome screen.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use kiosk_ratatui::RatatuiKiosk;
//! use kiosk_survey::{LoggingSink, SurveyController, SystemClock, catalog};
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut survey =
//!         SurveyController::new(catalog::customer_satisfaction(), SystemClock, LoggingSink)?;
//!     RatatuiKiosk::new().with_title("Feedback").run(&mut survey)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Keys
//!
//! | Screen | Keys |
//! |---|---|
//! | Welcome | Enter / Space: start, Esc: quit |
//! | Survey | 1-9, 0 (=10): rate, ←/→: adjust rating, Enter / PgDn: next, Tab: skip, Shift+Tab / PgUp: previous |
//! | Confirm | Enter / y: submit, Esc / n: go back |
//! | Thank you | Enter: back to welcome now |

mod backend;
pub use backend::{KioskError, RatatuiKiosk, Theme};

mod draw;
pub use draw::draw;

mod keys;
pub use keys::{KeyAction, map_key};
