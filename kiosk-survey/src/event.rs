/// A user interaction, as reported by a front end.
///
/// Every button maps to one variant; rating buttons share `Rate` and carry
/// their number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurveyEvent {
    /// Leave the welcome screen and begin a new session.
    Start,
    /// Pick a rating for the current question.
    Rate(u8),
    /// The live contents of the current text question changed.
    TextChanged(String),
    Next,
    Previous,
    /// Move on without answering. Same as `Next`.
    Skip,
    /// Submit from the confirm dialog.
    ConfirmSubmit,
    /// Close the confirm dialog and stay on the last question.
    CancelSubmit,
    /// Leave the thank-you screen before the reset delay runs out.
    Dismiss,
}
