use kiosk_survey_types::Question;

/// What a front end should draw right now.
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenView<'a> {
    Welcome(WelcomeView<'a>),
    Survey(SurveyView<'a>),
    ThankYou(ThankYouView<'a>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct WelcomeView<'a> {
    pub title: &'a str,
    pub prelude: Option<&'a str>,
    pub estimate: Option<&'a str>,
}

/// The survey screen, plus the confirm overlay when `confirm_pending` is set.
#[derive(Debug, Clone, PartialEq)]
pub struct SurveyView<'a> {
    pub title: &'a str,
    pub question: &'a Question,
    /// 1-based position of `question`.
    pub position: usize,
    pub total: usize,
    /// Share of the survey reached, `position / total`.
    pub progress: f64,
    /// Recorded rating of a rating question.
    pub selected_rating: Option<u8>,
    /// Live buffer of a text question.
    pub text: Option<&'a str>,
    pub confirm_pending: bool,
    pub can_go_back: bool,
    /// The forward button finishes instead of advancing.
    pub is_last: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ThankYouView<'a> {
    pub epilogue: Option<&'a str>,
    /// Whole seconds, rounded up, until the welcome screen returns.
    pub seconds_remaining: u64,
}

impl ScreenView<'_> {
    pub fn is_welcome(&self) -> bool {
        matches!(self, Self::Welcome(_))
    }

    pub fn is_survey(&self) -> bool {
        matches!(self, Self::Survey(_))
    }

    pub fn is_thank_you(&self) -> bool {
        matches!(self, Self::ThankYou(_))
    }
}
