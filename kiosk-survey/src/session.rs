use kiosk_survey_types::SessionId;

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Welcome,
    Survey,
    ThankYou,
}

/// Navigation state of the current attempt.
///
/// `current_index` is always a valid question index while the screen is
/// `Survey`. `id` is set on leaving the welcome screen and cleared by the
/// thank-you reset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub(crate) id: Option<SessionId>,
    pub(crate) current_index: usize,
    pub(crate) screen: Screen,
    pub(crate) confirm_pending: bool,
}

impl Session {
    pub fn id(&self) -> Option<&SessionId> {
        self.id.as_ref()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Whether the submit confirmation dialog is open.
    pub fn confirm_pending(&self) -> bool {
        self.confirm_pending
    }

    /// Back to the welcome screen with nothing carried over.
    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}
