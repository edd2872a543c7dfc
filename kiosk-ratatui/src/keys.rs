//! Key press to survey event mapping.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use kiosk_survey::{QuestionKind, ScreenView, SurveyEvent, SurveyView};

/// What the kiosk loop should do with a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Dispatch(SurveyEvent),
    Quit,
    Ignore,
}

/// Map a key press to an action, given what is currently on screen.
pub fn map_key(key: KeyEvent, view: &ScreenView<'_>) -> KeyAction {
    if key.kind != KeyEventKind::Press {
        return KeyAction::Ignore;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
    {
        return KeyAction::Quit;
    }

    match view {
        ScreenView::Welcome(_) => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => KeyAction::Dispatch(SurveyEvent::Start),
            KeyCode::Esc => KeyAction::Quit,
            _ => KeyAction::Ignore,
        },
        ScreenView::ThankYou(_) => match key.code {
            KeyCode::Enter => KeyAction::Dispatch(SurveyEvent::Dismiss),
            _ => KeyAction::Ignore,
        },
        ScreenView::Survey(survey) if survey.confirm_pending => match key.code {
            KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => {
                KeyAction::Dispatch(SurveyEvent::ConfirmSubmit)
            }
            KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => {
                KeyAction::Dispatch(SurveyEvent::CancelSubmit)
            }
            _ => KeyAction::Ignore,
        },
        ScreenView::Survey(survey) => map_survey_key(key, survey),
    }
}

fn map_survey_key(key: KeyEvent, survey: &SurveyView<'_>) -> KeyAction {
    match key.code {
        KeyCode::Enter | KeyCode::PageDown => KeyAction::Dispatch(SurveyEvent::Next),
        KeyCode::Tab => KeyAction::Dispatch(SurveyEvent::Skip),
        KeyCode::BackTab | KeyCode::PageUp => KeyAction::Dispatch(SurveyEvent::Previous),
        _ => match survey.question.kind() {
            QuestionKind::Rating { scale } => {
                map_rating_key(key.code, *scale, survey.selected_rating)
            }
            QuestionKind::Text { .. } => map_text_key(key, survey.text.unwrap_or_default()),
        },
    }
}

fn map_rating_key(code: KeyCode, scale: u8, selected: Option<u8>) -> KeyAction {
    let value = match code {
        KeyCode::Char(c) => match c.to_digit(10) {
            // `0` stands for 10 on ten-point scales.
            Some(0) => 10,
            Some(d) => d as u8,
            None => return KeyAction::Ignore,
        },
        KeyCode::Left => selected.map_or(1, |r| r.saturating_sub(1).max(1)),
        KeyCode::Right => selected.map_or(1, |r| r.saturating_add(1).min(scale)),
        _ => return KeyAction::Ignore,
    };

    if (1..=scale).contains(&value) {
        KeyAction::Dispatch(SurveyEvent::Rate(value))
    } else {
        KeyAction::Ignore
    }
}

fn map_text_key(key: KeyEvent, current: &str) -> KeyAction {
    match key.code {
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            let mut text = current.to_string();
            text.push(c);
            KeyAction::Dispatch(SurveyEvent::TextChanged(text))
        }
        KeyCode::Backspace if !current.is_empty() => {
            let mut text = current.to_string();
            text.pop();
            KeyAction::Dispatch(SurveyEvent::TextChanged(text))
        }
        _ => KeyAction::Ignore,
    }
}
