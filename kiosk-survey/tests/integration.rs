//! Integration tests for kiosk-survey

use std::collections::HashSet;
use std::time::Duration;

use kiosk_survey::{
    AnswerValue, ManualClock, QuestionId, RecordingSink, Screen, ScreenView, SurveyController,
    SurveyError, SurveyEvent, SurveyStatus, catalog,
};

type Survey = SurveyController<ManualClock, RecordingSink>;

fn survey() -> (Survey, ManualClock, RecordingSink) {
    let clock = ManualClock::default();
    let sink = RecordingSink::new();
    let controller =
        SurveyController::new(catalog::customer_satisfaction(), clock.clone(), sink.clone())
            .unwrap();
    (controller, clock, sink)
}

fn id(s: &str) -> QuestionId {
    QuestionId::from(s)
}

#[test]
fn test_start_opens_first_question() {
    let (mut survey, _, _) = survey();
    survey.dispatch(SurveyEvent::Start).unwrap();

    assert_eq!(survey.screen(), Screen::Survey);
    assert_eq!(survey.current_index(), 0);
    assert!(survey.session_id().is_some());
    assert!(survey.answers().is_empty());

    let ScreenView::Survey(view) = survey.view() else {
        panic!("expected survey screen");
    };
    assert_eq!(view.title, "Customer Survey");
    assert_eq!(view.position, 1);
    assert_eq!(view.total, 5);
    assert!((view.progress - 0.2).abs() < f64::EPSILON);
    assert!(!view.can_go_back);
    assert!(!view.is_last);
    assert!(!view.confirm_pending);
}

#[test]
fn test_answer_keys_stay_within_catalog() {
    let (mut survey, _, _) = survey();
    let events = [
        SurveyEvent::Start,
        SurveyEvent::Rate(3),
        SurveyEvent::TextChanged("ignored on a rating".into()),
        SurveyEvent::Next,
        SurveyEvent::Rate(9),
        SurveyEvent::Skip,
        SurveyEvent::Previous,
        SurveyEvent::Rate(2),
        SurveyEvent::Next,
        SurveyEvent::Next,
        SurveyEvent::Rate(10),
        SurveyEvent::Next,
        SurveyEvent::TextChanged("more".into()),
        SurveyEvent::Previous,
        SurveyEvent::Next,
        SurveyEvent::Next,
        SurveyEvent::CancelSubmit,
    ];
    for event in events {
        // Out-of-range ratings report an error; the walk carries on.
        let _ = survey.dispatch(event);
    }

    let catalog_ids: HashSet<&QuestionId> = survey
        .definition()
        .questions()
        .iter()
        .map(|q| q.id())
        .collect();
    assert!(survey.answers().ids().all(|k| catalog_ids.contains(k)));
    assert_eq!(survey.answers().len(), 4);
}

#[test]
fn test_next_on_last_question_opens_confirm() {
    let (mut survey, _, _) = survey();
    survey.start();
    for _ in 0..4 {
        survey.next();
    }
    assert_eq!(survey.current_index(), 4);
    assert!(!survey.confirm_pending());

    survey.next();
    assert_eq!(survey.current_index(), 4);
    assert_eq!(survey.screen(), Screen::Survey);
    assert!(survey.confirm_pending());

    let ScreenView::Survey(view) = survey.view() else {
        panic!("expected survey screen");
    };
    assert!(view.confirm_pending);
    assert!(view.is_last);
}

#[test]
fn test_confirm_submit_requires_pending_confirmation() {
    let (mut survey, _, sink) = survey();

    assert!(survey.confirm_submit().unwrap().is_none());
    assert_eq!(survey.screen(), Screen::Welcome);

    survey.start();
    survey.rate(4).unwrap();
    assert!(survey.confirm_submit().unwrap().is_none());
    assert_eq!(survey.screen(), Screen::Survey);
    assert!(sink.records().is_empty());
}

#[test]
fn test_rating_survives_navigation() {
    let (mut survey, _, _) = survey();
    survey.start();
    survey.rate(4).unwrap();
    survey.next();
    survey.previous();

    let ScreenView::Survey(view) = survey.view() else {
        panic!("expected survey screen");
    };
    assert_eq!(view.question.id(), &id("q1"));
    assert_eq!(view.selected_rating, Some(4));
}

#[test]
fn test_text_buffer_survives_navigation() {
    let (mut survey, _, _) = survey();
    survey.start();
    for _ in 0..4 {
        survey.next();
    }
    survey.set_text("needs more variety");
    survey.previous();
    assert_eq!(survey.current_index(), 3);
    survey.next();

    assert_eq!(survey.current_text(), Some("needs more variety"));
    let ScreenView::Survey(view) = survey.view() else {
        panic!("expected survey screen");
    };
    assert_eq!(view.text, Some("needs more variety"));
    assert_eq!(survey.answers().text(&id("q5")), Some("needs more variety"));
}

#[test]
fn test_full_survey_scenario() {
    let (mut survey, _, sink) = survey();
    survey.dispatch(SurveyEvent::Start).unwrap();
    let session = survey.session_id().cloned().unwrap();

    for rating in [5, 3, 4, 8] {
        survey.dispatch(SurveyEvent::Rate(rating)).unwrap();
        survey.dispatch(SurveyEvent::Next).unwrap();
    }
    survey
        .dispatch(SurveyEvent::TextChanged("great service".into()))
        .unwrap();
    survey.dispatch(SurveyEvent::Next).unwrap();
    survey.dispatch(SurveyEvent::ConfirmSubmit).unwrap();

    assert_eq!(survey.screen(), Screen::ThankYou);
    let records = sink.records();
    assert_eq!(records.len(), 1);

    let record = &records[0];
    assert_eq!(record.status, SurveyStatus::Completed);
    assert_eq!(record.session_id, session);
    assert_eq!(record.answers.len(), 5);
    assert!(record.answers.iter().all(|(_, a)| a.session_id == session));
    assert_eq!(record.answers.rating(&id("q4")), Some(8));
    assert_eq!(
        record.answers.value(&id("q5")),
        Some(&AnswerValue::Text("great service".into()))
    );
}

#[test]
fn test_text_typed_after_cancel_is_submitted() {
    let (mut survey, _, sink) = survey();
    survey.start();
    for _ in 0..4 {
        survey.skip();
    }
    survey.next();
    // Dialog open; back out, type, and finish again.
    survey.cancel_submit();
    survey.set_text("typed late");
    survey.next();
    let record = survey.confirm_submit().unwrap().unwrap();

    assert_eq!(record.answers.text(&id("q5")), Some("typed late"));
    assert_eq!(sink.last(), Some(record));
}

#[test]
fn test_skip_everything_still_completes() {
    let (mut survey, _, sink) = survey();
    survey.start();
    for _ in 0..5 {
        survey.dispatch(SurveyEvent::Skip).unwrap();
    }
    assert!(survey.confirm_pending());
    survey.dispatch(SurveyEvent::ConfirmSubmit).unwrap();

    let record = sink.last().unwrap();
    assert_eq!(record.status, SurveyStatus::Completed);
    assert!(record.answers.is_empty());
}

#[test]
fn test_skip_keeps_existing_answer() {
    let (mut survey, _, _) = survey();
    survey.start();
    survey.rate(2).unwrap();
    survey.next();
    survey.previous();
    survey.skip();

    assert_eq!(survey.current_index(), 1);
    assert_eq!(survey.answers().rating(&id("q1")), Some(2));
}

#[test]
fn test_auto_reset_clears_session() {
    let (mut survey, clock, _) = survey();
    survey.start();
    let first = survey.session_id().cloned().unwrap();
    survey.rate(5).unwrap();
    for _ in 0..5 {
        survey.next();
    }
    survey.confirm_submit().unwrap();

    clock.advance(Duration::from_millis(4999));
    assert!(!survey.tick());
    assert_eq!(survey.screen(), Screen::ThankYou);

    clock.advance(Duration::from_millis(1));
    assert!(survey.tick());
    assert_eq!(survey.screen(), Screen::Welcome);
    assert!(survey.answers().is_empty());
    assert!(survey.session_id().is_none());
    assert_eq!(survey.current_index(), 0);
    assert!(survey.next_deadline().is_none());

    survey.start();
    let second = survey.session_id().cloned().unwrap();
    assert_ne!(first, second);
}

#[test]
fn test_previous_on_first_question_is_noop() {
    let (mut survey, _, _) = survey();
    survey.start();
    survey.rate(3).unwrap();
    let before = survey.session().clone();
    let answers_before = survey.answers().clone();

    survey.previous();

    assert_eq!(survey.session(), &before);
    assert_eq!(survey.answers(), &answers_before);
}

#[test]
fn test_cancel_submit_returns_to_last_question() {
    let (mut survey, _, sink) = survey();
    survey.start();
    for _ in 0..5 {
        survey.next();
    }
    survey.dispatch(SurveyEvent::CancelSubmit).unwrap();

    assert!(!survey.confirm_pending());
    assert_eq!(survey.screen(), Screen::Survey);
    assert_eq!(survey.current_index(), 4);
    assert!(sink.records().is_empty());

    survey.previous();
    assert_eq!(survey.current_index(), 3);
}

#[test]
fn test_untouched_text_question_records_nothing() {
    let (mut survey, _, _) = survey();
    survey.start();
    for _ in 0..4 {
        survey.next();
    }
    assert_eq!(survey.current_text(), Some(""));
    survey.previous();
    assert!(!survey.answers().contains(&id("q5")));
}

#[test]
fn test_clearing_text_overwrites_with_empty() {
    let (mut survey, _, _) = survey();
    survey.start();
    for _ in 0..4 {
        survey.next();
    }
    survey.set_text("first thought");
    survey.previous();
    survey.next();
    survey.set_text("");
    survey.previous();

    assert_eq!(survey.answers().text(&id("q5")), Some(""));
}

#[test]
fn test_rerating_overwrites_and_restamps() {
    let (mut survey, clock, _) = survey();
    survey.start();
    survey.rate(1).unwrap();
    let first_stamp = survey.answers().get(&id("q1")).unwrap().recorded_at;

    clock.advance(Duration::from_secs(3));
    survey.rate(5).unwrap();

    let answer = survey.answers().get(&id("q1")).unwrap();
    assert_eq!(survey.answers().len(), 1);
    assert_eq!(answer.value, AnswerValue::Rating(5));
    assert!(answer.recorded_at > first_stamp);
}

#[test]
fn test_out_of_range_rating_via_dispatch() {
    let (mut survey, _, _) = survey();
    survey.start();
    for _ in 0..3 {
        survey.next();
    }

    // q4 goes to 10.
    survey.dispatch(SurveyEvent::Rate(10)).unwrap();
    let err = survey.dispatch(SurveyEvent::Rate(11)).unwrap_err();
    assert!(matches!(err, SurveyError::RatingOutOfRange { scale: 10, .. }));
    assert_eq!(survey.answers().rating(&id("q4")), Some(10));
}

#[test]
fn test_sink_failure_still_shows_thank_you() {
    let clock = ManualClock::default();
    let sink = RecordingSink::failing("network down");
    let mut survey =
        SurveyController::new(catalog::customer_satisfaction(), clock.clone(), sink.clone())
            .unwrap();

    survey.start();
    for _ in 0..5 {
        survey.next();
    }
    let err = survey.confirm_submit().unwrap_err();

    assert!(err.is_sink());
    assert_eq!(survey.screen(), Screen::ThankYou);
    assert_eq!(sink.records().len(), 1);

    clock.advance(Duration::from_secs(5));
    assert!(survey.tick());
    assert_eq!(survey.screen(), Screen::Welcome);
}

#[test]
fn test_dismiss_cancels_reset_and_protects_new_session() {
    let (mut survey, clock, _) = survey();
    survey.start();
    for _ in 0..5 {
        survey.next();
    }
    survey.confirm_submit().unwrap();
    assert!(survey.next_deadline().is_some());

    survey.dispatch(SurveyEvent::Dismiss).unwrap();
    assert_eq!(survey.screen(), Screen::Welcome);
    assert!(survey.next_deadline().is_none());

    survey.start();
    survey.rate(4).unwrap();

    // The old deadline passes while the new session is in progress.
    clock.advance(Duration::from_secs(10));
    assert!(!survey.tick());
    assert_eq!(survey.screen(), Screen::Survey);
    assert_eq!(survey.answers().rating(&id("q1")), Some(4));
}

#[test]
fn test_events_ignored_on_wrong_screen() {
    let (mut survey, _, _) = survey();
    survey.dispatch(SurveyEvent::Next).unwrap();
    survey.dispatch(SurveyEvent::Rate(3)).unwrap();
    survey.dispatch(SurveyEvent::Dismiss).unwrap();
    assert_eq!(survey.screen(), Screen::Welcome);
    assert!(survey.answers().is_empty());

    survey.start();
    let session = survey.session_id().cloned();
    survey.dispatch(SurveyEvent::Start).unwrap();
    assert_eq!(survey.session_id().cloned(), session);
}

#[test]
fn test_thank_you_view_counts_down() {
    let (mut survey, clock, _) = survey();
    survey.start();
    for _ in 0..5 {
        survey.next();
    }
    survey.confirm_submit().unwrap();

    let ScreenView::ThankYou(view) = survey.view() else {
        panic!("expected thank-you screen");
    };
    assert_eq!(view.seconds_remaining, 5);
    assert!(view.epilogue.is_some());

    clock.advance(Duration::from_millis(3200));
    let ScreenView::ThankYou(view) = survey.view() else {
        panic!("expected thank-you screen");
    };
    assert_eq!(view.seconds_remaining, 2);
}

#[test]
fn test_custom_reset_delay() {
    let clock = ManualClock::default();
    let mut survey = SurveyController::new(
        catalog::customer_satisfaction(),
        clock.clone(),
        RecordingSink::new(),
    )
    .unwrap()
    .with_reset_delay(Duration::from_secs(1));

    survey.start();
    for _ in 0..5 {
        survey.next();
    }
    survey.confirm_submit().unwrap();

    clock.advance(Duration::from_secs(1));
    assert!(survey.tick());
}

#[test]
fn test_closure_sink() {
    let mut seen = Vec::new();
    {
        let sink = |record: &kiosk_survey::CompletedSurvey| -> anyhow::Result<()> {
            seen.push(record.session_id.clone());
            Ok(())
        };
        let mut survey =
            SurveyController::new(catalog::customer_satisfaction(), ManualClock::default(), sink)
                .unwrap();
        survey.start();
        for _ in 0..5 {
            survey.skip();
        }
        survey.confirm_submit().unwrap();
    }
    assert_eq!(seen.len(), 1);
}
