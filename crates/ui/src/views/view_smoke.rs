use std::time::Duration;

use quiz_core::model::{AnswerField, QuestionId, SessionPhase};

use super::test_harness::{FakeQuizApi, loaded_quiz_harness, sample_questions, setup_quiz_harness};
use crate::vm::QuizIntent;

fn edit(id: &str, field: AnswerField, value: &str) -> QuizIntent {
    QuizIntent::Edit {
        id: QuestionId::new(id),
        field,
        value: value.to_string(),
    }
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_start_screen_after_fetch() {
    let harness = loaded_quiz_harness(3).await;
    let html = harness.render();
    assert!(html.contains("Test Your"), "missing title in {html}");
    assert!(html.contains("Knowledge"), "missing title in {html}");
    assert!(html.contains("quiz-start"), "missing start button in {html}");
    assert!(html.contains("theme-dark"), "missing theme class in {html}");
    assert_eq!(harness.api.requested_counts(), vec![3]);
    assert_eq!(harness.phase(), Some(SessionPhase::Idle));
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_fetch_failure_offers_retry() {
    let mut harness = setup_quiz_harness(FakeQuizApi::default(), 4);
    harness.rebuild();
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("No questions are available"), "missing error in {html}");
    assert!(html.contains("Retry"), "missing retry in {html}");

    harness.api.set_questions(Some(sample_questions(4)));
    harness.dispatch(QuizIntent::Load).await;
    let html = harness.render();
    assert!(html.contains("Test Your"), "missing start screen in {html}");
    assert_eq!(harness.api.requested_counts().len(), 2);
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_full_attempt_shows_score() {
    let mut harness = loaded_quiz_harness(2).await;
    harness.api.reply(Some("You got 2 out of 2"));

    harness.dispatch(QuizIntent::Start).await;
    let html = harness.render();
    assert!(html.contains("Question 1/2"), "missing counter in {html}");
    assert!(html.contains("05:00"), "missing timer in {html}");
    assert!(html.contains("Range question 1?"), "missing question in {html}");
    assert!(html.contains("Next"), "missing next in {html}");

    harness.dispatch(edit("q1", AnswerField::Min, "3")).await;
    harness.dispatch(edit("q1", AnswerField::Max, "8")).await;
    assert_eq!(harness.answer("q1", AnswerField::Min).as_deref(), Some("3"));
    assert_eq!(harness.answer("q1", AnswerField::Max).as_deref(), Some("8"));

    harness.dispatch(QuizIntent::Next).await;
    let html = harness.render();
    assert!(html.contains("Question 2/2"), "missing counter in {html}");
    assert!(html.contains("Submit"), "missing submit label in {html}");

    harness.dispatch(QuizIntent::Next).await;
    let html = harness.render();
    assert_eq!(harness.phase(), Some(SessionPhase::Scored));
    assert!(html.contains("You got 2 out of 2"), "missing score in {html}");
    assert!(html.contains("toast-success"), "missing toast in {html}");
    assert!(html.contains("Attempt again"), "missing reset in {html}");
    assert_eq!(harness.api.submissions().len(), 1);

    harness.dispatch(QuizIntent::Reset).await;
    let html = harness.render();
    assert_eq!(harness.phase(), Some(SessionPhase::Idle));
    assert!(html.contains("Test Your"), "missing start screen in {html}");
    assert_eq!(harness.answer("q1", AnswerField::Min), None);
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_empty_submit_then_back_locks() {
    let mut harness = loaded_quiz_harness(1).await;
    harness.dispatch(QuizIntent::Start).await;

    // The last question's "Next" submits; nothing was answered.
    harness.dispatch(QuizIntent::Next).await;
    let html = harness.render();
    assert_eq!(harness.phase(), Some(SessionPhase::TimeExpiredPendingSubmit));
    assert!(html.contains("Submitting answers..."), "missing time-up in {html}");
    assert!(
        html.contains("Please provide at least one answer"),
        "missing toast in {html}"
    );
    assert!(harness.api.submissions().is_empty());

    harness.dispatch(QuizIntent::Back).await;
    let html = harness.render();
    assert_eq!(harness.phase(), Some(SessionPhase::TimeExpiredLocked));
    assert!(
        html.contains("You can no longer submit answers."),
        "missing locked message in {html}"
    );

    harness.dispatch(QuizIntent::Submit).await;
    assert!(harness.api.submissions().is_empty());
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_failed_submit_can_be_retried() {
    let mut harness = loaded_quiz_harness(1).await;
    harness.api.reply(None);
    harness.api.reply(Some("1 of 1"));

    harness.dispatch(QuizIntent::Start).await;
    harness.dispatch(edit("q1", AnswerField::Min, "1")).await;
    harness.dispatch(QuizIntent::Next).await;
    let html = harness.render();
    assert!(html.contains("Failed to submit answers"), "missing toast in {html}");
    assert_eq!(harness.phase(), Some(SessionPhase::TimeExpiredPendingSubmit));

    harness.dispatch(QuizIntent::Submit).await;
    let html = harness.render();
    assert!(html.contains("1 of 1"), "missing score in {html}");
    assert_eq!(harness.api.submissions().len(), 2);
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_question_screen_has_no_back() {
    let mut harness = loaded_quiz_harness(1).await;
    harness.dispatch(QuizIntent::Start).await;
    let html = harness.render();
    assert!(html.contains("quiz-next"), "missing next in {html}");
    assert!(!html.contains("quiz-back"), "unexpected back in {html}");

    harness.dispatch(QuizIntent::Next).await;
    let html = harness.render();
    assert_eq!(harness.phase(), Some(SessionPhase::TimeExpiredPendingSubmit));
    assert!(html.contains("quiz-back"), "missing back in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_range_inputs_keep_raw_text() {
    let mut harness = loaded_quiz_harness(1).await;
    harness.dispatch(QuizIntent::Start).await;
    let html = harness.render();
    assert!(html.contains(r#"type="text""#), "missing text input in {html}");
    assert!(!html.contains(r#"type="number""#), "unexpected number input in {html}");

    harness.dispatch(edit("q1", AnswerField::Min, "about 12")).await;
    assert_eq!(
        harness.answer("q1", AnswerField::Min).as_deref(),
        Some("about 12")
    );
}

#[tokio::test(flavor = "current_thread", start_paused = true)]
async fn quiz_view_smoke_toast_dismisses_itself() {
    let mut harness = loaded_quiz_harness(1).await;
    harness.dispatch(QuizIntent::Start).await;
    harness.dispatch(QuizIntent::Next).await;
    let html = harness.render();
    assert!(html.contains("toast-error"), "missing toast in {html}");
    assert!(
        html.contains("Please provide at least one answer"),
        "missing toast text in {html}"
    );

    tokio::time::sleep(Duration::from_millis(2100)).await;
    harness.settle().await;
    let html = harness.render();
    assert!(!html.contains("toast-error"), "toast still shown in {html}");
    assert!(
        !html.contains("Please provide at least one answer"),
        "toast text still shown in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_theme_toggle_switches_to_light() {
    let mut harness = loaded_quiz_harness(1).await;
    let html = harness.render();
    assert!(html.contains("theme-dark"), "missing dark theme in {html}");
    assert!(html.contains("Light mode"), "missing toggle label in {html}");

    harness.toggle_theme().await;
    let html = harness.render();
    assert!(html.contains("theme-light"), "missing light theme in {html}");
    assert!(html.contains("Dark mode"), "missing toggle label in {html}");
    assert!(!harness.store.snapshot().dark_theme);
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_tick_does_not_swallow_edit() {
    let mut harness = loaded_quiz_harness(1).await;
    harness.dispatch(QuizIntent::Start).await;

    harness.send(QuizIntent::Tick);
    harness.send(edit("q1", AnswerField::Min, "2"));
    harness.settle().await;

    let html = harness.render();
    assert_eq!(harness.answer("q1", AnswerField::Min).as_deref(), Some("2"));
    assert!(html.contains("04:59"), "missing countdown in {html}");
    assert_eq!(harness.phase(), Some(SessionPhase::InProgress));
}
