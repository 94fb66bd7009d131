use std::sync::Arc;

use quiz_core::config::DEFAULT_QUESTION_COUNT;
use quiz_core::model::{AnswerField, QuestionId};
use quiz_core::{AdvanceOutcome, QuizConfig, QuizSession, SessionError, TickOutcome};

use crate::error::QuizError;
use crate::notifier::{NO_ANSWERS_MESSAGE, Notifier, SUBMIT_FAILED_MESSAGE, Toast};
use crate::quiz_api::QuizApi;
use crate::scheduler::TickScheduler;

/// What a tick or a "next" press led to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    Continued,
    /// The attempt closed and the answers were scored.
    Submitted(String),
}

/// Drives one quiz attempt: the session state machine plus the remote API,
/// the countdown scheduler and user notices.
pub struct QuizController {
    session: QuizSession,
    api: Arc<dyn QuizApi>,
    notifier: Arc<dyn Notifier>,
    scheduler: Arc<dyn TickScheduler>,
    question_count: u32,
}

impl QuizController {
    #[must_use]
    pub fn new(
        api: Arc<dyn QuizApi>,
        notifier: Arc<dyn Notifier>,
        scheduler: Arc<dyn TickScheduler>,
    ) -> Self {
        Self {
            session: QuizSession::new(),
            api,
            notifier,
            scheduler,
            question_count: DEFAULT_QUESTION_COUNT,
        }
    }

    #[must_use]
    pub fn with_question_count(mut self, question_count: u32) -> Self {
        self.question_count = question_count;
        self
    }

    #[must_use]
    pub fn with_config(self, config: &QuizConfig) -> Self {
        self.with_question_count(config.question_count())
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    #[must_use]
    pub fn question_count(&self) -> u32 {
        self.question_count
    }

    /// Load a fresh set of questions. A failure is logged and leaves the
    /// current state untouched; nothing is retried.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::FetchQuestionsFailed` when the API call fails.
    pub async fn fetch_questions(&mut self) -> Result<usize, QuizError> {
        match self.api.random_questions(self.question_count).await {
            Ok(questions) => {
                let count = questions.len();
                self.session.load_questions(questions);
                tracing::info!(count, "questions loaded");
                Ok(count)
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to fetch questions");
                Err(QuizError::FetchQuestionsFailed(err))
            }
        }
    }

    /// # Errors
    ///
    /// Returns `QuizError::Session` unless the attempt is idle with questions
    /// loaded.
    pub fn start(&mut self) -> Result<(), QuizError> {
        self.session.start()?;
        self.scheduler.start();
        tracing::info!(questions = self.session.total_questions(), "quiz started");
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `QuizError::Session` outside `InProgress` or for unknown ids.
    pub fn record_answer(
        &mut self,
        id: &QuestionId,
        field: AnswerField,
        value: impl Into<String>,
    ) -> Result<(), QuizError> {
        self.session.record_answer(id, field, value)?;
        Ok(())
    }

    /// Count one second without touching the network. On `Expired` the
    /// scheduler is stopped and the caller owes a [`Self::submit`].
    pub fn tick_clock(&mut self) -> TickOutcome {
        let outcome = self.session.tick();
        match outcome {
            TickOutcome::Ignored => {}
            TickOutcome::Counted { remaining_secs } => {
                tracing::trace!(remaining_secs, "tick");
            }
            TickOutcome::Expired => {
                tracing::info!("time limit reached");
                self.scheduler.stop();
            }
        }
        outcome
    }

    /// Count one second; at the limit the attempt is submitted.
    ///
    /// # Errors
    ///
    /// Returns the submission error when the expiring tick's submit fails.
    pub async fn tick(&mut self) -> Result<Step, QuizError> {
        match self.tick_clock() {
            TickOutcome::Ignored | TickOutcome::Counted { .. } => Ok(Step::Continued),
            TickOutcome::Expired => self.submit().await.map(Step::Submitted),
        }
    }

    /// "Next": move on, or submit from the last question.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::Session` outside `InProgress`, or the submission
    /// error from the last question.
    pub async fn advance(&mut self) -> Result<Step, QuizError> {
        match self.session.advance()? {
            AdvanceOutcome::Moved { index } => {
                tracing::debug!(index, "next question");
                Ok(Step::Continued)
            }
            AdvanceOutcome::ReachedEnd => {
                self.scheduler.stop();
                self.submit().await.map(Step::Submitted)
            }
        }
    }

    /// Send the answers for scoring. The timer stops first, whatever the
    /// outcome.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NoAnswersProvided` (with an error toast) when
    /// nothing was answered, `QuizError::SubmitFailed` (with an error toast)
    /// when the API call fails, and `QuizError::Session` when a submission is
    /// already in flight, already scored, or the attempt is locked.
    pub async fn submit(&mut self) -> Result<String, QuizError> {
        self.scheduler.stop();
        let answers = match self.session.begin_submission() {
            Ok(answers) => answers,
            Err(SessionError::NoAnswersProvided) => {
                tracing::warn!(phase = %self.session.phase(), "submit without answers");
                self.notifier.notify(Toast::error(NO_ANSWERS_MESSAGE));
                return Err(QuizError::NoAnswersProvided);
            }
            Err(err) => {
                tracing::debug!(error = %err, "submit skipped");
                return Err(QuizError::Session(err));
            }
        };

        match self.api.submit_answers(&answers).await {
            Ok(message) => {
                tracing::info!(answered = answers.len(), score = %message, "answers scored");
                self.session.complete_submission(message.clone());
                self.notifier.notify(Toast::success(message.clone()));
                Ok(message)
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to submit answers");
                self.session.fail_submission();
                self.notifier.notify(Toast::error(SUBMIT_FAILED_MESSAGE));
                Err(QuizError::SubmitFailed(err))
            }
        }
    }

    /// "Back": halt the countdown; an expired attempt becomes locked.
    pub fn stop(&mut self) {
        self.scheduler.stop();
        self.session.stop();
    }

    /// "Attempt again". Keeps the loaded questions.
    pub fn reset(&mut self) {
        self.scheduler.stop();
        self.session.reset();
        tracing::debug!("quiz reset");
    }
}
