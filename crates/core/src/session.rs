//! Quiz attempt state machine.
//!
//! `QuizSession` owns everything one attempt needs and performs no I/O.
//! Network calls live in the services layer, which brackets them with
//! [`QuizSession::begin_submission`] and [`QuizSession::complete_submission`]
//! or [`QuizSession::fail_submission`].

use thiserror::Error;

use crate::model::{AnswerField, AnswerSet, Question, QuestionId, RangeAnswer, SessionPhase};
use crate::time::{self, TimerState};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("cannot move from {from} to {to}")]
    InvalidTransition {
        from: SessionPhase,
        to: SessionPhase,
    },

    #[error("operation not allowed while {phase}")]
    NotAllowed { phase: SessionPhase },

    #[error("no questions loaded")]
    NoQuestions,

    #[error("unknown question {0}")]
    UnknownQuestion(QuestionId),

    #[error("please provide at least one answer")]
    NoAnswersProvided,

    #[error("a submission is already in flight")]
    SubmissionInFlight,

    #[error("attempt already scored")]
    AlreadyScored,
}

/// Result of one timer tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Timer not running, or already expired.
    Ignored,
    Counted { remaining_secs: u32 },
    /// This tick reached the limit; the caller must submit.
    Expired,
}

/// Result of pressing "next".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdvanceOutcome {
    Moved { index: usize },
    /// The last question was showing; the attempt is closed and the caller
    /// must submit.
    ReachedEnd,
}

#[derive(Debug, Clone, Default)]
pub struct QuizSession {
    questions: Vec<Question>,
    answers: AnswerSet,
    timer: TimerState,
    phase: SessionPhase,
    current_index: usize,
    score: Option<String>,
    submission_in_flight: bool,
}

impl QuizSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_questions(questions: Vec<Question>) -> Self {
        let mut session = Self::new();
        session.load_questions(questions);
        session
    }

    // ─── Accessors ─────────────────────────────────────────────────────────

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 >= self.questions.len()
    }

    #[must_use]
    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    #[must_use]
    pub fn answer_for(&self, id: &QuestionId) -> Option<&RangeAnswer> {
        self.answers.get(id)
    }

    #[must_use]
    pub fn has_answers(&self) -> bool {
        !self.answers.is_empty()
    }

    #[must_use]
    pub fn timer(&self) -> TimerState {
        self.timer
    }

    #[must_use]
    pub fn score(&self) -> Option<&str> {
        self.score.as_deref()
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submission_in_flight
    }

    /// Countdown label, `MM:SS`.
    #[must_use]
    pub fn remaining_label(&self) -> String {
        time::format_remaining(self.timer.elapsed_secs())
    }

    /// One-based progress label, e.g. `Question 2/4`.
    #[must_use]
    pub fn question_counter(&self) -> String {
        format!(
            "Question {}/{}",
            self.current_index + 1,
            self.questions.len()
        )
    }

    // ─── Operations ────────────────────────────────────────────────────────

    /// Replace the question list. Answers and position start over.
    pub fn load_questions(&mut self, questions: Vec<Question>) {
        self.questions = questions;
        self.answers.clear();
        self.current_index = 0;
    }

    /// # Errors
    ///
    /// Returns `SessionError::InvalidTransition` unless the session is idle,
    /// and `SessionError::NoQuestions` when nothing was loaded.
    pub fn start(&mut self) -> Result<(), SessionError> {
        self.ensure_transition(SessionPhase::InProgress)?;
        if self.questions.is_empty() {
            return Err(SessionError::NoQuestions);
        }
        self.timer.start();
        self.phase = SessionPhase::InProgress;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `SessionError::NotAllowed` outside `InProgress` and
    /// `SessionError::UnknownQuestion` for ids that were not fetched.
    pub fn record_answer(
        &mut self,
        id: &QuestionId,
        field: AnswerField,
        value: impl Into<String>,
    ) -> Result<(), SessionError> {
        if self.phase != SessionPhase::InProgress {
            return Err(SessionError::NotAllowed { phase: self.phase });
        }
        if !self.questions.iter().any(|q| q.id() == id) {
            return Err(SessionError::UnknownQuestion(id.clone()));
        }
        self.answers.record(id.clone(), field, value);
        Ok(())
    }

    pub fn tick(&mut self) -> TickOutcome {
        if self.phase != SessionPhase::InProgress {
            return TickOutcome::Ignored;
        }
        if !self.timer.is_running() || self.timer.is_expired() {
            return TickOutcome::Ignored;
        }
        if self.timer.tick() {
            self.phase = SessionPhase::TimeExpiredPendingSubmit;
            return TickOutcome::Expired;
        }
        TickOutcome::Counted {
            remaining_secs: self.timer.remaining_secs(),
        }
    }

    /// # Errors
    ///
    /// Returns `SessionError::NotAllowed` outside `InProgress`.
    pub fn advance(&mut self) -> Result<AdvanceOutcome, SessionError> {
        if self.phase != SessionPhase::InProgress {
            return Err(SessionError::NotAllowed { phase: self.phase });
        }
        if !self.is_last_question() {
            self.current_index += 1;
            return Ok(AdvanceOutcome::Moved {
                index: self.current_index,
            });
        }
        self.timer.expire();
        self.phase = SessionPhase::TimeExpiredPendingSubmit;
        Ok(AdvanceOutcome::ReachedEnd)
    }

    /// Stop the timer and, if the attempt may be submitted, hand out the
    /// answers to send. The timer is stopped even when the submission is
    /// refused.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::AlreadyScored`, `SessionError::SubmissionInFlight`,
    /// `SessionError::NotAllowed` for closed phases, or
    /// `SessionError::NoAnswersProvided` when nothing was answered. The phase
    /// is never changed by a refusal.
    pub fn begin_submission(&mut self) -> Result<AnswerSet, SessionError> {
        self.timer.stop();
        if self.phase == SessionPhase::Scored {
            return Err(SessionError::AlreadyScored);
        }
        if self.submission_in_flight {
            return Err(SessionError::SubmissionInFlight);
        }
        if !self.phase.accepts_submission() {
            return Err(SessionError::NotAllowed { phase: self.phase });
        }
        if self.answers.is_empty() {
            return Err(SessionError::NoAnswersProvided);
        }
        self.submission_in_flight = true;
        Ok(self.answers.clone())
    }

    /// Record the server's verdict for the submission started by
    /// [`Self::begin_submission`]. Returns `false` when no submission was in
    /// flight (a reset happened meanwhile) and the message was dropped.
    pub fn complete_submission(&mut self, message: String) -> bool {
        if !self.submission_in_flight {
            return false;
        }
        self.submission_in_flight = false;
        self.score = Some(message);
        self.phase = SessionPhase::Scored;
        true
    }

    /// The submission did not go through. The phase stays where it was so
    /// the user can submit again.
    pub fn fail_submission(&mut self) {
        self.submission_in_flight = false;
    }

    /// "Back": halt the timer. An expired attempt becomes locked.
    pub fn stop(&mut self) {
        self.timer.stop();
        if self.timer.is_expired() && self.phase == SessionPhase::TimeExpiredPendingSubmit {
            self.phase = SessionPhase::TimeExpiredLocked;
        }
    }

    /// Back to `Idle` from anywhere. Loaded questions are kept.
    pub fn reset(&mut self) {
        self.answers.clear();
        self.timer.reset();
        self.score = None;
        self.current_index = 0;
        self.submission_in_flight = false;
        self.phase = SessionPhase::Idle;
    }

    fn ensure_transition(&self, next: SessionPhase) -> Result<(), SessionError> {
        if self.phase.can_transition_to(next) {
            Ok(())
        } else {
            Err(SessionError::InvalidTransition {
                from: self.phase,
                to: next,
            })
        }
    }
}
