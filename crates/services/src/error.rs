//! Shared error types for the services crate.

use thiserror::Error;

use quiz_core::SessionError;

/// Errors emitted by `QuizApi` implementations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizApiError {
    #[error("quiz API request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error("quiz API returned no questions")]
    EmptyResponse,
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted by `QuizController`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    #[error("failed to fetch questions")]
    FetchQuestionsFailed(#[source] QuizApiError),
    #[error("please provide at least one answer")]
    NoAnswersProvided,
    #[error("failed to submit answers")]
    SubmitFailed(#[source] QuizApiError),
    #[error(transparent)]
    Session(SessionError),
}

impl From<SessionError> for QuizError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::NoAnswersProvided => Self::NoAnswersProvided,
            other => Self::Session(other),
        }
    }
}
