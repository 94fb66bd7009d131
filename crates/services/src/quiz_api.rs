use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use quiz_core::AppStore;
use quiz_core::model::{AnswerSet, Question};

use crate::error::QuizApiError;

/// Remote question source and scorer.
#[async_trait]
pub trait QuizApi: Send + Sync {
    /// Fetch `count` random questions.
    async fn random_questions(&self, count: u32) -> Result<Vec<Question>, QuizApiError>;

    /// Submit every collected answer and return the server's score message.
    async fn submit_answers(&self, answers: &AnswerSet) -> Result<String, QuizApiError>;
}

/// `QuizApi` over HTTP/JSON.
#[derive(Clone, Debug)]
pub struct HttpQuizApi {
    client: Client,
    base_url: String,
}

impl HttpQuizApi {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Build a client against the store's current `base_url`.
    #[must_use]
    pub fn from_store(store: &AppStore) -> Self {
        Self::new(store.base_url())
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/api/{path}", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl QuizApi for HttpQuizApi {
    async fn random_questions(&self, count: u32) -> Result<Vec<Question>, QuizApiError> {
        let response = self
            .client
            .get(self.endpoint("random-question"))
            .query(&[("num", count)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(QuizApiError::HttpStatus(response.status()));
        }

        let body: QuestionsResponse = response.json().await?;
        if body.questions.is_empty() {
            return Err(QuizApiError::EmptyResponse);
        }
        Ok(body.questions)
    }

    async fn submit_answers(&self, answers: &AnswerSet) -> Result<String, QuizApiError> {
        let response = self
            .client
            .post(self.endpoint("submit-answers"))
            .json(&SubmitRequest { answers })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(QuizApiError::HttpStatus(response.status()));
        }

        let body: SubmitResponse = response.json().await?;
        Ok(body.message)
    }
}

#[derive(Debug, Deserialize)]
struct QuestionsResponse {
    questions: Vec<Question>,
}

#[derive(Debug, Serialize)]
struct SubmitRequest<'a> {
    answers: &'a AnswerSet,
}

#[derive(Debug, Deserialize)]
struct SubmitResponse {
    message: String,
}
