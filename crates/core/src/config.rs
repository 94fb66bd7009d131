use thiserror::Error;
use url::Url;

use crate::store::DEFAULT_BASE_URL;

/// Number of questions requested per attempt.
pub const DEFAULT_QUESTION_COUNT: u32 = 4;

/// Upper bound accepted for the question count.
pub const MAX_QUESTION_COUNT: u32 = 50;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizConfig {
    base_url: String,
    question_count: u32,
}

#[derive(Clone, Debug, Default)]
pub struct QuizConfigDraft {
    pub base_url: Option<String>,
    pub question_count: Option<u32>,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("question count must be between 1 and 50, got {0}")]
    InvalidQuestionCount(u32),
}

impl QuizConfigDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and normalize the draft.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the base URL is not an http(s) URL or the
    /// question count is out of range.
    pub fn validate(self) -> Result<QuizConfig, ConfigError> {
        let base_url = normalize_optional(self.base_url)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let parsed =
            Url::parse(&base_url).map_err(|_| ConfigError::InvalidBaseUrl(base_url.clone()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidBaseUrl(base_url));
        }

        let question_count = self.question_count.unwrap_or(DEFAULT_QUESTION_COUNT);
        if question_count == 0 || question_count > MAX_QUESTION_COUNT {
            return Err(ConfigError::InvalidQuestionCount(question_count));
        }

        Ok(QuizConfig {
            base_url: base_url.trim_end_matches('/').to_string(),
            question_count,
        })
    }
}

impl QuizConfig {
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn question_count(&self) -> u32 {
        self.question_count
    }
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            question_count: DEFAULT_QUESTION_COUNT,
        }
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}
