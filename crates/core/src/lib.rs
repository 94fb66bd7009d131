#![forbid(unsafe_code)]

pub mod config;
pub mod model;
pub mod session;
pub mod store;
pub mod time;

pub use config::{ConfigError, QuizConfig, QuizConfigDraft};
pub use session::{AdvanceOutcome, QuizSession, SessionError, TickOutcome};
pub use store::{AppAction, AppState, AppStore, User};
pub use time::{TIME_LIMIT_SECS, TimerState, format_remaining};
