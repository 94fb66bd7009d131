#![forbid(unsafe_code)]

pub mod controller;
pub mod error;
pub mod notifier;
pub mod quiz_api;
pub mod scheduler;

pub use controller::{QuizController, Step};
pub use error::{QuizApiError, QuizError};
pub use notifier::{Notifier, Toast, ToastLevel, ToastQueue};
pub use quiz_api::{HttpQuizApi, QuizApi};
pub use scheduler::{IntervalScheduler, ManualScheduler, Tick, TickScheduler};
