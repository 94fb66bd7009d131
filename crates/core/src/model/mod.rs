mod answers;
mod ids;
mod phase;
mod question;

pub use answers::{AnswerField, AnswerSet, RangeAnswer};
pub use ids::QuestionId;
pub use phase::SessionPhase;
pub use question::Question;
