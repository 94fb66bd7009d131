use quiz_core::QuizSession;
use quiz_core::model::{AnswerField, QuestionId, SessionPhase};

/// Whether the question fetch has settled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadStatus {
    Loading,
    Ready,
    Failed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Load,
    Start,
    Edit {
        id: QuestionId,
        field: AnswerField,
        value: String,
    },
    Next,
    Submit,
    Back,
    Reset,
    Tick,
}

impl QuizIntent {
    /// Intents that may wait on the network.
    #[must_use]
    pub fn is_async(&self) -> bool {
        matches!(self, Self::Load | Self::Next | Self::Submit)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionVm {
    pub id: QuestionId,
    pub counter: String,
    pub remaining: String,
    pub text: String,
    pub min: String,
    pub max: String,
    pub is_last: bool,
    pub can_continue: bool,
}

/// Everything the quiz view renders, derived from one session snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizScreen {
    Loading,
    Unavailable,
    Start,
    Question(QuestionVm),
    TimeUp { can_submit: bool },
    Locked,
    Scored { message: String },
}

impl QuizScreen {
    #[must_use]
    pub fn from_session(session: &QuizSession, load: LoadStatus) -> Self {
        match session.phase() {
            SessionPhase::Idle => match load {
                _ if session.total_questions() > 0 => Self::Start,
                LoadStatus::Loading => Self::Loading,
                LoadStatus::Ready | LoadStatus::Failed => Self::Unavailable,
            },
            SessionPhase::InProgress => session
                .current_question()
                .map_or(Self::Unavailable, |question| {
                    let answer = session.answer_for(question.id());
                    let value = |field| {
                        answer
                            .and_then(|answer| answer.get(field))
                            .unwrap_or_default()
                            .to_string()
                    };
                    Self::Question(QuestionVm {
                        id: question.id().clone(),
                        counter: session.question_counter(),
                        remaining: session.remaining_label(),
                        text: question.text().to_string(),
                        min: value(AnswerField::Min),
                        max: value(AnswerField::Max),
                        is_last: session.is_last_question(),
                        can_continue: session.has_answers() && !session.is_submitting(),
                    })
                }),
            SessionPhase::TimeExpiredPendingSubmit => Self::TimeUp {
                can_submit: session.has_answers() && !session.is_submitting(),
            },
            SessionPhase::TimeExpiredLocked => Self::Locked,
            SessionPhase::Scored => Self::Scored {
                message: session.score().unwrap_or_default().to_string(),
            },
        }
    }

    /// Stable name for the active screen, used as a CSS hook.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Unavailable => "unavailable",
            Self::Start => "start",
            Self::Question(_) => "question",
            Self::TimeUp { .. } => "time-up",
            Self::Locked => "locked",
            Self::Scored { .. } => "scored",
        }
    }
}
