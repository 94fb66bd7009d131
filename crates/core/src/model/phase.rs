use std::fmt;

/// Lifecycle stage of one quiz attempt.
///
/// ```text
/// Idle ──start──▶ InProgress ──limit/last──▶ TimeExpiredPendingSubmit ──stop──▶ TimeExpiredLocked
///                     │                               │
///                     └────────────submit ok──────────┴──▶ Scored
/// ```
///
/// Every phase returns to `Idle` through `reset`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SessionPhase {
    #[default]
    Idle,
    InProgress,
    TimeExpiredPendingSubmit,
    TimeExpiredLocked,
    Scored,
}

impl SessionPhase {
    /// Transition table. Self-transitions are not listed: they are not
    /// transitions.
    #[must_use]
    pub fn can_transition_to(self, next: SessionPhase) -> bool {
        use SessionPhase::{Idle, InProgress, Scored, TimeExpiredLocked, TimeExpiredPendingSubmit};

        matches!(
            (self, next),
            (Idle, InProgress)
                | (InProgress, TimeExpiredPendingSubmit | Scored)
                | (TimeExpiredPendingSubmit, TimeExpiredLocked | Scored)
                | (InProgress | TimeExpiredPendingSubmit | TimeExpiredLocked | Scored, Idle)
        )
    }

    /// Phases in which a submission may be sent.
    #[must_use]
    pub fn accepts_submission(self) -> bool {
        matches!(self, Self::InProgress | Self::TimeExpiredPendingSubmit)
    }
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Idle => "idle",
            Self::InProgress => "in progress",
            Self::TimeExpiredPendingSubmit => "time expired, pending submit",
            Self::TimeExpiredLocked => "time expired, locked",
            Self::Scored => "scored",
        })
    }
}
