use std::rc::Rc;

use dioxus::prelude::*;
use quiz_core::TickOutcome;

use crate::vm::{LoadStatus, QuizIntent};

use super::state::{QuizState, TickSlot};

pub(super) fn use_quiz_dispatcher(state: &QuizState) -> Callback<QuizIntent> {
    let state = state.clone();
    use_callback(move |intent: QuizIntent| {
        if intent.is_async() {
            run_async(state.clone(), intent);
        } else {
            run_sync(&state, intent);
        }
    })
}

/// Forward every scheduler tick into the dispatcher.
pub(super) fn use_tick_pump(ticks: &TickSlot, dispatch: Callback<QuizIntent>) {
    let ticks = Rc::clone(ticks);
    use_future(move || {
        let ticks = Rc::clone(&ticks);
        async move {
            let Some(mut rx) = ticks.borrow_mut().take() else {
                return;
            };
            while rx.recv().await.is_some() {
                dispatch.call(QuizIntent::Tick);
            }
        }
    });
}

fn run_sync(state: &QuizState, intent: QuizIntent) {
    let mut controller = state.controller;
    let mut expired = false;
    {
        let mut guard = controller.write();
        let Some(local) = guard.as_mut() else {
            tracing::debug!(?intent, "quiz busy, intent dropped");
            return;
        };
        let result = match intent {
            QuizIntent::Start => local.start(),
            QuizIntent::Edit { id, field, value } => local.record_answer(&id, field, value),
            QuizIntent::Tick => {
                expired = local.tick_clock() == TickOutcome::Expired;
                Ok(())
            }
            QuizIntent::Back => {
                local.stop();
                Ok(())
            }
            QuizIntent::Reset => {
                local.reset();
                Ok(())
            }
            QuizIntent::Load | QuizIntent::Next | QuizIntent::Submit => Ok(()),
        };
        if let Err(err) = result {
            tracing::debug!(error = %err, "intent refused");
        }
    }
    state.publish();
    // Only the expiring tick reaches the network.
    if expired {
        run_async(state.clone(), QuizIntent::Submit);
    }
}

// The controller is taken out of its signal for the duration of the call and
// always put back, so intents arriving meanwhile are dropped.
fn run_async(state: QuizState, intent: QuizIntent) {
    let mut controller = state.controller;
    let Some(mut local) = controller.write().take() else {
        tracing::debug!(?intent, "quiz busy, intent dropped");
        return;
    };
    let mut busy = state.busy;
    let mut load = state.load;
    let is_load = intent == QuizIntent::Load;
    busy.set(true);
    if is_load {
        load.set(LoadStatus::Loading);
    }

    spawn(async move {
        let result = match intent {
            QuizIntent::Load => local.fetch_questions().await.map(drop),
            QuizIntent::Next => local.advance().await.map(drop),
            QuizIntent::Submit => local.submit().await.map(drop),
            QuizIntent::Start
            | QuizIntent::Edit { .. }
            | QuizIntent::Tick
            | QuizIntent::Back
            | QuizIntent::Reset => Ok(()),
        };
        if is_load {
            load.set(if result.is_ok() {
                LoadStatus::Ready
            } else {
                LoadStatus::Failed
            });
        }
        if let Err(err) = result {
            tracing::debug!(error = %err, "quiz intent failed");
        }

        controller.set(Some(local));
        busy.set(false);
        state.publish();
    });
}
