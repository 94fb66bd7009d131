use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::prelude::*;
use quiz_core::time::TICK_INTERVAL;
use services::{IntervalScheduler, QuizController, Tick, ToastQueue};
use tokio::sync::mpsc::UnboundedReceiver;

use crate::context::AppContext;
use crate::vm::{LoadStatus, QuizScreen, ToastVm};

use super::toasts::show_pending_toasts;

/// Receiving end of the countdown ticks, handed to the pump once.
pub(super) type TickSlot = Rc<RefCell<Option<UnboundedReceiver<Tick>>>>;

#[derive(Clone)]
pub(super) struct QuizState {
    /// `None` while an async intent holds the controller.
    pub controller: Signal<Option<QuizController>>,
    pub load: Signal<LoadStatus>,
    pub screen: Signal<QuizScreen>,
    pub busy: Signal<bool>,
    pub toasts: Signal<Vec<ToastVm>>,
    pub next_toast_id: Signal<u64>,
    pub queue: ToastQueue,
    pub ticks: TickSlot,
}

impl QuizState {
    /// Re-derive the screen from the controller and surface queued toasts.
    pub fn publish(&self) {
        let load = *self.load.peek();
        if let Some(controller) = self.controller.peek().as_ref() {
            let mut screen = self.screen;
            screen.set(QuizScreen::from_session(controller.session(), load));
        }
        show_pending_toasts(&self.queue, self.toasts, self.next_toast_id);
    }
}

pub(super) fn use_quiz_state(ctx: &AppContext) -> QuizState {
    let queue = use_hook(ToastQueue::new);
    let ticks: TickSlot = use_hook(|| Rc::new(RefCell::new(None)));

    let controller = use_signal({
        let ctx = ctx.clone();
        let queue = queue.clone();
        let ticks = Rc::clone(&ticks);
        move || {
            let (scheduler, rx) = IntervalScheduler::new(TICK_INTERVAL);
            *ticks.borrow_mut() = Some(rx);
            Some(
                QuizController::new(ctx.quiz_api(), Arc::new(queue), Arc::new(scheduler))
                    .with_config(ctx.quiz_config()),
            )
        }
    });

    QuizState {
        controller,
        load: use_signal(|| LoadStatus::Loading),
        screen: use_signal(|| QuizScreen::Loading),
        busy: use_signal(|| false),
        toasts: use_signal(Vec::new),
        next_toast_id: use_signal(|| 0),
        queue,
        ticks,
    }
}
