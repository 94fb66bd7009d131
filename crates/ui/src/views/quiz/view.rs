use dioxus::prelude::*;

use quiz_core::model::{AnswerField, QuestionId};

use crate::context::AppContext;
use crate::vm::{QuestionVm, QuizIntent, QuizScreen};

use super::actions::{use_quiz_dispatcher, use_tick_pump};
use super::state::use_quiz_state;
use super::toasts::ToastStack;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;
#[cfg(test)]
use services::QuizController;

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let state = use_quiz_state(&ctx);
    let dispatch = use_quiz_dispatcher(&state);
    use_tick_pump(&state.ticks, dispatch);

    // Questions are fetched once, when the view mounts.
    use_effect(move || dispatch.call(QuizIntent::Load));

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch, state.controller);
            }
        }
    }

    let screen = state.screen.read().clone();
    let busy = (state.busy)();
    let kind = screen.kind();

    rsx! {
        section { class: "quiz quiz-{kind}",
            ToastStack { toasts: state.toasts }
            match screen {
                QuizScreen::Loading => rsx! {
                    p { class: "quiz-status", "Loading questions..." }
                },
                QuizScreen::Unavailable => rsx! {
                    div { class: "quiz-card",
                        p { class: "quiz-status", "No questions are available right now." }
                        button {
                            id: "quiz-retry",
                            class: "btn btn-secondary",
                            r#type: "button",
                            disabled: busy,
                            onclick: move |_| dispatch.call(QuizIntent::Load),
                            "Retry"
                        }
                    }
                },
                QuizScreen::Start => rsx! {
                    div { class: "quiz-start",
                        h2 { class: "quiz-title",
                            span { "Test Your" }
                            span { class: "accent", "Knowledge" }
                        }
                        button {
                            id: "quiz-start",
                            class: "btn btn-primary",
                            r#type: "button",
                            disabled: busy,
                            onclick: move |_| dispatch.call(QuizIntent::Start),
                            "Let's Start"
                        }
                    }
                },
                QuizScreen::Question(question) => rsx! {
                    QuestionCard { question, busy, dispatch }
                },
                QuizScreen::TimeUp { can_submit } => rsx! {
                    div { class: "quiz-card",
                        p { class: "quiz-status", "Time's up! Submitting answers..." }
                        div { class: "quiz-actions",
                            button {
                                id: "quiz-back",
                                class: "btn btn-secondary",
                                r#type: "button",
                                disabled: busy,
                                onclick: move |_| dispatch.call(QuizIntent::Back),
                                "Back"
                            }
                            button {
                                id: "quiz-submit",
                                class: "btn btn-primary",
                                r#type: "button",
                                disabled: busy || !can_submit,
                                onclick: move |_| dispatch.call(QuizIntent::Submit),
                                "Submit"
                            }
                        }
                    }
                },
                QuizScreen::Locked => rsx! {
                    div { class: "quiz-card",
                        p { class: "quiz-status", "Time's up! You can no longer submit answers." }
                        AttemptAgain { busy, dispatch }
                    }
                },
                QuizScreen::Scored { message } => rsx! {
                    div { class: "quiz-card",
                        p { class: "quiz-score", "{message}" }
                        AttemptAgain { busy, dispatch }
                    }
                },
            }
        }
    }
}

#[component]
fn QuestionCard(question: QuestionVm, busy: bool, dispatch: Callback<QuizIntent>) -> Element {
    let next_label = if question.is_last { "Submit" } else { "Next" };

    rsx! {
        div { class: "quiz-card",
            div { class: "quiz-meta",
                span { class: "quiz-counter", "{question.counter}" }
                span { class: "quiz-timer", "{question.remaining}" }
            }
            p { class: "quiz-question", "{question.text}" }
            div { class: "quiz-inputs",
                RangeInput {
                    id: question.id.clone(),
                    field: AnswerField::Min,
                    value: question.min.clone(),
                    dispatch,
                }
                RangeInput {
                    id: question.id.clone(),
                    field: AnswerField::Max,
                    value: question.max.clone(),
                    dispatch,
                }
            }
            div { class: "quiz-actions",
                button {
                    id: "quiz-next",
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: busy || !question.can_continue,
                    onclick: move |_| dispatch.call(QuizIntent::Next),
                    "{next_label}"
                }
            }
        }
    }
}

#[component]
fn RangeInput(
    id: QuestionId,
    field: AnswerField,
    value: String,
    dispatch: Callback<QuizIntent>,
) -> Element {
    let input_id = format!("answer-{field}");
    let label = field.label();

    rsx! {
        label { class: "range-input", r#for: "{input_id}",
            span { "{label}" }
            input {
                id: "{input_id}",
                r#type: "text",
                placeholder: label,
                value: "{value}",
                oninput: move |evt: FormEvent| {
                    dispatch.call(QuizIntent::Edit {
                        id: id.clone(),
                        field,
                        value: evt.value(),
                    });
                },
            }
        }
    }
}

#[component]
fn AttemptAgain(busy: bool, dispatch: Callback<QuizIntent>) -> Element {
    rsx! {
        button {
            id: "quiz-reset",
            class: "btn btn-primary",
            r#type: "button",
            disabled: busy,
            onclick: move |_| dispatch.call(QuizIntent::Reset),
            "Attempt again"
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
    controller: Rc<RefCell<Option<Signal<Option<QuizController>>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(
        &self,
        dispatch: Callback<QuizIntent>,
        controller: Signal<Option<QuizController>>,
    ) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.controller.borrow_mut() = Some(controller);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }

    pub(crate) fn controller(&self) -> Signal<Option<QuizController>> {
        (*self.controller.borrow()).expect("quiz controller registered")
    }
}
