use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::Router;
use quiz_core::model::{AnswerSet, Question, QuestionId, SessionPhase};
use quiz_core::{AppState, AppStore, QuizConfig, QuizConfigDraft};
use services::{QuizApi, QuizApiError};

use crate::context::{UiApp, build_app_context};
use crate::routes::{Route, ThemeTestHandles};
use crate::views::quiz::QuizTestHandles;
use crate::vm::QuizIntent;

pub fn sample_questions(n: usize) -> Vec<Question> {
    (1..=n)
        .map(|i| Question::new(QuestionId::new(format!("q{i}")), format!("Range question {i}?")))
        .collect()
}

#[derive(Default)]
pub struct FakeQuizApi {
    questions: Mutex<Option<Vec<Question>>>,
    replies: Mutex<VecDeque<Option<String>>>,
    submitted: Mutex<Vec<AnswerSet>>,
    requested_counts: Mutex<Vec<u32>>,
}

impl FakeQuizApi {
    pub fn with_questions(questions: Vec<Question>) -> Self {
        let api = Self::default();
        api.set_questions(Some(questions));
        api
    }

    pub fn set_questions(&self, questions: Option<Vec<Question>>) {
        *self.questions.lock().unwrap() = questions;
    }

    /// Queue one submit reply; `None` fails the call.
    pub fn reply(&self, reply: Option<&str>) {
        self.replies
            .lock()
            .unwrap()
            .push_back(reply.map(str::to_string));
    }

    pub fn submissions(&self) -> Vec<AnswerSet> {
        self.submitted.lock().unwrap().clone()
    }

    pub fn requested_counts(&self) -> Vec<u32> {
        self.requested_counts.lock().unwrap().clone()
    }
}

#[async_trait]
impl QuizApi for FakeQuizApi {
    async fn random_questions(&self, count: u32) -> Result<Vec<Question>, QuizApiError> {
        self.requested_counts.lock().unwrap().push(count);
        self.questions
            .lock()
            .unwrap()
            .as_ref()
            .map(|questions| questions.iter().take(count as usize).cloned().collect())
            .ok_or(QuizApiError::EmptyResponse)
    }

    async fn submit_answers(&self, answers: &AnswerSet) -> Result<String, QuizApiError> {
        self.submitted.lock().unwrap().push(answers.clone());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Some("Your score is 0".to_string()))
            .ok_or(QuizApiError::EmptyResponse)
    }
}

struct TestApp {
    store: AppStore,
    api: Arc<FakeQuizApi>,
    config: QuizConfig,
}

impl UiApp for TestApp {
    fn store(&self) -> AppStore {
        self.store.clone()
    }

    fn quiz_api(&self) -> Arc<dyn QuizApi> {
        Arc::clone(&self.api) as Arc<dyn QuizApi>
    }

    fn quiz_config(&self) -> QuizConfig {
        self.config.clone()
    }
}

#[derive(Props, Clone)]
struct QuizHarnessProps {
    app: Arc<TestApp>,
    handles: QuizTestHandles,
    theme: ThemeTestHandles,
}

impl PartialEq for QuizHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn QuizRouterHarness(props: QuizHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    use_context_provider(|| props.theme.clone());
    rsx! { Router::<Route> {} }
}

pub struct QuizHarness {
    pub dom: VirtualDom,
    pub api: Arc<FakeQuizApi>,
    pub store: AppStore,
    handles: QuizTestHandles,
    theme: ThemeTestHandles,
}

impl QuizHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(Duration::from_millis(50), self.dom.wait_for_work()).await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Let spawned intents run to completion.
    pub async fn settle(&mut self) {
        for _ in 0..4 {
            self.drive_async().await;
        }
    }

    pub async fn dispatch(&mut self, intent: QuizIntent) {
        self.send(intent);
        drive_dom(&mut self.dom);
        self.settle().await;
    }

    /// Deliver an intent without letting any spawned work run.
    pub fn send(&self, intent: QuizIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
    }

    pub async fn toggle_theme(&mut self) {
        let toggle = self.theme.toggle();
        self.dom.in_runtime(|| toggle.call(()));
        drive_dom(&mut self.dom);
        self.settle().await;
    }

    pub fn phase(&self) -> Option<SessionPhase> {
        let controller = self.handles.controller();
        self.dom.in_runtime(|| {
            controller
                .peek()
                .as_ref()
                .map(|controller| controller.session().phase())
        })
    }

    pub fn answer(&self, id: &str, field: quiz_core::model::AnswerField) -> Option<String> {
        let controller = self.handles.controller();
        let id = QuestionId::new(id);
        self.dom.in_runtime(|| {
            controller.peek().as_ref().and_then(|controller| {
                controller
                    .session()
                    .answers()
                    .value(&id, field)
                    .map(str::to_string)
            })
        })
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_quiz_harness(api: FakeQuizApi, question_count: u32) -> QuizHarness {
    let api = Arc::new(api);
    let store = AppStore::new(AppState::default());
    let config = QuizConfigDraft {
        base_url: None,
        question_count: Some(question_count),
    }
    .validate()
    .expect("valid test config");
    let handles = QuizTestHandles::default();
    let theme = ThemeTestHandles::default();

    let app = Arc::new(TestApp {
        store: store.clone(),
        api: Arc::clone(&api),
        config,
    });
    let dom = VirtualDom::new_with_props(
        QuizRouterHarness,
        QuizHarnessProps {
            app,
            handles: handles.clone(),
            theme: theme.clone(),
        },
    );

    QuizHarness {
        dom,
        api,
        store,
        handles,
        theme,
    }
}

/// Mounted harness with the initial question fetch completed.
pub async fn loaded_quiz_harness(questions: usize) -> QuizHarness {
    let count = u32::try_from(questions).expect("small question count");
    let mut harness = setup_quiz_harness(FakeQuizApi::with_questions(sample_questions(questions)), count);
    harness.rebuild();
    harness.settle().await;
    harness
}
