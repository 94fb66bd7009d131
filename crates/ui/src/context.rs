use std::sync::Arc;

use quiz_core::{AppAction, AppState, AppStore, QuizConfig};
use services::QuizApi;

pub trait UiApp: Send + Sync {
    fn store(&self) -> AppStore;
    fn quiz_api(&self) -> Arc<dyn QuizApi>;
    fn quiz_config(&self) -> QuizConfig;
}

#[derive(Clone)]
pub struct AppContext {
    store: AppStore,
    quiz_api: Arc<dyn QuizApi>,
    quiz_config: QuizConfig,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            store: app.store(),
            quiz_api: app.quiz_api(),
            quiz_config: app.quiz_config(),
        }
    }

    #[must_use]
    pub fn store(&self) -> &AppStore {
        &self.store
    }

    /// Apply an action to the shared store and return the new snapshot.
    pub fn dispatch(&self, action: AppAction) -> Arc<AppState> {
        self.store.dispatch(action)
    }

    #[must_use]
    pub fn quiz_api(&self) -> Arc<dyn QuizApi> {
        Arc::clone(&self.quiz_api)
    }

    #[must_use]
    pub fn quiz_config(&self) -> &QuizConfig {
        &self.quiz_config
    }
}

// Provided by the composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
