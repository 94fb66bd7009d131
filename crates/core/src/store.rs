//! Shared application state.
//!
//! `AppStore` is constructed once by the composition root and handed to
//! consumers explicitly. Readers get an immutable snapshot; writers dispatch
//! an `AppAction` that the pure [`reduce`] turns into the next state.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};

/// Base URL of the hosted quiz API.
pub const DEFAULT_BASE_URL: &str = "https://real-pear-badger-sock.cyclic.app";

/// Signed-in user. Opaque to the quiz.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    pub dark_theme: bool,
    pub user: User,
    pub is_login: bool,
    pub base_url: String,
}

impl AppState {
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dark_theme: true,
            user: User::default(),
            is_login: false,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppAction {
    ToggleTheme,
    SetDarkTheme(bool),
    Login(User),
    Logout,
    SetBaseUrl(String),
}

/// Pure reducer: `state × action → next state`.
#[must_use]
pub fn reduce(state: &AppState, action: AppAction) -> AppState {
    let mut next = state.clone();
    match action {
        AppAction::ToggleTheme => next.dark_theme = !state.dark_theme,
        AppAction::SetDarkTheme(dark) => next.dark_theme = dark,
        AppAction::Login(user) => {
            next.user = user;
            next.is_login = true;
        }
        AppAction::Logout => {
            next.user = User::default();
            next.is_login = false;
        }
        AppAction::SetBaseUrl(url) => next.base_url = url,
    }
    next
}

/// Cloneable handle to one application-wide state cell.
#[derive(Clone, Debug)]
pub struct AppStore {
    state: Arc<Mutex<Arc<AppState>>>,
}

impl AppStore {
    #[must_use]
    pub fn new(initial: AppState) -> Self {
        Self {
            state: Arc::new(Mutex::new(Arc::new(initial))),
        }
    }

    /// Current state. Later dispatches do not affect a snapshot already
    /// handed out.
    #[must_use]
    pub fn snapshot(&self) -> Arc<AppState> {
        Arc::clone(&self.lock())
    }

    #[must_use]
    pub fn base_url(&self) -> String {
        self.lock().base_url.clone()
    }

    /// Apply `action` and return the resulting snapshot.
    pub fn dispatch(&self, action: AppAction) -> Arc<AppState> {
        let mut guard = self.lock();
        let next = Arc::new(reduce(&guard, action));
        *guard = Arc::clone(&next);
        next
    }

    fn lock(&self) -> MutexGuard<'_, Arc<AppState>> {
        // The guarded value is an `Arc` swap; a panic elsewhere cannot leave it
        // half-written.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for AppStore {
    fn default() -> Self {
        Self::new(AppState::default())
    }
}
