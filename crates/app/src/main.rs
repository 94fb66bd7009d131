use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::{AppState, AppStore, ConfigError, QuizConfig, QuizConfigDraft};
use services::{HttpQuizApi, QuizApi};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidQuestionCount { raw: String },
    Config(ConfigError),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidQuestionCount { raw } => {
                write!(f, "invalid --questions value: {raw}")
            }
            ArgsError::Config(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ArgsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ArgsError::Config(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ConfigError> for ArgsError {
    fn from(err: ConfigError) -> Self {
        ArgsError::Config(err)
    }
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    store: AppStore,
    quiz_api: Arc<dyn QuizApi>,
    config: QuizConfig,
}

impl UiApp for DesktopApp {
    fn store(&self) -> AppStore {
        self.store.clone()
    }

    fn quiz_api(&self) -> Arc<dyn QuizApi> {
        Arc::clone(&self.quiz_api)
    }

    fn quiz_config(&self) -> QuizConfig {
        self.config.clone()
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--base-url <url>] [--questions <n>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --base-url {}", quiz_core::store::DEFAULT_BASE_URL);
    eprintln!("  --questions {}", quiz_core::config::DEFAULT_QUESTION_COUNT);
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_BASE_URL, QUIZ_QUESTIONS, QUIZ_LOG (tracing filter, default info)");
}

fn parse_count(raw: String) -> Result<u32, ArgsError> {
    raw.trim()
        .parse()
        .map_err(|_| ArgsError::InvalidQuestionCount { raw })
}

/// Environment first, then flags on top.
fn parse_args(args: &mut impl Iterator<Item = String>) -> Result<QuizConfig, ArgsError> {
    let mut draft = QuizConfigDraft {
        base_url: std::env::var("QUIZ_BASE_URL").ok(),
        question_count: std::env::var("QUIZ_QUESTIONS")
            .ok()
            .map(parse_count)
            .transpose()?,
    };

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--base-url" => {
                draft.base_url = Some(require_value(args, "--base-url")?);
            }
            "--questions" => {
                let value = require_value(args, "--questions")?;
                draft.question_count = Some(parse_count(value)?);
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            _ => return Err(ArgsError::UnknownArg(arg)),
        }
    }

    Ok(draft.validate()?)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("QUIZ_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let mut args = std::env::args().skip(1);
    let config = parse_args(&mut args).map_err(|e| {
        print_usage();
        e
    })?;
    tracing::info!(
        base_url = config.base_url(),
        questions = config.question_count(),
        "starting quiz"
    );

    let store = AppStore::new(AppState::with_base_url(config.base_url()));
    let quiz_api = HttpQuizApi::from_store(&store);

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        store,
        quiz_api: Arc::new(quiz_api),
        config,
    });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Range Quiz")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
