//! Main application state for the LearnAble GUI
//!
//! Contains the LearnAbleApp struct and initialization logic.

use iced::Task;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use crate::config::Config;
use crate::listening::{ListenController, NullCapture};
use crate::speech::SpeechSynthesizer;
use crate::store::UsageStore;

use super::messages::Message;
use super::state::{self, ActivityRecord, Tab};

/// Main application state
pub struct LearnAbleApp {
    /// Current view/tab
    pub(crate) current_tab: Tab,
    /// Status message
    pub(crate) status: String,
    /// Welcome header text, also the default utterance
    pub(crate) welcome_text: String,
    /// Voice-assistant listening state and capture capability
    pub(crate) controller: ListenController,
    /// Speech engine, connected asynchronously after launch
    pub(crate) tts: Option<Arc<dyn SpeechSynthesizer>>,
    /// Recent-activity summaries shown on Home
    pub(crate) activities: Vec<ActivityRecord>,
    /// Configuration
    pub(crate) config: Config,
    /// Usage store (process-scoped, created once at startup)
    pub(crate) store: Arc<UsageStore>,
}

impl LearnAbleApp {
    /// Create a new LearnAbleApp instance
    pub fn new() -> (Self, Task<Message>) {
        let config = Config::load().unwrap_or_default();

        // Fail-fast launch precondition: no store, no app
        let store = Arc::new(
            UsageStore::new(PathBuf::from(&config.store_db_path))
                .expect("Could not create usage store"),
        );

        let app = Self::with_store(config.clone(), store);
        info!("🚀 LearnAble app initialized");

        // Initialize the speech engine in the background based on config
        let init_task = Task::perform(crate::speech::create_engine(config), |res| match res {
            Ok(engine) => Message::TtsConnected(engine),
            Err(_) => Message::TtsFailed,
        });

        (app, init_task)
    }

    /// Build the app state around an already-initialized store
    pub fn with_store(config: Config, store: Arc<UsageStore>) -> Self {
        Self {
            current_tab: Tab::Home,
            status: "Ready".to_string(),
            welcome_text: "Welcome to LearnAble".to_string(),
            controller: ListenController::new(Arc::new(NullCapture::new())),
            tts: None,
            activities: state::recent_activities(),
            config,
            store,
        }
    }

    /// Application theme
    pub fn theme(&self) -> iced::Theme {
        iced::Theme::Dark
    }
}
