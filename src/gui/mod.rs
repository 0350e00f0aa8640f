//! GUI module using iced
//!
//! Four screens behind a persistent sidebar; all state mutation happens in
//! `update` in response to discrete messages.

use iced::widget::{container, row};
use iced::{Element, Length, Task};
use std::sync::Arc;
use tracing::{info, warn};

use crate::speech::{SpeechSynthesizer, Utterance};

// Sub-modules
pub mod app;
pub mod messages;
pub mod state;
pub mod tabs;

// Re-exports for convenience
pub use app::LearnAbleApp;
pub use messages::Message;
pub use state::Tab;

/// Speak an utterance and report back when playback was handed off.
///
/// Engine errors are logged and swallowed; the caller never observes them.
pub async fn msg_speak(engine: Arc<dyn SpeechSynthesizer>, utterance: Utterance) -> Message {
    if let Err(e) = engine.speak(&utterance).await {
        warn!("Speech engine '{}' failed: {}", engine.name(), e);
    }
    Message::SpeechFinished
}

impl LearnAbleApp {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::TabSelected(tab) => {
                self.current_tab = tab;
            }
            Message::TtsConnected(engine) => {
                info!("🔊 Speech engine connected");
                self.tts = Some(engine);
                self.status = "Ready".to_string();
            }
            Message::TtsFailed => {
                warn!("⚠️ Speech engine unavailable");
                self.status = "Speech unavailable".to_string();
            }
            Message::SpeakWelcome => {
                let _ = self.store.record("Spoke welcome message");

                if let Some(ref tts) = self.tts {
                    self.status = "Speaking...".to_string();
                    let utterance = Utterance::new(self.welcome_text.clone());
                    return Task::perform(msg_speak(tts.clone(), utterance), |m| m);
                }
            }
            Message::ToggleListening => {
                let listening = self.controller.toggle();
                self.status = if listening {
                    "Listening...".to_string()
                } else {
                    "Ready".to_string()
                };
                let _ = self.store.record(if listening {
                    "Listening started"
                } else {
                    "Listening stopped"
                });
            }
            Message::SpeechFinished => {
                if !self.controller.is_listening() {
                    self.status = "Ready".to_string();
                }
            }
            Message::None => {}
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let sidebar = tabs::sidebar::view(self);

        let content = match self.current_tab {
            Tab::Home => tabs::home::view(self),
            Tab::Convert => tabs::convert::view(self),
            Tab::Games => tabs::games::view(self),
            Tab::Settings => tabs::settings::view(self),
        };

        row![sidebar, container(content).width(Length::Fill).padding(20)].into()
    }
}
