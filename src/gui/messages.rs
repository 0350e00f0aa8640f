//! Message types for the LearnAble GUI
//!
//! All messages that can be sent to update the application state.

/// Messages that drive the application
#[derive(Debug, Clone)]
pub enum Message {
    None,

    // Navigation
    TabSelected(super::state::Tab),

    // Quick actions
    SpeakWelcome,
    ToggleListening,

    // Speech engine lifecycle
    TtsConnected(std::sync::Arc<dyn crate::speech::SpeechSynthesizer>),
    TtsFailed,
    SpeechFinished,
}
