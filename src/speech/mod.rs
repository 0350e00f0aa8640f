//! Speech Output Module
//!
//! Provides a unified interface for speech synthesis backends.

use crate::config::Config;
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, warn};

pub mod speechd;
pub mod system;

/// Rate multiplier applied to every app utterance (half of engine default)
pub const SPEECH_RATE: f32 = 0.5;
/// Pitch multiplier applied to every app utterance
pub const SPEECH_PITCH: f32 = 1.0;
/// Volume multiplier applied to every app utterance
pub const SPEECH_VOLUME: f32 = 1.0;

/// A parameterized request to synthesize and play speech.
///
/// Values are multipliers of the engine defaults (1.0 = engine default).
/// Created immediately before each invocation; never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub text: String,
    pub rate: f32,
    pub pitch: f32,
    pub volume: f32,
}

impl Utterance {
    /// Build an utterance with the app's fixed synthesis parameters.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            rate: SPEECH_RATE,
            pitch: SPEECH_PITCH,
            volume: SPEECH_VOLUME,
        }
    }
}

/// Trait for speech synthesis engines
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync + std::fmt::Debug {
    /// Synthesize and play the given utterance
    async fn speak(&self, utterance: &Utterance) -> Result<()>;

    /// Get the engine name
    fn name(&self) -> &str;
}

/// Factory to create the configured speech engine
pub async fn create_engine(config: Config) -> Result<Arc<dyn SpeechSynthesizer>> {
    info!("🛠️ Creating speech engine: {}", config.tts_engine);
    let engine: Arc<dyn SpeechSynthesizer> = match config.tts_engine.as_str() {
        "speechd" | "speechd_ng" => {
            let client = speechd::SpeechdEngine::connect().await?;
            Arc::new(client)
        }
        "system" => Arc::new(system::SystemEngine::new()),
        _ => {
            warn!(
                "  - Unknown engine '{}', falling back to System",
                config.tts_engine
            );
            Arc::new(system::SystemEngine::new())
        }
    };
    info!("✅ Speech engine '{}' initialized", engine.name());
    Ok(engine)
}
