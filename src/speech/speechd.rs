//! Speech-dispatcher TTS backend using D-Bus

use super::{SpeechSynthesizer, Utterance};
use anyhow::Result;
use async_trait::async_trait;
use tracing::{info, warn};
use zbus::{proxy, Connection};

#[proxy(
    interface = "org.speech.Service",
    default_service = "org.speech.Service",
    default_path = "/org/speech/Service"
)]
trait SpeechService {
    fn speak(&self, text: &str) -> zbus::Result<()>;
    fn set_rate(&self, rate: i32) -> zbus::Result<()>;
    fn set_pitch(&self, pitch: i32) -> zbus::Result<()>;
    fn set_volume(&self, volume: i32) -> zbus::Result<()>;
    fn ping(&self) -> zbus::Result<String>;
}

pub struct SpeechdEngine {
    proxy: SpeechServiceProxy<'static>,
}

impl std::fmt::Debug for SpeechdEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpeechdEngine").finish()
    }
}

impl SpeechdEngine {
    pub async fn connect() -> Result<Self> {
        let connection = Connection::session().await?;
        let proxy = SpeechServiceProxy::new(&connection).await?;

        match proxy.ping().await {
            Ok(response) => {
                info!("🔊 Connected to speech service: {}", response);
            }
            Err(e) => {
                warn!("⚠️ Speech service not responding: {}", e);
                return Err(anyhow::anyhow!("Speech service not responding: {}", e));
            }
        }

        Ok(Self { proxy })
    }
}

/// Map a multiplier (1.0 = engine default) onto the service's -100..100 scale
pub(crate) fn relative_scale(multiplier: f32) -> i32 {
    (((multiplier - 1.0) * 100.0).round() as i32).clamp(-100, 100)
}

#[async_trait]
impl SpeechSynthesizer for SpeechdEngine {
    async fn speak(&self, utterance: &Utterance) -> Result<()> {
        self.proxy.set_rate(relative_scale(utterance.rate)).await?;
        self.proxy.set_pitch(relative_scale(utterance.pitch)).await?;
        self.proxy
            .set_volume(relative_scale(utterance.volume))
            .await?;
        self.proxy.speak(&utterance.text).await?;
        Ok(())
    }

    fn name(&self) -> &str {
        "speechd"
    }
}
