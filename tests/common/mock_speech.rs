//! Mock speech engine for testing
//!
//! Records every submitted utterance for verification.

use anyhow::Result;
use async_trait::async_trait;
use learnable::speech::{SpeechSynthesizer, Utterance};
use std::sync::{Arc, Mutex};

/// Mock engine that records submitted utterances
#[derive(Debug)]
pub struct RecordingSynthesizer {
    /// All utterances that were "spoken"
    pub spoken: Arc<Mutex<Vec<Utterance>>>,
    /// Simulate failure on every speak
    pub should_fail: Arc<Mutex<bool>>,
}

impl RecordingSynthesizer {
    pub fn new() -> Self {
        Self {
            spoken: Arc::new(Mutex::new(Vec::new())),
            should_fail: Arc::new(Mutex::new(false)),
        }
    }

    /// Get all recorded utterances
    pub fn get_spoken(&self) -> Vec<Utterance> {
        self.spoken.lock().unwrap().clone()
    }

    /// Check if a phrase was spoken
    pub fn was_spoken(&self, text: &str) -> bool {
        self.spoken
            .lock()
            .unwrap()
            .iter()
            .any(|u| u.text.contains(text))
    }
}

impl Default for RecordingSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SpeechSynthesizer for RecordingSynthesizer {
    async fn speak(&self, utterance: &Utterance) -> Result<()> {
        self.spoken.lock().unwrap().push(utterance.clone());
        if *self.should_fail.lock().unwrap() {
            return Err(anyhow::anyhow!("Mock synthesis failure"));
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "mock"
    }
}
