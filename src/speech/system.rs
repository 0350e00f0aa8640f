//! System fallback speech engine

use super::{SpeechSynthesizer, Utterance};
use anyhow::Result;
use async_trait::async_trait;
use std::process::Command;
use tracing::debug;

#[derive(Debug)]
pub struct SystemEngine;

impl Default for SystemEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemEngine {
    pub fn new() -> Self {
        Self
    }
}

/// Map a multiplier onto spd-say's -100..100 relative scale
fn spd_scale(multiplier: f32) -> i32 {
    (((multiplier - 1.0) * 100.0).round() as i32).clamp(-100, 100)
}

/// Map a rate multiplier onto espeak-ng words per minute (default 175)
fn espeak_speed(multiplier: f32) -> u32 {
    ((175.0 * multiplier).round() as i64).clamp(80, 450) as u32
}

/// Map a pitch multiplier onto espeak-ng's 0..99 scale (default 50)
fn espeak_pitch(multiplier: f32) -> u32 {
    ((50.0 * multiplier).round() as i64).clamp(0, 99) as u32
}

/// Map a volume multiplier onto espeak-ng amplitude 0..200 (default 100)
fn espeak_amplitude(multiplier: f32) -> u32 {
    ((100.0 * multiplier).round() as i64).clamp(0, 200) as u32
}

#[async_trait]
impl SpeechSynthesizer for SystemEngine {
    async fn speak(&self, utterance: &Utterance) -> Result<()> {
        debug!("System speaking: {}", utterance.text);

        // Try spd-say (speech-dispatcher) or espeak-ng
        if Command::new("spd-say")
            .arg("-r")
            .arg(spd_scale(utterance.rate).to_string())
            .arg("-p")
            .arg(spd_scale(utterance.pitch).to_string())
            .arg("-i")
            .arg(spd_scale(utterance.volume).to_string())
            .arg("--")
            .arg(&utterance.text)
            .spawn()
            .is_ok()
        {
            return Ok(());
        }

        if Command::new("espeak-ng")
            .arg("-s")
            .arg(espeak_speed(utterance.rate).to_string())
            .arg("-p")
            .arg(espeak_pitch(utterance.pitch).to_string())
            .arg("-a")
            .arg(espeak_amplitude(utterance.volume).to_string())
            .arg("--")
            .arg(&utterance.text)
            .spawn()
            .is_ok()
        {
            return Ok(());
        }

        Err(anyhow::anyhow!(
            "No system TTS command found (tried spd-say, espeak-ng)"
        ))
    }

    fn name(&self) -> &str {
        "system"
    }
}
