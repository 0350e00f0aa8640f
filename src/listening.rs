//! Listening Toggle Controller
//!
//! Owns the single "is listening" flag and the capture capability invoked
//! on each transition.

use crate::error::LearnResult;
use std::sync::Arc;
use tracing::{debug, warn};

/// Capability invoked when voice capture should start or stop.
///
/// The controller calls `start()` on the Idle -> Listening transition and
/// `stop()` on the way back. Backends own whatever resources capture needs.
pub trait SpeechCapture: Send + Sync + std::fmt::Debug {
    fn start(&self) -> LearnResult<()>;
    fn stop(&self) -> LearnResult<()>;

    /// Get the backend name
    fn name(&self) -> &str;
}

/// Placeholder capture backend: no recognizer is wired up yet, so both
/// transitions are deliberate no-ops.
#[derive(Debug, Default)]
pub struct NullCapture;

impl NullCapture {
    pub fn new() -> Self {
        Self
    }
}

impl SpeechCapture for NullCapture {
    fn start(&self) -> LearnResult<()> {
        debug!("Capture start requested (no backend attached)");
        Ok(())
    }

    fn stop(&self) -> LearnResult<()> {
        debug!("Capture stop requested (no backend attached)");
        Ok(())
    }

    fn name(&self) -> &str {
        "null"
    }
}

/// Controller for the voice-assistant listening state.
///
/// Exactly two states, toggled only by explicit user action. A capture
/// failure is logged and never blocks the flip; the toggle is total.
#[derive(Debug)]
pub struct ListenController {
    listening: bool,
    capture: Arc<dyn SpeechCapture>,
}

impl ListenController {
    pub fn new(capture: Arc<dyn SpeechCapture>) -> Self {
        Self {
            listening: false,
            capture,
        }
    }

    /// Flip the listening state, invoking the capture capability on the
    /// transition. Returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.listening = !self.listening;

        let result = if self.listening {
            self.capture.start()
        } else {
            self.capture.stop()
        };
        if let Err(e) = result {
            warn!("Capture backend '{}' failed: {}", self.capture.name(), e);
        }

        self.listening
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LearnError;
    use std::sync::Mutex;

    /// Capture backend that records every transition request
    #[derive(Debug, Default)]
    struct RecordingCapture {
        calls: Mutex<Vec<&'static str>>,
        fail_start: bool,
    }

    impl SpeechCapture for RecordingCapture {
        fn start(&self) -> LearnResult<()> {
            self.calls.lock().unwrap().push("start");
            if self.fail_start {
                return Err(LearnError::Capture("no microphone".to_string()));
            }
            Ok(())
        }

        fn stop(&self) -> LearnResult<()> {
            self.calls.lock().unwrap().push("stop");
            Ok(())
        }

        fn name(&self) -> &str {
            "recording"
        }
    }

    #[test]
    fn test_initial_state_is_idle() {
        let controller = ListenController::new(Arc::new(NullCapture::new()));
        assert!(!controller.is_listening());
    }

    #[test]
    fn test_even_toggles_round_trip() {
        let mut controller = ListenController::new(Arc::new(NullCapture::new()));
        for _ in 0..4 {
            controller.toggle();
        }
        assert!(!controller.is_listening());
    }

    #[test]
    fn test_odd_toggles_flip() {
        let mut controller = ListenController::new(Arc::new(NullCapture::new()));
        for _ in 0..3 {
            controller.toggle();
        }
        assert!(controller.is_listening());
    }

    #[test]
    fn test_capture_invoked_once_per_transition_in_order() {
        let capture = Arc::new(RecordingCapture::default());
        let mut controller = ListenController::new(capture.clone());

        assert!(controller.toggle());
        assert!(!controller.toggle());
        assert!(controller.toggle());

        let calls = capture.calls.lock().unwrap();
        assert_eq!(*calls, vec!["start", "stop", "start"]);
    }

    #[test]
    fn test_capture_failure_does_not_block_flip() {
        let capture = Arc::new(RecordingCapture {
            fail_start: true,
            ..Default::default()
        });
        let mut controller = ListenController::new(capture);

        assert!(controller.toggle());
        assert!(controller.is_listening());
    }
}
