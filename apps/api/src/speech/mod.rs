//! Read-aloud adapter.
//!
//! The host speech engine is a process-wide singleton: at most one utterance
//! plays at a time. `ReadAloud` owns the single utterance slot and cancels the
//! previous utterance before starting the next, so callers never coordinate.
//! A missing speech capability is a silent no-op.

use std::sync::Arc;

use parking_lot::Mutex;
use thiserror::Error;
use tracing::{debug, warn};

mod clean;
mod command;
pub mod handlers;

pub use clean::clean_for_speech;
pub use command::CommandSpeechEngine;

/// Slightly slower than the engine default, for clarity.
pub const SPEECH_RATE: f32 = 0.9;

#[derive(Debug, Error)]
pub enum SpeechError {
    #[error("no speech capability available")]
    Unavailable,

    #[error("failed to start speech engine: {0}")]
    Spawn(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy)]
pub struct SpeechRequest<'a> {
    pub text: &'a str,
    pub language_tag: &'a str,
    pub rate: f32,
}

/// Handle to one playing utterance.
pub trait Utterance: Send {
    fn cancel(&mut self);
    fn is_active(&mut self) -> bool;
}

pub trait SpeechEngine: Send + Sync {
    fn start(&self, request: SpeechRequest<'_>) -> Result<Box<dyn Utterance>, SpeechError>;
}

pub struct ReadAloud {
    engine: Option<Arc<dyn SpeechEngine>>,
    active: Mutex<Option<Box<dyn Utterance>>>,
}

impl ReadAloud {
    pub fn new(engine: Option<Arc<dyn SpeechEngine>>) -> Self {
        Self {
            engine,
            active: Mutex::new(None),
        }
    }

    pub fn with_engine(engine: Arc<dyn SpeechEngine>) -> Self {
        Self::new(Some(engine))
    }

    pub fn disabled() -> Self {
        Self::new(None)
    }

    pub fn is_available(&self) -> bool {
        self.engine.is_some()
    }

    /// Fire-and-forget: cancels whatever is playing, cleans `text` for
    /// `language_tag` and starts a new utterance. Never fails.
    pub fn speak(&self, text: &str, language_tag: &str) {
        let Some(engine) = &self.engine else {
            debug!("{}; skipping read-aloud", SpeechError::Unavailable);
            return;
        };

        let mut slot = self.active.lock();
        if let Some(mut previous) = slot.take() {
            previous.cancel();
        }

        let clean = clean_for_speech(text, language_tag);
        if clean.trim().is_empty() {
            return;
        }

        match engine.start(SpeechRequest {
            text: clean.trim(),
            language_tag,
            rate: SPEECH_RATE,
        }) {
            Ok(utterance) => *slot = Some(utterance),
            Err(e) => warn!("Read-aloud unavailable: {e}"),
        }
    }

    /// Cancels the current utterance, if any.
    pub fn stop(&self) {
        if let Some(mut previous) = self.active.lock().take() {
            previous.cancel();
        }
    }

    /// True while the current utterance is still playing.
    pub fn is_speaking(&self) -> bool {
        self.active
            .lock()
            .as_mut()
            .is_some_and(|utterance| utterance.is_active())
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::atomic::{AtomicBool, Ordering};

    use super::*;

    /// Records every request and hands out utterances whose cancellation can be observed.
    #[derive(Default)]
    pub struct RecordingEngine {
        pub started: Mutex<Vec<(String, String, f32)>>,
        pub handles: Mutex<Vec<Arc<AtomicBool>>>,
    }

    pub struct FlagUtterance(Arc<AtomicBool>);

    impl Utterance for FlagUtterance {
        fn cancel(&mut self) {
            self.0.store(true, Ordering::SeqCst);
        }

        fn is_active(&mut self) -> bool {
            !self.0.load(Ordering::SeqCst)
        }
    }

    impl SpeechEngine for RecordingEngine {
        fn start(&self, request: SpeechRequest<'_>) -> Result<Box<dyn Utterance>, SpeechError> {
            self.started.lock().push((
                request.text.to_string(),
                request.language_tag.to_string(),
                request.rate,
            ));
            let cancelled = Arc::new(AtomicBool::new(false));
            self.handles.lock().push(cancelled.clone());
            Ok(Box::new(FlagUtterance(cancelled)))
        }
    }

    pub fn cancelled(engine: &RecordingEngine, index: usize) -> bool {
        engine.handles.lock()[index].load(Ordering::SeqCst)
    }
}
