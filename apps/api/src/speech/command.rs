//! Speech engine backed by a host TTS program (espeak-ng compatible CLI).

use std::process::Stdio;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::process::Command;
use tokio::sync::oneshot;
use tracing::debug;

use super::{SpeechEngine, SpeechError, SpeechRequest, Utterance};
use crate::models::course::Language;

/// espeak-ng default speaking rate in words per minute.
const BASE_WPM: f32 = 175.0;

pub struct CommandSpeechEngine {
    program: String,
}

impl CommandSpeechEngine {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn args(request: &SpeechRequest<'_>) -> Vec<String> {
        let wpm = (BASE_WPM * request.rate).round() as u32;
        vec![
            "-v".to_string(),
            voice_for(request.language_tag),
            "-s".to_string(),
            wpm.to_string(),
            "--".to_string(),
            request.text.to_string(),
        ]
    }
}

fn voice_for(language_tag: &str) -> String {
    match Language::from_speech_tag(language_tag) {
        Some(Language::En) => "en-us".to_string(),
        Some(Language::Zh) => "cmn".to_string(),
        Some(Language::Ja) => "ja".to_string(),
        None => language_tag.to_ascii_lowercase(),
    }
}

impl SpeechEngine for CommandSpeechEngine {
    /// Spawns the program and hands the child to a waiter task, which reaps it
    /// when it exits or kills it on cancel. Needs a tokio runtime.
    fn start(&self, request: SpeechRequest<'_>) -> Result<Box<dyn Utterance>, SpeechError> {
        let mut child = Command::new(&self.program)
            .args(Self::args(&request))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()?;
        let pid = child.id();
        debug!(
            "Started '{}' (pid {:?}) for {}",
            self.program, pid, request.language_tag
        );

        let (cancel_tx, cancel_rx) = oneshot::channel::<()>();
        let finished = Arc::new(AtomicBool::new(false));
        let done = finished.clone();
        tokio::spawn(async move {
            // A dropped sender counts as a cancel.
            let cancelled = tokio::select! {
                status = child.wait() => {
                    debug!("Speech process {pid:?} exited: {status:?}");
                    false
                }
                _ = cancel_rx => true,
            };
            if cancelled {
                let _ = child.kill().await;
                debug!("Speech process {pid:?} cancelled");
            }
            done.store(true, Ordering::SeqCst);
        });

        Ok(Box::new(ChildUtterance {
            cancel: Some(cancel_tx),
            finished,
        }))
    }
}

struct ChildUtterance {
    cancel: Option<oneshot::Sender<()>>,
    finished: Arc<AtomicBool>,
}

impl Utterance for ChildUtterance {
    fn cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            let _ = cancel.send(());
        }
    }

    fn is_active(&mut self) -> bool {
        self.cancel.is_some() && !self.finished.load(Ordering::SeqCst)
    }
}


#[cfg(all(test, unix))]
mod process_tests {
    use std::time::Duration;

    use super::*;

    fn request() -> SpeechRequest<'static> {
        SpeechRequest {
            text: "hello",
            language_tag: "en-US",
            rate: 0.9,
        }
    }

    async fn wait_until_inactive(utterance: &mut Box<dyn Utterance>) -> bool {
        for _ in 0..200 {
            if !utterance.is_active() {
                return true;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        false
    }

    // `true` ignores its arguments and exits at once.
    #[tokio::test]
    async fn test_finished_process_is_reaped() {
        let engine = CommandSpeechEngine::new("true");
        let mut utterance = engine.start(request()).unwrap();
        assert!(wait_until_inactive(&mut utterance).await);
    }

    // `yes` repeats its arguments until killed.
    #[tokio::test]
    async fn test_cancel_ends_utterance() {
        let engine = CommandSpeechEngine::new("yes");
        let mut utterance = engine.start(request()).unwrap();
        assert!(utterance.is_active());
        utterance.cancel();
        assert!(!utterance.is_active());
    }
}
