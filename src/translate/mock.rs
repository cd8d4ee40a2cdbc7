use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use super::coerce::{is_truthy, or_default_if_absent, or_default_if_falsy, to_display};
use super::interface::{
    AudioTranslateRequest, AudioTranslateResponse, TextTranslateRequest, TextTranslateResponse,
    DEFAULT_SOURCE_LANG, DEFAULT_TARGET_LANG,
};
use crate::storage::{AudioStore, StorageError};

pub const MOCK_TRANSCRIPTION: &str = "Mock transcription: [speech detected]";
const NO_INPUT_PLACEHOLDER: &str = "[no input]";

/// Stand-in for a speech pipeline: sleeps, formats canned strings and echoes
/// the uploaded audio back through the store as the "synthesized" result.
///
/// Language codes only ever end up interpolated into the output.
pub struct MockTranslator {
    store: Arc<dyn AudioStore>,
    audio_delay: Duration,
    text_delay: Duration,
}

impl MockTranslator {
    pub fn new(store: Arc<dyn AudioStore>, audio_delay: Duration, text_delay: Duration) -> Self {
        Self {
            store,
            audio_delay,
            text_delay,
        }
    }

    pub fn store(&self) -> &Arc<dyn AudioStore> {
        &self.store
    }

    pub async fn translate_audio(
        &self,
        request: AudioTranslateRequest,
    ) -> Result<AudioTranslateResponse, StorageError> {
        // Form fields fall back on any falsy value, not just on absent.
        let source = or_default_if_falsy(request.source_lang.as_ref(), DEFAULT_SOURCE_LANG);
        let target = or_default_if_falsy(request.target_lang.as_ref(), DEFAULT_TARGET_LANG);
        debug!(
            "Mock audio translation {} -> {}, audio bytes: {:?}",
            source,
            target,
            request.audio.as_ref().map(|a| a.len())
        );

        tokio::time::sleep(self.audio_delay).await;

        let translated_text = audio_translation(&target);

        let tts_url = match request.audio {
            Some(audio) => Some(self.store.put(audio).await?),
            None => None,
        };

        Ok(AudioTranslateResponse {
            ok: true,
            translated_text,
            transcribed_text: MOCK_TRANSCRIPTION.to_string(),
            tts_url,
        })
    }

    pub async fn translate_text(&self, request: TextTranslateRequest) -> TextTranslateResponse {
        // JSON fields only fall back when the key is missing; null, "" and numbers are printed.
        let source = or_default_if_absent(request.source_lang.as_ref(), DEFAULT_SOURCE_LANG);
        let target = or_default_if_absent(request.target_lang.as_ref(), DEFAULT_TARGET_LANG);
        let text = request
            .text
            .as_ref()
            .filter(|t| is_truthy(t))
            .map(to_display)
            .unwrap_or_default();
        debug!("Mock text translation {} -> {}, {} chars", source, target, text.len());

        tokio::time::sleep(self.text_delay).await;

        TextTranslateResponse {
            ok: true,
            translated_text: text_translation(&target, &text),
        }
    }
}

pub fn audio_translation(target: &str) -> String {
    format!("Mock translation ({}): This is a simulated translated text.", target)
}

/// Keeps the trailing space clients of the demo front-end already receive.
pub fn text_translation(target: &str, text: &str) -> String {
    let body = if text.is_empty() { NO_INPUT_PLACEHOLDER } else { text };
    format!("Mock text translation ({}): {} ", target, body)
}
