//! Wire types for the translation endpoints.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub const DEFAULT_SOURCE_LANG: &str = "auto";
pub const DEFAULT_TARGET_LANG: &str = "en";

/// Body of `POST /api/translate-text`.
///
/// Fields keep whatever JSON the client sent; `None` means the key was absent,
/// `Some(Value::Null)` means it was sent as `null`.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextTranslateRequest {
    #[serde(default, deserialize_with = "present")]
    pub source_lang: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub target_lang: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub text: Option<Value>,
}

/// Fields of `POST /api/translate`, from either a multipart form or a JSON body.
#[derive(Debug, Default)]
pub struct AudioTranslateRequest {
    pub source_lang: Option<Value>,
    pub target_lang: Option<Value>,
    pub audio: Option<axum::body::Bytes>,
}

/// Language fields of a JSON body sent to `POST /api/translate`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioTranslateFields {
    #[serde(default, deserialize_with = "present")]
    pub source_lang: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub target_lang: Option<Value>,
}

impl From<AudioTranslateFields> for AudioTranslateRequest {
    fn from(fields: AudioTranslateFields) -> Self {
        Self {
            source_lang: fields.source_lang,
            target_lang: fields.target_lang,
            audio: None,
        }
    }
}

// Plain `Option<Value>` would fold an explicit `null` into `None`.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioTranslateResponse {
    pub ok: bool,
    pub translated_text: String,
    pub transcribed_text: String,
    /// Always serialized, `null` when no audio was uploaded.
    pub tts_url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextTranslateResponse {
    pub ok: bool,
    pub translated_text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub ok: bool,
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn audio_response_keeps_null_tts_url() {
        let body = serde_json::to_value(AudioTranslateResponse {
            ok: true,
            translated_text: "t".into(),
            transcribed_text: "s".into(),
            tts_url: None,
        })
        .unwrap();

        assert_eq!(
            body,
            json!({"ok": true, "translatedText": "t", "transcribedText": "s", "ttsUrl": null})
        );
    }

    #[test]
    fn text_request_tells_null_apart_from_absent() {
        let req: TextTranslateRequest =
            serde_json::from_value(json!({"targetLang": "fr", "text": null})).unwrap();
        assert_eq!(req.target_lang, Some(json!("fr")));
        assert_eq!(req.text, Some(Value::Null));
        assert!(req.source_lang.is_none());
    }

    #[test]
    fn text_request_accepts_non_string_values() {
        let req: TextTranslateRequest =
            serde_json::from_value(json!({"text": 5, "targetLang": ["a", "b"]})).unwrap();
        assert_eq!(req.text, Some(json!(5)));
        assert_eq!(req.target_lang, Some(json!(["a", "b"])));
    }
}
