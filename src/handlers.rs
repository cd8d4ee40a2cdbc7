use axum::{
    body::Bytes,
    extract::{FromRequest, Multipart, Path, Request, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::{debug, error};

use crate::error::ApiError;
use crate::state::AppState;
use crate::storage::StorageError;
use crate::translate::{
    AudioTranslateFields, AudioTranslateRequest, AudioTranslateResponse, TextTranslateRequest,
    TextTranslateResponse,
};

const AUDIO_FIELD: &str = "audio";
const WAV_CONTENT_TYPE: &str = "audio/wav";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BodyKind {
    Multipart,
    Json,
    Other,
}

pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// `POST /api/translate`
///
/// Takes a multipart form or a JSON object; any other body is an empty form.
pub async fn translate_audio(
    State(state): State<AppState>,
    request: Request,
) -> Result<Json<AudioTranslateResponse>, ApiError> {
    let form = match body_kind(request.headers()) {
        BodyKind::Multipart => {
            let multipart = Multipart::from_request(request, &state).await?;
            read_audio_form(multipart).await?
        }
        BodyKind::Json => read_json_body::<AudioTranslateFields>(request).await?.into(),
        BodyKind::Other => AudioTranslateRequest::default(),
    };

    let response = state.translator.translate_audio(form).await?;
    Ok(Json(response))
}

async fn read_audio_form(mut multipart: Multipart) -> Result<AudioTranslateRequest, ApiError> {
    let mut form = AudioTranslateRequest::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        let is_file = field.file_name().is_some();

        match (name.as_str(), is_file) {
            (AUDIO_FIELD, true) => {
                if form.audio.is_some() {
                    return Err(ApiError::DuplicateAudio);
                }
                form.audio = Some(field.bytes().await?);
            }
            (_, true) => return Err(ApiError::UnexpectedFile(name)),
            ("sourceLang", false) => form.source_lang = Some(Value::String(field.text().await?)),
            ("targetLang", false) => form.target_lang = Some(Value::String(field.text().await?)),
            _ => debug!("Ignoring form field {:?}", name),
        }
    }

    Ok(form)
}

/// `POST /api/translate-text`
///
/// Bodies without a JSON content type are treated as `{}`.
pub async fn translate_text(
    State(state): State<AppState>,
    request: Request,
) -> Result<Json<TextTranslateResponse>, ApiError> {
    let body = match body_kind(request.headers()) {
        BodyKind::Json => read_json_body::<TextTranslateRequest>(request).await?,
        _ => TextTranslateRequest::default(),
    };

    Ok(Json(state.translator.translate_text(body).await))
}

/// Empty bodies and arrays carry no fields; scalars are rejected.
async fn read_json_body<T>(request: Request) -> Result<T, ApiError>
where
    T: DeserializeOwned + Default,
{
    let body = Bytes::from_request(request, &()).await?;
    if body.is_empty() {
        return Ok(T::default());
    }

    match serde_json::from_slice::<Value>(&body)? {
        value @ Value::Object(_) => Ok(serde_json::from_value(value)?),
        Value::Array(_) => Ok(T::default()),
        _ => Err(ApiError::JsonNotObject),
    }
}

fn body_kind(headers: &HeaderMap) -> BodyKind {
    let mime = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|m| m.trim().to_ascii_lowercase())
        .unwrap_or_default();

    if mime == "multipart/form-data" {
        BodyKind::Multipart
    } else if mime == "application/json" || mime.ends_with("+json") {
        BodyKind::Json
    } else {
        BodyKind::Other
    }
}

/// `GET /tts/:name` for stores without a backing directory.
pub async fn serve_tts(State(state): State<AppState>, Path(name): Path<String>) -> Response {
    match state.store().get(&name).await {
        Ok(Some(bytes)) => ([(header::CONTENT_TYPE, WAV_CONTENT_TYPE)], bytes).into_response(),
        Ok(None) | Err(StorageError::InvalidName(_)) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => {
            error!("Failed to read stored audio {}: {}", name, e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
