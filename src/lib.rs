//! Mock speech/text translation backend for front-end demos.
//!
//! Requests sleep for a fixed latency and answer with canned strings; uploaded
//! audio is stored untouched and served back under `/tts/` as if synthesized.

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod storage;
pub mod translate;

pub use config::{Config, TranslatorSettings};
pub use error::ApiError;
pub use routes::build_router;
pub use state::AppState;
