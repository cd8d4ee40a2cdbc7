use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::handlers::{health_check, serve_tts, translate_audio, translate_text};
use crate::state::AppState;
use crate::storage::TTS_URL_PREFIX;

pub fn create_routes(state: &AppState) -> Router<AppState> {
    let router = Router::new()
        // Health check
        .route("/api/health", get(health_check))

        // Mock translation API; uploads are not size-capped
        .route(
            "/api/translate",
            post(translate_audio).layer(DefaultBodyLimit::disable()),
        )
        .route("/api/translate-text", post(translate_text));

    // Stored "synthesized" audio
    let router = match state.store().local_dir() {
        Some(dir) => router.nest_service(TTS_URL_PREFIX, ServeDir::new(dir)),
        None => router.route(&format!("{}/:name", TTS_URL_PREFIX), get(serve_tts)),
    };

    // Front-end files from the application root
    router.fallback_service(ServeDir::new(&state.settings.static_dir))
}

/// Full application: routes, request tracing, permissive CORS, state.
pub fn build_router(state: AppState) -> Router {
    create_routes(&state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
