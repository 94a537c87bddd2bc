use axum::{extract::{Path, Query, State}, routing::get, Json, Router};
use search_core::tokenizer::query_keyword;
use search_core::{KeywordIndex, Occurrence, TOP_K};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer, AllowOrigin};
use tower_http::trace::TraceLayer;

const MAX_K: usize = 100;

#[derive(Deserialize)]
pub struct Top5Params {
    pub kw1: String,
    pub kw2: String,
    #[serde(default = "default_k")]
    pub k: usize,
}
fn default_k() -> usize { TOP_K }

#[derive(Serialize)]
pub struct Top5Response {
    pub kw1: String,
    pub kw2: String,
    pub took_s: f64,
    pub total: usize,
    pub results: Vec<String>,
}

#[derive(Serialize)]
pub struct KeywordResponse {
    pub keyword: String,
    pub occurrences: Vec<Occurrence>,
}

#[derive(Serialize)]
pub struct StatsResponse {
    pub documents: usize,
    pub keywords: usize,
}

/// The frozen index shared by every request; nothing mutates it once serving starts.
#[derive(Clone)]
pub struct AppState {
    pub index: Arc<KeywordIndex>,
}

pub fn build_app(index: KeywordIndex) -> Router {
    let app_state = AppState { index: Arc::new(index) };

    // CORS: read CORS_ALLOW_ORIGIN (comma-separated) or allow Any by default
    let cors = match std::env::var("CORS_ALLOW_ORIGIN") {
        Ok(val) => {
            let origins: Vec<_> = val
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();
            if origins.is_empty() {
                CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
            } else {
                CorsLayer::new().allow_origin(AllowOrigin::list(origins)).allow_methods(Any).allow_headers(Any)
            }
        }
        Err(_) => CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any),
    };

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/top5", get(top5_handler))
        .route("/keyword/:keyword", get(keyword_handler))
        .route("/stats", get(stats_handler))
        .with_state(app_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

pub async fn top5_handler(State(state): State<AppState>, Query(params): Query<Top5Params>) -> Json<Top5Response> {
    let start = std::time::Instant::now();
    let (kw1, kw2) = (query_keyword(&params.kw1), query_keyword(&params.kw2));
    let k = params.k.clamp(1, MAX_K);
    let results: Vec<String> = state.index.top_k(&kw1, &kw2, k).into_iter().map(str::to_string).collect();
    let elapsed = start.elapsed();
    tracing::debug!(%kw1, %kw2, hits = results.len(), "top5 query");
    Json(Top5Response { kw1, kw2, took_s: elapsed.as_secs_f64(), total: results.len(), results })
}

pub async fn keyword_handler(State(state): State<AppState>, Path(keyword): Path<String>) -> Json<KeywordResponse> {
    let keyword = query_keyword(&keyword);
    let occurrences = state.index.occurrences(&keyword).to_vec();
    Json(KeywordResponse { keyword, occurrences })
}

pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse { documents: state.index.num_documents(), keywords: state.index.num_keywords() })
}
