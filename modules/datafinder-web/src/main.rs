use std::sync::Arc;

use anyhow::Result;
use axum::{
    extract::{Query, State},
    http::{header, HeaderValue},
    response::{Html, IntoResponse},
    routing::get,
    Router,
};
use serde::Deserialize;
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use datafinder_common::{Config, DatasetResult};
use datafinder_interpreter::interpret;
use datafinder_search::{Catalog, HuggingFaceCatalog, KaggleCatalog};
use hfhub_client::HfHubClient;
use kaggle_client::KaggleClient;

mod templates;
use templates::*;

// --- App State ---

struct AppState {
    kaggle: KaggleCatalog,
    huggingface: HuggingFaceCatalog,
}

// --- Main ---

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("datafinder=info".parse()?))
        .init();

    let config = Config::from_env();

    // Model load failure is fatal here; searches never retry it.
    datafinder_interpreter::init()?;

    let state = Arc::new(AppState {
        kaggle: KaggleCatalog::new(KaggleClient::new(
            config.kaggle_username.clone(),
            config.kaggle_key.clone(),
        )),
        huggingface: HuggingFaceCatalog::new(HfHubClient::new()),
    });

    let app = Router::new()
        .route("/", get(index_page))
        .route("/search", get(search_page))
        .with_state(state)
        // Single-session tool: nothing here is worth caching
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        // Logging layer: method + path only — prompts stay out of the logs
        .layer(
            tower_http::trace::TraceLayer::new_for_http().make_span_with(
                |request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                },
            ),
        );

    let addr = format!("{}:{}", config.web_host, config.web_port);
    info!("Dataset Finder web server starting on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// --- Handlers ---

#[derive(Debug, Deserialize)]
struct SearchParams {
    q: Option<String>,
    kaggle: Option<String>,
    hf: Option<String>,
}

async fn index_page() -> impl IntoResponse {
    Html(render_index())
}

async fn search_page(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    let prompt = params.q.unwrap_or_default();
    if prompt.trim().is_empty() {
        return Html(render_index());
    }

    let use_kaggle = params.kaggle.is_some();
    let use_huggingface = params.hf.is_some();

    let (keywords, filters) = interpret(&prompt);
    info!(%keywords, "Running dataset search");

    // Fixed order: Kaggle results precede Hugging Face results, and the
    // second search is not issued until the first has finished.
    let mut results: Vec<DatasetResult> = Vec::new();
    if use_kaggle {
        match state.kaggle.search(&keywords, &filters).await {
            Ok(mut found) => results.append(&mut found),
            Err(e) => {
                warn!(error = %e, "Kaggle search failed");
                return Html(render_error(&prompt, use_kaggle, use_huggingface, &e.to_string()));
            }
        }
    }
    if use_huggingface {
        match state.huggingface.search(&keywords, &filters).await {
            Ok(mut found) => results.append(&mut found),
            Err(e) => {
                warn!(error = %e, "Hugging Face search failed");
                return Html(render_error(&prompt, use_kaggle, use_huggingface, &e.to_string()));
            }
        }
    }

    Html(render_results(
        &prompt,
        use_kaggle,
        use_huggingface,
        &keywords,
        &filters,
        &results,
    ))
}
