use crate::error::AppError;
use crate::state::{EmbedQuery, SharedState};
use axum::{
    extract::{Query, State},
    http::Uri,
    response::Html,
};

pub async fn root() -> &'static str {
    "Bluesky の投稿を埋め込み用 HTML にします: GET /embed?actor=<handle or did>&limit=<n>"
}

pub async fn health() -> &'static str {
    "OK"
}

pub async fn embed(
    State(state): State<SharedState>,
    Query(params): Query<EmbedQuery>,
) -> Result<Html<String>, AppError> {
    let actor = params
        .actor
        .as_deref()
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .ok_or_else(|| AppError::BadRequest("Missing actor parameter".to_string()))?;

    tracing::info!(
        "Received embed request: actor={} (limit={:?})",
        actor,
        params.limit
    );

    // 取得失敗もエラー文字列として 200 で返す
    let html = authorfeed::fetch_and_render(
        state.fetcher.as_ref(),
        state.renderer.as_ref(),
        actor,
        params.limit.as_deref(),
        chrono::Utc::now(),
    )
    .await;

    Ok(Html(html))
}

pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
