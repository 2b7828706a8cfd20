pub mod api;
pub mod config;
pub mod error;
pub mod render;
pub mod sanitize;
pub mod tag;
pub mod time;

use crate::api::{BlueskyFetcher, FeedFetcher, FetchRequest, Limit};
use crate::config::EmbedConfig;
use crate::error::FetchError;
use crate::render::PostRenderer;
use crate::sanitize::Sanitizer;
use bsky_core::AuthorFeed;
use chrono::{DateTime, Utc};

pub use tag::TagArgs;

/// 取得結果。成功ならフィード、失敗なら理由
pub type FeedResponse = Result<AuthorFeed, FetchError>;

/// `limit` is the raw tag argument; `None` or blank means 10.
pub async fn fetch<F>(fetcher: &F, actor: &str, limit: Option<&str>) -> FeedResponse
where
    F: FeedFetcher + ?Sized,
{
    let limit = Limit::parse(limit)?;
    let request = FetchRequest::new(actor, limit);
    fetcher.get_author_feed(&request).await
}

/// Flattens a fetch result into the single string handed to the host.
pub fn render_response<S: Sanitizer>(
    renderer: &PostRenderer<S>,
    response: &FeedResponse,
    now: DateTime<Utc>,
) -> String {
    match response {
        Ok(feed) => renderer.render_feed(feed, now),
        Err(e) => {
            tracing::error!(
                "Author feed fetch failed (status={:?}, timeout={}): {}",
                e.status(),
                e.is_timeout(),
                e
            );
            e.to_string()
        }
    }
}

pub async fn fetch_and_render<F, S>(
    fetcher: &F,
    renderer: &PostRenderer<S>,
    actor: &str,
    limit: Option<&str>,
    now: DateTime<Utc>,
) -> String
where
    F: FeedFetcher + ?Sized,
    S: Sanitizer,
{
    tracing::debug!("Rendering bluesky feed for {}", actor);
    let response = fetch(fetcher, actor, limit).await;
    render_response(renderer, &response, now)
}

/// Entry point for hosts: fetch `actor`'s feed and return the fragment or
/// the error text.
pub async fn render_author_feed(config: &EmbedConfig, actor: &str, limit: Option<&str>) -> String {
    let fetcher = match BlueskyFetcher::from_config(config) {
        Ok(fetcher) => fetcher,
        Err(e) => {
            tracing::error!("Failed to build HTTP client: {}", e);
            return e.to_string();
        }
    };
    let renderer = PostRenderer::from_config(config);

    fetch_and_render(&fetcher, &renderer, actor, limit, Utc::now()).await
}

/// Same as [`render_author_feed`] for hosts without an async runtime.
/// Must not be called from inside a tokio runtime.
pub fn render_author_feed_blocking(
    config: &EmbedConfig,
    actor: &str,
    limit: Option<&str>,
) -> String {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => return FetchError::Runtime(e).to_string(),
    };

    runtime.block_on(render_author_feed(config, actor, limit))
}
