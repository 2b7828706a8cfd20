use authorfeed::api::BlueskyFetcher;
use authorfeed::config::EmbedConfig;
use authorfeed::error::FetchError;
use authorfeed::render::PostRenderer;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct EmbedQuery {
    pub actor: Option<String>,
    pub limit: Option<String>,
}

pub type SharedState = AppState;

#[derive(Clone)]
pub struct AppState {
    pub fetcher: Arc<BlueskyFetcher>,
    pub renderer: Arc<PostRenderer>,
}

impl AppState {
    pub fn new(config: &EmbedConfig) -> Result<Self, FetchError> {
        let fetcher = BlueskyFetcher::from_config(config)?;
        let renderer = PostRenderer::from_config(config);

        Ok(Self {
            fetcher: Arc::new(fetcher),
            renderer: Arc::new(renderer),
        })
    }
}
