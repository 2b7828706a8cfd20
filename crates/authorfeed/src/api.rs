use crate::config::EmbedConfig;
use crate::error::{ErrorDetails, FetchError};
use bsky_core::{AuthorFeed, AuthorFeedFilter, AuthorFeedResponse, DEFAULT_LIMIT, GET_AUTHOR_FEED_PATH};
use reqwest::Client;
use std::fmt;
use std::num::NonZeroU32;

/// 取得件数。1 以上。クエリには呼び出し側が書いたテキストをそのまま使う
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limit {
    value: NonZeroU32,
    text: String,
}

impl Default for Limit {
    fn default() -> Self {
        let value = NonZeroU32::new(DEFAULT_LIMIT).unwrap_or(NonZeroU32::MIN);
        Self {
            value,
            text: value.to_string(),
        }
    }
}

impl Limit {
    /// Tag-style limit argument: missing or blank falls back to the default.
    pub fn parse(raw: Option<&str>) -> Result<Self, FetchError> {
        match raw.map(str::trim) {
            None | Some("") => Ok(Self::default()),
            Some(text) => text
                .parse::<NonZeroU32>()
                .map(|value| Self {
                    value,
                    text: text.to_string(),
                })
                .map_err(|_| FetchError::InvalidLimit(text.to_string())),
        }
    }

    pub fn get(&self) -> u32 {
        self.value.get()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl TryFrom<u32> for Limit {
    type Error = FetchError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        NonZeroU32::new(value)
            .map(|value| Self {
                value,
                text: value.to_string(),
            })
            .ok_or_else(|| FetchError::InvalidLimit(value.to_string()))
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub actor: String,
    pub limit: Limit,
    pub filter: AuthorFeedFilter,
}

impl FetchRequest {
    pub fn new(actor: impl Into<String>, limit: Limit) -> Self {
        Self {
            actor: actor.into(),
            limit,
            filter: AuthorFeedFilter::PostsAndAuthorThreads,
        }
    }

    pub fn query(&self) -> [(&'static str, String); 3] {
        [
            ("actor", self.actor.clone()),
            ("limit", self.limit.as_str().to_string()),
            ("filter", self.filter.as_str().to_string()),
        ]
    }
}

#[async_trait::async_trait]
pub trait FeedFetcher {
    async fn get_author_feed(&self, request: &FetchRequest) -> Result<AuthorFeed, FetchError>;
}

pub struct BlueskyFetcher {
    client: Client,
    api_base: String,
}

impl BlueskyFetcher {
    pub fn new(client: Client, api_base: impl Into<String>) -> Self {
        Self {
            client,
            api_base: api_base.into(),
        }
    }

    pub fn from_config(config: &EmbedConfig) -> Result<Self, FetchError> {
        let client = config.http_client()?;
        Ok(Self::new(client, config.api_base.clone()))
    }

    fn endpoint(&self) -> String {
        format!(
            "{}{}",
            self.api_base.trim_end_matches('/'),
            GET_AUTHOR_FEED_PATH
        )
    }
}

#[async_trait::async_trait]
impl FeedFetcher for BlueskyFetcher {
    async fn get_author_feed(&self, request: &FetchRequest) -> Result<AuthorFeed, FetchError> {
        tracing::debug!(
            "Fetching author feed: actor={}, limit={}",
            request.actor,
            request.limit
        );

        let res = self
            .client
            .get(self.endpoint())
            .query(&request.query())
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Author feed request failed: {}", e);
                FetchError::Network(e)
            })?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            tracing::warn!("getAuthorFeed returned {} for {}", status, request.actor);
            return Err(FetchError::Upstream {
                status: status.as_u16(),
                details: ErrorDetails::from_body(&body),
            });
        }

        match serde_json::from_str::<AuthorFeedResponse>(&body) {
            Ok(parsed) => {
                tracing::debug!("Fetched {} posts for {}", parsed.feed.len(), request.actor);
                Ok(AuthorFeed::from(parsed))
            }
            Err(source) => {
                tracing::warn!("Failed to parse getAuthorFeed response: {}", source);
                Err(FetchError::MalformedPayload {
                    status: status.as_u16(),
                    body,
                    source,
                })
            }
        }
    }
}
