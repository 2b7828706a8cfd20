use chrono::{DateTime, Utc};
use serde::Deserialize;

/// 公開 AppView のベース URL (認証不要)
pub const API_BASE: &str = "https://public.api.bsky.app";

pub const GET_AUTHOR_FEED_PATH: &str = "/xrpc/app.bsky.feed.getAuthorFeed";

/// 画像埋め込みの `$type`
pub const EMBED_IMAGES_VIEW: &str = "app.bsky.embed.images#view";

pub const DEFAULT_LIMIT: u32 = 10;

/// getAuthorFeed の filter パラメータ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthorFeedFilter {
    #[default]
    PostsAndAuthorThreads,
}

impl AuthorFeedFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PostsAndAuthorThreads => "posts_and_author_threads",
        }
    }
}

/// getAuthorFeed のレスポンス型
#[derive(Debug, Deserialize)]
pub struct AuthorFeedResponse {
    pub cursor: Option<String>,
    pub feed: Vec<FeedViewPost>,
}

#[derive(Debug, Deserialize)]
pub struct FeedViewPost {
    pub post: PostView,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostView {
    pub author: ProfileView,
    pub record: PostRecord,
    pub embed: Option<EmbedView>,
    #[serde(default)]
    pub reply_count: u64,
    #[serde(default)]
    pub repost_count: u64,
    #[serde(default)]
    pub like_count: u64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileView {
    pub handle: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub avatar: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRecord {
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// 埋め込み。images#view 以外 (external, record など) は `images` を持たない
#[derive(Debug, Deserialize)]
pub struct EmbedView {
    #[serde(rename = "$type")]
    pub kind: String,
    #[serde(default)]
    pub images: Vec<ImageView>,
}

impl EmbedView {
    pub fn is_images(&self) -> bool {
        self.kind == EMBED_IMAGES_VIEW
    }
}

#[derive(Debug, Deserialize)]
pub struct ImageView {
    pub thumb: String,
    #[serde(default)]
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub display_name: String,
    pub handle: String,
    pub avatar_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub thumbnail_url: String,
    pub alt_text: String,
}

/// 描画用に整形した投稿
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub author: Author,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub reply_count: u64,
    pub repost_count: u64,
    pub like_count: u64,
    pub images: Vec<Image>,
}

impl From<FeedViewPost> for Post {
    fn from(item: FeedViewPost) -> Self {
        let PostView {
            author,
            record,
            embed,
            reply_count,
            repost_count,
            like_count,
        } = item.post;

        let images = match embed {
            Some(embed) if embed.is_images() => embed
                .images
                .into_iter()
                .map(|image| Image {
                    thumbnail_url: image.thumb,
                    alt_text: image.alt,
                })
                .collect(),
            _ => Vec::new(),
        };

        Post {
            author: Author {
                display_name: author.display_name,
                handle: author.handle,
                avatar_url: author.avatar,
            },
            text: record.text,
            created_at: record.created_at,
            reply_count,
            repost_count,
            like_count,
            images,
        }
    }
}

/// 1 アクター分のフィード (API の並び順を保持)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorFeed {
    pub posts: Vec<Post>,
}

impl From<AuthorFeedResponse> for AuthorFeed {
    fn from(res: AuthorFeedResponse) -> Self {
        AuthorFeed {
            posts: res.feed.into_iter().map(Post::from).collect(),
        }
    }
}
