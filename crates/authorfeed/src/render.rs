use crate::config::EmbedConfig;
use crate::sanitize::{Identity, Sanitizer};
use crate::time::relative_label;
use bsky_core::{AuthorFeed, Image, Post};
use chrono::{DateTime, Utc};

pub const STYLE_BLOCK: &str = r#"<style>
  @font-face {
    font-family: 'InterVariable';
    src: url("https://web-cdn.bsky.app/static/media/InterVariable.c504db5c06caaf7cdfba.woff2") format('woff2');
    font-weight: 300 1000;
    font-style: normal;
    font-display: swap;
  }
  .bluesky-post {
    border-bottom: 1px solid #e1e8ed;
    padding: 12px;
    width: 500px;
    font-family: 'InterVariable', -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Liberation Sans', Helvetica, Arial, sans-serif;
    background: #fff;
    margin-bottom: 10px;
  }
  .bluesky-header {
    display: inline-flex;
    align-items: center;
    justify-content: flex-start;
    gap: 8px;
  }
  .bluesky-avatar {
    width: 40px;
    height: 40px;
    border-radius: 50%;
  }
  .bluesky-author-info {
    display: flex;
    flex-direction: column;
    align-items: flex-start;
  }
  .author-name {
    font-weight: bold;
    font-size: 14px;
    color: #000;
  }
  .author-handle {
    font-size: 12px;
    color: #657786;
  }
  .bluesky-content {
    font-size: 14px;
    line-height: 1.5;
    color: #14171A;
    margin-top: 8px;
  }
  .bluesky-footer {
    display: flex;
    justify-content: space-between;
    font-size: 12px;
    color: #657786;
    margin-top: 10px;
  }
  .icon {
    cursor: pointer;
  }
</style>
"#;

/// Turns posts into the embeddable fragment. All remote strings go through
/// the sanitizer `S` before interpolation.
#[derive(Debug, Clone)]
pub struct PostRenderer<S = Identity> {
    style_block: String,
    sanitizer: S,
}

impl Default for PostRenderer {
    fn default() -> Self {
        Self::new(STYLE_BLOCK)
    }
}

impl PostRenderer {
    pub fn new(style_block: impl Into<String>) -> Self {
        Self::with_sanitizer(style_block, Identity)
    }

    pub fn from_config(config: &EmbedConfig) -> Self {
        Self::new(config.style_block.clone())
    }
}

impl<S: Sanitizer> PostRenderer<S> {
    pub fn with_sanitizer(style_block: impl Into<String>, sanitizer: S) -> Self {
        Self {
            style_block: style_block.into(),
            sanitizer,
        }
    }

    pub fn style_block(&self) -> &str {
        &self.style_block
    }

    /// スタイル 1 つ + 投稿ブロックを改行区切りで連結
    pub fn render_feed(&self, feed: &AuthorFeed, now: DateTime<Utc>) -> String {
        let posts: Vec<String> = feed
            .posts
            .iter()
            .map(|post| self.render_post(post, now))
            .collect();

        format!("{}{}", self.style_block, posts.join("\n"))
    }

    pub fn render_post(&self, post: &Post, now: DateTime<Utc>) -> String {
        let s = &self.sanitizer;
        let author_name = s.sanitize(&post.author.display_name);
        let author_handle = s.sanitize(&post.author.handle);
        let avatar = s.sanitize(&post.author.avatar_url);
        let text = s.sanitize(&post.text).replace('\n', "<br>");
        let post_time = relative_label(post.created_at, now);
        let image_html = self.render_images(&post.images);

        format!(
            r#"<div class="bluesky-post">
  <div class="bluesky-header">
    <img src="{avatar}" alt="{author_name}" class="bluesky-avatar" />
    <div class="bluesky-author-info">
      <span class="author-name">{author_name}</span>
      <span class="author-handle">@{author_handle} · {post_time}</span>
    </div>
  </div>
  <div class="bluesky-content">
    <p>{text}</p>
    {image_html}
  </div>
  <div class="bluesky-footer">
    <span class="icon">💬 {replies}</span>
    <span class="icon">🔁 {reposts}</span>
    <span class="icon">❤️ {likes}</span>
    <span class="icon">···</span>
  </div>
</div>
"#,
            replies = post.reply_count,
            reposts = post.repost_count,
            likes = post.like_count,
        )
    }

    /// 画像ごとに 1 行。画像なしなら空文字
    fn render_images(&self, images: &[Image]) -> String {
        images
            .iter()
            .map(|image| {
                format!(
                    "<img src=\"{}\" alt=\"{}\" class=\"bluesky-image\" />\n",
                    self.sanitizer.sanitize(&image.thumbnail_url),
                    self.sanitizer.sanitize(&image.alt_text),
                )
            })
            .collect()
    }
}
