/// Arguments of an embed tag such as `{% bluesky alice.bsky.social 5 %}`,
/// given the text between the tag name and the closing delimiter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagArgs {
    pub actor: String,
    pub limit: Option<String>,
}

impl TagArgs {
    /// First token is the actor, second the limit. Anything after is ignored.
    pub fn parse(markup: &str) -> Option<Self> {
        let mut args = markup.split_whitespace();
        let actor = args.next()?.to_string();
        let limit = args.next().map(str::to_string);

        tracing::debug!(
            "Initializing bluesky tag with actor: {}, limit: {}",
            actor,
            limit.as_deref().unwrap_or("10")
        );

        Some(Self { actor, limit })
    }
}
