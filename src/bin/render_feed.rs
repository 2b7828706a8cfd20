use anyhow::{Context, Result};
use authorfeed::config::EmbedConfig;
use authorfeed::TagArgs;
use std::env;
use std::io::Write;

const USAGE: &str = "Usage: render_feed <actor> [limit]\n       render_feed --tag \"<actor> [limit]\"";

/// `<actor> [limit]` as separate arguments, or `--tag` followed by the raw
/// markup copied from a page tag.
fn parse_args(args: &[String]) -> Option<TagArgs> {
    match args {
        [flag, markup] if flag == "--tag" => TagArgs::parse(markup),
        [actor] | [actor, _] if !actor.trim().is_empty() => Some(TagArgs {
            actor: actor.clone(),
            limit: args.get(1).cloned(),
        }),
        _ => None,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    bluesky_embed::init_tracing();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(tag) = parse_args(&args) else {
        eprintln!("{}", USAGE);
        std::process::exit(1);
    };

    let config = EmbedConfig::from_env();
    let html = authorfeed::render_author_feed(&config, &tag.actor, tag.limit.as_deref()).await;

    std::io::stdout()
        .write_all(html.as_bytes())
        .context("Failed to write fragment to stdout")?;

    Ok(())
}
