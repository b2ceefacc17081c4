//! medpub - Publish a Hugo markdown post to Medium as a draft.

mod cli;
mod config;
mod post;
mod publish;
mod utils;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use config::{PubConfig, PublishStatus};
use post::{Document, Post};
use publish::{CreatedPost, MediumClient, Publisher};
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config()?;

    let token = config.medium.load_token()?;
    log!("config"; "token from {}", config.token_source());
    let client = MediumClient::new(&config.medium, token)?;

    let path = config.post_path(&cli.markdown_file);
    let created = publish_file(&path, &config, &client)?;

    println!("{}", serde_json::to_string_pretty(&created)?);
    log!("done"; "{}", created.url);
    if config.medium.publish_status == PublishStatus::Draft {
        log!(
            "done";
            "review drafts at {}/me/stories/drafts",
            config.medium.publish_url.trim_end_matches('/')
        );
    }

    Ok(())
}

/// Load configuration and report where it came from
fn load_config() -> Result<PubConfig> {
    let config = PubConfig::load().context("Failed to load configuration")?;
    match &config.config_path {
        Some(path) => log!("config"; "loaded {}", path.display()),
        None => log!("config"; "no config file, using defaults"),
    }
    Ok(config)
}

/// Read, prepare and publish a single post.
///
/// Nothing is sent unless the whole body was prepared successfully.
fn publish_file(path: &Path, config: &PubConfig, publisher: &impl Publisher) -> Result<CreatedPost> {
    let doc = Document::read(path)?;
    log!("read"; "{} ({} lines)", doc.path().display(), doc.line_count());

    let post = Post::prepare(&doc, config)
        .with_context(|| format!("Failed to prepare `{}`", path.display()))?;
    log!(
        "post";
        "\"{}\" with {} body lines{}",
        post.title,
        post.lines.len(),
        if config.attribution.enable { " (attributed)" } else { "" }
    );
    if let Some(tags) = &post.metadata.tags {
        log!("post"; "tags: {}", tags.join(", "));
    }

    let request = post.to_request(config);
    log!("publish"; "creating {:?} post \"{}\"", request.publish_status, request.title);
    let created = publisher.publish(&request)?;
    Ok(created)
}
