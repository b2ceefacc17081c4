//! Command-line interface definitions.

use clap::Parser;
use std::path::PathBuf;

/// Creates a medium.com draft post from a Hugo markdown file
#[derive(Parser, Debug, Clone)]
#[command(about, long_about = None)]
pub struct Cli {
    /// Markdown file, relative to [post.directory] in medpub.toml
    pub markdown_file: PathBuf,
}
