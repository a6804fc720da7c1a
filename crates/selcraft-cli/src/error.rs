//! Errors surfaced by CLI commands.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Selector(#[from] selcraft_lib::Error),

    #[error("no fragments given: use --element, --id, --class, --attr, --pseudo-class or --pseudo-element")]
    NoFragments,

    /// A `--then` combinator with nothing on one side.
    #[error("compound selector #{position} has no fragments")]
    EmptyCompound { position: usize },

    #[error("failed to read '{}': {source}", path.display())]
    ReadFile { path: PathBuf, source: io::Error },

    #[error("failed to read stdin: {0}")]
    ReadStdin(#[source] io::Error),

    #[error("invalid selector document: {0}")]
    Json(#[from] serde_json::Error),
}
