use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use selcraft_lib::{SelectorTree, Stringify};

use crate::error::CliError;

pub struct RenderArgs {
    pub document: Option<PathBuf>,
}

pub fn run(args: RenderArgs) -> Result<(), CliError> {
    let json = load_document(args.document.as_deref())?;
    println!("{}", render(&json)?);
    Ok(())
}

/// Parse a selector tree document and render it to selector text.
pub fn render(json: &str) -> Result<String, CliError> {
    let tree: SelectorTree = serde_json::from_str(json)?;
    tracing::debug!(compounds = tree.compound_count(), "parsed selector document");
    Ok(tree.stringify())
}

fn load_document(path: Option<&Path>) -> Result<String, CliError> {
    match path {
        Some(path) if path.as_os_str() != "-" => {
            fs::read_to_string(path).map_err(|source| CliError::ReadFile {
                path: path.to_path_buf(),
                source,
            })
        }
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(CliError::ReadStdin)?;
            Ok(buf)
        }
    }
}
