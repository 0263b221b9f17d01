//! Generator definitions and the store that finds them.
//! Definitions live in YAML or JSON files anywhere below the root directory.

use crate::error::{Error, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Default directory holding generator definitions and their templates.
pub const ROOT_DIR: &str = ".forge";

/// File extensions recognised as definition files.
pub const DEFINITION_EXTENSIONS: [&str; 3] = ["yml", "yaml", "json"];

/// A value the user is asked for before generation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptField {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub message: String,
}

impl PromptField {
    /// Text shown to the user; falls back to `input <name>`.
    pub fn display_message(&self) -> String {
        if self.message.is_empty() {
            format!("input {}", self.name)
        } else {
            self.message.clone()
        }
    }
}

/// An input template and the (templated) path it is rendered to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathMapping {
    #[serde(default)]
    pub input: String,
    #[serde(default)]
    pub output: String,
}

/// One generator: a name, the prompts it needs and the files it writes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorDefinition {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub prompts: Vec<PromptField>,
    #[serde(default)]
    pub mappings: Vec<PathMapping>,
}

fn is_definition_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| DEFINITION_EXTENSIONS.contains(&ext))
        .unwrap_or(false)
}

/// Parses a definition file, choosing the format from its extension.
///
/// # Errors
/// * `Error::ParseError` if the content is not a valid definition
pub fn parse_definition(path: &Path, content: &[u8]) -> Result<GeneratorDefinition> {
    let parsed = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_slice(content).map_err(|e| e.to_string()),
        _ => serde_yaml::from_slice(content).map_err(|e| e.to_string()),
    };

    parsed.map_err(|message| Error::ParseError { path: path.to_path_buf(), message })
}

/// Finds the generator called `name` below `root_dir`.
///
/// Files are visited in file-name order and the search stops at the first
/// match. Any definition file visited before the match that fails to parse
/// aborts the search. When two files declare the same name the one sorted
/// first wins; duplicates are a configuration error and should be avoided.
///
/// # Errors
/// * `Error::NotFound` if no definition declares `name`
/// * `Error::ParseError` if a visited definition file is malformed
/// * `Error::WalkError` / `Error::IoError` on file system failures
pub fn find_generator<P: AsRef<Path>>(root_dir: P, name: &str) -> Result<GeneratorDefinition> {
    let root_dir = root_dir.as_ref();
    debug!("Searching '{}' for generator '{}'", root_dir.display(), name);

    if name.is_empty() {
        return Err(Error::NotFound { name: name.to_string() });
    }

    for entry in WalkDir::new(root_dir).sort_by_file_name() {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type().is_dir() || !is_definition_file(path) {
            continue;
        }

        debug!("Reading definition '{}'", path.display());
        let content = fs::read(path)?;
        let definition = parse_definition(path, &content)?;

        if definition.name == name {
            debug!("Found generator '{}' in '{}'", name, path.display());
            return Ok(definition);
        }
    }

    Err(Error::NotFound { name: name.to_string() })
}
