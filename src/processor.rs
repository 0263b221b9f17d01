//! File generation: renders each input template into its resolved output path.

use indexmap::IndexSet;
use log::debug;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::{
    config::PathMapping,
    error::{Error, Result},
    prompt::{CollectedData, Prompter},
    renderer::MiniJinjaRenderer,
};

/// What happened to a single mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationOutcome {
    Created,
    Overwritten,
    Skipped,
}

impl fmt::Display for GenerationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GenerationOutcome::Created => "created",
            GenerationOutcome::Overwritten => "overwritten",
            GenerationOutcome::Skipped => "skipped",
        };
        write!(f, "{label}")
    }
}

/// Outcome of one mapping together with the file it targeted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub outcome: GenerationOutcome,
    pub path: PathBuf,
}

/// Joins a resolved output onto the output root. An empty root leaves the
/// path relative to the current directory.
pub fn resolve_target_path<P: AsRef<Path>>(output_root: P, output: &str) -> PathBuf {
    let output_root = output_root.as_ref();
    if output_root.as_os_str().is_empty() {
        PathBuf::from(output)
    } else {
        output_root.join(output)
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, content)?;
    Ok(())
}

/// Renders resolved mappings to disk.
pub struct FileProcessor<'a> {
    prompt: &'a dyn Prompter,
    template_root: PathBuf,
    output_root: PathBuf,
    skip_overwrite_check: bool,
}

impl<'a> FileProcessor<'a> {
    pub fn new<T: AsRef<Path>, O: AsRef<Path>>(
        prompt: &'a dyn Prompter,
        template_root: T,
        output_root: O,
        skip_overwrite_check: bool,
    ) -> Self {
        Self {
            prompt,
            template_root: template_root.as_ref().to_path_buf(),
            output_root: output_root.as_ref().to_path_buf(),
            skip_overwrite_check,
        }
    }

    /// Loads every distinct input template named by `mappings` into one
    /// environment, so templates can include each other by input name.
    ///
    /// # Errors
    /// * `Error::TemplateLoadError` if a template is missing or does not parse
    pub fn load_templates(&self, mappings: &[PathMapping]) -> Result<MiniJinjaRenderer> {
        let mut renderer = MiniJinjaRenderer::new();
        let inputs: IndexSet<&str> = mappings.iter().map(|m| m.input.as_str()).collect();

        for input in inputs {
            let path = self.template_root.join(input);
            debug!("Loading template '{}'", path.display());
            let source = fs::read_to_string(&path).map_err(|e| Error::TemplateLoadError {
                input: input.to_string(),
                message: e.to_string(),
            })?;
            renderer.add_template(input, source)?;
        }

        Ok(renderer)
    }

    /// Generates every mapping in order.
    ///
    /// All templates are loaded before anything is written. A declined
    /// overwrite skips that mapping only; files written before a later
    /// failure stay on disk.
    ///
    /// # Errors
    /// * `Error::TemplateLoadError` if loading fails (nothing is written)
    /// * `Error::TemplateError` / `Error::IoError` while generating a file
    pub fn process(
        &self,
        mappings: &[PathMapping],
        data: &CollectedData,
    ) -> Result<Vec<GeneratedFile>> {
        let renderer = self.load_templates(mappings)?;
        mappings.iter().map(|mapping| self.process_mapping(&renderer, mapping, data)).collect()
    }

    fn process_mapping(
        &self,
        renderer: &MiniJinjaRenderer,
        mapping: &PathMapping,
        data: &CollectedData,
    ) -> Result<GeneratedFile> {
        let target = resolve_target_path(&self.output_root, &mapping.output);
        let outcome = if target.exists() {
            let question = format!("overwrite {}?", target.display());
            if !self.prompt.confirm(self.skip_overwrite_check, &question)? {
                debug!("Skipping existing file '{}'", target.display());
                return Ok(GeneratedFile { outcome: GenerationOutcome::Skipped, path: target });
            }
            GenerationOutcome::Overwritten
        } else {
            GenerationOutcome::Created
        };

        let content = renderer.render_named(&mapping.input, data)?;
        debug!("Writing '{}' from '{}'", target.display(), mapping.input);
        write_file(&target, &content)?;

        Ok(GeneratedFile { outcome, path: target })
    }
}
