//! Generation orchestration.
//! Finds a generator, collects its data, resolves its paths and writes its files.

use log::debug;
use std::path::{Path, PathBuf};

use crate::{
    config::{find_generator, PathMapping},
    error::Result,
    paths::resolve_mappings,
    processor::{FileProcessor, GeneratedFile},
    prompt::{collect_data, validate_supplied, CollectedData, Prompter},
    renderer::MiniJinjaRenderer,
};

/// Runs a named generator from a definitions directory.
pub struct Generator<'a> {
    prompt: &'a dyn Prompter,
    root_dir: PathBuf,
    output_dir: PathBuf,
    skip_overwrite_check: bool,
}

impl<'a> Generator<'a> {
    /// Creates a generator reading definitions and templates from `root_dir`
    /// and writing relative to the current directory.
    pub fn new<P: AsRef<Path>>(prompt: &'a dyn Prompter, root_dir: P) -> Self {
        Self {
            prompt,
            root_dir: root_dir.as_ref().to_path_buf(),
            output_dir: PathBuf::new(),
            skip_overwrite_check: false,
        }
    }

    /// Resolves output paths against `output_dir` instead of the current directory.
    pub fn with_output_dir<P: AsRef<Path>>(mut self, output_dir: P) -> Self {
        self.output_dir = output_dir.as_ref().to_path_buf();
        self
    }

    /// Answers every overwrite confirmation with yes.
    pub fn with_skip_overwrite_check(mut self, skip: bool) -> Self {
        self.skip_overwrite_check = skip;
        self
    }

    /// Prepares generator `name`: finds it, collects its data (prompting
    /// only where `supplied` has no non-empty value) and resolves its paths.
    /// Nothing is written.
    ///
    /// # Errors
    /// * `Error::NotFound` / `Error::ParseError` while finding the definition
    /// * `Error::ArgumentError` if `supplied` names an undeclared prompt
    /// * `Error::TemplateError` / `Error::PathListError` while resolving paths
    pub fn prepare(&self, name: &str, supplied: &CollectedData) -> Result<GenerationPlan> {
        let definition = find_generator(&self.root_dir, name)?;
        validate_supplied(&definition.prompts, supplied)?;

        let data = collect_data(self.prompt, &definition.prompts, supplied)?;
        debug!("Collected data: {:?}", data);

        let mappings =
            resolve_mappings(&definition.mappings, &data, &MiniJinjaRenderer::strict())?;
        Ok(GenerationPlan { mappings, data })
    }

    /// Writes the files of a prepared plan in declaration order.
    ///
    /// # Errors
    /// * `Error::TemplateLoadError` / `Error::TemplateError` / `Error::IoError`
    pub fn generate(&self, plan: &GenerationPlan) -> Result<Vec<GeneratedFile>> {
        let processor = FileProcessor::new(
            self.prompt,
            &self.root_dir,
            &self.output_dir,
            self.skip_overwrite_check,
        );
        processor.process(&plan.mappings, &plan.data)
    }

    /// Runs generator `name` end to end. Stages run strictly in order and
    /// the first failure is returned as is.
    pub fn run(&self, name: &str, supplied: &CollectedData) -> Result<Vec<GeneratedFile>> {
        let plan = self.prepare(name, supplied)?;
        self.generate(&plan)
    }
}

/// Resolved mappings and the data to render them with.
#[derive(Debug, Clone)]
pub struct GenerationPlan {
    pub mappings: Vec<PathMapping>,
    pub data: CollectedData,
}

/// Formats the end-of-run report, one line per mapping.
pub fn format_summary(files: &[GeneratedFile]) -> String {
    let mut lines = vec!["Files:".to_string()];
    lines.extend(
        files.iter().map(|file| format!("      {}: {}", file.outcome, file.path.display())),
    );
    lines.join("\n")
}
