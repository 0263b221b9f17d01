//! Root directory scaffolding for `forge init`.

use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::{
    config::{GeneratorDefinition, PathMapping, PromptField},
    error::{Error, Result},
    prompt::Prompter,
};

/// File name of the sample definition written by `init`.
pub const SAMPLE_FILE: &str = "sample.yaml";

/// The generator written by `init`.
pub fn sample_definition() -> GeneratorDefinition {
    let prompt = |n: u8| PromptField {
        name: format!("prompt_{n}"),
        message: format!("input prompt_{n}"),
    };
    let mapping = |n: u8| PathMapping {
        input: format!("input-{n}.tmpl"),
        output: format!("output-{n}.txt"),
    };

    GeneratorDefinition {
        name: "sample".to_string(),
        prompts: vec![prompt(1), prompt(2)],
        mappings: vec![mapping(1), mapping(2)],
    }
}

/// Creates `root_dir` with a sample definition and its templates.
///
/// Replacing an existing sample definition needs confirmation. Existing
/// sample templates are left untouched.
///
/// # Returns
/// * `Result<Option<PathBuf>>` - Path of the written definition, `None` if
///   the user kept the existing one
pub fn init_root<P: AsRef<Path>>(
    prompt: &dyn Prompter,
    root_dir: P,
    skip_overwrite_check: bool,
) -> Result<Option<PathBuf>> {
    let root_dir = root_dir.as_ref();
    fs::create_dir_all(root_dir)?;

    let definition = sample_definition();
    let definition_path = root_dir.join(SAMPLE_FILE);
    if definition_path.exists() {
        let question = format!("{} already exists. Replace it?", definition_path.display());
        if !prompt.confirm(skip_overwrite_check, &question)? {
            debug!("Keeping existing '{}'", definition_path.display());
            return Ok(None);
        }
    }

    let content = serde_yaml::to_string(&definition).map_err(|e| Error::ParseError {
        path: definition_path.clone(),
        message: e.to_string(),
    })?;
    fs::write(&definition_path, content)?;

    for (field, mapping) in definition.prompts.iter().zip(&definition.mappings) {
        let template_path = root_dir.join(&mapping.input);
        if template_path.exists() {
            continue;
        }
        debug!("Writing sample template '{}'", template_path.display());
        fs::write(&template_path, format!("{}: {{{{ {} }}}}\n", field.name, field.name))?;
    }

    Ok(Some(definition_path))
}
