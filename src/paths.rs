//! Output path templating.
//!
//! The mapping list of a generator is serialized to YAML, rendered as a single
//! template against the collected data and parsed back. Both `input` and
//! `output` may therefore reference prompt values.

use crate::config::PathMapping;
use crate::error::{Error, Result};
use crate::prompt::CollectedData;
use crate::renderer::TemplateRenderer;
use log::debug;

/// Serializes `mappings` to YAML and renders the text with `data`.
///
/// # Errors
/// * `Error::PathListError` if serialization fails
/// * `Error::TemplateError` if rendering fails, including undefined values
///   when `renderer` is strict
pub fn render_path_template(
    mappings: &[PathMapping],
    data: &CollectedData,
    renderer: &dyn TemplateRenderer,
) -> Result<String> {
    let text = serde_yaml::to_string(mappings).map_err(|e| Error::PathListError(e.to_string()))?;
    debug!("Rendering mapping list:\n{}", text);
    renderer.render(&text, data)
}

/// Parses a rendered mapping list.
///
/// # Errors
/// * `Error::PathListError` if `text` is not a YAML list of mappings
pub fn parse_path_list(text: &str) -> Result<Vec<PathMapping>> {
    serde_yaml::from_str(text).map_err(|e| Error::PathListError(e.to_string()))
}

/// Resolves every mapping against `data`, keeping length and order.
///
/// Each reparsed field must equal the same field rendered on its own, so a
/// value that YAML reads differently (a ` #` comment, a quote) is an error
/// rather than a silently altered path.
///
/// # Errors
/// * Any error of [`render_path_template`] or [`parse_path_list`]
/// * `Error::PathListError` if rendering changed the number of mappings, a
///   field did not survive the round trip, or an output path is empty
pub fn resolve_mappings(
    mappings: &[PathMapping],
    data: &CollectedData,
    renderer: &dyn TemplateRenderer,
) -> Result<Vec<PathMapping>> {
    let rendered = render_path_template(mappings, data, renderer)?;
    let resolved = parse_path_list(&rendered)?;

    if resolved.len() != mappings.len() {
        return Err(Error::PathListError(format!(
            "expected {} mappings, got {}",
            mappings.len(),
            resolved.len()
        )));
    }

    for (original, mapping) in mappings.iter().zip(&resolved) {
        check_field(&original.input, &mapping.input, data, renderer)?;
        check_field(&original.output, &mapping.output, data, renderer)?;

        if mapping.output.trim().is_empty() {
            return Err(Error::PathListError(format!(
                "output path for '{}' is empty",
                mapping.input
            )));
        }
        debug!("Resolved '{}' -> '{}'", mapping.input, mapping.output);
    }
    Ok(resolved)
}

fn check_field(
    template: &str,
    reparsed: &str,
    data: &CollectedData,
    renderer: &dyn TemplateRenderer,
) -> Result<()> {
    let expected = renderer.render(template, data)?;
    if expected != reparsed {
        return Err(Error::PathListError(format!(
            "'{template}' rendered to '{expected}' but was read back as '{reparsed}'"
        )));
    }
    Ok(())
}
