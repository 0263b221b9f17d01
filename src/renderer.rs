//! Template rendering for forge, backed by MiniJinja.
//! Path templates render strictly; file templates tolerate missing values.
use crate::error::{Error, Result};
use crate::prompt::CollectedData;
use cruet::Inflector;
use minijinja::{AutoEscape, Environment, UndefinedBehavior};

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given data.
    ///
    /// # Errors
    /// * `Error::TemplateError` if the template is invalid or rendering fails
    fn render(&self, template: &str, data: &CollectedData) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Renderer for file contents: undefined values render empty and
    /// `.html`/`.htm`/`.xml` templates are HTML-escaped.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.set_auto_escape_callback(|name| match name.rsplit('.').next() {
            Some("html" | "htm" | "xml") => AutoEscape::Html,
            _ => AutoEscape::None,
        });
        register_filters(&mut env);
        Self { env }
    }

    /// Renderer for path templates: an undefined value is an error and
    /// nothing is escaped.
    pub fn strict() -> Self {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        register_filters(&mut env);
        Self { env }
    }

    /// Adds a named template so it can be rendered and included by name.
    ///
    /// # Errors
    /// * `Error::TemplateLoadError` if the source does not parse
    pub fn add_template(&mut self, name: &str, source: String) -> Result<()> {
        self.env.add_template_owned(name.to_string(), source).map_err(|e| {
            Error::TemplateLoadError { input: name.to_string(), message: e.to_string() }
        })
    }

    /// Renders a template previously registered with [`Self::add_template`].
    ///
    /// # Errors
    /// * `Error::TemplateError` if the template is unknown or rendering fails
    pub fn render_named(&self, name: &str, data: &CollectedData) -> Result<String> {
        let tmpl = self.env.get_template(name)?;
        Ok(tmpl.render(data)?)
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    fn render(&self, template: &str, data: &CollectedData) -> Result<String> {
        Ok(self.env.render_str(template, data)?)
    }
}

fn register_filters(env: &mut Environment<'static>) {
    env.add_filter("snake_case", |value: String| value.to_snake_case());
    env.add_filter("camel_case", |value: String| value.to_camel_case());
    env.add_filter("pascal_case", |value: String| value.to_pascal_case());
    env.add_filter("kebab_case", |value: String| value.to_kebab_case());
    env.add_filter("screaming_snake_case", |value: String| {
        value.to_screaming_snake_case()
    });
}
