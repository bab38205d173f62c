//! Template rendering with variable substitution.

use std::io;
use std::path::{Path, PathBuf};

use regex::Regex;

use crate::templates::{Template, TemplateContext};

/// Template renderer
pub struct TemplateRenderer {
    variable_pattern: Regex,
}

impl TemplateRenderer {
    pub fn new() -> Self {
        // Match {{variable_name}} or {{ variable_name }}
        let variable_pattern = Regex::new(r"\{\{\s*(\w+)\s*\}\}").unwrap();

        Self { variable_pattern }
    }

    /// Render a template to a target directory
    pub fn render(
        &self,
        template: &Template,
        target: &Path,
        context: &TemplateContext,
    ) -> Result<Vec<RenderedFile>, TemplateError> {
        let mut rendered = Vec::with_capacity(template.files.len());

        for file in &template.files {
            // Both the path and the content may contain variables
            let rendered_path = self.render_string(&file.path, context)?;
            let content = self.render_string(&file.content, context)?;

            rendered.push(RenderedFile {
                path: target.join(rendered_path),
                content,
            });
        }

        Ok(rendered)
    }

    /// Render a string with variable substitution
    pub fn render_string(
        &self,
        template: &str,
        context: &TemplateContext,
    ) -> Result<String, TemplateError> {
        let mut result = template.to_string();
        let mut missing = Vec::new();

        for cap in self.variable_pattern.captures_iter(template) {
            let full_match = cap.get(0).unwrap().as_str();
            let var_name = &cap[1];

            match context.get(var_name) {
                Some(value) => {
                    result = result.replace(full_match, value);
                }
                None => {
                    missing.push(var_name.to_string());
                }
            }
        }

        if !missing.is_empty() {
            return Err(TemplateError::MissingVariable(missing.join(", ")));
        }

        Ok(result)
    }
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// A rendered file ready to be written
#[derive(Debug)]
pub struct RenderedFile {
    pub path: PathBuf,
    pub content: String,
}

impl RenderedFile {
    /// Write the file to disk. The parent directory must already exist.
    pub fn write(&self) -> io::Result<()> {
        std::fs::write(&self.path, &self.content)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("Missing variable: {0}")]
    MissingVariable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(pairs: &[(&str, &str)]) -> TemplateContext {
        let mut ctx = TemplateContext::new();
        for (key, value) in pairs {
            ctx.set(*key, *value);
        }
        ctx
    }

    #[test]
    fn test_render_string_basic() {
        let renderer = TemplateRenderer::new();
        let ctx = context(&[("name", "World")]);

        let result = renderer.render_string("Hello, {{name}}!", &ctx).unwrap();
        assert_eq!(result, "Hello, World!");
    }

    #[test]
    fn test_render_string_padded_variable() {
        let renderer = TemplateRenderer::new();
        let ctx = context(&[("class_name", "FooPlugin")]);

        let result = renderer
            .render_string("class {{ class_name }};", &ctx)
            .unwrap();
        assert_eq!(result, "class FooPlugin;");
    }

    #[test]
    fn test_render_string_repeated_variable() {
        let renderer = TemplateRenderer::new();
        let ctx = context(&[("class_name", "FooPlugin")]);

        let result = renderer
            .render_string("{{class_name}}::{{class_name}}()", &ctx)
            .unwrap();
        assert_eq!(result, "FooPlugin::FooPlugin()");
    }

    #[test]
    fn test_render_string_missing_variable() {
        let renderer = TemplateRenderer::new();
        let ctx = TemplateContext::new();

        let err = renderer.render_string("Hello, {{name}}!", &ctx).unwrap_err();
        assert!(matches!(err, TemplateError::MissingVariable(ref v) if v == "name"));
    }

    #[test]
    fn test_single_braces_pass_through() {
        let renderer = TemplateRenderer::new();
        let ctx = TemplateContext::new();

        // C++ bodies are full of single braces; only {{...}} is a variable
        let result = renderer.render_string("return {};", &ctx).unwrap();
        assert_eq!(result, "return {};");
    }
}
