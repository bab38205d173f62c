//! Plugin template system.

mod builtin;
mod renderer;

pub use builtin::BuiltinTemplates;
pub use renderer::{RenderedFile, TemplateError, TemplateRenderer};

use std::collections::HashMap;

use crate::scaffold::PluginName;

/// A scaffolding template
#[derive(Debug, Clone)]
pub struct Template {
    pub name: String,
    pub description: String,
    pub files: Vec<TemplateFile>,
}

/// A file within a template
#[derive(Debug, Clone)]
pub struct TemplateFile {
    /// Relative path pattern (may contain variables)
    pub path: String,
    /// File content (may contain variables)
    pub content: String,
}

/// Context for template rendering
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    variables: HashMap<String, String>,
}

impl TemplateContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.variables.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&String> {
        self.variables.get(key)
    }

    /// Context carrying the name-derived variables.
    ///
    /// Nothing environment-dependent goes in here: rendered output must be
    /// byte-identical across invocations of the tool.
    pub fn for_plugin(name: &PluginName) -> Self {
        let mut ctx = Self::new();

        ctx.set("simple_name", name.simple_name());
        ctx.set("class_name", name.class_name());
        ctx.set("file_stem", name.file_stem());
        ctx.set("guard", name.guard());

        ctx
    }
}
