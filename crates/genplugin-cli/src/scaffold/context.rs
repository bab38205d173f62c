//! Plugin name derivation.

use std::path::PathBuf;

use regex::Regex;

/// Pattern a plugin base name must satisfy: alphabetic first character,
/// alphanumerics or underscores after that, at least two characters total.
const NAME_PATTERN: &str = "^[a-zA-Z][a-zA-Z0-9_]+$";

/// Name context for one scaffolding run, derived once from user input.
///
/// Construction does not validate: the scaffolder checks the target
/// directory against the raw name before it checks the pattern, so even an
/// invalid name must be able to produce a directory path.
#[derive(Debug, Clone)]
pub struct PluginName {
    simple: String,
}

impl PluginName {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { simple: raw.into() }
    }

    pub fn is_valid(&self) -> bool {
        Regex::new(NAME_PATTERN).unwrap().is_match(&self.simple)
    }

    /// The name as the user typed it, e.g. `Foo`.
    pub fn simple_name(&self) -> &str {
        &self.simple
    }

    /// Plugin class name, e.g. `FooPlugin`.
    pub fn class_name(&self) -> String {
        format!("{}Plugin", self.simple)
    }

    /// Lowercased stem for the generated source files, e.g. `fooplugin`.
    pub fn file_stem(&self) -> String {
        self.class_name().to_lowercase()
    }

    /// Uppercased include-guard stem, e.g. `FOOPLUGIN`.
    pub fn guard(&self) -> String {
        self.class_name().to_uppercase()
    }

    /// Target directory, relative to the working directory.
    pub fn directory(&self) -> PathBuf {
        PathBuf::from(&self.simple)
    }
}
