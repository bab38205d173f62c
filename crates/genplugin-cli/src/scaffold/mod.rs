//! Plugin scaffolding: directory creation and file generation.

mod context;

pub use context::PluginName;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::templates::{BuiltinTemplates, TemplateContext, TemplateError, TemplateRenderer};

/// Errors from a scaffolding run.
///
/// `DirectoryExists` and `InvalidName` are user-input rejections the CLI
/// turns into a diagnostic and a clean exit; the rest are filesystem
/// failures surfaced as fatal.
#[derive(Debug, thiserror::Error)]
pub enum ScaffoldError {
    #[error("plugin directory {} already exists", .0.display())]
    DirectoryExists(PathBuf),

    #[error("plugin name {0:?} is invalid")]
    InvalidName(String),

    #[error("failed to create directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}", path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Template(#[from] TemplateError),
}

/// Filesystem entries produced by a successful run.
#[derive(Debug)]
pub struct GeneratedFiles {
    pub directory: PathBuf,
    pub files: Vec<PathBuf>,
}

/// Generates a plugin skeleton under a base directory.
pub struct Scaffolder {
    base_dir: PathBuf,
    renderer: TemplateRenderer,
    quiet: bool,
}

impl Scaffolder {
    /// Scaffolder rooted at the current working directory.
    pub fn new() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            renderer: TemplateRenderer::new(),
            quiet: false,
        }
    }

    /// Scaffolder rooted at `base` instead of the working directory.
    pub fn with_base_dir(base: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base.into(),
            ..Self::new()
        }
    }

    /// Suppress progress output.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Validate `raw_name`, create the plugin directory, and write the three
    /// skeleton files into it.
    ///
    /// The directory check runs before the name-pattern check: a clashing
    /// directory wins even for names the pattern would reject. The directory
    /// is created before any file write, and nothing is rolled back on a
    /// mid-generation failure.
    pub fn generate(&self, raw_name: &str) -> Result<GeneratedFiles, ScaffoldError> {
        let name = PluginName::new(raw_name);
        let dir = self.base_dir.join(name.directory());

        if dir.exists() {
            return Err(ScaffoldError::DirectoryExists(dir));
        }

        if !name.is_valid() {
            return Err(ScaffoldError::InvalidName(raw_name.to_string()));
        }

        debug!(name = raw_name, directory = %dir.display(), "scaffolding plugin");

        fs::create_dir(&dir).map_err(|source| ScaffoldError::CreateDir {
            path: dir.clone(),
            source,
        })?;

        let template = BuiltinTemplates::plugin();
        let context = TemplateContext::for_plugin(&name);
        let rendered = self.renderer.render(&template, &dir, &context)?;

        let mut files = Vec::with_capacity(rendered.len());
        for file in rendered {
            self.announce(&file.path);
            file.write().map_err(|source| ScaffoldError::WriteFile {
                path: file.path.clone(),
                source,
            })?;
            files.push(file.path);
        }

        if !self.quiet {
            println!("Done!");
        }

        Ok(GeneratedFiles {
            directory: dir,
            files,
        })
    }

    fn announce(&self, path: &Path) {
        if self.quiet {
            return;
        }
        // Shown relative to the base, the way the paths read from the shell
        let shown = path.strip_prefix(&self.base_dir).unwrap_or(path);
        println!("Creating {} ...", shown.display());
    }
}

impl Default for Scaffolder {
    fn default() -> Self {
        Self::new()
    }
}
