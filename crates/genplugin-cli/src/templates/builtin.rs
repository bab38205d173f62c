//! Built-in scaffolding templates.

use crate::templates::{Template, TemplateFile};

/// Built-in templates registry
pub struct BuiltinTemplates;

impl BuiltinTemplates {
    /// The Kangaroo plugin skeleton: implementation file, header with the
    /// `KLib::IPlugin` declaration, and a qmake project descriptor.
    ///
    /// File order is the order the scaffolder writes and announces them.
    pub fn plugin() -> Template {
        let files = vec![
            TemplateFile {
                path: "{{file_stem}}.cpp".to_string(),
                content: include_str!("builtin/plugin/plugin.cpp.in").to_string(),
            },
            TemplateFile {
                path: "{{file_stem}}.h".to_string(),
                content: include_str!("builtin/plugin/plugin.h.in").to_string(),
            },
            TemplateFile {
                path: "{{simple_name}}.pro".to_string(),
                content: include_str!("builtin/plugin/plugin.pro.in").to_string(),
            },
        ];

        Template {
            name: "plugin".to_string(),
            description: "Kangaroo plugin skeleton".to_string(),
            files,
        }
    }
}
