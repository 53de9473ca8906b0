pub mod parsers;
pub mod syntax;
pub mod templates;
pub mod writer;

pub use writer::CodeWriter;

use std::collections::HashMap;
use std::path::Path;

use anvil_core::AnvilError;

pub struct Generator {
    writer: CodeWriter,
}

impl Generator {
    pub fn new() -> Self {
        Self {
            writer: CodeWriter::new(),
        }
    }

    /// Render a template against the given context and write the result,
    /// refusing to overwrite an existing file unless `force` is set.
    pub fn make(
        &self,
        template: &str,
        context: &HashMap<&str, String>,
        target: &Path,
        force: bool,
    ) -> Result<(), AnvilError> {
        let content = templates::render_template(template, context);
        self.writer.write(target, &content, force)
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}
