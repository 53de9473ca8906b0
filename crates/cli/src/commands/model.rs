use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anvil_codegen::syntax::model;
use anvil_codegen::{parsers, templates, Generator};
use anvil_core::{AnvilError, GeneratorConfig};

use crate::support::to_pascal_case;

pub fn generate(
    name: &str,
    table: Option<&str>,
    relationships: Option<&str>,
    path: Option<PathBuf>,
    template_path: Option<PathBuf>,
    force: bool,
) -> Result<(), AnvilError> {
    let config = GeneratorConfig::load(Path::new("."))?;
    let class_name = to_pascal_case(name);

    let parsed = parsers::parse(relationships.unwrap_or(""));
    let relationships_block = model::relationships(&parsed)?;

    let mut context = HashMap::new();
    context.insert("name", class_name.clone());
    context.insert("table", model::table_property(table));
    context.insert("relationships", relationships_block);

    let template_path = template_path.or(config.model_template_path);
    let template = templates::load_template(template_path.as_deref(), templates::MODEL_TEMPLATE)?;

    let target_dir = path.unwrap_or(config.model_target_path);
    let target = target_dir.join(format!("{}.php", class_name));

    match Generator::new().make(&template, &context, &target, force) {
        Ok(()) => {
            println!("✓ Created: {}", target.display());
            Ok(())
        }
        Err(AnvilError::FileAlreadyExists(existing)) => {
            eprintln!(
                "The file {} already exists! I don't want to overwrite it.",
                existing.display()
            );
            Ok(())
        }
        Err(e) => Err(e),
    }
}
