use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anvil_codegen::parsers::{self, SchemaAction};
use anvil_codegen::syntax::schema;
use anvil_codegen::{templates, Generator};
use anvil_core::{AnvilError, GeneratorConfig};
use chrono::Utc;

use crate::support::to_pascal_case;

pub fn generate(
    name: &str,
    fields_str: Option<&str>,
    path: Option<PathBuf>,
    template_path: Option<PathBuf>,
    force: bool,
) -> Result<(), AnvilError> {
    let config = GeneratorConfig::load(Path::new("."))?;

    let fields = parsers::parse(fields_str.unwrap_or(""));
    let migration = parsers::parse_migration_name(name);

    let (up, down) = match migration.action {
        SchemaAction::Create => (
            schema::create_table(&migration.table, &fields),
            schema::drop_table(&migration.table),
        ),
        SchemaAction::Add => (
            schema::add_to_table(&migration.table, &fields),
            schema::drop_columns(&migration.table, &fields),
        ),
        SchemaAction::Remove => (
            schema::drop_columns(&migration.table, &fields),
            schema::add_to_table(&migration.table, &fields),
        ),
    };

    let mut context = HashMap::new();
    context.insert("class", to_pascal_case(name));
    context.insert("up", up);
    context.insert("down", down);

    let template_path = template_path.or(config.migration_template_path);
    let template =
        templates::load_template(template_path.as_deref(), templates::MIGRATION_TEMPLATE)?;

    let target_dir = path.unwrap_or(config.migration_target_path);
    let filename = format!("{}_{}.php", Utc::now().format("%Y_%m_%d_%H%M%S"), name);
    let target = target_dir.join(filename);

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

#[cfg(test)]
mod tests {
    use super::*;

    fn written_file(dir: &Path) -> String {
        let entry = std::fs::read_dir(dir)
            .unwrap()
            .next()
            .expect("one generated file")
            .unwrap();
        std::fs::read_to_string(entry.path()).unwrap()
    }

    #[test]
    fn create_migrations_get_structural_columns_and_a_drop() {
        let dir = tempfile::tempdir().unwrap();

        generate(
            "create_posts_table",
            Some("title:string, user_id:foreign"),
            Some(dir.path().to_path_buf()),
            None,
            false,
        )
        .unwrap();

        let written = written_file(dir.path());
        assert!(written.contains("class CreatePostsTable extends Migration {"));
        assert!(written.contains("Schema::create('posts', function(Blueprint $table)"));
        assert!(written.contains("$table->increments('id');"));
        assert!(written.contains("$table->integer('user_id')->unsigned();"));
        assert!(written.contains("$table->foreign('user_id');"));
        assert!(written.contains("$table->timestamps();"));
        assert!(written.contains("Schema::drop('posts');"));
    }

    #[test]
    fn add_migrations_alter_the_table_both_ways() {
        let dir = tempfile::tempdir().unwrap();

        generate(
            "add_slug_to_posts_table",
            Some("slug:string(64):unique"),
            Some(dir.path().to_path_buf()),
            None,
            false,
        )
        .unwrap();

        let written = written_file(dir.path());
        assert!(written.contains("Schema::table('posts', function(Blueprint $table)"));
        assert!(written.contains("$table->string('slug', 64)->unique();"));
        assert!(written.contains("$table->dropColumn('slug');"));
        assert!(!written.contains("increments"));
    }
}
