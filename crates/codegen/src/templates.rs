use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anvil_core::AnvilError;

/// Substitute `{{key}}` placeholders from the context. Unknown placeholders
/// are left in place; unused context keys are ignored.
pub fn render_template(template: &str, context: &HashMap<&str, String>) -> String {
    let mut result = template.to_string();

    for (key, value) in context {
        let placeholder = format!("{{{{{}}}}}", key);
        result = result.replace(&placeholder, value);
    }

    result
}

/// Read a user-supplied template, or fall back to the built-in one.
pub fn load_template(path: Option<&Path>, default: &str) -> Result<String, AnvilError> {
    match path {
        Some(path) => fs::read_to_string(path).map_err(|e| {
            AnvilError::Template(format!("failed to read template {}: {}", path.display(), e))
        }),
        None => Ok(default.to_string()),
    }
}

pub static MODEL_TEMPLATE: &str = r#"<?php

class {{name}} extends \Eloquent {

	{{table}}

	{{relationships}}
}
"#;

pub static MIGRATION_TEMPLATE: &str = r#"<?php

use Illuminate\Database\Migrations\Migration;
use Illuminate\Database\Schema\Blueprint;

class {{class}} extends Migration {

	/**
	 * Run the migrations.
	 *
	 * @return void
	 */
	public function up()
	{
		{{up}}
	}

	/**
	 * Reverse the migrations.
	 *
	 * @return void
	 */
	public function down()
	{
		{{down}}
	}

}
"#;
