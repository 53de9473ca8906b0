use anvil_core::FieldSpec;

use super::decorator_chain;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaMethod {
    Create,
    Table,
}

impl SchemaMethod {
    fn as_str(self) -> &'static str {
        match self {
            SchemaMethod::Create => "create",
            SchemaMethod::Table => "table",
        }
    }
}

/// Apply the create-table column policy: infer an unsigned integer column for
/// every `foreign` field that lacks an explicit integer column, then add the
/// structural `id` and `timestamps` columns.
///
/// Inference always probes the pristine input list, never the list under
/// construction; inferred columns are stacked in front, so the last-scanned
/// one ends up frontmost, right behind `id`.
pub fn create_columns(fields: &[FieldSpec]) -> Vec<FieldSpec> {
    let mut columns: Vec<FieldSpec> = Vec::new();

    for field in fields {
        if field.field_type == "foreign" && !has_integer_column(&field.field, fields) {
            columns.insert(
                0,
                FieldSpec {
                    field: field.field.clone(),
                    field_type: "integer".to_string(),
                    args: None,
                    decorators: vec!["unsigned".to_string()],
                },
            );
        }
    }

    // All new tables get an identifier and timestamps.
    columns.insert(0, FieldSpec::new("id", "increments"));
    columns.extend(fields.iter().cloned());
    columns.push(FieldSpec::new("", "timestamps"));

    columns
}

pub fn create_table(table: &str, fields: &[FieldSpec]) -> String {
    schema_block(SchemaMethod::Create, table, &create_columns(fields))
}

pub fn add_to_table(table: &str, fields: &[FieldSpec]) -> String {
    schema_block(SchemaMethod::Table, table, fields)
}

pub fn drop_columns(table: &str, fields: &[FieldSpec]) -> String {
    let statements: Vec<String> = fields
        .iter()
        .filter(|f| !f.field.is_empty())
        .map(|f| format!("$table->dropColumn('{}');", f.field))
        .collect();

    wrap_block(SchemaMethod::Table, table, &statements)
}

pub fn drop_table(table: &str) -> String {
    format!("Schema::drop('{}');", table)
}

/// Render a `Schema::create`/`Schema::table` block with one statement per
/// column, in list order.
pub fn schema_block(method: SchemaMethod, table: &str, fields: &[FieldSpec]) -> String {
    let statements: Vec<String> = fields.iter().map(column_statement).collect();
    wrap_block(method, table, &statements)
}

fn wrap_block(method: SchemaMethod, table: &str, statements: &[String]) -> String {
    format!(
        "Schema::{}('{}', function(Blueprint $table)\n\t\t{{\n\t\t\t{}\n\t\t}});",
        method.as_str(),
        table,
        statements.join("\n\t\t\t")
    )
}

fn column_statement(field: &FieldSpec) -> String {
    let mut output = if let Some(args) = &field.args {
        format!("$table->{}('{}', {})", field.field_type, field.field, args)
    } else if field.field.is_empty() {
        // Structural markers like `timestamps` carry no column name.
        format!("$table->{}()", field.field_type)
    } else {
        format!("$table->{}('{}')", field.field_type, field.field)
    };

    output.push_str(&decorator_chain(&field.decorators));
    output.push(';');
    output
}

fn has_integer_column(name: &str, fields: &[FieldSpec]) -> bool {
    fields
        .iter()
        .any(|f| f.field_type == "integer" && f.field == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(name: &str, kind: &str) -> FieldSpec {
        FieldSpec::new(name, kind)
    }

    fn shape(columns: &[FieldSpec]) -> Vec<(String, String)> {
        columns
            .iter()
            .map(|c| (c.field.clone(), c.field_type.clone()))
            .collect()
    }

    #[test]
    fn foreign_fields_get_an_inferred_unsigned_integer() {
        let columns = create_columns(&[field("user_id", "foreign")]);
        assert_eq!(
            shape(&columns),
            vec![
                ("id".to_string(), "increments".to_string()),
                ("user_id".to_string(), "integer".to_string()),
                ("user_id".to_string(), "foreign".to_string()),
                ("".to_string(), "timestamps".to_string()),
            ]
        );
        assert_eq!(columns[1].decorators, vec!["unsigned".to_string()]);
    }

    #[test]
    fn an_explicit_integer_column_satisfies_the_probe() {
        let columns = create_columns(&[field("a", "integer"), field("a", "foreign")]);
        assert_eq!(
            shape(&columns),
            vec![
                ("id".to_string(), "increments".to_string()),
                ("a".to_string(), "integer".to_string()),
                ("a".to_string(), "foreign".to_string()),
                ("".to_string(), "timestamps".to_string()),
            ]
        );
    }

    #[test]
    fn each_distinct_foreign_field_gets_its_own_column_last_scanned_frontmost() {
        let columns = create_columns(&[field("x", "foreign"), field("y", "foreign")]);
        assert_eq!(
            shape(&columns),
            vec![
                ("id".to_string(), "increments".to_string()),
                ("y".to_string(), "integer".to_string()),
                ("x".to_string(), "integer".to_string()),
                ("x".to_string(), "foreign".to_string()),
                ("y".to_string(), "foreign".to_string()),
                ("".to_string(), "timestamps".to_string()),
            ]
        );
    }

    #[test]
    fn inference_leaves_the_input_untouched() {
        let input = vec![field("user_id", "foreign")];
        let _ = create_columns(&input);
        assert_eq!(input, vec![field("user_id", "foreign")]);
    }

    #[test]
    fn empty_input_still_gets_structural_columns() {
        let columns = create_columns(&[]);
        assert_eq!(
            shape(&columns),
            vec![
                ("id".to_string(), "increments".to_string()),
                ("".to_string(), "timestamps".to_string()),
            ]
        );
    }

    #[test]
    fn column_statements_render_each_shape() {
        assert_eq!(
            column_statement(&field("id", "increments")),
            "$table->increments('id');"
        );
        assert_eq!(
            column_statement(&field("", "timestamps")),
            "$table->timestamps();"
        );

        let mut sized = field("name", "string");
        sized.args = Some("64".to_string());
        assert_eq!(column_statement(&sized), "$table->string('name', 64);");

        let mut decorated = field("age", "integer");
        decorated.decorators = vec!["unsigned".to_string(), "default(0)".to_string()];
        assert_eq!(
            column_statement(&decorated),
            "$table->integer('age')->unsigned()->default(0);"
        );
    }

    #[test]
    fn create_block_wraps_the_columns() {
        let block = create_table("posts", &[field("title", "string")]);
        assert!(block.starts_with("Schema::create('posts', function(Blueprint $table)"));
        assert!(block.contains("$table->increments('id');"));
        assert!(block.contains("$table->string('title');"));
        assert!(block.contains("$table->timestamps();"));
        assert!(block.ends_with("});"));
    }

    #[test]
    fn add_block_has_no_structural_columns() {
        let block = add_to_table("posts", &[field("slug", "string")]);
        assert!(block.starts_with("Schema::table('posts', function(Blueprint $table)"));
        assert!(block.contains("$table->string('slug');"));
        assert!(!block.contains("increments"));
        assert!(!block.contains("timestamps"));
    }

    #[test]
    fn drop_helpers_render_the_down_side() {
        assert_eq!(drop_table("posts"), "Schema::drop('posts');");

        let block = drop_columns("posts", &[field("slug", "string"), field("", "timestamps")]);
        assert!(block.contains("$table->dropColumn('slug');"));
        assert!(!block.contains("dropColumn('')"));
    }
}
