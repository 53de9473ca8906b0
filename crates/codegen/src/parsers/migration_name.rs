/// What a migration does to its table, inferred from the migration name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaAction {
    Create,
    Add,
    Remove,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationName {
    pub action: SchemaAction,
    pub table: String,
}

/// Dissect a conventional migration name:
/// `create_posts_table` => create `posts`,
/// `add_user_id_to_posts_table` => add on `posts`,
/// `remove_author_from_posts_table` => remove on `posts`.
/// Unrecognized names fall back to a create over the full residue.
pub fn parse_migration_name(name: &str) -> MigrationName {
    let mut pieces: Vec<&str> = name.split('_').filter(|p| !p.is_empty()).collect();
    if pieces.last().copied() == Some("table") {
        pieces.pop();
    }
    if pieces.is_empty() {
        return MigrationName {
            action: SchemaAction::Create,
            table: String::new(),
        };
    }

    let action = match pieces.first().copied() {
        Some("create") | Some("make") => Some(SchemaAction::Create),
        Some("add") | Some("append") | Some("insert") => Some(SchemaAction::Add),
        Some("remove") | Some("delete") | Some("drop") => Some(SchemaAction::Remove),
        _ => None,
    };
    let rest: &[&str] = if action.is_some() {
        &pieces[1..]
    } else {
        &pieces
    };
    let action = action.unwrap_or(SchemaAction::Create);

    let table = match action {
        SchemaAction::Create => rest.join("_"),
        SchemaAction::Add => after_connector(rest, "to"),
        SchemaAction::Remove => after_connector(rest, "from"),
    };

    MigrationName { action, table }
}

fn after_connector(pieces: &[&str], connector: &str) -> String {
    match pieces.iter().rposition(|p| *p == connector) {
        Some(at) => pieces[at + 1..].join("_"),
        None => pieces.join("_"),
    }
}
