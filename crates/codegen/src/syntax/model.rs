use anvil_core::{AnvilError, FieldSpec};

use super::decorator_chain;

pub const RELATIONSHIP_KINDS: &[&str] = &[
    "hasOne",
    "belongsTo",
    "hasMany",
    "belongsToMany",
    "hasManyThrough",
    "morphTo",
    "morphMany",
    "morphedToMany",
    "morphedByMany",
];

// Kinds that take the related model (and optional extras) as arguments.
const SINGLE_ARG_KINDS: &[&str] = &[
    "hasOne",
    "belongsTo",
    "hasMany",
    "belongsToMany",
    "morphMany",
    "morphedToMany",
    "morphedByMany",
];

/// Reject anything outside the closed set of relationship kinds. The
/// degenerate `morphTo()` spelling is tolerated as an alias of `morphTo`.
pub fn guard_relationship(kind: &str) -> Result<(), AnvilError> {
    if RELATIONSHIP_KINDS.contains(&kind) || kind == "morphTo()" {
        return Ok(());
    }

    Err(AnvilError::InvalidRelationshipKind {
        kind: kind.to_string(),
        accepted: RELATIONSHIP_KINDS,
    })
}

/// Render the `protected $table = '…';` property, or nothing when no table
/// name was given.
pub fn table_property(table: Option<&str>) -> String {
    match table {
        Some(name) if !name.is_empty() => format!("protected $table = '{}';", name.to_lowercase()),
        _ => String::new(),
    }
}

/// Build the accessor-method block for the parsed relationships, one method
/// per declaration, in declaration order. The first invalid declaration
/// aborts the whole block.
pub fn relationships(fields: &[FieldSpec]) -> Result<String, AnvilError> {
    let mut output = String::new();

    for rel in fields {
        // A paren surviving in the type token means the argument list had
        // embedded whitespace and got split apart upstream.
        if let Some((name, _)) = rel.field_type.split_once('(') {
            return Err(AnvilError::MalformedRelationshipType {
                kind: name.to_string(),
            });
        }

        guard_relationship(&rel.field_type)?;

        let kind = rel.field_type.as_str();
        let call = if SINGLE_ARG_KINDS.contains(&kind) {
            let args = require_args(rel, 1, "supply a relationship name on the referenced model")?;
            format!("$this->{}({})", kind, args)
        } else if kind == "morphTo" || kind == "morphTo()" {
            // Takes no arguments; any supplied are ignored.
            "$this->morphTo()".to_string()
        } else if kind == "hasManyThrough" {
            let args = require_args(
                rel,
                2,
                "supply both an intermediate and target model for this relationship",
            )?;
            format!("$this->hasManyThrough({})", args)
        } else {
            // Unreachable for the guarded kind set, but keeps the synthesizer
            // total over it.
            let args = require_args(rel, 1, "supply the target model for this relationship")?;
            format!("$this->{}({})", kind, args)
        };

        output.push_str(&format!(
            "public function {}()\n\t{{\n\t\treturn {}",
            rel.field, call
        ));
        output.push_str(&decorator_chain(&rel.decorators));
        output.push_str(";\n\t}\n\n\t");
    }

    Ok(output)
}

fn require_args<'a>(
    rel: &'a FieldSpec,
    min: usize,
    hint: &'static str,
) -> Result<&'a str, AnvilError> {
    let arity_error = || AnvilError::InvalidRelationshipArity {
        kind: rel.field_type.clone(),
        field: rel.field.clone(),
        hint,
    };

    let args = rel.args.as_deref().ok_or_else(arity_error)?;
    let supplied = args.split(',').filter(|a| !a.trim().is_empty()).count();
    if supplied < min {
        return Err(arity_error());
    }

    Ok(args)
}
