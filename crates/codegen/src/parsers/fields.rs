use std::sync::LazyLock;

use anvil_core::FieldSpec;
use regex::Regex;

// Declarations are separated by a comma followed by whitespace; a bare comma
// stays inside the segment so argument lists like `string(10,2)` survive.
static SEGMENT_SPLIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s?,\s").unwrap());
static TOKEN_SPLIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s?:\s?").unwrap());
static TYPE_WITH_ARGS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(.+?)\(([^)]+)\)").unwrap());
static TYPE_EMPTY_ARGS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(.+?)\(\)").unwrap());

/// Parse a declaration string like `address:hasOne, tags:morphedByMany(Tag,taggable)`
/// into ordered field specs. Total over any input: malformed declarations are
/// carried through as-is and rejected later, at synthesis time.
pub fn parse(raw: &str) -> Vec<FieldSpec> {
    if raw.is_empty() {
        return Vec::new();
    }

    SEGMENT_SPLIT.split(raw).map(parse_declaration).collect()
}

fn parse_declaration(declaration: &str) -> FieldSpec {
    let mut tokens = TOKEN_SPLIT.split(declaration);

    let field = tokens.next().unwrap_or("").trim().to_string();
    let mut field_type = tokens.next().unwrap_or("").trim().to_string();
    let decorators: Vec<String> = tokens.map(str::to_string).collect();

    // name:string(10,2) => type `string`, args `10,2`; name:morphTo() => type
    // `morphTo`, no args. Anything the patterns cannot separate keeps its
    // paren and is rejected by the synthesizer.
    let mut args = None;
    if let Some(caps) = TYPE_WITH_ARGS.captures(&field_type) {
        args = Some(caps[2].to_string());
        field_type = caps[1].to_string();
    } else if let Some(caps) = TYPE_EMPTY_ARGS.captures(&field_type) {
        field_type = caps[1].to_string();
    }

    FieldSpec {
        field,
        field_type,
        args,
        decorators,
    }
}
