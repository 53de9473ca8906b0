use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnvilError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Template error: {0}")]
    Template(String),

    #[error("The file {} already exists", .0.display())]
    FileAlreadyExists(PathBuf),

    #[error(
        "Invalid relationship '{kind}'. Please define your relationship as one of {}.",
        kind_list(.accepted)
    )]
    InvalidRelationshipKind {
        kind: String,
        accepted: &'static [&'static str],
    },

    #[error("Invalid relationship definition '{kind}' on '{field}'. Please {hint}.")]
    InvalidRelationshipArity {
        kind: String,
        field: String,
        hint: &'static str,
    },

    #[error("Invalid relationship definition '{kind}'. Please remove spaces from the argument list.")]
    MalformedRelationshipType { kind: String },
}

fn kind_list(kinds: &[&str]) -> String {
    let quoted: Vec<String> = kinds.iter().map(|k| format!("\"{}\"", k)).collect();
    match quoted.split_last() {
        Some((last, rest)) if !rest.is_empty() => format!("{}, or {}", rest.join(", "), last),
        _ => quoted.join(", "),
    }
}
