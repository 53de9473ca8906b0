pub mod config;
pub mod error;
pub mod field;

pub use config::GeneratorConfig;
pub use error::AnvilError;
pub use field::FieldSpec;
