use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::AnvilError;

pub const CONFIG_FILE: &str = "anvil.toml";

/// Target and template paths for the generators. Loaded from `anvil.toml`
/// in the working directory when present; command-line flags win over it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    #[serde(default = "default_model_target_path")]
    pub model_target_path: PathBuf,
    #[serde(default = "default_migration_target_path")]
    pub migration_target_path: PathBuf,
    #[serde(default)]
    pub model_template_path: Option<PathBuf>,
    #[serde(default)]
    pub migration_template_path: Option<PathBuf>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            model_target_path: default_model_target_path(),
            migration_target_path: default_migration_target_path(),
            model_template_path: None,
            migration_template_path: None,
        }
    }
}

impl GeneratorConfig {
    pub fn load(root: &Path) -> Result<Self, AnvilError> {
        let path = root.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(&path)?;
        toml::from_str(&raw)
            .map_err(|e| AnvilError::Config(format!("failed to parse {}: {}", path.display(), e)))
    }
}

fn default_model_target_path() -> PathBuf {
    PathBuf::from("app/models")
}

fn default_migration_target_path() -> PathBuf {
    PathBuf::from("app/database/migrations")
}
