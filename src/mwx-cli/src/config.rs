//! Configuration management for mwx CLI
//!
//! ```toml
//! compile_database = false
//! placeholders = "ModernWarfare/placeholders.json"
//!
//! [import]
//! xassets = "import/xassets"
//! images = "import/images"
//!
//! [export]
//! xassets = "export/xassets"
//! database = "export/database"
//! ```

use anyhow::{bail, Context, Result};
use mwx::Paths;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory
pub const LOCAL_CONFIG: &str = "mwx.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Run the database export after every compile
    pub compile_database: bool,
    /// Placeholder rules for localization filtering
    pub placeholders: PathBuf,
    pub import: ImportConfig,
    pub export: ExportConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    pub xassets: PathBuf,
    pub images: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub xassets: PathBuf,
    pub database: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            compile_database: false,
            placeholders: PathBuf::from("ModernWarfare/placeholders.json"),
            import: ImportConfig::default(),
            export: ExportConfig::default(),
        }
    }
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            xassets: PathBuf::from("import/xassets"),
            images: PathBuf::from("import/images"),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            xassets: PathBuf::from("export/xassets"),
            database: PathBuf::from("export/database"),
        }
    }
}

impl Config {
    /// Get the path to the user config file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("mwx");

        Ok(config_dir.join("config.toml"))
    }

    /// Load configuration.
    ///
    /// An explicit path must exist. Otherwise `mwx.toml` in the working
    /// directory is used, then the user config file, then the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if !path.exists() {
                bail!("Config file not found: {}", path.display());
            }
            return Self::from_file(path);
        }

        let local = PathBuf::from(LOCAL_CONFIG);
        if local.exists() {
            return Self::from_file(&local);
        }

        let user = Self::config_path()?;
        if user.exists() {
            return Self::from_file(&user);
        }

        tracing::debug!("No config file found, using defaults");
        Ok(Config::default())
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Import and export roots for the library
    pub fn paths(&self) -> Paths {
        Paths {
            import_xassets: self.import.xassets.clone(),
            import_images: self.import.images.clone(),
            export_xassets: self.export.xassets.clone(),
            export_database: self.export.database.clone(),
        }
    }
}
