//! Configuration management
//!
//! Configuration is loaded from multiple sources with clear precedence:
//!
//! 1. Command-line flags (highest priority, applied by the CLI)
//! 2. Environment variables (`SCAFFOLD_` prefix)
//! 3. `scaffold.toml`, searched upward from the working directory (or the
//!    file passed with `--config`)
//! 4. Hardcoded defaults (fallback)
//!
//! # Example Configuration
//!
//! ```toml
//! # scaffold.toml
//! base_dir = "backend/src/api"
//! script_extension = "ts"
//! manifest = "entities.json"
//! ```
//!
//! Relative `base_dir` and `manifest` values read from a configuration file
//! are resolved against that file's directory, so the tool behaves the same
//! when run from any subdirectory of the project. Values from the
//! environment or the defaults stay relative to the working directory.

use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::value::magic::RelativePathBuf;
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::error::ScaffoldResult;

/// Default configuration file name
pub const CONFIG_FILE: &str = "scaffold.toml";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "SCAFFOLD_";

/// Scaffold generator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaffoldConfig {
    /// Directory under which entity scaffolds are written
    pub base_dir: PathBuf,

    /// Extension of generated route and controller files
    pub script_extension: String,

    /// Entity manifest; the built-in shop catalog is used when unset
    pub manifest: Option<PathBuf>,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("src/api"),
            script_extension: "js".to_string(),
            manifest: None,
        }
    }
}

/// Paths as extracted from the layered sources, tagged with the file that
/// declared them
#[derive(Debug, Deserialize)]
struct LayeredConfig {
    base_dir: RelativePathBuf,
    script_extension: String,
    manifest: Option<RelativePathBuf>,
}

impl From<LayeredConfig> for ScaffoldConfig {
    fn from(layered: LayeredConfig) -> Self {
        Self {
            base_dir: layered.base_dir.relative(),
            script_extension: layered.script_extension,
            manifest: layered.manifest.map(|path| path.relative()),
        }
    }
}

impl ScaffoldConfig {
    /// Layered configuration sources with the default file
    #[must_use]
    pub fn figment() -> Figment {
        Self::figment_from(Path::new(CONFIG_FILE))
    }

    /// Layered configuration sources reading `path` as the TOML layer
    ///
    /// A missing file is skipped.
    #[must_use]
    pub fn figment_from(path: &Path) -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    /// Load configuration using the default file
    ///
    /// # Errors
    ///
    /// Returns an error if a source holds a value of the wrong type.
    pub fn load() -> ScaffoldResult<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Load configuration using a specific file
    ///
    /// # Errors
    ///
    /// Returns an error if a source holds a value of the wrong type.
    pub fn load_from(path: &Path) -> ScaffoldResult<Self> {
        Self::extract(&Self::figment_from(path))
    }

    /// Extract configuration from `figment`, resolving file-declared paths
    /// against the declaring file's directory
    ///
    /// # Errors
    ///
    /// Returns an error if a source holds a value of the wrong type.
    pub fn extract(figment: &Figment) -> ScaffoldResult<Self> {
        let config: Self = figment.extract::<LayeredConfig>().map_err(Box::new)?.into();
        tracing::debug!(?config, "loaded configuration");
        Ok(config)
    }
}
