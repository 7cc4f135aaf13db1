//! CLI command implementations

use std::path::PathBuf;

use anyhow::{Context, Result};
use cms_scaffold::{Catalog, ScaffoldConfig, ScaffoldGenerator};

pub mod generate;
pub mod list;
pub mod render;

pub use generate::GenerateCommand;
pub use list::ListCommand;
pub use render::RenderCommand;

/// Values given on the command line that override loaded configuration
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub config_file: Option<PathBuf>,
    pub base_dir: Option<PathBuf>,
    pub script_extension: Option<String>,
    pub manifest: Option<PathBuf>,
}

impl ConfigOverrides {
    /// Load configuration from file and environment, then apply the flags
    pub fn resolve(self) -> Result<ScaffoldConfig> {
        let config = match &self.config_file {
            Some(path) => {
                if !path.is_file() {
                    anyhow::bail!("Configuration file not found: {}", path.display());
                }
                ScaffoldConfig::load_from(path).with_context(|| {
                    format!("Failed to load configuration from {}", path.display())
                })?
            }
            None => ScaffoldConfig::load().context("Failed to load configuration")?,
        };

        Ok(self.apply(config))
    }

    fn apply(self, mut config: ScaffoldConfig) -> ScaffoldConfig {
        if let Some(base_dir) = self.base_dir {
            config.base_dir = base_dir;
        }
        if let Some(ext) = self.script_extension {
            config.script_extension = ext;
        }
        if self.manifest.is_some() {
            config.manifest = self.manifest;
        }
        config
    }
}

/// Generator and entity catalog shared by all commands
pub struct ScaffoldContext {
    pub generator: ScaffoldGenerator,
    pub catalog: Catalog,
}

impl ScaffoldContext {
    pub fn new(config: &ScaffoldConfig) -> Result<Self> {
        let generator = ScaffoldGenerator::from_config(config)
            .context("Failed to create scaffold generator")?;

        let catalog = match &config.manifest {
            Some(path) => Catalog::from_manifest(path)
                .with_context(|| format!("Failed to load entity manifest {}", path.display()))?,
            None => Catalog::shop(),
        };

        Ok(Self { generator, catalog })
    }
}
