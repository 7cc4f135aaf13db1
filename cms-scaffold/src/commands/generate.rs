//! Scaffold generation command

use anyhow::{Context, Result};
use cms_scaffold::scaffold::{ArtifactKind, ArtifactWriter, Catalog, FsWriter, MemoryWriter};
use console::{style, Emoji};

use super::ScaffoldContext;

static SUCCESS: Emoji = Emoji("✓", "+");
static PLANNED: Emoji = Emoji("→", "-");

/// Write schema, routes and controller for every selected entity
pub struct GenerateCommand {
    only: Vec<String>,
    dry_run: bool,
}

impl GenerateCommand {
    pub const fn new(only: Vec<String>, dry_run: bool) -> Self {
        Self { only, dry_run }
    }

    /// Execute the command
    ///
    /// Stops at the first failed write; entities after it are not touched.
    pub fn execute(&self, context: &ScaffoldContext) -> Result<()> {
        let catalog = context.catalog.clone().select(&self.only)?;

        println!(
            "\n{} {} {} {}",
            style(if self.dry_run { "Planning" } else { "Scaffolding" }).cyan().bold(),
            style(catalog.len()).green().bold(),
            style("entities into").cyan().bold(),
            style(context.generator.base_dir().display()).green().bold()
        );

        let written = if self.dry_run {
            self.emit_all(context, &catalog, &mut MemoryWriter::new())?
        } else {
            self.emit_all(context, &catalog, &mut FsWriter)?
        };

        println!(
            "\n{} {} files {}",
            style("✨").green().bold(),
            written,
            if self.dry_run { "planned, nothing written" } else { "written" }
        );

        if written > 0 {
            println!(
                "\n{} generated routes are public ({}); add policies before deploying",
                style("Note:").yellow().bold(),
                style("auth: false").yellow()
            );
        }

        Ok(())
    }

    fn emit_all(
        &self,
        context: &ScaffoldContext,
        catalog: &Catalog,
        writer: &mut dyn ArtifactWriter,
    ) -> Result<usize> {
        let marker = if self.dry_run { &PLANNED } else { &SUCCESS };
        let mut written = 0;

        for entity in catalog {
            println!("\n{}", style(&entity.name).bold());

            for kind in ArtifactKind::ALL {
                let file = context
                    .generator
                    .emit(kind, entity, writer)
                    .with_context(|| format!("Failed to generate {kind} for {}", entity.name))?;

                println!(
                    "  {} {} ({})",
                    style(marker).green(),
                    style(file.path.display()).dim(),
                    style(&file.description).dim()
                );
                written += 1;
            }
        }

        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cms_scaffold::{ScaffoldConfig, ScaffoldError};
    use std::fs;
    use tempfile::tempdir;

    fn context_in(base_dir: &std::path::Path) -> ScaffoldContext {
        ScaffoldContext::new(&ScaffoldConfig {
            base_dir: base_dir.to_path_buf(),
            ..ScaffoldConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_generate_writes_all_entities() {
        let temp_dir = tempdir().unwrap();
        let base = temp_dir.path().join("src/api");
        let context = context_in(&base);

        GenerateCommand::new(vec![], false).execute(&context).unwrap();

        for name in ["product", "client", "cart", "cart-item"] {
            assert!(base.join(format!("{name}/content-types/{name}/schema.json")).is_file());
            assert!(base.join(format!("{name}/routes/{name}.js")).is_file());
            assert!(base.join(format!("{name}/controllers/{name}.js")).is_file());
        }
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let temp_dir = tempdir().unwrap();
        let base = temp_dir.path().join("src/api");
        let context = context_in(&base);

        GenerateCommand::new(vec![], true).execute(&context).unwrap();

        assert!(!base.exists());
    }

    #[test]
    fn test_only_selected_entities() {
        let temp_dir = tempdir().unwrap();
        let base = temp_dir.path().to_path_buf();
        let context = context_in(&base);

        GenerateCommand::new(vec!["client".to_string()], false)
            .execute(&context)
            .unwrap();

        let dirs: Vec<_> = fs::read_dir(&base)
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(dirs, vec!["client"]);
    }

    #[test]
    fn test_unknown_entity_fails_before_writing() {
        let temp_dir = tempdir().unwrap();
        let base = temp_dir.path().join("src/api");
        let context = context_in(&base);

        let err = GenerateCommand::new(vec!["order".to_string()], false)
            .execute(&context)
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ScaffoldError>(),
            Some(ScaffoldError::UnknownEntity(_))
        ));
        assert!(!base.exists());
    }
}
