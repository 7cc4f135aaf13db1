//! Catalog listing command

use anyhow::Result;
use cms_scaffold::scaffold::{ArtifactKind, Attribute, EntitySpec};
use console::style;

use super::ScaffoldContext;

/// Print every entity with its derived names and artifact paths
pub struct ListCommand;

impl ListCommand {
    pub fn execute(context: &ScaffoldContext) -> Result<()> {
        for entity in &context.catalog {
            println!(
                "\n{} {}",
                style(&entity.name).green().bold(),
                style(format!("({})", summary(entity))).dim()
            );
            println!("  plural:  {}", entity.plural());
            println!("  service: {}", entity.service_uid());

            for kind in ArtifactKind::ALL {
                println!(
                    "  {:<10} {}",
                    format!("{kind}:"),
                    style(context.generator.path_for(kind, entity).display()).dim()
                );
            }
        }

        Ok(())
    }
}

fn summary(entity: &EntitySpec) -> String {
    let attributes = entity.attributes();
    let relations = attributes
        .values()
        .filter(|attribute| matches!(attribute, Attribute::Relation(_)))
        .count();

    format!(
        "{} fields, {} relations",
        attributes.len() - relations,
        relations
    )
}
