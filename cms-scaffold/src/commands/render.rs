//! Single artifact rendering command

use anyhow::{Context, Result};
use cms_scaffold::{ArtifactKind, ScaffoldError};

use super::ScaffoldContext;

/// Print one rendered artifact to stdout without writing it
pub struct RenderCommand {
    entity: String,
    artifact: ArtifactKind,
}

impl RenderCommand {
    pub const fn new(entity: String, artifact: ArtifactKind) -> Self {
        Self { entity, artifact }
    }

    pub fn execute(&self, context: &ScaffoldContext) -> Result<()> {
        print!("{}", self.render(context)?);
        Ok(())
    }

    fn render(&self, context: &ScaffoldContext) -> Result<String> {
        let entity = context
            .catalog
            .get(&self.entity)
            .ok_or_else(|| ScaffoldError::UnknownEntity(self.entity.clone()))?;

        let file = context
            .generator
            .render(self.artifact, entity)
            .with_context(|| format!("Failed to render {} for {}", self.artifact, self.entity))?;

        Ok(file.content)
    }
}
