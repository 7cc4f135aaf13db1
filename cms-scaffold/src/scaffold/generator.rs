//! Scaffold generator
//!
//! Renders the three artifacts of an entity scaffold and hands them to an
//! [`ArtifactWriter`]:
//! - Schema (`<base>/<name>/content-types/<name>/schema.json`)
//! - Route table (`<base>/<name>/routes/<name>.<ext>`)
//! - Controller (`<base>/<name>/controllers/<name>.<ext>`)
//!
//! Rendering is pure. Writing happens one artifact at a time in that order
//! and stops at the first failure; files already written stay in place.

use std::fmt;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Serialize;

use super::entity::{Attribute, EntitySpec};
use super::helpers::TemplateHelpers;
use super::writer::ArtifactWriter;
use crate::config::ScaffoldConfig;
use crate::error::ScaffoldResult;
use crate::templates::{TemplateRegistry, CONTROLLER, ROUTES};

/// The three artifacts of an entity scaffold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum ArtifactKind {
    /// Content-type schema document
    Schema,
    /// Route table
    Routes,
    /// Controller stubs
    Controller,
}

impl ArtifactKind {
    /// All artifacts in emission order
    pub const ALL: [Self; 3] = [Self::Schema, Self::Routes, Self::Controller];
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Schema => "schema",
            Self::Routes => "routes",
            Self::Controller => "controller",
        })
    }
}

/// Represents a generated file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Which artifact this is
    pub kind: ArtifactKind,
    /// Destination path (under the base directory)
    pub path: PathBuf,
    /// File content
    pub content: String,
    /// File description for user feedback
    pub description: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SchemaDocument<'a> {
    kind: &'static str,
    collection_name: String,
    info: SchemaInfo<'a>,
    options: SchemaOptions,
    plugin_options: serde_json::Map<String, serde_json::Value>,
    attributes: IndexMap<String, Attribute>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SchemaInfo<'a> {
    singular_name: &'a str,
    plural_name: String,
    display_name: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SchemaOptions {
    draft_and_publish: bool,
}

/// Entity scaffold generator
#[derive(Debug)]
pub struct ScaffoldGenerator {
    /// Root under which every entity directory is created
    base_dir: PathBuf,
    /// Extension of the routes and controller files
    script_extension: String,
    templates: TemplateRegistry,
}

impl ScaffoldGenerator {
    /// Create a generator writing under `base_dir`
    ///
    /// # Arguments
    ///
    /// * `base_dir` - Root directory (e.g. `src/api`)
    /// * `script_extension` - Extension for routes and controllers (e.g. `js`)
    ///
    /// # Errors
    ///
    /// Returns an error if template registry initialization fails.
    pub fn new(
        base_dir: impl Into<PathBuf>,
        script_extension: impl Into<String>,
    ) -> ScaffoldResult<Self> {
        Ok(Self {
            base_dir: base_dir.into(),
            script_extension: script_extension.into(),
            templates: TemplateRegistry::new()?,
        })
    }

    /// Create a generator from loaded configuration
    ///
    /// # Errors
    ///
    /// Returns an error if template registry initialization fails.
    pub fn from_config(config: &ScaffoldConfig) -> ScaffoldResult<Self> {
        Self::new(config.base_dir.clone(), config.script_extension.clone())
    }

    /// Root directory of generated scaffolds
    #[must_use]
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Destination of one artifact
    #[must_use]
    pub fn path_for(&self, kind: ArtifactKind, spec: &EntitySpec) -> PathBuf {
        let name = spec.name.as_str();
        let entity_dir = self.base_dir.join(name);

        match kind {
            ArtifactKind::Schema => entity_dir
                .join("content-types")
                .join(name)
                .join("schema.json"),
            ArtifactKind::Routes => entity_dir
                .join("routes")
                .join(format!("{name}.{}", self.script_extension)),
            ArtifactKind::Controller => entity_dir
                .join("controllers")
                .join(format!("{name}.{}", self.script_extension)),
        }
    }

    /// Render one artifact without writing it
    ///
    /// # Errors
    ///
    /// Returns an error if the entity name is invalid or rendering fails.
    pub fn render(&self, kind: ArtifactKind, spec: &EntitySpec) -> ScaffoldResult<GeneratedFile> {
        match kind {
            ArtifactKind::Schema => self.render_schema(spec),
            ArtifactKind::Routes => self.render_routes(spec),
            ArtifactKind::Controller => self.render_controller(spec),
        }
    }

    /// Render the content-type schema
    ///
    /// # Errors
    ///
    /// Returns an error if the entity name is invalid or serialization fails.
    pub fn render_schema(&self, spec: &EntitySpec) -> ScaffoldResult<GeneratedFile> {
        spec.validate()?;

        let document = SchemaDocument {
            kind: "collectionType",
            collection_name: spec.plural(),
            info: SchemaInfo {
                singular_name: &spec.name,
                plural_name: spec.plural(),
                display_name: &spec.name,
            },
            options: SchemaOptions {
                draft_and_publish: true,
            },
            plugin_options: serde_json::Map::new(),
            attributes: spec.attributes(),
        };
        let content = serde_json::to_string_pretty(&document)?;

        tracing::debug!(entity = %spec.name, attributes = document.attributes.len(), "rendered schema");

        Ok(GeneratedFile {
            kind: ArtifactKind::Schema,
            path: self.path_for(ArtifactKind::Schema, spec),
            content,
            description: format!("Content-type schema for {}", spec.name),
        })
    }

    /// Render the route table
    ///
    /// Every route is public (`auth: false`).
    ///
    /// # Errors
    ///
    /// Returns an error if the entity name is invalid or rendering fails.
    pub fn render_routes(&self, spec: &EntitySpec) -> ScaffoldResult<GeneratedFile> {
        spec.validate()?;

        let content = self.templates.render(ROUTES, &Self::template_context(spec))?;

        tracing::debug!(entity = %spec.name, "rendered routes");

        Ok(GeneratedFile {
            kind: ArtifactKind::Routes,
            path: self.path_for(ArtifactKind::Routes, spec),
            content,
            description: format!("Public CRUD routes for {}", spec.name),
        })
    }

    /// Render the controller stubs
    ///
    /// # Errors
    ///
    /// Returns an error if the entity name is invalid or rendering fails.
    pub fn render_controller(&self, spec: &EntitySpec) -> ScaffoldResult<GeneratedFile> {
        spec.validate()?;

        let content = self
            .templates
            .render(CONTROLLER, &Self::template_context(spec))?;

        tracing::debug!(entity = %spec.name, "rendered controller");

        Ok(GeneratedFile {
            kind: ArtifactKind::Controller,
            path: self.path_for(ArtifactKind::Controller, spec),
            content,
            description: format!("Controller for {}", spec.service_uid()),
        })
    }

    /// Render all three artifacts in emission order
    ///
    /// # Errors
    ///
    /// Returns an error if any artifact fails to render.
    pub fn generate(&self, spec: &EntitySpec) -> ScaffoldResult<Vec<GeneratedFile>> {
        ArtifactKind::ALL
            .iter()
            .map(|&kind| self.render(kind, spec))
            .collect()
    }

    /// Render and write one artifact, returning what was written
    ///
    /// # Errors
    ///
    /// Returns an error if rendering or writing fails.
    pub fn emit(
        &self,
        kind: ArtifactKind,
        spec: &EntitySpec,
        writer: &mut dyn ArtifactWriter,
    ) -> ScaffoldResult<GeneratedFile> {
        let file = self.render(kind, spec)?;
        writer.write(&file.path, &file.content)?;

        tracing::info!(entity = %spec.name, artifact = %kind, path = %file.path.display(), "wrote artifact");

        Ok(file)
    }

    /// Write the schema document
    ///
    /// # Errors
    ///
    /// Returns an error if rendering or writing fails.
    pub fn emit_schema(
        &self,
        spec: &EntitySpec,
        writer: &mut dyn ArtifactWriter,
    ) -> ScaffoldResult<GeneratedFile> {
        self.emit(ArtifactKind::Schema, spec, writer)
    }

    /// Write the route table
    ///
    /// # Errors
    ///
    /// Returns an error if rendering or writing fails.
    pub fn emit_routes(
        &self,
        spec: &EntitySpec,
        writer: &mut dyn ArtifactWriter,
    ) -> ScaffoldResult<GeneratedFile> {
        self.emit(ArtifactKind::Routes, spec, writer)
    }

    /// Write the controller stubs
    ///
    /// # Errors
    ///
    /// Returns an error if rendering or writing fails.
    pub fn emit_controller(
        &self,
        spec: &EntitySpec,
        writer: &mut dyn ArtifactWriter,
    ) -> ScaffoldResult<GeneratedFile> {
        self.emit(ArtifactKind::Controller, spec, writer)
    }

    /// Write schema, routes and controller in that order
    ///
    /// Not atomic: if a later write fails, earlier files stay written.
    ///
    /// # Errors
    ///
    /// Returns the first rendering or writing error.
    pub fn emit_full_entity(
        &self,
        spec: &EntitySpec,
        writer: &mut dyn ArtifactWriter,
    ) -> ScaffoldResult<Vec<GeneratedFile>> {
        ArtifactKind::ALL
            .iter()
            .map(|&kind| self.emit(kind, spec, writer))
            .collect()
    }

    fn template_context(spec: &EntitySpec) -> serde_json::Value {
        serde_json::json!({
            "name": spec.name,
            "plural": spec.plural(),
            "route_path": TemplateHelpers::to_route_path(&spec.name),
            "service_uid": spec.service_uid(),
        })
    }
}
