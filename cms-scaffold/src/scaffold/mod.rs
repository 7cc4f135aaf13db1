//! Entity scaffold generation
//!
//! Turns entity descriptions into the schema, route table and controller
//! files a content-management backend loads at startup.

pub mod catalog;
pub mod entity;
pub mod generator;
pub mod helpers;
pub mod writer;

pub use catalog::Catalog;
pub use entity::{
    Attribute, Cardinality, EntitySpec, FieldDescriptor, FieldType, RelationDescriptor,
};
pub use generator::{ArtifactKind, GeneratedFile, ScaffoldGenerator};
pub use helpers::TemplateHelpers;
pub use writer::{ArtifactWriter, FsWriter, MemoryWriter};
