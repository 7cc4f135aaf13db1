//! cms-scaffold library
//!
//! Generates schema, route table and controller stubs for the entities of a
//! content-management backend.
//!
//! ```
//! use cms_scaffold::scaffold::{Catalog, MemoryWriter, ScaffoldGenerator};
//!
//! # fn main() -> Result<(), cms_scaffold::ScaffoldError> {
//! let generator = ScaffoldGenerator::new("src/api", "js")?;
//! let mut writer = MemoryWriter::new();
//! for entity in &Catalog::shop() {
//!     generator.emit_full_entity(entity, &mut writer)?;
//! }
//! assert_eq!(writer.len(), 12);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod observability;
pub mod scaffold;
pub mod templates;

pub use config::ScaffoldConfig;
pub use error::{ScaffoldError, ScaffoldResult};
pub use scaffold::{ArtifactKind, Catalog, EntitySpec, GeneratedFile, ScaffoldGenerator};
