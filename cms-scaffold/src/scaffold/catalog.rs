//! Ordered sets of entities to scaffold
//!
//! A [`Catalog`] comes either from [`Catalog::shop`], the built-in
//! storefront entities, or from a manifest file:
//!
//! ```json
//! {
//!   "entities": [
//!     {
//!       "name": "client",
//!       "fields": {
//!         "tg_id": { "type": "string", "required": true },
//!         "email": { "type": "email" }
//!       }
//!     }
//!   ]
//! }
//! ```
//!
//! TOML manifests use the same shape (`[[entities]]` tables). Entities are
//! processed in file order.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::entity::{Cardinality, EntitySpec, FieldDescriptor, FieldType, RelationDescriptor};
use crate::error::{ScaffoldError, ScaffoldResult};

/// Ordered, name-unique list of entities
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Catalog {
    entities: Vec<EntitySpec>,
}

impl Catalog {
    /// Build a catalog, rejecting invalid or duplicate names
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::InvalidEntityName`] or
    /// [`ScaffoldError::DuplicateEntity`].
    pub fn new(entities: Vec<EntitySpec>) -> ScaffoldResult<Self> {
        let catalog = Self { entities };
        catalog.validate()?;
        Ok(catalog)
    }

    /// The storefront entities: product, client, cart and cart-item
    #[must_use]
    pub fn shop() -> Self {
        let product = EntitySpec::new("product")
            .field("title", FieldDescriptor::new(FieldType::String).required())
            .field("price", FieldDescriptor::new(FieldType::Decimal).required())
            .field("description", FieldDescriptor::new(FieldType::Text))
            .field(
                "picture",
                FieldDescriptor::new(FieldType::Media)
                    .multiple(false)
                    .required(),
            );

        let client = EntitySpec::new("client")
            .field("tg_id", FieldDescriptor::new(FieldType::String).required())
            .field("email", FieldDescriptor::new(FieldType::Email));

        let cart = EntitySpec::new("cart")
            .field("tg_id", FieldDescriptor::new(FieldType::String).required())
            .relation(
                "client",
                RelationDescriptor::to_entity(Cardinality::OneToOne, "client"),
            )
            .relation(
                "cart_items",
                RelationDescriptor::to_entity(Cardinality::OneToMany, "cart-item")
                    .mapped_by("cart"),
            );

        let cart_item = EntitySpec::new("cart-item")
            .field(
                "quantity",
                FieldDescriptor::new(FieldType::Integer).required(),
            )
            .relation(
                "cart",
                RelationDescriptor::to_entity(Cardinality::ManyToOne, "cart"),
            )
            .relation(
                "product",
                RelationDescriptor::to_entity(Cardinality::ManyToOne, "product"),
            );

        Self {
            entities: vec![product, client, cart, cart_item],
        }
    }

    /// Load a catalog from a `.json` or `.toml` manifest
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Manifest`] if the file cannot be read or
    /// parsed or has an unsupported extension, and the [`Catalog::new`]
    /// errors for invalid or duplicate names.
    pub fn from_manifest(path: &Path) -> ScaffoldResult<Self> {
        let manifest_error = |message: String| ScaffoldError::Manifest {
            path: path.to_path_buf(),
            message,
        };

        let text = fs::read_to_string(path).map_err(|e| manifest_error(e.to_string()))?;

        let catalog: Self = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&text).map_err(|e| manifest_error(e.to_string()))?,
            Some("toml") => toml::from_str(&text).map_err(|e| manifest_error(e.to_string()))?,
            other => {
                return Err(manifest_error(format!(
                    "unsupported manifest format {other:?}, expected .json or .toml"
                )));
            }
        };

        catalog.validate()?;
        tracing::debug!(path = %path.display(), entities = catalog.len(), "loaded manifest");
        Ok(catalog)
    }

    /// Keep only the named entities, in catalog order
    ///
    /// An empty `names` slice keeps everything.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::UnknownEntity`] for a name not in the catalog.
    pub fn select(self, names: &[String]) -> ScaffoldResult<Self> {
        if names.is_empty() {
            return Ok(self);
        }

        if let Some(missing) = names.iter().find(|name| self.get(name).is_none()) {
            return Err(ScaffoldError::UnknownEntity(missing.clone()));
        }

        let entities = self
            .entities
            .into_iter()
            .filter(|entity| names.contains(&entity.name))
            .collect();

        Ok(Self { entities })
    }

    /// Look up an entity by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&EntitySpec> {
        self.entities.iter().find(|entity| entity.name == name)
    }

    /// Entities in processing order
    pub fn iter(&self) -> impl Iterator<Item = &EntitySpec> {
        self.entities.iter()
    }

    /// Number of entities
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    fn validate(&self) -> ScaffoldResult<()> {
        let mut seen = HashSet::new();
        for entity in &self.entities {
            entity.validate()?;
            if !seen.insert(entity.name.as_str()) {
                return Err(ScaffoldError::DuplicateEntity(entity.name.clone()));
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a EntitySpec;
    type IntoIter = std::slice::Iter<'a, EntitySpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.entities.iter()
    }
}
