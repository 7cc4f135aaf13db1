//! Entity descriptions for scaffold generation
//!
//! An [`EntitySpec`] names one content entity and lists its fields and
//! relations. Descriptors serialize to exactly the attribute objects the
//! content runtime expects, so a field declared as
//!
//! ```text
//! picture: media, multiple = false, required
//! ```
//!
//! lands in `schema.json` as
//!
//! ```json
//! "picture": { "type": "media", "multiple": false, "required": true }
//! ```
//!
//! Flags that were never set are omitted rather than written as `false`.
//! Any other keys a manifest gives a descriptor (`unique`, `default`,
//! `enum`, ...) are carried through unchanged, as are attribute types this
//! crate has no variant for.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::helpers::TemplateHelpers;
use crate::error::{ScaffoldError, ScaffoldResult};

/// Attribute type of a plain (non-relation) field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Short string
    String,
    /// Long text
    Text,
    /// Rich text (markdown)
    RichText,
    /// Email address
    Email,
    /// Password (never returned by the API)
    Password,
    /// Unique identifier slug
    Uid,
    /// 32-bit integer
    Integer,
    /// 64-bit integer
    BigInteger,
    /// Floating point number
    Float,
    /// Decimal number
    Decimal,
    /// Date without time
    Date,
    /// Time of day
    Time,
    /// Date and time
    DateTime,
    /// Timestamp
    Timestamp,
    /// Boolean
    Boolean,
    /// Arbitrary JSON
    Json,
    /// Uploaded media file
    Media,
    /// Any other attribute type, kept as written (e.g. `enumeration`)
    #[serde(untagged)]
    Other(String),
}

/// Descriptor of a plain field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Field type
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Whether several media files may be attached (media only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiple: Option<bool>,
    /// Whether the field must be present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    /// Remaining descriptor keys, in declaration order
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_json::Value>,
}

impl FieldDescriptor {
    /// Create a descriptor with no flags set
    #[must_use]
    pub fn new(field_type: FieldType) -> Self {
        Self {
            field_type,
            multiple: None,
            required: None,
            extra: IndexMap::new(),
        }
    }

    /// Mark the field as required
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = Some(true);
        self
    }

    /// Set the `multiple` flag explicitly
    #[must_use]
    pub fn multiple(mut self, multiple: bool) -> Self {
        self.multiple = Some(multiple);
        self
    }

    /// Add a descriptor key that has no dedicated setter
    ///
    /// ```
    /// # use cms_scaffold::scaffold::{FieldDescriptor, FieldType};
    /// let field = FieldDescriptor::new(FieldType::String).with("unique", true);
    /// assert_eq!(field.extra["unique"], true);
    /// ```
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Whether the field is required (unset means optional)
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.required.unwrap_or(false)
    }
}

/// Relation cardinality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Cardinality {
    /// One to one
    OneToOne,
    /// One to many
    OneToMany,
    /// Many to one
    ManyToOne,
    /// Many to many
    ManyToMany,
}

/// The constant `"relation"` type tag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RelationTag {
    /// `"relation"`
    #[default]
    #[serde(rename = "relation")]
    Relation,
}

/// Descriptor of a relation to another entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationDescriptor {
    /// Always `"relation"`
    #[serde(rename = "type", default)]
    pub tag: RelationTag,
    /// Cardinality of the relation
    pub relation: Cardinality,
    /// Foreign entity identifier (e.g. `api::client.client`)
    pub target: String,
    /// Inverse side attribute on the target
    #[serde(rename = "mappedBy", default, skip_serializing_if = "Option::is_none")]
    pub mapped_by: Option<String>,
    /// Remaining descriptor keys (`inversedBy`, ...), in declaration order
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_json::Value>,
}

impl RelationDescriptor {
    /// Create a relation to a raw target identifier
    pub fn new(relation: Cardinality, target: impl Into<String>) -> Self {
        Self {
            tag: RelationTag::Relation,
            relation,
            target: target.into(),
            mapped_by: None,
            extra: IndexMap::new(),
        }
    }

    /// Create a relation to another scaffolded entity by name
    ///
    /// ```
    /// # use cms_scaffold::scaffold::{Cardinality, RelationDescriptor};
    /// let rel = RelationDescriptor::to_entity(Cardinality::OneToOne, "client");
    /// assert_eq!(rel.target, "api::client.client");
    /// ```
    #[must_use]
    pub fn to_entity(relation: Cardinality, entity: &str) -> Self {
        Self::new(relation, TemplateHelpers::service_uid(entity))
    }

    /// Set the inverse side attribute
    #[must_use]
    pub fn mapped_by(mut self, attribute: impl Into<String>) -> Self {
        self.mapped_by = Some(attribute.into());
        self
    }
}

/// One entry of the emitted `attributes` mapping
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Attribute {
    /// Relation to another entity
    Relation(RelationDescriptor),
    /// Plain field
    Field(FieldDescriptor),
}

/// Static description of one content entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EntitySpec {
    /// Singular, lowercase, hyphenated name
    pub name: String,
    /// Fields in declaration order
    #[serde(default)]
    pub fields: IndexMap<String, FieldDescriptor>,
    /// Relations in declaration order
    #[serde(default)]
    pub relations: IndexMap<String, RelationDescriptor>,
}

impl EntitySpec {
    /// Start an entity with no fields or relations
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: IndexMap::new(),
            relations: IndexMap::new(),
        }
    }

    /// Add a field
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, descriptor: FieldDescriptor) -> Self {
        self.fields.insert(name.into(), descriptor);
        self
    }

    /// Add a relation
    #[must_use]
    pub fn relation(mut self, name: impl Into<String>, descriptor: RelationDescriptor) -> Self {
        self.relations.insert(name.into(), descriptor);
        self
    }

    /// Check the name is non-empty, lowercase and hyphenated
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::InvalidEntityName`] when the name is empty,
    /// starts with a hyphen, or contains anything besides lowercase ASCII
    /// letters, digits and hyphens.
    pub fn validate(&self) -> ScaffoldResult<()> {
        if is_valid_entity_name(&self.name) {
            Ok(())
        } else {
            Err(ScaffoldError::InvalidEntityName(self.name.clone()))
        }
    }

    /// Fields merged with relations
    ///
    /// Relations are applied last, so a relation replaces a field with the
    /// same key while the key keeps the field's position.
    #[must_use]
    pub fn attributes(&self) -> IndexMap<String, Attribute> {
        let mut attributes: IndexMap<String, Attribute> = self
            .fields
            .iter()
            .map(|(name, field)| (name.clone(), Attribute::Field(field.clone())))
            .collect();

        for (name, relation) in &self.relations {
            attributes.insert(name.clone(), Attribute::Relation(relation.clone()));
        }

        attributes
    }

    /// Plural identifier (`name + "s"`)
    #[must_use]
    pub fn plural(&self) -> String {
        TemplateHelpers::pluralize(&self.name)
    }

    /// Entity service identifier (`api::<name>.<name>`)
    #[must_use]
    pub fn service_uid(&self) -> String {
        TemplateHelpers::service_uid(&self.name)
    }
}

fn is_valid_entity_name(name: &str) -> bool {
    let Some(first) = name.chars().next() else {
        return false;
    };

    (first.is_ascii_lowercase() || first.is_ascii_digit())
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_descriptor_omits_unset_flags() {
        let field = FieldDescriptor::new(FieldType::Text);
        assert_eq!(serde_json::to_value(&field).unwrap(), json!({ "type": "text" }));
        assert!(!field.is_required());
    }

    #[test]
    fn test_media_descriptor_keeps_explicit_false() {
        let field = FieldDescriptor::new(FieldType::Media)
            .multiple(false)
            .required();
        assert_eq!(
            serde_json::to_string(&field).unwrap(),
            r#"{"type":"media","multiple":false,"required":true}"#
        );
    }

    #[test]
    fn test_relation_descriptor_wire_shape() {
        let relation = RelationDescriptor::to_entity(Cardinality::OneToMany, "cart-item")
            .mapped_by("cart");
        assert_eq!(
            serde_json::to_string(&relation).unwrap(),
            r#"{"type":"relation","relation":"oneToMany","target":"api::cart-item.cart-item","mappedBy":"cart"}"#
        );
    }

    #[test]
    fn test_attribute_deserializes_relation_and_field() {
        let relation: Attribute = serde_json::from_value(json!({
            "type": "relation",
            "relation": "manyToOne",
            "target": "api::cart.cart"
        }))
        .unwrap();
        assert!(matches!(relation, Attribute::Relation(_)));

        let field: Attribute =
            serde_json::from_value(json!({ "type": "decimal", "required": true })).unwrap();
        assert_eq!(
            field,
            Attribute::Field(FieldDescriptor::new(FieldType::Decimal).required())
        );
    }

    #[test]
    fn test_unlisted_type_and_keys_pass_through() {
        let input = json!({
            "type": "enumeration",
            "required": true,
            "enum": ["pending", "paid"],
            "default": "pending"
        });
        let field: FieldDescriptor = serde_json::from_value(input.clone()).unwrap();
        assert_eq!(field.field_type, FieldType::Other("enumeration".to_string()));
        assert_eq!(field.extra.keys().collect::<Vec<_>>(), vec!["enum", "default"]);
        assert_eq!(serde_json::to_value(&field).unwrap(), input);
    }

    #[test]
    fn test_known_type_with_extra_keys() {
        let field: FieldDescriptor =
            serde_json::from_value(json!({ "type": "string", "unique": true })).unwrap();
        let expected = FieldDescriptor::new(FieldType::String).with("unique", true);
        assert_eq!(field, expected);
    }

    #[test]
    fn test_relation_keeps_extra_keys() {
        let relation: Attribute = serde_json::from_value(json!({
            "type": "relation",
            "relation": "manyToOne",
            "target": "api::cart.cart",
            "inversedBy": "cart_items"
        }))
        .unwrap();
        match relation {
            Attribute::Relation(rel) => assert_eq!(rel.extra["inversedBy"], "cart_items"),
            Attribute::Field(_) => panic!("expected a relation"),
        }
    }

    #[test]
    fn test_relation_overrides_same_named_field() {
        let spec = EntitySpec::new("cart")
            .field("client", FieldDescriptor::new(FieldType::String))
            .field("tg_id", FieldDescriptor::new(FieldType::String).required())
            .relation(
                "client",
                RelationDescriptor::to_entity(Cardinality::OneToOne, "client"),
            );

        let attributes = spec.attributes();
        let keys: Vec<_> = attributes.keys().cloned().collect();
        assert_eq!(keys, vec!["client", "tg_id"]);
        assert!(matches!(attributes["client"], Attribute::Relation(_)));
    }

    #[test]
    fn test_valid_entity_names() {
        for name in ["product", "cart-item", "a", "item2", "2fa-token"] {
            assert!(EntitySpec::new(name).validate().is_ok(), "{name} should be valid");
        }
    }

    #[test]
    fn test_invalid_entity_names() {
        for name in ["", "Product", "cart_item", "-cart", "cart item", "api::cart"] {
            assert!(
                EntitySpec::new(name).validate().is_err(),
                "{name} should be invalid"
            );
        }
    }

    #[test]
    fn test_naive_plural_and_uid() {
        let spec = EntitySpec::new("category");
        assert_eq!(spec.plural(), "categorys");
        assert_eq!(spec.service_uid(), "api::category.category");
    }
}
