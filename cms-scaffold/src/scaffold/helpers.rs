//! Naming helpers for code generation
//!
//! Every derived name comes from the entity name alone. Pluralization is
//! plain concatenation: the generated collection names must match what the
//! content runtime derives, and that runtime does not inflect either.

/// Naming helpers shared by the schema, routes and controller renderers
pub struct TemplateHelpers;

impl TemplateHelpers {
    /// Pluralize by appending `s`
    ///
    /// # Examples
    ///
    /// ```
    /// # use cms_scaffold::scaffold::TemplateHelpers;
    /// assert_eq!(TemplateHelpers::pluralize("product"), "products");
    /// assert_eq!(TemplateHelpers::pluralize("cart-item"), "cart-items");
    /// assert_eq!(TemplateHelpers::pluralize("category"), "categorys");
    /// ```
    #[must_use]
    pub fn pluralize(name: &str) -> String {
        format!("{name}s")
    }

    /// Entity service identifier
    ///
    /// # Examples
    ///
    /// ```
    /// # use cms_scaffold::scaffold::TemplateHelpers;
    /// assert_eq!(TemplateHelpers::service_uid("cart-item"), "api::cart-item.cart-item");
    /// ```
    #[must_use]
    pub fn service_uid(name: &str) -> String {
        format!("api::{name}.{name}")
    }

    /// Collection route path
    ///
    /// # Examples
    ///
    /// ```
    /// # use cms_scaffold::scaffold::TemplateHelpers;
    /// assert_eq!(TemplateHelpers::to_route_path("product"), "/products");
    /// ```
    #[must_use]
    pub fn to_route_path(name: &str) -> String {
        format!("/{}", Self::pluralize(name))
    }

    /// Fully qualified handler reference (`<name>.<action>`)
    #[must_use]
    pub fn to_handler(name: &str, action: &str) -> String {
        format!("{name}.{action}")
    }
}
