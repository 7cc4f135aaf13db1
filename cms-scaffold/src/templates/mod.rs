//! Text templates for the routes and controller artifacts

use std::fmt;

use handlebars::Handlebars;
use serde::Serialize;

use crate::error::ScaffoldResult;

pub mod files;
pub use files::*;

/// Registered name of the route table template
pub const ROUTES: &str = "routes";

/// Registered name of the controller template
pub const CONTROLLER: &str = "controller";

/// Compiled scaffold templates
pub struct TemplateRegistry {
    handlebars: Handlebars<'static>,
}

impl TemplateRegistry {
    /// Compile the built-in templates
    ///
    /// # Errors
    ///
    /// Returns an error if a template fails to compile.
    pub fn new() -> ScaffoldResult<Self> {
        let mut handlebars = Handlebars::new();

        // Disable HTML escaping since we're generating code
        handlebars.register_escape_fn(handlebars::no_escape);
        handlebars.set_strict_mode(true);

        handlebars
            .register_template_string(ROUTES, ROUTES_TEMPLATE)
            .map_err(Box::new)?;
        handlebars
            .register_template_string(CONTROLLER, CONTROLLER_TEMPLATE)
            .map_err(Box::new)?;

        Ok(Self { handlebars })
    }

    /// Render a registered template
    ///
    /// # Errors
    ///
    /// Returns an error if the template is unknown or a variable is missing.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> ScaffoldResult<String> {
        Ok(self.handlebars.render(name, data)?)
    }
}

impl fmt::Debug for TemplateRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemplateRegistry").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_templates_compile() {
        assert!(TemplateRegistry::new().is_ok());
    }

    #[test]
    fn test_missing_variable_fails() {
        let registry = TemplateRegistry::new().unwrap();
        let result = registry.render(ROUTES, &json!({ "name": "product" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_template_fails() {
        let registry = TemplateRegistry::new().unwrap();
        assert!(registry.render("migration", &json!({})).is_err());
    }

    #[test]
    fn test_values_are_not_escaped() {
        let registry = TemplateRegistry::new().unwrap();
        let rendered = registry
            .render(CONTROLLER, &json!({ "service_uid": "api::a&b.a&b" }))
            .unwrap();
        assert!(rendered.contains("'api::a&b.a&b'"));
    }

    #[test]
    fn test_route_template_has_no_auth() {
        assert_eq!(ROUTES_TEMPLATE.matches("auth: false,").count(), 5);
        assert!(!ROUTES_TEMPLATE.contains("auth: true"));
    }
}
