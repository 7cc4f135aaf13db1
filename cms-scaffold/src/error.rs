//! Error types for scaffold generation

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the library
pub type ScaffoldResult<T> = Result<T, ScaffoldError>;

/// Scaffold generator error type
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// Directory creation or file write failed
    #[error("Filesystem error at {}: {source}", .path.display())]
    Filesystem {
        /// Path that could not be created or written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Entity name is not lowercase and hyphenated
    #[error("Invalid entity name: '{0}'. Must be lowercase ASCII letters, digits and hyphens")]
    InvalidEntityName(String),

    /// Two entities in one run share a name
    #[error("Entity '{0}' is declared more than once")]
    DuplicateEntity(String),

    /// A requested entity is not part of the catalog
    #[error("Unknown entity: '{0}'")]
    UnknownEntity(String),

    /// Manifest could not be read or parsed
    #[error("Invalid manifest {}: {message}", .path.display())]
    Manifest {
        /// Manifest path
        path: PathBuf,
        /// What went wrong
        message: String,
    },

    /// Template failed to compile
    #[error("Template error: {0}")]
    Template(#[from] Box<handlebars::TemplateError>),

    /// Template failed to render
    #[error("Render error: {0}")]
    Render(#[from] handlebars::RenderError),

    /// Schema document failed to serialize
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Configuration could not be extracted
    #[error("Configuration error: {0}")]
    Config(#[from] Box<figment::Error>),
}

impl ScaffoldError {
    /// Wrap an I/O error with the path it happened at
    pub fn filesystem(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Filesystem {
            path: path.into(),
            source,
        }
    }

    /// Returns true for the filesystem class of errors
    #[must_use]
    pub const fn is_filesystem(&self) -> bool {
        matches!(self, Self::Filesystem { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filesystem_error_names_path() {
        let err = ScaffoldError::filesystem(
            "src/api/product/routes/product.js",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.is_filesystem());
        let message = err.to_string();
        assert!(message.contains("src/api/product/routes/product.js"));
        assert!(message.contains("denied"));
    }

    #[test]
    fn test_invalid_name_message() {
        let err = ScaffoldError::InvalidEntityName("Product".to_string());
        assert!(!err.is_filesystem());
        assert!(err.to_string().contains("'Product'"));
    }
}
