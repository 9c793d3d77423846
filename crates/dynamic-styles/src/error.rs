//! Error types for stylesheet loading.

use std::path::PathBuf;

use crate::document::DocumentFormat;

/// Result type alias for stylesheet operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading a stylesheet.
///
/// Attribute resolution itself never fails; every variant here is raised
/// while a document is located, decoded or validated.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No document with the requested name could be located.
    #[error("stylesheet document '{name}' not found (searched {} location(s))", searched.len())]
    DocumentNotFound {
        name: String,
        searched: Vec<PathBuf>,
    },

    /// File I/O error.
    #[error("failed to read stylesheet '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document text could not be decoded.
    #[error("{format} parse error: {message}")]
    Parse {
        format: DocumentFormat,
        message: String,
    },

    /// A style reaches itself by following parent links.
    #[error("cyclical parent graph at style '{style}': {}", path.join(" -> "))]
    CyclicalParentGraph { style: String, path: Vec<String> },

    /// A style names a parent that is not in the document (strict mode).
    #[error("style '{style}' names non-existent parent '{parent}'")]
    UnknownParentReference { style: String, parent: String },

    /// A recognized attribute holds a value of the wrong type (strict mode).
    #[error("style '{style}': attribute '{attribute}' expected {expected}")]
    AttributeTypeMismatch {
        style: String,
        attribute: String,
        expected: &'static str,
    },

    /// The document declares the same style name twice (strict mode).
    #[error("style '{name}' is declared more than once")]
    DuplicateStyle { name: String },
}

impl Error {
    /// Create a not-found error.
    pub fn not_found(name: impl Into<String>, searched: Vec<PathBuf>) -> Self {
        Self::DocumentNotFound {
            name: name.into(),
            searched,
        }
    }

    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a parse error.
    pub fn parse(format: DocumentFormat, message: impl Into<String>) -> Self {
        Self::Parse {
            format,
            message: message.into(),
        }
    }

    /// Create a type mismatch error.
    pub fn type_mismatch(
        style: impl Into<String>,
        attribute: impl Into<String>,
        expected: &'static str,
    ) -> Self {
        Self::AttributeTypeMismatch {
            style: style.into(),
            attribute: attribute.into(),
            expected,
        }
    }

    /// Whether this error is a cycle in the parent graph.
    pub fn is_cycle(&self) -> bool {
        matches!(self, Self::CyclicalParentGraph { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_error_display() {
        let err = Error::CyclicalParentGraph {
            style: "A".to_string(),
            path: vec!["A".to_string(), "B".to_string(), "A".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("cyclical"));
        assert!(msg.contains("A -> B -> A"));
        assert!(err.is_cycle());
    }

    #[test]
    fn unknown_parent_display() {
        let err = Error::UnknownParentReference {
            style: "Caption".to_string(),
            parent: "Bodyy".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Caption"));
        assert!(msg.contains("Bodyy"));
        assert!(!err.is_cycle());
    }

    #[test]
    fn not_found_counts_locations() {
        let err = Error::not_found(
            "Stylesheet",
            vec![PathBuf::from("a/Stylesheet.json"), PathBuf::from("a/Stylesheet.toml")],
        );
        assert!(err.to_string().contains("2 location(s)"));
    }
}
