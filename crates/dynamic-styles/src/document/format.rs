//! Document formats.

use std::fmt;
use std::path::Path;

/// A serialization format a style document can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentFormat {
    /// JSON object of style objects.
    Json,
    /// TOML file with one table per style.
    Toml,
}

impl DocumentFormat {
    /// All supported formats, in lookup order.
    pub const ALL: [DocumentFormat; 2] = [DocumentFormat::Json, DocumentFormat::Toml];

    /// The file extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Toml => "toml",
        }
    }

    /// Detect the format from a path's extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        Self::ALL
            .into_iter()
            .find(|format| ext.eq_ignore_ascii_case(format.extension()))
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("JSON"),
            Self::Toml => f.write_str("TOML"),
        }
    }
}
