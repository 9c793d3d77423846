//! Style documents: the decoded mapping of style names to records.
//!
//! A document is an ordered list of `(name, record)` pairs. Records are kept
//! as loosely typed values until a [`Stylesheet`](crate::Stylesheet) reads
//! them, so a malformed value only affects the attribute it belongs to.
//!
//! Any serde format can produce a [`StyleDocument`]; JSON and TOML helpers
//! are provided.
//!
//! ```
//! use dynamic_styles::document::StyleDocument;
//!
//! let doc = StyleDocument::from_toml_str(r#"
//! [Body]
//! size = 17
//! shouldScale = true
//!
//! [Caption]
//! parent = "Body"
//! size = 12
//! "#)?;
//!
//! assert_eq!(doc.len(), 2);
//! assert_eq!(doc.names().collect::<Vec<_>>(), ["Body", "Caption"]);
//! # Ok::<(), dynamic_styles::Error>(())
//! ```

mod format;
mod record;

pub use format::DocumentFormat;
pub use record::StyleRecord;
pub(crate) use record::interpret;

use std::collections::HashSet;
use std::fmt;

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};

use crate::{Error, Result};

/// A decoded style document.
///
/// Entries keep document order, and a name declared twice appears twice;
/// the stylesheet decides what to do about duplicates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleDocument {
    entries: Vec<(String, StyleRecord)>,
}

impl StyleDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a document from in-memory records.
    pub fn from_records<I, K>(records: I) -> Self
    where
        I: IntoIterator<Item = (K, StyleRecord)>,
        K: Into<String>,
    {
        Self {
            entries: records
                .into_iter()
                .map(|(name, record)| (name.into(), record))
                .collect(),
        }
    }

    /// Decode a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::parse(DocumentFormat::Json, e.to_string()))
    }

    /// Decode a JSON document from bytes.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(|e| Error::parse(DocumentFormat::Json, e.to_string()))
    }

    /// Decode a TOML document. Each top-level table is a style.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::parse(DocumentFormat::Toml, e.to_string()))
    }

    /// Decode bytes in the given format.
    pub fn from_slice(bytes: &[u8], format: DocumentFormat) -> Result<Self> {
        match format {
            DocumentFormat::Json => Self::from_json_slice(bytes),
            DocumentFormat::Toml => {
                let text = std::str::from_utf8(bytes)
                    .map_err(|e| Error::parse(DocumentFormat::Toml, e.to_string()))?;
                Self::from_toml_str(text)
            }
        }
    }

    /// Append a record.
    pub fn push(&mut self, name: impl Into<String>, record: StyleRecord) {
        self.entries.push((name.into(), record));
    }

    /// Entries in document order.
    pub fn entries(&self) -> &[(String, StyleRecord)] {
        &self.entries
    }

    /// Style names in document order, duplicates included.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Names declared more than once, each reported once.
    pub fn duplicates(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();
        self.names()
            .filter(|name| !seen.insert(*name) && reported.insert(*name))
            .collect()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the document has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for StyleDocument {
    type Item = (String, StyleRecord);
    type IntoIter = std::vec::IntoIter<(String, StyleRecord)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'de> Deserialize<'de> for StyleDocument {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_map(DocumentVisitor)
    }
}

struct DocumentVisitor;

impl<'de> Visitor<'de> for DocumentVisitor {
    type Value = StyleDocument;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of style names to style records")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<Self::Value, A::Error> {
        let mut doc = StyleDocument::new();
        while let Some((name, record)) = map.next_entry::<String, StyleRecord>()? {
            doc.push(name, record);
        }
        Ok(doc)
    }
}
