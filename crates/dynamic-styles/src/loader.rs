//! Locating and loading stylesheet documents.
//!
//! A document can come from a name looked up on a list of search paths, an
//! explicit file path, or bytes already in memory. Whatever the source, the
//! result is a validated [`Stylesheet`] that the caller owns and passes on
//! to whatever needs it.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::document::{DocumentFormat, StyleDocument};
use crate::logging::targets;
use crate::stylesheet::{LoadOptions, Stylesheet};
use crate::{Error, Result};

/// Name looked up by [`StylesheetLoader::load_default`].
pub const DEFAULT_DOCUMENT_NAME: &str = "Stylesheet";

/// Directory under the user config dir that is searched by default.
const CONFIG_SUBDIR: &str = "dynamic-styles";

/// Where a stylesheet document comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentSource {
    /// A document name, resolved as `<name>.json` or `<name>.toml` in the
    /// loader's search paths.
    Named(String),
    /// A file path. The format follows the extension; anything other than
    /// `.toml` is read as JSON.
    Path(PathBuf),
    /// Raw document bytes.
    Bytes {
        bytes: Vec<u8>,
        format: DocumentFormat,
    },
}

impl DocumentSource {
    /// A named document.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// A document at a path.
    pub fn path(path: impl Into<PathBuf>) -> Self {
        Self::Path(path.into())
    }

    /// A document in memory.
    pub fn bytes(bytes: impl Into<Vec<u8>>, format: DocumentFormat) -> Self {
        Self::Bytes {
            bytes: bytes.into(),
            format,
        }
    }
}

/// Loads stylesheets from named documents, files or bytes.
///
/// # Example
///
/// ```no_run
/// use dynamic_styles::prelude::*;
///
/// let loader = StylesheetLoader::new().options(LoadOptions::strict());
/// let sheet = loader.load_default()?;
/// let body = sheet.style("Body");
/// # Ok::<(), dynamic_styles::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct StylesheetLoader {
    search_paths: Vec<PathBuf>,
    options: LoadOptions,
}

impl StylesheetLoader {
    /// Create a loader searching the current directory and the user config
    /// directory.
    pub fn new() -> Self {
        Self::with_paths(Self::default_search_paths())
    }

    /// Create a loader with custom search paths.
    pub fn with_paths(paths: Vec<PathBuf>) -> Self {
        Self {
            search_paths: paths,
            options: LoadOptions::default(),
        }
    }

    /// Add a search path.
    pub fn add_search_path(&mut self, path: impl Into<PathBuf>) {
        let path = path.into();
        if !self.search_paths.contains(&path) {
            self.search_paths.push(path);
        }
    }

    /// Current search paths, in lookup order.
    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    /// Set the options used to build loaded sheets.
    pub fn options(mut self, options: LoadOptions) -> Self {
        self.options = options;
        self
    }

    /// The options used to build loaded sheets.
    pub fn load_options(&self) -> &LoadOptions {
        &self.options
    }

    /// Load a stylesheet from any source.
    pub fn load(&self, source: DocumentSource) -> Result<Stylesheet> {
        match source {
            DocumentSource::Named(name) => self.load_named(&name),
            DocumentSource::Path(path) => self.load_path(path),
            DocumentSource::Bytes { bytes, format } => self.load_bytes(&bytes, format),
        }
    }

    /// Load the document named `Stylesheet`.
    pub fn load_default(&self) -> Result<Stylesheet> {
        self.load_named(DEFAULT_DOCUMENT_NAME)
    }

    /// Find a named document on the search paths and load it.
    pub fn load_named(&self, name: &str) -> Result<Stylesheet> {
        let mut searched = Vec::new();

        for dir in &self.search_paths {
            for format in DocumentFormat::ALL {
                let candidate = dir.join(format!("{name}.{}", format.extension()));
                if candidate.is_file() {
                    tracing::debug!(
                        target: targets::LOADER,
                        name,
                        path = %candidate.display(),
                        "found stylesheet document"
                    );
                    return self.read_file(&candidate, format);
                }
                searched.push(candidate);
            }
        }

        tracing::warn!(
            target: targets::LOADER,
            name,
            searched = searched.len(),
            "stylesheet document not found"
        );
        Err(Error::not_found(name, searched))
    }

    /// Load a document from a file.
    pub fn load_path(&self, path: impl AsRef<Path>) -> Result<Stylesheet> {
        let path = path.as_ref();
        let format = DocumentFormat::from_path(path).unwrap_or(DocumentFormat::Json);
        self.read_file(path, format)
    }

    /// Load a document from bytes.
    pub fn load_bytes(&self, bytes: &[u8], format: DocumentFormat) -> Result<Stylesheet> {
        let document = StyleDocument::from_slice(bytes, format)?;
        Stylesheet::load(document, &self.options)
    }

    fn read_file(&self, path: &Path, format: DocumentFormat) -> Result<Stylesheet> {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                let name = path
                    .file_stem()
                    .map(|stem| stem.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                return Err(Error::not_found(name, vec![path.to_path_buf()]));
            }
            Err(e) => return Err(Error::io(path, e)),
        };

        let sheet = self.load_bytes(&bytes, format)?.with_source_path(path);
        tracing::debug!(
            target: targets::LOADER,
            path = %path.display(),
            %format,
            styles = sheet.len(),
            "loaded stylesheet"
        );
        Ok(sheet)
    }

    fn default_search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(".")];
        if let Some(config) = dirs::config_dir() {
            paths.push(config.join(CONFIG_SUBDIR));
        }
        paths
    }
}

impl Default for StylesheetLoader {
    fn default() -> Self {
        Self::new()
    }
}
