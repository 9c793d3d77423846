//! Stylesheet construction and lookup.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::{LoadOptions, StyleGraph, Strictness};
use crate::document::{StyleDocument, interpret};
use crate::logging::targets;
use crate::resolve::{ReferenceSizeProvider, ResolvedCache};
use crate::style::{ResolvedStyle, Style, StyleDefinition};
use crate::{Error, Result};

/// A validated collection of named styles.
///
/// Construction parses every record, links parents by name and rejects
/// cyclical parent graphs before the sheet is returned, so no partially
/// linked sheet is ever observable. After that the sheet is immutable.
///
/// There is no process-wide default sheet: load one and hand it (or an
/// `Arc` of it) to whatever needs it.
///
/// # Example
///
/// ```
/// use dynamic_styles::prelude::*;
///
/// let sheet = Stylesheet::from_json_str(r#"{"A": {"parent": "B"}, "B": {"parent": "A"}}"#);
/// assert!(matches!(sheet, Err(Error::CyclicalParentGraph { .. })));
/// ```
#[derive(Debug, Clone)]
pub struct Stylesheet {
    graph: StyleGraph,
    cache: ResolvedCache,
    reference_size: Arc<dyn ReferenceSizeProvider>,
    source_path: Option<PathBuf>,
}

impl Stylesheet {
    /// Build a stylesheet from a decoded document.
    pub fn load(document: StyleDocument, options: &LoadOptions) -> Result<Self> {
        for name in document.duplicates() {
            match options.strictness {
                Strictness::Strict => return Err(Error::DuplicateStyle { name: name.to_string() }),
                Strictness::Lenient => tracing::warn!(
                    target: targets::STYLESHEET,
                    style = name,
                    "style declared more than once; the last declaration wins"
                ),
            }
        }

        let mut graph = StyleGraph::new();
        for (name, record) in document {
            let definition = interpret(&name, &record, options.strictness)?;
            graph.insert(name, definition);
        }

        Self::build(graph, options)
    }

    /// Build a stylesheet from definitions made in code.
    ///
    /// Duplicate names follow the same policy as [`load`](Self::load).
    pub fn from_definitions<I, K>(definitions: I, options: &LoadOptions) -> Result<Self>
    where
        I: IntoIterator<Item = (K, StyleDefinition)>,
        K: Into<String>,
    {
        let mut graph = StyleGraph::new();
        for (name, definition) in definitions {
            let name = name.into();
            if graph.contains(&name) {
                if options.is_strict() {
                    return Err(Error::DuplicateStyle { name });
                }
                tracing::warn!(target: targets::STYLESHEET, style = %name, "duplicate style definition replaced");
            }
            graph.insert(name, definition);
        }
        Self::build(graph, options)
    }

    /// Parse and build a JSON stylesheet with default options.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::load(StyleDocument::from_json_str(json)?, &LoadOptions::default())
    }

    /// Parse and build a TOML stylesheet with default options.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Self::load(StyleDocument::from_toml_str(text)?, &LoadOptions::default())
    }

    /// Link parents and validate the graph.
    fn build(mut graph: StyleGraph, options: &LoadOptions) -> Result<Self> {
        for (id, parent) in graph.link_parents() {
            let style = graph.node(id).name.clone();
            match options.strictness {
                Strictness::Strict => return Err(Error::UnknownParentReference { style, parent }),
                Strictness::Lenient => tracing::warn!(
                    target: targets::STYLESHEET,
                    style = %style,
                    parent = %parent,
                    "unknown parent style; treating as a root"
                ),
            }
        }

        if let Some(id) = graph.find_cycle() {
            let path = graph.cycle_path(id);
            let style = graph.node(id).name.clone();
            tracing::error!(
                target: targets::STYLESHEET,
                "cyclical parent graph: {}",
                path.join(" -> ")
            );
            return Err(Error::CyclicalParentGraph { style, path });
        }

        tracing::debug!(
            target: targets::STYLESHEET,
            styles = graph.len(),
            "stylesheet loaded"
        );

        Ok(Self {
            graph,
            cache: ResolvedCache::new(),
            reference_size: Arc::clone(&options.reference_size),
            source_path: None,
        })
    }

    pub(crate) fn with_source_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.source_path = Some(path.into());
        self
    }

    pub(crate) fn graph(&self) -> &StyleGraph {
        &self.graph
    }

    pub(crate) fn cache(&self) -> &ResolvedCache {
        &self.cache
    }

    /// Look up a style by name.
    pub fn style(&self, name: &str) -> Option<Style<'_>> {
        self.graph.get(name).map(|id| Style::new(self, id))
    }

    /// Resolve every attribute of a style at once. Memoized.
    pub fn resolved(&self, name: &str) -> Option<ResolvedStyle> {
        self.style(name).map(|style| style.resolve())
    }

    /// Whether a style with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.graph.contains(name)
    }

    /// Style names in document order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.graph.ids().map(|id| self.graph.node(id).name.as_str())
    }

    /// All styles in document order.
    pub fn iter(&self) -> impl Iterator<Item = Style<'_>> {
        self.graph.ids().map(|id| Style::new(self, id))
    }

    /// Number of styles.
    pub fn len(&self) -> usize {
        self.graph.len()
    }

    /// Whether the sheet has no styles.
    pub fn is_empty(&self) -> bool {
        self.graph.len() == 0
    }

    /// The file this sheet was loaded from, if any.
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// The provider used for dynamic scaling.
    pub fn reference_size(&self) -> &dyn ReferenceSizeProvider {
        self.reference_size.as_ref()
    }
}
