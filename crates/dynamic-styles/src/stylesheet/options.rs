//! Load configuration.

use std::sync::Arc;

use crate::resolve::{FixedReferenceSize, ReferenceSizeProvider};

/// How authoring mistakes in a document are treated.
///
/// Cycles in the parent graph are always fatal; this only governs the
/// recoverable mistakes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strictness {
    /// Log a warning and carry on: mistyped attributes read as absent,
    /// unknown parents leave the style as a root, and the last duplicate
    /// declaration wins.
    #[default]
    Lenient,
    /// Fail the load on any of the above.
    Strict,
}

/// Options for building a [`Stylesheet`](super::Stylesheet).
///
/// # Example
///
/// ```
/// use dynamic_styles::prelude::*;
///
/// let options = LoadOptions::strict().with_reference_size(21.0);
/// assert_eq!(options.strictness, Strictness::Strict);
/// assert_eq!(options.reference_size.reference_point_size(), 21.0);
/// ```
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Treatment of recoverable authoring mistakes.
    pub strictness: Strictness,
    /// Source of the platform body text size used for dynamic scaling.
    pub reference_size: Arc<dyn ReferenceSizeProvider>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            strictness: Strictness::default(),
            reference_size: Arc::new(FixedReferenceSize::default()),
        }
    }
}

impl LoadOptions {
    /// Lenient options with the default reference size.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lenient options.
    pub fn lenient() -> Self {
        Self::default().with_strictness(Strictness::Lenient)
    }

    /// Strict options.
    pub fn strict() -> Self {
        Self::default().with_strictness(Strictness::Strict)
    }

    /// Set the strictness.
    pub fn with_strictness(mut self, strictness: Strictness) -> Self {
        self.strictness = strictness;
        self
    }

    /// Set the reference size provider.
    pub fn with_reference_size(mut self, provider: impl ReferenceSizeProvider + 'static) -> Self {
        self.reference_size = Arc::new(provider);
        self
    }

    /// Share an existing reference size provider.
    pub fn with_shared_reference_size(mut self, provider: Arc<dyn ReferenceSizeProvider>) -> Self {
        self.reference_size = provider;
        self
    }

    /// Whether recoverable mistakes fail the load.
    pub fn is_strict(&self) -> bool {
        self.strictness == Strictness::Strict
    }
}
