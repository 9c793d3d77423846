//! Memoized resolved styles.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::stylesheet::StyleId;
use crate::style::ResolvedStyle;

/// Cache of resolved attribute sets, keyed by style.
///
/// A stylesheet's graph never changes after validation, so entries stay
/// valid for the lifetime of the sheet. Entries hold the raw size and the
/// scaling flag, never a scaled size, so they do not go stale when the
/// platform text size changes.
#[derive(Debug, Default)]
pub(crate) struct ResolvedCache {
    entries: RwLock<HashMap<StyleId, ResolvedStyle>>,
}

impl ResolvedCache {
    /// Create an empty cache.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Get a cached entry, or compute and store it.
    pub(crate) fn get_or_insert_with(
        &self,
        id: StyleId,
        resolve: impl FnOnce() -> ResolvedStyle,
    ) -> ResolvedStyle {
        if let Some(cached) = self.entries.read().get(&id) {
            return cached.clone();
        }

        let resolved = resolve();
        self.entries
            .write()
            .entry(id)
            .or_insert_with(|| resolved.clone());
        resolved
    }

    /// Number of cached entries.
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.read().len()
    }
}

impl Clone for ResolvedCache {
    fn clone(&self) -> Self {
        Self {
            entries: RwLock::new(self.entries.read().clone()),
        }
    }
}
