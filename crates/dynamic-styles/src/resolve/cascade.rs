//! Attribute cascading through the parent chain.

use crate::stylesheet::{StyleGraph, StyleId};
use crate::style::StyleAttributes;

/// Iterator over a style and its ancestors, nearest first.
///
/// The walk follows parent links until it reaches a root. It must only run
/// on a graph that passed cycle validation.
#[derive(Debug, Clone)]
pub(crate) struct Lineage<'g> {
    graph: &'g StyleGraph,
    next: Option<StyleId>,
}

impl<'g> Lineage<'g> {
    /// Start at `start` itself.
    pub(crate) fn inclusive(graph: &'g StyleGraph, start: StyleId) -> Self {
        Self {
            graph,
            next: Some(start),
        }
    }

    /// Start at the parent of `start`.
    pub(crate) fn ancestors(graph: &'g StyleGraph, start: StyleId) -> Self {
        Self {
            graph,
            next: graph.node(start).parent,
        }
    }
}

impl Iterator for Lineage<'_> {
    type Item = StyleId;

    fn next(&mut self) -> Option<StyleId> {
        let current = self.next?;
        self.next = self.graph.node(current).parent;
        Some(current)
    }
}

/// Resolve one attribute: the first value set along the lineage of `start`.
///
/// Returns `None` when neither the style nor any ancestor sets the
/// attribute; the caller applies the root default.
pub(crate) fn cascade<'g, T>(
    graph: &'g StyleGraph,
    start: StyleId,
    get: impl Fn(&'g StyleAttributes) -> Option<T>,
) -> Option<T> {
    Lineage::inclusive(graph, start).find_map(|id| get(&graph.node(id).attributes))
}

/// Flatten the lineage of `start` into a single set of attributes.
///
/// Ancestors are applied root first so nearer styles override them.
pub(crate) fn flatten(graph: &StyleGraph, start: StyleId) -> StyleAttributes {
    let lineage: Vec<StyleId> = Lineage::inclusive(graph, start).collect();
    let mut flattened = StyleAttributes::default();
    for id in lineage.into_iter().rev() {
        flattened.merge(&graph.node(id).attributes);
    }
    flattened
}
