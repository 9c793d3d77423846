//! The style arena and its parent links.

use std::collections::HashMap;

use crate::style::{StyleAttributes, StyleDefinition};

/// Index of a style in its graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct StyleId(usize);

impl StyleId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    pub(crate) fn index(self) -> usize {
        self.0
    }
}

/// One style in the arena.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct StyleNode {
    pub(crate) name: String,
    pub(crate) parent_name: Option<String>,
    /// Resolved parent. An edge, not ownership: the arena owns every node.
    pub(crate) parent: Option<StyleId>,
    pub(crate) attributes: StyleAttributes,
}

/// Arena of styles with name lookup.
///
/// Parent links are set by [`link_parents`](Self::link_parents) and may
/// form cycles until [`find_cycle`](Self::find_cycle) has been checked.
/// Nothing that cascades attributes may run before that.
#[derive(Debug, Clone, Default)]
pub(crate) struct StyleGraph {
    nodes: Vec<StyleNode>,
    index: HashMap<String, StyleId>,
}

impl StyleGraph {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Add a style, replacing any existing style of the same name in place.
    pub(crate) fn insert(&mut self, name: impl Into<String>, definition: StyleDefinition) -> StyleId {
        let name = name.into();
        let node = StyleNode {
            name: name.clone(),
            parent_name: definition.parent,
            parent: None,
            attributes: definition.attributes,
        };

        if let Some(&id) = self.index.get(&name) {
            self.nodes[id.index()] = node;
            return id;
        }

        let id = StyleId::new(self.nodes.len());
        self.nodes.push(node);
        self.index.insert(name, id);
        id
    }

    pub(crate) fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub(crate) fn get(&self, name: &str) -> Option<StyleId> {
        self.index.get(name).copied()
    }

    pub(crate) fn node(&self, id: StyleId) -> &StyleNode {
        &self.nodes[id.index()]
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Ids in insertion order.
    pub(crate) fn ids(&self) -> impl Iterator<Item = StyleId> + use<> {
        (0..self.nodes.len()).map(StyleId::new)
    }

    #[cfg(test)]
    pub(crate) fn link_parent(&mut self, child: StyleId, parent: StyleId) {
        self.nodes[child.index()].parent = Some(parent);
    }

    /// Resolve every declared parent name.
    ///
    /// Returns the styles whose parent name did not match any style, with
    /// the missing name. Those styles are left without a parent.
    pub(crate) fn link_parents(&mut self) -> Vec<(StyleId, String)> {
        let mut unresolved = Vec::new();
        for i in 0..self.nodes.len() {
            let Some(parent_name) = self.nodes[i].parent_name.clone() else {
                self.nodes[i].parent = None;
                continue;
            };
            match self.get(&parent_name) {
                Some(parent) => self.nodes[i].parent = Some(parent),
                None => {
                    self.nodes[i].parent = None;
                    unresolved.push((StyleId::new(i), parent_name));
                }
            }
        }
        unresolved
    }

    /// Whether following parent links from `id` leads back to `id`.
    ///
    /// The walk is iterative and bounded by the node count. A chain that
    /// runs into a cycle not containing `id` stops after that many steps and
    /// reports `false`; the nodes on that cycle report `true` themselves.
    pub(crate) fn is_parent_cyclical(&self, id: StyleId) -> bool {
        let mut current = self.node(id).parent;
        let mut steps = 0;
        while let Some(next) = current {
            if next == id {
                return true;
            }
            steps += 1;
            if steps > self.nodes.len() {
                return false;
            }
            current = self.node(next).parent;
        }
        false
    }

    /// The cycle through `id` as names, starting and ending at `id`.
    ///
    /// Only meaningful when [`is_parent_cyclical`](Self::is_parent_cyclical)
    /// holds for `id`.
    pub(crate) fn cycle_path(&self, id: StyleId) -> Vec<String> {
        let mut path = vec![self.node(id).name.clone()];
        let mut current = self.node(id).parent;
        while let Some(next) = current {
            path.push(self.node(next).name.clone());
            if next == id || path.len() > self.nodes.len() {
                break;
            }
            current = self.node(next).parent;
        }
        path
    }

    /// First style, in insertion order, that lies on a cycle.
    ///
    /// One pass over the graph: every node is walked at most once, so a
    /// long acyclic chain validates in linear time.
    pub(crate) fn find_cycle(&self) -> Option<StyleId> {
        #[derive(Clone, Copy, PartialEq)]
        enum Mark {
            Unvisited,
            OnPath,
            Done,
        }

        let mut marks = vec![Mark::Unvisited; self.nodes.len()];
        let mut path = Vec::new();

        for start in self.ids() {
            let mut current = Some(start);
            while let Some(id) = current {
                match marks[id.index()] {
                    Mark::Done => break,
                    Mark::OnPath => {
                        // The walk re-entered itself: `id` and everything
                        // pushed after it form the cycle.
                        let entry = path.iter().position(|&p| p == id).unwrap_or(0);
                        return path[entry..].iter().copied().min();
                    }
                    Mark::Unvisited => {
                        marks[id.index()] = Mark::OnPath;
                        path.push(id);
                        current = self.node(id).parent;
                    }
                }
            }
            for id in path.drain(..) {
                marks[id.index()] = Mark::Done;
            }
        }

        None
    }
}
