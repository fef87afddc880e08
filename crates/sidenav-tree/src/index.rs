//! Slug index and traversal order.
//!
//! Built once from a [`ValidatedTree`]. Slugs are already known to be unique,
//! so building the index cannot fail.

use std::collections::HashMap;

use crate::node::{Group, Leaf, NavNode, ValidatedTree};

/// Index entry for one page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexEntry {
    /// The page's leaf node.
    pub leaf: Leaf,
    /// Labels of the enclosing groups, top-level first.
    pub ancestors: Vec<String>,
    /// Child positions from the top level down to the leaf.
    pub(crate) location: Vec<usize>,
    /// Position in [`NavIndex::leaf_order`].
    pub position: usize,
}

/// Flat lookup structures derived from a tree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavIndex {
    entries: HashMap<String, IndexEntry>,
    order: Vec<String>,
}

impl NavIndex {
    /// Build the index with a depth-first, children-order traversal.
    #[must_use]
    pub fn build(tree: &ValidatedTree) -> Self {
        let mut entries = HashMap::new();
        let mut order = Vec::new();

        for (top, group) in tree.groups().iter().enumerate() {
            let mut ancestors = vec![group.label().to_owned()];
            let mut location = vec![top];
            collect(group, &mut ancestors, &mut location, &mut entries, &mut order);
        }

        Self { entries, order }
    }

    /// Entry for a slug.
    #[must_use]
    pub fn get(&self, slug: &str) -> Option<&IndexEntry> {
        self.entries.get(slug)
    }

    /// Slugs in traversal order.
    #[must_use]
    pub fn leaf_order(&self) -> &[String] {
        &self.order
    }

    /// Number of indexed pages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True when the sidebar has no pages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

fn collect(
    group: &Group,
    ancestors: &mut Vec<String>,
    location: &mut Vec<usize>,
    entries: &mut HashMap<String, IndexEntry>,
    order: &mut Vec<String>,
) {
    for (index, child) in group.children().iter().enumerate() {
        location.push(index);
        match child {
            NavNode::Group(inner) => {
                ancestors.push(inner.label().to_owned());
                collect(inner, ancestors, location, entries, order);
                ancestors.pop();
            }
            NavNode::Leaf(leaf) => {
                let entry = IndexEntry {
                    leaf: leaf.clone(),
                    ancestors: ancestors.clone(),
                    location: location.clone(),
                    position: order.len(),
                };
                order.push(leaf.slug().to_owned());
                entries.insert(leaf.slug().to_owned(), entry);
            }
        }
        location.pop();
    }
}
