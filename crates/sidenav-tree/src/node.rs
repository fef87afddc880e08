//! Navigation node model.
//!
//! A sidebar is a forest of [`Group`]s. Groups hold an ordered list of child
//! [`NavNode`]s; leaves point at a page through their slug. Nodes are plain
//! immutable values: construction performs no validation (see
//! [`validate`](crate::validate)), and no mutation API exists afterwards.

use serde::Serialize;

use crate::badge::Badge;

/// Sidebar entry: either a group of entries or a single page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NavNode {
    /// Entry with children.
    Group(Group),
    /// Entry linking to a page.
    Leaf(Leaf),
}

impl NavNode {
    /// Create a group node.
    pub fn group(
        label: impl Into<String>,
        children: Vec<NavNode>,
        badge: Option<Badge>,
        collapsed: Option<bool>,
    ) -> Self {
        Self::Group(Group::new(label, children, badge, collapsed))
    }

    /// Create a leaf node.
    pub fn leaf(label: impl Into<String>, slug: impl Into<String>, badge: Option<Badge>) -> Self {
        Self::Leaf(Leaf::new(label, slug, badge))
    }

    /// Display label.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Group(group) => group.label(),
            Self::Leaf(leaf) => leaf.label(),
        }
    }

    /// Optional badge.
    #[must_use]
    pub fn badge(&self) -> Option<&Badge> {
        match self {
            Self::Group(group) => group.badge(),
            Self::Leaf(leaf) => leaf.badge(),
        }
    }
}

/// Group of sidebar entries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Group {
    label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    badge: Option<Badge>,
    #[serde(skip_serializing_if = "Option::is_none")]
    collapsed: Option<bool>,
    #[serde(rename = "items")]
    children: Vec<NavNode>,
}

impl Group {
    /// Create a group.
    ///
    /// `children` may be empty here; empty groups are rejected by validation.
    pub fn new(
        label: impl Into<String>,
        children: Vec<NavNode>,
        badge: Option<Badge>,
        collapsed: Option<bool>,
    ) -> Self {
        Self {
            label: label.into(),
            badge,
            collapsed,
            children,
        }
    }

    /// Display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Optional badge.
    #[must_use]
    pub fn badge(&self) -> Option<&Badge> {
        self.badge.as_ref()
    }

    /// Collapse setting of this group, `None` when inherited.
    #[must_use]
    pub fn collapsed(&self) -> Option<bool> {
        self.collapsed
    }

    /// Children in render order.
    #[must_use]
    pub fn children(&self) -> &[NavNode] {
        &self.children
    }
}

/// Sidebar entry linking to a page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Leaf {
    label: String,
    slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    badge: Option<Badge>,
}

impl Leaf {
    /// Create a leaf.
    pub fn new(label: impl Into<String>, slug: impl Into<String>, badge: Option<Badge>) -> Self {
        Self {
            label: label.into(),
            slug: slug.into(),
            badge,
        }
    }

    /// Display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Page slug, unique across the sidebar.
    #[must_use]
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// Optional badge.
    #[must_use]
    pub fn badge(&self) -> Option<&Badge> {
        self.badge.as_ref()
    }
}

/// Error-free sidebar produced by [`validate`](crate::validate::validate).
///
/// The top level is always a sequence of groups; every page belongs to some
/// top-level section.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidatedTree {
    groups: Vec<Group>,
}

impl ValidatedTree {
    /// Only the validator can produce a tree.
    pub(crate) fn new(groups: Vec<Group>) -> Self {
        Self { groups }
    }

    /// Top-level groups in render order.
    #[must_use]
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Walk every leaf depth-first in children order.
    ///
    /// The callback receives the ancestor groups (root first) and the leaf.
    pub fn for_each_leaf<'a, F>(&'a self, mut f: F)
    where
        F: FnMut(&[&'a Group], &'a Leaf),
    {
        fn walk<'a, F>(group: &'a Group, ancestors: &mut Vec<&'a Group>, f: &mut F)
        where
            F: FnMut(&[&'a Group], &'a Leaf),
        {
            ancestors.push(group);
            for child in group.children() {
                match child {
                    NavNode::Group(inner) => walk(inner, ancestors, f),
                    NavNode::Leaf(leaf) => f(ancestors, leaf),
                }
            }
            ancestors.pop();
        }

        let mut ancestors = Vec::new();
        for group in &self.groups {
            walk(group, &mut ancestors, &mut f);
        }
    }

    /// Number of groups at every level.
    #[must_use]
    pub fn group_count(&self) -> usize {
        fn count(group: &Group) -> usize {
            1 + group
                .children()
                .iter()
                .map(|child| match child {
                    NavNode::Group(inner) => count(inner),
                    NavNode::Leaf(_) => 0,
                })
                .sum::<usize>()
        }

        self.groups.iter().map(count).sum()
    }
}
