//! Read API over a validated sidebar.
//!
//! [`Navigation`] owns a [`ValidatedTree`] and the [`NavIndex`] derived from
//! it. Both are immutable once built, so a `Navigation` can be shared across
//! threads (typically behind an `Arc`) and queried without locking.
//!
//! # Example
//!
//! ```
//! use sidenav_tree::{Navigation, NavigationOptions, RawEntry};
//!
//! let raw = vec![
//!     RawEntry::group(
//!         "Getting Started",
//!         vec![
//!             RawEntry::leaf("Introduction", "getting-started/introduction"),
//!             RawEntry::leaf("Installation", "getting-started/installation"),
//!         ],
//!     ),
//!     RawEntry::group("CLI", vec![RawEntry::leaf("Overview", "cli/overview")]),
//! ];
//! let nav = Navigation::from_raw(&raw, NavigationOptions::default()).unwrap();
//!
//! let adjacent = nav.adjacent("getting-started/installation").unwrap();
//! assert_eq!(adjacent.previous.map(|leaf| leaf.slug()), Some("getting-started/introduction"));
//! assert_eq!(adjacent.next.map(|leaf| leaf.slug()), Some("cli/overview"));
//! assert_eq!(nav.breadcrumb("cli/overview").unwrap(), vec!["CLI", "Overview"]);
//! ```

use serde::Serialize;

use crate::badge::Badge;
use crate::error::{NotFound, ValidationErrors};
use crate::index::{IndexEntry, NavIndex};
use crate::node::{Group, Leaf, NavNode, ValidatedTree};
use crate::raw::RawEntry;
use crate::validate::{DEFAULT_MAX_DEPTH, ValidationOptions, normalize_slug, validate_with};

/// Options for building a [`Navigation`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationOptions {
    /// Deepest allowed entry (top-level groups are depth 1).
    pub max_depth: usize,
    /// Collapse state of groups when neither they nor an ancestor set one.
    pub collapsed: bool,
}

impl Default for NavigationOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            collapsed: false,
        }
    }
}

impl NavigationOptions {
    /// Options passed to the validator.
    #[must_use]
    pub fn validation(&self) -> ValidationOptions {
        ValidationOptions {
            max_depth: self.max_depth,
        }
    }
}

/// Pages before and after a page in traversal order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Adjacent<'a> {
    /// Previous page, `None` for the first page.
    pub previous: Option<&'a Leaf>,
    /// Next page, `None` for the last page.
    pub next: Option<&'a Leaf>,
}

/// Sidebar item prepared for rendering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavItem {
    /// Display label.
    pub label: String,
    /// Page slug (pages only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// Optional badge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<Badge>,
    /// Resolved collapse state (groups only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collapsed: Option<bool>,
    /// True for the page being viewed.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub current: bool,
    /// Child items.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavItem>,
}

/// Validated sidebar with lookup structures.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigation {
    tree: ValidatedTree,
    index: NavIndex,
    collapsed_default: bool,
}

impl Navigation {
    /// Index a validated tree.
    #[must_use]
    pub fn new(tree: ValidatedTree, collapsed_default: bool) -> Self {
        let index = NavIndex::build(&tree);
        Self {
            tree,
            index,
            collapsed_default,
        }
    }

    /// Validate a raw sidebar and index it.
    ///
    /// # Errors
    ///
    /// Returns every validation error found in the sidebar.
    pub fn from_raw(
        raw: &[RawEntry],
        options: NavigationOptions,
    ) -> Result<Self, ValidationErrors> {
        let tree = validate_with(raw, options.validation())?;
        let nav = Self::new(tree, options.collapsed);
        tracing::debug!(
            groups = nav.tree.group_count(),
            pages = nav.len(),
            "Navigation built"
        );
        Ok(nav)
    }

    /// Look up a page with its ancestor labels.
    ///
    /// The query is normalized like configured slugs, so `/cli/overview/`
    /// finds `cli/overview`.
    ///
    /// # Errors
    ///
    /// Returns [`NotFound`] if no page has this slug.
    pub fn lookup(&self, slug: &str) -> Result<&IndexEntry, NotFound> {
        self.index
            .get(normalize_slug(slug))
            .ok_or_else(|| NotFound(slug.to_owned()))
    }

    /// Ancestor group labels followed by the page's own label.
    ///
    /// # Errors
    ///
    /// Returns [`NotFound`] if no page has this slug.
    pub fn breadcrumb(&self, slug: &str) -> Result<Vec<&str>, NotFound> {
        let entry = self.lookup(slug)?;
        let mut crumbs: Vec<&str> = entry.ancestors.iter().map(String::as_str).collect();
        crumbs.push(entry.leaf.label());
        Ok(crumbs)
    }

    /// Previous and next pages in traversal order.
    ///
    /// # Errors
    ///
    /// Returns [`NotFound`] if no page has this slug.
    pub fn adjacent(&self, slug: &str) -> Result<Adjacent<'_>, NotFound> {
        let position = self.lookup(slug)?.position;
        let order = self.index.leaf_order();
        let leaf_at = |i: usize| {
            order
                .get(i)
                .and_then(|slug| self.index.get(slug))
                .map(|entry| &entry.leaf)
        };

        Ok(Adjacent {
            previous: position.checked_sub(1).and_then(leaf_at),
            next: leaf_at(position + 1),
        })
    }

    /// The whole validated tree.
    #[must_use]
    pub fn full_tree(&self) -> &ValidatedTree {
        &self.tree
    }

    /// Slugs in traversal order.
    #[must_use]
    pub fn leaf_order(&self) -> &[String] {
        self.index.leaf_order()
    }

    /// Whether a page with this slug exists.
    #[must_use]
    pub fn contains(&self, slug: &str) -> bool {
        self.index.get(normalize_slug(slug)).is_some()
    }

    /// Number of pages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// True when the sidebar has no pages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Render view of the whole sidebar.
    ///
    /// Groups resolve their collapse state from their own setting, then the
    /// nearest ancestor that sets one, then the global default. Groups
    /// containing `current` are always expanded. An unknown `current` slug
    /// marks nothing.
    #[must_use]
    pub fn items(&self, current: Option<&str>) -> Vec<NavItem> {
        let location = current
            .and_then(|slug| self.index.get(normalize_slug(slug)))
            .map(|entry| entry.location.as_slice());

        self.tree
            .groups()
            .iter()
            .enumerate()
            .map(|(i, group)| self.group_item(group, None, descend(location, i)))
            .collect()
    }

    /// Build the item for a group.
    ///
    /// `inherited` is the nearest explicit ancestor setting; `current` is the
    /// remaining location of the current page if it lies inside this group.
    fn group_item(
        &self,
        group: &Group,
        inherited: Option<bool>,
        current: Option<&[usize]>,
    ) -> NavItem {
        let explicit = group.collapsed().or(inherited);
        let collapsed = current.is_none() && explicit.unwrap_or(self.collapsed_default);

        let children = group
            .children()
            .iter()
            .enumerate()
            .map(|(i, child)| {
                let child_current = descend(current, i);
                match child {
                    NavNode::Group(inner) => self.group_item(inner, explicit, child_current),
                    NavNode::Leaf(leaf) => NavItem {
                        label: leaf.label().to_owned(),
                        slug: Some(leaf.slug().to_owned()),
                        badge: leaf.badge().cloned(),
                        collapsed: None,
                        current: child_current.is_some(),
                        children: Vec::new(),
                    },
                }
            })
            .collect();

        NavItem {
            label: group.label().to_owned(),
            slug: None,
            badge: group.badge().cloned(),
            collapsed: Some(collapsed),
            current: false,
            children,
        }
    }
}

/// Remaining location below child `index`, if the location passes through it.
fn descend(location: Option<&[usize]>, index: usize) -> Option<&[usize]> {
    match location?.split_first() {
        Some((&head, rest)) if head == index => Some(rest),
        _ => None,
    }
}
