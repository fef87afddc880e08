//! Raw sidebar configuration as written by authors.
//!
//! Every field is optional. Shape rules are checked by the validator, not by
//! deserialization.

use serde::Deserialize;

/// Raw sidebar: the ordered top-level entries.
pub type RawSidebar = Vec<RawEntry>;

/// Raw sidebar entry.
///
/// An entry with `items` is group-shaped, an entry with `slug` is leaf-shaped.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawEntry {
    /// Display label.
    #[serde(default)]
    pub label: Option<String>,
    /// Page slug (leaf entries).
    #[serde(default)]
    pub slug: Option<String>,
    /// Child entries (group entries).
    #[serde(default)]
    pub items: Option<Vec<RawEntry>>,
    /// Optional badge.
    #[serde(default)]
    pub badge: Option<RawBadge>,
    /// Collapse default (group entries).
    #[serde(default)]
    pub collapsed: Option<bool>,
}

impl RawEntry {
    /// Group-shaped entry.
    pub fn group(label: impl Into<String>, items: Vec<RawEntry>) -> Self {
        Self {
            label: Some(label.into()),
            items: Some(items),
            ..Self::default()
        }
    }

    /// Leaf-shaped entry.
    pub fn leaf(label: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            slug: Some(slug.into()),
            ..Self::default()
        }
    }

    /// Attach a badge.
    #[must_use]
    pub fn with_badge(mut self, badge: RawBadge) -> Self {
        self.badge = Some(badge);
        self
    }

    /// Set the collapse default.
    #[must_use]
    pub fn with_collapsed(mut self, collapsed: bool) -> Self {
        self.collapsed = Some(collapsed);
        self
    }

    /// Label or empty string when missing.
    #[must_use]
    pub fn label_str(&self) -> &str {
        self.label.as_deref().unwrap_or_default()
    }

    /// Shape of the entry.
    #[must_use]
    pub fn shape(&self) -> EntryShape<'_> {
        match (&self.items, &self.slug) {
            (Some(items), None) => EntryShape::Group(items),
            (None, Some(slug)) => EntryShape::Leaf(slug),
            (Some(items), Some(_)) => EntryShape::Ambiguous(Some(items.as_slice())),
            (None, None) => EntryShape::Ambiguous(None),
        }
    }
}

/// Shape of a raw entry.
#[derive(Debug, PartialEq, Eq)]
pub enum EntryShape<'a> {
    /// Has `items`.
    Group(&'a [RawEntry]),
    /// Has `slug`.
    Leaf(&'a str),
    /// Has both `items` and `slug`, or neither.
    Ambiguous(Option<&'a [RawEntry]>),
}

/// Raw badge: either `"text"` or `{ text, variant }`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged, deny_unknown_fields)]
pub enum RawBadge {
    /// Shorthand with the `default` variant.
    Text(String),
    /// Full form.
    Full {
        /// Badge text.
        text: String,
        /// Variant name, `default` when missing.
        #[serde(default)]
        variant: Option<String>,
    },
}

impl RawBadge {
    /// Full-form badge.
    pub fn new(text: impl Into<String>, variant: impl Into<String>) -> Self {
        Self::Full {
            text: text.into(),
            variant: Some(variant.into()),
        }
    }

    /// Badge text.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Text(text) | Self::Full { text, .. } => text,
        }
    }

    /// Variant name.
    #[must_use]
    pub fn variant(&self) -> &str {
        match self {
            Self::Full {
                variant: Some(variant),
                ..
            } => variant,
            _ => "default",
        }
    }
}

/// Top-level document when the sidebar is written in TOML.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct TomlSidebar {
    #[serde(default)]
    pub(crate) sidebar: RawSidebar,
}
