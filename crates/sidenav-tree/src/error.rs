//! Validation error types.

use std::fmt;

use serde::Serialize;

/// One step in a [`NodePath`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct PathSegment {
    /// Position among siblings (zero-based).
    pub index: usize,
    /// Label of the entry at this position (may be blank).
    pub label: String,
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = self.label.trim();
        if label.is_empty() {
            write!(f, "#{}", self.index)
        } else {
            f.write_str(label)
        }
    }
}

/// Location of an entry in the raw sidebar, from the top level down.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct NodePath(Vec<PathSegment>);

impl NodePath {
    /// Empty path (the sidebar root).
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Path extended by one child segment.
    #[must_use]
    pub fn child(&self, index: usize, label: &str) -> Self {
        let mut segments = self.0.clone();
        segments.push(PathSegment {
            index,
            label: label.to_owned(),
        });
        Self(segments)
    }

    /// Segments from the top level down.
    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    /// Number of segments.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("<root>");
        }
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" > ")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

/// Kind of configuration-authoring error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationErrorKind {
    /// Top-level entry is a page instead of a group.
    #[error("leaf at top level")]
    LeafAtTopLevel,
    /// Label is missing or blank.
    #[error("empty label")]
    EmptyLabel,
    /// Badge variant outside the registry.
    #[error("unknown badge variant: {0}")]
    UnknownBadgeVariant(String),
    /// Badge text is blank.
    #[error("empty badge text")]
    EmptyBadgeText,
    /// Group without children.
    #[error("empty group")]
    EmptyGroup,
    /// Slug is blank after normalization.
    #[error("empty slug")]
    EmptySlug,
    /// Slug already used by another page.
    #[error("duplicate slug: {slug} (first defined at {first})")]
    DuplicateSlug {
        /// Normalized slug.
        slug: String,
        /// Location of the first occurrence.
        first: NodePath,
    },
    /// Entry nested deeper than allowed.
    #[error("nesting too deep: depth {depth} exceeds maximum of {max}")]
    NestingTooDeep {
        /// Depth of the entry (top-level groups are depth 1).
        depth: usize,
        /// Configured maximum.
        max: usize,
    },
    /// Entry has both `slug` and `items`, or neither.
    #[error("entry must have exactly one of `slug` or `items`")]
    MalformedEntry,
}

impl ValidationErrorKind {
    /// Stable machine-readable code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::LeafAtTopLevel => "leaf_at_top_level",
            Self::EmptyLabel => "empty_label",
            Self::UnknownBadgeVariant(_) => "unknown_badge_variant",
            Self::EmptyBadgeText => "empty_badge_text",
            Self::EmptyGroup => "empty_group",
            Self::EmptySlug => "empty_slug",
            Self::DuplicateSlug { .. } => "duplicate_slug",
            Self::NestingTooDeep { .. } => "nesting_too_deep",
            Self::MalformedEntry => "malformed_entry",
        }
    }
}

/// Validation error located in the raw sidebar.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{path}: {kind}")]
pub struct ValidationError {
    /// What is wrong.
    pub kind: ValidationErrorKind,
    /// Where it is wrong.
    pub path: NodePath,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, path: NodePath) -> Self {
        Self { kind, path }
    }

    /// Human-readable message without the path.
    #[must_use]
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

/// Every error found in one validation pass. Never empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    /// Wrap collected errors; `None` when there are none.
    pub(crate) fn from_vec(errors: Vec<ValidationError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self(errors))
        }
    }

    /// Errors in discovery order.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    /// Number of errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when there are no errors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the errors.
    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sidebar has {} error(s)", self.0.len())?;
        for error in &self.0 {
            write!(f, "\n  {error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Error returned by queries for a slug that is not in the sidebar.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("page not found: {0}")]
pub struct NotFound(pub String);
