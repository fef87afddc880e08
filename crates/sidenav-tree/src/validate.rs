//! Sidebar validation.
//!
//! Converts a [`RawSidebar`](crate::raw::RawSidebar) into a [`ValidatedTree`]
//! in a single depth-first pass. Validation is exhaustive: every problem in
//! the whole sidebar is collected and returned together, and no tree is
//! produced unless the list is empty.
//!
//! Sibling order is preserved exactly as written.

use std::collections::HashMap;

use crate::badge::{Badge, BadgeVariant};
use crate::error::{NodePath, ValidationError, ValidationErrorKind, ValidationErrors};
use crate::node::{NavNode, ValidatedTree};
use crate::raw::{EntryShape, RawBadge, RawEntry};

/// Default maximum nesting depth (top-level groups are depth 1).
pub const DEFAULT_MAX_DEPTH: usize = 8;

/// Validator settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValidationOptions {
    /// Deepest allowed entry.
    pub max_depth: usize,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Validate a raw sidebar with default options.
///
/// # Errors
///
/// Returns every validation error found in the sidebar.
pub fn validate(raw: &[RawEntry]) -> Result<ValidatedTree, ValidationErrors> {
    validate_with(raw, ValidationOptions::default())
}

/// Validate a raw sidebar.
///
/// # Errors
///
/// Returns every validation error found in the sidebar.
pub fn validate_with(
    raw: &[RawEntry],
    options: ValidationOptions,
) -> Result<ValidatedTree, ValidationErrors> {
    let mut validator = Validator::new(options);
    let mut groups = Vec::with_capacity(raw.len());

    for (index, entry) in raw.iter().enumerate() {
        let path = NodePath::root().child(index, entry.label_str());
        if matches!(entry.shape(), EntryShape::Leaf(_)) {
            validator.report(ValidationErrorKind::LeafAtTopLevel, path.clone());
        }
        if let Some(NavNode::Group(group)) = validator.visit(entry, path, 1) {
            groups.push(group);
        }
    }

    match ValidationErrors::from_vec(validator.errors) {
        None => Ok(ValidatedTree::new(groups)),
        Some(errors) => {
            for error in &errors {
                tracing::debug!(code = error.kind.code(), path = %error.path, "{}", error.kind);
            }
            tracing::warn!(count = errors.len(), "Sidebar validation failed");
            Err(errors)
        }
    }
}

/// Normalize a slug: trim whitespace and surrounding slashes.
#[must_use]
pub fn normalize_slug(slug: &str) -> &str {
    slug.trim().trim_matches('/')
}

/// State of one validation pass.
struct Validator {
    options: ValidationOptions,
    errors: Vec<ValidationError>,
    /// Normalized slug to the path of its first occurrence.
    seen_slugs: HashMap<String, NodePath>,
}

impl Validator {
    fn new(options: ValidationOptions) -> Self {
        Self {
            options,
            errors: Vec::new(),
            seen_slugs: HashMap::new(),
        }
    }

    fn report(&mut self, kind: ValidationErrorKind, path: NodePath) {
        self.errors.push(ValidationError::new(kind, path));
    }

    /// Validate one entry and its subtree.
    ///
    /// Returns the converted node when the entry has a usable shape. The
    /// returned value is discarded by the caller if any error was reported.
    fn visit(&mut self, entry: &RawEntry, path: NodePath, depth: usize) -> Option<NavNode> {
        if depth > self.options.max_depth {
            self.report(
                ValidationErrorKind::NestingTooDeep {
                    depth,
                    max: self.options.max_depth,
                },
                path,
            );
            return None;
        }

        let label = entry.label_str().trim();
        if label.is_empty() {
            self.report(ValidationErrorKind::EmptyLabel, path.clone());
        }

        let badge = entry
            .badge
            .as_ref()
            .and_then(|badge| self.check_badge(badge, &path));

        match entry.shape() {
            EntryShape::Group(items) => {
                if items.is_empty() {
                    self.report(ValidationErrorKind::EmptyGroup, path.clone());
                }
                let children = self.visit_children(items, &path, depth);
                Some(NavNode::group(label, children, badge, entry.collapsed))
            }
            EntryShape::Leaf(slug) => {
                let slug = self.check_slug(slug, &path)?;
                Some(NavNode::leaf(label, slug, badge))
            }
            EntryShape::Ambiguous(items) => {
                self.report(ValidationErrorKind::MalformedEntry, path.clone());
                if let Some(items) = items {
                    self.visit_children(items, &path, depth);
                }
                None
            }
        }
    }

    fn visit_children(&mut self, items: &[RawEntry], path: &NodePath, depth: usize) -> Vec<NavNode> {
        let mut children = Vec::with_capacity(items.len());
        for (index, child) in items.iter().enumerate() {
            let child_path = path.child(index, child.label_str());
            if let Some(node) = self.visit(child, child_path, depth + 1) {
                children.push(node);
            }
        }
        children
    }

    fn check_badge(&mut self, badge: &RawBadge, path: &NodePath) -> Option<Badge> {
        let text = badge.text().trim();
        if text.is_empty() {
            self.report(ValidationErrorKind::EmptyBadgeText, path.clone());
        }

        match badge.variant().parse::<BadgeVariant>() {
            Ok(variant) => Some(Badge::new(text, variant)),
            Err(unknown) => {
                self.report(
                    ValidationErrorKind::UnknownBadgeVariant(unknown.0),
                    path.clone(),
                );
                None
            }
        }
    }

    /// Normalize a slug and register it; `None` if empty or already taken.
    fn check_slug(&mut self, slug: &str, path: &NodePath) -> Option<String> {
        let slug = normalize_slug(slug);
        if slug.is_empty() {
            self.report(ValidationErrorKind::EmptySlug, path.clone());
            return None;
        }

        if let Some(first) = self.seen_slugs.get(slug) {
            let kind = ValidationErrorKind::DuplicateSlug {
                slug: slug.to_owned(),
                first: first.clone(),
            };
            self.report(kind, path.clone());
            return None;
        }

        self.seen_slugs.insert(slug.to_owned(), path.clone());
        Some(slug.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::navigation::{Navigation, NavigationOptions};
    use crate::node::Group;

    fn kinds(errors: &ValidationErrors) -> Vec<&'static str> {
        errors.iter().map(|e| e.kind.code()).collect()
    }

    fn getting_started() -> RawEntry {
        RawEntry::group(
            "Getting Started",
            vec![
                RawEntry::leaf("Introduction", "getting-started/introduction"),
                RawEntry::leaf("Installation", "getting-started/installation"),
            ],
        )
    }

    #[test]
    fn test_valid_sidebar_builds_tree() {
        let raw = vec![
            getting_started(),
            RawEntry::group("CLI", vec![RawEntry::leaf("Overview", "cli/overview")]),
        ];

        let tree = validate(&raw).unwrap();

        assert_eq!(tree.groups().len(), 2);
        assert_eq!(tree.groups()[0].label(), "Getting Started");
        assert_eq!(tree.groups()[0].children().len(), 2);
        assert_eq!(tree.groups()[1].label(), "CLI");
    }

    #[test]
    fn test_sibling_order_preserved() {
        let raw = vec![RawEntry::group(
            "Z",
            vec![
                RawEntry::leaf("Zeta", "z"),
                RawEntry::leaf("Alpha", "a"),
                RawEntry::leaf("Mu", "m"),
            ],
        )];

        let tree = validate(&raw).unwrap();

        let labels: Vec<_> = tree.groups()[0].children().iter().map(NavNode::label).collect();
        assert_eq!(labels, vec!["Zeta", "Alpha", "Mu"]);
    }

    #[test]
    fn test_leaf_at_top_level_rejected() {
        let raw = vec![getting_started(), RawEntry::leaf("Stray", "stray")];

        let errors = validate(&raw).unwrap_err();

        assert_eq!(kinds(&errors), vec!["leaf_at_top_level"]);
        assert_eq!(errors.errors()[0].path.to_string(), "Stray");
    }

    #[test]
    fn test_empty_label_rejected_with_path() {
        let raw = vec![RawEntry::group(
            "Guide",
            vec![RawEntry::leaf("   ", "guide/blank")],
        )];

        let errors = validate(&raw).unwrap_err();

        assert_eq!(kinds(&errors), vec!["empty_label"]);
        assert_eq!(errors.errors()[0].path.to_string(), "Guide > #0");
    }

    #[test]
    fn test_missing_label_reported_as_empty() {
        let raw = vec![RawEntry {
            items: Some(vec![RawEntry::leaf("A", "a")]),
            ..RawEntry::default()
        }];

        let errors = validate(&raw).unwrap_err();

        assert_eq!(kinds(&errors), vec!["empty_label"]);
    }

    #[test]
    fn test_known_badge_variant_accepted() {
        let raw = vec![RawEntry::group(
            "Guide",
            vec![RawEntry::leaf("Intro", "intro").with_badge(RawBadge::new("New", "success"))],
        )];

        let tree = validate(&raw).unwrap();

        let badge = tree.groups()[0].children()[0].badge().unwrap();
        assert_eq!(badge.text(), "New");
        assert_eq!(badge.variant(), BadgeVariant::Success);
    }

    #[test]
    fn test_unknown_badge_variant_rejected() {
        let raw = vec![RawEntry::group(
            "Guide",
            vec![
                RawEntry::leaf("Intro", "intro")
                    .with_badge(RawBadge::new("New", "unknown-variant")),
            ],
        )];

        let errors = validate(&raw).unwrap_err();

        assert_eq!(
            errors.errors()[0].kind,
            ValidationErrorKind::UnknownBadgeVariant("unknown-variant".to_owned())
        );
        assert_eq!(errors.errors()[0].message(), "unknown badge variant: unknown-variant");
    }

    #[test]
    fn test_empty_badge_text_rejected() {
        let raw = vec![
            RawEntry::group("Guide", vec![RawEntry::leaf("Intro", "intro")])
                .with_badge(RawBadge::Text(String::new())),
        ];

        let errors = validate(&raw).unwrap_err();

        assert_eq!(kinds(&errors), vec!["empty_badge_text"]);
    }

    #[test]
    fn test_empty_group_rejected_alongside_other_errors() {
        let raw = vec![
            getting_started(),
            RawEntry::group("Empty", Vec::new()),
            RawEntry::group("Blank", vec![RawEntry::leaf("", "blank/page")]),
        ];

        let errors = validate(&raw).unwrap_err();

        assert_eq!(kinds(&errors), vec!["empty_group", "empty_label"]);
        assert_eq!(errors.errors()[0].path.to_string(), "Empty");
    }

    #[test]
    fn test_duplicate_slug_names_both_paths() {
        let raw = vec![
            getting_started(),
            RawEntry::group(
                "Reference",
                vec![RawEntry::leaf("Install", "getting-started/installation")],
            ),
        ];

        let errors = validate(&raw).unwrap_err();

        assert_eq!(errors.len(), 1);
        let error = &errors.errors()[0];
        assert_eq!(error.path.to_string(), "Reference > Install");
        let ValidationErrorKind::DuplicateSlug { slug, first } = &error.kind else {
            panic!("expected duplicate slug, got {:?}", error.kind);
        };
        assert_eq!(slug, "getting-started/installation");
        assert_eq!(first.to_string(), "Getting Started > Installation");
    }

    #[test]
    fn test_duplicate_detection_uses_normalized_slug() {
        let raw = vec![RawEntry::group(
            "CLI",
            vec![
                RawEntry::leaf("Overview", "cli/overview"),
                RawEntry::leaf("Overview again", "/cli/overview/"),
            ],
        )];

        let errors = validate(&raw).unwrap_err();

        assert_eq!(kinds(&errors), vec!["duplicate_slug"]);
    }

    #[test]
    fn test_slug_is_normalized() {
        let raw = vec![RawEntry::group(
            "CLI",
            vec![RawEntry::leaf("Overview", " /cli/overview/ ")],
        )];

        let tree = validate(&raw).unwrap();

        let NavNode::Leaf(leaf) = &tree.groups()[0].children()[0] else {
            panic!("expected leaf");
        };
        assert_eq!(leaf.slug(), "cli/overview");
    }

    #[test]
    fn test_empty_slug_rejected() {
        let raw = vec![RawEntry::group("CLI", vec![RawEntry::leaf("Root", "/")])];

        let errors = validate(&raw).unwrap_err();

        assert_eq!(kinds(&errors), vec!["empty_slug"]);
    }

    #[test]
    fn test_malformed_entry_rejected_and_children_still_checked() {
        let raw = vec![RawEntry::group(
            "Guide",
            vec![
                RawEntry::default().with_collapsed(true),
                RawEntry {
                    label: Some("Both".to_owned()),
                    slug: Some("both".to_owned()),
                    items: Some(vec![RawEntry::leaf("", "inner")]),
                    ..RawEntry::default()
                },
            ],
        )];

        let errors = validate(&raw).unwrap_err();

        assert_eq!(
            kinds(&errors),
            vec!["empty_label", "malformed_entry", "malformed_entry", "empty_label"]
        );
        assert_eq!(errors.errors()[3].path.to_string(), "Guide > Both > #0");
    }

    #[test]
    fn test_nesting_too_deep_rejected() {
        let mut entry = RawEntry::leaf("Deep", "deep");
        for level in 0..4 {
            entry = RawEntry::group(format!("Level {level}"), vec![entry]);
        }
        let options = ValidationOptions { max_depth: 3 };

        let errors = validate_with(&[entry], options).unwrap_err();

        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.errors()[0].kind,
            ValidationErrorKind::NestingTooDeep { depth: 4, max: 3 }
        );
    }

    #[test]
    fn test_nesting_at_limit_accepted() {
        let mut entry = RawEntry::leaf("Deep", "deep");
        for level in 0..3 {
            entry = RawEntry::group(format!("Level {level}"), vec![entry]);
        }
        let options = ValidationOptions { max_depth: 4 };

        assert!(validate_with(&[entry], options).is_ok());
    }

    #[test]
    fn test_all_errors_collected() {
        let raw = vec![
            RawEntry::leaf("Top", "top"),
            RawEntry::group("", vec![RawEntry::leaf("A", "a"), RawEntry::leaf("B", "a")]),
            RawEntry::group("Empty", Vec::new()),
        ];

        let errors = validate(&raw).unwrap_err();

        assert_eq!(
            kinds(&errors),
            vec!["leaf_at_top_level", "empty_label", "duplicate_slug", "empty_group"]
        );
    }

    #[test]
    fn test_collapsed_setting_carried_to_group() {
        let raw = vec![getting_started().with_collapsed(true)];

        let tree = validate(&raw).unwrap();

        assert_eq!(tree.groups()[0].collapsed(), Some(true));
    }

    #[test]
    fn test_validation_is_idempotent() {
        let raw = vec![
            getting_started(),
            RawEntry::group("CLI", vec![RawEntry::leaf("Overview", "cli/overview")])
                .with_collapsed(false),
        ];

        let first = validate(&raw).unwrap();
        let second = validate(&raw).unwrap();

        assert_eq!(first, second);

        let options = NavigationOptions::default();
        let first_nav = Navigation::from_raw(&raw, options).unwrap();
        let second_nav = Navigation::from_raw(&raw, options).unwrap();

        assert_eq!(first_nav, second_nav);
        assert_eq!(first_nav.leaf_order(), second_nav.leaf_order());
    }

    #[test]
    fn test_empty_sidebar_is_valid() {
        let tree = validate(&[]).unwrap();

        assert_eq!(tree.groups(), &[] as &[Group]);
    }
}
