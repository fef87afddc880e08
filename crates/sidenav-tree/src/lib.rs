//! Sidebar navigation tree for documentation sites.
//!
//! This crate provides:
//! - [`validate`]: turns a raw, author-written sidebar into a [`ValidatedTree`],
//!   reporting every problem at once
//! - [`Navigation`]: slug lookup, breadcrumbs, previous/next links and a render
//!   view over a validated tree
//! - [`Sidebar`]: the process-wide navigation snapshot with atomic reload
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::sync::Arc;
//! use sidenav_tree::{FileSource, NavigationOptions, Sidebar};
//!
//! let source = Arc::new(FileSource::new("sidebar.yaml")?);
//! let sidebar = Sidebar::load(source, NavigationOptions::default())?;
//!
//! let nav = sidebar.current();
//! let crumbs = nav.breadcrumb("getting-started/introduction")?;
//! let links = nav.adjacent("getting-started/introduction")?;
//! # Ok(())
//! # }
//! ```

mod badge;
mod error;
mod index;
mod navigation;
mod node;
mod raw;
mod sidebar;
mod source;
mod validate;

pub use badge::{Badge, BadgeVariant, UnknownVariant, all_variants, is_valid_variant};
pub use error::{
    NodePath, NotFound, PathSegment, ValidationError, ValidationErrorKind, ValidationErrors,
};
pub use index::{IndexEntry, NavIndex};
pub use navigation::{Adjacent, NavItem, Navigation, NavigationOptions};
pub use node::{Group, Leaf, NavNode, ValidatedTree};
pub use raw::{EntryShape, RawBadge, RawEntry, RawSidebar};
pub use sidebar::{LoadError, Sidebar};
pub use source::{FileSource, SidebarFormat, SidebarSource, SourceError, StaticSource};
pub use validate::{
    DEFAULT_MAX_DEPTH, ValidationOptions, normalize_slug, validate, validate_with,
};
