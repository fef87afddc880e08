//! Reloadable sidebar handle.
//!
//! [`Sidebar`] owns the current [`Navigation`] snapshot for the lifetime of
//! the process.
//!
//! # Thread Safety
//!
//! - `current()` returns `Arc<Navigation>`; readers keep their snapshot for as
//!   long as they hold it, without further locking
//! - `reload()` builds the replacement off to the side and swaps the `Arc`
//!   only when the new sidebar is valid, so readers observe either the old or
//!   the new sidebar, never a mix
//! - Reloads are serialized by an internal `Mutex<()>`

use std::sync::{Arc, Mutex, PoisonError, RwLock};

use crate::error::ValidationErrors;
use crate::navigation::{Navigation, NavigationOptions};
use crate::source::{SidebarSource, SourceError};

/// Error returned when a sidebar cannot be (re)loaded.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Raw sidebar could not be read.
    #[error(transparent)]
    Source(#[from] SourceError),
    /// Raw sidebar is invalid.
    #[error(transparent)]
    Invalid(#[from] ValidationErrors),
}

/// Current sidebar plus the means to rebuild it.
pub struct Sidebar {
    source: Arc<dyn SidebarSource>,
    options: NavigationOptions,
    /// Serializes reload operations.
    reload_lock: Mutex<()>,
    /// Current snapshot (atomically swappable).
    current: RwLock<Arc<Navigation>>,
}

impl Sidebar {
    /// Load and validate the sidebar for the first time.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Source`] if the source fails and
    /// [`LoadError::Invalid`] with every validation error otherwise.
    pub fn load(
        source: Arc<dyn SidebarSource>,
        options: NavigationOptions,
    ) -> Result<Self, LoadError> {
        let navigation = build(source.as_ref(), options)?;

        Ok(Self {
            source,
            options,
            reload_lock: Mutex::new(()),
            current: RwLock::new(Arc::new(navigation)),
        })
    }

    /// Current navigation snapshot.
    #[must_use]
    pub fn current(&self) -> Arc<Navigation> {
        Arc::clone(&*self.current.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Options used for every build.
    #[must_use]
    pub fn options(&self) -> NavigationOptions {
        self.options
    }

    /// Rebuild from the source and swap in the result.
    ///
    /// On failure the previous snapshot stays current.
    ///
    /// # Errors
    ///
    /// Returns the error that prevented the rebuild.
    pub fn reload(&self) -> Result<Arc<Navigation>, LoadError> {
        let _guard = self
            .reload_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        let navigation = match build(self.source.as_ref(), self.options) {
            Ok(navigation) => Arc::new(navigation),
            Err(e) => {
                tracing::warn!(
                    source = %self.source.describe(),
                    error = %e,
                    "Sidebar reload failed, keeping previous sidebar"
                );
                return Err(e);
            }
        };

        *self
            .current
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Arc::clone(&navigation);

        Ok(navigation)
    }
}

/// Load, validate and index a sidebar.
fn build(source: &dyn SidebarSource, options: NavigationOptions) -> Result<Navigation, LoadError> {
    let raw = source.load()?;
    let navigation = Navigation::from_raw(&raw, options)?;

    tracing::info!(
        source = %source.describe(),
        groups = navigation.full_tree().group_count(),
        pages = navigation.len(),
        "Sidebar built"
    );

    Ok(navigation)
}
