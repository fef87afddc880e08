//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod page;
pub(crate) mod show;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use sidenav_config::{CliSettings, Config};
use sidenav_tree::{FileSource, Sidebar};

use crate::error::CliError;

pub(crate) use check::CheckArgs;
pub(crate) use page::PageArgs;
pub(crate) use show::ShowArgs;

/// Options shared by every command for locating the sidebar.
#[derive(Args, Debug, Default)]
pub(crate) struct SidebarArgs {
    /// Path to configuration file (default: auto-discover sidenav.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Sidebar definition file (overrides config).
    #[arg(short, long, env = "SIDENAV_SIDEBAR")]
    sidebar: Option<PathBuf>,

    /// Maximum nesting depth (overrides config).
    #[arg(long)]
    max_depth: Option<usize>,
}

impl SidebarArgs {
    /// Load configuration with these arguments applied.
    pub(crate) fn load_config(&self) -> Result<Config, CliError> {
        let cli_settings = CliSettings {
            sidebar_file: self.sidebar.clone(),
            max_depth: self.max_depth,
        };
        Ok(Config::load(self.config.as_deref(), Some(&cli_settings))?)
    }

    /// Load and validate the configured sidebar.
    pub(crate) fn load_sidebar(&self) -> Result<Sidebar, CliError> {
        let config = self.load_config()?;
        let source = FileSource::new(config.sidebar_resolved.file.clone())?;
        tracing::info!(path = %source.path().display(), "Loading sidebar");
        Ok(Sidebar::load(Arc::new(source), config.navigation_options())?)
    }
}
