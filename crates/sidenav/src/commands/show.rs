//! `sidenav show` command implementation.

use clap::Args;
use sidenav_tree::{NavItem, Navigation, NotFound};

use super::SidebarArgs;
use crate::error::CliError;
use crate::output::print_json;

/// Arguments for the show command.
#[derive(Args)]
pub(crate) struct ShowArgs {
    #[command(flatten)]
    sidebar: SidebarArgs,

    /// Mark this page as current and expand the groups containing it.
    #[arg(long)]
    current: Option<String>,
}

impl ShowArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let sidebar = self.sidebar.load_sidebar()?;
        let items = render_items(&sidebar.current(), self.current.as_deref())?;
        print_json(&items)?;
        Ok(())
    }
}

/// Render view, rejecting a current page that is not in the sidebar.
fn render_items(nav: &Navigation, current: Option<&str>) -> Result<Vec<NavItem>, NotFound> {
    if let Some(slug) = current {
        nav.lookup(slug)?;
    }
    Ok(nav.items(current))
}
