//! `sidenav page` command implementation.

use clap::Args;
use serde::Serialize;
use sidenav_tree::{Leaf, Navigation, NotFound};

use super::SidebarArgs;
use crate::error::CliError;
use crate::output::print_json;

/// Arguments for the page command.
#[derive(Args)]
pub(crate) struct PageArgs {
    /// Page slug to look up.
    slug: String,

    #[command(flatten)]
    sidebar: SidebarArgs,
}

/// Navigation details for one page.
#[derive(Debug, Serialize)]
struct PageReport<'a> {
    slug: &'a str,
    label: &'a str,
    breadcrumb: Vec<&'a str>,
    previous: Option<&'a Leaf>,
    next: Option<&'a Leaf>,
}

impl PageArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let sidebar = self.sidebar.load_sidebar()?;
        let nav = sidebar.current();
        print_json(&page_report(&nav, &self.slug)?)?;
        Ok(())
    }
}

fn page_report<'a>(nav: &'a Navigation, slug: &str) -> Result<PageReport<'a>, NotFound> {
    let entry = nav.lookup(slug)?;
    let adjacent = nav.adjacent(slug)?;

    Ok(PageReport {
        slug: entry.leaf.slug(),
        label: entry.leaf.label(),
        breadcrumb: nav.breadcrumb(slug)?,
        previous: adjacent.previous,
        next: adjacent.next,
    })
}
