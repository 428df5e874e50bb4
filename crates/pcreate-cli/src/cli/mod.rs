//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases
//! and help text.  No business logic lives here.

use clap::Parser;

use pcreate_core::domain::Invocation;

pub mod global;
pub use global::GlobalArgs;

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name     = "pcreate",
    bin_name = "pcreate",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Render web application scaffolds into a new project directory",
    after_help = "EXAMPLES:\n\
        \x20 pcreate --list\n\
        \x20 pcreate -s starter MyProject\n\
        \x20 pcreate -s starter -s alchemy ../shop --overwrite\n\
        \x20 pcreate -s alchemy MyProject --simulate -v",
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    /// List all available scaffold names.
    #[arg(short = 'l', long = "list")]
    pub list: bool,

    /// Add a scaffold to render (repeatable).
    #[arg(short = 's', long = "scaffold", value_name = "NAME")]
    pub scaffolds: Vec<String>,

    /// Project name or output directory.
    #[arg(value_name = "PROJECT")]
    pub project: Option<String>,

    /// Report what would be written without writing anything.
    #[arg(long)]
    pub simulate: bool,

    /// Replace existing files whose content differs.
    #[arg(long)]
    pub overwrite: bool,

    /// Allow a project named after the framework distribution.
    #[arg(long = "ignore-conflicting-name")]
    pub ignore_conflicting_name: bool,
}

impl Cli {
    /// Build the request handed to the create service.
    pub fn to_invocation(&self) -> Invocation {
        Invocation::builder()
            .list(self.list)
            .scaffolds(self.scaffolds.iter().cloned())
            .maybe_project(self.project.clone())
            .simulate(self.simulate)
            .overwrite(self.overwrite)
            .ignore_conflicting_name(self.ignore_conflicting_name)
            .build()
    }
}
