//! `quill list` command implementation.

use clap::Args;
use quill_config::CliSettings;

use super::{CommonArgs, open_site};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the list command.
#[derive(Args)]
pub(crate) struct ListArgs {
    #[command(flatten)]
    pub(crate) common: CommonArgs,
}

impl ListArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let (config, site) = open_site(self.common.config.as_deref(), &CliSettings::default())?;
        let posts = site.list_posts()?;

        output.highlight(&config.site_resolved.title);
        if posts.is_empty() {
            output.info("No published posts.");
        }
        for post in &posts {
            output.post(post);
        }
        Ok(())
    }
}
