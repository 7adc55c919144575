//! `quill render` command implementation.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use quill_config::CliSettings;
use quill_site::{PostPageData, render_post_page};

use super::{CommonArgs, open_site};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Notion page ID of the post.
    page_id: String,

    /// Write the page to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[command(flatten)]
    pub(crate) common: CommonArgs,
}

impl RenderArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let (_, site) = open_site(self.common.config.as_deref(), &CliSettings::default())?;
        let rendered = site.render_post(&self.page_id)?;

        for warning in &rendered.content.warnings {
            output.warning(&format!("Warning: {warning}"));
        }

        let html = render_post_page(&PostPageData {
            post: &rendered.post,
            html_content: &rendered.content.html,
            toc: &rendered.content.toc,
        });

        match &self.output {
            Some(path) => {
                std::fs::write(path, html)?;
                output.success(&format!("Wrote {}", path.display()));
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(html.as_bytes())?;
                stdout.flush()?;
            }
        }
        Ok(())
    }
}
