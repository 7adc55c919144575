//! `quill build` command implementation.

use std::path::PathBuf;

use clap::Args;
use quill_config::CliSettings;
use quill_site::{BuildConfig, StaticSiteBuilder};

use super::{CommonArgs, open_site};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Output directory for the generated site (default: dist/ next to the config).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Notion database ID (overrides config).
    #[arg(long, env = "QUILL_DATABASE_ID")]
    database_id: Option<String>,

    #[command(flatten)]
    pub(crate) common: CommonArgs,
}

impl BuildArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            output_dir: self.output_dir,
            database_id: self.database_id,
        };
        let (config, site) = open_site(self.common.config.as_deref(), &cli_settings)?;
        let output_dir = config.site_resolved.output_dir.clone();

        output.info(&format!("Output: {}", output_dir.display()));

        let build_config = BuildConfig {
            site_title: config.site_resolved.title.clone(),
            site_description: config.site_resolved.description.clone(),
        };
        let report = StaticSiteBuilder::new(site, build_config).build(&output_dir)?;

        for failed in &report.failed {
            output.warning(&format!("Skipped {}: {}", failed.id, failed.error));
        }
        output.success(&format!(
            "Site built successfully to {} ({} pages)",
            output_dir.display(),
            report.written.len()
        ));
        Ok(())
    }
}
