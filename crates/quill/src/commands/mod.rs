//! CLI command implementations.

mod build;
mod list;
mod render;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Args;
use quill_config::{CliSettings, Config};
use quill_notion::NotionClient;
use quill_site::Site;

use crate::error::CliError;

pub(crate) use build::BuildArgs;
pub(crate) use list::ListArgs;
pub(crate) use render::RenderArgs;

/// Options shared by every command.
#[derive(Args)]
pub(crate) struct CommonArgs {
    /// Path to configuration file (default: auto-discover quill.toml).
    #[arg(short, long)]
    pub(crate) config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

/// Load configuration and connect a site to the Notion API.
fn open_site(
    config_path: Option<&Path>,
    cli_settings: &CliSettings,
) -> Result<(Config, Site), CliError> {
    let config = Config::load(config_path, Some(cli_settings))?;
    let client = NotionClient::from_config(config.require_notion()?);
    let site = Site::new(Arc::new(client));
    Ok((config, site))
}
