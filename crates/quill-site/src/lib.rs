//! Post listing, rendering and static site output for Quill.
//!
//! This crate provides:
//! - [`Site`]: published post listing and per-post rendering
//! - [`StaticSiteBuilder`]: writes the listing page and every post page to disk
//!
//! # Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use quill_notion::NotionClient;
//! use quill_site::{BuildConfig, Site, StaticSiteBuilder};
//!
//! let client = Arc::new(NotionClient::from_config(notion_config));
//! let site = Site::new(client);
//! let config = BuildConfig {
//!     site_title: "Latest Updates".to_owned(),
//!     site_description: String::new(),
//! };
//! let report = StaticSiteBuilder::new(site, config).build("dist".as_ref())?;
//! ```

mod builder;
mod error;
mod post;
mod site;
mod template;

pub use builder::{BuildConfig, BuildReport, FailedPost, StaticSiteBuilder};
pub use error::SiteError;
pub use post::Post;
pub use site::{RenderedPost, Site};
pub use template::{IndexData, PostPageData, render_index, render_post_page};

// Re-export TocEntry from quill-renderer for convenience
pub use quill_renderer::TocEntry;
