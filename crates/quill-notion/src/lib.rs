//! Notion integration for Quill.
//!
//! This crate provides:
//! - Typed projections of Notion pages, blocks and rich text ([`Page`], [`Block`], [`RichTextSpan`])
//! - [`NotionClient`]: REST API client authenticated with an integration token
//! - [`ContentSource`]: the fetching seam used by the site, implemented by the client
//! - [`fetch_page_content`]: recursive, parallel resolution of a page's block tree
//!
//! # API Client
//!
//! ```ignore
//! use quill_config::Config;
//! use quill_notion::{ContentSource, NotionClient, fetch_page_content};
//!
//! let config = Config::load(None, None)?;
//! let client = NotionClient::from_config(config.require_notion()?);
//!
//! let page = client.get_page("0f2c…")?;
//! let blocks = fetch_page_content(&client, &page.id)?;
//! ```

mod client;
pub use client::NotionClient;

pub mod error;
pub use error::NotionError;

#[cfg(any(test, feature = "mock"))]
mod mock;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockSource;

mod source;
pub use source::{ContentSource, fetch_page_blocks_flat, fetch_page_content};

pub mod types;
pub use types::{Block, BlockKind, Page, Parent, RichTextSpan};
