//! Notion block tree renderer.
//!
//! Rendering a page runs in stages:
//! 1. [`Forest`] validates and normalizes the fetched blocks into a tree
//! 2. [`group_lists`] merges adjacent list items at each sibling level
//! 3. [`render_block`] maps each block to a [`Node`], children first
//! 4. [`to_html`] writes the presentation tree as HTML
//!
//! [`BlockRenderer`] runs stages 2-4 and collects a table of contents.
//!
//! # Example
//!
//! ```ignore
//! use quill_renderer::{BlockRenderer, Forest};
//!
//! let forest = Forest::from_nested(blocks)?;
//! let result = BlockRenderer::new().render(&forest);
//! println!("{}", result.html);
//! ```

pub mod block;
pub mod group;
pub mod html;
pub mod node;
mod renderer;
pub mod rich_text;
pub mod tree;
mod util;

pub use block::render_block;
pub use group::{ListGroup, Sibling, group_lists};
pub use html::to_html;
pub use node::{Cell, InlineStyle, ListKind, Node};
pub use renderer::{BlockRenderer, RenderResult, TocEntry};
pub use rich_text::{color_class, compose_rich_text, compose_span};
pub use tree::{Forest, TreeError};
pub use util::{convert_to_embed_url, is_tweet_url};
