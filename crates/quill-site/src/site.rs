//! Post listing and rendering.
//!
//! [`Site`] orchestrates one post at a time: publish gate, recursive fetch,
//! tree validation, list grouping and rendering. A failure affects only the
//! post being rendered.

use std::sync::Arc;

use quill_notion::{ContentSource, fetch_page_content};
use quill_renderer::{BlockRenderer, Forest, RenderResult};
use tracing::info;

use crate::error::SiteError;
use crate::post::Post;

/// A post with its rendered body.
#[derive(Clone, Debug)]
pub struct RenderedPost {
    pub post: Post,
    pub content: RenderResult,
}

/// Blog backed by a content source.
pub struct Site {
    source: Arc<dyn ContentSource>,
}

impl Site {
    /// Create a site reading from `source`.
    #[must_use]
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        Self { source }
    }

    /// Published posts, newest first.
    ///
    /// Posts created at the same instant keep their source order.
    pub fn list_posts(&self) -> Result<Vec<Post>, SiteError> {
        let mut posts: Vec<Post> = self
            .source
            .list_published()?
            .iter()
            .map(Post::from)
            .collect();
        posts.sort_by(|a, b| b.created_time.cmp(&a.created_time));
        info!("Listed {} published posts", posts.len());
        Ok(posts)
    }

    /// Metadata of one post.
    ///
    /// Fails with [`SiteError::NotPublished`] for unpublished pages.
    pub fn get_post_by_id(&self, id: &str) -> Result<Post, SiteError> {
        let page = self.source.get_page(id)?;
        Ok(Post::from(&page))
    }

    /// Fetch and render one post.
    pub fn render_post(&self, id: &str) -> Result<RenderedPost, SiteError> {
        let post = self.get_post_by_id(id)?;
        let blocks = fetch_page_content(self.source.as_ref(), id)?;
        let forest = Forest::from_nested(blocks)?;
        let content = BlockRenderer::new().render(&forest);
        info!(
            "Rendered post {} ({} blocks, {} warnings)",
            id,
            forest.len(),
            content.warnings.len()
        );
        Ok(RenderedPost { post, content })
    }
}
