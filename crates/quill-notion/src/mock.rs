//! Mock content source for testing.
//!
//! Provides [`MockSource`] for unit testing without network access.

use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use crate::error::NotionError;
use crate::source::ContentSource;
use crate::types::{Block, Page};

/// In-memory content source.
///
/// Use the builder methods to configure pages, block children and failures.
///
/// # Example
///
/// ```ignore
/// use quill_notion::{ContentSource, MockSource};
///
/// let source = MockSource::new()
///     .with_page(page, vec![paragraph]);
///
/// let pages = source.list_published()?;
/// ```
#[derive(Debug)]
pub struct MockSource {
    published_property: String,
    pages: RwLock<Vec<Page>>,
    children: RwLock<HashMap<String, Vec<Block>>>,
    failures: RwLock<HashSet<String>>,
}

impl Default for MockSource {
    fn default() -> Self {
        Self {
            published_property: "Published".to_owned(),
            pages: RwLock::new(Vec::new()),
            children: RwLock::new(HashMap::new()),
            failures: RwLock::new(HashSet::new()),
        }
    }
}

impl MockSource {
    /// Create a new empty mock source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a page and its top-level blocks.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_page(self, page: Page, blocks: Vec<Block>) -> Self {
        let id = page.id.clone();
        self.pages.write().unwrap().push(page);
        self.with_children(&id, blocks)
    }

    /// Set the direct children returned for a block or page ID.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_children(self, parent_id: &str, blocks: Vec<Block>) -> Self {
        self.children
            .write()
            .unwrap()
            .insert(parent_id.to_owned(), blocks);
        self
    }

    /// Make every fetch touching this ID fail with a server error.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_failure(self, id: &str) -> Self {
        self.failures.write().unwrap().insert(id.to_owned());
        self
    }

    fn check_failure(&self, id: &str) -> Result<(), NotionError> {
        if self.failures.read().unwrap().contains(id) {
            return Err(NotionError::HttpResponse {
                status: 500,
                body: format!("mock failure for {id}"),
            });
        }
        Ok(())
    }
}

impl ContentSource for MockSource {
    fn list_published(&self) -> Result<Vec<Page>, NotionError> {
        Ok(self
            .pages
            .read()
            .unwrap()
            .iter()
            .filter(|page| page.is_published(&self.published_property))
            .cloned()
            .collect())
    }

    fn get_page(&self, page_id: &str) -> Result<Page, NotionError> {
        self.check_failure(page_id)?;
        let page = self
            .pages
            .read()
            .unwrap()
            .iter()
            .find(|page| page.id == page_id)
            .cloned()
            .ok_or_else(|| NotionError::NotFound(format!("page {page_id}")))?;
        if !page.is_published(&self.published_property) {
            return Err(NotionError::NotPublished {
                page_id: page_id.to_owned(),
            });
        }
        Ok(page)
    }

    fn get_block_children(&self, block_id: &str) -> Result<Vec<Block>, NotionError> {
        self.check_failure(block_id)?;
        self.children
            .read()
            .unwrap()
            .get(block_id)
            .cloned()
            .ok_or_else(|| NotionError::NotFound(format!("block {block_id}")))
    }
}
