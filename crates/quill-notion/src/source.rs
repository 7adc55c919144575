//! Content fetching.
//!
//! [`ContentSource`] is the seam between the site and the Notion API. The
//! recursive helpers on top of it resolve a page's full block tree, fanning
//! out across siblings on the rayon pool and joining per parent.

use rayon::prelude::*;
use tracing::{debug, info};

use crate::client::NotionClient;
use crate::error::NotionError;
use crate::types::{Block, Page, Parent};

/// Read-only access to pages and blocks.
pub trait ContentSource: Send + Sync {
    /// Published pages in source order.
    fn list_published(&self) -> Result<Vec<Page>, NotionError>;

    /// A single page.
    ///
    /// Fails with [`NotionError::NotPublished`] when the publish gate is off.
    fn get_page(&self, page_id: &str) -> Result<Page, NotionError>;

    /// Direct children of a block or page (one level).
    fn get_block_children(&self, block_id: &str) -> Result<Vec<Block>, NotionError>;
}

impl ContentSource for NotionClient {
    fn list_published(&self) -> Result<Vec<Page>, NotionError> {
        self.query_published()
    }

    fn get_page(&self, page_id: &str) -> Result<Page, NotionError> {
        self.retrieve_page(page_id)
    }

    fn get_block_children(&self, block_id: &str) -> Result<Vec<Block>, NotionError> {
        self.list_block_children(block_id)
    }
}

/// Fetch a page's blocks with every descendant attached.
///
/// Children of sibling blocks are fetched in parallel; a parent is returned
/// only after all of its subtrees are complete. The first failure aborts the
/// whole page.
pub fn fetch_page_content(
    source: &dyn ContentSource,
    page_id: &str,
) -> Result<Vec<Block>, NotionError> {
    info!("Fetching content of page {}", page_id);
    let top_level = source.get_block_children(page_id)?;
    resolve_children(source, top_level, &[page_id.to_owned()])
}

/// Fetch a page's blocks as one flat list annotated with parent references.
///
/// Blocks appear in document order (each parent precedes its children).
/// Parent references are rewritten from the fetched structure: top-level
/// blocks point at `page_id` exactly as passed, every other block at its
/// owning block. The list can be rebuilt into a tree with `page_id` as root.
pub fn fetch_page_blocks_flat(
    source: &dyn ContentSource,
    page_id: &str,
) -> Result<Vec<Block>, NotionError> {
    let forest = fetch_page_content(source, page_id)?;
    let mut flat = Vec::new();
    flatten_into(forest, &Parent::page(page_id), &mut flat);
    Ok(flat)
}

fn resolve_children(
    source: &dyn ContentSource,
    blocks: Vec<Block>,
    ancestors: &[String],
) -> Result<Vec<Block>, NotionError> {
    blocks
        .into_par_iter()
        .map(|mut block| {
            if !block.has_children || !block.children.is_empty() {
                return Ok(block);
            }
            if ancestors.contains(&block.id) {
                return Err(NotionError::Cycle { block_id: block.id });
            }

            debug!("Resolving children of {} ({})", block.id, block.type_name());
            let children = source.get_block_children(&block.id)?;

            let mut path = ancestors.to_vec();
            path.push(block.id.clone());
            block.children = resolve_children(source, children, &path)?;
            block.has_children = !block.children.is_empty();
            Ok(block)
        })
        .collect()
}

fn flatten_into(blocks: Vec<Block>, parent: &Parent, out: &mut Vec<Block>) {
    for mut block in blocks {
        let children = std::mem::take(&mut block.children);
        let own = Parent::block(block.id.clone());
        block.parent = Some(parent.clone());
        out.push(block);
        flatten_into(children, &own, out);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::mock::MockSource;
    use crate::types::{BlockKind, TextBlock};

    fn paragraph(id: &str) -> Block {
        Block::new(id, BlockKind::Paragraph(TextBlock::default()))
    }

    fn toggle(id: &str) -> Block {
        Block::new(id, BlockKind::Toggle(TextBlock::default())).with_unresolved_children()
    }

    fn ids(blocks: &[Block]) -> Vec<&str> {
        blocks.iter().map(|b| b.id.as_str()).collect()
    }

    #[test]
    fn test_fetch_resolves_all_levels() {
        let source = MockSource::new()
            .with_children("page", vec![paragraph("a"), toggle("t1"), paragraph("b")])
            .with_children("t1", vec![toggle("t2"), paragraph("c")])
            .with_children("t2", vec![paragraph("d")]);

        let blocks = fetch_page_content(&source, "page").unwrap();

        assert_eq!(ids(&blocks), vec!["a", "t1", "b"]);
        assert_eq!(ids(&blocks[1].children), vec!["t2", "c"]);
        assert_eq!(ids(&blocks[1].children[0].children), vec!["d"]);
    }

    #[test]
    fn test_fetch_preserves_sibling_order_with_many_subtrees() {
        let mut source = MockSource::new();
        let mut top = Vec::new();
        for i in 0..32 {
            let id = format!("t{i}");
            source = source.with_children(&id, vec![paragraph(&format!("{id}-child"))]);
            top.push(toggle(&id));
        }
        source = source.with_children("page", top);

        let blocks = fetch_page_content(&source, "page").unwrap();

        for (i, block) in blocks.iter().enumerate() {
            assert_eq!(block.id, format!("t{i}"));
            assert_eq!(block.children[0].id, format!("t{i}-child"));
        }
    }

    #[test]
    fn test_fetch_failure_aborts_page() {
        let source = MockSource::new()
            .with_children("page", vec![toggle("ok"), toggle("broken")])
            .with_children("ok", vec![paragraph("x")])
            .with_failure("broken");

        let err = fetch_page_content(&source, "page").unwrap_err();

        assert!(matches!(err, NotionError::HttpResponse { status: 500, .. }));
    }

    #[test]
    fn test_fetch_detects_cycle() {
        let source = MockSource::new()
            .with_children("page", vec![toggle("loop")])
            .with_children("loop", vec![toggle("loop")]);

        let err = fetch_page_content(&source, "page").unwrap_err();

        assert!(matches!(err, NotionError::Cycle { block_id } if block_id == "loop"));
    }

    #[test]
    fn test_fetch_flat_annotates_parents() {
        let source = MockSource::new()
            .with_children("page", vec![toggle("t"), paragraph("p")])
            .with_children("t", vec![paragraph("c")]);

        let flat = fetch_page_blocks_flat(&source, "page").unwrap();

        assert_eq!(ids(&flat), vec!["t", "c", "p"]);
        assert_eq!(flat[0].parent_id(), Some("page"));
        assert_eq!(flat[1].parent_id(), Some("t"));
        assert!(flat.iter().all(|b| b.children.is_empty()));
        assert!(flat[0].has_children);
    }

    #[test]
    fn test_fetch_flat_rewrites_api_page_parent() {
        let top = paragraph("a").with_parent(Parent::page("0f2c9a1b-0000-4000-8000-000000000000"));
        let source = MockSource::new().with_children("0f2c9a1b", vec![top]);

        let flat = fetch_page_blocks_flat(&source, "0f2c9a1b").unwrap();

        assert_eq!(flat[0].parent_id(), Some("0f2c9a1b"));
    }
}
