//! Whole-page rendering.

use quill_notion::types::plain_text;
use quill_notion::{Block, BlockKind};

use crate::block::render_block;
use crate::group::{Sibling, group_lists};
use crate::html::to_html;
use crate::node::Node;
use crate::tree::Forest;

/// Table of contents entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TocEntry {
    /// Heading level (1-3).
    pub level: u8,
    /// Heading text.
    pub title: String,
    /// Anchor ID for linking.
    pub id: String,
}

/// Result of rendering a page.
#[derive(Clone, Debug)]
pub struct RenderResult {
    /// Presentation tree of the page body.
    pub nodes: Vec<Node>,
    /// Rendered HTML.
    pub html: String,
    /// Headings in document order.
    pub toc: Vec<TocEntry>,
    /// One entry per block the renderer could not handle.
    pub warnings: Vec<String>,
}

/// Renders a validated [`Forest`].
///
/// Each sibling level is list-grouped, then rendered bottom-up so every
/// block receives its children already rendered.
#[derive(Debug, Default)]
pub struct BlockRenderer {
    toc: Vec<TocEntry>,
    warnings: Vec<String>,
}

impl BlockRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the forest to a presentation tree and HTML.
    pub fn render(mut self, forest: &Forest) -> RenderResult {
        let nodes = self.render_level(forest.roots());
        let html = to_html(&nodes);
        RenderResult {
            nodes,
            html,
            toc: self.toc,
            warnings: self.warnings,
        }
    }

    fn render_level(&mut self, blocks: &[Block]) -> Vec<Node> {
        group_lists(Sibling::from_blocks(blocks))
            .into_iter()
            .map(|sibling| match sibling {
                Sibling::Block(block) => self.render_one(block),
                Sibling::List(group) => Node::List {
                    kind: group.kind,
                    items: group
                        .items
                        .into_iter()
                        .map(|item| self.render_one(item))
                        .collect(),
                },
            })
            .collect()
    }

    fn render_one(&mut self, block: &Block) -> Node {
        self.record(block);
        let children = self.render_level(&block.children);
        render_block(block, children)
    }

    fn record(&mut self, block: &Block) {
        let (level, text) = match &block.kind {
            BlockKind::Heading1(text) => (1, text),
            BlockKind::Heading2(text) => (2, text),
            BlockKind::Heading3(text) => (3, text),
            BlockKind::Unsupported { type_name } => {
                tracing::warn!(block_id = %block.id, %type_name, "Unsupported block type");
                self.warnings
                    .push(format!("Unsupported block type {type_name} ({})", block.id));
                return;
            }
            _ => return,
        };
        self.toc.push(TocEntry {
            level,
            title: plain_text(&text.rich_text),
            id: block.id.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use quill_notion::types::TextBlock;
    use quill_notion::{Parent, RichTextSpan};

    use super::*;
    use crate::node::ListKind;

    fn text(kind: fn(TextBlock) -> BlockKind, id: &str, s: &str) -> Block {
        Block::new(id, kind(TextBlock::new(vec![RichTextSpan::new(s)])))
    }

    #[test]
    fn test_render_groups_lists_at_every_level() {
        let forest = Forest::from_nested(vec![
            text(BlockKind::BulletedListItem, "b1", "one").with_children(vec![
                text(BlockKind::NumberedListItem, "n1", "a"),
                text(BlockKind::NumberedListItem, "n2", "b"),
            ]),
            text(BlockKind::BulletedListItem, "b2", "two"),
        ])
        .unwrap();

        let result = BlockRenderer::new().render(&forest);

        assert_eq!(result.nodes.len(), 1);
        let Node::List { kind, items } = &result.nodes[0] else {
            panic!("expected list");
        };
        assert_eq!(*kind, ListKind::Bulleted);
        assert_eq!(items.len(), 2);
        let Node::ListItem { children, .. } = &items[0] else {
            panic!("expected list item");
        };
        assert!(matches!(&children[0], Node::List { kind: ListKind::Numbered, items } if items.len() == 2));
        assert_eq!(result.html.matches("<ul>").count(), 1);
        assert_eq!(result.html.matches("<ol>").count(), 1);
    }

    #[test]
    fn test_toc_collects_headings_in_order() {
        let forest = Forest::from_nested(vec![
            text(BlockKind::Heading1, "h1", "Intro"),
            text(BlockKind::Paragraph, "p", "body"),
            text(BlockKind::Heading3, "h3", "Detail"),
        ])
        .unwrap();

        let result = BlockRenderer::new().render(&forest);

        assert_eq!(
            result.toc,
            vec![
                TocEntry {
                    level: 1,
                    title: "Intro".to_owned(),
                    id: "h1".to_owned()
                },
                TocEntry {
                    level: 3,
                    title: "Detail".to_owned(),
                    id: "h3".to_owned()
                },
            ]
        );
    }

    #[test]
    fn test_unsupported_block_warns_and_renders_fallback() {
        let forest = Forest::from_nested(vec![Block::new(
            "s1",
            BlockKind::Unsupported {
                type_name: "synced_block".to_owned(),
            },
        )])
        .unwrap();

        let result = BlockRenderer::new().render(&forest);

        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].contains("synced_block"));
        assert!(result.html.contains("Unsupported block type. synced_block"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let flat = vec![
            text(BlockKind::Toggle, "t", "More")
                .with_parent(Parent::page("page"))
                .with_unresolved_children(),
            text(BlockKind::Paragraph, "p", "inside").with_parent(Parent::block("t")),
        ];
        let forest = Forest::from_flat("page", flat).unwrap();

        let first = BlockRenderer::new().render(&forest);
        let second = BlockRenderer::new().render(&forest);

        assert_eq!(first.html, second.html);
        assert!(first.html.starts_with("<details><summary>"));
    }

    #[test]
    fn test_empty_forest() {
        let result = BlockRenderer::new().render(&Forest::default());
        assert!(result.html.is_empty());
        assert!(result.toc.is_empty());
    }
}
