//! Block to presentation node mapping.

use quill_notion::types::{CodeBlock, MediaBlock, MediaSource, TableBlock, TextBlock};
use quill_notion::{Block, BlockKind, RichTextSpan};

use crate::node::{Cell, Node};
use crate::rich_text::compose_rich_text;
use crate::util::{convert_to_embed_url, is_tweet_url};

const DEFAULT_CODE_LANGUAGE: &str = "text";

/// Render one block given its already rendered children.
///
/// Children must be rendered and list-grouped by the caller. Container blocks
/// (list items, quote, toggle, table, columns) place them inside; other blocks
/// that still have children are followed by a nested container holding them.
pub fn render_block(block: &Block, children: Vec<Node>) -> Node {
    match &block.kind {
        BlockKind::Paragraph(text) => {
            with_nested(Node::Paragraph(compose_rich_text(&text.rich_text)), children)
        }
        BlockKind::Heading1(text) => with_nested(heading(1, block, text), children),
        BlockKind::Heading2(text) => with_nested(heading(2, block, text), children),
        BlockKind::Heading3(text) => with_nested(heading(3, block, text), children),
        BlockKind::BulletedListItem(text) | BlockKind::NumberedListItem(text) => Node::ListItem {
            content: compose_rich_text(&text.rich_text),
            children,
        },
        BlockKind::ToDo(todo) => with_nested(
            Node::ToDo {
                id: format!("to-do-{}", block.id),
                checked: todo.checked,
                label: compose_rich_text(&todo.rich_text),
            },
            children,
        ),
        BlockKind::Divider => with_nested(Node::Divider, children),
        BlockKind::Quote(text) => Node::Quote {
            content: compose_rich_text(&text.rich_text),
            children,
        },
        BlockKind::Toggle(text) => Node::Toggle {
            summary: compose_rich_text(&text.rich_text),
            children,
        },
        BlockKind::Code(code) => with_nested(code_node(code), children),
        BlockKind::Image(media) => with_nested(image(media), children),
        BlockKind::Table(table) => table_node(*table, children),
        BlockKind::TableRow(row) => Node::TableRow(
            row.cells
                .iter()
                .map(|cell| Cell::plain(compose_rich_text(cell)))
                .collect(),
        ),
        BlockKind::ColumnList => Node::ColumnList(children),
        BlockKind::Column => Node::Column(children),
        BlockKind::Embed(embed) => {
            let node = if is_tweet_url(&embed.url) {
                Node::Tweet {
                    url: embed.url.clone(),
                }
            } else {
                Node::Embed {
                    url: embed.url.clone(),
                }
            };
            with_nested(node, children)
        }
        BlockKind::Video(media) => with_nested(video(block, media), children),
        BlockKind::File(_) | BlockKind::ChildPage(_) => with_nested(Node::Empty, children),
        BlockKind::Unsupported { type_name } => with_nested(
            Node::Unsupported {
                type_name: type_name.clone(),
            },
            children,
        ),
    }
}

fn with_nested(node: Node, children: Vec<Node>) -> Node {
    if children.is_empty() {
        node
    } else {
        Node::Nested {
            block: Box::new(node),
            children,
        }
    }
}

fn heading(level: u8, block: &Block, text: &TextBlock) -> Node {
    Node::Heading {
        level,
        anchor: block.id.clone(),
        content: compose_rich_text(&text.rich_text),
    }
}

fn code_node(code: &CodeBlock) -> Node {
    let language = code
        .language
        .as_deref()
        .filter(|lang| !lang.is_empty())
        .unwrap_or(DEFAULT_CODE_LANGUAGE);
    let content = code
        .rich_text
        .first()
        .map(|span| span.text.clone())
        .unwrap_or_default();
    Node::Code {
        language: language.to_owned(),
        content,
    }
}

fn image(media: &MediaBlock) -> Node {
    Node::Image {
        src: media.url().to_owned(),
        alt: first_text(&media.caption),
        caption: compose_rich_text(&media.caption),
    }
}

fn video(block: &Block, media: &MediaBlock) -> Node {
    match &media.source {
        MediaSource::External { external } => Node::VideoPlayer {
            src: convert_to_embed_url(&external.url),
            title: format!("Video: {}", block.id),
        },
        MediaSource::File { file } => Node::VideoFile {
            src: file.url.clone(),
        },
    }
}

fn table_node(table: TableBlock, children: Vec<Node>) -> Node {
    let rows = children
        .into_iter()
        .filter_map(|child| match child {
            Node::TableRow(cells) => Some(cells),
            _ => None,
        })
        .enumerate()
        .map(|(row_index, cells)| {
            cells
                .into_iter()
                .enumerate()
                .map(|(col_index, mut cell)| {
                    let column_header = table.has_column_header && row_index == 0;
                    let row_header = table.has_row_header && col_index == 0;
                    cell.header = column_header || row_header;
                    cell
                })
                .collect()
        })
        .collect();
    Node::Table { rows }
}

fn first_text(spans: &[RichTextSpan]) -> String {
    spans.first().map(|s| s.text.clone()).unwrap_or_default()
}
