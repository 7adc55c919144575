//! Presentation tree.
//!
//! [`Node`] describes what a block means on the page (a heading, a disclosure,
//! a table cell with header role) without fixing the markup. The HTML writer
//! in [`crate::html`] is one consumer.

/// A node of the presentation tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Literal text.
    Text(String),
    /// One inline style layer around a single child.
    Styled { style: InlineStyle, child: Box<Node> },
    /// Hyperlink around a fully styled span.
    Link { href: String, child: Box<Node> },
    Paragraph(Vec<Node>),
    /// Heading level 1-3 with the block id as anchor target.
    Heading {
        level: u8,
        anchor: String,
        content: Vec<Node>,
    },
    /// Grouped run of list items.
    List { kind: ListKind, items: Vec<Node> },
    ListItem {
        content: Vec<Node>,
        children: Vec<Node>,
    },
    /// Read-only checkbox with a label.
    ToDo {
        id: String,
        checked: bool,
        label: Vec<Node>,
    },
    Divider,
    Quote {
        content: Vec<Node>,
        children: Vec<Node>,
    },
    /// Disclosure widget, collapsed by default.
    Toggle {
        summary: Vec<Node>,
        children: Vec<Node>,
    },
    Code { language: String, content: String },
    Image {
        src: String,
        alt: String,
        caption: Vec<Node>,
    },
    Table { rows: Vec<Vec<Cell>> },
    /// Row awaiting header assignment by its table.
    TableRow(Vec<Cell>),
    ColumnList(Vec<Node>),
    Column(Vec<Node>),
    /// Generic embedded page.
    Embed { url: String },
    /// Embedded post from Twitter or X.
    Tweet { url: String },
    /// Embedded third-party player.
    VideoPlayer { src: String, title: String },
    /// Directly playable video file.
    VideoFile { src: String },
    /// A block that does not aggregate children, followed by its children.
    Nested {
        block: Box<Node>,
        children: Vec<Node>,
    },
    /// Visible marker for a block type the renderer does not handle.
    Unsupported { type_name: String },
    /// Renders nothing.
    Empty,
}

/// Inline style layers applied by the rich text composer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineStyle {
    /// Color class (always the innermost layer).
    Color(&'static str),
    Bold,
    Italic,
    Strikethrough,
    Underline,
    Code,
}

/// Kind of a grouped list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Bulleted,
    Numbered,
}

/// Table cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// Whether the cell is a row or column header.
    pub header: bool,
    pub content: Vec<Node>,
}

impl Cell {
    /// A plain data cell.
    #[must_use]
    pub fn plain(content: Vec<Node>) -> Self {
        Self {
            header: false,
            content,
        }
    }
}
