//! Content blocks.
//!
//! The API encodes a block as a common envelope (`id`, `parent`, `type`,
//! `has_children`) plus one object keyed by the type name holding the
//! type-specific payload. [`Block`] folds that pair into the [`BlockKind`]
//! sum type so renderers match on a closed set of variants.

use serde::Deserialize;
use serde_json::{Map, Value};

use super::rich_text::RichTextSpan;

/// A single content unit of a page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawBlock")]
pub struct Block {
    /// Stable identifier, unique within a document.
    pub id: String,
    /// Owning page or block.
    pub parent: Option<Parent>,
    /// Whether child blocks exist.
    pub has_children: bool,
    /// Child blocks, empty until resolved.
    pub children: Vec<Block>,
    /// Type tag and payload.
    pub kind: BlockKind,
}

impl Block {
    /// Create a childless block without a parent reference.
    #[must_use]
    pub fn new(id: impl Into<String>, kind: BlockKind) -> Self {
        Self {
            id: id.into(),
            parent: None,
            has_children: false,
            children: Vec::new(),
            kind,
        }
    }

    /// Set the parent reference.
    #[must_use]
    pub fn with_parent(mut self, parent: Parent) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Mark the block as having children that are not attached yet.
    #[must_use]
    pub fn with_unresolved_children(mut self) -> Self {
        self.has_children = true;
        self
    }

    /// Attach resolved children.
    #[must_use]
    pub fn with_children(mut self, children: Vec<Block>) -> Self {
        self.has_children = !children.is_empty();
        self.children = children;
        self
    }

    /// ID of the owning page or block, if any.
    pub fn parent_id(&self) -> Option<&str> {
        self.parent.as_ref().and_then(Parent::id)
    }

    /// API type name of this block.
    pub fn type_name(&self) -> &str {
        self.kind.type_name()
    }
}

/// Reference to the owner of a block or page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Parent {
    PageId { page_id: String },
    BlockId { block_id: String },
    DatabaseId { database_id: String },
    #[serde(other)]
    Other,
}

impl Parent {
    /// Page parent.
    #[must_use]
    pub fn page(id: impl Into<String>) -> Self {
        Self::PageId { page_id: id.into() }
    }

    /// Block parent.
    #[must_use]
    pub fn block(id: impl Into<String>) -> Self {
        Self::BlockId {
            block_id: id.into(),
        }
    }

    /// Referenced ID, for page, block and database parents.
    pub fn id(&self) -> Option<&str> {
        match self {
            Self::PageId { page_id } => Some(page_id),
            Self::BlockId { block_id } => Some(block_id),
            Self::DatabaseId { database_id } => Some(database_id),
            Self::Other => None,
        }
    }
}

/// Block type with its payload.
#[derive(Debug, Clone, PartialEq)]
pub enum BlockKind {
    Paragraph(TextBlock),
    Heading1(TextBlock),
    Heading2(TextBlock),
    Heading3(TextBlock),
    BulletedListItem(TextBlock),
    NumberedListItem(TextBlock),
    ToDo(ToDoBlock),
    Divider,
    Quote(TextBlock),
    Toggle(TextBlock),
    Code(CodeBlock),
    Image(MediaBlock),
    Table(TableBlock),
    TableRow(TableRowBlock),
    ColumnList,
    Column,
    Embed(EmbedBlock),
    Video(MediaBlock),
    File(MediaBlock),
    ChildPage(ChildPageBlock),
    /// Any type outside the supported set.
    Unsupported { type_name: String },
}

impl BlockKind {
    /// API type name.
    pub fn type_name(&self) -> &str {
        match self {
            Self::Paragraph(_) => "paragraph",
            Self::Heading1(_) => "heading_1",
            Self::Heading2(_) => "heading_2",
            Self::Heading3(_) => "heading_3",
            Self::BulletedListItem(_) => "bulleted_list_item",
            Self::NumberedListItem(_) => "numbered_list_item",
            Self::ToDo(_) => "to_do",
            Self::Divider => "divider",
            Self::Quote(_) => "quote",
            Self::Toggle(_) => "toggle",
            Self::Code(_) => "code",
            Self::Image(_) => "image",
            Self::Table(_) => "table",
            Self::TableRow(_) => "table_row",
            Self::ColumnList => "column_list",
            Self::Column => "column",
            Self::Embed(_) => "embed",
            Self::Video(_) => "video",
            Self::File(_) => "file",
            Self::ChildPage(_) => "child_page",
            Self::Unsupported { type_name } => type_name,
        }
    }

    /// Decode the payload object for `type_name`.
    fn from_payload(type_name: &str, payload: Value) -> Result<Self, serde_json::Error> {
        let kind = match type_name {
            "paragraph" => Self::Paragraph(serde_json::from_value(payload)?),
            "heading_1" => Self::Heading1(serde_json::from_value(payload)?),
            "heading_2" => Self::Heading2(serde_json::from_value(payload)?),
            "heading_3" => Self::Heading3(serde_json::from_value(payload)?),
            "bulleted_list_item" => Self::BulletedListItem(serde_json::from_value(payload)?),
            "numbered_list_item" => Self::NumberedListItem(serde_json::from_value(payload)?),
            "to_do" => Self::ToDo(serde_json::from_value(payload)?),
            "divider" => Self::Divider,
            "quote" => Self::Quote(serde_json::from_value(payload)?),
            "toggle" => Self::Toggle(serde_json::from_value(payload)?),
            "code" => Self::Code(serde_json::from_value(payload)?),
            "image" => Self::Image(serde_json::from_value(payload)?),
            "table" => Self::Table(serde_json::from_value(payload)?),
            "table_row" => Self::TableRow(serde_json::from_value(payload)?),
            "column_list" => Self::ColumnList,
            "column" => Self::Column,
            "embed" => Self::Embed(serde_json::from_value(payload)?),
            "video" => Self::Video(serde_json::from_value(payload)?),
            "file" => Self::File(serde_json::from_value(payload)?),
            "child_page" => Self::ChildPage(serde_json::from_value(payload)?),
            other => Self::Unsupported {
                type_name: other.to_owned(),
            },
        };
        Ok(kind)
    }
}

/// Payload of text-bearing blocks (paragraph, headings, list items, quote, toggle).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TextBlock {
    #[serde(default)]
    pub rich_text: Vec<RichTextSpan>,
}

impl TextBlock {
    #[must_use]
    pub fn new(rich_text: Vec<RichTextSpan>) -> Self {
        Self { rich_text }
    }
}

/// Payload of `to_do` blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ToDoBlock {
    #[serde(default)]
    pub rich_text: Vec<RichTextSpan>,
    #[serde(default)]
    pub checked: bool,
}

/// Payload of `code` blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CodeBlock {
    #[serde(default)]
    pub rich_text: Vec<RichTextSpan>,
    #[serde(default)]
    pub language: Option<String>,
}

/// Payload of `image`, `video` and `file` blocks.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MediaBlock {
    #[serde(flatten)]
    pub source: MediaSource,
    #[serde(default)]
    pub caption: Vec<RichTextSpan>,
}

impl MediaBlock {
    /// Externally hosted media.
    #[must_use]
    pub fn external(url: impl Into<String>) -> Self {
        Self {
            source: MediaSource::External {
                external: ExternalFile { url: url.into() },
            },
            caption: Vec::new(),
        }
    }

    /// Media uploaded to Notion.
    #[must_use]
    pub fn hosted(url: impl Into<String>) -> Self {
        Self {
            source: MediaSource::File {
                file: HostedFile {
                    url: url.into(),
                    expiry_time: None,
                },
            },
            caption: Vec::new(),
        }
    }

    /// Attach a caption.
    #[must_use]
    pub fn with_caption(mut self, caption: Vec<RichTextSpan>) -> Self {
        self.caption = caption;
        self
    }

    /// Resolved media URL, whichever variant holds it.
    pub fn url(&self) -> &str {
        match &self.source {
            MediaSource::External { external } => &external.url,
            MediaSource::File { file } => &file.url,
        }
    }
}

/// Where a media file lives. The variants are mutually exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MediaSource {
    External { external: ExternalFile },
    File { file: HostedFile },
}

/// Externally hosted file reference.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExternalFile {
    pub url: String,
}

/// Notion-hosted file reference with a signed, expiring URL.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HostedFile {
    pub url: String,
    #[serde(default)]
    pub expiry_time: Option<String>,
}

/// Payload of `table` blocks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct TableBlock {
    #[serde(default)]
    pub table_width: usize,
    #[serde(default)]
    pub has_column_header: bool,
    #[serde(default)]
    pub has_row_header: bool,
}

/// Payload of `table_row` blocks: one rich text sequence per cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TableRowBlock {
    #[serde(default)]
    pub cells: Vec<Vec<RichTextSpan>>,
}

/// Payload of `embed` blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EmbedBlock {
    pub url: String,
    #[serde(default)]
    pub caption: Vec<RichTextSpan>,
}

/// Payload of `child_page` blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ChildPageBlock {
    #[serde(default)]
    pub title: String,
}

/// Wire shape of a block before the payload is decoded.
#[derive(Deserialize)]
struct RawBlock {
    id: String,
    #[serde(default)]
    parent: Option<Parent>,
    #[serde(default)]
    has_children: bool,
    #[serde(default)]
    children: Vec<Block>,
    #[serde(rename = "type")]
    block_type: String,
    #[serde(flatten)]
    rest: Map<String, Value>,
}

impl TryFrom<RawBlock> for Block {
    type Error = serde_json::Error;

    fn try_from(mut raw: RawBlock) -> Result<Self, Self::Error> {
        let payload = raw
            .rest
            .remove(&raw.block_type)
            .unwrap_or_else(|| Value::Object(Map::new()));
        let kind = BlockKind::from_payload(&raw.block_type, payload)?;

        Ok(Self {
            id: raw.id,
            parent: raw.parent,
            has_children: raw.has_children,
            children: raw.children,
            kind,
        })
    }
}
