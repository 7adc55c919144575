//! Notion API types.

mod block;
mod list;
mod page;
mod rich_text;

pub use block::{
    Block, BlockKind, ChildPageBlock, CodeBlock, EmbedBlock, ExternalFile, HostedFile,
    MediaBlock, MediaSource, Parent, TableBlock, TableRowBlock, TextBlock, ToDoBlock,
};
pub(crate) use list::ListResponse;
pub use page::{DESCRIPTION_PROPERTY, Page, PropertyValue, SelectOption, TAGS_PROPERTY};
pub use rich_text::{Annotations, Color, RichTextSpan, plain_text};
