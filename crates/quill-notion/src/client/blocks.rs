//! Block operations for Notion API.

use tracing::debug;

use super::NotionClient;
use crate::error::NotionError;
use crate::types::{Block, ListResponse};

impl NotionClient {
    /// List the direct children of a block or page, following pagination.
    pub(crate) fn list_block_children(&self, block_id: &str) -> Result<Vec<Block>, NotionError> {
        let mut blocks = Vec::new();
        let mut cursor: Option<String> = None;
        loop {
            let url = self.children_url(block_id, cursor.as_deref());
            let response: ListResponse<Block> = self.get_json(&url)?;
            let next = response.continuation().map(str::to_owned);
            blocks.extend(response.results);
            match next {
                Some(next) => cursor = Some(next),
                None => break,
            }
        }

        debug!("Fetched {} children of {}", blocks.len(), block_id);
        Ok(blocks)
    }

    /// URL of one page of a block's children.
    fn children_url(&self, block_id: &str, start_cursor: Option<&str>) -> String {
        let mut url = format!(
            "{}/blocks/{}/children?page_size={}",
            self.api_url,
            block_id,
            super::PAGE_SIZE
        );
        if let Some(cursor) = start_cursor {
            url.push_str("&start_cursor=");
            url.push_str(cursor);
        }
        url
    }
}
