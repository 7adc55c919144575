//! Page and database operations for Notion API.

use serde_json::json;
use tracing::info;

use super::NotionClient;
use crate::error::NotionError;
use crate::types::{ListResponse, Page};

impl NotionClient {
    /// Query the configured database for published pages, in source order.
    pub(crate) fn query_published(&self) -> Result<Vec<Page>, NotionError> {
        let url = format!("{}/databases/{}/query", self.api_url, self.database_id);

        info!("Querying published pages in database {}", self.database_id);

        let mut pages = Vec::new();
        let mut cursor: Option<String> = None;
        loop {
            let payload = self.published_filter(cursor.as_deref());
            let response: ListResponse<Page> = self.post_json(&url, &payload)?;
            let next = response.continuation().map(str::to_owned);
            pages.extend(response.results);
            match next {
                Some(next) => cursor = Some(next),
                None => break,
            }
        }

        info!("Found {} published pages", pages.len());
        Ok(pages)
    }

    /// Retrieve a page, rejecting it when the publish gate is off.
    pub(crate) fn retrieve_page(&self, page_id: &str) -> Result<Page, NotionError> {
        let url = format!("{}/pages/{}", self.api_url, page_id);

        info!("Getting page {}", page_id);

        let page: Page = self.get_json(&url)?;
        if !page.is_published(&self.published_property) {
            return Err(NotionError::NotPublished {
                page_id: page_id.to_owned(),
            });
        }
        Ok(page)
    }

    /// Body of the database query selecting published pages.
    fn published_filter(&self, start_cursor: Option<&str>) -> serde_json::Value {
        let mut payload = json!({
            "filter": {
                "property": self.published_property,
                "checkbox": {"equals": true}
            },
            "page_size": super::PAGE_SIZE
        });
        if let Some(cursor) = start_cursor {
            payload["start_cursor"] = json!(cursor);
        }
        payload
    }
}
