//! Paginated list responses.

use serde::Deserialize;

/// One page of a paginated list endpoint.
#[derive(Debug, Deserialize)]
pub(crate) struct ListResponse<T> {
    /// Items in this page.
    pub results: Vec<T>,
    /// Whether more items follow.
    #[serde(default)]
    pub has_more: bool,
    /// Cursor for the next request.
    #[serde(default)]
    pub next_cursor: Option<String>,
}

impl<T> ListResponse<T> {
    /// Cursor to continue from, if the listing is incomplete.
    pub(crate) fn continuation(&self) -> Option<&str> {
        if self.has_more {
            self.next_cursor.as_deref()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Block;

    #[test]
    fn test_deserialize_block_list() {
        let json = r#"{
            "object": "list",
            "results": [
                {"id": "a", "type": "divider", "divider": {}},
                {"id": "b", "type": "divider", "divider": {}}
            ],
            "next_cursor": "cursor-2",
            "has_more": true,
            "type": "block",
            "block": {}
        }"#;

        let list: ListResponse<Block> = serde_json::from_str(json).unwrap();

        assert_eq!(list.results.len(), 2);
        assert_eq!(list.continuation(), Some("cursor-2"));
    }

    #[test]
    fn test_last_page_has_no_continuation() {
        let json = r#"{"results": [], "next_cursor": "stale", "has_more": false}"#;
        let list: ListResponse<Block> = serde_json::from_str(json).unwrap();
        assert_eq!(list.continuation(), None);
    }
}
