//! Error types for Notion integration.

/// Error from Notion API operations and content fetching.
#[derive(Debug, thiserror::Error)]
pub enum NotionError {
    /// HTTP request failed (network error, timeout, etc).
    #[error("HTTP request failed")]
    HttpRequest(#[from] ureq::Error),

    /// HTTP response error (server returned error status).
    #[error("HTTP error: {status} - {body}")]
    HttpResponse {
        /// HTTP status code.
        status: u16,
        /// Response body (may contain error details).
        body: String,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error")]
    Json(#[from] serde_json::Error),

    /// Page exists but its publish gate is off.
    #[error("page {page_id} is not published")]
    NotPublished {
        /// Requested page ID.
        page_id: String,
    },

    /// A block appeared on its own ancestor path while resolving children.
    #[error("block {block_id} is its own ancestor")]
    Cycle {
        /// Block ID seen twice on the path.
        block_id: String,
    },

    /// Requested page or block does not exist.
    #[error("{0} not found")]
    NotFound(String),
}
