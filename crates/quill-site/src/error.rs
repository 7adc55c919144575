//! Site error type.

use quill_notion::NotionError;
use quill_renderer::TreeError;

/// Error returned when a post cannot be listed, rendered or written.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// Page exists but is not published.
    #[error("Post not found: {page_id}")]
    NotPublished { page_id: String },

    /// Fetched blocks do not form a valid tree.
    #[error("Invalid block structure: {0}")]
    Structure(#[from] TreeError),

    /// Fetching from the content source failed.
    #[error("Fetch failed: {0}")]
    Fetch(#[source] NotionError),

    /// Page ID cannot be used as a path segment.
    #[error("Invalid post ID: {0:?}")]
    InvalidId(String),

    /// Writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<NotionError> for SiteError {
    fn from(e: NotionError) -> Self {
        match e {
            NotionError::NotPublished { page_id } => Self::NotPublished { page_id },
            other => Self::Fetch(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_published_maps_to_site_variant() {
        let err = SiteError::from(NotionError::NotPublished {
            page_id: "p".to_owned(),
        });
        assert!(matches!(err, SiteError::NotPublished { page_id } if page_id == "p"));
    }

    #[test]
    fn test_transport_errors_wrapped() {
        let err = SiteError::from(NotionError::HttpResponse {
            status: 502,
            body: "bad gateway".to_owned(),
        });
        assert!(matches!(err, SiteError::Fetch(NotionError::HttpResponse { status: 502, .. })));
    }
}
