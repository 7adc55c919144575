//! Notion page types.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::rich_text::RichTextSpan;

/// Name of the multi-select property listing post tags.
pub const TAGS_PROPERTY: &str = "Tags";

/// Name of the rich text property holding the post summary.
pub const DESCRIPTION_PROPERTY: &str = "Description";

/// Notion page (a database row).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Page {
    /// Page ID.
    pub id: String,
    /// Creation timestamp.
    pub created_time: DateTime<Utc>,
    /// Database properties by name.
    #[serde(default)]
    pub properties: HashMap<String, PropertyValue>,
}

impl Page {
    /// Create a page without properties.
    #[must_use]
    pub fn new(id: impl Into<String>, created_time: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            created_time,
            properties: HashMap::new(),
        }
    }

    /// Set a property.
    #[must_use]
    pub fn with_property(mut self, name: impl Into<String>, value: PropertyValue) -> Self {
        self.properties.insert(name.into(), value);
        self
    }

    /// Raw text of the first span of the title property.
    pub fn title(&self) -> &str {
        self.properties
            .values()
            .find_map(|value| match value {
                PropertyValue::Title { title } => Some(first_text(title)),
                _ => None,
            })
            .unwrap_or_default()
    }

    /// Whether the named checkbox property is ticked.
    ///
    /// A missing or non-checkbox property counts as unpublished.
    pub fn is_published(&self, property: &str) -> bool {
        matches!(
            self.properties.get(property),
            Some(PropertyValue::Checkbox { checkbox: true })
        )
    }

    /// Tag names in property order.
    pub fn tags(&self) -> Vec<&str> {
        match self.properties.get(TAGS_PROPERTY) {
            Some(PropertyValue::MultiSelect { multi_select }) => {
                multi_select.iter().map(|option| option.name.as_str()).collect()
            }
            _ => Vec::new(),
        }
    }

    /// Raw text of the first span of the description property.
    pub fn description(&self) -> &str {
        match self.properties.get(DESCRIPTION_PROPERTY) {
            Some(PropertyValue::RichText { rich_text }) => first_text(rich_text),
            _ => "",
        }
    }
}

fn first_text(spans: &[RichTextSpan]) -> &str {
    spans.first().map_or("", |span| span.text.as_str())
}

/// Typed value of a page property. Only the types the site reads are decoded.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PropertyValue {
    Title { title: Vec<RichTextSpan> },
    RichText { rich_text: Vec<RichTextSpan> },
    Checkbox { checkbox: bool },
    MultiSelect { multi_select: Vec<SelectOption> },
    #[serde(other)]
    Other,
}

/// Option of a select or multi-select property.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SelectOption {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const PAGE_JSON: &str = r#"{
        "object": "page",
        "id": "page-1",
        "created_time": "2023-03-14T09:30:00.000Z",
        "properties": {
            "Published": {"id": "a", "type": "checkbox", "checkbox": true},
            "Tags": {"id": "b", "type": "multi_select", "multi_select": [
                {"id": "t1", "name": "rust", "color": "red"},
                {"id": "t2", "name": "notion", "color": "blue"}
            ]},
            "Description": {"id": "c", "type": "rich_text", "rich_text": [
                {"plain_text": "A short summary"}
            ]},
            "Date": {"id": "d", "type": "date", "date": null},
            "Title": {"id": "title", "type": "title", "title": [
                {"plain_text": "Hello"}, {"plain_text": " world"}
            ]}
        }
    }"#;

    #[test]
    fn test_deserialize_page() {
        let page: Page = serde_json::from_str(PAGE_JSON).unwrap();

        assert_eq!(page.id, "page-1");
        assert_eq!(page.created_time.to_rfc3339(), "2023-03-14T09:30:00+00:00");
        assert_eq!(page.title(), "Hello");
        assert_eq!(page.tags(), vec!["rust", "notion"]);
        assert_eq!(page.description(), "A short summary");
        assert_eq!(page.properties.get("Date"), Some(&PropertyValue::Other));
    }

    #[test]
    fn test_published_gate() {
        let page: Page = serde_json::from_str(PAGE_JSON).unwrap();
        assert!(page.is_published("Published"));
        assert!(!page.is_published("Missing"));
        assert!(!page.is_published("Tags"));

        let draft = page.with_property("Published", PropertyValue::Checkbox { checkbox: false });
        assert!(!draft.is_published("Published"));
    }

    #[test]
    fn test_page_without_properties() {
        let page = Page::new("p", Utc::now());
        assert_eq!(page.title(), "");
        assert_eq!(page.description(), "");
        assert!(page.tags().is_empty());
    }
}
