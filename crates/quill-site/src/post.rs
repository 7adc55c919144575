//! Post metadata.

use chrono::{DateTime, Utc};
use quill_notion::Page;

/// A published page as shown in listings and on its own page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub created_time: DateTime<Utc>,
    pub tags: Vec<String>,
    pub description: String,
}

impl Post {
    /// Human-readable creation date, e.g. "March 14, 2023".
    pub fn formatted_date(&self) -> String {
        self.created_time.format("%B %-d, %Y").to_string()
    }
}

impl From<&Page> for Post {
    fn from(page: &Page) -> Self {
        Self {
            id: page.id.clone(),
            title: page.title().to_owned(),
            created_time: page.created_time,
            tags: page.tags().into_iter().map(str::to_owned).collect(),
            description: page.description().to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use quill_notion::RichTextSpan;
    use quill_notion::types::{PropertyValue, SelectOption};

    use super::*;

    #[test]
    fn test_from_page() {
        let created = Utc.with_ymd_and_hms(2023, 3, 4, 9, 30, 0).unwrap();
        let page = Page::new("p1", created)
            .with_property(
                "Title",
                PropertyValue::Title {
                    title: vec![RichTextSpan::new("Hello")],
                },
            )
            .with_property(
                "Tags",
                PropertyValue::MultiSelect {
                    multi_select: vec![
                        SelectOption {
                            name: "rust".to_owned(),
                        },
                        SelectOption {
                            name: "web".to_owned(),
                        },
                    ],
                },
            );

        let post = Post::from(&page);

        assert_eq!(post.title, "Hello");
        assert_eq!(post.tags, vec!["rust", "web"]);
        assert_eq!(post.description, "");
        assert_eq!(post.formatted_date(), "March 4, 2023");
    }
}
