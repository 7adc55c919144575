//! Rich text spans and their annotations.

use serde::Deserialize;

/// A run of text carrying style annotations and an optional link.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RichTextSpan {
    /// Raw text of the span.
    #[serde(rename = "plain_text")]
    pub text: String,
    /// Style flags and color.
    #[serde(default)]
    pub annotations: Annotations,
    /// Hyperlink target.
    #[serde(rename = "href", default)]
    pub link: Option<String>,
}

impl RichTextSpan {
    /// Create an unstyled span without a link.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            annotations: Annotations::default(),
            link: None,
        }
    }

    /// Replace the span's annotations.
    #[must_use]
    pub fn with_annotations(mut self, annotations: Annotations) -> Self {
        self.annotations = annotations;
        self
    }

    /// Attach a hyperlink.
    #[must_use]
    pub fn with_link(mut self, url: impl Into<String>) -> Self {
        self.link = Some(url.into());
        self
    }
}

/// Concatenate the raw text of all spans.
pub fn plain_text(spans: &[RichTextSpan]) -> String {
    spans.iter().map(|span| span.text.as_str()).collect()
}

/// Independent style flags plus one color.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct Annotations {
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub underline: bool,
    pub code: bool,
    pub color: Color,
}

/// Notion text and background color palette.
///
/// Values outside the palette deserialize to [`Color::Unknown`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    #[default]
    Default,
    Gray,
    Brown,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Pink,
    Red,
    GrayBackground,
    BrownBackground,
    OrangeBackground,
    YellowBackground,
    GreenBackground,
    BlueBackground,
    PurpleBackground,
    PinkBackground,
    RedBackground,
    #[serde(other)]
    Unknown,
}
