//! Rich text composition.
//!
//! Annotation layers are applied in a fixed order, innermost first: color,
//! bold, italic, strikethrough, underline, code. A link wraps the whole unit.

use quill_notion::RichTextSpan;
use quill_notion::types::{Annotations, Color};

use crate::node::{InlineStyle, Node};

/// Compose spans into inline nodes, one per span, in read order.
pub fn compose_rich_text(spans: &[RichTextSpan]) -> Vec<Node> {
    spans.iter().map(compose_span).collect()
}

/// Compose a single span.
pub fn compose_span(span: &RichTextSpan) -> Node {
    let decorated = apply_annotations(Node::Text(span.text.clone()), span.annotations);

    match &span.link {
        Some(href) => Node::Link {
            href: href.clone(),
            child: Box::new(decorated),
        },
        None => decorated,
    }
}

fn apply_annotations(text: Node, annotations: Annotations) -> Node {
    let layers = [
        (true, InlineStyle::Color(color_class(annotations.color))),
        (annotations.bold, InlineStyle::Bold),
        (annotations.italic, InlineStyle::Italic),
        (annotations.strikethrough, InlineStyle::Strikethrough),
        (annotations.underline, InlineStyle::Underline),
        (annotations.code, InlineStyle::Code),
    ];

    layers
        .into_iter()
        .filter(|(enabled, _)| *enabled)
        .fold(text, |child, (_, style)| Node::Styled {
            style,
            child: Box::new(child),
        })
}

/// CSS class for a palette color. Colors outside the palette inherit.
pub fn color_class(color: Color) -> &'static str {
    match color {
        Color::Default => "text-inherit",
        Color::Gray => "text-gray-500",
        Color::Brown => "text-brown-500",
        Color::Orange => "text-orange-500",
        Color::Yellow => "text-yellow-500",
        Color::Green => "text-green-500",
        Color::Blue => "text-blue-500",
        Color::Purple => "text-purple-500",
        Color::Pink => "text-pink-500",
        Color::Red => "text-red-500",
        Color::GrayBackground => "bg-gray-500",
        Color::BrownBackground => "bg-brown-500",
        Color::OrangeBackground => "bg-orange-500",
        Color::YellowBackground => "bg-yellow-500",
        Color::GreenBackground => "bg-green-500",
        Color::BlueBackground => "bg-blue-500",
        Color::PurpleBackground => "bg-purple-500",
        Color::PinkBackground => "bg-pink-500",
        Color::RedBackground => "bg-red-500",
        Color::Unknown => "inherit",
    }
}
