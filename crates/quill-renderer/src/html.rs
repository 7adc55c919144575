//! HTML writer for the presentation tree.

use std::fmt::Write;

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::node::{Cell, InlineStyle, ListKind, Node};

/// Write nodes as semantic HTML5.
///
/// Text content and attribute values are escaped.
pub fn to_html(nodes: &[Node]) -> String {
    let mut out = String::new();
    write_nodes(&mut out, nodes);
    out
}

fn write_nodes(out: &mut String, nodes: &[Node]) {
    for node in nodes {
        write_node(out, node);
    }
}

fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Text(text) => out.push_str(&encode_text(text)),
        Node::Styled { style, child } => write_styled(out, *style, child),
        Node::Link { href, child } => {
            let _ = write!(out, r#"<a href="{}">"#, encode_double_quoted_attribute(href));
            write_node(out, child);
            out.push_str("</a>");
        }
        Node::Paragraph(content) => wrap(out, "<p>", content, "</p>"),
        Node::Heading {
            level,
            anchor,
            content,
        } => {
            let anchor = encode_double_quoted_attribute(anchor);
            let _ = write!(
                out,
                r##"<h{level} id="{anchor}"><a href="#{anchor}" class="anchor">#</a><span>"##
            );
            write_nodes(out, content);
            let _ = write!(out, "</span></h{level}>");
        }
        Node::List { kind, items } => {
            let tag = match kind {
                ListKind::Bulleted => "ul",
                ListKind::Numbered => "ol",
            };
            let _ = write!(out, "<{tag}>");
            write_nodes(out, items);
            let _ = write!(out, "</{tag}>");
        }
        Node::ListItem { content, children } => {
            out.push_str("<li>");
            write_nodes(out, content);
            write_nodes(out, children);
            out.push_str("</li>");
        }
        Node::ToDo { id, checked, label } => {
            let id = encode_double_quoted_attribute(id);
            let checked = if *checked { " checked" } else { "" };
            let _ = write!(
                out,
                r#"<div class="to-do"><input type="checkbox" id="{id}" disabled{checked}><label for="{id}">"#
            );
            write_nodes(out, label);
            out.push_str("</label></div>");
        }
        Node::Divider => out.push_str("<hr>"),
        Node::Quote { content, children } => {
            out.push_str("<blockquote>");
            write_nodes(out, content);
            write_nodes(out, children);
            out.push_str("</blockquote>");
        }
        Node::Toggle { summary, children } => {
            out.push_str("<details><summary>");
            write_nodes(out, summary);
            out.push_str("</summary>");
            write_nodes(out, children);
            out.push_str("</details>");
        }
        Node::Code { language, content } => {
            let _ = write!(
                out,
                r#"<pre><code class="language-{}">{}</code></pre>"#,
                encode_double_quoted_attribute(language),
                encode_text(content)
            );
        }
        Node::Image { src, alt, caption } => {
            let _ = write!(
                out,
                r#"<figure><img src="{}" alt="{}">"#,
                encode_double_quoted_attribute(src),
                encode_double_quoted_attribute(alt)
            );
            if !caption.is_empty() {
                wrap(out, "<figcaption>", caption, "</figcaption>");
            }
            out.push_str("</figure>");
        }
        Node::Table { rows } => {
            out.push_str("<table><tbody>");
            for row in rows {
                write_row(out, row);
            }
            out.push_str("</tbody></table>");
        }
        Node::TableRow(cells) => write_row(out, cells),
        Node::ColumnList(columns) => wrap(out, r#"<div class="column-list">"#, columns, "</div>"),
        Node::Column(children) => wrap(out, r#"<div class="column">"#, children, "</div>"),
        Node::Embed { url } => {
            let _ = write!(
                out,
                r#"<iframe class="embed" src="{}" loading="lazy"></iframe>"#,
                encode_double_quoted_attribute(url)
            );
        }
        Node::Tweet { url } => {
            let _ = write!(
                out,
                r#"<blockquote class="twitter-tweet"><a href="{}">{}</a></blockquote>"#,
                encode_double_quoted_attribute(url),
                encode_text(url)
            );
        }
        Node::VideoPlayer { src, title } => {
            let _ = write!(
                out,
                r#"<iframe class="video" src="{}" title="{}" allowfullscreen></iframe>"#,
                encode_double_quoted_attribute(src),
                encode_double_quoted_attribute(title)
            );
        }
        Node::VideoFile { src } => {
            let _ = write!(
                out,
                r#"<video controls src="{}"></video>"#,
                encode_double_quoted_attribute(src)
            );
        }
        Node::Nested { block, children } => {
            write_node(out, block);
            wrap(out, r#"<div class="nested">"#, children, "</div>");
        }
        Node::Unsupported { type_name } => {
            let _ = write!(
                out,
                r#"<p class="unsupported">Unsupported block type. {}</p>"#,
                encode_text(type_name)
            );
        }
        Node::Empty => {}
    }
}

fn write_styled(out: &mut String, style: InlineStyle, child: &Node) {
    let close = match style {
        InlineStyle::Color(class) => {
            let _ = write!(out, r#"<span class="{class}">"#);
            "</span>"
        }
        InlineStyle::Bold => {
            out.push_str("<strong>");
            "</strong>"
        }
        InlineStyle::Italic => {
            out.push_str("<em>");
            "</em>"
        }
        InlineStyle::Strikethrough => {
            out.push_str("<del>");
            "</del>"
        }
        InlineStyle::Underline => {
            out.push_str("<u>");
            "</u>"
        }
        InlineStyle::Code => {
            out.push_str("<code>");
            "</code>"
        }
    };
    write_node(out, child);
    out.push_str(close);
}

fn write_row(out: &mut String, cells: &[Cell]) {
    out.push_str("<tr>");
    for cell in cells {
        let tag = if cell.header { "th" } else { "td" };
        let _ = write!(out, "<{tag}>");
        write_nodes(out, &cell.content);
        let _ = write!(out, "</{tag}>");
    }
    out.push_str("</tr>");
}

fn wrap(out: &mut String, open: &str, nodes: &[Node], close: &str) {
    out.push_str(open);
    write_nodes(out, nodes);
    out.push_str(close);
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn text(s: &str) -> Node {
        Node::Text(s.to_owned())
    }

    #[test]
    fn test_escapes_text_and_attributes() {
        let nodes = vec![Node::Link {
            href: r#"/a?x="1"&y=2"#.to_owned(),
            child: Box::new(text("<b>&</b>")),
        }];
        assert_eq!(
            to_html(&nodes),
            r#"<a href="/a?x=&quot;1&quot;&amp;y=2">&lt;b&gt;&amp;&lt;/b&gt;</a>"#
        );
    }

    #[test]
    fn test_styled_layers_nest() {
        let node = Node::Styled {
            style: InlineStyle::Bold,
            child: Box::new(Node::Styled {
                style: InlineStyle::Color("text-red-500"),
                child: Box::new(text("hi")),
            }),
        };
        assert_eq!(
            to_html(&[node]),
            r#"<strong><span class="text-red-500">hi</span></strong>"#
        );
    }

    #[test]
    fn test_heading_has_anchor() {
        let node = Node::Heading {
            level: 1,
            anchor: "abc".to_owned(),
            content: vec![text("Intro")],
        };
        assert_eq!(
            to_html(&[node]),
            r##"<h1 id="abc"><a href="#abc" class="anchor">#</a><span>Intro</span></h1>"##
        );
    }

    #[test]
    fn test_heading_with_link_keeps_anchors_apart() {
        let node = Node::Heading {
            level: 2,
            anchor: "h".to_owned(),
            content: vec![
                text("See "),
                Node::Link {
                    href: "https://example.com".to_owned(),
                    child: Box::new(text("docs")),
                },
            ],
        };

        let html = to_html(&[node]);

        assert_eq!(
            html,
            r##"<h2 id="h"><a href="#h" class="anchor">#</a><span>See <a href="https://example.com">docs</a></span></h2>"##
        );
        assert!(!html.contains("</a></a>"));
    }

    #[test]
    fn test_list_markup() {
        let node = Node::List {
            kind: ListKind::Numbered,
            items: vec![
                Node::ListItem {
                    content: vec![text("one")],
                    children: Vec::new(),
                },
                Node::ListItem {
                    content: vec![text("two")],
                    children: Vec::new(),
                },
            ],
        };
        assert_eq!(to_html(&[node]), "<ol><li>one</li><li>two</li></ol>");
    }

    #[test]
    fn test_table_header_cells() {
        let node = Node::Table {
            rows: vec![
                vec![
                    Cell {
                        header: true,
                        content: vec![text("h")],
                    },
                    Cell::plain(vec![text("d")]),
                ],
            ],
        };
        assert_eq!(
            to_html(&[node]),
            "<table><tbody><tr><th>h</th><td>d</td></tr></tbody></table>"
        );
    }

    #[test]
    fn test_to_do_checkbox_disabled() {
        let node = Node::ToDo {
            id: "to-do-1".to_owned(),
            checked: true,
            label: vec![text("done")],
        };
        assert_eq!(
            to_html(&[node]),
            r#"<div class="to-do"><input type="checkbox" id="to-do-1" disabled checked><label for="to-do-1">done</label></div>"#
        );
    }

    #[test]
    fn test_code_content_escaped() {
        let node = Node::Code {
            language: "rust".to_owned(),
            content: "a < b".to_owned(),
        };
        assert_eq!(
            to_html(&[node]),
            r#"<pre><code class="language-rust">a &lt; b</code></pre>"#
        );
    }

    #[test]
    fn test_image_caption_only_when_present() {
        let bare = Node::Image {
            src: "/i.png".to_owned(),
            alt: String::new(),
            caption: Vec::new(),
        };
        assert_eq!(
            to_html(&[bare]),
            r#"<figure><img src="/i.png" alt=""></figure>"#
        );
    }

    #[test]
    fn test_unsupported_and_empty() {
        let nodes = vec![
            Node::Unsupported {
                type_name: "synced_block".to_owned(),
            },
            Node::Empty,
        ];
        assert_eq!(
            to_html(&nodes),
            r#"<p class="unsupported">Unsupported block type. synced_block</p>"#
        );
    }

    #[test]
    fn test_toggle_is_details() {
        let node = Node::Toggle {
            summary: vec![text("More")],
            children: vec![Node::Divider],
        };
        assert_eq!(
            to_html(&[node]),
            "<details><summary>More</summary><hr></details>"
        );
    }
}
