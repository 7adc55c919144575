//! HTML page templates for static output.
//!
//! Listing and post pages use Tailwind CSS utility classes; the rendered
//! article body is inserted verbatim.

use std::fmt::Write;

use html_escape::{encode_double_quoted_attribute as attr, encode_text as escape};
use quill_renderer::TocEntry;

use crate::post::Post;

/// Data for the listing page.
pub struct IndexData<'a> {
    pub site_title: &'a str,
    pub site_description: &'a str,
    pub posts: &'a [Post],
}

/// Data for a single post page.
pub struct PostPageData<'a> {
    pub post: &'a Post,
    pub html_content: &'a str,
    pub toc: &'a [TocEntry],
}

/// Render the listing page.
pub fn render_index(data: &IndexData<'_>) -> String {
    let mut html = String::with_capacity(4096);
    render_head(&mut html, data.site_title);

    html.push_str("<main class=\"max-w-[52rem] mx-auto px-4 pb-28 sm:px-6 md:px-8 xl:px-12 lg:max-w-6xl\">\n");
    html.push_str("<header class=\"py-16 sm:text-center\">\n");
    let _ = writeln!(
        html,
        "<h1 class=\"mb-4 text-3xl sm:text-4xl tracking-tight text-slate-900 font-extrabold\">{}</h1>",
        escape(data.site_title)
    );
    if !data.site_description.is_empty() {
        let _ = writeln!(
            html,
            "<p class=\"text-lg text-slate-700\">{}</p>",
            escape(data.site_description)
        );
    }
    html.push_str("</header>\n");

    html.push_str("<div class=\"space-y-16\">\n");
    for post in data.posts {
        render_summary(&mut html, post);
    }
    html.push_str("</div>\n");

    html.push_str("</main>\n");
    render_tail(&mut html);
    html
}

/// Render one post summary in the listing.
fn render_summary(html: &mut String, post: &Post) {
    html.push_str("<article class=\"relative group\">\n");
    let _ = writeln!(
        html,
        "<h3 class=\"text-base font-semibold tracking-tight text-slate-900\">{}</h3>",
        escape(&post.title)
    );
    let _ = writeln!(
        html,
        "<div class=\"mt-2 mb-4 prose prose-slate line-clamp-2\"><p>{}</p></div>",
        escape(&post.description)
    );
    render_date(html, post);
    let _ = writeln!(
        html,
        "<a class=\"flex items-center text-sm text-sky-500 font-medium\" href=\"/posts/{}/\">Read more</a>",
        attr(&post.id)
    );
    html.push_str("</article>\n");
}

/// Render a post page.
pub fn render_post_page(data: &PostPageData<'_>) -> String {
    let post = data.post;
    let mut html = String::with_capacity(8192);
    render_head(&mut html, &post.title);

    html.push_str("<div class=\"flex px-4 pt-8 pb-10 lg:px-8\">\n");
    html.push_str(
        "<a class=\"group flex font-semibold text-sm leading-6 text-slate-700 hover:text-slate-900\" href=\"/\">Go back</a>\n",
    );
    html.push_str("</div>\n");

    html.push_str("<div class=\"px-4 sm:px-6 md:px-8\">\n<div class=\"max-w-3xl mx-auto pb-28 flex\">\n");
    html.push_str("<main class=\"flex-1 min-w-0\">\n<article class=\"relative pt-10\">\n");
    let _ = writeln!(
        html,
        "<h1 class=\"text-2xl font-extrabold tracking-tight text-slate-900 md:text-3xl\">{}</h1>",
        escape(&post.title)
    );
    render_date(&mut html, post);
    if !post.tags.is_empty() {
        let _ = writeln!(
            html,
            "<p class=\"text-sm text-slate-500\">Tags: {}</p>",
            escape(&post.tags.join(", "))
        );
    }
    html.push_str("<div class=\"mt-12 prose prose-slate\">\n");
    html.push_str(data.html_content);
    html.push_str("\n</div>\n</article>\n</main>\n");

    render_toc(&mut html, data.toc);

    html.push_str("</div>\n</div>\n");
    render_tail(&mut html);
    html
}

fn render_date(html: &mut String, post: &Post) {
    let _ = writeln!(
        html,
        "<dl><dt class=\"sr-only\">Date</dt><dd class=\"text-sm leading-6\"><time datetime=\"{}\">{}</time></dd></dl>",
        post.created_time.to_rfc3339(),
        post.formatted_date()
    );
}

/// Render the table of contents sidebar. Nothing for pages without headings.
fn render_toc(html: &mut String, toc: &[TocEntry]) {
    if toc.is_empty() {
        return;
    }
    html.push_str("<aside class=\"w-[240px] flex-shrink-0 hidden lg:block pl-8\">\n<nav>\n");
    html.push_str("<h3 class=\"text-xs font-semibold uppercase text-gray-600 mb-3\">On this page</h3>\n<ul>\n");
    for entry in toc {
        let indent = match entry.level {
            1 => "",
            2 => " ml-3",
            _ => " ml-6",
        };
        let _ = writeln!(
            html,
            "<li class=\"text-sm{indent}\"><a href=\"#{}\">{}</a></li>",
            attr(&entry.id),
            escape(&entry.title)
        );
    }
    html.push_str("</ul>\n</nav>\n</aside>\n");
}

fn render_head(html: &mut String, title: &str) {
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let _ = writeln!(html, "<title>{}</title>", escape(title));
    html.push_str("</head>\n<body class=\"bg-white text-gray-900 antialiased\">\n");
}

fn render_tail(html: &mut String) {
    html.push_str("</body>\n</html>\n");
}
