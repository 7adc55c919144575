//! URL helpers for embedded media.

use std::sync::LazyLock;

use regex::Regex;

/// Regex for YouTube watch URLs.
static YOUTUBE_WATCH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https://www\.youtube\.com/watch\?v=(.+)$").unwrap());

/// Rewrite a YouTube watch URL to its embeddable form.
///
/// Other URLs are returned unchanged.
pub fn convert_to_embed_url(url: &str) -> String {
    YOUTUBE_WATCH_RE
        .replace(url, "https://www.youtube.com/embed/$1")
        .into_owned()
}

/// Whether the URL points at a post on Twitter or X.
pub fn is_tweet_url(url: &str) -> bool {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    let host = rest.split('/').next().unwrap_or_default();
    let host = host.strip_prefix("www.").unwrap_or(host);
    matches!(host, "twitter.com" | "x.com")
}
