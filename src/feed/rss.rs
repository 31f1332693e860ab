//! RSS 2.0 rendering.
//!
//! Assembles the document as text rather than driving an XML writer: the
//! output contract fixes element order, indentation, CDATA bodies and an
//! always-present Atom self-link, and downstream feed readers consume the
//! exact shape produced here.

use super::types::{JsonFeed, JsonFeedItem, RenderOptions};
use crate::utils::xml::escape;
use url::Url;

/// Render a complete RSS 2.0 document from a JSON Feed.
///
/// Always returns a full envelope, even for a wholly empty feed; absent
/// channel fields are omitted, absent `items` renders zero items.
pub fn render_rss(feed: &JsonFeed, options: &RenderOptions) -> String {
    let feed_url = effective_feed_url(feed, options);

    let mut channel = String::new();
    if let Some(title) = non_empty(feed.title.as_ref()) {
        channel.push_str(&format!("    <title>{}</title>\n", escape(title)));
    }
    if let Some(description) = non_empty(feed.description.as_ref()) {
        channel.push_str(&format!(
            "    <description>{}</description>\n",
            escape(description)
        ));
    }
    if let Some(home) = non_empty(feed.home_page_url.as_ref()) {
        channel.push_str(&format!("    <link>{home}</link>\n"));
    }
    if let Some(language) = non_empty(options.language.as_ref()) {
        channel.push_str(&format!("    <language>{language}</language>\n"));
    }
    channel.push_str(&format!(
        "    <atom:link href=\"{feed_url}\" rel=\"self\" type=\"application/rss+xml\"/>\n"
    ));

    if let Some(items) = &feed.items {
        for item in items {
            channel.push_str(&render_item(item));
        }
    }

    format!(
        "<?xml version=\"1.0\" ?>\n\
         <rss version=\"2.0\" xmlns:atom=\"http://www.w3.org/2005/Atom\" xmlns:content=\"http://purl.org/rss/1.0/modules/content/\">\n\
         \x20 <channel>\n\
         {channel}\x20 </channel>\n\
         </rss>"
    )
}

/// Render one `<item>` fragment.
///
/// Sub-elements appear in fixed order, each only when its field is
/// present and non-empty. Title and description are escaped; link, guid
/// and CDATA content are embedded verbatim.
pub fn render_item(item: &JsonFeedItem) -> String {
    let mut out = String::from("    <item>\n");

    let pub_date = item.date_published.as_ref().map(|d| d.to_pub_date());
    if let Some(date) = pub_date.as_deref().filter(|d| !d.is_empty()) {
        out.push_str(&format!("      <pubDate>{date}</pubDate>\n"));
    }
    if let Some(title) = non_empty(item.title.as_ref()) {
        out.push_str(&format!("      <title>{}</title>\n", escape(title)));
    }
    if let Some(url) = non_empty(item.url.as_ref()) {
        out.push_str(&format!("      <link>{url}</link>\n"));
    }
    if let Some(id) = non_empty(item.id.as_ref()) {
        // Identifiers that aren't absolute URLs must not be treated as
        // dereferenceable permalinks
        let marker = if Url::parse(id).is_ok() {
            ""
        } else {
            " isPermaLink=\"false\""
        };
        out.push_str(&format!("      <guid{marker}>{id}</guid>\n"));
    }
    if let Some(summary) = non_empty(item.summary.as_ref()) {
        out.push_str(&format!(
            "      <description>{}</description>\n",
            escape(summary)
        ));
    }
    if let Some(content) = non_empty(item.content_html.as_ref()) {
        out.push_str(&format!(
            "      <content:encoded><![CDATA[{content}]]></content:encoded>\n"
        ));
    }

    out.push_str("    </item>\n");
    out
}

/// Resolve the self-link URL: the options override wins, else the feed's
/// own URL with its `.json` extension swapped for `.xml`, else empty.
///
/// The swap replaces the first `.json` occurrence whenever the value ends
/// in `.json`, not strictly the suffix.
fn effective_feed_url(feed: &JsonFeed, options: &RenderOptions) -> String {
    if let Some(url) = non_empty(options.feed_url.as_ref()) {
        return url.to_string();
    }
    match non_empty(feed.feed_url.as_ref()) {
        Some(url) if url.ends_with(".json") => url.replacen(".json", ".xml", 1),
        Some(url) => url.to_string(),
        None => String::new(),
    }
}

/// Empty strings count as absent; present means "emit the element".
fn non_empty(field: Option<&String>) -> Option<&str> {
    field.map(String::as_str).filter(|s| !s.is_empty())
}
