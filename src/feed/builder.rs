//! JSON Feed construction from site data.

use super::types::{DatePublished, JsonFeed, JsonFeedItem, Post, SiteInfo};
use regex::{NoExpand, Regex};
use std::sync::LazyLock;

const JSONFEED_VERSION: &str = "https://jsonfeed.org/version/1.1";

/// Build a JSON Feed from site information and an ordered list of posts.
///
/// Produces one item per post, in input order. Each post's permalink
/// (`{site.url}/posts/{slug}`) doubles as its id; the date string is
/// carried through unparsed and the body's root-relative asset
/// references are rewritten to absolute URLs.
pub fn build_json_feed(site: &SiteInfo, posts: &[Post]) -> JsonFeed {
    let items = posts
        .iter()
        .map(|post| {
            let permalink = format!("{}/posts/{}", site.url, post.slug);
            JsonFeedItem {
                content_html: Some(absolutize_assets(&post.body, &site.url)),
                id: Some(permalink.clone()),
                summary: None,
                title: Some(post.title.clone()),
                url: Some(permalink),
                date_published: Some(DatePublished::Raw(post.date.clone())),
            }
        })
        .collect();

    JsonFeed {
        version: Some(JSONFEED_VERSION.to_string()),
        title: Some(site.title.clone()),
        description: Some(site.description.clone()),
        home_page_url: Some(site.url.clone()),
        feed_url: Some(format!("{}/feed.json", site.url)),
        items: Some(items),
    }
}

/// Rewrite every root-relative `src="/…"` reference to an absolute URL
/// under `base_url`.
fn absolutize_assets(body: &str, base_url: &str) -> String {
    static RE_ROOT_SRC: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r#"src="/"#).unwrap());

    let replacement = format!("src=\"{base_url}/");
    // NoExpand: a `$` in the site URL is not a capture reference
    RE_ROOT_SRC
        .replace_all(body, NoExpand(&replacement))
        .into_owned()
}
