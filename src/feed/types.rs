//! JSON Feed data model.
//!
//! Value types mirroring the JSON Feed v1.1 field names, plus the site
//! source shape consumed by the feed builder. Everything here is a plain
//! value: constructed per call, never mutated, no identity beyond its
//! fields. Absent optional fields mean "omit the element", so they skip
//! serialization instead of emitting `null`.

use crate::utils::date::DateTimeUtc;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use thiserror::Error;

/// One feed entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JsonFeedItem {
    /// Rich HTML body, embedded verbatim in a CDATA section when rendered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_html: Option<String>,

    /// Stable identifier, which may itself be a URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Plain-text description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Canonical link, treated as pre-validated and not escaped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_published: Option<DatePublished>,
}

/// A publication date: either a parsed instant or whatever text the
/// caller supplied.
///
/// Untagged, so JSON strings that parse as ISO 8601 deserialize as
/// `Timestamp` and everything else falls through to `Raw`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DatePublished {
    Timestamp(DateTimeUtc),
    Raw(String),
}

impl DatePublished {
    /// RFC 2822 text for the RSS `<pubDate>` element.
    ///
    /// Raw text is given one ISO 8601 parse attempt; if that fails it
    /// passes through verbatim rather than failing the render.
    pub fn to_pub_date(&self) -> String {
        match self {
            Self::Timestamp(dt) => dt.to_rfc2822(),
            Self::Raw(text) => DateTimeUtc::parse(text)
                .map(DateTimeUtc::to_rfc2822)
                .unwrap_or_else(|| text.clone()),
        }
    }
}

impl Serialize for DateTimeUtc {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_rfc3339())
    }
}

impl<'de> Deserialize<'de> for DateTimeUtc {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text)
            .ok_or_else(|| de::Error::custom(format!("invalid ISO 8601 datetime: {text}")))
    }
}

/// The overall feed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JsonFeed {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_page_url: Option<String>,

    /// The feed's own canonical URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feed_url: Option<String>,

    /// Entries in rendering order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<JsonFeedItem>>,
}

impl JsonFeed {
    pub fn from_json(text: &str) -> Result<Self, InputError> {
        serde_json::from_str(text).map_err(InputError::Feed)
    }
}

/// Rendering options for the RSS output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderOptions {
    /// Overrides the feed's own `feed_url` for the self-link.
    pub feed_url: Option<String>,

    /// Channel language tag (e.g. "en-us").
    pub language: Option<String>,
}

/// Basic site information for the builder path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteInfo {
    pub title: String,
    pub description: String,
    /// Base URL of the site, no trailing slash.
    pub url: String,
}

/// One blog post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub title: String,
    /// HTML body; root-relative `src="/…"` references get absolutized.
    pub body: String,
    /// Date string, carried through unparsed.
    pub date: String,
    /// URL path segment, unique per post.
    pub slug: String,
}

/// Site + posts input document for `build_json_feed`.
///
/// Posts are an ordered list (JSON objects don't guarantee key order
/// across tooling); the slug lives on the post itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteSource {
    pub site: SiteInfo,
    pub posts: Vec<Post>,
}

impl SiteSource {
    pub fn from_json(text: &str) -> Result<Self, InputError> {
        serde_json::from_str(text).map_err(InputError::Site)
    }
}

/// Input document errors
#[derive(Debug, Error)]
pub enum InputError {
    #[error("invalid JSON Feed document")]
    Feed(#[source] serde_json::Error),

    #[error("invalid site source document")]
    Site(#[source] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_deserialize_iso_date() {
        let item: JsonFeedItem =
            serde_json::from_str(r#"{"date_published": "2024-06-15T14:30:45Z"}"#).unwrap();
        assert_eq!(
            item.date_published,
            Some(DatePublished::Timestamp(DateTimeUtc::new(
                2024, 6, 15, 14, 30, 45
            )))
        );
    }

    #[test]
    fn test_item_deserialize_raw_date() {
        let item: JsonFeedItem =
            serde_json::from_str(r#"{"date_published": "last tuesday"}"#).unwrap();
        assert_eq!(
            item.date_published,
            Some(DatePublished::Raw("last tuesday".to_string()))
        );
    }

    #[test]
    fn test_date_published_serialize() {
        let ts = DatePublished::Timestamp(DateTimeUtc::new(2024, 6, 15, 14, 30, 45));
        assert_eq!(
            serde_json::to_string(&ts).unwrap(),
            r#""2024-06-15T14:30:45Z""#
        );

        let raw = DatePublished::Raw("last tuesday".to_string());
        assert_eq!(serde_json::to_string(&raw).unwrap(), r#""last tuesday""#);
    }

    #[test]
    fn test_to_pub_date() {
        let ts = DatePublished::Timestamp(DateTimeUtc::new(2024, 1, 15, 0, 0, 0));
        assert_eq!(ts.to_pub_date(), "Mon, 15 Jan 2024 00:00:00 GMT");

        let parseable = DatePublished::Raw("2024-01-15".to_string());
        assert_eq!(parseable.to_pub_date(), "Mon, 15 Jan 2024 00:00:00 GMT");

        let raw = DatePublished::Raw("last tuesday".to_string());
        assert_eq!(raw.to_pub_date(), "last tuesday");
    }

    #[test]
    fn test_feed_absent_fields_skip_serialization() {
        let feed = JsonFeed::default();
        assert_eq!(serde_json::to_string(&feed).unwrap(), "{}");

        let item = JsonFeedItem::default();
        assert_eq!(serde_json::to_string(&item).unwrap(), "{}");
    }

    #[test]
    fn test_feed_from_json_tolerates_unknown_fields() {
        let feed = JsonFeed::from_json(
            r#"{"title": "T", "authors": [{"name": "ignored"}], "items": []}"#,
        )
        .unwrap();
        assert_eq!(feed.title.as_deref(), Some("T"));
        assert_eq!(feed.items, Some(vec![]));
    }

    #[test]
    fn test_feed_from_json_invalid() {
        let err = JsonFeed::from_json("not json").unwrap_err();
        assert!(matches!(err, InputError::Feed(_)));
    }

    #[test]
    fn test_site_source_from_json() {
        let source = SiteSource::from_json(
            r#"{
                "site": {"title": "T", "description": "D", "url": "https://s.test"},
                "posts": [
                    {"title": "A", "body": "<p>a</p>", "date": "2024-01-01", "slug": "a"}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(source.site.url, "https://s.test");
        assert_eq!(source.posts.len(), 1);
        assert_eq!(source.posts[0].slug, "a");
    }

    #[test]
    fn test_site_source_missing_field() {
        let err = SiteSource::from_json(r#"{"site": {"title": "T"}, "posts": []}"#).unwrap_err();
        assert!(matches!(err, InputError::Site(_)));
    }
}
