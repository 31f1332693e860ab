//! json2rss - convert JSON Feed documents into RSS 2.0.
//!
//! Pure, deterministic text transformation over in-memory values: no
//! I/O, no shared state, every call independent. The two entry points
//! are [`build_json_feed`] (site data → JSON Feed) and [`render_rss`]
//! (JSON Feed → RSS 2.0 document).
//!
//! ```ignore
//! let feed = build_json_feed(&site, &posts);
//! let xml = render_rss(&feed, &RenderOptions::default());
//! ```

pub mod feed;
pub mod logger;
pub mod utils;

pub use feed::{
    DatePublished, InputError, JsonFeed, JsonFeedItem, Post, RenderOptions, SiteInfo, SiteSource,
    build_json_feed, render_rss,
};
