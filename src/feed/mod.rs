//! JSON Feed data model, feed construction and RSS 2.0 rendering.
//!
//! Two independent, stateless paths share the data model:
//!
//! - [`build_json_feed`]: site info + posts → JSON Feed structure
//! - [`render_rss`]: JSON Feed structure (+ options) → RSS 2.0 text
//!
//! The paths chain: the builder's output feeds straight into the
//! renderer.

pub mod builder;
pub mod rss;
pub mod types;

pub use builder::build_json_feed;
pub use rss::{render_item, render_rss};
pub use types::{
    DatePublished, InputError, JsonFeed, JsonFeedItem, Post, RenderOptions, SiteInfo, SiteSource,
};
