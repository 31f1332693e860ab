//! `build` command: site source → JSON Feed (or straight to RSS).

use super::args::BuildArgs;
use super::common::{read_input, write_output};
use anyhow::{Context, Result};
use json2rss::{RenderOptions, SiteSource, build_json_feed, render_rss};

pub fn run(args: &BuildArgs) -> Result<()> {
    let text = read_input(&args.input)?;
    let source = SiteSource::from_json(&text)?;
    let feed = build_json_feed(&source.site, &source.posts);

    if args.rss {
        let xml = render_rss(&feed, &RenderOptions::default());
        write_output(args.output.as_deref(), &xml, "rss")
    } else {
        let json = serde_json::to_string_pretty(&feed).context("failed to serialize feed")?;
        write_output(args.output.as_deref(), &format!("{json}\n"), "feed")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use json2rss::JsonFeed;
    use tempfile::tempdir;

    const SOURCE: &str = r#"{
        "site": {"title": "T", "description": "D", "url": "https://s.test"},
        "posts": [
            {"title": "A", "body": "<img src=\"/x.png\">", "date": "2024-01-01", "slug": "a"}
        ]
    }"#;

    #[test]
    fn test_build_emits_json_feed() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("site.json");
        let output = dir.path().join("feed.json");
        std::fs::write(&input, SOURCE).unwrap();

        let args = BuildArgs {
            input,
            output: Some(output.clone()),
            rss: false,
        };
        run(&args).unwrap();

        let feed = JsonFeed::from_json(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(feed.feed_url.as_deref(), Some("https://s.test/feed.json"));
        let items = feed.items.unwrap();
        assert_eq!(items[0].url.as_deref(), Some("https://s.test/posts/a"));
        assert_eq!(
            items[0].content_html.as_deref(),
            Some(r#"<img src="https://s.test/x.png">"#)
        );
    }

    #[test]
    fn test_build_rss_chains_renderer() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("site.json");
        let output = dir.path().join("feed.xml");
        std::fs::write(&input, SOURCE).unwrap();

        let args = BuildArgs {
            input,
            output: Some(output.clone()),
            rss: true,
        };
        run(&args).unwrap();

        let xml = std::fs::read_to_string(&output).unwrap();
        let source = SiteSource::from_json(SOURCE).unwrap();
        let feed = build_json_feed(&source.site, &source.posts);
        assert_eq!(xml, render_rss(&feed, &RenderOptions::default()));
    }
}
