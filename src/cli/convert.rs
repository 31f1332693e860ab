//! `convert` command: JSON Feed document → RSS 2.0 text.

use super::args::ConvertArgs;
use super::common::{read_input, write_output};
use anyhow::Result;
use json2rss::{JsonFeed, RenderOptions, render_rss};

pub fn run(args: &ConvertArgs) -> Result<()> {
    let text = read_input(&args.input)?;
    let feed = JsonFeed::from_json(&text)?;

    let options = RenderOptions {
        feed_url: args.feed_url.clone(),
        language: args.language.clone(),
    };
    let xml = render_rss(&feed, &options);

    write_output(args.output.as_deref(), &xml, "rss")
}
