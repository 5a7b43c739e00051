//! Markdown rendering for transcript entries.
//!
//! Replies come from a remote model and are inserted with `inner_html`, so the
//! event stream is sanitized before it reaches the HTML writer: raw HTML is
//! re-emitted as escaped text, and script-capable link targets are replaced.

#[cfg(test)]
#[path = "markdown_test.rs"]
mod markdown_test;

use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, html};

const BLOCKED_SCHEMES: [&str; 3] = ["javascript:", "vbscript:", "data:"];

/// Render message text to HTML. Every newline in the source becomes `<br />`.
pub fn render(text: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(text, options).map(|event| match event {
        Event::SoftBreak => Event::HardBreak,
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link { link_type, dest_url, title, id }) => {
            Event::Start(Tag::Link { link_type, dest_url: neutralize(dest_url), title, id })
        }
        Event::Start(Tag::Image { link_type, dest_url, title, id }) => {
            Event::Start(Tag::Image { link_type, dest_url: neutralize(dest_url), title, id })
        }
        other => other,
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

fn neutralize(dest: CowStr<'_>) -> CowStr<'_> {
    if is_blocked_url(&dest) { CowStr::Borrowed("#") } else { dest }
}

/// Browsers drop whitespace and control characters while parsing a scheme,
/// so `java\tscript:` has to be caught as well.
fn is_blocked_url(url: &str) -> bool {
    let normalized: String = url
        .chars()
        .filter(|c| !c.is_whitespace() && !c.is_control())
        .take(16)
        .collect::<String>()
        .to_ascii_lowercase();
    BLOCKED_SCHEMES
        .iter()
        .any(|scheme| normalized.starts_with(scheme))
}
