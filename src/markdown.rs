//! Markdown Rendering
//!
//! Job descriptions are authored in Markdown by admins. Rendering goes
//! through pulldown-cmark with:
//! - raw HTML shown as text rather than injected
//! - `javascript:`-style link targets dropped
//! - a plain-text excerpt for table cells

use pulldown_cmark::{html::push_html, CowStr, Event, Options, Parser, Tag, TagEnd};

/// URL schemes a rendered link or image may not use
const BLOCKED_SCHEMES: &[&str] = &["javascript:", "vbscript:", "data:text/html"];

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES | Options::ENABLE_TASKLISTS
}

fn is_blocked(url: &str) -> bool {
    let lowered: String = url
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_ascii_lowercase();
    BLOCKED_SCHEMES.iter().any(|scheme| lowered.starts_with(scheme))
}

fn safe_url(url: CowStr<'_>) -> CowStr<'_> {
    if is_blocked(&url) {
        CowStr::Borrowed("#")
    } else {
        url
    }
}

/// Render Markdown to HTML safe to set as `inner_html`
pub fn parse_markdown(text: &str) -> String {
    let events = Parser::new_ext(text, get_options()).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link { link_type, dest_url, title, id }) => Event::Start(Tag::Link {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        }),
        Event::Start(Tag::Image { link_type, dest_url, title, id }) => Event::Start(Tag::Image {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        }),
        other => other,
    });
    let mut html_output = String::new();
    push_html(&mut html_output, events);
    html_output
}

/// First `limit` characters of the visible text, with an ellipsis when cut
pub fn excerpt(text: &str, limit: usize) -> String {
    let mut plain = String::new();
    for event in Parser::new_ext(text, get_options()) {
        match event {
            Event::Text(t) | Event::Code(t) => plain.push_str(&t),
            Event::SoftBreak
            | Event::HardBreak
            | Event::End(TagEnd::Paragraph | TagEnd::Heading(_) | TagEnd::Item | TagEnd::TableCell) => plain.push(' '),
            _ => {}
        }
    }
    let plain = plain.split_whitespace().collect::<Vec<_>>().join(" ");
    if plain.chars().count() <= limit {
        return plain;
    }
    let cut: String = plain.chars().take(limit).collect();
    format!("{}…", cut.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_rendering() {
        let html = parse_markdown("**Paid** internship\n\n- Rust\n- SQL");
        assert!(html.contains("<strong>Paid</strong>"));
        assert!(html.contains("<li>Rust</li>"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = parse_markdown("hello <script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));

        let html = parse_markdown("<div onclick=\"x()\">block</div>");
        assert!(!html.contains("<div"));
    }

    #[test]
    fn test_script_links_are_dropped() {
        let html = parse_markdown("[apply](javascript:alert(1))");
        assert!(html.contains("href=\"#\""));
        assert!(!html.contains("javascript"));

        let html = parse_markdown("[apply](https://example.com/apply)");
        assert!(html.contains("href=\"https://example.com/apply\""));
    }

    #[test]
    fn test_excerpt() {
        assert_eq!(excerpt("# Title\n\nSome *text* here", 100), "Title Some text here");
        assert_eq!(excerpt("abcdefghij", 4), "abcd…");
        assert_eq!(excerpt("", 10), "");
    }
}
