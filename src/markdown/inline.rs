//! Inline span rendering.
//!
//! Inline code spans are carved out before anything else so emphasis never
//! rewrites their content. Links are carved out next so URLs keep their
//! underscores and asterisks while link text still gets emphasis. On the
//! remaining plain pieces, bold runs before italic so a `**` pair is never
//! eaten as two `*` pairs.

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::Write;

static BOLD_ASTERISK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
static BOLD_UNDERSCORE: Lazy<Regex> = Lazy::new(|| Regex::new(r"__(.+?)__").unwrap());
static ITALIC_ASTERISK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*([^*]+)\*").unwrap());
static ITALIC_UNDERSCORE: Lazy<Regex> = Lazy::new(|| Regex::new(r"_([^_]+)_").unwrap());
static LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap());

/// Render the inline constructs of one text segment.
pub fn render_inline(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find('`') {
        let (before, from_tick) = rest.split_at(start);
        out.push_str(&render_links(before));
        match from_tick[1..].find('`') {
            Some(end) => {
                out.push_str("<code>");
                out.push_str(&from_tick[1..1 + end]);
                out.push_str("</code>");
                rest = &from_tick[end + 2..];
            }
            None => {
                // Unmatched backtick stays literal.
                out.push_str(from_tick);
                return out;
            }
        }
    }
    out.push_str(&render_links(rest));
    out
}

fn render_links(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for caps in LINK.captures_iter(text) {
        let m = caps.get(0).unwrap();
        out.push_str(&render_emphasis(&text[last..m.start()]));
        let _ = write!(
            out,
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
            &caps[2],
            render_emphasis(&caps[1])
        );
        last = m.end();
    }
    out.push_str(&render_emphasis(&text[last..]));
    out
}

fn render_emphasis(text: &str) -> String {
    let pass = BOLD_ASTERISK.replace_all(text, "<strong>$1</strong>");
    let pass = BOLD_UNDERSCORE.replace_all(&pass, "<strong>$1</strong>");
    let pass = ITALIC_ASTERISK.replace_all(&pass, "<em>$1</em>");
    ITALIC_UNDERSCORE.replace_all(&pass, "<em>$1</em>").into_owned()
}
