//! Markdown rendering for blog articles.
//!
//! A single-pass line classifier followed by explicit block assembly. The
//! supported subset is the flat one the site's articles use: ATX headings
//! (levels 1-3), bold and italic, fenced and inline code, links, flat list
//! items, pipe tables, and paragraphs. Anything else stays literal text and
//! rendering never fails.
//!
//! Ordering is structural rather than sequential: fenced code is captured
//! before any classification, inline code spans are carved out before
//! emphasis, and table detection runs on raw source lines only. Lines that
//! already look like markup pass through unwrapped, so rendering rendered
//! output does not double-wrap headings or list items. An unterminated fence
//! closes at end of input.
//!
//! Article content is author-supplied and trusted; text is not HTML escaped.

mod inline;
mod line;

use inline::render_inline;
use line::{classify, Line};

/// Render a Markdown document to an HTML string.
pub fn render(markdown: &str) -> String {
    render_blocks(markdown).join("\n")
}

/// Render to the ordered list of block-level HTML fragments.
pub fn render_blocks(markdown: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut paragraph: Vec<&str> = Vec::new();
    let mut table: Vec<Vec<&str>> = Vec::new();
    let mut code: Option<Vec<&str>> = None;

    for raw in markdown.lines() {
        if let Some(lines) = code.as_mut() {
            if raw.trim_end().starts_with("```") {
                blocks.push(close_code(lines));
                code = None;
            } else {
                lines.push(raw);
            }
            continue;
        }

        let class = classify(raw);
        if !matches!(class, Line::TableRow(_)) {
            flush_table(&mut table, &mut blocks);
        }
        if !matches!(class, Line::Text(_)) {
            flush_paragraph(&mut paragraph, &mut blocks);
        }

        match class {
            Line::Fence(_) => code = Some(Vec::new()),
            Line::Heading { level, text } => {
                blocks.push(format!("<h{level}>{}</h{level}>", render_inline(text)));
            }
            Line::ListItem(text) => blocks.push(format!("<li>{}</li>", render_inline(text))),
            Line::TableRow(cells) => table.push(cells),
            Line::Blank => {}
            Line::Html(markup) => blocks.push(markup.to_string()),
            Line::Text(text) => paragraph.push(text),
        }
    }

    if let Some(lines) = code {
        blocks.push(close_code(&lines));
    }
    flush_table(&mut table, &mut blocks);
    flush_paragraph(&mut paragraph, &mut blocks);
    blocks
}

fn close_code(lines: &[&str]) -> String {
    format!("<pre><code>{}</code></pre>", lines.join("\n"))
}

fn flush_paragraph(lines: &mut Vec<&str>, blocks: &mut Vec<String>) {
    if lines.is_empty() {
        return;
    }
    let text = lines.join("\n");
    lines.clear();
    blocks.push(format!("<p>{}</p>", render_inline(&text)));
}

// Alignment rows like |---|:--:| separate header from body in the source
// but carry no content.
fn is_separator_row(cells: &[&str]) -> bool {
    cells
        .iter()
        .all(|c| c.chars().all(|ch| matches!(ch, '-' | ':')))
}

fn flush_table(rows: &mut Vec<Vec<&str>>, blocks: &mut Vec<String>) {
    if rows.is_empty() {
        return;
    }
    let mut html = String::from("<table><tbody>");
    for cells in rows.iter().filter(|cells| !is_separator_row(cells)) {
        html.push_str("<tr>");
        for cell in cells {
            html.push_str("<td>");
            html.push_str(&render_inline(cell));
            html.push_str("</td>");
        }
        html.push_str("</tr>");
    }
    html.push_str("</tbody></table>");
    rows.clear();
    blocks.push(html);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn article_scenario_keeps_block_order() {
        let doc = "# Title\n\nSome **bold** text.\n\n* item one\n* item two";
        let blocks = render_blocks(doc);
        assert_eq!(
            blocks,
            vec![
                "<h1>Title</h1>",
                "<p>Some <strong>bold</strong> text.</p>",
                "<li>item one</li>",
                "<li>item two</li>",
            ]
        );
    }

    #[test]
    fn fenced_code_keeps_emphasis_markers_literal() {
        let doc = "```rust\nlet x = a * b * c;\nlet y = **ptr;\n```";
        let html = render(doc);
        assert_eq!(
            html,
            "<pre><code>let x = a * b * c;\nlet y = **ptr;</code></pre>"
        );
        assert!(!html.contains("<em>"));
        assert!(!html.contains("<strong>"));
    }

    #[test]
    fn code_lines_are_never_classified() {
        let doc = "```\n# not a heading\n* not a list\n|not|a|table|\n```";
        let html = render(doc);
        assert!(html.contains("# not a heading"));
        assert!(html.contains("* not a list"));
        assert!(!html.contains("<h1>"));
        assert!(!html.contains("<li>"));
        assert!(!html.contains("<table>"));
    }

    #[test]
    fn unterminated_fence_closes_at_end_of_input() {
        let html = render("```\nlet a = 1;");
        assert_eq!(html, "<pre><code>let a = 1;</code></pre>");
    }

    #[test]
    fn paragraphs_split_on_blank_lines_only() {
        let doc = "first line\nsecond line\n\nnext paragraph";
        let blocks = render_blocks(doc);
        assert_eq!(
            blocks,
            vec!["<p>first line\nsecond line</p>", "<p>next paragraph</p>"]
        );
    }

    #[test]
    fn table_rows_assemble_into_one_table() {
        let doc = "| Region | Latency |\n|--------|---------|\n| eu-1 | 12ms |\n| us-2 | 80ms |";
        let blocks = render_blocks(doc);
        assert_eq!(blocks.len(), 1);
        assert_eq!(
            blocks[0],
            "<table><tbody>\
             <tr><td>Region</td><td>Latency</td></tr>\
             <tr><td>eu-1</td><td>12ms</td></tr>\
             <tr><td>us-2</td><td>80ms</td></tr>\
             </tbody></table>"
        );
    }

    #[test]
    fn table_run_ends_at_non_table_line() {
        let doc = "|a|b|\n\n|c|d|";
        let blocks = render_blocks(doc);
        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].contains("<td>a</td>"));
        assert!(blocks[1].contains("<td>c</td>"));
    }

    #[test]
    fn rendering_rendered_output_is_stable() {
        let doc = "# Title\n\nA single line.\n\n* one\n* two\n\n| a | b |\n| c | d |";
        let once = render(doc);
        let twice = render(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn heading_text_gets_inline_rendering() {
        let html = render("## Shipping `v2` **fast**");
        assert_eq!(
            html,
            "<h2>Shipping <code>v2</code> <strong>fast</strong></h2>"
        );
    }

    #[test]
    fn links_inside_paragraphs() {
        let html = render("Read [the guide](https://example.com/guide).");
        assert!(html.starts_with("<p>Read <a href=\"https://example.com/guide\""));
        assert!(html.contains("rel=\"noopener noreferrer\""));
    }

    #[test]
    fn empty_input_renders_empty() {
        assert_eq!(render(""), "");
    }
}
