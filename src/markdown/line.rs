//! Line classification for the renderer.

/// One classified source line.
///
/// Classification only looks at the line itself; code-fence state is the
/// caller's, so lines inside a fenced block never reach [`classify`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    /// Code fence delimiter, with an optional language tag.
    Fence(Option<&'a str>),
    Heading { level: u8, text: &'a str },
    ListItem(&'a str),
    TableRow(Vec<&'a str>),
    Blank,
    /// Already-rendered markup, passed through untouched.
    Html(&'a str),
    Text(&'a str),
}

pub fn classify(line: &str) -> Line<'_> {
    let trimmed = line.trim_end();
    if trimmed.trim_start().is_empty() {
        return Line::Blank;
    }

    if let Some(rest) = trimmed.strip_prefix("```") {
        let tag = rest.trim();
        return Line::Fence(if tag.is_empty() { None } else { Some(tag) });
    }

    // Longest prefix first so "### " is never read as "# ".
    for (prefix, level) in [("### ", 3u8), ("## ", 2), ("# ", 1)] {
        if let Some(text) = trimmed.strip_prefix(prefix) {
            return Line::Heading { level, text };
        }
    }

    if let Some(text) = trimmed
        .strip_prefix("* ")
        .or_else(|| trimmed.strip_prefix("- "))
        .or_else(|| ordered_item(trimmed))
    {
        return Line::ListItem(text);
    }

    if let Some(cells) = table_cells(trimmed) {
        return Line::TableRow(cells);
    }

    if trimmed.starts_with('<') {
        return Line::Html(trimmed);
    }

    Line::Text(trimmed)
}

fn ordered_item(line: &str) -> Option<&str> {
    let rest = line.trim_start_matches(|c: char| c.is_ascii_digit());
    if rest.len() < line.len() {
        return rest.strip_prefix(". ");
    }
    None
}

fn table_cells(line: &str) -> Option<Vec<&str>> {
    let inner = line.strip_prefix('|')?.strip_suffix('|')?;
    if inner.is_empty() {
        return None;
    }
    let cells: Vec<&str> = inner
        .split('|')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .collect();
    if cells.is_empty() {
        None
    } else {
        Some(cells)
    }
}
