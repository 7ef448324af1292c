//! Per-line highlight spans for terminal rendering

use super::{Category, scan};

/// A highlight span within a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlight {
    pub start: usize, // Byte offset within line
    pub end: usize,   // Byte offset within line, exclusive
    pub kind: Category,
}

/// A line with its syntax highlights
#[derive(Debug, Clone, Default)]
pub struct HighlightedLine {
    pub highlights: Vec<Highlight>,
}

impl HighlightedLine {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub(crate) fn kind_at(&self, col: usize) -> Category {
        self.highlights
            .iter()
            .find(|h| col >= h.start && col < h.end)
            .map_or(Category::Plain, |h| h.kind)
    }

    /// Split `line` into runs of equal category, covering it completely
    pub fn segments<'a>(&self, line: &'a str) -> Vec<(Category, &'a str)> {
        let mut segments = Vec::new();
        let mut pos = 0;
        for h in &self.highlights {
            let start = floor_char_boundary(line, h.start).max(pos);
            let end = floor_char_boundary(line, h.end);
            if start > pos {
                segments.push((Category::Plain, &line[pos..start]));
            }
            if end > start {
                segments.push((h.kind, &line[start..end]));
            }
            pos = pos.max(end);
        }
        if pos < line.len() {
            segments.push((Category::Plain, &line[pos..]));
        }
        segments
    }
}

/// Largest char boundary of `s` at or below `index`
fn floor_char_boundary(s: &str, index: usize) -> usize {
    let mut index = index.min(s.len());
    while !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

/// Characters that end a line in the editor's rope
pub fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\u{000B}' | '\u{000C}' | '\r' | '\u{0085}' | '\u{2028}' | '\u{2029}'
    )
}

/// `line` without its trailing line break; `\r\n` is a single break
pub fn trim_line_break(line: &str) -> &str {
    if let Some(rest) = line.strip_suffix("\r\n") {
        return rest;
    }
    match line.chars().next_back() {
        Some(c) if is_line_break(c) => &line[..line.len() - c.len_utf8()],
        _ => line,
    }
}

/// Byte offset where each line begins, splitting exactly where the rope does
fn line_starts(source: &str) -> Vec<usize> {
    let mut starts = vec![0];
    let mut chars = source.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if c == '\r' && chars.peek().is_some_and(|&(_, next)| next == '\n') {
            continue;
        }
        if is_line_break(c) {
            starts.push(i + c.len_utf8());
        }
    }
    starts
}

/// Keeps the line highlights of the most recently parsed source
#[derive(Debug, Default)]
pub struct Highlighter {
    line_highlights: Vec<HighlightedLine>,
}

impl Highlighter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rescan the whole source, replacing all previous highlights
    pub fn parse(&mut self, source: &str) {
        let line_starts = line_starts(source);
        self.line_highlights = vec![HighlightedLine::new(); line_starts.len()];

        for token in scan(source) {
            if token.category.is_plain() {
                continue;
            }

            let start_line = line_starts.partition_point(|&s| s <= token.start) - 1;
            let mut line = start_line;

            // Strings may run over several lines; give each line its piece.
            loop {
                let line_start = line_starts[line];
                let next_start = line_starts.get(line + 1).copied().unwrap_or(source.len());
                let line_end = line_start + trim_line_break(&source[line_start..next_start]).len();

                let start = token.start.max(line_start) - line_start;
                let end = token.end().min(line_end) - line_start;
                if start < end {
                    self.line_highlights[line].highlights.push(Highlight {
                        start,
                        end,
                        kind: token.category,
                    });
                }

                if token.end() <= next_start || line + 1 >= line_starts.len() {
                    break;
                }
                line += 1;
            }
        }
    }

    /// Get highlights for a specific line
    pub fn line_highlights(&self, line: usize) -> Option<&HighlightedLine> {
        self.line_highlights.get(line)
    }

    pub fn line_count(&self) -> usize {
        self.line_highlights.len()
    }
}
