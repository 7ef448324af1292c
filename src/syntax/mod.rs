//! Syntax highlighting for Dabara source
//!
//! `scan` classifies the text, `render` turns the tokens into overlay markup,
//! and `Highlighter` regroups them per line for the terminal views.
//! None of these can fail: any input, however malformed, is highlighted.

mod alphabet;
mod category;
mod highlighter;
mod markup;
mod scanner;

pub use alphabet::{HAUSA_LETTERS, is_ident_char, is_ident_start};
pub use category::Category;
pub use highlighter::{Highlight, HighlightedLine, Highlighter, is_line_break, trim_line_break};
pub use markup::{DEFAULT_CLASS_PREFIX, Renderer, escape, render};
pub use scanner::{Token, scan};

/// Scan and render in one step, as the editor does on every change
pub fn highlight(source: &str) -> String {
    render(&scan(source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::samples;

    #[test]
    fn highlight_is_scan_then_render() {
        let source = "aiki f(a) {\n  mayar a + 1\n}";
        assert_eq!(highlight(source), render(&scan(source)));
    }

    #[test]
    fn every_sample_highlights() {
        for name in samples::names() {
            let source = samples::get(name).unwrap();
            let markup = highlight(source);
            assert!(markup.ends_with('\n'));
            assert_eq!(
                markup.matches("<span").count(),
                markup.matches("</span>").count()
            );
        }
    }
}
