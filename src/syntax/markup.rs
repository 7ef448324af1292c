//! HTML rendering of scanned tokens

use super::Token;

pub const DEFAULT_CLASS_PREFIX: &str = "syn-";

/// Serializes tokens into `<span class="...">` markup for the editor overlay
#[derive(Debug, Clone)]
pub struct Renderer {
    class_prefix: String,
}

impl Renderer {
    pub fn new() -> Self {
        Self::with_prefix(DEFAULT_CLASS_PREFIX)
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            class_prefix: prefix.into(),
        }
    }

    /// Render tokens to markup. Always ends with exactly one extra `\n` so the
    /// overlay is as tall as the editable surface it sits under.
    pub fn render(&self, tokens: &[Token<'_>]) -> String {
        let mut out = String::with_capacity(tokens.iter().map(|t| t.text.len()).sum::<usize>() * 2);

        for token in tokens {
            match token.category.css_class() {
                Some(class) => {
                    out.push_str("<span class=\"");
                    escape_into(&mut out, &self.class_prefix);
                    out.push_str(class);
                    out.push_str("\">");
                    escape_into(&mut out, token.text);
                    out.push_str("</span>");
                }
                None => escape_into(&mut out, token.text),
            }
        }

        out.push('\n');
        out
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Render with the default `syn-` class prefix
pub fn render(tokens: &[Token<'_>]) -> String {
    Renderer::new().render(tokens)
}

/// Escape `&`, `<` and `>` in a single pass
pub fn escape_into(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            c => out.push(c),
        }
    }
}

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_into(&mut out, text);
    out
}
