use std::io::{self, Write, stdout};

use crossterm::{
    cursor::{Hide, MoveTo, SetCursorStyle, Show},
    execute, queue,
    style::{Attribute, Print, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{
        self, Clear, ClearType, DisableLineWrap, EnableLineWrap, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};

use crate::editor::Editor;
use crate::syntax::{Category, HighlightedLine, trim_line_break};
use crate::theme::{Style, Theme};

const GUTTER_WIDTH: u16 = 4;

/// Full-screen terminal view of an [`Editor`]
pub struct Renderer {
    pub width: u16,
    pub height: u16,
    pub show_line_numbers: bool,
}

impl Renderer {
    pub fn new(show_line_numbers: bool) -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        Ok(Self {
            width,
            height,
            show_line_numbers,
        })
    }

    pub fn setup() -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            stdout(),
            EnterAlternateScreen,
            DisableLineWrap,
            Hide,
            Clear(ClearType::All)
        )?;
        Ok(())
    }

    pub fn teardown() -> io::Result<()> {
        execute!(
            stdout(),
            SetCursorStyle::DefaultUserShape,
            Show,
            EnableLineWrap,
            LeaveAlternateScreen
        )?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    /// Rows available for text, excluding the status line
    pub fn text_height(&self) -> usize {
        self.height.saturating_sub(1) as usize
    }

    fn gutter_width(&self) -> u16 {
        if self.show_line_numbers { GUTTER_WIDTH } else { 0 }
    }

    pub fn render(&self, editor: &Editor, theme: &Theme) -> io::Result<()> {
        let mut stdout = stdout();

        // Hide cursor during redraw to prevent flicker
        queue!(stdout, Hide)?;
        queue!(stdout, SetBackgroundColor(theme.background.to_crossterm()))?;

        self.render_text(&mut stdout, editor, theme)?;
        self.render_status_line(&mut stdout, editor, theme)?;

        let cursor_x = self.gutter_width() + editor.cursor.col as u16;
        let cursor_y = (editor.cursor.line - editor.scroll_offset) as u16;
        queue!(stdout, MoveTo(cursor_x, cursor_y))?;
        queue!(stdout, SetCursorStyle::BlinkingBar)?;
        queue!(stdout, Show)?;

        stdout.flush()?;
        Ok(())
    }

    fn render_text(
        &self,
        stdout: &mut impl Write,
        editor: &Editor,
        theme: &Theme,
    ) -> io::Result<()> {
        let line_count = editor.buffer.line_count();
        let text_width = self.width.saturating_sub(self.gutter_width()) as usize;
        let empty = HighlightedLine::new();

        for row in 0..self.text_height() {
            let line_idx = row + editor.scroll_offset;
            queue!(stdout, MoveTo(0, row as u16))?;
            queue!(stdout, SetBackgroundColor(theme.background.to_crossterm()))?;

            if line_idx >= line_count {
                queue!(stdout, SetForegroundColor(theme.line_number.to_crossterm()))?;
                let marker = if self.show_line_numbers { "  ~ " } else { "~" };
                queue!(stdout, Print(marker))?;
                queue!(stdout, Clear(ClearType::UntilNewLine))?;
                continue;
            }

            if self.show_line_numbers {
                let color = if line_idx == editor.cursor.line {
                    theme.line_number_active
                } else {
                    theme.line_number
                };
                queue!(stdout, SetForegroundColor(color.to_crossterm()))?;
                queue!(stdout, Print(format!("{:>3} ", line_idx + 1)))?;
            }

            let line = editor.buffer.line(line_idx).to_string();
            let content = trim_line_break(&line);
            let highlights = editor.highlighter.line_highlights(line_idx).unwrap_or(&empty);

            let mut remaining = text_width;
            for (category, text) in highlights.segments(content) {
                if remaining == 0 {
                    break;
                }
                let visible: String = text.chars().take(remaining).collect();
                remaining -= visible.chars().count();
                print_styled(stdout, theme.style_for(category), theme, &visible)?;
            }

            queue!(stdout, SetBackgroundColor(theme.background.to_crossterm()))?;
            queue!(stdout, Print(" ".repeat(remaining)))?;
        }

        Ok(())
    }

    fn render_status_line(
        &self,
        stdout: &mut impl Write,
        editor: &Editor,
        theme: &Theme,
    ) -> io::Result<()> {
        let status_row = self.height.saturating_sub(1);
        queue!(stdout, MoveTo(0, status_row))?;

        if let Some(ref msg) = editor.message {
            queue!(stdout, SetBackgroundColor(theme.background.to_crossterm()))?;
            queue!(stdout, SetForegroundColor(theme.warning.to_crossterm()))?;
            queue!(stdout, Clear(ClearType::CurrentLine))?;
            queue!(stdout, Print(msg))?;
            return Ok(());
        }

        queue!(stdout, SetBackgroundColor(theme.status_bar_bg.to_crossterm()))?;
        queue!(stdout, SetForegroundColor(theme.status_bar_fg.to_crossterm()))?;

        let status = status_text(editor, self.width as usize);
        queue!(stdout, Print(status))?;
        queue!(stdout, SetBackgroundColor(theme.background.to_crossterm()))?;
        Ok(())
    }
}

/// Status bar: file name and dirty marker on the left, line info on the right
pub fn status_text(editor: &Editor, width: usize) -> String {
    let filename = editor
        .buffer
        .path()
        .and_then(|p| p.file_name())
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "[Babu suna]".to_string());
    let dirty = if editor.buffer.is_dirty() { " [+]" } else { "" };

    let left = format!(" {}{} ", filename, dirty);
    let right = format!(" {} ", editor.line_info());
    let padding = width.saturating_sub(left.chars().count() + right.chars().count());

    format!("{}{}{}", left, " ".repeat(padding), right)
        .chars()
        .take(width)
        .collect()
}

fn print_styled(out: &mut impl Write, style: Style, theme: &Theme, text: &str) -> io::Result<()> {
    queue!(out, SetForegroundColor(style.fg.to_crossterm()))?;
    if style.bold {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    if style.italic {
        queue!(out, SetAttribute(Attribute::Italic))?;
    }
    queue!(out, Print(text))?;
    if style.bold || style.italic {
        // Reset clears colors too
        queue!(out, SetAttribute(Attribute::Reset))?;
        queue!(out, SetBackgroundColor(theme.background.to_crossterm()))?;
    }
    Ok(())
}

/// Write `source` to `out` colored by category, for non-interactive output
pub fn write_highlighted(out: &mut impl Write, source: &str, theme: &Theme) -> io::Result<()> {
    for token in crate::syntax::scan(source) {
        if token.category == Category::Plain {
            queue!(out, Print(token.text))?;
            continue;
        }
        let style = theme.style_for(token.category);
        queue!(out, SetForegroundColor(style.fg.to_crossterm()))?;
        if style.bold {
            queue!(out, SetAttribute(Attribute::Bold))?;
        }
        if style.italic {
            queue!(out, SetAttribute(Attribute::Italic))?;
        }
        queue!(out, Print(token.text), SetAttribute(Attribute::Reset))?;
    }
    queue!(out, Print("\n"))?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::editor::Buffer;

    fn strip_ansi(s: &str) -> String {
        let mut out = String::new();
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            if c == '\u{1b}' {
                // Escape sequences end at their first letter after '['
                chars.next();
                for c in chars.by_ref() {
                    if c.is_ascii_alphabetic() {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    #[test]
    fn highlighted_output_keeps_source_text() {
        let source = "idan x >= 5 {\n  rubuta \"ƙ\" # c\n}";
        let mut out = Vec::new();
        write_highlighted(&mut out, source, &Theme::nord()).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains('\u{1b}'));
        assert_eq!(strip_ansi(&text), format!("{source}\n"));
    }

    fn rendered_rows(text: &str) -> String {
        let editor = Editor::with_buffer(Buffer::from_text(text), &Settings::default());
        let renderer = Renderer {
            width: 20,
            height: 4,
            show_line_numbers: true,
        };
        let mut out = Vec::new();
        renderer.render_text(&mut out, &editor, &Theme::nord()).unwrap();
        strip_ansi(&String::from_utf8(out).unwrap())
    }

    #[test]
    fn crlf_lines_print_without_carriage_return() {
        let rows = rendered_rows("fara\r\nƙare\r\n");
        assert!(!rows.contains('\r'));
        assert!(rows.contains("  1 fara "));
        assert!(rows.contains("  2 ƙare "));
    }

    #[test]
    fn unusual_line_breaks_render_each_line() {
        let rows = rendered_rows("\rƙa\u{2028}1");
        assert!(rows.contains("  2 ƙa "));
        assert!(rows.contains("  3 1 "));
        assert!(!rows.contains('\u{2028}'));
    }

    #[test]
    fn status_shows_name_and_line() {
        let editor = Editor::with_buffer(Buffer::from_text("fara\nƙare"), &Settings::default());
        let status = status_text(&editor, 30);
        assert_eq!(status.chars().count(), 30);
        assert!(status.starts_with(" [Babu suna] "));
        assert!(status.ends_with(" Layi: 1 "));
    }

    #[test]
    fn status_truncates_to_width() {
        let editor = Editor::with_buffer(Buffer::new(), &Settings::default());
        assert_eq!(status_text(&editor, 5).chars().count(), 5);
    }
}
