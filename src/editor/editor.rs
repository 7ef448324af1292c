use std::{io, path::PathBuf};

use tracing::{debug, info};

use super::Buffer;
use crate::config::Settings;
use crate::syntax::Highlighter;

/// Cursor position in chars: `col` counts characters, not bytes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    pub line: usize,
    pub col: usize,
}

/// A single-buffer editing surface that rehighlights on every change
pub struct Editor {
    pub buffer: Buffer,
    pub cursor: Cursor,
    pub highlighter: Highlighter,
    pub running: bool,
    pub message: Option<String>,
    pub scroll_offset: usize,
    tab_width: usize,
}

impl Editor {
    pub fn new(settings: &Settings) -> Self {
        Self::with_buffer(Buffer::new(), settings)
    }

    pub fn open(path: PathBuf, settings: &Settings) -> io::Result<Self> {
        info!(path = %path.display(), "opening");
        Ok(Self::with_buffer(Buffer::from_file(path)?, settings))
    }

    pub fn with_buffer(buffer: Buffer, settings: &Settings) -> Self {
        let mut editor = Self {
            buffer,
            cursor: Cursor::default(),
            highlighter: Highlighter::new(),
            running: true,
            message: None,
            scroll_offset: 0,
            tab_width: settings.tab_width,
        };
        editor.refresh_highlights();
        editor
    }

    /// Full rescan of the buffer; no incremental diffing
    fn refresh_highlights(&mut self) {
        let source = self.buffer.contents();
        self.highlighter.parse(&source);
    }

    /// Status text for the cursor line, as shown by the playground
    pub fn line_info(&self) -> String {
        format!("Layi: {}", self.cursor.line + 1)
    }

    /// Adjust scroll offset to keep cursor visible within viewport
    pub fn adjust_scroll(&mut self, viewport_height: usize) {
        if self.cursor.line < self.scroll_offset {
            self.scroll_offset = self.cursor.line;
        }
        if viewport_height > 0 && self.cursor.line >= self.scroll_offset + viewport_height {
            self.scroll_offset = self.cursor.line + 1 - viewport_height;
        }
    }

    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
    }

    pub fn clear_message(&mut self) {
        self.message = None;
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn save(&mut self) {
        if !self.buffer.is_dirty() {
            self.set_message("Babu canji");
            return;
        }
        match self.buffer.save() {
            Ok(()) => {
                let name = self
                    .buffer
                    .path()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default();
                info!(path = %name, "saved");
                self.set_message(format!("An ajiye {}", name));
            }
            Err(e) => {
                tracing::warn!(error = %e, "save failed");
                self.set_message(format!("Kuskure: {}", e));
            }
        }
    }

    // Movement

    pub fn move_left(&mut self) {
        if self.cursor.col > 0 {
            self.cursor.col -= 1;
        } else if self.cursor.line > 0 {
            self.cursor.line -= 1;
            self.cursor.col = self.buffer.line_len(self.cursor.line);
        }
    }

    pub fn move_right(&mut self) {
        let line_len = self.buffer.line_len(self.cursor.line);
        if self.cursor.col < line_len {
            self.cursor.col += 1;
        } else if self.cursor.line + 1 < self.buffer.line_count() {
            self.cursor.line += 1;
            self.cursor.col = 0;
        }
    }

    pub fn move_up(&mut self) {
        self.cursor.line = self.cursor.line.saturating_sub(1);
        self.clamp_cursor_col();
    }

    pub fn move_down(&mut self) {
        let last = self.buffer.line_count().saturating_sub(1);
        self.cursor.line = (self.cursor.line + 1).min(last);
        self.clamp_cursor_col();
    }

    pub fn move_to_line_start(&mut self) {
        self.cursor.col = 0;
    }

    pub fn move_to_line_end(&mut self) {
        self.cursor.col = self.buffer.line_len(self.cursor.line);
    }

    fn clamp_cursor_col(&mut self) {
        let line_len = self.buffer.line_len(self.cursor.line);
        self.cursor.col = self.cursor.col.min(line_len);
    }

    // Editing; every change rehighlights the whole buffer

    pub fn insert_char(&mut self, c: char) {
        self.buffer.insert_char(self.cursor.line, self.cursor.col, c);
        self.cursor.col += 1;
        self.refresh_highlights();
    }

    pub fn insert_newline(&mut self) {
        self.buffer.insert_char(self.cursor.line, self.cursor.col, '\n');
        self.cursor.line += 1;
        self.cursor.col = 0;
        self.refresh_highlights();
    }

    /// Tab inserts spaces, never a tab character
    pub fn insert_tab(&mut self) {
        let spaces = " ".repeat(self.tab_width);
        self.buffer.insert_str(self.cursor.line, self.cursor.col, &spaces);
        self.cursor.col += self.tab_width;
        self.refresh_highlights();
    }

    pub fn delete_char_backward(&mut self) {
        let Cursor { line, col } = self.cursor;
        // Measured before the join, while the previous line still ends in '\n'
        let prev_len = if line > 0 {
            self.buffer.line_len(line - 1)
        } else {
            0
        };
        if !self.buffer.delete_char_backward(line, col) {
            return;
        }
        if col > 0 {
            self.cursor.col -= 1;
        } else {
            debug!(line, "joined with previous line");
            self.cursor.line -= 1;
            self.cursor.col = prev_len;
        }
        self.refresh_highlights();
    }

    pub fn delete_char_forward(&mut self) {
        self.buffer.delete_char(self.cursor.line, self.cursor.col);
        self.refresh_highlights();
    }
}
