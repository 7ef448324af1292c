use ropey::Rope;
use std::{
    fs::File,
    io::{self, BufReader},
    path::{Path, PathBuf},
};

use crate::syntax::is_line_break;

/// The text being edited, backed by a rope
pub struct Buffer {
    text: Rope,
    filepath: Option<PathBuf>,
    dirty: bool,
}

impl Buffer {
    pub fn new() -> Self {
        Self::from_text("")
    }

    /// Open a file; a path that does not exist yet becomes an empty buffer
    pub fn from_file(path: PathBuf) -> io::Result<Self> {
        let text = match File::open(&path) {
            Ok(file) => Rope::from_reader(BufReader::new(file))?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => Rope::new(),
            Err(e) => return Err(e),
        };
        Ok(Self {
            text,
            filepath: Some(path),
            dirty: false,
        })
    }

    pub fn from_text(s: &str) -> Self {
        Self {
            text: Rope::from_str(s),
            filepath: None,
            dirty: false,
        }
    }

    pub fn save(&mut self) -> io::Result<()> {
        if !self.dirty {
            return Ok(());
        }
        let Some(path) = &self.filepath else {
            return Err(io::Error::other("No file path"));
        };
        let mut file = File::create(path)?;
        self.text.write_to(&mut file)?;
        self.dirty = false;
        Ok(())
    }

    pub fn path(&self) -> Option<&Path> {
        self.filepath.as_deref()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Whole buffer contents, as handed to the highlighter
    pub fn contents(&self) -> String {
        self.text.to_string()
    }

    pub fn line_count(&self) -> usize {
        self.text.len_lines()
    }

    pub fn line(&self, idx: usize) -> ropey::RopeSlice<'_> {
        self.text.line(idx)
    }

    /// Length in chars, excluding the line break
    pub fn line_len(&self, idx: usize) -> usize {
        self.text.line(idx).len_chars() - self.line_break_len(idx)
    }

    /// Chars in the break ending line `idx`; `\r\n` counts as one break
    fn line_break_len(&self, idx: usize) -> usize {
        let line = self.text.line(idx);
        let len = line.len_chars();
        let from_end = |n: usize| len.checked_sub(n).map(|i| line.char(i));
        match (from_end(2), from_end(1)) {
            (Some('\r'), Some('\n')) => 2,
            (_, Some(c)) if is_line_break(c) => 1,
            _ => 0,
        }
    }

    /// Convert (line, col) to a char index in the rope
    fn line_col_to_char(&self, line: usize, col: usize) -> usize {
        self.text.line_to_char(line) + col
    }

    pub fn insert_char(&mut self, line: usize, col: usize, ch: char) {
        let idx = self.line_col_to_char(line, col);
        self.text.insert_char(idx, ch);
        self.dirty = true;
    }

    pub fn insert_str(&mut self, line: usize, col: usize, s: &str) {
        let idx = self.line_col_to_char(line, col);
        self.text.insert(idx, s);
        self.dirty = true;
    }

    /// Delete the character at the given position; at the end of a line the
    /// whole line break goes
    pub fn delete_char(&mut self, line: usize, col: usize) {
        let idx = self.line_col_to_char(line, col);
        let count = if col >= self.line_len(line) {
            self.line_break_len(line)
        } else {
            1
        };
        if count > 0 && idx + count <= self.text.len_chars() {
            self.text.remove(idx..idx + count);
            self.dirty = true;
        }
    }

    /// Delete the character before the given position (backspace)
    pub fn delete_char_backward(&mut self, line: usize, col: usize) -> bool {
        let idx = self.line_col_to_char(line, col);
        if idx == 0 {
            return false;
        }
        let count = if col == 0 {
            self.line_break_len(line - 1)
        } else {
            1
        };
        self.text.remove(idx - count..idx);
        self.dirty = true;
        true
    }
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new()
    }
}
